use capscore_core::{Domain, Shape, parse_shape};

pub fn check(descriptor: &str, domain: Domain) -> anyhow::Result<()> {
    let shape = parse_shape(descriptor, domain)?;
    println!("{}", describe(&shape));
    Ok(())
}

pub fn eval(descriptor: &str, positions: &[f64], domain: Domain) -> anyhow::Result<()> {
    let shape = parse_shape(descriptor, domain)?;
    println!("{}", evaluate_all(&shape, positions));
    Ok(())
}

fn describe(shape: &Shape) -> String {
    let domain = shape.domain();
    let mut out = format!(
        "✓ Valid shape ({} breakpoints, x ∈ [{}, {}], y ∈ [{}, {}])",
        shape.len(),
        domain.min_x(),
        domain.max_x(),
        domain.min_y(),
        domain.max_y(),
    );
    for (i, p) in shape.points().iter().enumerate() {
        out.push_str(&format!("\n  [{i}] x={} y={}", p.x, p.y));
    }
    out
}

fn evaluate_all(shape: &Shape, positions: &[f64]) -> String {
    positions
        .iter()
        .map(|&p| format!("f({p}) = {}", shape.evaluate(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_breakpoints() {
        let shape = parse_shape("0=10,100=0", Domain::integer()).unwrap();
        assert_eq!(
            describe(&shape),
            "✓ Valid shape (2 breakpoints, x ∈ [0, 100], y ∈ [0, 10])\n  [0] x=0 y=10\n  [1] x=100 y=0"
        );
    }

    #[test]
    fn evaluate_all_formats_each_position() {
        let shape = parse_shape("0=10,100=0", Domain::integer()).unwrap();
        assert_eq!(
            evaluate_all(&shape, &[-5.0, 75.0, 100.0]),
            "f(-5) = 10\nf(75) = 2.5\nf(100) = 0"
        );
    }

    #[test]
    fn check_rejects_invalid_descriptor() {
        let err = check("0.3=0.4,0.0=0.1", Domain::Normalized).unwrap_err();
        assert!(err.to_string().contains("x[0]==0.3 >= x[1]==0"));
    }
}

//! Textual shape descriptors: `x1=y1,x2=y2,...`.
//!
//! Coordinates are decimal numbers, pairs are separated by `,` and the two
//! coordinates of a pair by `=`. Whitespace is not accepted anywhere. Pairs
//! are taken in the order written; they are not sorted before validation.
//!
//! [`parse_shape`] reports failures as values. [`must_parse_shape`] is for
//! configuration time only: a scheduler must not start with a curve it could
//! not validate, so it panics instead.

use tracing::info;

use crate::domain::Domain;
use crate::error::ParseError;
use crate::shape::{Point, Shape};

/// Parse a descriptor into a shape over `domain`.
pub fn parse_shape(descriptor: &str, domain: Domain) -> Result<Shape, ParseError> {
    let malformed = || ParseError::Malformed {
        descriptor: descriptor.to_string(),
    };

    let points = descriptor
        .split(',')
        .map(|pair| {
            let (x, y) = pair.split_once('=').ok_or_else(malformed)?;
            let x: f64 = x.parse().map_err(|_| malformed())?;
            let y: f64 = y.parse().map_err(|_| malformed())?;
            Ok(Point::new(x, y))
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    let shape = Shape::new(domain, &points).map_err(|source| ParseError::InvalidShape {
        descriptor: descriptor.to_string(),
        source,
    })?;

    info!(shape = %shape, ?domain, "parsed scoring function shape");
    Ok(shape)
}

/// Parse a descriptor, panicking with the [`ParseError`] message on failure.
///
/// Only call this while assembling configuration. Scoring paths never panic.
pub fn must_parse_shape(descriptor: &str, domain: Domain) -> Shape {
    match parse_shape(descriptor, domain) {
        Ok(shape) => shape,
        Err(e) => panic!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;

    #[test]
    fn parses_single_pair() {
        let s = parse_shape("0.0=0.1", Domain::Normalized).unwrap();
        assert_eq!(s.points(), &[Point::new(0.0, 0.1)]);
    }

    #[test]
    fn parses_two_pairs() {
        let s = parse_shape("0.0=0.1,0.3=0.4", Domain::Normalized).unwrap();
        assert_eq!(s.points(), &[Point::new(0.0, 0.1), Point::new(0.3, 0.4)]);
    }

    #[test]
    fn integer_literals_are_decimal() {
        let a = parse_shape("0=0.1,0.3=0.4", Domain::Normalized).unwrap();
        let b = parse_shape("0.0=0.1,0.3=0.4", Domain::Normalized).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn integer_domain_descriptor() {
        let s = parse_shape("0=10,50=8,100=0", Domain::integer()).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.evaluate(75.0), 4.0);
    }

    #[test]
    fn out_of_order_pairs_fail_validation() {
        let err = parse_shape("0.3=0.4,0.0=0.1", Domain::Normalized).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidShape {
                descriptor: "0.3=0.4,0.0=0.1".to_string(),
                source: ShapeError::NotIncreasing {
                    previous_index: 0,
                    index: 1,
                    previous: 0.3,
                    value: 0.0,
                },
            }
        );
    }

    #[test]
    fn malformed_descriptors() {
        for desc in ["", "blah", "0.0", "0.0=0.1,0.3=x", "0.0=0.1=0.2", "0.0=0.1,", " 0.0=0.1", "0.0 =0.1"] {
            let err = parse_shape(desc, Domain::Normalized).unwrap_err();
            assert_eq!(
                err,
                ParseError::Malformed {
                    descriptor: desc.to_string()
                },
                "descriptor {desc:?}"
            );
        }
    }

    #[test]
    fn out_of_domain_value() {
        let err = parse_shape("0=0,1.5=1", Domain::Normalized).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidShape {
                source: ShapeError::XOutOfRange { index: 1, .. },
                ..
            }
        ));
    }

    #[test]
    fn fractional_integer_descriptor_fails_validation() {
        let err = parse_shape("0=10,33.5=0", Domain::integer()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidShape {
                source: ShapeError::NotIntegral { axis: 'x', index: 1, .. },
                ..
            }
        ));
    }

    #[test]
    fn must_parse_returns_valid_shape() {
        let s = must_parse_shape("0=10,100=0", Domain::integer());
        assert_eq!(s, Shape::default());
    }

    #[test]
    #[should_panic(expected = "cannot parse function shape 'blah'")]
    fn must_parse_panics_on_malformed() {
        must_parse_shape("blah", Domain::Normalized);
    }

    #[test]
    #[should_panic(
        expected = "cannot parse function shape '0.3=0.4,0.0=0.1'; err='values in x must be strictly increasing: x[0]==0.3 >= x[1]==0'"
    )]
    fn must_parse_panics_on_invalid_shape() {
        must_parse_shape("0.3=0.4,0.0=0.1", Domain::Normalized);
    }
}

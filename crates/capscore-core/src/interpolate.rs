//! Broken-linear evaluation of a [`Shape`].
//!
//! For breakpoints `x[0..n]`, `y[0..n]` the function is:
//!
//! ```text
//! f(p) = y[0]                                   p <= x[0]
//! f(p) = y[n-1]                                 p >= x[n-1]
//! f(p) = y[i]                                   p == x[i]
//! f(p) = y[i-1] + (y[i]-y[i-1]) * (p-x[i-1]) / (x[i]-x[i-1])
//!                                               x[i-1] < p < x[i]
//! ```
//!
//! `y` is not assumed to be monotonic.

use crate::shape::{Point, Shape};

impl Shape {
    /// Evaluate the curve at `p`.
    ///
    /// Pure and allocation-free; O(log n) in the number of breakpoints.
    /// A NaN position clamps to the left edge.
    pub fn evaluate(&self, p: f64) -> f64 {
        interpolate(self.points(), p)
    }
}

fn interpolate(points: &[Point], p: f64) -> f64 {
    // First breakpoint with x >= p.
    let i = points.partition_point(|pt| pt.x < p);

    if i == 0 {
        return points[0].y;
    }
    let Some(right) = points.get(i) else {
        return points[points.len() - 1].y;
    };
    if right.x == p {
        return right.y;
    }

    let left = points[i - 1];
    left.y + (right.y - left.y) * (p - left.x) / (right.x - left.x)
}

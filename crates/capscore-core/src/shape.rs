//! Validated piecewise-linear scoring function shapes.
//!
//! A [`Shape`] is an ordered list of breakpoints `(x, y)` with strictly
//! increasing `x`, every coordinate inside the shape's [`Domain`]. Shapes are
//! built once at configuration time and are immutable afterwards, so a single
//! instance can be shared (typically as `Arc<Shape>`) by any number of
//! concurrent scoring calls.

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::{ShapeError, ShapeResult};

/// One breakpoint of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An immutable, validated broken-linear curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    domain: Domain,
    points: Box<[Point]>,
}

impl Shape {
    /// Build a shape from breakpoints, copying them.
    ///
    /// Fails if `points` is empty, `x` is not strictly increasing, any
    /// coordinate falls outside `domain`, or an integer-domain coordinate
    /// has a fractional part.
    pub fn new(domain: Domain, points: &[Point]) -> ShapeResult<Self> {
        if points.is_empty() {
            return Err(ShapeError::Empty);
        }

        for (i, pair) in points.windows(2).enumerate() {
            if pair[0].x >= pair[1].x {
                return Err(ShapeError::NotIncreasing {
                    previous_index: i,
                    index: i + 1,
                    previous: pair[0].x,
                    value: pair[1].x,
                });
            }
        }

        for (index, p) in points.iter().enumerate() {
            if !domain.contains_x(p.x) {
                return Err(ShapeError::XOutOfRange {
                    index,
                    value: p.x,
                    min: domain.min_x(),
                    max: domain.max_x(),
                });
            }
            if !domain.contains_y(p.y) {
                return Err(ShapeError::YOutOfRange {
                    index,
                    value: p.y,
                    min: domain.min_y(),
                    max: domain.max_y(),
                });
            }
            if domain.is_integral() {
                for (axis, value) in [('x', p.x), ('y', p.y)] {
                    if value.fract() != 0.0 {
                        return Err(ShapeError::NotIntegral { axis, index, value });
                    }
                }
            }
        }

        Ok(Self {
            domain,
            points: points.into(),
        })
    }

    /// Wrap breakpoints already known to satisfy the invariants.
    pub(crate) fn from_validated(domain: Domain, points: Vec<Point>) -> Self {
        Self {
            domain,
            points: points.into_boxed_slice(),
        }
    }

    /// Build a shape from parallel coordinate slices of equal length.
    pub fn from_xy(domain: Domain, x: &[f64], y: &[f64]) -> ShapeResult<Self> {
        if x.len() != y.len() {
            return Err(ShapeError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let points: Vec<Point> = x.iter().zip(y).map(|(&x, &y)| Point::new(x, y)).collect();
        Self::new(domain, &points)
    }

    /// Build an integer-domain shape (`x ∈ [0, 100]`, `y ∈ [0, max_priority]`).
    pub fn from_integer(x: &[i64], y: &[i64], max_priority: u32) -> ShapeResult<Self> {
        let x: Vec<f64> = x.iter().map(|&v| v as f64).collect();
        let y: Vec<f64> = y.iter().map(|&v| v as f64).collect();
        Self::from_xy(Domain::Integer { max_priority }, &x, &y)
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of breakpoints (always at least one).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }
}

impl std::fmt::Display for Shape {
    /// Renders the shape in descriptor form, `x1=y1,x2=y2,...`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", p.x, p.y)?;
        }
        Ok(())
    }
}

//! Coordinate domains for scoring function shapes.

use serde::{Deserialize, Serialize};

/// Upper bound of node priority scores.
pub const MAX_PRIORITY: u32 = 10;

/// Upper bound of the integer domain's x axis (utilization percent).
pub const INTEGER_MAX_X: f64 = 100.0;

/// Bounds that every breakpoint of a shape must lie within.
///
/// The domain is fixed when a shape is constructed. Interpolation works on
/// `f64` in the domain's own units for both variants. Integer-domain
/// coordinates must be whole numbers, so they are held exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Domain {
    /// `x ∈ [0, 100]`, `y ∈ [0, max_priority]`.
    Integer { max_priority: u32 },
    /// `x ∈ [0, 1]`, `y ∈ [0, 1]`.
    Normalized,
}

impl Domain {
    /// Integer domain whose y axis tops out at [`MAX_PRIORITY`].
    pub const fn integer() -> Self {
        Domain::Integer {
            max_priority: MAX_PRIORITY,
        }
    }

    pub fn min_x(&self) -> f64 {
        0.0
    }

    pub fn max_x(&self) -> f64 {
        match self {
            Domain::Integer { .. } => INTEGER_MAX_X,
            Domain::Normalized => 1.0,
        }
    }

    pub fn min_y(&self) -> f64 {
        0.0
    }

    pub fn max_y(&self) -> f64 {
        match self {
            Domain::Integer { max_priority } => f64::from(*max_priority),
            Domain::Normalized => 1.0,
        }
    }

    /// Whether coordinates must be whole numbers.
    pub fn is_integral(&self) -> bool {
        matches!(self, Domain::Integer { .. })
    }

    /// Whether `x` lies within `[min_x, max_x]`. Always false for NaN.
    pub fn contains_x(&self, x: f64) -> bool {
        (self.min_x()..=self.max_x()).contains(&x)
    }

    /// Whether `y` lies within `[min_y, max_y]`. Always false for NaN.
    pub fn contains_y(&self, y: f64) -> bool {
        (self.min_y()..=self.max_y()).contains(&y)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain::integer()
    }
}

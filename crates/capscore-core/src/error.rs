//! Shape construction and descriptor parsing errors.

use thiserror::Error;

/// Reasons a set of breakpoints cannot form a valid [`Shape`](crate::Shape).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("length of x ({x_len}) does not match length of y ({y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("shape must contain at least one breakpoint")]
    Empty,

    #[error("values in x must be strictly increasing: x[{previous_index}]=={previous} >= x[{index}]=={value}")]
    NotIncreasing {
        previous_index: usize,
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("x[{index}]=={value} is outside the domain [{min}, {max}]")]
    XOutOfRange {
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("y[{index}]=={value} is outside the domain [{min}, {max}]")]
    YOutOfRange {
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{axis}[{index}]=={value} must be a whole number in the integer domain")]
    NotIntegral {
        axis: char,
        index: usize,
        value: f64,
    },
}

/// Failures of the textual `x1=y1,x2=y2,...` descriptor path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A token is not an `x=y` pair of decimal numbers.
    #[error("cannot parse function shape '{descriptor}'")]
    Malformed { descriptor: String },

    /// The descriptor parsed but the breakpoints are not a valid shape.
    #[error("cannot parse function shape '{descriptor}'; err='{source}'")]
    InvalidShape {
        descriptor: String,
        #[source]
        source: ShapeError,
    },
}

pub type ShapeResult<T> = Result<T, ShapeError>;

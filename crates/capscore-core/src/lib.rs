//! capscore-core — scoring function shapes.
//!
//! A scoring function shape is a validated broken-linear curve that maps a
//! utilization position to a priority score. This crate owns everything about
//! the curve itself; turning node resources into positions and positions into
//! node scores lives in `capscore-placement`.
//!
//! # Components
//!
//! - **`domain`** — coordinate bounds (integer `[0,100]→[0,max_priority]` or normalized `[0,1]→[0,1]`)
//! - **`shape`** — validated, immutable breakpoints
//! - **`interpolate`** — evaluation of a shape at any position
//! - **`preference`** — built-in least/most-utilized curves
//! - **`parse`** — `x1=y1,x2=y2,...` descriptors

pub mod domain;
pub mod error;
pub mod interpolate;
pub mod parse;
pub mod preference;
pub mod shape;

pub use domain::{Domain, INTEGER_MAX_X, MAX_PRIORITY};
pub use error::{ParseError, ShapeError, ShapeResult};
pub use parse::{must_parse_shape, parse_shape};
pub use preference::Preference;
pub use shape::{Point, Shape};

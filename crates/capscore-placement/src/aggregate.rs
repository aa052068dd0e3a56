//! Combining per-resource scores into one node score.

use capscore_core::Domain;

/// Resolution the scaled mean is snapped to before the final rounding.
pub const SNAP_SCALE: f64 = 1e9;

/// Equal-weight mean of per-resource scores, scaled to `[0, max_priority]`.
///
/// Scores arrive in the shape's y units. The mean is converted to priority
/// units by `max_priority / domain.max_y()` and rounded half away from zero.
/// Rounding happens here and nowhere earlier.
///
/// Before rounding, the scaled mean is snapped to [`SNAP_SCALE`] so that
/// `f64` error from the curve (`0.7 + 0.6 == 1.2999999999999998`) cannot move
/// an exact `.5` to the other side of the rounding boundary. Integer and
/// normalized curves describing the same function therefore score alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeScoreAggregator {
    max_y: f64,
    max_priority: u32,
}

impl NodeScoreAggregator {
    pub fn new(domain: Domain, max_priority: u32) -> Self {
        Self {
            max_y: domain.max_y(),
            max_priority,
        }
    }

    pub fn max_priority(&self) -> u32 {
        self.max_priority
    }

    /// Combine per-resource scores. No scores, or a degenerate domain whose
    /// y axis is a single point, yields `0`.
    pub fn combine(&self, scores: &[f64]) -> i64 {
        if scores.is_empty() || self.max_y <= 0.0 {
            return 0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        let scaled = mean * f64::from(self.max_priority) / self.max_y;
        let priority = ((scaled * SNAP_SCALE).round() / SNAP_SCALE).round();
        priority.clamp(0.0, f64::from(self.max_priority)) as i64
    }
}

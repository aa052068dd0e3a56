//! Per-resource scoring.
//!
//! A resource dimension's `(requested, capacity)` pair becomes a utilization
//! position on the shape's x axis, which the shape then maps to a score. The
//! position always grows with utilization; whether that is good or bad for a
//! node is decided by the shape's `y` values alone.

use std::sync::Arc;

use capscore_core::{Domain, Shape};
use tracing::debug;

/// Position of `requested / capacity` on `domain`'s x axis.
///
/// Zero capacity and over-commitment (`requested > capacity`) both saturate
/// to `domain.max_x()`, so the result is always finite.
pub fn utilization_position(requested: u64, capacity: u64, domain: Domain) -> f64 {
    if capacity == 0 || requested > capacity {
        debug!(requested, capacity, "resource saturated");
        return domain.max_x();
    }
    requested as f64 * domain.max_x() / capacity as f64
}

/// Scores one resource dimension against a shared shape.
#[derive(Debug, Clone)]
pub struct ResourceScorer {
    shape: Arc<Shape>,
}

impl ResourceScorer {
    pub fn new(shape: Arc<Shape>) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Score in the shape's y units.
    pub fn score(&self, requested: u64, capacity: u64) -> f64 {
        let position = utilization_position(requested, capacity, self.shape.domain());
        self.shape.evaluate(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capscore_core::Preference;

    fn least(domain: Domain) -> ResourceScorer {
        ResourceScorer::new(Arc::new(Preference::LeastUtilized.shape(domain)))
    }

    fn most(domain: Domain) -> ResourceScorer {
        ResourceScorer::new(Arc::new(Preference::MostUtilized.shape(domain)))
    }

    #[test]
    fn position_integer_domain() {
        let d = Domain::integer();
        assert_eq!(utilization_position(0, 4000, d), 0.0);
        assert_eq!(utilization_position(3000, 4000, d), 75.0);
        assert_eq!(utilization_position(3000, 6000, d), 50.0);
        assert_eq!(utilization_position(4000, 4000, d), 100.0);
    }

    #[test]
    fn position_normalized_domain() {
        let d = Domain::Normalized;
        assert_eq!(utilization_position(3000, 4000, d), 0.75);
        assert_eq!(utilization_position(5000, 10_000, d), 0.5);
    }

    #[test]
    fn zero_capacity_saturates() {
        assert_eq!(utilization_position(0, 0, Domain::integer()), 100.0);
        assert_eq!(utilization_position(5, 0, Domain::Normalized), 1.0);
    }

    #[test]
    fn over_commitment_saturates() {
        assert_eq!(utilization_position(5000, 4000, Domain::integer()), 100.0);
        assert_eq!(least(Domain::integer()).score(5000, 4000), 0.0);
        assert_eq!(most(Domain::integer()).score(5000, 4000), 10.0);
    }

    #[test]
    fn huge_amounts_stay_finite() {
        let p = utilization_position(u64::MAX - 1, u64::MAX, Domain::Normalized);
        assert!(p.is_finite());
        assert!(p <= 1.0);
    }

    #[test]
    fn preference_is_carried_by_shape_only() {
        for domain in [Domain::integer(), Domain::Normalized] {
            let l = least(domain);
            let m = most(domain);
            // Same position, mirrored curves.
            assert_eq!(l.score(3000, 4000) + m.score(3000, 4000), domain.max_y());
            assert!(l.score(1000, 4000) > l.score(3000, 4000));
            assert!(m.score(1000, 4000) < m.score(3000, 4000));
        }
    }

    #[test]
    fn least_utilized_scores() {
        let s = least(Domain::integer());
        assert_eq!(s.score(0, 4000), 10.0);
        assert_eq!(s.score(3000, 4000), 2.5);
        assert_eq!(s.score(5000, 10_000), 5.0);
    }
}

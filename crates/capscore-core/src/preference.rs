//! Built-in curves for the two utilization preferences.
//!
//! Scorers never branch on preference. The preference only decides which
//! `y` values the default curve carries: falling `y` favours idle nodes,
//! rising `y` favours busy ones.

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::shape::{Point, Shape};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preference {
    /// Spread workloads: an idle node scores `max_y`, a full one `0`.
    #[default]
    LeastUtilized,
    /// Pack workloads: a full node scores `max_y`, an idle one `0`.
    MostUtilized,
}

impl Preference {
    /// Two-point curve across the whole domain for this preference.
    pub fn shape(self, domain: Domain) -> Shape {
        let (lo, hi) = (domain.min_y(), domain.max_y());
        let (start, end) = match self {
            Preference::LeastUtilized => (hi, lo),
            Preference::MostUtilized => (lo, hi),
        };
        // Domain corners always validate.
        Shape::from_validated(
            domain,
            vec![
                Point::new(domain.min_x(), start),
                Point::new(domain.max_x(), end),
            ],
        )
    }
}

impl std::str::FromStr for Preference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "least-utilized" => Ok(Preference::LeastUtilized),
            "most-utilized" => Ok(Preference::MostUtilized),
            other => Err(format!(
                "unknown preference '{other}' (expected least-utilized or most-utilized)"
            )),
        }
    }
}

impl Default for Shape {
    /// Least-utilized-preferred in the integer domain: `x=[0,100]`, `y=[10,0]`.
    fn default() -> Self {
        Preference::LeastUtilized.shape(Domain::integer())
    }
}

//! Scoring configuration (`[scoring]` table of a TOML file).
//!
//! ```toml
//! [scoring]
//! domain = "integer"            # or "normalized"
//! max_priority = 10
//! preference = "least-utilized" # or "most-utilized"; ignored when `shape` is set
//! shape = "0=10,100=0"
//! ```
//!
//! Every key is optional. [`ScoringConfig::build`] is the single place a
//! shape is constructed; an invalid shape aborts configuration.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use capscore_core::{Domain, MAX_PRIORITY, Preference, parse_shape};
use serde::{Deserialize, Serialize};

use crate::priority::RequestedToCapacityRatio;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub scoring: ScoringSection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainKind {
    #[default]
    Integer,
    Normalized,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringSection {
    pub domain: DomainKind,
    /// Upper bound of node scores, and of `y` in the integer domain.
    pub max_priority: u32,
    pub preference: Preference,
    /// Shape descriptor, `x1=y1,x2=y2,...`.
    pub shape: Option<String>,
}

impl Default for ScoringSection {
    fn default() -> Self {
        Self {
            domain: DomainKind::Integer,
            max_priority: MAX_PRIORITY,
            preference: Preference::LeastUtilized,
            shape: None,
        }
    }
}

impl ScoringSection {
    pub fn domain(&self) -> Domain {
        match self.domain {
            DomainKind::Integer => Domain::Integer {
                max_priority: self.max_priority,
            },
            DomainKind::Normalized => Domain::Normalized,
        }
    }
}

impl ScoringConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading scoring config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing scoring config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Construct the shape and the priority that scores with it.
    pub fn build(&self) -> anyhow::Result<RequestedToCapacityRatio> {
        let section = &self.scoring;
        let domain = section.domain();
        let shape = match &section.shape {
            Some(descriptor) => parse_shape(descriptor, domain).context("invalid [scoring].shape")?,
            None => section.preference.shape(domain),
        };
        Ok(RequestedToCapacityRatio::with_max_priority(
            Arc::new(shape),
            section.max_priority,
        ))
    }
}

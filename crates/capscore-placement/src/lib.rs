//! capscore node scoring — requested-to-capacity ratio priority.
//!
//! Ranks candidate nodes for a pending workload by comparing what each node
//! would have requested after placement with its allocatable capacity. This
//! crate does not filter nodes, mutate cluster state, or perform I/O beyond
//! reading its own configuration file.
//!
//! # Components
//!
//! - **`resource`** — CPU/memory amounts and per-node inventory
//! - **`scorer`** — utilization position and per-resource score
//! - **`aggregate`** — per-resource scores → one node score
//! - **`priority`** — the scoring entry point, parallel prioritization, ranking
//! - **`config`** — `[scoring]` TOML configuration and composition root

pub mod aggregate;
pub mod config;
pub mod priority;
pub mod resource;
pub mod scorer;

pub use aggregate::NodeScoreAggregator;
pub use config::{DomainKind, ScoringConfig, ScoringSection};
pub use priority::{HostPriority, NodeScorer, RequestedToCapacityRatio, prioritize, rank};
pub use resource::{NodeInfo, Resource, VolumeRequest};
pub use scorer::{ResourceScorer, utilization_position};

//! Requested-to-capacity ratio priority — the per-node scoring entry point.
//!
//! For every candidate node the CPU and memory dimensions are scored through
//! the configured shape and averaged into one priority in `[0, max_priority]`.
//! Scoring is pure: the only state is the immutable shape, shared by `Arc`,
//! so a single priority can score any number of nodes concurrently.

use std::sync::Arc;

use capscore_core::{MAX_PRIORITY, Shape};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::NodeScoreAggregator;
use crate::resource::{NodeInfo, Resource, VolumeRequest};
use crate::scorer::ResourceScorer;

/// Score of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostPriority {
    pub host: String,
    pub score: i64,
}

/// A per-node scoring function as invoked by the host scheduler.
pub trait NodeScorer: Send + Sync {
    fn name(&self) -> &str;

    /// Score `node` for a workload requesting `workload`.
    ///
    /// The node's volume counts are handed to the scorer with the rest of
    /// [`NodeInfo`]; [`RequestedToCapacityRatio`] does not currently let them
    /// affect the score.
    fn score_node(&self, workload: &Resource, node: &NodeInfo) -> HostPriority;
}

/// Scores nodes by how their requested resources compare to allocatable capacity.
#[derive(Debug, Clone)]
pub struct RequestedToCapacityRatio {
    scorer: ResourceScorer,
    aggregator: NodeScoreAggregator,
}

impl RequestedToCapacityRatio {
    pub const NAME: &'static str = "RequestedToCapacityRatioResourceAllocationPriority";

    /// Score into `[0, MAX_PRIORITY]`.
    pub fn new(shape: Arc<Shape>) -> Self {
        Self::with_max_priority(shape, MAX_PRIORITY)
    }

    pub fn with_max_priority(shape: Arc<Shape>, max_priority: u32) -> Self {
        let aggregator = NodeScoreAggregator::new(shape.domain(), max_priority);
        Self {
            scorer: ResourceScorer::new(shape),
            aggregator,
        }
    }

    pub fn shape(&self) -> &Shape {
        self.scorer.shape()
    }

    pub fn max_priority(&self) -> u32 {
        self.aggregator.max_priority()
    }

    /// Score a node from its total `requested` amounts and `allocatable` capacity.
    ///
    /// `volumes` is part of the scoring signature but does not currently
    /// affect the result; only CPU and memory are scored.
    pub fn score(&self, requested: &Resource, allocatable: &Resource, volumes: VolumeRequest) -> i64 {
        let (_, _, score) = self.score_dimensions(requested, allocatable, volumes);
        score
    }

    fn score_dimensions(
        &self,
        requested: &Resource,
        allocatable: &Resource,
        _volumes: VolumeRequest,
    ) -> (f64, f64, i64) {
        let cpu = self.scorer.score(requested.milli_cpu, allocatable.milli_cpu);
        let memory = self.scorer.score(requested.memory, allocatable.memory);
        (cpu, memory, self.aggregator.combine(&[cpu, memory]))
    }
}

impl NodeScorer for RequestedToCapacityRatio {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn score_node(&self, workload: &Resource, node: &NodeInfo) -> HostPriority {
        let requested = node.requested_with(workload);
        let (cpu_score, memory_score, score) =
            self.score_dimensions(&requested, &node.allocatable, node.volume_request());
        debug!(
            node = %node.name,
            cpu_score,
            memory_score,
            score,
            "scored node"
        );
        HostPriority {
            host: node.name.clone(),
            score,
        }
    }
}

/// Score every node in parallel. Output order matches `nodes`.
///
/// Volume counts on each [`NodeInfo`] are passed through to the scorer and,
/// for [`RequestedToCapacityRatio`], do not change the result.
pub fn prioritize<S>(scorer: &S, workload: &Resource, nodes: &[NodeInfo]) -> Vec<HostPriority>
where
    S: NodeScorer + ?Sized,
{
    nodes
        .par_iter()
        .map(|node| scorer.score_node(workload, node))
        .collect()
}

/// Sort priorities best-first; equal scores are ordered by host name.
pub fn rank(mut priorities: Vec<HostPriority>) -> Vec<HostPriority> {
    priorities.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.host.cmp(&b.host)));
    priorities
}

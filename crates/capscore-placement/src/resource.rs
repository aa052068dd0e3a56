//! Resource amounts and per-node inventory as seen by the scorer.
//!
//! The scorer does not fetch or cache cluster state. Callers build a
//! [`NodeInfo`] per candidate node from whatever inventory they keep, with
//! the requests of already-placed workloads summed into `requested`.

use serde::{Deserialize, Serialize};

/// CPU and memory amounts for one workload or one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// CPU in millicores.
    #[serde(default)]
    pub milli_cpu: u64,
    /// Memory in bytes.
    #[serde(default)]
    pub memory: u64,
}

impl Resource {
    pub const fn new(milli_cpu: u64, memory: u64) -> Self {
        Self { milli_cpu, memory }
    }

    /// Component-wise sum, saturating at `u64::MAX`.
    pub fn saturating_add(self, other: Resource) -> Resource {
        Resource {
            milli_cpu: self.milli_cpu.saturating_add(other.milli_cpu),
            memory: self.memory.saturating_add(other.memory),
        }
    }
}

impl std::iter::Sum for Resource {
    fn sum<I: Iterator<Item = Resource>>(iter: I) -> Self {
        iter.fold(Resource::default(), Resource::saturating_add)
    }
}

/// Volume-count inputs of the scoring call.
///
/// Accepted so callers can pass the full scoring signature. They do not
/// currently influence the score of [`RequestedToCapacityRatio`](crate::RequestedToCapacityRatio).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRequest {
    pub include_volumes: bool,
    pub requested_volumes: u32,
    pub allocatable_volumes: u32,
}

/// A candidate node: its allocatable capacity plus what is already placed on it.
///
/// Volume counts are carried for the scoring signature; they do not
/// currently affect the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub name: String,
    pub allocatable: Resource,
    /// Sum of requests of workloads already placed on the node.
    #[serde(default)]
    pub requested: Resource,
    #[serde(default)]
    pub allocatable_volumes: u32,
    #[serde(default)]
    pub requested_volumes: u32,
}

impl NodeInfo {
    pub fn new(name: impl Into<String>, allocatable: Resource) -> Self {
        Self {
            name: name.into(),
            allocatable,
            requested: Resource::default(),
            allocatable_volumes: 0,
            requested_volumes: 0,
        }
    }

    /// Add the requests of already-placed workloads to the node.
    pub fn with_pods(mut self, pods: impl IntoIterator<Item = Resource>) -> Self {
        let placed: Resource = pods.into_iter().sum();
        self.requested = self.requested.saturating_add(placed);
        self
    }

    pub fn with_volumes(mut self, requested: u32, allocatable: u32) -> Self {
        self.requested_volumes = requested;
        self.allocatable_volumes = allocatable;
        self
    }

    /// Volume inputs for the scoring call. Volume scoring is not enabled.
    pub fn volume_request(&self) -> VolumeRequest {
        VolumeRequest {
            include_volumes: false,
            requested_volumes: self.requested_volumes,
            allocatable_volumes: self.allocatable_volumes,
        }
    }

    /// What the node would have requested if `workload` were placed on it.
    pub fn requested_with(&self, workload: &Resource) -> Resource {
        self.requested.saturating_add(*workload)
    }
}

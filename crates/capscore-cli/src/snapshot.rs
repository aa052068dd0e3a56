//! Cluster snapshot files for `capscore score`.
//!
//! ```toml
//! [workload]
//! milli_cpu = 3000
//! memory = 5000
//!
//! [[nodes]]
//! name = "node1"
//! allocatable = { milli_cpu = 4000, memory = 10000 }
//! pods = [{ milli_cpu = 1000, memory = 2000 }]
//! ```

use std::path::Path;

use anyhow::Context;
use capscore_placement::{NodeInfo, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub workload: Resource,
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEntry {
    pub name: String,
    pub allocatable: Resource,
    /// Requests of workloads already placed on the node.
    #[serde(default)]
    pub pods: Vec<Resource>,
    #[serde(default)]
    pub allocatable_volumes: u32,
    #[serde(default)]
    pub requested_volumes: u32,
}

impl ClusterSnapshot {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading cluster snapshot {}", path.display()))?;
        let snapshot: ClusterSnapshot = toml::from_str(&content)
            .with_context(|| format!("parsing cluster snapshot {}", path.display()))?;
        Ok(snapshot)
    }

    pub fn nodes(&self) -> Vec<NodeInfo> {
        self.nodes
            .iter()
            .map(|entry| {
                NodeInfo::new(entry.name.clone(), entry.allocatable)
                    .with_pods(entry.pods.iter().copied())
                    .with_volumes(entry.requested_volumes, entry.allocatable_volumes)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"
[workload]
milli_cpu = 3000
memory = 5000

[[nodes]]
name = "node1"
allocatable = { milli_cpu = 4000, memory = 10000 }

[[nodes]]
name = "node2"
allocatable = { milli_cpu = 6000, memory = 10000 }
pods = [{ milli_cpu = 1000, memory = 2000 }, { milli_cpu = 500 }]
requested_volumes = 2
allocatable_volumes = 16
"#;

    #[test]
    fn parses_nodes_and_pods() {
        let snapshot: ClusterSnapshot = toml::from_str(SNAPSHOT).unwrap();
        assert_eq!(snapshot.workload, Resource::new(3000, 5000));

        let nodes = snapshot.nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].requested, Resource::default());
        assert_eq!(nodes[1].requested, Resource::new(1500, 2000));
        assert_eq!(nodes[1].requested_volumes, 2);
        assert_eq!(nodes[1].allocatable_volumes, 16);
    }

    #[test]
    fn from_file_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cluster.toml");
        std::fs::write(&path, "[[nodes]]\nname = 3\n").unwrap();

        let err = ClusterSnapshot::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("cluster.toml"));
    }
}

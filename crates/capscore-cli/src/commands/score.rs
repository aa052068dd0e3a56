use std::path::Path;

use capscore_placement::{HostPriority, ScoringConfig, prioritize, rank};
use tracing::info;

use crate::snapshot::ClusterSnapshot;

pub fn score(cluster: &Path, config: Option<&Path>, format: &str) -> anyhow::Result<()> {
    let ranked = score_snapshot(cluster, config)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
        _ => {
            println!("{}", format_table(&ranked));
        }
    }

    Ok(())
}

fn score_snapshot(cluster: &Path, config: Option<&Path>) -> anyhow::Result<Vec<HostPriority>> {
    let snapshot = ClusterSnapshot::from_file(cluster)?;
    // The snapshot may carry its own [scoring] table.
    let config = ScoringConfig::from_file(config.unwrap_or(cluster))?;
    let priority = config.build()?;

    let nodes = snapshot.nodes();
    info!(
        nodes = nodes.len(),
        shape = %priority.shape(),
        "scoring cluster snapshot"
    );
    Ok(rank(prioritize(&priority, &snapshot.workload, &nodes)))
}

fn format_table(ranked: &[HostPriority]) -> String {
    let width = ranked
        .iter()
        .map(|h| h.host.len())
        .max()
        .unwrap_or(0)
        .max("NODE".len());
    let mut out = format!("{:<4}  {:<width$}  SCORE", "RANK", "NODE");
    for (i, h) in ranked.iter().enumerate() {
        out.push_str(&format!("\n{:<4}  {:<width$}  {}", i + 1, h.host, h.score));
    }
    out
}

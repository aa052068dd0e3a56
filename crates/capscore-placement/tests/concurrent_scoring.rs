//! Concurrent scoring against one shared priority.

use std::sync::Arc;
use std::thread;

use capscore_core::{Domain, parse_shape};
use capscore_placement::*;

fn cluster() -> Vec<NodeInfo> {
    (0..200u64)
        .map(|i| {
            NodeInfo::new(format!("node-{i:03}"), Resource::new(1000 + i * 37, 8_000_000_000))
                .with_pods([Resource::new(i * 11, i * 40_000_000)])
        })
        .collect()
}

#[test]
fn threads_agree_with_sequential_scoring() {
    let shape = parse_shape("0=0,20=4,60=10,100=3", Domain::integer()).unwrap();
    let priority = Arc::new(RequestedToCapacityRatio::new(Arc::new(shape)));
    let nodes = Arc::new(cluster());
    let workload = Resource::new(250, 512_000_000);

    let sequential: Vec<HostPriority> = nodes
        .iter()
        .map(|n| priority.score_node(&workload, n))
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let priority = Arc::clone(&priority);
            let nodes = Arc::clone(&nodes);
            thread::spawn(move || {
                (0..10)
                    .map(|_| prioritize(priority.as_ref(), &workload, &nodes))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for run in handle.join().unwrap() {
            assert_eq!(run, sequential);
        }
    }
}

#[test]
fn scores_stay_in_priority_range() {
    let priority = ScoringConfig::default().build().unwrap();
    for score in prioritize(&priority, &Resource::new(5000, 9_000_000_000), &cluster()) {
        assert!((0..=10).contains(&score.score), "{score:?}");
    }
}

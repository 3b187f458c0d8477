//! Tests that generated graph files build cleanly and have the promised shape.
#![allow(clippy::expect_used)]

use dfsgraph_bench::{SizeTier, Topology, generate_graph_file};
use dfsgraph_core::{build_graph, depth_first_order, find_cycle, has_cycle};

#[test]
fn generated_tiers_build_without_rejections() {
    for tier in [SizeTier::Small, SizeTier::Medium, SizeTier::Large] {
        let config = tier.config(42);
        let file = generate_graph_file(&config);
        assert_eq!(file.edges.len(), config.edge_count, "{tier:?}");

        let built = build_graph(&file).expect("valid vertex count");
        assert!(built.rejected.is_empty(), "{tier:?}: {:?}", built.rejected);
        assert_eq!(built.graph.vertex_count(), config.vertex_count);
        assert_eq!(built.graph.edge_count(), config.edge_count);
    }
}

#[test]
fn acyclic_tiers_have_no_directed_cycle() {
    for seed in [42, 123, 999, 7777] {
        let file = generate_graph_file(&SizeTier::Small.config(seed));
        let built = build_graph(&file).expect("builds");
        assert!(!has_cycle(&built.graph), "seed={seed}");
    }
}

#[test]
fn generation_is_deterministic() {
    let config = SizeTier::Medium.config(7);
    assert_eq!(generate_graph_file(&config), generate_graph_file(&config));

    let other = SizeTier::Medium.config(8);
    assert_ne!(generate_graph_file(&config), generate_graph_file(&other));
}

#[test]
fn weights_stay_in_range() {
    let config = SizeTier::Small.config(3);
    let file = generate_graph_file(&config);
    assert!(
        file.edges
            .iter()
            .all(|e| (1..=config.max_weight).contains(&e.weight))
    );
}

#[test]
fn deep_chain_is_traversed_without_recursion() {
    let config = SizeTier::Deep.config(1);
    let built = build_graph(&generate_graph_file(&config)).expect("builds");

    let order = depth_first_order(&built.graph, 0).expect("start in range");
    assert_eq!(order.len(), config.vertex_count);
    assert_eq!(order.last(), Some(&(config.vertex_count - 1)));
    assert_eq!(find_cycle(&built.graph), None);
}

#[test]
fn closed_chain_is_one_cycle() {
    let mut config = SizeTier::Deep.config(1);
    config.vertex_count = 1_000;
    config.acyclic = false;
    assert_eq!(config.topology, Topology::Chain);

    let built = build_graph(&generate_graph_file(&config)).expect("builds");
    let cycle = find_cycle(&built.graph).expect("closed chain");
    assert_eq!(cycle, (0..1_000).collect::<Vec<_>>());
}

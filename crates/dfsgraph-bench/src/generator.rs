//! Random graph file generator.
//!
//! Produces [`GraphFile`] instances whose every edge is in range, so
//! [`build_graph`](dfsgraph_core::build_graph) never rejects one.

use dfsgraph_core::{EdgeRecord, GraphFile, Weight};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of the generated edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// `edge_count` edges between uniformly chosen endpoints.
    Random,
    /// A single path `0 -> 1 -> ... -> n-1`. When `acyclic` is false the
    /// path is closed by an edge `n-1 -> 0`.
    Chain,
}

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    pub vertex_count: usize,
    /// Number of edges for [`Topology::Random`]; ignored for chains.
    pub edge_count: usize,
    pub directed: bool,
    /// Only emit edges from a lower to a higher vertex index, and no
    /// self-loops. A directed graph generated this way is a DAG.
    pub acyclic: bool,
    pub topology: Topology,
    /// Weights are drawn from `1 ..= max_weight`.
    pub max_weight: Weight,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 vertices, 300 edges
    Small,
    /// 1 000 vertices, 4 000 edges
    Medium,
    /// 10 000 vertices, 50 000 edges
    Large,
    /// A 100 000-vertex chain; DFS depth equals the vertex count.
    Deep,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    ///
    /// Tiers default to a directed DAG; flip `acyclic` or `directed` on the
    /// returned config for other shapes.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (vertex_count, edge_count, topology) = match self {
            SizeTier::Small => (100, 300, Topology::Random),
            SizeTier::Medium => (1_000, 4_000, Topology::Random),
            SizeTier::Large => (10_000, 50_000, Topology::Random),
            SizeTier::Deep => (100_000, 0, Topology::Chain),
        };
        GeneratorConfig {
            seed,
            vertex_count,
            edge_count,
            directed: true,
            acyclic: true,
            topology,
            max_weight: 100,
        }
    }
}

/// Generates a graph file from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_graph_file(config: &GeneratorConfig) -> GraphFile {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.vertex_count;

    let edges = match config.topology {
        Topology::Random => random_edges(config, &mut rng),
        Topology::Chain => {
            let mut edges: Vec<EdgeRecord> = (1..n)
                .map(|v| edge(v - 1, v, weight(config, &mut rng)))
                .collect();
            if !config.acyclic && n > 0 {
                edges.push(edge(n - 1, 0, weight(config, &mut rng)));
            }
            edges
        }
    };

    GraphFile {
        vertex_count: index(n),
        directed: config.directed,
        edges,
    }
}

fn random_edges(config: &GeneratorConfig, rng: &mut StdRng) -> Vec<EdgeRecord> {
    let n = config.vertex_count;
    if n == 0 || (config.acyclic && n < 2) {
        return Vec::new();
    }

    let mut edges = Vec::with_capacity(config.edge_count);
    while edges.len() < config.edge_count {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if config.acyclic {
            if a == b {
                continue;
            }
            edges.push(edge(a.min(b), a.max(b), weight(config, rng)));
        } else {
            edges.push(edge(a, b, weight(config, rng)));
        }
    }
    edges
}

fn weight(config: &GeneratorConfig, rng: &mut StdRng) -> Weight {
    rng.gen_range(1..=config.max_weight.max(1))
}

fn edge(from: usize, to: usize, weight: Weight) -> EdgeRecord {
    EdgeRecord::new(index(from), index(to), weight)
}

fn index(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

//! Graph generator and benchmark utilities for dfsgraph.
//!
//! This crate provides deterministic generation of graph files for
//! benchmarking and property testing of `dfsgraph-core`.

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, Topology, generate_graph_file};

/// Command module for the `dfsgraph` CLI.
///
/// Each submodule implements one subcommand. Every `run` function takes the
/// graph built by [`load_graph`] plus its arguments, writes its result to
/// stdout, and returns a [`CliError`] on failure.
use dfsgraph_core::{BuiltGraph, FileError, build_graph_with_limit, parse_graph_file};

use crate::error::CliError;

pub mod cycle;
pub mod dfs;
pub mod inspect;
pub mod path;
pub mod show;

/// Parses `content` as a graph file and builds a graph of at most
/// `max_vertices` vertices.
///
/// Edges with an out-of-range endpoint are skipped and logged as warnings;
/// they are still reported in [`BuiltGraph::rejected`].
///
/// # Errors
///
/// - [`CliError::ParseFailed`] if `content` is not a graph file.
/// - [`CliError::InvalidGraph`] if the vertex count is negative or above
///   `max_vertices`.
pub fn load_graph(content: &str, max_vertices: usize) -> Result<BuiltGraph, CliError> {
    let file = parse_graph_file(content).map_err(|e| match e {
        FileError::Json(e) => CliError::ParseFailed {
            detail: format!("line {}, column {}: {e}", e.line(), e.column()),
        },
    })?;

    let built =
        build_graph_with_limit(&file, max_vertices).map_err(|e| CliError::InvalidGraph {
            detail: e.to_string(),
        })?;

    for rejected in &built.rejected {
        tracing::warn!(position = rejected.position, "{}", rejected.error);
    }
    tracing::debug!(
        vertices = built.graph.vertex_count(),
        edges = built.graph.edge_count(),
        directed = built.graph.is_directed(),
        "graph built"
    );

    Ok(built)
}

/// Serializes `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<W: std::io::Write>(
    w: &mut W,
    value: &serde_json::Value,
) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

/// Converts a stdout write failure into a [`CliError`].
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

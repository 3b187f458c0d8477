//! Implementation of `dfsgraph path <file> <from> <to>`.
//!
//! Runs a depth-first search rooted at `from` and walks the resulting tree
//! back from `to`. The reported path is the DFS-tree path, which need not be
//! the shortest one.
//!
//! Output (human mode): the path with vertices separated by ` -> `, then a
//! `length: N` line counting edges.
//! Output (JSON mode): `{"path": [...], "length": N}`.
//!
//! Exit codes: 0 = path found, 1 = vertex not found or no path,
//! 2 = read/parse failure.
use dfsgraph_core::{BuiltGraph, VertexId, dfs_tree, path_length};
use serde_json::json;

use crate::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::error::CliError;

/// Runs the `path` command.
///
/// # Errors
///
/// - [`CliError::VertexNotFound`] if either endpoint is not a vertex.
/// - [`CliError::NoPath`] if `to` is not reachable from `from`.
/// - [`CliError`] exit code 2 if stdout cannot be written.
pub fn run(
    built: &BuiltGraph,
    from: VertexId,
    to: VertexId,
    format: OutputFormat,
) -> Result<(), CliError> {
    let tree = dfs_tree(&built.graph, from)?;
    let path = tree.path_to(to)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &path),
        OutputFormat::Json => write_json(
            &mut out,
            &json!({ "path": path, "length": path_length(&path) }),
        ),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, path: &[VertexId]) -> std::io::Result<()> {
    let hops: Vec<String> = path.iter().map(ToString::to_string).collect();
    writeln!(w, "{}", hops.join(" -> "))?;
    writeln!(w, "length: {}", path_length(path))
}

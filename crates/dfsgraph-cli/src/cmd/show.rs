//! Implementation of `dfsgraph show <file>`.
//!
//! Output (human mode): the adjacency listing, one line per vertex, neighbors
//! in traversal order:
//!
//! ```text
//! Adjacency lists:
//! 0: (2)(1)
//! ```
//!
//! Output (JSON mode): `{"directed": bool, "adjacency": [[{"vertex": n,
//! "weight": w}, ...], ...]}`, indexed by vertex.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use dfsgraph_core::{BuiltGraph, Graph};
use serde_json::{Value, json};

use crate::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::error::CliError;

/// Runs the `show` command.
///
/// # Errors
///
/// [`CliError`] exit code 2 if stdout cannot be written.
pub fn run(built: &BuiltGraph, format: OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &built.graph),
        OutputFormat::Json => write_json(&mut out, &adjacency_json(&built.graph)),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, graph: &Graph) -> std::io::Result<()> {
    write!(w, "{}", graph.adjacency_listing())
}

fn adjacency_json(graph: &Graph) -> Value {
    let adjacency: Vec<Value> = graph
        .vertices()
        .map(|v| {
            graph
                .neighbors(v)
                .map(|n| json!({ "vertex": n.vertex, "weight": n.weight }))
                .collect()
        })
        .collect();

    json!({
        "directed": graph.is_directed(),
        "adjacency": adjacency,
    })
}

//! Implementation of `dfsgraph inspect <file>`.
//!
//! Builds the graph and prints summary statistics:
//! - vertex and edge count
//! - directedness
//! - edges rejected during construction
//! - whether a cycle exists
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use dfsgraph_core::{BuiltGraph, find_cycle};
use serde_json::json;

use crate::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::error::CliError;

/// Statistics gathered from a built graph.
pub struct InspectStats {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Logical edges; an undirected edge counts once.
    pub edge_count: usize,
    /// Whether edges are one-way.
    pub directed: bool,
    /// Human-readable reason for every rejected edge, in file order.
    pub rejected: Vec<String>,
    /// The first cycle found, or `None` if the graph is acyclic.
    pub cycle: Option<Vec<usize>>,
}

impl InspectStats {
    /// Computes statistics from a [`BuiltGraph`].
    pub fn from_built(built: &BuiltGraph) -> Self {
        Self {
            vertex_count: built.graph.vertex_count(),
            edge_count: built.graph.edge_count(),
            directed: built.graph.is_directed(),
            rejected: built
                .rejected
                .iter()
                .map(|r| format!("#{}: {}", r.position, r.error))
                .collect(),
            cycle: find_cycle(&built.graph),
        }
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// [`CliError`] exit code 2 if stdout cannot be written.
pub fn run(built: &BuiltGraph, format: OutputFormat) -> Result<(), CliError> {
    let stats = InspectStats::from_built(built);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let kind = if stats.directed {
        "directed"
    } else {
        "undirected"
    };
    writeln!(w, "vertices:  {}", stats.vertex_count)?;
    writeln!(w, "edges:     {}", stats.edge_count)?;
    writeln!(w, "kind:      {kind}")?;
    writeln!(w, "rejected:  {}", stats.rejected.len())?;
    for reason in &stats.rejected {
        writeln!(w, "  {reason}")?;
    }
    writeln!(w, "acyclic:   {}", stats.cycle.is_none())
}

fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let value = json!({
        "vertex_count": stats.vertex_count,
        "edge_count": stats.edge_count,
        "directed": stats.directed,
        "rejected_edges": stats.rejected,
        "acyclic": stats.cycle.is_none(),
        "cycle": stats.cycle,
    });
    write_json(w, &value)
}

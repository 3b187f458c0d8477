//! Implementation of `dfsgraph dfs <file> <start>`.
//!
//! Output (human mode): the reached vertices in depth-first pre-order,
//! separated by single spaces.
//! Output (JSON mode): `{"start": s, "order": [...], "count": N}`.
//!
//! Exit codes: 0 = success, 1 = start vertex not found, 2 = read/parse failure.
use dfsgraph_core::{BuiltGraph, VertexId, depth_first_order};
use serde_json::json;

use crate::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::error::CliError;

/// Runs the `dfs` command.
///
/// # Errors
///
/// - [`CliError::VertexNotFound`] if `start` is not a vertex.
/// - [`CliError`] exit code 2 if stdout cannot be written.
pub fn run(built: &BuiltGraph, start: VertexId, format: OutputFormat) -> Result<(), CliError> {
    let order = depth_first_order(&built.graph, start)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &order),
        OutputFormat::Json => write_json(
            &mut out,
            &json!({ "start": start, "order": order, "count": order.len() }),
        ),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, order: &[VertexId]) -> std::io::Result<()> {
    let line: Vec<String> = order.iter().map(ToString::to_string).collect();
    writeln!(w, "{}", line.join(" "))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use dfsgraph_core::DEFAULT_MAX_VERTICES;

    use super::*;
    use crate::cmd::load_graph;

    #[test]
    fn human_order_is_space_separated() {
        let mut buf = Vec::new();
        print_human(&mut buf, &[0, 2, 3, 4, 1]).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "0 2 3 4 1\n");
    }

    #[test]
    fn missing_start_vertex_is_exit_1() {
        let built = load_graph(r#"{"vertex_count":2}"#, DEFAULT_MAX_VERTICES).expect("valid");
        let err = run(&built, 5, OutputFormat::Human).expect_err("out of range");
        assert!(matches!(err, CliError::VertexNotFound { vertex: 5 }));
        assert_eq!(err.exit_code(), 1);
    }
}

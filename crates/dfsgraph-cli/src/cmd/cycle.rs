//! Implementation of `dfsgraph cycle <file>`.
//!
//! Output (human mode): the first cycle found, written closed, e.g.
//! `1 -> 2 -> 3 -> 1`, or `no cycle found`.
//! Output (JSON mode): `{"cycle": [...], "length": N}` where `length` counts
//! edges, or `{"cycle": null}` for an acyclic graph.
//!
//! An acyclic graph is a successful result, not an error.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use dfsgraph_core::{BuiltGraph, VertexId, find_cycle};
use serde_json::json;

use crate::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::error::CliError;

/// Runs the `cycle` command.
///
/// # Errors
///
/// [`CliError`] exit code 2 if stdout cannot be written.
pub fn run(built: &BuiltGraph, format: OutputFormat) -> Result<(), CliError> {
    let cycle = find_cycle(&built.graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, cycle.as_deref()),
        OutputFormat::Json => {
            let value = match &cycle {
                Some(c) => json!({ "cycle": c, "length": c.len() }),
                None => json!({ "cycle": null }),
            };
            write_json(&mut out, &value)
        }
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, cycle: Option<&[VertexId]>) -> std::io::Result<()> {
    let Some(cycle) = cycle else {
        return writeln!(w, "no cycle found");
    };
    let hops: Vec<String> = cycle
        .iter()
        .chain(cycle.first())
        .map(ToString::to_string)
        .collect();
    writeln!(w, "{}", hops.join(" -> "))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use dfsgraph_core::DEFAULT_MAX_VERTICES;

    use super::*;
    use crate::cmd::load_graph;

    fn human(cycle: Option<&[VertexId]>) -> String {
        let mut buf = Vec::new();
        print_human(&mut buf, cycle).expect("write");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn cycle_is_printed_closed() {
        assert_eq!(human(Some(&[1, 2, 3])), "1 -> 2 -> 3 -> 1\n");
    }

    #[test]
    fn self_loop_repeats_its_vertex() {
        assert_eq!(human(Some(&[4])), "4 -> 4\n");
    }

    #[test]
    fn acyclic_graph_prints_notice() {
        assert_eq!(human(None), "no cycle found\n");
    }

    #[test]
    fn acyclic_graph_is_success() {
        let dag = r#"{"vertex_count":3,"directed":true,"edges":[{"from":0,"to":1},{"from":1,"to":2}]}"#;
        let built = load_graph(dag, DEFAULT_MAX_VERTICES).expect("valid");
        assert!(run(&built, OutputFormat::Human).is_ok());
    }
}

//! Integration tests for `dfsgraph show`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `dfsgraph` binary.
fn dfsgraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("dfsgraph");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn show(name: &str, extra: &[&str]) -> std::process::Output {
    Command::new(dfsgraph_bin())
        .arg("show")
        .arg(fixture(name))
        .args(extra)
        .output()
        .expect("run dfsgraph show")
}

#[test]
fn show_prints_adjacency_lists_newest_first() {
    let out = show("undirected-example.json", &[]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "Adjacency lists:\n0: (2)(1)\n1: (3)(0)\n2: (3)(0)\n3: (4)(2)(1)\n4: (3)\n"
    );
}

#[test]
fn show_directed_lists_only_outgoing_edges() {
    let out = show("directed-cycle.json", &[]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("3: (1)\n"), "stdout: {stdout}");
    assert!(stdout.contains("1: (2)\n"), "stdout: {stdout}");
}

#[test]
fn show_json_has_weights() {
    let out = show("undirected-example.json", &["--format", "json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["directed"], false);
    assert_eq!(value["adjacency"][3][0]["vertex"], 4);
    assert_eq!(value["adjacency"][3][0]["weight"], 5);
}

#[test]
fn show_skips_out_of_range_edge_with_warning() {
    let out = show("out-of-range-edge.json", &[]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("0: (1)\n"), "stdout: {stdout}");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("out of range"), "stderr: {stderr}");
}

#[test]
fn show_quiet_suppresses_warnings() {
    let out = show("out-of-range-edge.json", &["--quiet"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("out of range"), "stderr: {stderr}");
}

#[test]
fn show_invalid_json_exits_2() {
    let out = show("invalid.json", &[]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid graph file"), "stderr: {stderr}");
}

#[test]
fn show_unknown_field_exits_2() {
    let out = show("unknown-field.json", &[]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn show_missing_file_exits_2() {
    let out = Command::new(dfsgraph_bin())
        .args(["show", "/no/such/graph.json"])
        .output()
        .expect("run dfsgraph show");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

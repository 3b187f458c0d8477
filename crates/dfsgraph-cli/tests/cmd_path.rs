//! Integration tests for `dfsgraph path`.
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

fn path(name: &str, from: &str, to: &str, extra: &[&str]) -> std::process::Output {
    Command::new(dfsgraph_bin())
        .arg("path")
        .arg(fixture(name))
        .args([from, to])
        .args(extra)
        .output()
        .expect("run dfsgraph path")
}

#[test]
fn path_follows_dfs_tree() {
    let out = path("undirected-example.json", "0", "4", &[]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "0 -> 2 -> 3 -> 4\nlength: 3\n"
    );
}

#[test]
fn path_to_self_has_length_zero() {
    let out = path("dag.json", "2", "2", &[]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "2\nlength: 0\n");
}

#[test]
fn path_json_output() {
    let out = path("directed-cycle.json", "4", "3", &["--format", "json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["path"], serde_json::json!([4, 0, 1, 2, 3]));
    assert_eq!(value["length"], 4);
}

#[test]
fn path_against_edge_direction_exits_1() {
    let out = path("directed-cycle.json", "0", "4", &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("path not found"), "stderr: {stderr}");
}

#[test]
fn path_between_components_exits_1() {
    let out = path("disconnected-cycle.json", "0", "5", &[]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn path_unknown_vertex_exits_1() {
    let out = path("dag.json", "0", "40", &[]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

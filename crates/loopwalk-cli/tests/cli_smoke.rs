use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join("graphs").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn stdout_of(args: &[&str]) -> String {
    let exe = assert_cmd::cargo_bin!("loopwalk-cli");
    let output = Command::new(exe)
        .env_remove("RUST_LOG")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("utf-8 stdout")
}

#[test]
fn cli_lists_cycles_with_letter_names() {
    let path = fixture("lettered.txt");
    let out = stdout_of(&[
        "cycles",
        "--names",
        "abcdefj",
        path.to_string_lossy().as_ref(),
    ]);

    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Cycle count: 24"));
    assert_eq!(lines.next(), Some("a b d a"));
    assert!(out.lines().any(|l| l == "a d a"));
}

#[test]
fn cli_unique_cycles_as_json() {
    let path = fixture("lettered.txt");
    let out = stdout_of(&["cycles", "--unique", "--json", path.to_string_lossy().as_ref()]);

    let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(value["count"], 7);
    assert_eq!(value["truncated"], false);
    assert_eq!(value["cycles"][3], serde_json::json!([0, 3, 0]));
}

#[test]
fn cli_show_prints_vertices_edges_and_matrix() {
    let path = fixture("weighted.txt");
    let out = stdout_of(&["show", path.to_string_lossy().as_ref()]);

    assert_eq!(
        out,
        "Vertices:\n  0: 0 (mark 0)\n  1: 1 (mark 0)\n  2: 2 (mark 0)\n\
Edges:\n  0 -> 1 (weight 2)\n  1 -> 2 (weight 1)\n  2 -> 0 (weight 5)\n\
Adjacency matrix:\n0 2 0\n0 0 1\n5 0 0\n"
    );
}

#[test]
fn cli_reads_stdin_and_honours_max_cycles() {
    let text = fs::read_to_string(fixture("lettered.txt")).expect("read fixture");
    let exe = assert_cmd::cargo_bin!("loopwalk-cli");
    let output = assert_cmd::Command::new(exe)
        .env_remove("RUST_LOG")
        .args(["task", "--max-cycles", "2", "--json", "-"])
        .write_stdin(text)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["count"], 2);
    assert_eq!(value["truncated"], true);
}

#[test]
fn cli_rejects_malformed_matrix() {
    let path = fixture("truncated.txt");
    let exe = assert_cmd::cargo_bin!("loopwalk-cli");
    let output = Command::new(exe)
        .args(["cycles", path.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("malformed input"), "stderr: {stderr}");
}

#[test]
fn cli_usage_errors_exit_with_two() {
    let exe = assert_cmd::cargo_bin!("loopwalk-cli");
    Command::new(exe)
        .args(["cycles", "--max-steps", "many"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn cli_show_json_with_names_from_temp_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("pair.txt");
    fs::write(&path, "2\n0 4\n0 0\n").expect("write matrix");

    let out = stdout_of(&["show", "--json", "--names", "xy", path.to_string_lossy().as_ref()]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(value["vertices"][1]["label"], "y");
    assert_eq!(
        value["edges"],
        serde_json::json!([{ "from": "x", "to": "y", "weight": 4 }])
    );
    assert_eq!(value["presence"], serde_json::json!([[0, 1], [0, 0]]));
}

#[test]
fn cli_reports_unreadable_path_as_malformed_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let missing = tmp.path().join("absent.txt");
    let exe = assert_cmd::cargo_bin!("loopwalk-cli");
    let output = Command::new(exe)
        .args(["cycles", missing.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(
        stderr.contains("malformed input: cannot read"),
        "stderr: {stderr}"
    );
}

#[test]
fn cli_rejects_oversized_vertex_count() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("huge.txt");
    fs::write(&path, "18446744073709551615\n0\n").expect("write matrix");
    let exe = assert_cmd::cargo_bin!("loopwalk-cli");
    Command::new(exe)
        .args(["cycles", path.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(1);
}

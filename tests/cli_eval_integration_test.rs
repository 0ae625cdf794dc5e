//! Integration tests for the `regroup` binary.

mod common;

use common::fixture;
use serde_json::Value;
use std::process::{Command, Output};

fn run_regroup(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--bin", "regroup", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute regroup command")
}

#[test]
fn test_eval_prints_single_integer() {
    let path = fixture("swapped_groups.csv");
    let output = run_regroup(&["eval", path.to_str().unwrap()]);

    if !output.status.success() {
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("regroup eval command failed");
    }
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2");
}

#[test]
fn test_eval_file_flag_and_json_format() {
    let path = fixture("fresh_groups.csv");
    let output = run_regroup(&[
        "eval",
        "--file",
        path.to_str().unwrap(),
        "--format",
        "json",
        "--no-parallel",
    ]);
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    assert_eq!(json["excess"], 0);
    assert_eq!(json["rounds"], 2);
    assert_eq!(json["members"], 4);
}

#[test]
fn test_eval_reports_format_error() {
    let path = fixture("missing_name.csv");
    let output = run_regroup(&["eval", path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to find NAME column"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_eval_reports_duplicate_name_with_rows() {
    let path = fixture("duplicate_name.csv");
    let output = run_regroup(&["eval", path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#"row 4: name "alice" already appears in row 2"#),
        "unexpected stderr: {stderr}"
    );
}

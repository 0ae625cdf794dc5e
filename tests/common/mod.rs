// Test utility module for regroup integration tests
#![allow(dead_code)]

use regroup::{Group, GroupId, Member, Round};
use std::path::PathBuf;

/// Path to a checked-in fixture under tests/data/fixtures
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/fixtures")
        .join(name)
}

// Helper to create temporary test files
pub fn create_test_file(content: &str, extension: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(format!("test.{}", extension));
    std::fs::write(&file_path, content).expect("Failed to write test file");
    (temp_dir, file_path)
}

/// Build a round from `(group id, member names)` entries
pub fn round(groups: &[(i64, &[&str])]) -> Round {
    Round::new(groups.iter().map(|(id, names)| {
        Group::new(
            GroupId(*id),
            names.iter().map(|n| Member::new(*n)).collect(),
        )
    }))
}

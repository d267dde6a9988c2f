//! Tests for data files that can't be replayed.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::barrace_command;

const EMPTY_CONFIG: &str = "./tests/valid_configs/empty_config.toml";

#[test]
fn test_missing_data_file() {
    barrace_command(&["-C", EMPTY_CONFIG, "./tests/data/does_not_exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to load the frames"))
        .stderr(predicate::str::contains("does_not_exist.json"));
}

#[test]
fn test_malformed_data_file() {
    barrace_command(&["-C", EMPTY_CONFIG, "./tests/data/malformed.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to parse the data file"));
}

#[test]
fn test_data_file_is_not_a_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.json");
    std::fs::write(&path, r#"{ "name": "2001", "values": [] }"#).unwrap();

    barrace_command(&["-C", EMPTY_CONFIG, &path.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to parse the data file"));
}

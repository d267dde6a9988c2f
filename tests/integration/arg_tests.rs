//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{barrace_command, no_cfg_barrace_command};

#[test]
fn test_missing_data() {
    barrace_command(&["-C", "./tests/valid_configs/empty_config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a data file of frames must be given"));
}

#[test]
fn test_small_iteration_timeout() {
    no_cfg_barrace_command()
        .arg("-i")
        .arg("49")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--iteration_timeout' must be at least 50ms",
        ));
}

#[test]
fn test_invalid_iteration_timeout() {
    no_cfg_barrace_command()
        .arg("--iteration_timeout")
        .arg("whenever")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--iteration_timeout' was set with an invalid value",
        ));
}

#[test]
fn test_large_start_running_timeout() {
    no_cfg_barrace_command()
        .arg("-s")
        .arg("18446744073709551616")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--start_running_timeout' was set with an invalid value",
        ));
}

#[test]
fn test_short_iteration_timeout_without_transition() {
    // Options are checked before the data file, so only the missing data fails.
    barrace_command(&["-C", "./tests/valid_configs/empty_config.toml", "-i", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a data file of frames must be given"))
        .stderr(predicate::str::contains("transition_duration").not());
}

#[test]
fn test_long_transition() {
    no_cfg_barrace_command()
        .arg("-i")
        .arg("100")
        .arg("--transition_duration")
        .arg("1s")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'transition_duration' must be at most",
        ));
}

#[test]
fn test_zero_bar_height() {
    no_cfg_barrace_command()
        .arg("--bar_height")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--bar_height' must be at least 1"));
}

#[test]
fn test_invalid_bar_height() {
    no_cfg_barrace_command()
        .arg("--bar_height")
        .arg("tall")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_baseline() {
    no_cfg_barrace_command()
        .arg("--baseline")
        .arg("inf")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--baseline' was set with an invalid value",
        ));
}

#[test]
fn test_invalid_theme() {
    no_cfg_barrace_command()
        .arg("--theme")
        .arg("neon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'neon'"));
}

#[test]
fn test_help() {
    barrace_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart Options"))
        .stdout(predicate::str::contains("--iteration_timeout"));
}

#[test]
fn test_version() {
    barrace_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_default_config_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nested").join("barrace.toml");
    let config_location = config_path.to_string_lossy().to_string();

    // No data file, so this fails, but only after the config is created.
    barrace_command(&["-C", &config_location])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a data file of frames must be given"));

    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[chart]"));
    assert!(written.contains("#iteration_timeout"));
}

#[test]
fn test_no_write_skips_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("barrace.toml");
    let config_location = config_path.to_string_lossy().to_string();

    barrace_command(&["-C", &config_location, "--no_write"])
        .assert()
        .failure();

    assert!(!config_path.exists());
}

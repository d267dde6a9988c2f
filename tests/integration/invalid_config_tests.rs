//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{barrace_command, VALID_DATA};

fn config_command(config: &str) -> std::process::Command {
    barrace_command(&["-C", config, VALID_DATA])
}

#[test]
fn test_toml_mismatch_type() {
    config_command("./tests/invalid_configs/toml_mismatch_type.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

/// This test isn't really needed as this is technically covered by TOML spec.
/// However, I feel like it's worth checking anyways - not like it takes long.
#[test]
fn test_duplicate_key() {
    config_command("./tests/invalid_configs/duplicate_key.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

/// Checks for if a hex is valid
#[test]
fn test_invalid_colour_hex() {
    config_command("./tests/invalid_configs/invalid_colour_hex.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"))
        .stderr(predicate::str::contains("styles.bars.colors"));
}

#[test]
fn test_invalid_colour_name() {
    config_command("./tests/invalid_configs/invalid_colour_name.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid named color"))
        .stderr(predicate::str::contains("styles.widgets.border_color"));
}

#[test]
fn test_invalid_colour_rgb() {
    config_command("./tests/invalid_configs/invalid_colour_rgb.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid RGB"));
}

#[test]
fn test_invalid_theme() {
    config_command("./tests/invalid_configs/invalid_theme.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is an invalid built-in theme"));
}

#[test]
fn test_small_iteration_timeout() {
    config_command("./tests/invalid_configs/small_iteration_timeout.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'iteration_timeout' must be at least 50ms",
        ));
}

#[test]
fn test_invalid_duration() {
    config_command("./tests/invalid_configs/invalid_duration.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'start_running_timeout' was set with an invalid value",
        ));
}

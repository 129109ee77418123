//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::exporter_command;

#[test]
fn test_toml_mismatch_type() {
    exporter_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_unknown_key() {
    exporter_command(&["-C", "./tests/invalid_configs/unknown_key.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

/// This test isn't really needed as this is technically covered by TOML spec.
/// However, I feel like it's worth checking anyways - not like it takes long.
#[test]
fn test_duplicate_port() {
    exporter_command(&["-C", "./tests/invalid_configs/duplicate_port.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

#[test]
fn test_lone_bracket() {
    exporter_command(&["-C", "./tests/invalid_configs/lone_bracket.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file error"));
}

#[test]
fn test_zero_port() {
    exporter_command(&["-C", "./tests/invalid_configs/zero_port.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'port' must be between 1 and 65535.",
        ));
}

#[test]
fn test_small_interval() {
    exporter_command(&["-C", "./tests/invalid_configs/small_interval.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'interval' must be at least 100ms.",
        ));
}

#[test]
fn test_invalid_interval() {
    exporter_command(&["-C", "./tests/invalid_configs/invalid_interval.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'interval' was set with an invalid value",
        ));
}

#[test]
fn test_invalid_address() {
    exporter_command(&["-C", "./tests/invalid_configs/invalid_address.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'address' was set with an invalid value",
        ));
}

#[test]
fn test_invalid_log_level() {
    exporter_command(&["-C", "./tests/invalid_configs/invalid_log_level.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'log_level' was set with an invalid value",
        ));
}

#[test]
fn test_args_override_invalid_config() {
    exporter_command(&[
        "-C",
        "./tests/invalid_configs/zero_port.toml",
        "--port",
        "0",
        "--interval",
        "5ms",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("'--port'"));
}

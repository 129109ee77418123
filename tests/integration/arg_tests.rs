//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use std::net::TcpListener;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{exporter_command, no_cfg_exporter_command};

#[test]
fn test_small_interval() {
    no_cfg_exporter_command()
        .arg("-i")
        .arg("99")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--interval' must be at least 100ms.",
        ));
}

#[test]
fn test_large_interval() {
    no_cfg_exporter_command()
        .arg("--interval")
        .arg("2h")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--interval' must be at most 1h."));
}

#[test]
fn test_invalid_interval() {
    no_cfg_exporter_command()
        .arg("--interval")
        .arg("sometimes")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--interval' was set with an invalid value",
        ));
}

#[test]
fn test_huge_interval_number() {
    no_cfg_exporter_command()
        .arg("-i")
        .arg("18446744073709551616")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--interval' was set with an invalid value",
        ));
}

#[test]
fn test_zero_port() {
    no_cfg_exporter_command()
        .arg("-p")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--port' must be between 1 and 65535.",
        ));
}

#[test]
fn test_large_port() {
    no_cfg_exporter_command()
        .arg("--port")
        .arg("65536")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--port' must be between 1 and 65535.",
        ));
}

#[test]
fn test_invalid_port() {
    no_cfg_exporter_command()
        .arg("--port")
        .arg("metrics")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--port' was set with an invalid value",
        ));
}

#[test]
fn test_negative_port() {
    // This test should auto fail due to how clap works
    no_cfg_exporter_command()
        .arg("--port")
        .arg("-8000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_port_from_env() {
    no_cfg_exporter_command()
        .env("NPU_EXPORTER_PORT", "0")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--port' must be between 1 and 65535.",
        ));
}

#[test]
fn test_non_numeric_port_from_env() {
    no_cfg_exporter_command()
        .env("NPU_EXPORTER_PORT", "http")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--port' was set with an invalid value",
        ));
}

#[test]
fn test_interval_from_env() {
    no_cfg_exporter_command()
        .env("NPU_EXPORTER_INTERVAL", "1ms")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--interval' must be at least 100ms.",
        ));
}

#[test]
fn test_invalid_address() {
    no_cfg_exporter_command()
        .arg("--address")
        .arg("npu.local")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--address' was set with an invalid value",
        ));
}

#[test]
fn test_invalid_log_level() {
    no_cfg_exporter_command()
        .arg("--log_level")
        .arg("chatty")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--log_level' was set with an invalid value",
        ));
}

#[test]
fn test_missing_config_file() {
    exporter_command(&["-C", "./tests/valid_configs/does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "could not read the config file at",
        ));
}

#[test]
fn test_port_in_use() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port().to_string();

    no_cfg_exporter_command()
        .args(["--address", "127.0.0.1", "--port", &port])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to listen on '127.0.0.1:"));
}

#[test]
fn test_help() {
    exporter_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sets how often the runtime counter is sampled.",
        ))
        .stdout(predicate::str::contains("NPU_EXPORTER_PORT"));
}

#[test]
fn test_version() {
    exporter_command(&["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_empty_config_falls_through_to_args() {
    exporter_command(&["-C", "./tests/valid_configs/empty_config.toml", "-i", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--interval' must be at least 100ms.",
        ));
}

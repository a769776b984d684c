//! Tests for `proxy-config list`.
//!
//! Responsibilities:
//! - Verify the listing shows resolved values and omits empty ones.
//! - Verify sensitive values are masked in every output format.

mod common;

use common::proxy_config_cmd;
use predicates::prelude::*;

#[test]
fn test_list_shows_port_and_omits_empty_keys() {
    let mut cmd = proxy_config_cmd();
    cmd.env("PORT", "8080");

    cmd.args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port\t8080"))
        .stdout(predicate::str::contains("proxyKey").not())
        .stdout(predicate::str::contains("openaiKey").not());
}

#[test]
fn test_list_masks_sensitive_values() {
    let mut cmd = proxy_config_cmd();
    cmd.env("PROXY_KEY", "sk-abc123")
        .env("OPENAI_KEY", "sk-one,sk-two")
        .env("REJECT_SAMPLE_RATE", "0.5");

    cmd.args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("proxyKey\t********"))
        .stdout(predicate::str::contains("openaiKey\t********"))
        .stdout(predicate::str::contains("rejectSampleRate\t0.5"))
        .stdout(predicate::str::contains("sk-abc123").not())
        .stdout(predicate::str::contains("sk-one").not());
}

#[test]
fn test_list_json_output() {
    let mut cmd = proxy_config_cmd();
    cmd.env("PROXY_KEY", "sk-abc123").env("PORT", "8080");

    let output = cmd.args(["--output", "json", "list"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["port"], "8080");
    assert_eq!(value["proxyKey"], "********");
    assert_eq!(value["checkKeys"], "false");
    assert!(value.get("openaiKey").is_none());
}

#[test]
fn test_production_flag_changes_check_keys_default() {
    let mut cmd = proxy_config_cmd();

    cmd.args(["list", "--production"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checkKeys\ttrue"));
}

#[test]
fn test_run_mode_env_changes_check_keys_default() {
    let mut cmd = proxy_config_cmd();
    cmd.env("RUN_MODE", "production");

    cmd.args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checkKeys\ttrue"));
}

#[test]
fn test_list_tolerates_malformed_values_with_warning() {
    let mut cmd = proxy_config_cmd();
    cmd.env("LOG_LEVEL", "banana");

    cmd.args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logLevel\tbanana"))
        .stderr(predicate::str::contains("LOG_LEVEL"));
}

#[test]
fn test_strict_flag_rejects_malformed_values() {
    let mut cmd = proxy_config_cmd();
    cmd.env("QUEUE_MODE", "lifo");

    cmd.args(["--strict", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid value for QUEUE_MODE"));
}

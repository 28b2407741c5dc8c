//! Tests for `sopsenv run`.

use crate::support::*;

#[test]
fn test_run_exports_exact_values() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.run("config.sops.env", &["sh", "-c", "printf %s \"$DB_HOST\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "localhost");
}

#[test]
fn test_run_nested_document_exports_schema_names() {
    let t = Test::with_document("config.sops.yaml", SAMPLE_YAML);

    let output = t.run("config.sops.yaml", &["sh", "-c", "printf %s \"$DB_HOST:$REDIS_PORT\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "db.internal:6380");
}

#[test]
fn test_run_exports_keys_outside_schema() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.run("config.sops.env", &["sh", "-c", "printf %s \"$CUSTOM_SETTING\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "not-in-schema");
}

#[test]
fn test_run_last_duplicate_wins() {
    let t = Test::with_document("config.sops.env", "LOG_LEVEL=info\nLOG_LEVEL=debug\n");

    let output = t.run("config.sops.env", &["sh", "-c", "printf %s \"$LOG_LEVEL\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "debug");
}

#[test]
fn test_run_command_exit_code_passthrough() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.run("config.sops.env", &["sh", "-c", "exit 42"]);
    assert_eq!(output.status.code(), Some(42));
}

#[test]
fn test_run_does_not_start_command_when_decryption_fails() {
    let t = Test::new();

    let output = t.run("missing.env", &["sh", "-c", "echo started"]);
    assert_failure(&output);
    assert_stdout_excludes(&output, "started");
    assert_stderr_contains(&output, "failed to decrypt");
}

#[test]
fn test_run_requires_command() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.cmd().args(["run", "--file", "config.sops.env"]).output().unwrap();
    assert_failure(&output);
}

//! Tests for `sopsenv env`.

use crate::support::*;
use sopsenv::core::mask::mask;

#[test]
fn test_env_exports_and_masks() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.env("config.sops.env");
    assert_success(&output);

    assert_stdout_contains(&output, "exported 12 variables");
    assert_stdout_contains(&output, "  DB_HOST=localhost\n");
    assert_stdout_contains(&output, "  DB_PORT=5432\n");
    assert_stdout_contains(&output, &format!("  DB_PASSWORD={}\n", DB_PASSWORD_MASKED));
    assert_stdout_excludes(&output, DB_PASSWORD);
}

#[test]
fn test_env_skips_unset_and_unlisted_variables() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.env("config.sops.env");
    assert_success(&output);

    assert_stdout_excludes(&output, "JWT_SECRET");
    assert_stdout_excludes(&output, "SIGNING_KEY");
    // Exported, but not on the allowlist.
    assert_stdout_excludes(&output, "CUSTOM_SETTING");
}

#[test]
fn test_env_prints_dsn_from_environment() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.env("config.sops.env");
    assert_success(&output);

    assert_stdout_contains(
        &output,
        &format!(
            "Database DSN: postgresql://app_user:{}@localhost:5432/app",
            DB_PASSWORD_MASKED
        ),
    );
}

#[test]
fn test_env_skips_malformed_lines() {
    let t = Test::with_document("config.sops.env", "DB_HOST=localhost\nthis is not a pair\n");

    let output = t.env("config.sops.env");
    assert_success(&output);
    assert_stdout_contains(&output, "  DB_HOST=localhost\n");

    // The typed path is strict about the same document.
    let output = t.show("config.sops.env");
    assert_failure(&output);
    assert_stderr_contains(&output, "line 2");
}

#[test]
fn test_env_nested_document() {
    let t = Test::with_document("config.sops.yaml", SAMPLE_YAML);

    let output = t.env("config.sops.yaml");
    assert_success(&output);

    // Every leaf under its dotted path, plus the schema name of each one.
    assert_stdout_contains(&output, "exported 24 variables");
    assert_stdout_contains(&output, "  DB_HOST=db.internal\n");
    assert_stdout_contains(&output, "  DB_PORT=5433\n");
    assert_stdout_contains(&output, "  REDIS_DB=3\n");
    assert_stdout_contains(
        &output,
        &format!("  JWT_SECRET={}\n", mask("yaml-jwt-signing-secret")),
    );
    assert_stdout_contains(
        &output,
        &format!(
            "Database DSN: postgresql://orders_svc:{}@db.internal:5433/orders",
            mask("yaml_db_password_987")
        ),
    );
    assert_stdout_contains(
        &output,
        &format!(
            "Redis URL: redis://default:{}@cache.internal:6380/3",
            mask("yaml_redis_pw")
        ),
    );
    assert_stdout_excludes(&output, "yaml_db_password_987");
    assert_stdout_excludes(&output, "yaml_redis_pw");
}

#[test]
fn test_env_flat_document_has_no_redis_line() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.env("config.sops.env");
    assert_success(&output);
    assert_stdout_excludes(&output, "Redis URL:");
}

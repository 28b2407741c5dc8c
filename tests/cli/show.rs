//! Tests for `sopsenv show`.

use crate::support::*;
use sopsenv::core::mask::mask;

#[test]
fn test_show_masks_sensitive_fields() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.show("config.sops.env");
    assert_success(&output);

    assert_stdout_contains(&output, &format!("  DB_PASSWORD: {}\n", DB_PASSWORD_MASKED));
    assert_stdout_contains(
        &output,
        &format!("  API_KEY: {}\n", mask("sk_test_4eC39HqLyjWDarjtT1zdp7dc")),
    );
    assert_stdout_contains(
        &output,
        &format!("  REDIS_URL: {}\n", mask("redis://:redis_pw@cache:6379/0")),
    );
    assert_stdout_excludes(&output, DB_PASSWORD);
    assert_stdout_excludes(&output, "GOCSPX-abcdefghijkl");
}

#[test]
fn test_show_prints_plain_fields_verbatim() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.show("config.sops.env");
    assert_success(&output);

    assert_stdout_contains(&output, "  DB_HOST: localhost\n");
    assert_stdout_contains(&output, "  DB_PORT: 5432\n");
    assert_stdout_contains(&output, "  DB_MAX_CONNECTIONS: 20\n");
    assert_stdout_contains(&output, "  GOOGLE_CLIENT_ID: 1234.apps.googleusercontent.com\n");
    assert_stdout_contains(&output, "  ENVIRONMENT: staging\n");
}

#[test]
fn test_show_renders_missing_field_as_empty() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.show("config.sops.env");
    assert_success(&output);

    assert_stdout_contains(&output, "  JWT_SECRET: \n");
    assert_stdout_contains(&output, "  REDIS_PORT: 0\n");
    assert_stdout_excludes(&output, "CUSTOM_SETTING");
}

#[test]
fn test_show_groups_in_fixed_order() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.show("config.sops.env");
    assert_success(&output);

    let out = stdout(&output);
    let database = out.find("Database:").unwrap();
    let cache = out.find("Cache:").unwrap();
    let keys = out.find("Encryption Keys:").unwrap();
    assert!(database < cache && cache < keys);
}

#[test]
fn test_show_prints_masked_dsn() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.show("config.sops.env");
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
fn test_show_reveal() {
    let t = Test::with_document("config.sops.env", SAMPLE_ENV);

    let output = t.show_reveal("config.sops.env");
    assert_success(&output);

    assert_stdout_contains(&output, &format!("  DB_PASSWORD: {}\n", DB_PASSWORD));
    assert_stderr_contains(&output, "clear text");
}

#[test]
fn test_show_nested_document() {
    let t = Test::with_document("config.sops.yaml", SAMPLE_YAML);

    let output = t.show("config.sops.yaml");
    assert_success(&output);

    assert_stdout_contains(&output, "  DB_HOST: db.internal\n");
    assert_stdout_contains(&output, "  DB_PORT: 5433\n");
    assert_stdout_contains(&output, "  DB_NAME: orders\n");
    assert_stdout_contains(&output, "  REDIS_ADDR: cache.internal\n");
    assert_stdout_contains(&output, "  REDIS_DB: 3\n");
    assert_stdout_contains(
        &output,
        &format!("  DB_PASSWORD: {}\n", mask("yaml_db_password_987")),
    );
    assert_stdout_contains(
        &output,
        &format!("  JWT_SECRET: {}\n", mask("yaml-jwt-signing-secret")),
    );
    assert_stdout_excludes(&output, "yaml_db_password_987");
}

#[test]
fn test_show_nested_document_usage_lines() {
    let t = Test::with_document("config.sops.yaml", SAMPLE_YAML);

    let output = t.show("config.sops.yaml");
    assert_success(&output);

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
    assert_stdout_excludes(&output, "yaml_redis_pw");
}

#[test]
fn test_show_blank_numeric_value() {
    let t = Test::with_document("config.sops.env", "DB_HOST=localhost\nDB_PORT=\n");

    let output = t.show("config.sops.env");
    assert_success(&output);
    assert_stdout_contains(&output, "  DB_PORT: 0\n");
    assert_stdout_contains(&output, "Database DSN: postgresql://:@localhost:/");
}

#[test]
fn test_show_uses_configured_default_file() {
    let t = Test::new();
    t.write_config("[decryptor]\ncommand = \"cat\"\nargs = []\n\n[load]\nfile = \"prod.env\"\n");
    t.write("prod.env", "DB_HOST=prod-db\n");

    let output = t.cmd().arg("show").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "  DB_HOST: prod-db\n");
}

#[test]
fn test_show_format_override() {
    let t = Test::new();
    t.write_config("[decryptor]\ncommand = \"cat\"\nargs = []\n\n[load]\nformat = \"yaml\"\n");
    t.write("secrets.enc", "DB_HOST: yaml-host\n");

    let output = t.show("secrets.enc");
    assert_success(&output);
    assert_stdout_contains(&output, "  DB_HOST: yaml-host\n");
}

//! Tests for error rendering, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

const NO_HOME: &str = "/nonexistent/userguard-test-home";

/// The binary, run away from any real configuration: no local
/// `.userguard.toml`, no per-user config, no `USERGUARD` environment.
fn userguard() -> Command {
    let mut cmd = Command::cargo_bin("userguard").unwrap();
    cmd.current_dir(env!("CARGO_TARGET_TMPDIR"))
        .env("HOME", NO_HOME)
        .env("XDG_CONFIG_HOME", NO_HOME)
        .env_remove("USERGUARD__OUTPUT__FORMAT")
        .env_remove("USERGUARD__OUTPUT__NO_COLOR")
        .env_remove("USERGUARD_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_rejected_record_lists_every_field() {
    userguard()
        .args(["check", "create", "--email", "bad", "--first-name", "J", "--last-name", "D"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("email: Please enter a valid email address"))
        .stdout(predicate::str::contains("firstName: First name must be between 2 and 50"))
        .stdout(predicate::str::contains("lastName: Last name must be between 2 and 50"))
        .stderr(predicate::str::contains("failed validation with 3 error(s)"));
}

#[test]
fn test_create_rejection_suggests_fixes() {
    userguard()
        .args(["create", "--email", "a@b.com", "--first-name", "John", "--last-name", "D"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Validation failed"))
        .stderr(predicate::str::contains("Last name: Last name must be between"));
}

#[test]
fn test_create_rejection_json_payload_on_stdout() {
    userguard()
        .args(["--output-format", "json", "create", "--email", "nope"])
        .args(["--first-name", "John", "--last-name", "Doe"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""code": "VALIDATION_ERROR""#))
        .stdout(predicate::str::contains(r#""message": "Validation failed""#))
        .stdout(predicate::str::contains(r#""field": "email""#));
}

#[test]
fn test_rejection_reported_once_at_default_level() {
    userguard()
        .args(["create", "--email", "nope", "--first-name", "John", "--last-name", "Doe"])
        .assert()
        .code(2)
        .stderr(predicate::function(|err: &str| {
            err.matches("Validation failed").count() == 1
        }));
}

#[test]
fn test_missing_input_file_is_not_found() {
    userguard()
        .args(["check", "create", "--input", "/no/such/user.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Input file not found"))
        .stderr(predicate::str::contains("stdin"));
}

#[test]
fn test_malformed_json_is_user_error() {
    userguard()
        .args(["check", "create", "--input", "-"])
        .write_stdin("{ not json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Malformed record in stdin"))
        .stderr(predicate::str::contains("camelCase"));
}

#[test]
fn test_missing_explicit_config_exits_with_config_code() {
    userguard()
        .args(["--config", "/no/such/userguard.toml", "rules"])
        .assert()
        .code(4);
}

#[test]
fn test_unknown_config_key() {
    userguard()
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_shows_cause_chain() {
    userguard()
        .args(["-v", "check", "create", "--input", "-"])
        .write_stdin("[1, 2]")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Caused by"));
}

#[test]
fn test_null_required_field_is_a_field_error() {
    userguard()
        .args(["check", "create", "--input", "-"])
        .write_stdin(r#"{"email":null,"firstName":"John","lastName":"Doe"}"#)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("email: Please enter a valid email address"))
        .stderr(predicate::str::contains("Malformed").not());
}

#[test]
fn test_null_in_patch_is_checked() {
    userguard()
        .args(["check", "update", "--input", "-"])
        .write_stdin(r#"{"lastName":null}"#)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("lastName: Last name must be between 2 and 50"));
}

#[test]
fn test_user_and_patch_cannot_both_be_stdin() {
    userguard()
        .args(["update", "--user", "-", "--input", "-"])
        .write_stdin("{}")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot both read from stdin"));
}

#[test]
fn test_unknown_rule_field_is_not_found() {
    userguard()
        .args(["rules", "--field", "nickname"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown field: nickname"))
        .stderr(predicate::str::contains("Known fields: email, firstName, lastName, bio"));
}

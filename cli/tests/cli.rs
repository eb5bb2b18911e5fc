//! Binary exit codes and stderr

use assert_cmd::Command;
use predicates::prelude::*;

fn coolctl() -> Command {
    let mut cmd = Command::cargo_bin("coolctl").unwrap();
    cmd.env_remove("COOLIFY_URL")
        .env_remove("COOLIFY_TOKEN")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_exits_zero() {
    coolctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("db-create"));
}

#[test]
fn test_no_command_prints_help() {
    coolctl().assert().success();
}

#[test]
fn test_missing_configuration_exits_one() {
    coolctl()
        .arg("projects")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "COOLIFY_URL and COOLIFY_TOKEN must be set",
        ));
}

#[test]
fn test_unknown_command_exits_one() {
    coolctl()
        .env("COOLIFY_URL", "http://127.0.0.1:9")
        .env("COOLIFY_TOKEN", "t")
        .arg("frobnicate")
        .assert()
        .code(1);
}

#[test]
fn test_missing_argument_exits_one() {
    coolctl()
        .env("COOLIFY_URL", "http://127.0.0.1:9")
        .env("COOLIFY_TOKEN", "t")
        .arg("project")
        .assert()
        .code(1);
}

#[test]
fn test_invalid_database_type_exits_two() {
    coolctl()
        .env("COOLIFY_URL", "http://127.0.0.1:9")
        .env("COOLIFY_TOKEN", "t")
        .args(["db-create", "postgres", "s-1", "p-1", "production", "orders"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Validation error:"))
        .stderr(predicate::str::contains("postgresql"));
}

#[test]
fn test_invalid_build_pack_exits_two() {
    coolctl()
        .args([
            "--url",
            "http://127.0.0.1:9",
            "--token",
            "t",
            "app-create",
            "p-1",
            "production",
            "api",
            "invalid-value",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("buildPack"));
}

#[test]
fn test_unreachable_instance_exits_three() {
    coolctl()
        .env("COOLIFY_URL", "http://127.0.0.1:9")
        .env("COOLIFY_TOKEN", "t")
        .args(["--timeout", "5", "health"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Status:").not());
}

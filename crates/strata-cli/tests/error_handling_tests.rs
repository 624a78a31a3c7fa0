//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn strata() -> Command {
    Command::cargo_bin("strata").unwrap()
}

#[test]
fn invalid_app_name_dotfile() {
    strata()
        .args(["new", ".hidden", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid app name"))
        .stderr(predicate::str::contains("Suggestions"));
}

#[test]
fn cancelled_confirmation_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    strata()
        .current_dir(temp.path())
        .args(["new", "blog"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cancelled"));

    assert!(!temp.path().join("blog").exists());
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    strata()
        .args(["--config", "/no/such/file.toml", "layers"])
        .assert()
        .failure()
        .code(4);
}

#[test]
#[cfg(unix)]
fn readonly_target_fails_without_success_message() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    std::fs::set_permissions(temp.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores mode bits; nothing to assert in that case.
    if std::fs::write(temp.path().join("probe"), "x").is_ok() {
        return;
    }

    strata()
        .current_dir(temp.path())
        .args(["new", "blog", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Scaffolding failed"))
        .stdout(predicate::str::contains("was created").not());

    std::fs::set_permissions(temp.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
}

//! Integration tests for strata-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn strata() -> Command {
    Command::cargo_bin("strata").unwrap()
}

/// Every path the scaffolder promises to create, relative to the app root.
const EXPECTED_PATHS: &[&str] = &[
    "presentation/__init__",
    "presentation/views",
    "presentation/urls",
    "presentation/serializers",
    "application/__init__",
    "application/services",
    "domain/__init__",
    "domain/validators/__init__",
    "domain/validators/validators",
    "domain/selectors/__init__",
    "domain/selectors/selectors",
    "domain/utilities/__init__",
    "domain/utilities/utilities",
    "infrastructure/__init__",
    "infrastructure/models",
    ".env",
];

#[test]
fn help_flag() {
    strata()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("layers"));
}

#[test]
fn version_flag() {
    strata()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_command_help() {
    strata()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn new_creates_full_tree() {
    let temp = TempDir::new().unwrap();

    strata()
        .current_dir(temp.path())
        .args(["new", "blog", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blog"));

    let root = temp.path().join("blog");
    for rel in EXPECTED_PATHS {
        assert!(root.join(rel).is_file(), "missing file: {rel}");
    }

    // Layer markers are empty; boilerplate files are not.
    for layer in ["presentation", "application", "domain", "infrastructure"] {
        let marker = root.join(layer).join("__init__");
        assert_eq!(fs::metadata(&marker).unwrap().len(), 0, "{layer}/__init__");
    }
    assert!(fs::metadata(root.join("presentation/views")).unwrap().len() > 0);
}

#[test]
fn env_file_matches_template() {
    let temp = TempDir::new().unwrap();

    strata()
        .current_dir(temp.path())
        .args(["new", "blog", "--yes"])
        .assert()
        .success();

    let env = fs::read_to_string(temp.path().join("blog/.env")).unwrap();
    assert_eq!(
        env,
        "# Django environment variables\n\
         DEBUG=True\n\
         SECRET_KEY=your-secret-key-here\n\
         DATABASE_URL=sqlite:///db.sqlite3\n\
         ALLOWED_HOSTS=localhost,127.0.0.1\n\
         \n\
         # Add your environment variables below\n"
    );
}

#[test]
fn validators_file_is_a_noop_stub() {
    let temp = TempDir::new().unwrap();

    strata()
        .current_dir(temp.path())
        .args(["new", "x", "--yes"])
        .assert()
        .success();

    let validators = fs::read_to_string(temp.path().join("x/domain/validators/validators")).unwrap();
    assert_eq!(
        validators,
        "# Domain validators\n\
         def validate_entity(entity):\n\
         \x20   # TODO: implement validation logic\n\
         \x20   pass\n"
    );
}

#[test]
fn rerun_restores_identical_content() {
    let temp = TempDir::new().unwrap();

    strata()
        .current_dir(temp.path())
        .args(["new", "blog", "--yes"])
        .assert()
        .success();

    let views = temp.path().join("blog/presentation/views");
    let original = fs::read_to_string(&views).unwrap();
    fs::write(&views, "edited by hand").unwrap();

    strata()
        .current_dir(temp.path())
        .args(["new", "blog", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&views).unwrap(), original);
}

#[test]
fn dry_run_creates_nothing() {
    let temp = TempDir::new().unwrap();

    strata()
        .current_dir(temp.path())
        .args(["new", "blog", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains(".env"));

    assert!(!temp.path().join("blog").exists());
}

#[test]
fn quiet_silences_stdout() {
    let temp = TempDir::new().unwrap();

    strata()
        .current_dir(temp.path())
        .args(["-q", "new", "blog", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("blog/.env").is_file());
}

#[test]
fn app_name_may_be_a_relative_path() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("apps")).unwrap();

    strata()
        .current_dir(temp.path())
        .args(["new", "apps/shop", "--yes"])
        .assert()
        .success();

    assert!(temp.path().join("apps/shop/presentation/views").is_file());
}

#[test]
fn layers_table_lists_everything() {
    strata()
        .arg("layers")
        .assert()
        .success()
        .stdout(predicate::str::contains("presentation"))
        .stdout(predicate::str::contains("validators"))
        .stdout(predicate::str::contains(".env"));
}

#[test]
fn layers_json_is_parseable() {
    let output = strata()
        .args(["layers", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let layers = parsed.as_array().unwrap();
    assert_eq!(layers.len(), 4);
    assert_eq!(layers[0]["name"], "presentation");
}

#[test]
fn shell_completions() {
    strata()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn config_path_prints_a_path() {
    strata()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config").or(predicate::str::contains(".strata.toml")));
}

#[test]
fn config_list_prints_defaults() {
    strata()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("always_yes"));
}

#[test]
fn explicit_config_file_is_honoured() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("strata.toml");
    fs::write(&cfg, "[scaffold]\nalways_yes = true\n").unwrap();

    // always_yes from the file removes the need for --yes.
    strata()
        .current_dir(temp.path())
        .args(["--config", "strata.toml", "new", "blog"])
        .assert()
        .success();

    assert!(temp.path().join("blog/.env").is_file());
}

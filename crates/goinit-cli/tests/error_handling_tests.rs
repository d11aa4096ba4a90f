//! Tests for error handling, exit codes and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn goinit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("goinit").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .env_remove("GOINIT_TEMPLATES_DIR")
        .env_remove("GOINIT_DEFAULTS__ROUTER");
    cmd
}

#[test]
fn missing_module_is_a_user_error() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["new", "myapi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Required field missing: module"));

    assert!(!temp.path().join("myapi.zip").exists());
}

#[test]
fn missing_name_is_a_user_error() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["new", "-m", "github.com/acme/myapi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("project name"));
}

#[test]
fn unknown_router_flag_is_rejected_by_parser() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["preview", "--router", "gorilla"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gorilla"));
}

#[test]
fn missing_request_file_is_not_found() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["new", "--from", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Request file not found"));
}

#[test]
fn malformed_request_file_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bad.json"), "{ \"project_name\": ").unwrap();

    goinit(temp.path())
        .args(["preview", "--from", "bad.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid request file"))
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn unknown_request_selectors_fall_back() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("req.json"),
        r#"{ "project_name": "svc", "structure": "microservices", "router": "gorilla" }"#,
    )
    .unwrap();

    goinit(temp.path())
        .args(["--format", "plain", "preview", "--from", "req.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "cmd/svc/main.go\ninternal/handler/handler.go\n",
        ));
}

#[test]
fn invalid_configured_default_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".goinit.toml"),
        "[defaults]\nrouter = \"gorilla\"\n",
    )
    .unwrap();

    goinit(temp.path())
        .args(["preview"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown router 'gorilla'"));
}

#[test]
fn unreadable_config_file_is_a_config_error() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["--config", "absent.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn missing_template_dir_is_not_found() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".goinit.toml"),
        "[templates]\nlocal_path = \"no-such-dir\"\n",
    )
    .unwrap();

    goinit(temp.path())
        .args(["new", "myapi", "-m", "m"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template directory not found"));
}

#[test]
fn broken_template_names_the_template() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir_all(templates.join("flat")).unwrap();
    fs::write(templates.join("flat/main.go.tmpl"), "{% if %}").unwrap();

    // ./templates is discovered without any configuration.
    goinit(temp.path())
        .args(["new", "tiny", "-m", "m", "-s", "flat"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("flat/main.go.tmpl"));

    assert!(!temp.path().join("tiny.zip").exists());
}

#[test]
fn unknown_config_key_lists_known_keys() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("defaults.router"));
}

#[test]
fn unknown_request_project_type_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("req.json"),
        r#"{ "project_name": "svc", "module": "m", "project_type": "worker" }"#,
    )
    .unwrap();

    goinit(temp.path())
        .args(["new", "--from", "req.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown project type 'worker'"))
        .stderr(predicate::str::contains("rest-api, cli, grpc, library"));

    assert!(!temp.path().join("svc.zip").exists());
}

#[test]
fn project_name_escaping_output_dir_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("out")).unwrap();

    goinit(temp.path())
        .args(["new", "../escaped", "-m", "m", "--extract", "out", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name '../escaped'"));

    assert!(!temp.path().join("escaped").exists());
}

//! Integration tests for the goinit binary.

use std::fs;
use std::io::Read;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `goinit` command isolated from the caller's config and environment.
fn goinit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("goinit").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .env_remove("GOINIT_TEMPLATES_DIR")
        .env_remove("GOINIT_DEFAULTS__ROUTER")
        .env_remove("GOINIT_DEFAULTS__STRUCTURE")
        .env_remove("GOINIT_OUTPUT__FORMAT");
    cmd
}

fn zip_entries(path: &Path) -> Vec<String> {
    let file = fs::File::open(path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    archive.file_names().map(str::to_string).collect()
}

fn zip_entry(path: &Path, name: &str) -> String {
    let file = fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut text = String::new();
    entry.read_to_string(&mut text).unwrap();
    text
}

#[test]
fn help_flag() {
    let temp = TempDir::new().unwrap();
    goinit(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    goinit(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_writes_archive_named_after_project() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["new", "myapi", "-m", "github.com/acme/myapi", "-f", "docker"])
        .assert()
        .success();

    let archive = temp.path().join("myapi.zip");
    let entries = zip_entries(&archive);
    assert!(entries.contains(&"myapi/cmd/myapi/main.go".to_string()));
    assert!(entries.contains(&"myapi/Dockerfile".to_string()));
    assert!(entries.contains(&"myapi/go.sum".to_string()));

    let go_mod = zip_entry(&archive, "myapi/go.mod");
    assert!(go_mod.starts_with("module github.com/acme/myapi\n"));
    assert!(go_mod.contains("github.com/go-chi/chi/v5 v5.0.11"));
}

#[test]
fn new_honours_output_path() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args([
            "new",
            "svc",
            "-m",
            "example.com/svc",
            "--structure",
            "flat",
            "--output",
            "build/svc.zip",
        ])
        .assert()
        .success();

    let entries = zip_entries(&temp.path().join("build/svc.zip"));
    assert_eq!(
        entries,
        [
            "svc/main.go",
            "svc/README.md",
            "svc/.gitignore",
            "svc/go.mod",
            "svc/go.sum"
        ]
    );
}

#[test]
fn new_refuses_existing_archive_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("myapi.zip"), b"keep me").unwrap();

    goinit(temp.path())
        .args(["new", "myapi", "-m", "github.com/acme/myapi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read(temp.path().join("myapi.zip")).unwrap(), b"keep me");

    goinit(temp.path())
        .args(["new", "myapi", "-m", "github.com/acme/myapi", "--force"])
        .assert()
        .success();
    assert!(zip_entries(&temp.path().join("myapi.zip")).contains(&"myapi/go.mod".to_string()));
}

#[test]
fn new_extracts_directory() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args([
            "new",
            "myapi",
            "-m",
            "github.com/acme/myapi",
            "--structure",
            "hexagonal",
            "--extract",
            "src",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps"));

    let root = temp.path().join("src/myapi");
    assert!(root.join("internal/core/domain/user.go").is_file());
    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.contains("github.com/google/uuid v1.5.0"));
    assert_eq!(fs::read(root.join("go.sum")).unwrap(), b"");
}

#[test]
fn new_extract_refuses_existing_project() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("myapi")).unwrap();

    goinit(temp.path())
        .args(["new", "myapi", "-m", "m", "--extract", ".", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn new_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["new", "myapi", "-m", "github.com/acme/myapi", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("myapi/cmd/myapi/main.go"));

    assert!(!temp.path().join("myapi.zip").exists());
}

#[test]
fn new_reads_request_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("request.json"),
        r#"{
            "project_name": "orders",
            "module": "github.com/acme/orders",
            "structure": "feature",
            "router": "gin",
            "use_database": true,
            "dependencies": [{ "name": "MySQL Driver", "pkg": "github.com/go-sql-driver/mysql" }]
        }"#,
    )
    .unwrap();

    goinit(temp.path())
        .args(["new", "--from", "request.json"])
        .assert()
        .success();

    let archive = temp.path().join("orders.zip");
    assert!(zip_entries(&archive).contains(&"orders/internal/user/handler.go".to_string()));
    let go_mod = zip_entry(&archive, "orders/go.mod");
    assert!(go_mod.contains("github.com/gin-gonic/gin v1.9.1"));
    assert!(go_mod.contains("github.com/go-sql-driver/mysql v1.7.1"));
    assert!(!go_mod.contains("pgx"));
}

#[test]
fn preview_lists_files_in_order() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["--format", "plain", "preview", "myapi"])
        .assert()
        .success()
        .stdout(
            "cmd/myapi/main.go\n\
             internal/handler/handler.go\n\
             README.md\n\
             Makefile\n\
             .gitignore\n\
             .env.example\n\
             go.mod\n\
             go.sum\n",
        );
}

#[test]
fn preview_json_is_an_array() {
    let temp = TempDir::new().unwrap();

    let out = goinit(temp.path())
        .args(["--format", "json", "preview", "--structure", "flat"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let files: Vec<String> = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(files, ["main.go", "README.md", ".gitignore", "go.mod", "go.sum"]);
}

#[test]
fn deps_prints_sorted_requirements() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args([
            "--format",
            "plain",
            "deps",
            "--router",
            "gin",
            "--logger",
            "zap",
            "-f",
            "redis",
        ])
        .assert()
        .success()
        .stdout(
            "github.com/gin-gonic/gin v1.9.1\n\
             github.com/redis/go-redis/v9 v9.4.0\n\
             go.uber.org/zap v1.26.0\n",
        );
}

#[test]
fn deps_free_form_router_replaces_selected_one() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args([
            "--format",
            "plain",
            "deps",
            "--router",
            "chi",
            "--dep",
            "Gin Web Framework",
        ])
        .assert()
        .success()
        .stdout("github.com/gin-gonic/gin v1.9.1\n");
}

#[test]
fn list_shows_every_layout() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["--format", "plain", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standard\tcmd/{project_name}/main.go"))
        .stdout(predicate::str::contains("flat\tmain.go"))
        .stdout(predicate::str::contains("feature\tinternal/user/model.go"))
        .stdout(predicate::str::contains("hexagonal\tinternal/core/port/repository.go"));
}

#[test]
fn config_get_reads_local_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".goinit.toml"),
        "[defaults]\nrouter = \"echo\"\n",
    )
    .unwrap();

    goinit(temp.path())
        .args(["config", "get", "defaults.router"])
        .assert()
        .success()
        .stdout("echo\n");

    goinit(temp.path())
        .args(["config", "get", "defaults.structure"])
        .assert()
        .success()
        .stdout("standard\n");
}

#[test]
fn environment_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".goinit.toml"),
        "[defaults]\nrouter = \"echo\"\n",
    )
    .unwrap();

    goinit(temp.path())
        .env("GOINIT_DEFAULTS__ROUTER", "fiber")
        .args(["--format", "plain", "deps"])
        .assert()
        .success()
        .stdout("github.com/gofiber/fiber/v2 v2.52.0\n");
}

#[test]
fn init_local_writes_loadable_config() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join(".goinit.toml")).unwrap();
    assert!(written.contains("[defaults]"));

    goinit(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(".goinit.toml\n");
}

#[test]
fn configured_template_dir_overrides_builtin() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("custom");
    fs::create_dir_all(templates.join("flat")).unwrap();
    fs::write(
        templates.join("flat/main.go.tmpl"),
        "package main\n\n// {{ project_name }}\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("goinit.toml"),
        format!("[templates]\nlocal_path = {:?}\n", templates.display().to_string()),
    )
    .unwrap();

    goinit(temp.path())
        .args(["-c", "goinit.toml", "new", "tiny", "-m", "m", "-s", "flat"])
        .assert()
        .success();

    let archive = temp.path().join("tiny.zip");
    // Only main.go has a template; the rest are skipped.
    assert_eq!(zip_entries(&archive), ["tiny/main.go", "tiny/go.mod", "tiny/go.sum"]);
    assert_eq!(zip_entry(&archive, "tiny/main.go"), "package main\n\n// tiny\n");
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();

    goinit(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("goinit"));
}

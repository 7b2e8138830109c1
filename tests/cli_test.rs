//! End-to-end tests for the `gcore` binary.
//!
//! Each test points `HOME` at a temporary directory so no real configuration
//! is read or written, and clears the `GCORE_*` variables from the parent
//! environment.

#![allow(deprecated)]

use std::path::Path;

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;

const TOKEN: &str = "cli-test-token";

fn gcore(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gcore").unwrap();
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("GCORE_API_TOKEN")
        .env_remove("GCORE_API_URL")
        .env_remove("GCORE_LOG")
        .env_remove("XDG_CONFIG_HOME");
    cmd
}

fn gcore_against(home: &Path, server: &Server) -> Command {
    let mut cmd = gcore(home);
    cmd.env("GCORE_API_TOKEN", TOKEN)
        .env("GCORE_API_URL", server.url());
    cmd
}

#[test]
fn test_help_lists_services() {
    let home = tempfile::tempdir().unwrap();
    gcore(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cdn"))
        .stdout(predicate::str::contains("dns"))
        .stdout(predicate::str::contains("storage"));
}

#[test]
fn test_version() {
    let home = tempfile::tempdir().unwrap();
    gcore(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gcore version"));
}

#[test]
fn test_missing_token_is_config_error() {
    let home = tempfile::tempdir().unwrap();
    gcore(home.path())
        .args(["cdn", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("GCORE_API_TOKEN"));
}

#[test]
fn test_cdn_list_json() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/cdn/v1/resources")
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_status(200)
        .with_body(r#"[{"id": 42, "cname": "cdn.example.com", "status": "active"}]"#)
        .create();

    let output = gcore_against(home.path(), &server)
        .args(["cdn", "list", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed, json!([{"id": 42, "cname": "cdn.example.com", "status": "active"}]));
    mock.assert();
}

#[test]
fn test_rejected_token_exit_code() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    server.mock("GET", "/dns/v2/zones").with_status(401).create();

    gcore_against(home.path(), &server)
        .args(["dns", "zone", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_not_found_exit_code() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/cdn/v1/resources/999")
        .with_status(404)
        .with_body(r#"{"message": "Resource not found"}"#)
        .create();

    gcore_against(home.path(), &server)
        .args(["cdn", "get", "999"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Resource not found"));
}

#[test]
fn test_delete_without_yes_refuses_when_not_interactive() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    let delete = server
        .mock("DELETE", "/dns/v2/zones/1")
        .with_status(204)
        .expect(0)
        .create();

    gcore_against(home.path(), &server)
        .args(["dns", "zone", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    delete.assert();
}

#[test]
fn test_delete_with_yes_json() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    let delete = server
        .mock("DELETE", "/dns/v2/zones/1")
        .with_status(204)
        .create();

    gcore_against(home.path(), &server)
        .args(["dns", "zone", "delete", "1", "--yes", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deleted\": true"));

    delete.assert();
}

#[test]
fn test_purge_wait_reports_final_status() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    server
        .mock("POST", "/cdn/v1/resources/42/purge")
        .match_body(Matcher::Json(json!({"urls": ["/a.jpg"]})))
        .with_status(201)
        .with_body(r#"{"task_id": "t-1", "status": "pending"}"#)
        .create();
    server
        .mock("GET", "/cdn/v1/resources/42/purge/t-1")
        .with_status(200)
        .with_body(r#"{"status": "completed"}"#)
        .create();

    let output = gcore_against(home.path(), &server)
        .args(["cdn", "purge", "42", "/a.jpg", "--wait", "--interval", "1", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["status"], "completed");
}

#[test]
fn test_login_with_token_saves_config() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    let verify = server
        .mock("GET", "/iam/v1/auth/jwt/verify")
        .match_header("authorization", "Bearer fresh-token")
        .with_status(200)
        .with_body("{}")
        .create();

    gcore(home.path())
        .env("GCORE_API_URL", server.url())
        .args(["auth", "login", "--with-token"])
        .write_stdin("fresh-token\n")
        .assert()
        .success();

    verify.assert();
    let saved =
        std::fs::read_to_string(home.path().join(".config/gcore/config.yaml")).unwrap();
    assert!(saved.contains("api_token: fresh-token"));
}

#[test]
fn test_login_rejected_token_is_not_saved() {
    let home = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/iam/v1/auth/jwt/verify")
        .with_status(401)
        .create();

    gcore(home.path())
        .env("GCORE_API_URL", server.url())
        .args(["auth", "login", "--with-token"])
        .write_stdin("bad-token\n")
        .assert()
        .code(4);

    assert!(!home.path().join(".config/gcore/config.yaml").exists());
}

#[test]
fn test_logout_without_saved_token() {
    let home = tempfile::tempdir().unwrap();
    gcore(home.path())
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved token"));
}

#[test]
fn test_config_path() {
    let home = tempfile::tempdir().unwrap();
    gcore(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".config/gcore/config.yaml"));
}

#[test]
fn test_download_defaults_to_last_key_segment() {
    let home = tempfile::tempdir().unwrap();
    let workdir = tempfile::tempdir().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/storage/v1/buckets/backups/objects/reports/2026/summary.csv")
        .with_status(200)
        .with_body("a,b\n1,2\n")
        .create();

    gcore_against(home.path(), &server)
        .current_dir(workdir.path())
        .args(["storage", "object", "download", "backups", "reports/2026/summary.csv"])
        .assert()
        .success();

    mock.assert();
    let written = std::fs::read_to_string(workdir.path().join("summary.csv")).unwrap();
    assert_eq!(written, "a,b\n1,2\n");
}

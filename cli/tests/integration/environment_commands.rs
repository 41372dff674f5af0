//! Integration tests for `create`, `render`, `list`, and `delete`.
//!
//! Every test runs with `--dev` (or the mock credential) so the binary uses
//! the in-memory stand-in.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("meeseeks"));
        cmd.env("NO_COLOR", "1")
            .env("MEESEEKS_CONFIG", self.dir.path().join("config.yaml"))
            .env_remove("ARGOCD_URL")
            .env_remove("ARGOCD_TOKEN")
            .env_remove("DEV_MODE")
            .arg("--dev");
        cmd
    }

    fn json(&self, args: &[&str]) -> (bool, serde_json::Value) {
        let output = self.cmd().args(args).arg("--json").output().unwrap();
        let value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
        (output.status.success(), value)
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn test_list_shows_sample_environments() {
    Env::new()
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("test-env-1"))
        .stdout(predicate::str::contains("staging-app"))
        .stdout(predicate::str::contains("Progressing"))
        .stdout(predicate::str::contains("https://demo-service.dev.example.com"));
}

#[test]
fn test_list_json_is_an_items_envelope() {
    let (ok, value) = Env::new().json(&["list"]);
    assert!(ok);
    let items = value["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], "test-env-1");
    assert_eq!(items[0]["status"], "Healthy");
}

#[test]
fn test_list_uses_configured_domain() {
    let env = Env::new();
    std::fs::write(env.dir.path().join("config.yaml"), "app_domain: preview.internal\n").unwrap();
    let (_, value) = env.json(&["list"]);
    assert_eq!(value["items"][1]["url"], "https://staging-app.preview.internal");
}

#[test]
fn test_mock_token_selects_stand_in_without_dev_flag() {
    let env = Env::new();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("meeseeks"));
    cmd.env("MEESEEKS_CONFIG", env.dir.path().join("config.yaml"))
        .env("ARGOCD_TOKEN", "mock-token")
        .env("ARGOCD_URL", "http://127.0.0.1:1")
        .env_remove("DEV_MODE")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("test-env-1"));
}

// ── create ────────────────────────────────────────────────────────────────────

#[test]
fn test_create_reports_url() {
    Env::new()
        .cmd()
        .args(["create", "--name", "demo", "--branch", "main", "-d", "redis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("submitting 'demo' with 1 patch(es)"))
        .stdout(predicate::str::contains("https://demo.dev.example.com"));
}

#[test]
fn test_create_in_dev_mode_warns_and_confirms() {
    Env::new()
        .cmd()
        .args(["create", "--name", "demo", "--branch", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠ dev mode: nothing is sent to Argo CD"))
        .stdout(predicate::str::contains("✓ environment 'demo' submitted"));
}

#[test]
fn test_create_json_acknowledgement() {
    let (ok, value) = Env::new().json(&["create", "--name", "demo", "--branch", "main"]);
    assert!(ok);
    assert_eq!(value["id"], "demo");
    assert_eq!(value["status"], "creating");
    assert_eq!(value["url"], "https://demo.dev.example.com");
}

#[test]
fn test_create_invalid_name_fails() {
    Env::new()
        .cmd()
        .args(["create", "--name", "Bad_Name", "--branch", "main"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: invalid name"));
}

#[test]
fn test_create_invalid_request_json_error() {
    let (ok, value) = Env::new().json(&["create", "--name", "demo", "--branch", "main", "--memory", "256mi"]);
    assert!(!ok);
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "validation_failed");
    assert!(value["message"].as_str().unwrap().contains("memory"));
}

#[test]
fn test_create_missing_branch_fails() {
    Env::new()
        .cmd()
        .args(["create", "--name", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch cannot be empty"));
}

// ── render ────────────────────────────────────────────────────────────────────

#[test]
fn test_render_prints_yaml_descriptor() {
    Env::new()
        .cmd()
        .args(["render", "--name", "demo", "--branch", "main", "-d", "postgresql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: Application"))
        .stdout(predicate::str::contains("namespace: env-demo"))
        .stdout(predicate::str::contains("managed-by: meeseeks"))
        .stdout(predicate::str::contains("postgres:14"));
}

#[test]
fn test_render_json_carries_patches() {
    let (ok, value) = Env::new().json(&[
        "render", "--name", "demo", "--branch", "main", "--cpu", "250m", "--memory", "512Mi",
        "--replicas", "3", "-e", "B=2", "-e", "A=1",
    ]);
    assert!(ok);
    let patches = value["spec"]["source"]["kustomize"]["patches"].as_array().unwrap();
    assert_eq!(patches.len(), 2);
    assert_eq!(patches[0]["target"]["kind"], "Deployment");
    assert_eq!(patches[0]["target"]["name"], "app");
    let env_patch = patches[1]["patch"].as_str().unwrap();
    assert!(env_patch.find("name: A").unwrap() < env_patch.find("name: B").unwrap());
}

#[test]
fn test_render_without_customization_omits_kustomize() {
    let (ok, value) = Env::new().json(&["render", "--name", "demo", "--branch", "main"]);
    assert!(ok);
    assert!(value["spec"]["source"].get("kustomize").is_none());
    assert_eq!(value["spec"]["syncPolicy"]["syncOptions"][0], "CreateNamespace=true");
}

#[test]
fn test_render_reads_request_file() {
    let env = Env::new();
    let request = env.dir.path().join("request.yaml");
    std::fs::write(
        &request,
        "name: from-file\nbranch: feature-x\ndependencies: [mongodb]\nenv_type: staging\n",
    )
    .unwrap();
    let (ok, value) = env.json(&["render", "--file", request.to_str().unwrap()]);
    assert!(ok);
    assert_eq!(value["metadata"]["name"], "from-file");
    assert_eq!(value["metadata"]["labels"]["env-type"], "staging");
    assert_eq!(
        value["spec"]["source"]["kustomize"]["patches"][0]["target"]["name"],
        "mongodb"
    );
}

#[test]
fn test_render_oversized_replicas_is_a_validation_error() {
    let env = Env::new();
    let request = env.dir.path().join("request.json");
    std::fs::write(
        &request,
        r#"{"name": "demo", "branch": "main", "replicas": 10000000000}"#,
    )
    .unwrap();
    let (ok, value) = env.json(&["render", "--file", request.to_str().unwrap()]);
    assert!(!ok);
    assert_eq!(value["code"], "validation_failed");
    assert!(value["message"].as_str().unwrap().contains("replicas"));
}

#[test]
fn test_render_unknown_dependency_fails() {
    Env::new()
        .cmd()
        .args(["render", "--name", "demo", "--branch", "main", "-d", "kafka"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported dependency: kafka"));
}

// ── delete ────────────────────────────────────────────────────────────────────

#[test]
fn test_delete_with_yes_succeeds() {
    Env::new()
        .cmd()
        .args(["delete", "demo", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("environment 'demo' deleted"));
}

#[test]
fn test_delete_json_acknowledgement() {
    let (ok, value) = Env::new().json(&["delete", "demo", "--yes"]);
    assert!(ok);
    assert_eq!(value["id"], "demo");
    assert_eq!(value["status"], "deleted");
}

#[test]
fn test_delete_rejects_malformed_name() {
    Env::new()
        .cmd()
        .args(["delete", "../argocd", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid name"));
}

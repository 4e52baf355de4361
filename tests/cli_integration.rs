//! Integration tests for the `up` binary.
//!
//! Each test runs the compiled binary against a config file in a temp
//! directory, with the environment stripped of variables that would leak
//! the developer's own profiles into the run.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Test Fixtures
// =============================================================================

const ENV_VARS: &[&str] = &[
    "UP_CONFIG",
    "UP_DOMAIN",
    "UP_PROFILE",
    "UP_ACCOUNT",
    "UP_INSECURE_SKIP_TLS_VERIFY",
    "UP_DEBUG",
    "OVERRIDE_API_ENDPOINT",
    "OVERRIDE_PROXY_ENDPOINT",
    "OVERRIDE_REGISTRY_ENDPOINT",
    "KUBECONFIG",
    "RUST_LOG",
];

/// Temp home holding `config.json` and kubeconfigs.
struct TestHome {
    dir: TempDir,
}

impl TestHome {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config_path(&self) -> PathBuf {
        self.path().join("config.json")
    }

    fn write_config(&self, config: serde_json::Value) {
        std::fs::write(self.config_path(), config.to_string()).unwrap();
    }

    fn write_kubeconfig(&self, file: &str, server: &str, namespace: Option<&str>) -> PathBuf {
        let path = self.path().join(file);
        std::fs::write(&path, kubeconfig_yaml(server, namespace)).unwrap();
        path
    }

    /// `up` with an isolated environment.
    fn up(&self) -> Command {
        let mut cmd = Command::cargo_bin("up").unwrap();
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.path())
            .env("UP_CONFIG", self.config_path());
        cmd
    }
}

fn kubeconfig_yaml(server: &str, namespace: Option<&str>) -> String {
    let ns = namespace
        .map(|n| format!("\n    namespace: {}", n))
        .unwrap_or_default();
    format!(
        "apiVersion: v1\nkind: Config\nclusters:\n- name: c\n  cluster:\n    server: {server}\n\
         contexts:\n- name: admin\n  context:\n    cluster: c\n    user: u{ns}\n\
         current-context: admin\nusers:\n- name: u\n  user:\n    token: t\n"
    )
}

fn cloud_config() -> serde_json::Value {
    serde_json::json!({
        "upbound": {
            "default": "prod",
            "profiles": {
                "prod": { "type": "user", "account": "acme", "session": "s3cr3t" }
            }
        }
    })
}

// =============================================================================
// Context resolution
// =============================================================================

#[test]
fn unknown_profile_fails() {
    let home = TestHome::new();
    home.write_config(cloud_config());

    home.up()
        .args(["--profile", "missing", "controlplane", "delete", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "profile not found with identifier: missing",
        ));
}

#[test]
fn profile_list_tolerates_unknown_profile() {
    let home = TestHome::new();
    home.write_config(cloud_config());

    home.up()
        .env("UP_PROFILE", "missing")
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prod"));
}

#[test]
fn profile_current_hides_session() {
    let home = TestHome::new();
    home.write_config(cloud_config());

    home.up()
        .args(["profile", "current"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"prod\""))
        .stdout(predicate::str::contains("s3cr3t").not());
}

#[test]
fn debug_flag_logs_config_loading_and_resolution() {
    let home = TestHome::new();
    home.write_config(cloud_config());

    home.up()
        .args(["--debug", "profile", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded config"))
        .stderr(predicate::str::contains("resolved context"));
}

#[test]
fn without_debug_stderr_is_quiet() {
    let home = TestHome::new();
    home.write_config(cloud_config());

    home.up()
        .args(["profile", "list"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn invalid_config_fails() {
    let home = TestHome::new();
    std::fs::write(home.config_path(), "{ not json").unwrap();

    home.up()
        .args(["profile", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: failed to parse config file"));
}

// =============================================================================
// ctx current
// =============================================================================

#[test]
fn ctx_current_shows_control_plane() {
    let home = TestHome::new();
    let space = home.write_kubeconfig("space.yaml", "https://space.example.com", None);
    let user = home.write_kubeconfig(
        "user.yaml",
        "https://space.example.com/apis/spaces.upbound.io/v1beta1/namespaces/team-a/controlplanes/ctp-1/k8s",
        None,
    );
    home.write_config(serde_json::json!({
        "upbound": {
            "profiles": {
                "disconnected": { "type": "space", "kubeconfig": space }
            }
        }
    }));

    home.up()
        .args(["ctx", "current", "--kubeconfig"])
        .arg(&user)
        .assert()
        .success()
        .stdout("disconnected/team-a/ctp-1\n");
}

#[test]
fn ctx_current_reads_kubeconfig_env() {
    let home = TestHome::new();
    let space = home.write_kubeconfig("space.yaml", "https://space.example.com", None);
    let user = home.write_kubeconfig("user.yaml", "https://space.example.com", Some("team-a"));
    home.write_config(serde_json::json!({
        "upbound": {
            "profiles": {
                "disconnected": { "type": "space", "kubeconfig": space }
            }
        }
    }));

    home.up()
        .env("KUBECONFIG", &user)
        .args(["ctx", "current"])
        .assert()
        .success()
        .stdout("disconnected/team-a\n");
}

// =============================================================================
// organization delete
// =============================================================================

#[test]
fn org_delete_declined() {
    let home = TestHome::new();
    home.write_config(cloud_config());

    home.up()
        .args(["organization", "delete", "acme"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Are you sure you want to delete this organization? [y/n]",
        ))
        .stderr(predicate::str::contains("error: operation canceled"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn org_delete_confirmed() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/organizations"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{ "id": 3, "name": "acme" }])),
            )
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v1/organizations/3"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let home = TestHome::new();
    home.write_config(cloud_config());

    home.up()
        .args(["org", "delete", "acme", "--override-api-endpoint"])
        .arg(server.uri())
        .write_stdin("Yes\n")
        .assert()
        .success()
        .stdout("Deleting organization acme. This cannot be undone.\nacme deleted\n");
}

// =============================================================================
// controlplane delete
// =============================================================================

#[test]
fn controlplane_delete_sends_session() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/controlPlanes/acme/ctp-1"))
            .and(header("cookie", "SID=s3cr3t"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let home = TestHome::new();
    home.write_config(cloud_config());

    home.up()
        .env("OVERRIDE_API_ENDPOINT", server.uri())
        .args(["controlplane", "delete", "ctp-1"])
        .assert()
        .success()
        .stdout("ctp-1 deleted\n");
}

#[test]
fn controlplane_delete_not_found_succeeds() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        server
    });

    let home = TestHome::new();
    home.write_config(cloud_config());

    home.up()
        .args(["ctp", "delete", "foo", "--override-api-endpoint"])
        .arg(server.uri())
        .assert()
        .success()
        .stdout("Control plane foo not found\n");
}

#[test]
fn controlplane_delete_server_error_fails() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        server
    });

    let home = TestHome::new();
    home.write_config(cloud_config());

    home.up()
        .args(["--quiet", "ctp", "delete", "foo", "--override-api-endpoint"])
        .arg(server.uri())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to delete control plane foo"))
        .stderr(predicate::str::contains("boom"))
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// completion
// =============================================================================

#[test]
fn completion_without_config() {
    let home = TestHome::new();

    home.up()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("organization"));
}

/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from a config file on disk through CLI
/// invocation to the produced document, using `assert_cmd`, `tempfile` and a
/// `mockito` server standing in for the GitHub API.
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn mock_graph(server: &mut ServerGuard) -> Mock {
    let body = json!({
        "data": {
            "repository": {
                "dependencyGraphManifests": {
                    "pageInfo": { "hasNextPage": false, "endCursor": null },
                    "nodes": [{
                        "filename": "requirements.txt",
                        "dependencies": {
                            "pageInfo": { "hasNextPage": false, "endCursor": null },
                            "nodes": [
                                { "packageManager": "PIP", "packageName": "requests", "requirements": "= 2.31.0" }
                            ]
                        }
                    }]
                }
            }
        }
    });

    server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create()
}

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// The binary with a token and no ambient repository or endpoint overrides
fn gh_sbom(workdir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("gh-sbom");
    cmd.current_dir(workdir.path())
        .env_remove("GH_REPO")
        .env_remove("GH_SBOM_API_URL")
        .env_remove("GH_SBOM_GRAPHQL_URL")
        .env_remove("GH_SBOM_CLEARLYDEFINED_URL")
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env("GH_TOKEN", "test-token");
    cmd
}

fn endpoint_config(server: &ServerGuard) -> String {
    format!(
        "repository: octo/demo\napi_url: {url}\ngraphql_url: {url}/graphql\n",
        url = server.url()
    )
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_repository_and_endpoints() {
        let mut server = Server::new();
        let graph = mock_graph(&mut server);
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("gh-sbom.config.yml"), &endpoint_config(&server));

        let output = gh_sbom(&dir).assert().code(0).get_output().stdout.clone();

        graph.assert();
        let doc: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(doc["name"], "github.com/octo/demo");
    }

    #[test]
    fn test_auto_discovery_applies_format() {
        let mut server = Server::new();
        let _graph = mock_graph(&mut server);
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("gh-sbom.config.yml"),
            &format!("{}format: cyclonedx\n", endpoint_config(&server)),
        );

        let output = gh_sbom(&dir).assert().code(0).get_output().stdout.clone();

        let bom: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(bom["bomFormat"], "CycloneDX");
    }

    #[test]
    fn test_unknown_field_warns() {
        let mut server = Server::new();
        let _graph = mock_graph(&mut server);
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("gh-sbom.config.yml"),
            &format!("{}check_cve: true\n", endpoint_config(&server)),
        );

        gh_sbom(&dir)
            .assert()
            .code(0)
            .stderr(predicate::str::contains(
                "Unknown config field 'check_cve' will be ignored",
            ));
    }
}

// ============================================================================
// Explicit Config Path Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let mut server = Server::new();
        let graph = mock_graph(&mut server);
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, &endpoint_config(&server));

        gh_sbom(&dir)
            .arg("--config")
            .arg(&config_path)
            .assert()
            .code(0);

        graph.assert();
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        let dir = TempDir::new().unwrap();

        gh_sbom(&dir)
            .args(["--config", "does-not-exist.yml", "-r", "octo/demo"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}

// ============================================================================
// Precedence Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let mut server = Server::new();
        let _graph = mock_graph(&mut server);
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("gh-sbom.config.yml"),
            &format!("{}format: spdx\n", endpoint_config(&server)),
        );

        let output = gh_sbom(&dir)
            .arg("--cyclonedx")
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let bom: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(bom["bomFormat"], "CycloneDX");
    }

    #[test]
    fn test_cli_repository_overrides_config() {
        let mut server = Server::new();
        let _graph = mock_graph(&mut server);
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("gh-sbom.config.yml"), &endpoint_config(&server));

        let output = gh_sbom(&dir)
            .args(["-r", "octo/other"])
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let doc: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(doc["name"], "github.com/octo/other");
    }

    #[test]
    fn test_environment_overrides_config_endpoint() {
        let mut server = Server::new();
        let graph = mock_graph(&mut server);
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("gh-sbom.config.yml"),
            "repository: octo/demo\ngraphql_url: http://127.0.0.1:9/unreachable\n",
        );

        gh_sbom(&dir)
            .env("GH_SBOM_GRAPHQL_URL", format!("{}/graphql", server.url()))
            .assert()
            .code(0);

        graph.assert();
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_invalid_yaml_syntax_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("gh-sbom.config.yml"),
            "invalid: yaml: [[[broken",
        );

        gh_sbom(&dir)
            .args(["-r", "octo/demo"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("gh-sbom.config.yml"), "format: markdown\n");

        gh_sbom(&dir)
            .args(["-r", "octo/demo"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn test_invalid_url_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("gh-sbom.config.yml"),
            "clearlydefined_url: api.clearlydefined.io\n",
        );

        gh_sbom(&dir)
            .args(["-r", "octo/demo"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("clearlydefined_url"));
    }
}

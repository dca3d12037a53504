//! Integration tests for the freshen binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;

fn mock_index(package: &str, current: &str, releases: &[&str]) -> MockServer {
    let server = MockServer::start();
    let releases: serde_json::Map<String, serde_json::Value> = releases
        .iter()
        .map(|v| (v.to_string(), serde_json::json!([])))
        .collect();
    let body = serde_json::json!({
        "info": { "name": package, "version": current },
        "releases": releases
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/pypi/{}/json", package));
        then.status(200).json_body(body);
    });
    server
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("freshen"));
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "Keep PyPI-distributed command-line tools up to date",
    ));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("freshen"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_a_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("freshen"));
    cmd.assert().failure();
    Ok(())
}

#[test]
fn check_reports_uninstalled_package() -> Result<(), Box<dyn std::error::Error>> {
    let server = mock_index("freshen-e2e-pkg", "1.0.1", &["1.0.0", "1.0.1"]);
    let index_url = server.base_url();

    let mut cmd = Command::new(cargo_bin("freshen"));
    cmd.args(["check", "freshen-e2e-pkg", "--index-url", index_url.as_str()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not installed locally"))
        .stdout(predicate::str::contains("1.0.1"));
    Ok(())
}

#[test]
fn check_resolves_latest_stable_ignoring_prereleases() -> Result<(), Box<dyn std::error::Error>> {
    let server = mock_index(
        "freshen-e2e-pkg",
        "1.2.0rc1",
        &["1.0.0", "1.1.0a1", "1.2.0rc1", "2.0.0.dev1", "1.0.1"],
    );

    let mut cmd = Command::new(cargo_bin("freshen"));
    cmd.args(["check", "freshen-e2e-pkg", "--json"]);
    cmd.env("FRESHEN_INDEX_URL", server.base_url());
    cmd.env_remove("RUST_LOG");
    let assert = cmd.assert().success();

    let output = String::from_utf8(assert.get_output().stdout.clone())?;
    let parsed: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(parsed["package"], "freshen-e2e-pkg");
    assert_eq!(parsed["latest"], "1.0.1");
    assert!(parsed["installed"].is_null());
    Ok(())
}

#[test]
fn check_fails_when_the_index_is_unreachable() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("freshen"));
    cmd.args([
        "check",
        "freshen-e2e-pkg",
        "--index-url",
        "http://127.0.0.1:9",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Could not resolve"));
    Ok(())
}

#[test]
fn upgrade_of_uninstalled_package_is_silent() -> Result<(), Box<dyn std::error::Error>> {
    let server = mock_index("freshen-e2e-pkg", "2.0.0", &["2.0.0"]);
    let index_url = server.base_url();

    let mut cmd = Command::new(cargo_bin("freshen"));
    cmd.args(["upgrade", "freshen-e2e-pkg", "--index-url", index_url.as_str()]);
    cmd.env_remove("RUST_LOG");
    cmd.assert().success().stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn upgrade_with_unreachable_index_is_silent() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("freshen"));
    cmd.args([
        "upgrade",
        "freshen-e2e-pkg",
        "--index-url",
        "http://127.0.0.1:9",
    ]);
    cmd.env_remove("RUST_LOG");
    cmd.assert().success().stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("freshen"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("freshen"));
    Ok(())
}

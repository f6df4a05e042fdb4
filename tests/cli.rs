//
//  gh-rest
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `ghr` with an isolated config directory and no ambient token.
fn ghr(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ghr").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("GH_TOKEN")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GHR_BASE_URL")
        .env_remove("GHR_TIMEOUT");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    ghr(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("api"))
        .stdout(predicate::str::contains("auth"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    ghr(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ghr version "));
}

#[test]
fn test_api_without_token_fails() {
    let home = TempDir::new().unwrap();
    ghr(&home)
        .args(["--base-url", "http://ghr-test.invalid", "api", "/user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not authenticated"));
}

#[test]
fn test_api_prints_json() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/orgs/acme/teams")
        .match_header("authorization", "Bearer abc123")
        .match_query(mockito::Matcher::Exact("per_page=5".to_string()))
        .with_status(200)
        .with_body(r#"[{"id":1,"slug":"core"}]"#)
        .create();
    let url = server.url();

    ghr(&home)
        .env("GH_TOKEN", "abc123")
        .args(["--base-url", url.as_str(), "api", "/orgs/acme/teams", "-F", "per_page=5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slug\": \"core\""));
}

#[test]
fn test_api_check_and_not_found_exit_code() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/orgs/acme/teams/core/repos/acme/api")
        .with_status(204)
        .create();
    let _mock = server
        .mock("GET", "/orgs/acme/teams/core/repos/acme/web")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create();
    let url = server.url();

    ghr(&home)
        .env("GH_TOKEN", "abc123")
        .args(["--base-url", url.as_str(), "api", "--check", "/orgs/acme/teams/core/repos/acme/api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("204"));

    ghr(&home)
        .env("GH_TOKEN", "abc123")
        .args(["--base-url", url.as_str(), "api", "/orgs/acme/teams/core/repos/acme/web"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("HTTP 404: Not Found"));
}

#[test]
fn test_zero_timeout_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    ghr(&home)
        .args(["--timeout", "0", "version"])
        .assert()
        .code(2);

    ghr(&home)
        .env("GHR_TIMEOUT", "0")
        .arg("version")
        .assert()
        .code(2);
}

#[test]
fn test_api_refuses_url_on_another_host() {
    let home = TempDir::new().unwrap();
    let base = mockito::Server::new();
    let mut foreign = mockito::Server::new();
    let untouched = foreign.mock("GET", "/collect").expect(0).create();
    let base_url = base.url();
    let target = format!("{}/collect", foreign.url());

    ghr(&home)
        .env("GH_TOKEN", "abc123")
        .args(["--base-url", base_url.as_str(), "api", target.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to send credentials"));

    untouched.assert();
}

#[test]
fn test_config_set_and_get() {
    let home = TempDir::new().unwrap();
    ghr(&home)
        .args(["config", "set", "timeout_secs", "12"])
        .assert()
        .success();

    ghr(&home)
        .args(["config", "get", "timeout_secs"])
        .assert()
        .success()
        .stdout("12\n");

    ghr(&home)
        .args(["config", "set", "timeout_secs", "later"])
        .assert()
        .failure();
}

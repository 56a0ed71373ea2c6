//! CLI integration tests against a real PREXCOL backend.
//!
//! These tests are opt-in and require environment variables to be set:
//! - PREXCOL_TEST_EMAIL: Test account email
//! - PREXCOL_TEST_PASSWORD: Test account password
//! - PREXCOL_TEST_API_URL: API base URL (defaults to http://127.0.0.1:8000/api)
//!
//! Tests are skipped if the credentials are not set. They run with an
//! isolated HOME so the local profile and credential files are untouched.

use std::path::Path;
use std::process::{Command, Output};

/// Get test credentials from the environment.
/// Returns None if not set, causing tests to be skipped.
fn get_test_credentials() -> Option<(String, String)> {
    let email = std::env::var("PREXCOL_TEST_EMAIL").ok()?;
    let password = std::env::var("PREXCOL_TEST_PASSWORD").ok()?;
    Some((email, password))
}

fn api_url() -> String {
    std::env::var("PREXCOL_TEST_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string())
}

/// Run the CLI binary with arguments and an isolated HOME.
fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prexcol"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn login_whoami_logout_round_trip() {
    let Some((email, password)) = get_test_credentials() else {
        eprintln!("Skipping: PREXCOL_TEST_EMAIL / PREXCOL_TEST_PASSWORD not set");
        return;
    };

    let home = tempfile::tempdir().unwrap();

    run_cli_success(
        &[
            "login",
            "--email",
            &email,
            "--password",
            &password,
            "--api-url",
            &api_url(),
        ],
        home.path(),
    );

    let whoami = run_cli_success(&["whoami"], home.path());
    assert!(whoami.contains(&email));

    run_cli_success(&["logout"], home.path());

    // whoami after logout should fail fast with a login hint
    let output = run_cli(&["whoami"], home.path());
    assert!(!output.status.success());
}

#[test]
fn products_listing_requires_session() {
    let home = tempfile::tempdir().unwrap();

    let output = run_cli(&["products"], home.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session"));
}

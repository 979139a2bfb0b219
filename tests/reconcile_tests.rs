//! Reconcile command integration tests
//!
//! Every test here must terminate before the first remote lookup, so none of
//! them needs network access: missing credentials, manifest path and decode
//! failures, and the empty-manifest success path.

mod common;

use assert_cmd::Command;
use common::TestWorkspace;
use predicates::prelude::*;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn obsctl_cmd() -> Command {
    let mut cmd = Command::cargo_bin("obsctl").unwrap();
    cmd.env_remove("OBS_USERNAME").env_remove("OBS_PASSWORD");
    cmd
}

fn obsctl_with_creds() -> Command {
    let mut cmd = obsctl_cmd();
    cmd.env("OBS_USERNAME", "geeko")
        .env("OBS_PASSWORD", "opensesame");
    cmd
}

#[test]
fn test_missing_credentials_refuses_to_run() {
    let ws = TestWorkspace::new();
    ws.write_manifest("projects.yaml", &["httpd"]);

    obsctl_cmd()
        .current_dir(&ws.path)
        .arg("reconcile")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("OBS_USERNAME"))
        .stderr(predicate::str::contains("OBS_PASSWORD"));
}

#[test]
fn test_missing_credentials_skips_manifest_read() {
    // No manifest exists, yet the failure must be about credentials:
    // nothing is read from disk before the credential check
    let ws = TestWorkspace::new();

    obsctl_cmd()
        .current_dir(&ws.path)
        .arg("reconcile")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("OBS_USERNAME"))
        .stderr(predicate::str::contains("doesn't exist").not());
}

#[test]
fn test_only_username_set_still_refuses() {
    let ws = TestWorkspace::new();
    ws.write_manifest("projects.yaml", &["httpd"]);

    obsctl_cmd()
        .current_dir(&ws.path)
        .env("OBS_USERNAME", "geeko")
        .arg("reconcile")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("OBS_PASSWORD"));
}

#[test]
fn test_default_manifest_missing_fails_fast() {
    let ws = TestWorkspace::new();

    obsctl_with_creds()
        .current_dir(&ws.path)
        .arg("reconcile")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("doesn't exist"))
        .stderr(predicate::str::contains("projects.yaml"));
}

#[test]
fn test_explicit_manifest_missing_names_the_path() {
    let ws = TestWorkspace::new();

    obsctl_with_creds()
        .current_dir(&ws.path)
        .args(["reconcile", "-m", "paketo/projects.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("paketo/projects.yaml"))
        .stderr(predicate::str::contains("doesn't exist"));
}

#[test]
fn test_absolute_manifest_outside_cwd_fails() {
    let ws = TestWorkspace::new();
    let elsewhere = TestWorkspace::new();
    elsewhere.write_manifest("projects.yaml", &["httpd"]);
    let outside = elsewhere.path.join("projects.yaml");

    obsctl_with_creds()
        .current_dir(&ws.path)
        .args(["reconcile", "-m"])
        .arg(&outside)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("outside the current working directory"));
}

#[test]
fn test_malformed_manifest_fails_with_parse_error() {
    let ws = TestWorkspace::new();
    ws.write_file("projects.yaml", "projects: [unclosed\n");

    obsctl_with_creds()
        .current_dir(&ws.path)
        .arg("reconcile")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse manifest"));
}

#[test]
fn test_wrongly_shaped_manifest_fails_with_parse_error() {
    let ws = TestWorkspace::new();
    ws.write_file("projects.yaml", "projects:\n  - name: [not, a, string]\n");

    obsctl_with_creds()
        .current_dir(&ws.path)
        .arg("reconcile")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse manifest"));
}

#[test]
fn test_unnamed_project_fails_before_any_lookup() {
    let ws = TestWorkspace::new();
    ws.write_file("projects.yaml", "projects:\n  - rootProject: isv\n");

    obsctl_with_creds()
        .current_dir(&ws.path)
        .arg("reconcile")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no project name"));
}

#[test]
fn test_empty_manifest_succeeds_without_network() {
    let ws = TestWorkspace::new();
    ws.write_file("projects.yaml", "projects: []\n");

    obsctl_with_creds()
        .current_dir(&ws.path)
        .arg("reconcile")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Project exists!"));
}

#[test]
fn test_manifest_flag_resolves_relative_to_cwd() {
    let ws = TestWorkspace::new();
    ws.write_file("manifests/projects.yaml", "projects: []\n");

    obsctl_with_creds()
        .current_dir(&ws.path)
        .args(["reconcile", "-m", "manifests/projects.yaml"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Project exists!"));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `snag run` and `snag run-all` commands.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn snag() -> Command {
    cargo_bin_cmd!("snag")
}

fn write_manifest(temp: &TempDir, content: &str) {
    fs::write(temp.path().join("snag.toml"), content).unwrap();
}

fn git_init(temp: &TempDir) {
    let status = std::process::Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(temp.path())
        .status()
        .expect("git init failed");
    assert!(status.success());
}

#[test]
fn run_succeeds_with_passing_hook() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
[hooks]
pre-commit = "true"
"#,
    );

    snag()
        .args(["run", "pre-commit", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn run_fails_with_failing_hook() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
[hooks]
pre-commit = "false"
"#,
    );

    snag()
        .args(["run", "pre-commit", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("hook 'pre-commit' failed"));
}

#[test]
fn run_unknown_hook_reports_error() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
[hooks]
pre-commit = "true"
"#,
    );

    snag()
        .args(["run", "no-such-hook", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("hook not found"))
        .stderr(predicate::str::contains("snag list"));
}

#[test]
fn run_without_manifest_fails() {
    let temp = TempDir::new().unwrap();

    snag()
        .args(["run", "pre-commit", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no manifest found"));
}

#[test]
fn run_executes_hook_in_project_directory() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
[hooks]
pre-commit = "touch ran.txt || true"
"#,
    );

    snag()
        .args(["run", "pre-commit", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("ran.txt").exists());
}

#[test]
fn run_forwards_hook_output() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
[hooks]
pre-commit = "echo hook-says-hello || true"
"#,
    );

    snag()
        .args(["run", "pre-commit", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hook-says-hello"));
}

#[test]
fn ignore_pattern_skips_matching_invocation() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
ignore = ["*.md"]

[hooks]
pre-commit = "false"
"#,
    );

    // the failing command is never invoked, so this succeeds
    snag()
        .args(["run", "pre-commit", "README.md"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn ignore_pattern_does_not_skip_other_files() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
ignore = ["*.md"]

[hooks]
pre-commit = "false"
"#,
    );

    snag()
        .args(["run", "pre-commit", "src/main.rs"])
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn staged_files_feed_ignore_matching() {
    let temp = TempDir::new().unwrap();
    git_init(&temp);
    write_manifest(
        &temp,
        r#"
ignore = ["*.md"]

[hooks]
pre-commit = "false"
"#,
    );

    fs::write(temp.path().join("README.md"), "docs").unwrap();
    let status = std::process::Command::new("git")
        .args(["add", "README.md"])
        .current_dir(temp.path())
        .status()
        .expect("git add failed");
    assert!(status.success());

    // staged README.md matches the ignore pattern: skipped, success
    snag()
        .args(["run", "pre-commit"])
        .current_dir(temp.path())
        .assert()
        .success();

    // with discovery disabled the file list is empty and the hook runs
    snag()
        .args(["run", "pre-commit", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn run_all_with_no_hooks_succeeds() {
    let temp = TempDir::new().unwrap();
    write_manifest(&temp, "[hooks]\n");

    snag()
        .args(["run-all", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn run_all_runs_every_hook_despite_failure() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
[hooks]
commit-msg = "touch first.txt || true && false"
pre-push = "touch second.txt || true"
"#,
    );

    snag()
        .args(["run-all", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("one or more hooks failed"));

    assert!(temp.path().join("first.txt").exists());
    assert!(temp.path().join("second.txt").exists());
}

#[test]
fn sequential_steps_short_circuit() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
[hooks]
pre-commit = "false && touch never.txt || true"
"#,
    );

    snag()
        .args(["run", "pre-commit", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .failure();

    assert!(!temp.path().join("never.txt").exists());
}

#[test]
fn parallel_steps_all_start() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
[hooks.pre-commit]
run = "false && touch sibling.txt || true"
parallel = true
"#,
    );

    snag()
        .args(["run", "pre-commit", "--no-stage"])
        .current_dir(temp.path())
        .assert()
        .failure();

    assert!(temp.path().join("sibling.txt").exists());
}

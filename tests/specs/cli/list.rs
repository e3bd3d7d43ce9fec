// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `snag list` command.

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

#[test]
fn list_shows_configured_hooks() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
[hooks]
pre-commit = "cargo fmt --check"

[hooks.pre-push]
run = ["cargo test", "cargo build"]
parallel = true
"#,
    );

    snag()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pre-commit:"))
        .stdout(predicate::str::contains("cargo fmt --check"))
        .stdout(predicate::str::contains("cargo test && cargo build"))
        .stdout(predicate::str::contains("parallel: true"));
}

#[test]
fn list_json_output_is_valid() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        &temp,
        r#"
[hooks]
pre-commit = "cargo fmt --check"
"#,
    );

    let output = snag()
        .args(["list", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let hooks = parsed.as_array().unwrap();
    assert_eq!(hooks.len(), 1);
    assert_eq!(hooks[0]["name"], "pre-commit");
    assert_eq!(hooks[0]["run"], "cargo fmt --check");
}

#[test]
fn list_with_no_hooks() {
    let temp = TempDir::new().unwrap();
    write_manifest(&temp, "[hooks]\n");

    snag()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No hooks configured"));
}

#[test]
fn list_without_manifest_fails() {
    let temp = TempDir::new().unwrap();

    snag()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no manifest found"));
}

#[test]
fn list_reads_json_manifest() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("snag.json"),
        r#"{ "hooks": { "pre-commit": "true" } }"#,
    )
    .unwrap();

    snag()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pre-commit"));
}

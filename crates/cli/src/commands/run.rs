// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `snag run` and `snag run-all` commands.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::git_hooks::staged_files;

use super::load_project;

/// Run a single hook against an invocation file list.
///
/// With no explicit files and `no_stage` unset, the staged file list from
/// git is used so ignore patterns and conditions see what is about to be
/// committed.
pub fn run(name: &str, files: Vec<String>, no_stage: bool) -> Result<()> {
    let (manifest, root) = load_project()?;
    let runner = manifest.build_runner();

    if runner.get(name).is_none() {
        return Err(Error::HookNotFound(name.to_string()));
    }

    let files = resolve_files(files, no_stage, &root);

    if runner.run(name, &files) {
        Ok(())
    } else {
        Err(Error::HookFailed(name.to_string()))
    }
}

/// Run every configured hook.
pub fn run_all(files: Vec<String>, no_stage: bool) -> Result<()> {
    let (manifest, root) = load_project()?;
    let runner = manifest.build_runner();

    let files = resolve_files(files, no_stage, &root);

    if runner.run_all(&files) {
        Ok(())
    } else {
        Err(Error::RunAllFailed)
    }
}

/// Explicit files win; otherwise fall back to the staged file list.
///
/// Outside a git repository the file list is simply empty - hooks still
/// run, they just see no files.
fn resolve_files(files: Vec<String>, no_stage: bool, root: &Path) -> Vec<String> {
    if !files.is_empty() || no_stage {
        return files;
    }
    match staged_files(root) {
        Ok(staged) => staged,
        Err(e) => {
            debug!("staged-file discovery failed: {}", e);
            Vec::new()
        }
    }
}

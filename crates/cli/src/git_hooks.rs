// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git hook script management for snag.
//!
//! Installs marker-tagged wrapper scripts into `.git/hooks` that delegate
//! to `snag run`. Hook scripts owned by other tools are preserved: the
//! wrapper is appended to existing content, and uninstall removes only the
//! marker-tagged lines.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

#[cfg(test)]
#[path = "git_hooks_tests.rs"]
mod tests;

/// Marker comment to identify snag wrapper scripts.
const SNAG_HOOK_MARKER: &str = "# snag-hook";

/// Client-side hook names git runs by itself.
pub const GIT_HOOK_EVENTS: &[&str] = &[
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "pre-merge-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-push",
    "post-rewrite",
];

/// Find the .git directory for a repository.
pub fn find_git_dir(from: &Path) -> Result<PathBuf> {
    let output = Command::new("git")
        .current_dir(from)
        .args(["rev-parse", "--git-dir"])
        .output()
        .map_err(|e| Error::Config(format!("failed to run git: {}", e)))?;

    if output.status.success() {
        let git_dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let git_path = if Path::new(&git_dir).is_absolute() {
            PathBuf::from(git_dir)
        } else {
            from.join(git_dir)
        };
        return Ok(git_path);
    }

    Err(Error::NotAGitRepository)
}

/// The wrapper line delegating a hook to snag.
fn wrapper_line(hook: &str) -> String {
    format!("snag run {} \"$@\"", hook)
}

/// Install wrapper scripts for the given hook names.
///
/// Returns the hooks directory written to.
pub fn install_hooks(repo_path: &Path, hooks: &[String]) -> Result<PathBuf> {
    let git_dir = find_git_dir(repo_path)?;
    let hooks_dir = git_dir.join("hooks");

    fs::create_dir_all(&hooks_dir)?;

    for name in hooks {
        if !GIT_HOOK_EVENTS.contains(&name.as_str()) {
            eprintln!(
                "warning: '{}' is not a hook git runs by itself; installing anyway",
                name
            );
        }
        install_hook(&hooks_dir, name)?;
    }

    Ok(hooks_dir)
}

/// Install a single wrapper script.
///
/// Idempotent: a script already carrying the marker is left alone.
fn install_hook(hooks_dir: &Path, name: &str) -> Result<()> {
    let hook_path = hooks_dir.join(name);

    let existing = if hook_path.exists() {
        fs::read_to_string(&hook_path)?
    } else {
        String::new()
    };

    if existing.contains(SNAG_HOOK_MARKER) {
        return Ok(());
    }

    let new_content = if existing.is_empty() {
        format!(
            "#!/bin/sh\n{}\n{}\n",
            SNAG_HOOK_MARKER,
            wrapper_line(name)
        )
    } else {
        // Append to the existing hook so other tools keep working
        format!(
            "{}\n\n{}\n{}\n",
            existing.trim_end(),
            SNAG_HOOK_MARKER,
            wrapper_line(name)
        )
    };

    fs::write(&hook_path, new_content)?;
    debug!("installed wrapper script for '{}'", name);

    // Make executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    Ok(())
}

/// Remove wrapper scripts for the given hook names.
pub fn uninstall_hooks(repo_path: &Path, hooks: &[String]) -> Result<()> {
    let git_dir = find_git_dir(repo_path)?;
    let hooks_dir = git_dir.join("hooks");

    for name in hooks {
        uninstall_hook(&hooks_dir, name)?;
    }

    Ok(())
}

/// Remove the snag portion of a single hook script.
///
/// If nothing but the shebang and blank lines would remain, the file is
/// removed entirely; otherwise only the marker-tagged lines are stripped.
fn uninstall_hook(hooks_dir: &Path, name: &str) -> Result<()> {
    let hook_path = hooks_dir.join(name);

    if !hook_path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&hook_path)?;
    if !content.contains(SNAG_HOOK_MARKER) {
        return Ok(());
    }

    let kept: Vec<&str> = content
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            trimmed != SNAG_HOOK_MARKER && !trimmed.starts_with("snag run ")
        })
        .collect();

    let only_scaffolding = kept
        .iter()
        .all(|line| line.trim().is_empty() || line.starts_with("#!"));

    if only_scaffolding {
        fs::remove_file(&hook_path)?;
        return Ok(());
    }

    let mut new_content = kept.join("\n");
    new_content.push('\n');
    fs::write(&hook_path, new_content)?;

    Ok(())
}

/// Check whether a snag wrapper is installed for a hook.
pub fn is_installed(repo_path: &Path, name: &str) -> bool {
    let Ok(git_dir) = find_git_dir(repo_path) else {
        return false;
    };
    fs::read_to_string(git_dir.join("hooks").join(name))
        .map(|content| content.contains(SNAG_HOOK_MARKER))
        .unwrap_or(false)
}

/// Staged file list from git, used when the caller provides no files.
pub fn staged_files(repo_path: &Path) -> Result<Vec<String>> {
    let output = Command::new("git")
        .current_dir(repo_path)
        .args(["diff", "--cached", "--name-only"])
        .output()
        .map_err(|e| Error::Config(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        return Err(Error::NotAGitRepository);
    }

    let files: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();
    debug!("discovered {} staged files", files.len());

    Ok(files)
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest loading from `snag.toml` and `snag.json`.
//!
//! A hook's command may be written three ways:
//!
//! ```toml
//! [hooks]
//! pre-commit = "cargo fmt --check && cargo clippy"
//! pre-push = ["cargo test", "cargo build --release"]
//!
//! [hooks.post-merge]
//! run = ["npm install", "npm dedupe"]
//! parallel = true
//! ignore = ["*.lock"]
//! ```
//!
//! All three normalize to a flat `&&`-joined command string plus options
//! before they reach the execution engine. Per-hook `ignore` lists fold
//! into the runner-wide pattern set, which applies to every hook.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use snag_core::{Hook, HookRunner};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

const MANIFEST_TOML_FILE: &str = "snag.toml";
const MANIFEST_JSON_FILE: &str = "snag.json";

/// How a hook's command is written in the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CommandSpec {
    /// A single command string, possibly `&&`-joined.
    Single(String),
    /// A list of commands, run as if joined with `&&`.
    Sequence(Vec<String>),
    /// Full form with per-hook options.
    Detailed(DetailedSpec),
}

/// The full per-hook form.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailedSpec {
    /// Command or command list.
    pub run: RunSpec,
    /// Arguments appended to every invoked step.
    #[serde(default)]
    pub args: Vec<String>,
    /// Per-hook override of the runner-wide parallel default.
    #[serde(default)]
    pub parallel: Option<bool>,
    /// Extra ignore patterns contributed by this hook.
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// Command or command list inside the full form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RunSpec {
    Single(String),
    Sequence(Vec<String>),
}

/// A hook flattened to the shape the engine consumes.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedHook {
    pub command: String,
    pub args: Vec<String>,
    pub parallel: Option<bool>,
    pub ignore: Vec<String>,
}

impl CommandSpec {
    /// Flatten to a command string plus options.
    pub fn normalize(&self) -> NormalizedHook {
        match self {
            CommandSpec::Single(command) => NormalizedHook {
                command: command.clone(),
                args: Vec::new(),
                parallel: None,
                ignore: Vec::new(),
            },
            CommandSpec::Sequence(commands) => NormalizedHook {
                command: commands.join(" && "),
                args: Vec::new(),
                parallel: None,
                ignore: Vec::new(),
            },
            CommandSpec::Detailed(spec) => NormalizedHook {
                command: match &spec.run {
                    RunSpec::Single(command) => command.clone(),
                    RunSpec::Sequence(commands) => commands.join(" && "),
                },
                args: spec.args.clone(),
                parallel: spec.parallel,
                ignore: spec.ignore.clone(),
            },
        }
    }
}

/// Root manifest structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Runner-wide default for parallel sub-command execution.
    #[serde(default)]
    pub parallel: bool,
    /// Runner-wide ignore patterns.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Pass a color-forcing environment variable to child processes.
    #[serde(default)]
    pub color: bool,
    /// Hook table keyed by lifecycle event name.
    #[serde(default)]
    pub hooks: BTreeMap<String, CommandSpec>,
}

impl Manifest {
    /// Build a configured runner from this manifest.
    pub fn build_runner(&self) -> HookRunner {
        let mut runner = HookRunner::new();
        runner
            .parallel_exec(self.parallel)
            .use_colors(self.color)
            .ignore(self.ignore.iter().cloned());

        for (name, spec) in &self.hooks {
            let normalized = spec.normalize();
            if !normalized.ignore.is_empty() {
                runner.ignore(normalized.ignore);
            }
            let mut hook = Hook::new(name.clone(), normalized.command).with_args(normalized.args);
            if let Some(parallel) = normalized.parallel {
                hook = hook.with_parallel(parallel);
            }
            runner.register(hook);
        }

        runner
    }

    /// Names of all configured hooks.
    pub fn hook_names(&self) -> Vec<String> {
        self.hooks.keys().cloned().collect()
    }
}

/// Load the manifest from `snag.toml` and/or `snag.json` in a directory.
///
/// If both files exist their hook tables are merged with JSON entries
/// winning per name, ignore patterns are concatenated, and boolean options
/// are on when either file turns them on. Returns `None` if neither file
/// exists.
pub fn load_manifest(dir: &Path) -> Result<Option<Manifest>> {
    let toml_path = dir.join(MANIFEST_TOML_FILE);
    let json_path = dir.join(MANIFEST_JSON_FILE);

    let toml_exists = toml_path.exists();
    let json_exists = json_path.exists();

    if !toml_exists && !json_exists {
        return Ok(None);
    }

    let mut manifest = Manifest::default();

    if toml_exists {
        let content = fs::read_to_string(&toml_path)
            .map_err(|e| Error::Config(format!("failed to read snag.toml: {}", e)))?;
        let parsed: Manifest = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse snag.toml: {}", e)))?;
        manifest = parsed;
    }

    if json_exists {
        let content = fs::read_to_string(&json_path)
            .map_err(|e| Error::Config(format!("failed to read snag.json: {}", e)))?;
        let parsed: Manifest = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse snag.json: {}", e)))?;
        manifest.parallel = manifest.parallel || parsed.parallel;
        manifest.color = manifest.color || parsed.color;
        manifest.ignore.extend(parsed.ignore);
        manifest.hooks.extend(parsed.hooks);
    }

    Ok(Some(manifest))
}

/// Find the nearest ancestor directory containing a manifest.
///
/// Starts at the current working directory.
pub fn find_project_root() -> Result<PathBuf> {
    let start = std::env::current_dir()?;
    let mut dir = start.as_path();
    loop {
        if dir.join(MANIFEST_TOML_FILE).exists() || dir.join(MANIFEST_JSON_FILE).exists() {
            return Ok(dir.to_path_buf());
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return Err(Error::NotInitialized),
        }
    }
}

/// Path of the TOML manifest inside a directory.
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_TOML_FILE)
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the snagrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no manifest found\n  hint: create snag.toml or run 'snag init' first")]
    NotInitialized,

    #[error("already initialized: {0} exists")]
    AlreadyInitialized(String),

    #[error("hook not found: '{0}'\n  hint: 'snag list' shows the configured hooks")]
    HookNotFound(String),

    #[error("hook '{0}' failed")]
    HookFailed(String),

    #[error("one or more hooks failed")]
    RunAllFailed,

    #[error("not a git repository\n  hint: run 'git init' or move into a repository first")]
    NotAGitRepository,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized Result type for snagrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

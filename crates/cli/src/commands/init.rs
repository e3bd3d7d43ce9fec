// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `snag init` command.

use std::fs;

use crate::config::manifest_path;
use crate::error::{Error, Result};

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

/// Starter manifest written by `snag init`.
const MANIFEST_TEMPLATE: &str = "\
# snag manifest - hooks bound to git lifecycle events.
#
# parallel = false        # run `&&`-joined steps concurrently by default
# ignore = [\"dist/\"]      # skip hooks when only excluded files are involved
# color = true            # force color output in child processes

[hooks]
# pre-commit = \"cargo fmt --check && cargo clippy\"
# pre-push = [\"cargo test\", \"cargo build --release\"]
";

/// Create a starter snag.toml in the current directory.
pub fn run() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let path = manifest_path(&cwd);

    if path.exists() {
        return Err(Error::AlreadyInitialized(path.display().to_string()));
    }

    fs::write(&path, MANIFEST_TEMPLATE)?;

    println!("Created {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Define hooks in snag.toml");
    println!("  2. Run 'snag install' to wire them into git");
    Ok(())
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `snag install`, `snag uninstall`, and `snag status` commands.

use crate::colors;
use crate::error::Result;
use crate::git_hooks::{install_hooks, is_installed, uninstall_hooks};

use super::load_project;

/// Install wrapper scripts for every configured hook.
pub fn install() -> Result<()> {
    let (manifest, root) = load_project()?;
    let names = manifest.hook_names();

    if names.is_empty() {
        println!("No hooks configured; nothing to install.");
        return Ok(());
    }

    let hooks_dir = install_hooks(&root, &names)?;

    println!(
        "Installed {} hook{} to {}",
        names.len(),
        if names.len() == 1 { "" } else { "s" },
        colors::context(&hooks_dir.display().to_string())
    );
    Ok(())
}

/// Remove wrapper scripts for every configured hook.
pub fn uninstall() -> Result<()> {
    let (manifest, root) = load_project()?;
    let names = manifest.hook_names();

    uninstall_hooks(&root, &names)?;

    println!("Uninstalled snag hooks from .git/hooks");
    Ok(())
}

/// Show configured vs. installed state for every hook.
pub fn status() -> Result<()> {
    let (manifest, root) = load_project()?;
    let names = manifest.hook_names();

    if names.is_empty() {
        println!("No hooks configured");
        println!();
        println!("Add hooks to snag.toml, then run:");
        println!("  snag install");
        return Ok(());
    }

    println!("Configured hooks:");
    for name in &names {
        let marker = if is_installed(&root, name) {
            "installed"
        } else {
            "not installed"
        };
        println!("  - {} ({})", colors::header(name), marker);
    }

    let missing: Vec<&String> = names.iter().filter(|n| !is_installed(&root, n)).collect();
    if !missing.is_empty() {
        println!();
        println!("To install the missing scripts, run:");
        println!("  snag install");
    }

    Ok(())
}

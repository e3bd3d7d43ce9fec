// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `snag list` command.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Manifest;
use crate::error::Result;

use super::load_project;

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;

/// Serializable view of one configured hook.
#[derive(Debug, Serialize)]
struct HookSummary {
    name: String,
    run: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parallel: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ignore: Vec<String>,
}

fn summarize(manifest: &Manifest) -> Vec<HookSummary> {
    manifest
        .hooks
        .iter()
        .map(|(name, spec)| {
            let normalized = spec.normalize();
            HookSummary {
                name: name.clone(),
                run: normalized.command,
                args: normalized.args,
                parallel: normalized.parallel,
                ignore: normalized.ignore,
            }
        })
        .collect()
}

/// List configured hooks.
pub fn run(output: OutputFormat) -> Result<()> {
    let (manifest, _root) = load_project()?;
    let summaries = summarize(&manifest);

    if matches!(output, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No hooks configured");
        println!();
        println!("Add a [hooks] table to snag.toml to configure hooks.");
        return Ok(());
    }

    for summary in &summaries {
        println!("{}:", colors::header(&summary.name));
        println!("  run: {}", colors::literal(&summary.run));
        if !summary.args.is_empty() {
            println!("  args: {}", summary.args.join(" "));
        }
        if let Some(parallel) = summary.parallel {
            println!("  parallel: {}", parallel);
        }
        if !summary.ignore.is_empty() {
            println!("  ignore: {}", summary.ignore.join(", "));
        }
        println!();
    }

    Ok(())
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Hook Execution:
  run         Run a single hook
  run-all     Run every configured hook

Setup & Configuration:
  init        Create a starter snag.toml
  install     Install wrapper scripts into .git/hooks
  uninstall   Remove snag wrapper scripts from .git/hooks
  list        List configured hooks
  status      Show configured vs. installed hooks
  completion  Generate shell completions";

const QUICKSTART_HELP: &str = "\
Get started:
  snag init                 Create a starter manifest
  snag install              Wire configured hooks into git
  snag run pre-commit       Run one hook against staged files
  snag run-all              Run everything";

#[derive(Parser)]
#[command(name = "snag")]
#[command(about = "A cross-platform runner for git lifecycle hooks")]
#[command(
    long_about = "A cross-platform runner for git lifecycle hooks.\n\n\
    Hooks are named command groups configured in snag.toml or snag.json, \
    with ignore patterns, conditional skipping, and sequential or parallel \
    multi-command execution."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a single hook
    #[command(after_help = "Examples:\n  \
        snag run pre-commit                  Run against the staged file list\n  \
        snag run pre-commit src/main.rs      Run against explicit files\n  \
        snag run pre-push --no-stage         Run with an empty file list")]
    Run {
        /// Hook name as configured in the manifest
        name: String,

        /// Files forming the invocation file list (defaults to staged files)
        files: Vec<String>,

        /// Skip staged-file discovery when no files are given
        #[arg(long)]
        no_stage: bool,
    },

    /// Run every configured hook
    #[command(name = "run-all")]
    RunAll {
        /// Files forming the invocation file list (defaults to staged files)
        files: Vec<String>,

        /// Skip staged-file discovery when no files are given
        #[arg(long)]
        no_stage: bool,
    },

    /// Create a starter snag.toml
    Init,

    /// Install wrapper scripts into .git/hooks for each configured hook
    Install,

    /// Remove snag wrapper scripts from .git/hooks
    Uninstall,

    /// List configured hooks
    List {
        /// Output format (text, json)
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show configured vs. installed hooks
    Status,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

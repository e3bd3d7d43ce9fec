// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! snagrs - Library behind the `snag` CLI.
//!
//! snag runs named command groups ("hooks") bound to git lifecycle events,
//! with ignore patterns, conditional skipping, and sequential or parallel
//! multi-command execution. The execution engine itself lives in the
//! `snag-core` crate; this crate adds the manifest reader, the
//! `.git/hooks` wrapper-script installer, and the command-line front end.
//!
//! # Main Components
//!
//! - [`config`] - `snag.toml`/`snag.json` loading and normalization
//! - [`git_hooks`] - wrapper-script installation and staged-file discovery
//! - [`Cli`] - clap command definitions
//! - [`Error`] - error types for all operations

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod error;
pub mod git_hooks;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Dispatch a parsed CLI command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Run {
            name,
            files,
            no_stage,
        } => commands::run::run(&name, files, no_stage),
        Command::RunAll { files, no_stage } => commands::run::run_all(files, no_stage),
        Command::Init => commands::init::run(),
        Command::Install => commands::install::install(),
        Command::Uninstall => commands::install::uninstall(),
        Command::List { output } => commands::list::run(output),
        Command::Status => commands::install::status(),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "snag", &mut std::io::stdout());
            Ok(())
        }
    }
}

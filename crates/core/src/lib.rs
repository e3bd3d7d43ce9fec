// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! snag-core: Hook execution engine for the snag CLI
//!
//! This crate provides the in-memory hook registry, the ignore-pattern
//! matcher, and the cross-platform command invocation layer used by the
//! `snag` CLI tool.
//!
//! # Main Components
//!
//! - [`Hook`] - A named command group with arguments, an optional skip
//!   condition, and an execution-mode override
//! - [`HookRegistry`] - Keyed storage for hook definitions
//! - [`HookRunner`] - Orchestrates ignore filtering, condition checks, and
//!   sequential or parallel sub-command execution
//! - [`invoke_command`] - Standalone command invocation usable without a
//!   registry
//!
//! # Usage
//!
//! ```rust,no_run
//! use snag_core::{Hook, HookRunner};
//!
//! let mut runner = HookRunner::new();
//! runner
//!     .register(Hook::new("pre-commit", "cargo fmt --check && cargo clippy"))
//!     .ignore(["target/", "*.lock"]);
//!
//! let files = vec!["src/main.rs".to_string()];
//! if !runner.run("pre-commit", &files) {
//!     std::process::exit(1);
//! }
//! ```

pub mod hook;
pub mod invoke;
pub mod pattern;
pub mod registry;
pub mod runner;

pub use hook::{Hook, HookCondition};
pub use invoke::{invoke_command, needs_shell_wrapper, InvokeOptions};
pub use pattern::should_ignore;
pub use registry::HookRegistry;
pub use runner::HookRunner;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-platform command invocation.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;

/// Spawn options for a single command invocation.
#[derive(Debug, Clone, Default)]
pub struct InvokeOptions {
    /// Working directory for the child; inherits the caller's when unset.
    pub cwd: Option<PathBuf>,
    /// Environment entries added to (or overriding) the inherited
    /// environment.
    pub env: Vec<(String, String)>,
}

/// Decide whether a command must be routed through a platform shell.
///
/// Windows needs `cmd.exe` to resolve built-ins and `.cmd`/`.bat` targets.
/// On any platform, `&&`/`||` chaining is shell syntax that a direct exec
/// cannot interpret.
pub fn needs_shell_wrapper(command: &str, windows: bool) -> bool {
    windows || command.contains("&&") || command.contains("||")
}

/// Invoke a command and report whether it exited successfully.
///
/// The child inherits the caller's standard streams, so its output passes
/// through as it is produced; nothing is captured. Exit code 0 maps to
/// `true`; a non-zero exit or a spawn error maps to `false`.
pub fn invoke_command(command: &str, args: &[String], options: &InvokeOptions) -> bool {
    let mut cmd = if needs_shell_wrapper(command, cfg!(windows)) {
        shell_command(command, args)
    } else {
        let mut cmd = Command::new(command);
        cmd.args(args);
        cmd
    };

    if let Some(dir) = &options.cwd {
        cmd.current_dir(dir);
    }
    for (key, value) in &options.env {
        cmd.env(key, value);
    }
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    match cmd.status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            debug!("command '{}' exited with {}", command, status);
            false
        }
        Err(e) => {
            warn!("failed to spawn '{}': {}", command, e);
            false
        }
    }
}

/// Wrap a command for the platform shell, with the caller's args as shell
/// positional parameters.
#[cfg(windows)]
fn shell_command(command: &str, args: &[String]) -> Command {
    let mut cmd = Command::new("cmd.exe");
    cmd.arg("/c").arg(command).args(args);
    cmd
}

/// Wrap a command for the platform shell, with the caller's args as shell
/// positional parameters.
#[cfg(not(windows))]
fn shell_command(command: &str, args: &[String]) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command).args(args);
    cmd
}

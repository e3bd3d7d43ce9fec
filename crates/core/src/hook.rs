// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook definitions.

use std::fmt;
use std::sync::Arc;

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;

/// Predicate deciding whether a hook should run for an invocation file list.
pub type HookCondition = Arc<dyn Fn(&[String]) -> bool + Send + Sync>;

/// A named command group bound to a lifecycle event.
///
/// The command string may join several steps with `&&`; the runner splits
/// them into independently invoked sub-commands. No validation is performed
/// on the command contents - an empty or malformed command simply fails at
/// invocation time.
#[derive(Clone)]
pub struct Hook {
    /// Unique name, typically a lifecycle event like "pre-commit".
    pub name: String,
    /// Command to execute; steps may be joined with `&&`.
    pub command: String,
    /// Arguments appended to every invoked step.
    pub args: Vec<String>,
    /// Optional skip predicate over the invocation file list.
    /// Absent means "always run".
    pub condition: Option<HookCondition>,
    /// Per-hook override of the runner-wide parallel default.
    pub parallel: Option<bool>,
}

impl Hook {
    /// Create a hook with the given name and command.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Hook {
            name: name.into(),
            command: command.into(),
            args: Vec::new(),
            condition: None,
            parallel: None,
        }
    }

    /// Set the arguments appended to every invoked step.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the skip condition. The hook only runs when the predicate
    /// returns true for the invocation file list.
    #[must_use]
    pub fn with_condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&[String]) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Override the runner-wide parallel default for this hook.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("name", &self.name)
            .field("command", &self.command)
            .field("args", &self.args)
            .field("condition", &self.condition.as_ref().map(|_| "<predicate>"))
            .field("parallel", &self.parallel)
            .finish()
    }
}

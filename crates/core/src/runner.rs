// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook execution orchestration.
//!
//! The runner owns the registry and the runner-wide configuration. For a
//! single hook it applies ignore filtering and the hook's skip condition,
//! splits the command into sub-commands, and runs them sequentially with
//! short-circuit or fully in parallel. Failures never propagate as errors;
//! every outcome folds into a boolean.

use std::thread;

use tracing::debug;

use crate::hook::Hook;
use crate::invoke::{invoke_command, InvokeOptions};
use crate::pattern::should_ignore;
use crate::registry::HookRegistry;

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

/// Environment variable forced into child processes when colors are on.
const COLOR_ENV: (&str, &str) = ("FORCE_COLOR", "1");

/// Orchestrates hook execution over a registry.
#[derive(Debug, Default)]
pub struct HookRunner {
    registry: HookRegistry,
    parallel: bool,
    ignore_patterns: Vec<String>,
    colors: bool,
}

impl HookRunner {
    /// Create a runner with an empty registry, sequential execution,
    /// no ignore patterns, and colors off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a hook definition.
    pub fn register(&mut self, hook: Hook) -> &mut Self {
        self.registry.register(hook);
        self
    }

    /// Remove a hook definition. No-op when absent.
    pub fn unregister(&mut self, name: &str) -> &mut Self {
        self.registry.unregister(name);
        self
    }

    /// Look up a hook by name.
    pub fn get(&self, name: &str) -> Option<&Hook> {
        self.registry.get(name)
    }

    /// Enumerate all registered hooks.
    pub fn list(&self) -> Vec<&Hook> {
        self.registry.list()
    }

    /// Number of registered hooks.
    pub fn count(&self) -> usize {
        self.registry.count()
    }

    /// Remove all hooks.
    pub fn clear(&mut self) -> &mut Self {
        self.registry.clear();
        self
    }

    /// Set the runner-wide default for parallel sub-command execution.
    /// Individual hooks may override it.
    pub fn parallel_exec(&mut self, enabled: bool) -> &mut Self {
        self.parallel = enabled;
        self
    }

    /// Append ignore patterns applied to every subsequent run.
    pub fn ignore<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Pass a color-forcing environment variable to child processes.
    pub fn use_colors(&mut self, enabled: bool) -> &mut Self {
        self.colors = enabled;
        self
    }

    /// Run a single hook against the invocation file list.
    ///
    /// Referencing an unregistered hook reports failure. An invocation
    /// skipped because of an ignore match or a false condition reports
    /// success without spawning anything - a deliberate no-op is not a
    /// failure.
    pub fn run(&self, name: &str, files: &[String]) -> bool {
        let Some(hook) = self.registry.get(name) else {
            debug!("hook '{}' is not registered", name);
            return false;
        };

        if should_ignore(files, &self.ignore_patterns) {
            debug!("hook '{}' skipped: file list matches ignore patterns", name);
            return true;
        }

        if let Some(condition) = &hook.condition {
            if !condition(files) {
                debug!("hook '{}' skipped: condition not met", name);
                return true;
            }
        }

        // Textual split, not shell-aware parsing: a `&&` inside quotes is
        // split like any other. Documented compatibility behavior.
        let steps: Vec<&str> = hook.command.split("&&").map(str::trim).collect();
        let parallel = hook.parallel.unwrap_or(self.parallel);
        let options = self.invoke_options();

        if parallel && steps.len() > 1 {
            run_parallel(&steps, hook, &options)
        } else {
            run_sequential(&steps, hook, &options)
        }
    }

    /// Run every registered hook; true only when all succeed.
    ///
    /// Unlike sequential sub-commands, a failing hook does not stop the
    /// remaining hooks. An empty registry reports success.
    pub fn run_all(&self, files: &[String]) -> bool {
        let mut all_ok = true;
        for hook in self.registry.list() {
            if !self.run(&hook.name, files) {
                all_ok = false;
            }
        }
        all_ok
    }

    fn invoke_options(&self) -> InvokeOptions {
        let mut options = InvokeOptions::default();
        if self.colors {
            options
                .env
                .push((COLOR_ENV.0.to_string(), COLOR_ENV.1.to_string()));
        }
        options
    }
}

/// Invoke sub-commands in split order, stopping at the first failure.
fn run_sequential(steps: &[&str], hook: &Hook, options: &InvokeOptions) -> bool {
    for step in steps {
        if !invoke_command(step, &hook.args, options) {
            debug!("hook '{}' stopped at failing step '{}'", hook.name, step);
            return false;
        }
    }
    true
}

/// Invoke all sub-commands concurrently and fold their outcomes.
///
/// Every step is spawned before any is joined, so their execution
/// genuinely overlaps; a failing step does not cancel its siblings.
fn run_parallel(steps: &[&str], hook: &Hook, options: &InvokeOptions) -> bool {
    thread::scope(|scope| {
        let handles: Vec<_> = steps
            .iter()
            .map(|step| scope.spawn(move || invoke_command(step, &hook.args, options)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(false))
            .fold(true, |all_ok, ok| all_ok && ok)
    })
}

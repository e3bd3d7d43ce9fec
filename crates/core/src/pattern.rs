// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ignore-pattern matching for invocation file lists.
//!
//! Three pattern forms are supported, checked in this order:
//!
//! - directory patterns ending in `/` (e.g. `dist/`), matching the
//!   directory anywhere in the path
//! - wildcard patterns containing `*` (e.g. `*.log`)
//! - exact or path-segment patterns (e.g. `test`, `src/main.ts`)

use regex::Regex;
use tracing::warn;

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;

/// Check whether a file path matches a single ignore pattern.
pub fn matches(file_path: &str, pattern: &str) -> bool {
    if let Some(stem) = pattern.strip_suffix('/') {
        return file_path.starts_with(pattern)
            || file_path.contains(&format!("/{stem}/"))
            || file_path.ends_with(&format!("/{stem}"));
    }

    if pattern.contains('*') {
        return match wildcard_regex(pattern) {
            Ok(re) => re.is_match(file_path),
            Err(e) => {
                warn!("ignoring unusable pattern '{}': {}", pattern, e);
                false
            }
        };
    }

    file_path == pattern
        || file_path.ends_with(&format!("/{pattern}"))
        || file_path.contains(&format!("/{pattern}/"))
}

/// True when any file in the list matches any of the patterns.
///
/// An empty pattern list never ignores anything.
pub fn should_ignore(files: &[String], patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    files
        .iter()
        .any(|file| patterns.iter().any(|pattern| matches(file, pattern)))
}

/// Translate a wildcard pattern into a regex anchored at both ends.
///
/// `**` and `*` both match any character sequence, so `*.test.ts` covers
/// `src/math.test.ts` as well as `math.test.ts`. Everything else matches
/// literally.
fn wildcard_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push('^');

    let mut rest = pattern;
    while let Some(idx) = rest.find('*') {
        expr.push_str(&regex::escape(&rest[..idx]));
        expr.push_str(".*");
        // runs of consecutive stars collapse into one any-sequence match
        rest = rest[idx..].trim_start_matches('*');
    }
    expr.push_str(&regex::escape(rest));

    expr.push('$');
    Regex::new(&expr)
}

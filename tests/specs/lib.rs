// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI specs for snag.
//!
//! The spec files under `cli/` are wired as `[[test]]` targets of the
//! `snag` package so they run against the freshly built binary.

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`docs`] - Doc comment extraction (marker detection)
//! - [`naming`] - Case conversion and table-name pluralization

pub mod docs;
pub mod naming;

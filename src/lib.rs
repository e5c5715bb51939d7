// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - **Library entry point**: [`Generator`] with [`GeneratorConfig`]
//! - **Selection rules**: [`model::qualifies`] and [`scan`]
//! - **Generated API**: [`template`]
//! - **Artifacts**: [`emit`]
//!
//! # Pipeline
//!
//! ```text
//! root ─► scan::source_files ─► scan::scan_file ─► ModelSpec ─► template::render ─► emit::emit
//!          (sorted, no *_gen)     (syn, marker)                   (tokens, Format)     (write/remove)
//! ```
//!
//! # Naming Reference
//!
//! | Declared | Generated |
//! |----------|-----------|
//! | `UserModel` | `UserModelColumn`, `UserModelQueryBuilder`, table `users` |
//! | `user.rs` | `user_model_gen.rs` |
//! | field `created_at: i64` | `where_created_at_is/_gt/_ge/_lt/_le`, `set_created_at` |
//! | field `name: String` | `where_name_is`, `where_name`, `set_name` |

pub mod dialect;
pub mod driver;
pub mod emit;
pub mod error;
pub mod model;
pub mod scan;
pub mod template;
pub mod utils;

pub use dialect::Dialect;
pub use driver::{Generator, GeneratorConfig, Report};
pub use emit::Outcome;
pub use error::{Error, Result};

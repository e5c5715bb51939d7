// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model extraction.
//!
//! Turns a qualifying struct into the [`ModelSpec`] the templates render.
//!
//! # Data Structures
//!
//! ```text
//! ModelSpec
//! ├── package: String        (module of the declaring file, e.g. "user")
//! ├── vis: Visibility        (declared visibility)
//! ├── ident: Ident           (struct name, e.g. "UserModel")
//! ├── dialect: Dialect       (placeholder policy)
//! ├── table: String          (e.g. "users")
//! ├── primary_key: String    (e.g. "id")
//! └── fields: Vec<FieldDescriptor>
//!     └── FieldDescriptor
//!         ├── ident: Ident       (field name)
//!         ├── ty: Type           (emitted verbatim)
//!         ├── type_text: String  (token text of ty)
//!         ├── comparable: bool   (numeric primitive)
//!         ├── nullable: bool     (always false)
//!         └── raw_tag: String    (non-doc attributes)
//! ```
//!
//! # Module Structure
//!
//! - [`field`] - Field extraction and comparability
//! - [`marker`] - Qualification predicate and `@querybuilder` options
//! - [`spec`] - The per-model representation and derived names

pub mod field;
pub mod marker;
pub mod spec;

pub use field::{FieldDescriptor, extract_fields};
pub use marker::{MarkerOptions, qualifies};
pub use spec::ModelSpec;

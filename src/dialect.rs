// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dialect resolution for generator runs.
//!
//! The placeholder policy itself lives in `querygen-core` so generated code
//! and the generator agree on it. This module resolves the configured name
//! and turns a [`Dialect`] into the path the templates embed.

use proc_macro2::TokenStream;
use quote::quote;

pub use querygen_core::Dialect;

use crate::error::Result;

/// Resolve a dialect name from configuration.
///
/// Names match case-insensitively.
///
/// # Errors
///
/// Returns [`Error::Config`](crate::Error::Config) for unknown names.
///
/// # Examples
///
/// ```
/// use querygen::dialect::{Dialect, resolve};
///
/// assert_eq!(resolve("Postgres").unwrap(), Dialect::Postgres);
/// assert!(resolve("oracle").is_err());
/// ```
pub fn resolve(name: &str) -> Result<Dialect> {
    Ok(name.parse()?)
}

/// Absolute path of the dialect constant embedded in a builder.
#[must_use]
pub fn dialect_tokens(dialect: Dialect) -> TokenStream {
    match dialect {
        Dialect::MySql => quote! { ::querygen_core::Dialect::MySql },
        Dialect::Sqlite => quote! { ::querygen_core::Dialect::Sqlite },
        Dialect::Postgres => quote! { ::querygen_core::Dialect::Postgres }
    }
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query builder rendering.
//!
//! Renders the builder unit for one [`ModelSpec`]. Every generator in the
//! submodules is a method on [`Context`], which precomputes the identifiers
//! and SQL fragments they share.
//!
//! # Generated Code
//!
//! For a model:
//!
//! ```rust,ignore
//! pub struct UserModel {
//!     pub name: String,
//!     pub age: i32,
//! }
//! ```
//!
//! Generates:
//!
//! ```rust,ignore
//! pub enum UserModelColumn { Name, Age }
//!
//! pub trait UserModelQueryBuilder: Sized {
//!     fn where_name_is(self, value: String) -> Self;
//!     fn where_name(self, operator: &str, value: String) -> Self;
//!     fn where_age_is(self, value: i32) -> Self;
//!     fn where_age(self, operator: &str, value: i32) -> Self;
//!     fn where_age_gt(self, value: i32) -> Self;
//!     // ... ge, lt, le, setters, ordering, pagination
//!     fn sql(&self) -> String;
//!     fn fetch<E: Executor>(self, db: &mut E) -> Result<Vec<UserModel>, E::Error>;
//!     // ... find_all, first, last, update, delete
//! }
//!
//! #[doc(hidden)]
//! pub struct __UserModel_query_builder { /* filter, setter and paging state */ }
//!
//! impl FromRow for UserModel { /* positional columns */ }
//!
//! impl UserModel {
//!     pub fn query() -> impl UserModelQueryBuilder;
//!     pub fn values(&self) -> Vec<&dyn Argument>;
//! }
//! ```
//!
//! Paths into `querygen_core` and `std` are absolute so the unit needs no
//! imports besides the `use super::*;` that opens its artifact.
//!
//! # Module Structure
//!
//! - [`columns`] - The column enum
//! - `builder` - Builder trait, hidden struct and trait impl
//! - `methods` - Filter, setter, ordering and pagination methods
//! - `statement` - SQL synthesis and argument binding
//! - `terminal` - Executor-backed operations
//! - `rows` - `FromRow` and the inherent `query`/`values`
//! - [`format`] - Token stream to text

pub mod columns;
pub mod format;

mod builder;
mod methods;
mod rows;
mod statement;
mod terminal;

use std::collections::BTreeMap;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Visibility};

pub use self::format::{Format, Plain, Pretty};
use crate::{
    dialect::dialect_tokens,
    error::{Error, Result},
    model::ModelSpec
};

/// Rendered text for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Model the unit was rendered for.
    pub model: String,

    /// Formatted source text of the unit.
    pub text: String
}

/// Shared state for the generators of one model.
///
/// # Fields
///
/// | Field | Example |
/// |-------|---------|
/// | `model` | `UserModel` |
/// | `trait_name` | `UserModelQueryBuilder` |
/// | `struct_name` | `__UserModel_query_builder` |
/// | `column_enum` | `UserModelColumn` |
/// | `table` | `users` |
/// | `primary_key` | `id` |
pub struct Context<'a> {
    /// The model being rendered.
    pub spec: &'a ModelSpec,

    /// Model identifier.
    pub model: &'a Ident,

    /// Visibility of every public item in the unit.
    pub vis: TokenStream,

    /// Builder trait identifier.
    pub trait_name: Ident,

    /// Hidden builder struct identifier.
    pub struct_name: Ident,

    /// Column enum identifier.
    pub column_enum: Ident,

    /// Table name.
    pub table: &'a str,

    /// Primary key column.
    pub primary_key: &'a str,

    /// `::querygen_core::Dialect::*` path of the configured dialect.
    pub dialect: TokenStream
}

impl<'a> Context<'a> {
    /// Create a context for `spec`.
    pub fn new(spec: &'a ModelSpec) -> Self {
        Self {
            spec,
            model: &spec.ident,
            vis: unit_visibility(&spec.vis),
            trait_name: spec.builder_trait(),
            struct_name: spec.builder_struct(),
            column_enum: spec.column_enum(),
            table: &spec.table,
            primary_key: &spec.primary_key,
            dialect: dialect_tokens(spec.dialect)
        }
    }
}

/// Visibility of generated items as seen from the scanned module.
///
/// The unit lives in a child module, so a private model yields
/// `pub(super)` items and any other restriction widens to `pub(crate)`.
fn unit_visibility(vis: &Visibility) -> TokenStream {
    match vis {
        Visibility::Public(_) => quote! { pub },
        Visibility::Inherited => quote! { pub(super) },
        Visibility::Restricted(_) => quote! { pub(crate) }
    }
}

/// Render the full builder unit for a model as tokens.
pub fn generate(spec: &ModelSpec) -> TokenStream {
    let ctx = Context::new(spec);

    let columns = ctx.columns();
    let builder = ctx.builder();
    let rows = ctx.from_row_impl();
    let inherent = ctx.inherent_impl();

    quote! {
        #columns
        #builder
        #rows
        #inherent
    }
}

/// Render and format the unit for a model.
///
/// # Errors
///
/// Returns [`Error::Render`] when two fields map to the same column variant
/// or when the formatter rejects the rendered tokens.
pub fn render(spec: &ModelSpec, format: &dyn Format) -> Result<GeneratedUnit> {
    check_variants(spec)?;

    let tokens = generate(spec);
    let text = format
        .format(&tokens)
        .map_err(|err| Error::render(spec.name(), err.to_string()))?;

    Ok(GeneratedUnit {
        model: spec.name(),
        text
    })
}

/// Reject models whose fields collide in the column enum.
///
/// `created_at` and `createdAt` are distinct fields but both become
/// `CreatedAt`.
fn check_variants(spec: &ModelSpec) -> Result<()> {
    let mut seen = BTreeMap::new();
    for field in &spec.fields {
        let variant = field.variant().to_string();
        if let Some(first) = seen.insert(variant.clone(), field.name()) {
            return Err(Error::render(
                spec.name(),
                format!(
                    "fields `{first}` and `{}` both map to column `{variant}`",
                    field.name()
                )
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use syn::{ItemStruct, parse_quote};

    use crate::{
        Dialect,
        model::{MarkerOptions, ModelSpec, extract_fields}
    };

    /// `UserModel { id: i64, name: String, age: i32 }` for `dialect`.
    pub fn user_model(dialect: Dialect) -> ModelSpec {
        spec_for(
            parse_quote! {
                pub struct UserModel {
                    pub id: i64,
                    pub name: String,
                    pub age: i32,
                }
            },
            dialect
        )
    }

    pub fn spec_for(item: ItemStruct, dialect: Dialect) -> ModelSpec {
        let fields = extract_fields(&item.fields).unwrap();
        ModelSpec::new(
            "user",
            item.vis,
            item.ident,
            dialect,
            fields,
            MarkerOptions::default()
        )
    }

    /// Token text with all whitespace removed.
    pub fn compact(tokens: &proc_macro2::TokenStream) -> String {
        tokens.to_string().chars().filter(|c| !c.is_whitespace()).collect()
    }
}

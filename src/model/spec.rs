// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The per-model intermediate representation.

use proc_macro2::Span;
use quote::format_ident;
use syn::{Ident, Visibility};

use super::{field::FieldDescriptor, marker::MarkerOptions};
use crate::{Dialect, utils::naming};

/// Default column used by `first` and `last`.
const DEFAULT_PRIMARY_KEY: &str = "id";

/// Everything the templates need to render one builder.
///
/// Built once per qualifying struct and consumed by a single render.
///
/// # Derived Names
///
/// | Item | Name for `UserModel` |
/// |------|----------------------|
/// | Builder trait | `UserModelQueryBuilder` |
/// | Column enum | `UserModelColumn` |
/// | Builder struct | `__UserModel_query_builder` |
/// | Table | `users` |
#[derive(Debug, Clone)]
pub struct ModelSpec {
    /// Module name of the file declaring the model.
    ///
    /// Named in the generated trait's docs.
    pub package: String,

    /// Exact declared identifier of the model.
    pub ident: Ident,

    /// Declared visibility of the model.
    pub vis: Visibility,

    /// Placeholder policy baked into the builder.
    pub dialect: Dialect,

    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,

    /// SQL table name.
    pub table: String,

    /// Column ordered on by `first` and `last`.
    pub primary_key: String
}

impl ModelSpec {
    /// Assemble a spec, applying marker overrides over derived defaults.
    pub fn new(
        package: impl Into<String>,
        vis: Visibility,
        ident: Ident,
        dialect: Dialect,
        fields: Vec<FieldDescriptor>,
        options: MarkerOptions
    ) -> Self {
        let name = ident.to_string();
        Self {
            package: package.into(),
            table: options.table.unwrap_or_else(|| naming::table_name(&name)),
            primary_key: options
                .primary_key
                .unwrap_or_else(|| DEFAULT_PRIMARY_KEY.to_string()),
            ident,
            vis,
            dialect,
            fields
        }
    }

    /// Model name as a string.
    pub fn name(&self) -> String {
        self.ident.to_string()
    }

    /// Builder trait identifier (`{Model}QueryBuilder`).
    pub fn builder_trait(&self) -> Ident {
        format_ident!("{}QueryBuilder", self.ident)
    }

    /// Hidden builder struct identifier.
    pub fn builder_struct(&self) -> Ident {
        Ident::new(&naming::builder_struct_name(&self.name()), Span::call_site())
    }

    /// Column enum identifier (`{Model}Column`).
    pub fn column_enum(&self) -> Ident {
        format_ident!("{}Column", self.ident)
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;
    use crate::model::field::extract_fields;

    fn spec(options: MarkerOptions) -> ModelSpec {
        let item: syn::ItemStruct = parse_quote! {
            struct UserModel { id: i64, name: String }
        };
        let fields = extract_fields(&item.fields).unwrap();
        ModelSpec::new("user", item.vis, item.ident, Dialect::MySql, fields, options)
    }

    #[test]
    fn derives_names_from_model() {
        let spec = spec(MarkerOptions::default());
        assert_eq!(spec.builder_trait().to_string(), "UserModelQueryBuilder");
        assert_eq!(spec.column_enum().to_string(), "UserModelColumn");
        assert_eq!(spec.builder_struct().to_string(), "__UserModel_query_builder");
        assert_eq!(spec.table, "users");
        assert_eq!(spec.primary_key, "id");
        assert_eq!(spec.package, "user");
    }

    #[test]
    fn marker_options_override_defaults() {
        let spec = spec(MarkerOptions {
            table:       Some("accounts".to_string()),
            primary_key: Some("account_id".to_string())
        });
        assert_eq!(spec.table, "accounts");
        assert_eq!(spec.primary_key, "account_id");
    }
}

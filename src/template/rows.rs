// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row materialization and model entry points.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::querygen_core::FromRow for UserModel {
//!     fn from_row<R: Row>(mut row: R) -> Result<Self, R::Error> {
//!         Ok(Self {
//!             id: row.column(0)?,
//!             name: row.column(1)?,
//!         })
//!     }
//!     // from_rows maps from_row and stops at the first error
//! }
//!
//! impl UserModel {
//!     pub fn query() -> impl UserModelQueryBuilder { ... }
//!     pub fn values(&self) -> Vec<&dyn Argument> {
//!         vec![&self.id as &dyn Argument, &self.name as &dyn Argument]
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::Context;

impl Context<'_> {
    /// Generate `impl FromRow` reading columns in declaration order.
    pub fn from_row_impl(&self) -> TokenStream {
        let model = self.model;
        let assignments = self.spec.fields.iter().enumerate().map(|(index, f)| {
            let ident = &f.ident;
            quote! { #ident: row.column(#index)? }
        });
        let allow = if self.spec.fields.is_empty() {
            quote! { #[allow(unused_mut, unused_variables)] }
        } else {
            TokenStream::new()
        };

        quote! {
            impl ::querygen_core::FromRow for #model {
                #allow
                fn from_row<R: ::querygen_core::Row>(
                    mut row: R,
                ) -> ::core::result::Result<Self, R::Error> {
                    ::core::result::Result::Ok(Self {
                        #(#assignments),*
                    })
                }

                fn from_rows<R, I>(rows: I) -> ::core::result::Result<::std::vec::Vec<Self>, R::Error>
                where
                    R: ::querygen_core::Row,
                    I: ::core::iter::IntoIterator<Item = R>,
                {
                    rows.into_iter().map(Self::from_row).collect()
                }
            }
        }
    }

    /// Generate `Model::query()` and `Model::values()`.
    pub fn inherent_impl(&self) -> TokenStream {
        let Self {
            model,
            vis,
            trait_name,
            struct_name,
            ..
        } = self;
        let values = self.spec.fields.iter().map(|f| {
            let ident = &f.ident;
            quote! { &self.#ident as &dyn ::querygen_core::Argument }
        });

        quote! {
            impl #model {
                /// Start a query against this model's table.
                #[must_use]
                #vis fn query() -> impl #trait_name {
                    <#struct_name as ::core::default::Default>::default()
                }

                /// Every field as a bindable argument, in declaration order.
                #[must_use]
                #vis fn values(&self) -> ::std::vec::Vec<&dyn ::querygen_core::Argument> {
                    ::std::vec![#(#values),*]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;
    use crate::{Dialect, template::test_support::*};

    #[test]
    fn from_row_reads_positional_columns() {
        let spec = user_model(Dialect::MySql);
        let text = compact(&Context::new(&spec).from_row_impl());
        assert!(text.contains("impl::querygen_core::FromRowforUserModel"));
        assert!(text.contains(
            "Self{id:row.column(0usize)?,name:row.column(1usize)?,age:row.column(2usize)?}"
        ));
        assert!(text.contains("rows.into_iter().map(Self::from_row).collect()"));
        assert!(!text.contains("unused_mut"));
    }

    #[test]
    fn empty_model_silences_unused_row() {
        let spec = spec_for(parse_quote! { pub struct EmptyModel; }, Dialect::MySql);
        let text = compact(&Context::new(&spec).from_row_impl());
        assert!(text.contains("#[allow(unused_mut,unused_variables)]"));
        assert!(text.contains("Ok(Self{})"));
    }

    #[test]
    fn values_follow_declaration_order() {
        let spec = user_model(Dialect::MySql);
        let text = compact(&Context::new(&spec).inherent_impl());
        assert!(text.contains(
            "::std::vec![&self.idas&dyn::querygen_core::Argument,&self.nameas&dyn::querygen_core::Argument,&self.ageas&dyn::querygen_core::Argument]"
        ));
        assert!(text.contains("pubfnquery()->implUserModelQueryBuilder"));
    }

    #[test]
    fn raw_identifiers_survive() {
        let spec = spec_for(
            parse_quote! { pub struct TagModel { pub r#type: String } },
            Dialect::MySql
        );
        let text = compact(&Context::new(&spec).from_row_impl());
        assert!(text.contains("r#type:row.column(0usize)?"));
    }
}

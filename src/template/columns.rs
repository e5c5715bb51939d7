// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column enum generation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! pub enum UserModelColumn {
//!     Id,
//!     Name,
//!     CreatedAt,
//! }
//!
//! impl UserModelColumn {
//!     pub const ALL: [Self; 3] = [Self::Id, Self::Name, Self::CreatedAt];
//!
//!     pub const fn as_str(self) -> &'static str {
//!         match self {
//!             Self::Id => "id",
//!             Self::Name => "name",
//!             Self::CreatedAt => "created_at",
//!         }
//!     }
//! }
//! ```
//!
//! Variants follow declaration order, so `Ord` on the enum is declaration
//! order and the builder's `BTreeMap` state iterates in it.

use proc_macro2::TokenStream;
use quote::quote;

use super::Context;

impl Context<'_> {
    /// Generate the column enum with `ALL`, `as_str` and `Display`.
    pub fn columns(&self) -> TokenStream {
        let Self {
            vis, column_enum, ..
        } = self;
        let fields = &self.spec.fields;

        let variants: Vec<_> = fields.iter().map(|f| f.variant()).collect();
        let columns: Vec<_> = fields.iter().map(|f| f.column()).collect();
        let count = fields.len();
        let doc = format!("Columns of [`{}`], in declaration order.", self.model);

        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            #vis enum #column_enum {
                #(#variants),*
            }

            impl #column_enum {
                /// Every column, in declaration order.
                #vis const ALL: [Self; #count] = [#(Self::#variants),*];

                /// SQL name of the column.
                #[must_use]
                #vis const fn as_str(self) -> &'static str {
                    match self {
                        #(Self::#variants => #columns),*
                    }
                }
            }

            impl ::core::fmt::Display for #column_enum {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(self.as_str())
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
    fn variants_follow_declaration_order() {
        let spec = spec_for(
            parse_quote! {
                pub struct UserModel {
                    pub name: String,
                    pub created_at: i64,
                    pub id: i64,
                }
            },
            Dialect::MySql
        );
        let text = compact(&Context::new(&spec).columns());
        assert!(text.contains("pubenumUserModelColumn{Name,CreatedAt,Id}"));
        assert!(text.contains("[Self;3usize]=[Self::Name,Self::CreatedAt,Self::Id]"));
        assert!(text.contains("Self::CreatedAt=>\"created_at\""));
    }

    #[test]
    fn empty_model_has_empty_enum() {
        let spec = spec_for(parse_quote! { pub struct EmptyModel {} }, Dialect::MySql);
        let text = compact(&Context::new(&spec).columns());
        assert!(text.contains("pubenumEmptyModelColumn{}"));
        assert!(text.contains("[Self;0usize]=[]"));
        assert!(text.contains("matchself{}"));
    }

    #[test]
    fn raw_field_names_are_plain_columns() {
        let spec = spec_for(
            parse_quote! { pub struct TagModel { pub r#type: String } },
            Dialect::MySql
        );
        let text = compact(&Context::new(&spec).columns());
        assert!(text.contains("Self::Type=>\"type\""));
    }
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Builder trait and hidden struct generation.
//!
//! The trait is the capability surface users call; the struct holding the
//! state is `#[doc(hidden)]` and only reachable through `Model::query()`.
//!
//! # Builder State
//!
//! | Field | Type | Meaning |
//! |-------|------|---------|
//! | `mode` | `Mode` | Statement kind rendered by `sql()` |
//! | `filters` | `BTreeMap<Column, Condition>` | One active filter per column |
//! | `sets` | `BTreeMap<Column, Box<dyn Argument>>` | One assignment per column |
//! | `order_by` | `Vec<String>` | `col ASC\|DESC` in call order |
//! | `projected` | `Vec<Column>` | Selected columns, empty for `*` |
//! | `limit` | `usize` | Zero for no `LIMIT` |
//! | `offset` | `usize` | Zero for no `OFFSET` |

use proc_macro2::TokenStream;
use quote::quote;

use super::Context;

/// One builder operation: its trait declaration and its implementation.
pub struct BuilderMethod {
    /// Doc comment attached to the trait declaration.
    pub doc: String,

    /// Signature as declared in the trait, without a trailing `;`.
    pub decl: TokenStream,

    /// Full definition inside the trait impl.
    pub def: TokenStream
}

impl BuilderMethod {
    pub fn new(doc: impl Into<String>, decl: TokenStream, def: TokenStream) -> Self {
        Self {
            doc: doc.into(),
            decl,
            def
        }
    }
}

impl Context<'_> {
    /// Generate the trait, the hidden struct and the impl tying them.
    pub fn builder(&self) -> TokenStream {
        let Self {
            model,
            vis,
            trait_name,
            struct_name,
            ..
        } = self;

        let methods: Vec<BuilderMethod> = [
            self.filter_methods(),
            self.setter_methods(),
            self.order_methods(),
            self.pagination_methods(),
            self.statement_methods(),
            self.terminal_methods()
        ]
        .into_iter()
        .flatten()
        .collect();

        let decls = methods.iter().map(|m| {
            let doc = &m.doc;
            let decl = &m.decl;
            quote! {
                #[doc = #doc]
                #decl;
            }
        });
        let defs = methods.iter().map(|m| &m.def);

        let trait_doc = format!(
            "Query builder for [`{model}`] from module `{}`.",
            self.spec.package
        );
        let state = self.builder_state();
        let helpers = self.statement_helpers();

        quote! {
            #[doc = #trait_doc]
            #vis trait #trait_name: ::core::marker::Sized {
                #(#decls)*
            }

            #state
            #helpers

            impl #trait_name for #struct_name {
                #(#defs)*
            }
        }
    }

    fn builder_state(&self) -> TokenStream {
        let Self {
            vis,
            struct_name,
            column_enum,
            ..
        } = self;

        quote! {
            #[doc(hidden)]
            #[allow(non_camel_case_types)]
            #[derive(Debug, Default)]
            #vis struct #struct_name {
                mode: ::querygen_core::Mode,
                filters: ::std::collections::BTreeMap<#column_enum, ::querygen_core::Condition>,
                sets: ::std::collections::BTreeMap<
                    #column_enum,
                    ::std::boxed::Box<dyn ::querygen_core::Argument>
                >,
                order_by: ::std::vec::Vec<::std::string::String>,
                projected: ::std::vec::Vec<#column_enum>,
                limit: usize,
                offset: usize,
            }
        }
    }
}

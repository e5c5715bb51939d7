// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Chainable builder methods.
//!
//! # Per Field
//!
//! | Method | SQL | Generated for |
//! |--------|-----|---------------|
//! | `where_{f}_is(v)` | `f = ?` | every field |
//! | `where_{f}(op, v)` | `f op ?` | every field |
//! | `where_{f}_gt(v)` | `f > ?` | numeric primitives |
//! | `where_{f}_ge(v)` | `f >= ?` | numeric primitives |
//! | `where_{f}_lt(v)` | `f < ?` | numeric primitives |
//! | `where_{f}_le(v)` | `f <= ?` | numeric primitives |
//! | `set_{f}(v)` | `f = ?` in `SET` | every field |
//!
//! A later filter or setter on the same field replaces the earlier one.

use proc_macro2::TokenStream;
use quote::quote;

use super::{Context, builder::BuilderMethod};
use crate::model::FieldDescriptor;

/// Range filters: method suffix, operator and doc wording.
const RANGE_FILTERS: &[(&str, &str, &str)] = &[
    ("_gt", ">", "greater than"),
    ("_ge", ">=", "greater than or equal to"),
    ("_lt", "<", "less than"),
    ("_le", "<=", "less than or equal to")
];

impl Context<'_> {
    /// Generate the `where_*` methods for every field.
    pub fn filter_methods(&self) -> Vec<BuilderMethod> {
        let mut methods = Vec::new();

        for field in &self.spec.fields {
            let column = field.column();
            methods.push(self.filter(
                field,
                field.method("where_", "_is"),
                "=",
                format!("Filter rows where `{column}` equals `value`.")
            ));
            methods.push(self.custom_filter(field));

            if field.comparable {
                for (suffix, operator, wording) in RANGE_FILTERS {
                    methods.push(self.filter(
                        field,
                        field.method("where_", suffix),
                        operator,
                        format!("Filter rows where `{column}` is {wording} `value`.")
                    ));
                }
            }
        }

        methods
    }

    fn filter(
        &self,
        field: &FieldDescriptor,
        name: syn::Ident,
        operator: &str,
        doc: String
    ) -> BuilderMethod {
        let column_enum = &self.column_enum;
        let variant = field.variant();
        let ty = &field.ty;

        BuilderMethod::new(
            doc,
            quote! { fn #name(self, value: #ty) -> Self },
            quote! {
                fn #name(mut self, value: #ty) -> Self {
                    self.filters.insert(
                        #column_enum::#variant,
                        ::querygen_core::Condition::new(#operator, value),
                    );
                    self
                }
            }
        )
    }

    fn custom_filter(&self, field: &FieldDescriptor) -> BuilderMethod {
        let column_enum = &self.column_enum;
        let name = field.method("where_", "");
        let variant = field.variant();
        let ty = &field.ty;

        BuilderMethod::new(
            format!(
                "Filter rows on `{}` with a caller-supplied operator such as `LIKE` or `<>`.",
                field.column()
            ),
            quote! { fn #name(self, operator: &str, value: #ty) -> Self },
            quote! {
                fn #name(mut self, operator: &str, value: #ty) -> Self {
                    self.filters.insert(
                        #column_enum::#variant,
                        ::querygen_core::Condition::new(operator, value),
                    );
                    self
                }
            }
        )
    }

    /// Generate the `set_*` methods, which switch the builder to `UPDATE`.
    pub fn setter_methods(&self) -> Vec<BuilderMethod> {
        let column_enum = &self.column_enum;

        self.spec
            .fields
            .iter()
            .map(|field| {
                let name = field.method("set_", "");
                let variant = field.variant();
                let ty = &field.ty;

                BuilderMethod::new(
                    format!("Assign `value` to `{}` in an `UPDATE`.", field.column()),
                    quote! { fn #name(self, value: #ty) -> Self },
                    quote! {
                        fn #name(mut self, value: #ty) -> Self {
                            self.sets.insert(#column_enum::#variant, ::std::boxed::Box::new(value));
                            self.mode = ::querygen_core::Mode::Update;
                            self
                        }
                    }
                )
            })
            .collect()
    }

    /// Generate `order_by_asc`, `order_by_desc` and `project`.
    pub fn order_methods(&self) -> Vec<BuilderMethod> {
        let column_enum = &self.column_enum;

        let order = |name: &str, direction: &str| {
            let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
            let format = format!("{{}} {direction}");
            BuilderMethod::new(
                format!("Append `column {direction}` to the ordering."),
                quote! { fn #ident(self, column: #column_enum) -> Self },
                quote! {
                    fn #ident(mut self, column: #column_enum) -> Self {
                        self.order_by.push(::std::format!(#format, column.as_str()));
                        self.mode = ::querygen_core::Mode::Select;
                        self
                    }
                }
            )
        };

        vec![
            order("order_by_asc", "ASC"),
            order("order_by_desc", "DESC"),
            BuilderMethod::new(
                "Select only `columns`. An empty slice selects `*`.",
                quote! { fn project(self, columns: &[#column_enum]) -> Self },
                quote! {
                    fn project(mut self, columns: &[#column_enum]) -> Self {
                        self.projected = columns.to_vec();
                        self
                    }
                }
            ),
        ]
    }

    /// Generate `limit` and `offset`.
    pub fn pagination_methods(&self) -> Vec<BuilderMethod> {
        let paging = |name: &str, doc: &str| {
            let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
            BuilderMethod::new(
                doc,
                quote! { fn #ident(self, #ident: usize) -> Self },
                quote! {
                    fn #ident(mut self, #ident: usize) -> Self {
                        self.#ident = #ident;
                        self.mode = ::querygen_core::Mode::Select;
                        self
                    }
                }
            )
        };

        vec![
            paging("limit", "Return at most `limit` rows. Zero removes the limit."),
            paging("offset", "Skip the first `offset` rows. Zero removes the offset."),
        ]
    }
}

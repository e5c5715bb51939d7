// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Terminal operations.
//!
//! Each consumes the builder, renders its statement and runs it through a
//! caller-supplied [`Executor`](querygen_core::Executor).
//!
//! | Method | Mode | Executor call | Returns |
//! |--------|------|---------------|---------|
//! | `fetch`, `find_all` | Select | `query` | `Vec<Model>` |
//! | `first` | Select, `ORDER BY pk ASC LIMIT 1` | `query_row` | `Model` |
//! | `last` | Select, `ORDER BY pk DESC LIMIT 1` | `query_row` | `Model` |
//! | `update` | Update | `execute` | affected rows |
//! | `delete` | Delete | `execute` | affected rows |

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{Context, builder::BuilderMethod};

impl Context<'_> {
    /// Generate the executor-backed operations.
    pub fn terminal_methods(&self) -> Vec<BuilderMethod> {
        let model = self.model;
        let rows = quote! {
            ::core::result::Result<::std::vec::Vec<#model>, E::Error>
        };

        vec![
            self.terminal(
                "fetch",
                "Run the `SELECT` and materialize every row.",
                &rows,
                quote! {
                    self.mode = ::querygen_core::Mode::Select;
                    let (sql, args) = self.statement();
                    let rows = db.query(&sql, &args)?;
                    <#model as ::querygen_core::FromRow>::from_rows(rows)
                }
            ),
            self.terminal(
                "find_all",
                "Alias of `fetch`.",
                &rows,
                quote! { self.fetch(db) }
            ),
            self.edge_row("first", "ASC"),
            self.edge_row("last", "DESC"),
            self.execute(
                "update",
                "Run the `UPDATE` and return the number of affected rows.",
                quote! { ::querygen_core::Mode::Update }
            ),
            self.execute(
                "delete",
                "Run the `DELETE` and return the number of affected rows.",
                quote! { ::querygen_core::Mode::Delete }
            ),
        ]
    }

    fn terminal(
        &self,
        name: &str,
        doc: &str,
        output: &TokenStream,
        body: TokenStream
    ) -> BuilderMethod {
        let ident = format_ident!("{}", name);
        BuilderMethod::new(
            doc,
            quote! {
                fn #ident<E: ::querygen_core::Executor>(self, db: &mut E) -> #output
            },
            quote! {
                #[allow(unused_mut)]
                fn #ident<E: ::querygen_core::Executor>(mut self, db: &mut E) -> #output {
                    #body
                }
            }
        )
    }

    fn edge_row(&self, name: &str, direction: &str) -> BuilderMethod {
        let model = self.model;
        let order = format!("{{}} {direction}");
        let doc = format!(
            "Fetch the row with the {} `{}`, ignoring any previous ordering.",
            if direction == "ASC" { "lowest" } else { "highest" },
            self.primary_key
        );

        self.terminal(
            name,
            &doc,
            &quote! { ::core::result::Result<#model, E::Error> },
            quote! {
                self.order_by = ::std::vec![::std::format!(#order, Self::PRIMARY_KEY)];
                self.limit = 1;
                self.mode = ::querygen_core::Mode::Select;
                let (sql, args) = self.statement();
                let row = db.query_row(&sql, &args)?;
                <#model as ::querygen_core::FromRow>::from_row(row)
            }
        )
    }

    fn execute(&self, name: &str, doc: &str, mode: TokenStream) -> BuilderMethod {
        self.terminal(
            name,
            doc,
            &quote! { ::core::result::Result<u64, E::Error> },
            quote! {
                self.mode = #mode;
                let (sql, args) = self.statement();
                db.execute(&sql, &args)
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dialect, template::test_support::*};

    fn defs(spec: &crate::model::ModelSpec) -> Vec<String> {
        Context::new(spec)
            .terminal_methods()
            .iter()
            .map(|m| compact(&m.def))
            .collect()
    }

    #[test]
    fn fetch_materializes_rows() {
        let spec = user_model(Dialect::MySql);
        let defs = defs(&spec);
        assert!(defs[0].contains(
            "fnfetch<E:::querygen_core::Executor>(mutself,db:&mutE)->::core::result::Result<::std::vec::Vec<UserModel>,E::Error>"
        ));
        assert!(defs[0].contains("<UserModelas::querygen_core::FromRow>::from_rows(rows)"));
        assert!(defs[1].contains("self.fetch(db)"));
    }

    #[test]
    fn first_and_last_replace_ordering() {
        let spec = user_model(Dialect::MySql);
        let defs = defs(&spec);
        assert!(defs[2].contains("self.order_by=::std::vec![::std::format!(\"{}ASC\",Self::PRIMARY_KEY)];"));
        assert!(defs[3].contains("\"{}DESC\""));
        assert!(defs[2].contains("self.limit=1;"));
        assert!(defs[3].contains("db.query_row(&sql,&args)?"));
    }

    #[test]
    fn update_and_delete_execute() {
        let spec = user_model(Dialect::MySql);
        let defs = defs(&spec);
        assert!(defs[4].contains("self.mode=::querygen_core::Mode::Update;"));
        assert!(defs[5].contains("self.mode=::querygen_core::Mode::Delete;"));
        assert!(defs[5].contains("->::core::result::Result<u64,E::Error>"));
    }
}

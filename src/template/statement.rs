// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL synthesis.
//!
//! Statements are rendered from the builder state when asked for, never
//! accumulated while chaining, so the placeholders always match the
//! arguments actually bound.
//!
//! # Generated SQL
//!
//! | Mode | Shape |
//! |------|-------|
//! | Select | `SELECT {cols\|*} FROM t [WHERE ..] [ORDER BY ..] [LIMIT n] [OFFSET n]` |
//! | Update | `UPDATE t [SET a = ?, ..] [WHERE ..]` |
//! | Delete | `DELETE FROM t [WHERE ..]` |
//!
//! Conditions are joined with `AND` in declaration order. Arguments are
//! bound in one list per statement, `SET` values first, then `WHERE`
//! values; PostgreSQL placeholders number that list from `$1`.

use proc_macro2::TokenStream;
use quote::quote;

use super::{Context, builder::BuilderMethod};

impl Context<'_> {
    /// Generate `sql` and `arguments`.
    pub fn statement_methods(&self) -> Vec<BuilderMethod> {
        vec![
            BuilderMethod::new(
                "Render the statement for the current mode.",
                quote! { fn sql(&self) -> ::std::string::String },
                quote! {
                    fn sql(&self) -> ::std::string::String {
                        self.statement().0
                    }
                }
            ),
            BuilderMethod::new(
                "Bound arguments, in placeholder order.",
                quote! { fn arguments(&self) -> ::std::vec::Vec<&dyn ::querygen_core::Argument> },
                quote! {
                    fn arguments(&self) -> ::std::vec::Vec<&dyn ::querygen_core::Argument> {
                        self.statement().1
                    }
                }
            ),
        ]
    }

    /// Generate the inherent impl holding the table constants and the
    /// statement renderer.
    pub fn statement_helpers(&self) -> TokenStream {
        let Self {
            struct_name,
            table,
            primary_key,
            dialect,
            ..
        } = self;

        quote! {
            impl #struct_name {
                const TABLE: &'static str = #table;
                const PRIMARY_KEY: &'static str = #primary_key;
                const DIALECT: ::querygen_core::Dialect = #dialect;

                fn where_clause<'a>(
                    &'a self,
                    args: &mut ::std::vec::Vec<&'a dyn ::querygen_core::Argument>,
                ) -> ::core::option::Option<::std::string::String> {
                    if self.filters.is_empty() {
                        return ::core::option::Option::None;
                    }
                    let mut conditions = ::std::vec::Vec::with_capacity(self.filters.len());
                    for (column, condition) in &self.filters {
                        args.push(&*condition.value);
                        conditions.push(::std::format!(
                            "{} {} {}",
                            column.as_str(),
                            condition.operator,
                            Self::DIALECT.placeholder(args.len())
                        ));
                    }
                    ::core::option::Option::Some(conditions.join(" AND "))
                }

                fn statement(
                    &self,
                ) -> (::std::string::String, ::std::vec::Vec<&dyn ::querygen_core::Argument>) {
                    let mut args: ::std::vec::Vec<&dyn ::querygen_core::Argument> =
                        ::std::vec::Vec::new();

                    let mut sql = match self.mode {
                        ::querygen_core::Mode::Select => {
                            let projection = if self.projected.is_empty() {
                                ::std::string::String::from("*")
                            } else {
                                self.projected
                                    .iter()
                                    .map(|column| column.as_str())
                                    .collect::<::std::vec::Vec<_>>()
                                    .join(", ")
                            };
                            ::std::format!("SELECT {} FROM {}", projection, Self::TABLE)
                        }
                        ::querygen_core::Mode::Update => {
                            let mut sql = ::std::format!("UPDATE {}", Self::TABLE);
                            if !self.sets.is_empty() {
                                let mut assignments =
                                    ::std::vec::Vec::with_capacity(self.sets.len());
                                for (column, value) in &self.sets {
                                    args.push(&**value);
                                    assignments.push(::std::format!(
                                        "{} = {}",
                                        column.as_str(),
                                        Self::DIALECT.placeholder(args.len())
                                    ));
                                }
                                sql.push_str(" SET ");
                                sql.push_str(&assignments.join(", "));
                            }
                            sql
                        }
                        ::querygen_core::Mode::Delete => {
                            ::std::format!("DELETE FROM {}", Self::TABLE)
                        }
                    };

                    if let ::core::option::Option::Some(conditions) = self.where_clause(&mut args) {
                        sql.push_str(" WHERE ");
                        sql.push_str(&conditions);
                    }

                    if self.mode == ::querygen_core::Mode::Select {
                        if !self.order_by.is_empty() {
                            sql.push_str(" ORDER BY ");
                            sql.push_str(&self.order_by.join(", "));
                        }
                        if self.limit > 0 {
                            sql.push_str(&::std::format!(" LIMIT {}", self.limit));
                        }
                        if self.offset > 0 {
                            sql.push_str(&::std::format!(" OFFSET {}", self.offset));
                        }
                    }

                    (sql, args)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dialect, template::test_support::*};

    #[test]
    fn constants_carry_table_key_and_dialect() {
        let spec = user_model(Dialect::Postgres);
        let text = compact(&Context::new(&spec).statement_helpers());
        assert!(text.contains("constTABLE:&'staticstr=\"users\";"));
        assert!(text.contains("constPRIMARY_KEY:&'staticstr=\"id\";"));
        assert!(text.contains("constDIALECT:::querygen_core::Dialect=::querygen_core::Dialect::Postgres;"));
    }

    #[test]
    fn set_arguments_bind_before_where_arguments() {
        let spec = user_model(Dialect::Postgres);
        let text = compact(&Context::new(&spec).statement_helpers());
        let set = text.find("args.push(&**value)").unwrap();
        let filter_call = text.find("self.where_clause(&mut args)").unwrap();
        assert!(set < filter_call);
    }

    #[test]
    fn placeholders_use_shared_argument_position() {
        let spec = user_model(Dialect::MySql);
        let text = compact(&Context::new(&spec).statement_helpers());
        assert_eq!(text.matches("Self::DIALECT.placeholder(args.len())").count(), 2);
    }

    #[test]
    fn sql_and_arguments_share_one_render() {
        let spec = user_model(Dialect::MySql);
        let methods = Context::new(&spec).statement_methods();
        assert!(compact(&methods[0].def).contains("self.statement().0"));
        assert!(compact(&methods[1].def).contains("self.statement().1"));
    }
}

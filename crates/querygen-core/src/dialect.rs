// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL dialect configuration.
//!
//! This module defines [`Dialect`], which controls how bound-argument
//! placeholders are rendered in synthesized statements.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// SQL dialect for placeholder rendering.
///
/// The dialect is chosen once per generator run and baked into every
/// generated builder as a constant.
///
/// # Supported Databases
///
/// | Dialect | Name | Placeholder |
/// |---------|------|-------------|
/// | MySQL | `mysql` | `?` |
/// | SQLite | `sqlite` | `?` |
/// | PostgreSQL | `postgres` | `$1, $2, $3, ...` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// MySQL - positional `?` placeholders.
    #[default]
    MySql,

    /// SQLite - positional `?` placeholders.
    Sqlite,

    /// PostgreSQL - numbered `$n` placeholders.
    Postgres
}

impl Dialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Self; 3] = [Self::MySql, Self::Sqlite, Self::Postgres];

    /// Render the placeholder for the argument at `index` (1-based).
    ///
    /// `index` is the position of the argument in the statement's single
    /// argument list. MySQL and SQLite ignore it.
    ///
    /// # Examples
    ///
    /// ```
    /// use querygen_core::Dialect;
    ///
    /// assert_eq!(Dialect::MySql.placeholder(3), "?");
    /// assert_eq!(Dialect::Postgres.placeholder(3), "$3");
    /// ```
    #[must_use]
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Self::MySql | Self::Sqlite => "?".to_string(),
            Self::Postgres => format!("${index}")
        }
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres"
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dialect name outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect '{name}' (expected one of: mysql, sqlite, postgres)")]
pub struct UnknownDialect {
    /// The rejected name.
    pub name: String
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "sqlite" => Ok(Self::Sqlite),
            "postgres" => Ok(Self::Postgres),
            _ => Err(UnknownDialect {
                name: value.to_string()
            })
        }
    }
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for querygen.
//!
//! This crate is the runtime contract between the `querygen` generator and the
//! query builders it emits. Generated code refers to these items through
//! absolute `::querygen_core::` paths, so a crate containing generated
//! artifacts only needs this crate as a dependency.
//!
//! # Overview
//!
//! - [`Dialect`] - Placeholder rendering policy (`?` or `$n`)
//! - [`Mode`] - Statement kind a builder synthesizes
//! - [`Condition`] - One active filter (operator + bound value)
//! - [`Argument`] - Type-erased bound value
//! - [`Executor`] / [`Row`] / [`FromRow`] - Execution and row mapping seams
//! - [`prelude`] - Convenient re-exports
//!
//! # Usage
//!
//! ```rust,ignore
//! use querygen_core::prelude::*;
//!
//! let users = UserModel::query()
//!     .where_age_gt(18)
//!     .order_by_desc(UserModelColumn::Age)
//!     .fetch(&mut executor)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod argument;
mod dialect;
mod executor;
mod statement;

pub mod prelude;

pub use argument::Argument;
pub use dialect::{Dialect, UnknownDialect};
pub use executor::{Executor, FromRow, Row};
pub use statement::{Condition, Mode};

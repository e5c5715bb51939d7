// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Execution and row-mapping seams.
//!
//! Generated builders never talk to a driver directly. Terminal operations
//! hand the synthesized SQL and its arguments to an [`Executor`], and map the
//! returned [`Row`]s back onto the model through [`FromRow`].
//!
//! # Implementing an Executor
//!
//! ```rust,ignore
//! struct Connection { /* driver handle */ }
//!
//! impl Executor for Connection {
//!     type Error = DriverError;
//!     type Row = DriverRow;
//!
//!     fn execute(&mut self, sql: &str, args: &[&dyn Argument]) -> Result<u64, DriverError> {
//!         let params = args.iter().map(|a| to_driver_value(*a)).collect::<Result<Vec<_>, _>>()?;
//!         self.handle.execute(sql, &params)
//!     }
//!     // ...
//! }
//! ```

use std::any::Any;

use crate::Argument;

/// A database handle able to run synthesized statements.
pub trait Executor {
    /// Error type for execution and row decoding.
    type Error;

    /// Row type returned by queries.
    type Row: Row<Error = Self::Error>;

    /// Run a statement that returns no rows (`UPDATE`, `DELETE`).
    ///
    /// Returns the number of affected rows.
    fn execute(&mut self, sql: &str, args: &[&dyn Argument]) -> Result<u64, Self::Error>;

    /// Run a query and return every row, in result order.
    fn query(&mut self, sql: &str, args: &[&dyn Argument]) -> Result<Vec<Self::Row>, Self::Error>;

    /// Run a query expected to yield at least one row and return the first.
    ///
    /// Implementations report an empty result as an error.
    fn query_row(&mut self, sql: &str, args: &[&dyn Argument]) -> Result<Self::Row, Self::Error>;
}

/// One result row, read positionally.
///
/// Columns are taken by value: a generated `from_row` reads every column
/// exactly once, in field declaration order.
pub trait Row {
    /// Error raised for a missing column or a type mismatch.
    type Error;

    /// Take the value of the column at `index` (0-based) as `T`.
    fn column<T: Any>(&mut self, index: usize) -> Result<T, Self::Error>;
}

/// Mapping from result rows onto a model.
///
/// Generated for every model; the column order matches field declaration
/// order.
pub trait FromRow: Sized {
    /// Map a single row.
    fn from_row<R: Row>(row: R) -> Result<Self, R::Error>;

    /// Map a row set, preserving order.
    ///
    /// Stops at the first row that fails to map.
    fn from_rows<R, I>(rows: I) -> Result<Vec<Self>, R::Error>
    where
        R: Row,
        I: IntoIterator<Item = R>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRow(Vec<Option<Box<dyn Any>>>);

    impl Row for TestRow {
        type Error = String;

        fn column<T: Any>(&mut self, index: usize) -> Result<T, String> {
            let value = self
                .0
                .get_mut(index)
                .and_then(Option::take)
                .ok_or_else(|| format!("missing column {index}"))?;
            value
                .downcast::<T>()
                .map(|boxed| *boxed)
                .map_err(|_| format!("type mismatch at column {index}"))
        }
    }

    #[derive(Debug, PartialEq)]
    struct Pair {
        left:  i32,
        right: String
    }

    impl FromRow for Pair {
        fn from_row<R: Row>(mut row: R) -> Result<Self, R::Error> {
            Ok(Self {
                left:  row.column(0)?,
                right: row.column(1)?
            })
        }

        fn from_rows<R, I>(rows: I) -> Result<Vec<Self>, R::Error>
        where
            R: Row,
            I: IntoIterator<Item = R>
        {
            rows.into_iter().map(Self::from_row).collect()
        }
    }

    fn row(left: i32, right: &str) -> TestRow {
        TestRow(vec![
            Some(Box::new(left) as Box<dyn Any>),
            Some(Box::new(right.to_string()) as Box<dyn Any>),
        ])
    }

    #[test]
    fn from_row_reads_columns_in_order() {
        let pair = Pair::from_row(row(1, "a")).unwrap();
        assert_eq!(
            pair,
            Pair {
                left:  1,
                right: "a".to_string()
            }
        );
    }

    #[test]
    fn from_rows_stops_at_first_error() {
        let bad = TestRow(vec![Some(Box::new("wrong") as Box<dyn Any>)]);
        let result = Pair::from_rows(vec![row(1, "a"), bad, row(3, "c")]);
        assert_eq!(result.unwrap_err(), "type mismatch at column 0");
    }

    #[test]
    fn from_rows_preserves_order() {
        let pairs = Pair::from_rows(vec![row(2, "b"), row(1, "a")]).unwrap();
        assert_eq!(pairs.iter().map(|p| p.left).collect::<Vec<_>>(), vec![2, 1]);
    }
}

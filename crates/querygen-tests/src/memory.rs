// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory executor.
//!
//! Records every statement it is asked to run and answers with canned rows,
//! so generated terminal operations can be checked without a database.
//!
//! ```rust,ignore
//! let mut db = MemoryExecutor::new().with_rows(vec![MemoryRow::new().with(1_i64)]);
//! let rows = UserModel::query().fetch(&mut db)?;
//! assert_eq!(db.calls()[0].sql, "SELECT * FROM users");
//! ```

use std::{any::Any, collections::VecDeque};

use querygen_core::{Argument, Executor, Row};
use thiserror::Error;

/// Column value held by a [`MemoryRow`].
pub type Value = Box<dyn Any + Send + Sync>;

/// Failures reported by [`MemoryExecutor`] and [`MemoryRow`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// `query_row` found no canned row.
    #[error("query returned no rows")]
    NoRows,

    /// The row has no value at `index`, or it was already read.
    #[error("column {index} is missing")]
    MissingColumn {
        /// Zero-based column position.
        index: usize
    },

    /// The value at `index` has a different type than requested.
    #[error("column {index} is not a {expected}")]
    TypeMismatch {
        /// Zero-based column position.
        index:    usize,
        /// Requested Rust type.
        expected: &'static str
    }
}

/// One positional row.
#[derive(Debug, Default)]
pub struct MemoryRow {
    values: Vec<Option<Value>>
}

impl MemoryRow {
    /// Empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column value.
    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.values.push(Some(Box::new(value)));
        self
    }
}

impl Row for MemoryRow {
    type Error = MemoryError;

    fn column<T: Any>(&mut self, index: usize) -> Result<T, MemoryError> {
        let value = self
            .values
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(MemoryError::MissingColumn {
                index
            })?;

        value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| MemoryError::TypeMismatch {
                index,
                expected: std::any::type_name::<T>()
            })
    }
}

/// A statement the executor was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Statement text.
    pub sql: String,

    /// `Debug` rendering of each bound argument, in bind order.
    pub args: Vec<String>
}

/// Executor answering from canned data.
#[derive(Debug, Default)]
pub struct MemoryExecutor {
    rows:     VecDeque<MemoryRow>,
    affected: u64,
    calls:    Vec<Call>
}

impl MemoryExecutor {
    /// Executor with no rows that reports zero affected rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows returned by the next `query` or `query_row` calls.
    #[must_use]
    pub fn with_rows(mut self, rows: Vec<MemoryRow>) -> Self {
        self.rows = rows.into();
        self
    }

    /// Affected-row count returned by `execute`.
    #[must_use]
    pub fn with_affected(mut self, affected: u64) -> Self {
        self.affected = affected;
        self
    }

    /// Every statement run so far.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Text of the most recent statement.
    pub fn last_sql(&self) -> Option<&str> {
        self.calls.last().map(|call| call.sql.as_str())
    }

    fn record(&mut self, sql: &str, args: &[&dyn Argument]) {
        self.calls.push(Call {
            sql:  sql.to_string(),
            args: args.iter().map(|arg| format!("{arg:?}")).collect()
        });
    }
}

impl Executor for MemoryExecutor {
    type Error = MemoryError;
    type Row = MemoryRow;

    fn execute(&mut self, sql: &str, args: &[&dyn Argument]) -> Result<u64, MemoryError> {
        self.record(sql, args);
        Ok(self.affected)
    }

    fn query(&mut self, sql: &str, args: &[&dyn Argument]) -> Result<Vec<MemoryRow>, MemoryError> {
        self.record(sql, args);
        Ok(self.rows.drain(..).collect())
    }

    fn query_row(&mut self, sql: &str, args: &[&dyn Argument]) -> Result<MemoryRow, MemoryError> {
        self.record(sql, args);
        self.rows.pop_front().ok_or(MemoryError::NoRows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_taken_once() {
        let mut row = MemoryRow::new().with(7_i64);
        assert_eq!(row.column::<i64>(0), Ok(7));
        assert_eq!(row.column::<i64>(0), Err(MemoryError::MissingColumn { index: 0 }));
    }

    #[test]
    fn wrong_type_is_reported() {
        let mut row = MemoryRow::new().with("text".to_string());
        assert!(matches!(
            row.column::<i64>(0),
            Err(MemoryError::TypeMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn records_arguments_with_debug() {
        let mut db = MemoryExecutor::new().with_affected(2);
        let name = "ann".to_string();
        let affected = db.execute("DELETE FROM users WHERE name = ?", &[&name]).unwrap();
        assert_eq!(affected, 2);
        assert_eq!(db.calls()[0].args, ["\"ann\""]);
    }

    #[test]
    fn query_row_without_rows_fails() {
        let mut db = MemoryExecutor::new();
        assert_eq!(db.query_row("SELECT 1", &[]).unwrap_err(), MemoryError::NoRows);
        assert_eq!(db.last_sql(), Some("SELECT 1"));
    }
}

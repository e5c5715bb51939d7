// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Builder state shared by every generated query builder.

use crate::Argument;

/// Statement kind a builder renders.
///
/// Builders start in [`Mode::Select`]. Setters switch to [`Mode::Update`];
/// ordering and pagination switch back to [`Mode::Select`]; the terminal
/// operations (`fetch`, `first`, `last`, `update`, `delete`) force their own
/// mode before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// `SELECT ... FROM ...`
    #[default]
    Select,

    /// `UPDATE ... SET ...`
    Update,

    /// `DELETE FROM ...`
    Delete
}

/// One active filter on a column.
///
/// A builder keeps at most one condition per column; applying a second
/// filter to the same column replaces the first.
#[derive(Debug)]
pub struct Condition {
    /// Comparison operator rendered between column and placeholder
    /// (`=`, `>`, `LIKE`, ...).
    pub operator: String,

    /// Value bound to the placeholder.
    pub value: Box<dyn Argument>
}

impl Condition {
    /// Create a condition binding `value` with `operator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use querygen_core::Condition;
    ///
    /// let condition = Condition::new(">=", 18_i32);
    /// assert_eq!(condition.operator, ">=");
    /// assert_eq!(condition.value.downcast_ref::<i32>(), Some(&18));
    /// ```
    pub fn new<T: Argument>(operator: impl Into<String>, value: T) -> Self {
        Self {
            operator: operator.into(),
            value:    Box::new(value)
        }
    }
}

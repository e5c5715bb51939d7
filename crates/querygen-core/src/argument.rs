// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type-erased bound arguments.

use std::{any::Any, fmt};

/// A value bound to a statement placeholder.
///
/// Generated builders store filter and setter values as `Box<dyn Argument>`
/// so that any field type can be bound without the generator resolving it.
/// Executors recover the concrete type with [`downcast_ref`].
///
/// Implemented for every `'static + Debug + Send + Sync` type.
///
/// [`downcast_ref`]: trait.Argument.html#method.downcast_ref
pub trait Argument: Any + fmt::Debug + Send + Sync {
    /// View the value as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T> Argument for T
where
    T: Any + fmt::Debug + Send + Sync
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<'a> dyn Argument + 'a {
    /// Downcast to a concrete type.
    ///
    /// # Examples
    ///
    /// ```
    /// use querygen_core::Argument;
    ///
    /// let value: Box<dyn Argument> = Box::new(18_i32);
    /// assert_eq!(value.downcast_ref::<i32>(), Some(&18));
    /// assert_eq!(value.downcast_ref::<i64>(), None);
    /// ```
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Check whether the value is of type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

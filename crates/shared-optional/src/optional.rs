//! # Optional Container
//!
//! [`Optional<T>`] holds either exactly one value or nothing. Absence has a
//! single representation: `None` at the construction boundary, whichever way
//! the caller produced it.
//!
//! INVARIANTS:
//! - A PRESENT container holds exactly one value; an EMPTY one holds none.
//! - The state is fixed at construction. `map` and `filter` build a new
//!   container instead of touching the receiver.
//! - Caller-supplied closures run synchronously, at most once per call, and
//!   never against an EMPTY receiver.

use std::any::type_name;

use tracing::trace;

use crate::errors::OptionalError;

/// An immutable container for a value that may be absent.
///
/// Construct it with [`Optional::of_nullable`] (or [`Optional::of`] /
/// [`Optional::empty`] when the state is known) and chain operations on it
/// without branching on presence at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Optional<T> {
    /// Create an EMPTY container.
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Create a PRESENT container holding `value`.
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Create a container from a value that may be absent.
    ///
    /// `None` yields EMPTY, `Some(v)` yields PRESENT holding `v`. Never fails.
    pub fn of_nullable(value: Option<T>) -> Self {
        Self { value }
    }

    /// Create a container from a doubly-wrapped value.
    ///
    /// Useful for data that distinguishes a missing field (outer `None`) from
    /// an explicit null (inner `None`). Both collapse to EMPTY.
    pub fn of_nested(value: Option<Option<T>>) -> Self {
        Self::of_nullable(value.flatten())
    }

    /// Returns `true` iff the container is PRESENT.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` iff the container is EMPTY.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the held value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::NoValuePresent`] if the container is EMPTY.
    pub fn get(&self) -> Result<&T, OptionalError> {
        match &self.value {
            Some(value) => Ok(value),
            None => {
                trace!(type_name = type_name::<T>(), "get() on empty Optional");
                Err(OptionalError::NoValuePresent)
            }
        }
    }

    /// Take the held value out of the container.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::NoValuePresent`] if the container is EMPTY.
    pub fn into_value(self) -> Result<T, OptionalError> {
        match self.value {
            Some(value) => Ok(value),
            None => {
                trace!(type_name = type_name::<T>(), "into_value() on empty Optional");
                Err(OptionalError::NoValuePresent)
            }
        }
    }

    /// Apply `mapper` to the held value, producing a PRESENT result.
    ///
    /// `mapper` is not called on an EMPTY receiver.
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional::of_nullable(self.value.map(mapper))
    }

    /// Apply a mapper that may itself produce an absent value.
    ///
    /// EMPTY receivers skip `mapper` entirely. A `None` from `mapper`
    /// collapses the result to EMPTY.
    pub fn map_nullable<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional::of_nullable(self.value.and_then(mapper))
    }

    /// Apply a fallible mapper, returning its error unchanged.
    ///
    /// # Errors
    ///
    /// Returns whatever `mapper` returns as `Err`. An EMPTY receiver never
    /// calls `mapper` and therefore never fails.
    pub fn try_map<U, E, F>(self, mapper: F) -> Result<Optional<U>, E>
    where
        F: FnOnce(T) -> Result<Option<U>, E>,
    {
        match self.value {
            Some(value) => mapper(value).map(Optional::of_nullable),
            None => Ok(Optional::empty()),
        }
    }

    /// Keep the held value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self::of_nullable(self.value.filter(predicate))
    }

    /// Return the held value, or `fallback` if EMPTY.
    pub fn get_or(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    /// Return the held value, or the result of `supplier` if EMPTY.
    ///
    /// `supplier` runs exactly once on an EMPTY receiver and never on a
    /// PRESENT one.
    pub fn get_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(supplier)
    }

    /// Return the held value, or fail with the error built by `error_supplier`.
    ///
    /// # Errors
    ///
    /// Returns the caller's error, exactly as `error_supplier` produced it,
    /// when the container is EMPTY.
    pub fn get_or_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self.value {
            Some(value) => Ok(value),
            None => {
                trace!(type_name = type_name::<T>(), "get_or_throw() on empty Optional");
                Err(error_supplier())
            }
        }
    }

    /// Run `consumer` with the held value if PRESENT.
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            consumer(value);
        }
    }

    /// Borrow the container, so chains can run without consuming it.
    pub fn as_ref(&self) -> Optional<&T> {
        Optional::of_nullable(self.value.as_ref())
    }

    /// Convert back into a plain `Option`.
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T: Clone> Optional<&T> {
    /// Clone the borrowed value into an owning container.
    pub fn cloned(self) -> Optional<T> {
        Optional::of_nullable(self.value.cloned())
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

//! Adapters giving foreign monadic types one uniform surface.
//!
//! Every adapter implements [`FunctionalAdapter`] over values wrapped in
//! [`AnyM`]. The adapter keeps the foreign type's own semantics: `ap` on
//! [`TryAdapter`] stops at the first failure, while `ap` on
//! [`ValidationAdapter`] merges both failures.
//!
//! `empty()` returns a failure that carries no diagnosable cause (the
//! [`Failure::sentinel`](crate::control::Failure::sentinel) for `Try`, the
//! default error for `Validation`). Treat it as an opaque "no value" marker.
//!
//! # Examples
//!
//! ```rust
//! use polykind::adapter::{FunctionalAdapter, TryAdapter, ValidationAdapter};
//!
//! let try_adapter = TryAdapter::new();
//! let doubled = try_adapter.map(try_adapter.unit(21), |x| x * 2);
//! assert_eq!(try_adapter.to_iterable(doubled).collect::<Vec<_>>(), vec![42]);
//!
//! let validation_adapter = ValidationAdapter::<Vec<String>>::new();
//! let empty = validation_adapter.unit_iterable(Vec::<i32>::new());
//! assert!(!validation_adapter.is_success(&empty));
//! ```

mod try_adapter;
mod validation_adapter;

pub use try_adapter::TryAdapter;
pub use validation_adapter::ValidationAdapter;

use std::fmt;

use crate::typeclass::{Higher, Witness};

/// A foreign monadic value tagged with its witness.
pub struct AnyM<W: Witness, T> {
    value: Higher<W, T>,
}

impl<W: Witness, T> AnyM<W, T> {
    /// Wraps a foreign value.
    #[inline]
    pub const fn of(value: Higher<W, T>) -> Self {
        Self { value }
    }

    /// Returns the foreign value.
    #[inline]
    pub fn unwrap(self) -> Higher<W, T> {
        self.value
    }

    /// Borrows the foreign value.
    #[inline]
    pub const fn as_inner(&self) -> &Higher<W, T> {
        &self.value
    }

    /// Transforms the foreign value with a function on the concrete type.
    pub fn map_inner<U, F>(self, function: F) -> AnyM<W, U>
    where
        F: FnOnce(Higher<W, T>) -> Higher<W, U>,
    {
        AnyM::of(function(self.value))
    }
}

impl<W: Witness, T> Clone for AnyM<W, T>
where
    Higher<W, T>: Clone,
{
    fn clone(&self) -> Self {
        Self::of(self.value.clone())
    }
}

impl<W: Witness, T> PartialEq for AnyM<W, T>
where
    Higher<W, T>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<W: Witness, T> fmt::Debug for AnyM<W, T>
where
    Higher<W, T>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("AnyM").field(&self.value).finish()
    }
}

/// The operations one foreign monad exposes through [`AnyM`].
pub trait FunctionalAdapter<W: Witness> {
    /// The present value, if any, as an iterator of at most one element.
    fn to_iterable<T>(&self, value: AnyM<W, T>) -> std::option::IntoIter<T>;

    /// Applies a wrapped function using the foreign type's own combination.
    fn ap<T, R, F>(&self, function: AnyM<W, F>, value: AnyM<W, T>) -> AnyM<W, R>
    where
        F: FnOnce(T) -> R;

    /// Keeps the value only if `predicate` holds, as the foreign type defines it.
    fn filter<T, P>(&self, value: AnyM<W, T>, predicate: P) -> AnyM<W, T>
    where
        P: FnMut(&T) -> bool;

    /// The cause-less failure.
    fn empty<T>(&self) -> AnyM<W, T>;

    /// Chains a step producing another wrapped value.
    fn flat_map<T, R, F>(&self, value: AnyM<W, T>, function: F) -> AnyM<W, R>
    where
        F: FnMut(T) -> AnyM<W, R>;

    /// The first element as a success, or [`empty`](Self::empty) when there is none.
    fn unit_iterable<T, I>(&self, values: I) -> AnyM<W, T>
    where
        I: IntoIterator<Item = T>;

    /// A success holding `value`.
    fn unit<T>(&self, value: T) -> AnyM<W, T>;

    /// Maps the present value.
    fn map<T, R, F>(&self, value: AnyM<W, T>, mut function: F) -> AnyM<W, R>
    where
        F: FnMut(T) -> R,
    {
        self.flat_map(value, |element| self.unit(function(element)))
    }

    /// A success for `Some`, otherwise [`empty`](Self::empty).
    fn unit_option<T>(&self, value: Option<T>) -> AnyM<W, T> {
        value.map_or_else(|| self.empty(), |value| self.unit(value))
    }
}

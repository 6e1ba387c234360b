//! `Validation` - a result that accumulates failures instead of stopping at the first.
//!
//! [`Validation::combine`] merges two failures with [`Semigroup::combine`], so
//! independent checks report every problem at once. [`Validation::flat_map`]
//! still short-circuits, because a dependent step cannot run without its input.
//!
//! # Examples
//!
//! ```rust
//! use polykind::control::Validation;
//!
//! let name: Validation<Vec<&str>, &str> = Validation::fail(vec!["name is empty"]);
//! let age: Validation<Vec<&str>, u8> = Validation::fail(vec!["age is negative"]);
//!
//! let person = name.combine(age, |name, age| (name, age));
//! assert_eq!(person, Validation::Failure(vec!["name is empty", "age is negative"]));
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::typeclass::{Semigroup, Witness};

/// Either a valid value or the (accumulated) failure `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E, T> {
    /// The value passed validation.
    Success(T),
    /// Validation failed.
    Failure(E),
}

/// Witness for [`Validation`] with failure type `E`.
pub struct ValidationWitness<E>(Infallible, PhantomData<E>);

impl<E> Witness for ValidationWitness<E> {
    type Of<A> = Validation<E, A>;
}

static_assertions::const_assert_eq!(std::mem::size_of::<ValidationWitness<String>>(), 0);

impl<E, T> Validation<E, T> {
    /// A valid value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// A failed validation.
    #[inline]
    pub const fn fail(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The valid value, if any.
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Maps the valid value.
    pub fn map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Validation::Success(function(value)),
            Self::Failure(error) => Validation::Failure(error),
        }
    }

    /// Maps the failure.
    pub fn map_failure<E2, F>(self, function: F) -> Validation<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(error) => Validation::Failure(function(error)),
        }
    }

    /// Chains a dependent validation; short-circuits on failure.
    pub fn flat_map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Validation::Failure(error),
        }
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure when validation failed.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Iterates over the valid value, if any.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.get().into_iter()
    }
}

impl<E: Semigroup, T> Validation<E, T> {
    /// Combines two independent validations, accumulating both failures.
    pub fn combine<U, V, F>(self, other: Validation<E, U>, function: F) -> Validation<E, V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Success(left), Validation::Success(right)) => Validation::Success(function(left, right)),
            (Self::Failure(left), Validation::Failure(right)) => Validation::Failure(left.combine(right)),
            (Self::Failure(error), Validation::Success(_)) | (Self::Success(_), Validation::Failure(error)) => {
                Validation::Failure(error)
            }
        }
    }
}

impl<E: Default, T> Validation<E, T> {
    /// The first element, or a failure holding `E::default()` when empty.
    pub fn from_iterable<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .next()
            .map_or_else(|| Self::Failure(E::default()), Self::Success)
    }
}

impl<E, T> From<Result<T, E>> for Validation<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, T> IntoIterator for Validation<E, T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Checked<T> = Validation<Vec<String>, T>;

    fn positive(value: i32) -> Checked<i32> {
        if value > 0 {
            Validation::success(value)
        } else {
            Validation::fail(vec![format!("{value} is not positive")])
        }
    }

    #[rstest]
    fn combine_accumulates_in_order() {
        let combined = positive(-1).combine(positive(-2), |a, b| a + b);
        assert_eq!(
            combined,
            Validation::Failure(vec!["-1 is not positive".to_string(), "-2 is not positive".to_string()])
        );
    }

    #[rstest]
    #[case(1, -2, "-2 is not positive")]
    #[case(-1, 2, "-1 is not positive")]
    fn combine_with_single_failure(#[case] left: i32, #[case] right: i32, #[case] message: &str) {
        let combined = positive(left).combine(positive(right), |a, b| a + b);
        assert_eq!(combined, Validation::Failure(vec![message.to_string()]));
    }

    #[rstest]
    fn flat_map_short_circuits() {
        let result = positive(-5).flat_map(|value| positive(value - 1));
        assert_eq!(result, Validation::Failure(vec!["-5 is not positive".to_string()]));
    }

    #[rstest]
    fn from_iterable_empty_is_default_failure() {
        let empty: Checked<i32> = Validation::from_iterable(Vec::new());
        assert_eq!(empty, Validation::Failure(Vec::new()));
    }

    #[rstest]
    fn map_failure_transforms_error() {
        let mapped = positive(0).map_failure(|errors| errors.len());
        assert_eq!(mapped, Validation::Failure(1));
    }
}

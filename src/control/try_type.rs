//! `Try` - a computation that either produced a value or failed with a cause.
//!
//! `Try` short-circuits: once a failure occurs, later steps are skipped and
//! combining two failures keeps the first one.
//!
//! # Examples
//!
//! ```rust
//! use polykind::control::Try;
//!
//! let parsed = Try::of(|| "42".parse::<i32>());
//! assert_eq!(parsed.map(|value| value + 1).into_option(), Some(43));
//!
//! let failed = Try::of(|| "x".parse::<i32>());
//! assert!(failed.is_failure());
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use super::error::NoSuchElementError;

/// The failure payload of a [`Try`].
///
/// A failure normally carries the error that caused it. [`Failure::sentinel`]
/// builds a cause-less placeholder for "empty" values; it carries no
/// diagnosable information and should be tested with
/// [`Failure::is_sentinel`] rather than inspected.
#[derive(Clone)]
pub struct Failure {
    cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl Failure {
    /// Wraps `cause`.
    pub fn new<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            cause: Some(Arc::new(cause)),
        }
    }

    /// The cause-less placeholder failure.
    #[must_use]
    pub const fn sentinel() -> Self {
        Self { cause: None }
    }

    /// Whether this failure is the cause-less placeholder.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.cause.is_none()
    }

    /// The underlying cause, absent for the sentinel.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => formatter.debug_tuple("Failure").field(cause).finish(),
            None => formatter.write_str("Failure(<sentinel>)"),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(formatter, "{cause}"),
            None => formatter.write_str("failure without cause"),
        }
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Two failures are equal when both are sentinels or their causes render the same.
impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        match (&self.cause, &other.cause) {
            (None, None) => true,
            (Some(left), Some(right)) => left.to_string() == right.to_string(),
            _ => false,
        }
    }
}

/// A value or the failure that prevented it.
#[derive(Debug, Clone, PartialEq)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(Failure),
}

crate::witness! {
    /// Witness for [`Try`].
    pub Try => Try
}

static_assertions::const_assert_eq!(std::mem::size_of::<TryWitness>(), 0);

impl<T> Try<T> {
    /// A successful value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// A failure caused by `cause`.
    pub fn failure<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Failure(Failure::new(cause))
    }

    /// Runs a fallible computation, capturing its error as the failure cause.
    pub fn of<E, F>(computation: F) -> Self
    where
        E: Error + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        computation().into()
    }

    /// The first element, or a [`NoSuchElementError`] failure when empty.
    pub fn from_iterable<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().next().map_or_else(
            || Self::failure(NoSuchElementError::new("Try::from_iterable", "empty iterable")),
            Self::Success,
        )
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

    /// The successful value, if any.
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure, if any.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Maps the successful value.
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Chains another `Try`-producing step.
    pub fn flat_map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Keeps the value only if `predicate` holds.
    ///
    /// A rejected value becomes a failure caused by [`NoSuchElementError`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) if predicate(&value) => Self::Success(value),
            Self::Success(_) => Self::failure(NoSuchElementError::new("Try::filter", "predicate rejected value")),
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Combines two results, keeping the first failure encountered.
    pub fn combine<U, V, F>(self, other: Try<U>, function: F) -> Try<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Success(left), Try::Success(right)) => Try::Success(function(left, right)),
            (Self::Failure(failure), _) | (Self::Success(_), Try::Failure(failure)) => Try::Failure(failure),
        }
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] when this is a failure.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    /// The successful value, discarding any failure.
    pub fn into_option(self) -> Option<T> {
        self.into_result().ok()
    }

    /// Iterates over the successful value, if any.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.get().into_iter()
    }
}

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Error + Send + Sync + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::num::ParseIntError;

    fn parse(text: &str) -> Try<i32> {
        Try::of(|| text.parse::<i32>())
    }

    #[rstest]
    fn of_captures_error() {
        let failed = parse("nope");
        let cause = failed.failure_ref().and_then(Failure::cause);
        assert!(cause.is_some_and(|cause| cause.downcast_ref::<ParseIntError>().is_some()));
    }

    #[rstest]
    fn map_and_flat_map_on_success() {
        let result = parse("4").map(|x| x * 2).flat_map(|x| Try::success(x + 1));
        assert_eq!(result, Try::Success(9));
    }

    #[rstest]
    fn map_skips_failure() {
        assert!(parse("x").map(|x| x * 2).is_failure());
    }

    #[rstest]
    fn filter_rejection_is_no_such_element() {
        let filtered = parse("3").filter(|x| *x > 5);
        let cause = filtered.failure_ref().and_then(Failure::cause);
        assert!(cause.is_some_and(|cause| cause.is::<NoSuchElementError>()));
    }

    #[rstest]
    fn combine_keeps_first_failure() {
        let first = parse("a");
        let second = Try::<i32>::failure(NoSuchElementError::new("second", "none"));
        let combined = first.clone().combine(second, |x, y| x + y);
        assert_eq!(combined, first);
    }

    #[rstest]
    fn from_iterable_takes_first() {
        assert_eq!(Try::from_iterable(vec![1, 2]), Try::Success(1));
        assert!(Try::<i32>::from_iterable(Vec::new()).is_failure());
    }

    #[rstest]
    fn sentinel_is_distinguishable() {
        let sentinel = Failure::sentinel();
        assert!(sentinel.is_sentinel());
        assert!(sentinel.cause().is_none());
        assert_ne!(sentinel, Failure::new(NoSuchElementError::new("op", "none")));
        assert_eq!(sentinel.to_string(), "failure without cause");
    }

    #[rstest]
    fn iterates_success_only() {
        assert_eq!(Try::success(5).into_iter().collect::<Vec<_>>(), vec![5]);
        assert_eq!(parse("z").iter().count(), 0);
    }
}

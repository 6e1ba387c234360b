use std::fmt;

use super::{AnyM, FunctionalAdapter};
use crate::control::{Try, TryWitness};
use crate::instances::try_type::{self, TryMonadZero};
use crate::typeclass::{Applicative, Monad, MonadZero, Unit};

/// [`FunctionalAdapter`] for [`Try`]; `ap` keeps the first failure.
///
/// # Examples
///
/// ```rust
/// use polykind::adapter::{FunctionalAdapter, TryAdapter};
/// use polykind::control::Try;
///
/// let adapter = TryAdapter::new();
/// let parsed = adapter.flat_map(adapter.unit("7"), |text| adapter.of(Try::of(|| text.parse::<i32>())));
/// assert_eq!(parsed.unwrap(), Try::success(7));
/// ```
#[derive(Clone)]
pub struct TryAdapter {
    instance: TryMonadZero,
}

impl TryAdapter {
    /// Creates the adapter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instance: try_type::monad_zero(),
        }
    }

    /// Wraps a `Try`.
    #[inline]
    pub const fn of<T>(&self, value: Try<T>) -> AnyM<TryWitness, T> {
        AnyM::of(value)
    }

    /// Whether the wrapped `Try` is a success.
    #[inline]
    pub const fn is_success<T>(&self, value: &AnyM<TryWitness, T>) -> bool {
        value.as_inner().is_success()
    }
}

impl Default for TryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TryAdapter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("TryAdapter").finish_non_exhaustive()
    }
}

impl FunctionalAdapter<TryWitness> for TryAdapter {
    fn to_iterable<T>(&self, value: AnyM<TryWitness, T>) -> std::option::IntoIter<T> {
        value.unwrap().into_option().into_iter()
    }

    fn ap<T, R, F>(&self, function: AnyM<TryWitness, F>, value: AnyM<TryWitness, T>) -> AnyM<TryWitness, R>
    where
        F: FnOnce(T) -> R,
    {
        AnyM::of(self.instance.ap(function.unwrap(), value.unwrap()))
    }

    fn filter<T, P>(&self, value: AnyM<TryWitness, T>, predicate: P) -> AnyM<TryWitness, T>
    where
        P: FnMut(&T) -> bool,
    {
        AnyM::of(self.instance.filter(value.unwrap(), predicate))
    }

    fn empty<T>(&self) -> AnyM<TryWitness, T> {
        tracing::debug!(adapter = "try", "constructing sentinel failure");
        AnyM::of(self.instance.zero())
    }

    fn flat_map<T, R, F>(&self, value: AnyM<TryWitness, T>, mut function: F) -> AnyM<TryWitness, R>
    where
        F: FnMut(T) -> AnyM<TryWitness, R>,
    {
        AnyM::of(self.instance.flat_map(value.unwrap(), |element| function(element).unwrap()))
    }

    fn unit_iterable<T, I>(&self, values: I) -> AnyM<TryWitness, T>
    where
        I: IntoIterator<Item = T>,
    {
        self.unit_option(values.into_iter().next())
    }

    #[inline]
    fn unit<T>(&self, value: T) -> AnyM<TryWitness, T> {
        AnyM::of(self.instance.unit(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Failure, NoSuchElementError};
    use rstest::rstest;

    fn failure(operation: &'static str) -> AnyM<TryWitness, i32> {
        AnyM::of(Try::failure(NoSuchElementError::new(operation, "test")))
    }

    #[rstest]
    fn ap_on_two_failures_keeps_first() {
        let adapter = TryAdapter::new();
        let function: AnyM<TryWitness, fn(i32) -> i32> =
            AnyM::of(Try::failure(NoSuchElementError::new("function", "test")));
        let result = adapter.ap(function, failure("value"));
        assert_eq!(result.unwrap(), Try::failure(NoSuchElementError::new("function", "test")));
    }

    #[rstest]
    fn empty_is_sentinel_failure() {
        let empty = TryAdapter::new().empty::<String>().unwrap();
        assert!(empty.failure_ref().is_some_and(Failure::is_sentinel));
    }

    #[rstest]
    #[case(vec![4, 5], Some(4))]
    #[case(vec![], None)]
    fn unit_iterable_takes_first(#[case] values: Vec<i32>, #[case] expected: Option<i32>) {
        let adapter = TryAdapter::new();
        let wrapped = adapter.unit_iterable(values);
        assert_eq!(adapter.to_iterable(wrapped).next(), expected);
    }

    #[rstest]
    fn filter_is_native() {
        let adapter = TryAdapter::new();
        let kept = adapter.filter(adapter.unit(10), |x| *x > 5);
        let rejected = adapter.filter(adapter.unit(1), |x| *x > 5);
        assert!(adapter.is_success(&kept));
        assert!(!adapter.is_success(&rejected));
    }
}

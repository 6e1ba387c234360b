use std::fmt;

use super::{AnyM, FunctionalAdapter};
use crate::control::{Validation, ValidationWitness};
use crate::instances::validation::{self, ValidationMonad};
use crate::typeclass::{Applicative, Monad, Semigroup, Unit};

/// [`FunctionalAdapter`] for [`Validation`]; `ap` accumulates failures.
///
/// `Validation` has no filter that can invent an error, so
/// [`filter`](FunctionalAdapter::filter) returns its input unchanged.
///
/// # Examples
///
/// ```rust
/// use polykind::adapter::{AnyM, FunctionalAdapter, ValidationAdapter};
/// use polykind::control::{Validation, ValidationWitness};
///
/// let adapter = ValidationAdapter::<Vec<&str>>::new();
/// let function: AnyM<ValidationWitness<Vec<&str>>, fn(i32) -> i32> = adapter.of(Validation::fail(vec!["f"]));
/// let result = adapter.ap(function, adapter.of(Validation::fail(vec!["v"])));
/// assert_eq!(result.unwrap(), Validation::Failure(vec!["f", "v"]));
/// ```
pub struct ValidationAdapter<E> {
    instance: ValidationMonad<E>,
}

impl<E: Semigroup> ValidationAdapter<E> {
    /// Creates the adapter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instance: validation::monad(),
        }
    }
}

impl<E> ValidationAdapter<E> {
    /// Wraps a `Validation`.
    #[inline]
    pub const fn of<T>(&self, value: Validation<E, T>) -> AnyM<ValidationWitness<E>, T> {
        AnyM::of(value)
    }

    /// Whether the wrapped `Validation` is a success.
    #[inline]
    pub const fn is_success<T>(&self, value: &AnyM<ValidationWitness<E>, T>) -> bool {
        value.as_inner().is_success()
    }
}

impl<E: Semigroup> Default for ValidationAdapter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ValidationAdapter<E> {
    fn clone(&self) -> Self {
        Self {
            instance: self.instance.clone(),
        }
    }
}

impl<E> fmt::Debug for ValidationAdapter<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ValidationAdapter")
            .field("failure", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}

impl<E: Semigroup + Default> FunctionalAdapter<ValidationWitness<E>> for ValidationAdapter<E> {
    fn to_iterable<T>(&self, value: AnyM<ValidationWitness<E>, T>) -> std::option::IntoIter<T> {
        value.unwrap().into_iter()
    }

    fn ap<T, R, F>(
        &self,
        function: AnyM<ValidationWitness<E>, F>,
        value: AnyM<ValidationWitness<E>, T>,
    ) -> AnyM<ValidationWitness<E>, R>
    where
        F: FnOnce(T) -> R,
    {
        AnyM::of(self.instance.ap(function.unwrap(), value.unwrap()))
    }

    #[inline]
    fn filter<T, P>(&self, value: AnyM<ValidationWitness<E>, T>, _predicate: P) -> AnyM<ValidationWitness<E>, T>
    where
        P: FnMut(&T) -> bool,
    {
        value
    }

    fn empty<T>(&self) -> AnyM<ValidationWitness<E>, T> {
        tracing::debug!(adapter = "validation", "constructing default failure");
        AnyM::of(Validation::fail(E::default()))
    }

    fn flat_map<T, R, F>(&self, value: AnyM<ValidationWitness<E>, T>, mut function: F) -> AnyM<ValidationWitness<E>, R>
    where
        F: FnMut(T) -> AnyM<ValidationWitness<E>, R>,
    {
        AnyM::of(self.instance.flat_map(value.unwrap(), |element| function(element).unwrap()))
    }

    fn unit_iterable<T, I>(&self, values: I) -> AnyM<ValidationWitness<E>, T>
    where
        I: IntoIterator<Item = T>,
    {
        self.unit_option(values.into_iter().next())
    }

    #[inline]
    fn unit<T>(&self, value: T) -> AnyM<ValidationWitness<E>, T> {
        AnyM::of(self.instance.unit(value))
    }
}

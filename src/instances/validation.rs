//! Instances for [`ValidationWitness`].
//!
//! `ap` accumulates: when both the function and the value failed, the two
//! failures are merged with [`Semigroup::combine`]. `flat_map` short-circuits.
//!
//! # Examples
//!
//! ```rust
//! use polykind::control::Validation;
//! use polykind::instances::validation;
//! use polykind::typeclass::Applicative;
//!
//! let applicative = validation::applicative::<Vec<&str>>();
//! let function: Validation<Vec<&str>, fn(i32) -> i32> = Validation::fail(vec!["no function"]);
//! let result = applicative.ap(function, Validation::fail(vec!["no value"]));
//! assert_eq!(result, Validation::Failure(vec!["no function", "no value"]));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::control::{Validation, ValidationWitness};
use crate::typeclass::general::{
    self, ApRef, BindRef, FoldRef, GeneralApplicative, GeneralFoldable, GeneralFunctor, GeneralMonad,
    GeneralTraverseByTraverse, GeneralUnit, MapRef, TraverseRef, UnitRef,
};
use crate::typeclass::{Applicative, Higher, Monoid, Semigroup, Witness};

/// Raw operations of [`Validation`] with failure type `E`.
pub struct ValidationOps<E> {
    failure: PhantomData<fn() -> E>,
}

impl<E> ValidationOps<E> {
    /// Creates the operations.
    #[must_use]
    pub const fn new() -> Self {
        Self { failure: PhantomData }
    }
}

impl<E> Clone for ValidationOps<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ValidationOps<E> {}

impl<E> Default for ValidationOps<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ValidationOps<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ValidationOps")
            .field("failure", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E> MapRef<ValidationWitness<E>> for ValidationOps<E> {
    #[inline]
    fn map<A, B, F>(&self, value: Higher<ValidationWitness<E>, A>, function: F) -> Higher<ValidationWitness<E>, B>
    where
        F: FnMut(A) -> B,
    {
        value.map(function)
    }
}

impl<E> UnitRef<ValidationWitness<E>> for ValidationOps<E> {
    #[inline]
    fn unit<A>(&self, value: A) -> Higher<ValidationWitness<E>, A> {
        Validation::success(value)
    }
}

impl<E: Semigroup> ApRef<ValidationWitness<E>> for ValidationOps<E> {
    fn ap<A, B, F>(
        &self,
        function: Higher<ValidationWitness<E>, F>,
        value: Higher<ValidationWitness<E>, A>,
    ) -> Higher<ValidationWitness<E>, B>
    where
        F: FnOnce(A) -> B,
    {
        function.combine(value, |function, value| function(value))
    }
}

impl<E> BindRef<ValidationWitness<E>> for ValidationOps<E> {
    #[inline]
    fn bind<A, B, F>(&self, value: Higher<ValidationWitness<E>, A>, function: F) -> Higher<ValidationWitness<E>, B>
    where
        F: FnMut(A) -> Higher<ValidationWitness<E>, B>,
    {
        value.flat_map(function)
    }
}

impl<E> FoldRef<ValidationWitness<E>> for ValidationOps<E> {
    fn fold<T: Clone>(&self, value: Higher<ValidationWitness<E>, T>, monoid: &Monoid<T>) -> T {
        monoid.reduce(value)
    }
}

impl<E> TraverseRef<ValidationWitness<E>> for ValidationOps<E> {
    fn traverse<G, A, B, AG, F>(
        &self,
        applicative: &AG,
        value: Higher<ValidationWitness<E>, A>,
        mut function: F,
    ) -> Higher<G, Higher<ValidationWitness<E>, B>>
    where
        G: Witness,
        AG: Applicative<G>,
        F: FnMut(A) -> Higher<G, B>,
    {
        match value {
            Validation::Success(value) => applicative.map(function(value), Validation::Success),
            Validation::Failure(error) => applicative.unit(Validation::Failure(error)),
        }
    }
}

/// Functor over `Validation<E, _>`.
pub type ValidationFunctor<E> = GeneralFunctor<ValidationWitness<E>, ValidationOps<E>>;
/// Unit for `Validation<E, _>`.
pub type ValidationUnit<E> = GeneralUnit<ValidationWitness<E>, ValidationOps<E>>;
/// Accumulating applicative over `Validation<E, _>`.
pub type ValidationApplicative<E> =
    GeneralApplicative<ValidationWitness<E>, ValidationFunctor<E>, ValidationUnit<E>, ValidationOps<E>>;
/// Monad over `Validation<E, _>`.
pub type ValidationMonad<E> = GeneralMonad<ValidationWitness<E>, ValidationApplicative<E>, ValidationOps<E>>;
/// Traverse over `Validation<E, _>`.
pub type ValidationTraverse<E> =
    GeneralTraverseByTraverse<ValidationWitness<E>, ValidationApplicative<E>, ValidationOps<E>>;
/// Foldable over `Validation<E, _>`.
pub type ValidationFoldable<E> = GeneralFoldable<ValidationWitness<E>, ValidationOps<E>, ValidationOps<E>>;

/// The functor.
pub fn functor<E>() -> ValidationFunctor<E> {
    general::functor(ValidationOps::new())
}

/// The unit.
pub fn unit<E>() -> ValidationUnit<E> {
    general::unit(ValidationOps::new())
}

/// The applicative; failures accumulate.
pub fn applicative<E: Semigroup>() -> ValidationApplicative<E> {
    general::applicative(functor(), unit(), ValidationOps::new())
}

/// The monad.
pub fn monad<E: Semigroup>() -> ValidationMonad<E> {
    general::monad(applicative(), ValidationOps::new())
}

/// The traverse.
pub fn traverse<E: Semigroup>() -> ValidationTraverse<E> {
    general::traverse_by_traverse(applicative(), ValidationOps::new())
}

/// The foldable.
pub fn foldable<E>() -> ValidationFoldable<E> {
    general::foldable(ValidationOps::new(), ValidationOps::new())
}

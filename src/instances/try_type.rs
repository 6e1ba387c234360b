//! Instances for [`TryWitness`].
//!
//! `ap` short-circuits on the first failure. The zero is the sentinel failure
//! ([`Failure::sentinel`]), and `filter` uses [`Try::filter`], so a rejected
//! value carries a `NoSuchElementError` cause instead of the sentinel.

use crate::control::{Failure, Try, TryWitness};
use crate::typeclass::general::{
    self, ApRef, BindRef, FilterRef, FilteringMonadZero, FoldRef, GeneralApplicative, GeneralFoldable,
    GeneralFunctor, GeneralMonad, GeneralTraverseByTraverse, GeneralUnit, MapRef, TraverseRef, UnitRef, ZeroRef,
};
use crate::typeclass::{Applicative, Higher, Monoid, Witness};

/// Raw operations of [`Try`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TryOps;

impl MapRef<TryWitness> for TryOps {
    #[inline]
    fn map<A, B, F>(&self, value: Higher<TryWitness, A>, function: F) -> Higher<TryWitness, B>
    where
        F: FnMut(A) -> B,
    {
        value.map(function)
    }
}

impl UnitRef<TryWitness> for TryOps {
    #[inline]
    fn unit<A>(&self, value: A) -> Higher<TryWitness, A> {
        Try::success(value)
    }
}

impl ApRef<TryWitness> for TryOps {
    fn ap<A, B, F>(&self, function: Higher<TryWitness, F>, value: Higher<TryWitness, A>) -> Higher<TryWitness, B>
    where
        F: FnOnce(A) -> B,
    {
        function.combine(value, |function, value| function(value))
    }
}

impl BindRef<TryWitness> for TryOps {
    #[inline]
    fn bind<A, B, F>(&self, value: Higher<TryWitness, A>, function: F) -> Higher<TryWitness, B>
    where
        F: FnMut(A) -> Higher<TryWitness, B>,
    {
        value.flat_map(function)
    }
}

impl ZeroRef<TryWitness> for TryOps {
    #[inline]
    fn zero<A>(&self) -> Higher<TryWitness, A> {
        Try::Failure(Failure::sentinel())
    }
}

impl FilterRef<TryWitness> for TryOps {
    #[inline]
    fn filter<A, P>(&self, value: Higher<TryWitness, A>, predicate: P) -> Higher<TryWitness, A>
    where
        P: FnMut(&A) -> bool,
    {
        value.filter(predicate)
    }
}

impl FoldRef<TryWitness> for TryOps {
    fn fold<T: Clone>(&self, value: Higher<TryWitness, T>, monoid: &Monoid<T>) -> T {
        monoid.reduce(value)
    }
}

impl TraverseRef<TryWitness> for TryOps {
    fn traverse<G, A, B, AG, F>(
        &self,
        applicative: &AG,
        value: Higher<TryWitness, A>,
        mut function: F,
    ) -> Higher<G, Higher<TryWitness, B>>
    where
        G: Witness,
        AG: Applicative<G>,
        F: FnMut(A) -> Higher<G, B>,
    {
        match value {
            Try::Success(value) => applicative.map(function(value), Try::Success),
            Try::Failure(failure) => applicative.unit(Try::Failure(failure)),
        }
    }
}

/// Functor over `Try`.
pub type TryFunctor = GeneralFunctor<TryWitness, TryOps>;
/// Unit for `Try`.
pub type TryUnit = GeneralUnit<TryWitness, TryOps>;
/// Short-circuiting applicative over `Try`.
pub type TryApplicative = GeneralApplicative<TryWitness, TryFunctor, TryUnit, TryOps>;
/// Monad over `Try`.
pub type TryMonad = GeneralMonad<TryWitness, TryApplicative, TryOps>;
/// Monad-zero over `Try`.
pub type TryMonadZero = FilteringMonadZero<TryWitness, TryMonad, TryOps, TryOps>;
/// Traverse over `Try`.
pub type TryTraverse = GeneralTraverseByTraverse<TryWitness, TryApplicative, TryOps>;
/// Foldable over `Try`.
pub type TryFoldable = GeneralFoldable<TryWitness, TryOps, TryOps>;

/// The functor.
pub fn functor() -> TryFunctor {
    general::functor(TryOps)
}

/// The unit.
pub fn unit() -> TryUnit {
    general::unit(TryOps)
}

/// The applicative; the first failure wins.
pub fn applicative() -> TryApplicative {
    general::applicative(functor(), unit(), TryOps)
}

/// The monad.
pub fn monad() -> TryMonad {
    general::monad(applicative(), TryOps)
}

/// The monad-zero; the sentinel failure is zero.
pub fn monad_zero() -> TryMonadZero {
    general::monad_zero_with_filter(monad(), TryOps, TryOps)
}

/// The traverse.
pub fn traverse() -> TryTraverse {
    general::traverse_by_traverse(applicative(), TryOps)
}

/// The foldable.
pub fn foldable() -> TryFoldable {
    general::foldable(TryOps, TryOps)
}

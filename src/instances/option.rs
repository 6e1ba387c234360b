//! Instances for [`OptionWitness`].
//!
//! `filter` is left to the `flat_map` derivation and `traverse` is built from a
//! direct per-element traversal.

use crate::typeclass::general::{
    self, ApRef, BindRef, FoldRef, GeneralApplicative, GeneralFoldable, GeneralFunctor, GeneralMonad,
    GeneralMonadPlus, GeneralMonadZero, GeneralTraverseByTraverse, GeneralUnit, MapRef, TraverseRef, UnitRef,
    ZeroRef,
};
use crate::typeclass::{Applicative, Higher, Monoid, OptionWitness, Witness};

/// Raw operations of `Option`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionOps;

impl MapRef<OptionWitness> for OptionOps {
    #[inline]
    fn map<A, B, F>(&self, value: Higher<OptionWitness, A>, function: F) -> Higher<OptionWitness, B>
    where
        F: FnMut(A) -> B,
    {
        value.map(function)
    }
}

impl UnitRef<OptionWitness> for OptionOps {
    #[inline]
    fn unit<A>(&self, value: A) -> Higher<OptionWitness, A> {
        Some(value)
    }
}

impl ApRef<OptionWitness> for OptionOps {
    fn ap<A, B, F>(&self, function: Higher<OptionWitness, F>, value: Higher<OptionWitness, A>) -> Higher<OptionWitness, B>
    where
        F: FnOnce(A) -> B,
    {
        function.zip(value).map(|(function, value)| function(value))
    }
}

impl BindRef<OptionWitness> for OptionOps {
    #[inline]
    fn bind<A, B, F>(&self, value: Higher<OptionWitness, A>, function: F) -> Higher<OptionWitness, B>
    where
        F: FnMut(A) -> Higher<OptionWitness, B>,
    {
        value.and_then(function)
    }
}

impl ZeroRef<OptionWitness> for OptionOps {
    #[inline]
    fn zero<A>(&self) -> Higher<OptionWitness, A> {
        None
    }
}

impl FoldRef<OptionWitness> for OptionOps {
    fn fold<T: Clone>(&self, value: Higher<OptionWitness, T>, monoid: &Monoid<T>) -> T {
        monoid.reduce(value)
    }
}

impl TraverseRef<OptionWitness> for OptionOps {
    fn traverse<G, A, B, AG, F>(
        &self,
        applicative: &AG,
        value: Higher<OptionWitness, A>,
        mut function: F,
    ) -> Higher<G, Higher<OptionWitness, B>>
    where
        G: Witness,
        AG: Applicative<G>,
        F: FnMut(A) -> Higher<G, B>,
    {
        match value {
            Some(value) => applicative.map(function(value), Some),
            None => applicative.unit(None),
        }
    }
}

/// Functor over `Option`.
pub type OptionFunctor = GeneralFunctor<OptionWitness, OptionOps>;
/// Unit for `Option`.
pub type OptionUnit = GeneralUnit<OptionWitness, OptionOps>;
/// Applicative over `Option`.
pub type OptionApplicative = GeneralApplicative<OptionWitness, OptionFunctor, OptionUnit, OptionOps>;
/// Monad over `Option`.
pub type OptionMonad = GeneralMonad<OptionWitness, OptionApplicative, OptionOps>;
/// Monad-zero over `Option` with the derived filter.
pub type OptionMonadZero = GeneralMonadZero<OptionWitness, OptionMonad, OptionOps>;
/// Monad-plus over `Option<T>`.
pub type OptionMonadPlus<T> = GeneralMonadPlus<OptionWitness, T, OptionMonadZero>;
/// Traverse over `Option`.
pub type OptionTraverse = GeneralTraverseByTraverse<OptionWitness, OptionApplicative, OptionOps>;
/// Foldable over `Option`.
pub type OptionFoldable = GeneralFoldable<OptionWitness, OptionOps, OptionOps>;

/// The functor.
pub fn functor() -> OptionFunctor {
    general::functor(OptionOps)
}

/// The unit.
pub fn unit() -> OptionUnit {
    general::unit(OptionOps)
}

/// The applicative; absent if either side is absent.
pub fn applicative() -> OptionApplicative {
    general::applicative(functor(), unit(), OptionOps)
}

/// The monad.
pub fn monad() -> OptionMonad {
    general::monad(applicative(), OptionOps)
}

/// The monad-zero; `None` is zero.
pub fn monad_zero() -> OptionMonadZero {
    general::monad_zero(monad(), OptionOps)
}

/// The monad-plus keeping the first present value.
pub fn monad_plus<T: 'static>() -> OptionMonadPlus<T> {
    monad_plus_with(Monoid::first_present())
}

/// The monad-plus combining options with `monoid`.
pub fn monad_plus_with<T>(monoid: Monoid<Option<T>>) -> OptionMonadPlus<T> {
    general::monad_plus(monad_zero(), monoid)
}

/// The traverse.
pub fn traverse() -> OptionTraverse {
    general::traverse_by_traverse(applicative(), OptionOps)
}

/// The foldable.
pub fn foldable() -> OptionFoldable {
    general::foldable(OptionOps, OptionOps)
}

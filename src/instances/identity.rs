//! Instances for [`IdentityWitness`].

use crate::typeclass::general::{
    self, ApRef, BindRef, ExtractRef, FoldRef, GeneralApplicative, GeneralComonad, GeneralFoldable, GeneralFunctor,
    GeneralMonad, GeneralTraverseByTraverse, GeneralUnit, MapRef, TraverseRef, UnitRef,
};
use crate::typeclass::{Applicative, Higher, Identity, IdentityWitness, Monoid, Witness};

/// Raw operations of [`Identity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityOps;

impl MapRef<IdentityWitness> for IdentityOps {
    #[inline]
    fn map<A, B, F>(&self, value: Higher<IdentityWitness, A>, function: F) -> Higher<IdentityWitness, B>
    where
        F: FnMut(A) -> B,
    {
        value.map(function)
    }
}

impl UnitRef<IdentityWitness> for IdentityOps {
    #[inline]
    fn unit<A>(&self, value: A) -> Higher<IdentityWitness, A> {
        Identity::new(value)
    }
}

impl ApRef<IdentityWitness> for IdentityOps {
    #[inline]
    fn ap<A, B, F>(
        &self,
        function: Higher<IdentityWitness, F>,
        value: Higher<IdentityWitness, A>,
    ) -> Higher<IdentityWitness, B>
    where
        F: FnOnce(A) -> B,
    {
        value.map(function.into_inner())
    }
}

impl BindRef<IdentityWitness> for IdentityOps {
    #[inline]
    fn bind<A, B, F>(&self, value: Higher<IdentityWitness, A>, function: F) -> Higher<IdentityWitness, B>
    where
        F: FnMut(A) -> Higher<IdentityWitness, B>,
    {
        value.flat_map(function)
    }
}

impl ExtractRef<IdentityWitness> for IdentityOps {
    #[inline]
    fn extract<A>(&self, value: Higher<IdentityWitness, A>) -> A {
        value.into_inner()
    }
}

impl FoldRef<IdentityWitness> for IdentityOps {
    fn fold<T: Clone>(&self, value: Higher<IdentityWitness, T>, monoid: &Monoid<T>) -> T {
        monoid.reduce(value)
    }
}

impl TraverseRef<IdentityWitness> for IdentityOps {
    fn traverse<G, A, B, AG, F>(
        &self,
        applicative: &AG,
        value: Higher<IdentityWitness, A>,
        mut function: F,
    ) -> Higher<G, Higher<IdentityWitness, B>>
    where
        G: Witness,
        AG: Applicative<G>,
        F: FnMut(A) -> Higher<G, B>,
    {
        applicative.map(function(value.into_inner()), Identity::new)
    }
}

/// Functor over `Identity`.
pub type IdentityFunctor = GeneralFunctor<IdentityWitness, IdentityOps>;
/// Unit for `Identity`.
pub type IdentityUnit = GeneralUnit<IdentityWitness, IdentityOps>;
/// Applicative over `Identity`.
pub type IdentityApplicative = GeneralApplicative<IdentityWitness, IdentityFunctor, IdentityUnit, IdentityOps>;
/// Monad over `Identity`.
pub type IdentityMonad = GeneralMonad<IdentityWitness, IdentityApplicative, IdentityOps>;
/// Comonad over `Identity`.
pub type IdentityComonad = GeneralComonad<IdentityWitness, IdentityFunctor, IdentityUnit, IdentityOps>;
/// Traverse over `Identity`.
pub type IdentityTraverse = GeneralTraverseByTraverse<IdentityWitness, IdentityApplicative, IdentityOps>;
/// Foldable over `Identity`.
pub type IdentityFoldable = GeneralFoldable<IdentityWitness, IdentityOps, IdentityOps>;

/// The functor.
pub fn functor() -> IdentityFunctor {
    general::functor(IdentityOps)
}

/// The unit.
pub fn unit() -> IdentityUnit {
    general::unit(IdentityOps)
}

/// The applicative.
pub fn applicative() -> IdentityApplicative {
    general::applicative(functor(), unit(), IdentityOps)
}

/// The monad.
pub fn monad() -> IdentityMonad {
    general::monad(applicative(), IdentityOps)
}

/// The comonad; `extract` is always total here.
pub fn comonad() -> IdentityComonad {
    general::comonad(functor(), unit(), IdentityOps)
}

/// The traverse.
pub fn traverse() -> IdentityTraverse {
    general::traverse_by_traverse(applicative(), IdentityOps)
}

/// The foldable.
pub fn foldable() -> IdentityFoldable {
    general::foldable(IdentityOps, IdentityOps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::option;
    use crate::typeclass::{Comonad, Foldable, Monad, Traverse, Unit};
    use rstest::rstest;

    #[rstest]
    fn ap_applies_wrapped_function() {
        let applicative = applicative();
        let result = applicative.ap(applicative.unit(|x: i32| x * 7), Identity::new(6));
        assert_eq!(result, Identity::new(42));
    }

    #[rstest]
    fn flat_map_unwraps_one_layer() {
        assert_eq!(monad().flat_map(Identity::new(2), |x| Identity::new(x + 1)), Identity::new(3));
    }

    #[rstest]
    fn coflat_map_sees_whole_context() {
        let comonad = comonad();
        let described = comonad.coflat_map(Identity::new(5), |context| context.into_inner() * 2);
        assert_eq!(comonad.extract(described), 10);
    }

    #[rstest]
    #[case(Some(3), Some(Identity::new(3)))]
    #[case(None, None)]
    fn sequence_over_option(#[case] inner: Option<i32>, #[case] expected: Option<Identity<i32>>) {
        assert_eq!(traverse().sequence_a(&option::applicative(), Identity::new(inner)), expected);
    }

    #[rstest]
    fn fold_combines_with_identity_element() {
        assert_eq!(foldable().fold_left_with(Identity::new(4), 1, |a, b| a * b), 4);
    }
}

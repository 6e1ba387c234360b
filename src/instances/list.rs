//! Instances for [`ListWitness`], represented by `Vec`.
//!
//! `ap` zips: the n-th function is applied to the n-th value and the result is
//! as long as the shorter input. `filter` uses `Vec`'s own iterator filtering
//! instead of the `flat_map` derivation.
//!
//! # Examples
//!
//! ```rust
//! use polykind::instances::{list, option};
//! use polykind::typeclass::{MonadPlus, MonadZero, Traverse};
//!
//! assert_eq!(list::monad_zero().filter(vec![1, 2, 3, 4], |x| x % 2 == 1), vec![1, 3]);
//! assert_eq!(list::monad_plus::<i32>().plus(vec![1], vec![2]), vec![1, 2]);
//!
//! let sequenced = list::traverse().traverse_a(&option::applicative(), vec![1, 2, 3], |x| Some(x * 2));
//! assert_eq!(sequenced, Some(vec![2, 4, 6]));
//! ```

use crate::typeclass::general::{
    self, ApRef, BindRef, FilterRef, FilteringMonadZero, FoldRef, GeneralApplicative, GeneralFoldable,
    GeneralFunctor, GeneralMonad, GeneralMonadPlus, GeneralTraverse, GeneralUnit, MapRef, SequenceRef, UnitRef,
    ZeroRef,
};
use crate::typeclass::{Applicative, Higher, ListWitness, Monoid, Witness};

/// Raw operations of `Vec`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOps;

/// Right-to-left monoidal fold of a `Vec`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFoldRight;

/// Left-to-right monoidal fold of a `Vec`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFoldLeft;

impl MapRef<ListWitness> for ListOps {
    fn map<A, B, F>(&self, value: Higher<ListWitness, A>, function: F) -> Higher<ListWitness, B>
    where
        F: FnMut(A) -> B,
    {
        value.into_iter().map(function).collect()
    }
}

impl UnitRef<ListWitness> for ListOps {
    #[inline]
    fn unit<A>(&self, value: A) -> Higher<ListWitness, A> {
        vec![value]
    }
}

impl ApRef<ListWitness> for ListOps {
    fn ap<A, B, F>(&self, function: Higher<ListWitness, F>, value: Higher<ListWitness, A>) -> Higher<ListWitness, B>
    where
        F: FnOnce(A) -> B,
    {
        function
            .into_iter()
            .zip(value)
            .map(|(function, element)| function(element))
            .collect()
    }
}

impl BindRef<ListWitness> for ListOps {
    fn bind<A, B, F>(&self, value: Higher<ListWitness, A>, function: F) -> Higher<ListWitness, B>
    where
        F: FnMut(A) -> Higher<ListWitness, B>,
    {
        value.into_iter().flat_map(function).collect()
    }
}

impl ZeroRef<ListWitness> for ListOps {
    #[inline]
    fn zero<A>(&self) -> Higher<ListWitness, A> {
        Vec::new()
    }
}

impl FilterRef<ListWitness> for ListOps {
    fn filter<A, P>(&self, value: Higher<ListWitness, A>, predicate: P) -> Higher<ListWitness, A>
    where
        P: FnMut(&A) -> bool,
    {
        value.into_iter().filter(predicate).collect()
    }
}

impl SequenceRef<ListWitness> for ListOps {
    /// Starts from `unit(vec![])` and appends each element through the target
    /// applicative, so the effects run in list order.
    fn sequence<G, T, AG>(
        &self,
        applicative: &AG,
        value: Higher<ListWitness, Higher<G, T>>,
    ) -> Higher<G, Higher<ListWitness, T>>
    where
        G: Witness,
        AG: Applicative<G>,
    {
        let append = |mut list: Vec<T>, element: T| {
            list.push(element);
            list
        };
        value
            .into_iter()
            .fold(applicative.unit(Vec::new()), |accumulated, element| {
                applicative.ap_bi(applicative.unit(append), accumulated, element)
            })
    }
}

impl FoldRef<ListWitness> for ListFoldRight {
    fn fold<T: Clone>(&self, value: Higher<ListWitness, T>, monoid: &Monoid<T>) -> T {
        monoid.reduce_right(value)
    }
}

impl FoldRef<ListWitness> for ListFoldLeft {
    fn fold<T: Clone>(&self, value: Higher<ListWitness, T>, monoid: &Monoid<T>) -> T {
        monoid.reduce(value)
    }
}

/// Concatenates two effectful lists inside `G`, left before right.
///
/// The merge is associative, so partial results of a sequence can be joined
/// in any grouping as long as their order is kept.
///
/// # Examples
///
/// ```rust
/// use polykind::instances::{list, option};
///
/// let applicative = option::applicative();
/// assert_eq!(list::combine_lists(&applicative, Some(vec![1]), Some(vec![2, 3])), Some(vec![1, 2, 3]));
/// assert_eq!(list::combine_lists(&applicative, None, Some(vec![2])), None);
/// ```
pub fn combine_lists<G, T, AG>(
    applicative: &AG,
    left: Higher<G, Vec<T>>,
    right: Higher<G, Vec<T>>,
) -> Higher<G, Vec<T>>
where
    G: Witness,
    AG: Applicative<G>,
{
    applicative.map2(left, right, |mut left: Vec<T>, mut right: Vec<T>| {
        left.append(&mut right);
        left
    })
}

/// Functor over `Vec`.
pub type ListFunctor = GeneralFunctor<ListWitness, ListOps>;
/// Unit for `Vec`.
pub type ListUnit = GeneralUnit<ListWitness, ListOps>;
/// Zipping applicative over `Vec`.
pub type ListApplicative = GeneralApplicative<ListWitness, ListFunctor, ListUnit, ListOps>;
/// Monad over `Vec`.
pub type ListMonad = GeneralMonad<ListWitness, ListApplicative, ListOps>;
/// Monad-zero over `Vec` with native filtering.
pub type ListMonadZero = FilteringMonadZero<ListWitness, ListMonad, ListOps, ListOps>;
/// Monad-plus over `Vec<T>`.
pub type ListMonadPlus<T> = GeneralMonadPlus<ListWitness, T, ListMonadZero>;
/// Traverse over `Vec`.
pub type ListTraverse = GeneralTraverse<ListWitness, ListApplicative, ListOps>;
/// Foldable over `Vec`.
pub type ListFoldable = GeneralFoldable<ListWitness, ListFoldRight, ListFoldLeft>;

/// The functor.
pub fn functor() -> ListFunctor {
    general::functor(ListOps)
}

/// The unit.
pub fn unit() -> ListUnit {
    general::unit(ListOps)
}

/// The applicative, with zip semantics for `ap`.
pub fn zipping_applicative() -> ListApplicative {
    general::applicative(functor(), unit(), ListOps)
}

/// The monad.
pub fn monad() -> ListMonad {
    general::monad(zipping_applicative(), ListOps)
}

/// The monad-zero; the empty list is zero.
pub fn monad_zero() -> ListMonadZero {
    general::monad_zero_with_filter(monad(), ListOps, ListOps)
}

/// The monad-plus combining lists by concatenation.
pub fn monad_plus<T: 'static>() -> ListMonadPlus<T> {
    monad_plus_with(Monoid::concat())
}

/// The monad-plus combining lists with `monoid`.
pub fn monad_plus_with<T>(monoid: Monoid<Vec<T>>) -> ListMonadPlus<T> {
    general::monad_plus(monad_zero(), monoid)
}

/// The traverse.
pub fn traverse() -> ListTraverse {
    general::traverse(zipping_applicative(), ListOps)
}

/// The foldable.
pub fn foldable() -> ListFoldable {
    general::foldable(ListFoldRight, ListFoldLeft)
}

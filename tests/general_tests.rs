//! Assembling instances for a foreign container from its raw operations.

#![cfg(feature = "instances")]

use polykind::instances::{list, option};
use polykind::typeclass::general::{self, ApRef, BindRef, ExtractRef, FoldRef, MapRef, TraverseRef, UnitRef, ZeroRef};
use polykind::typeclass::{
    Applicative, Comonad, Foldable, Functor, Higher, Monad, MonadPlus, MonadZero, Monoid, Traverse, Unit, Witness,
};
use rstest::rstest;

/// A library-defined optional type that knows nothing about the type classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maybe<A> {
    Just(A),
    Nothing,
}

/// A library-defined single-slot box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<A>(A);

polykind::witness! {
    /// Witness for `Maybe`.
    pub Maybe => Maybe
}

polykind::witness! {
    /// Witness for `Slot`.
    pub Slot => Slot
}

#[derive(Debug, Clone, Copy)]
struct MaybeOps;

impl MapRef<MaybeWitness> for MaybeOps {
    fn map<A, B, F>(&self, value: Maybe<A>, mut function: F) -> Maybe<B>
    where
        F: FnMut(A) -> B,
    {
        match value {
            Maybe::Just(inner) => Maybe::Just(function(inner)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl UnitRef<MaybeWitness> for MaybeOps {
    fn unit<A>(&self, value: A) -> Maybe<A> {
        Maybe::Just(value)
    }
}

impl ApRef<MaybeWitness> for MaybeOps {
    fn ap<A, B, F>(&self, function: Maybe<F>, value: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (function, value) {
            (Maybe::Just(function), Maybe::Just(value)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }
}

impl BindRef<MaybeWitness> for MaybeOps {
    fn bind<A, B, F>(&self, value: Maybe<A>, mut function: F) -> Maybe<B>
    where
        F: FnMut(A) -> Maybe<B>,
    {
        match value {
            Maybe::Just(inner) => function(inner),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl ZeroRef<MaybeWitness> for MaybeOps {
    fn zero<A>(&self) -> Maybe<A> {
        Maybe::Nothing
    }
}

impl FoldRef<MaybeWitness> for MaybeOps {
    fn fold<T: Clone>(&self, value: Maybe<T>, monoid: &Monoid<T>) -> T {
        match value {
            Maybe::Just(inner) => monoid.combine(monoid.zero(), inner),
            Maybe::Nothing => monoid.zero(),
        }
    }
}

impl TraverseRef<MaybeWitness> for MaybeOps {
    fn traverse<G, A, B, AG, F>(&self, applicative: &AG, value: Maybe<A>, mut function: F) -> Higher<G, Maybe<B>>
    where
        G: Witness,
        AG: Applicative<G>,
        F: FnMut(A) -> Higher<G, B>,
    {
        match value {
            Maybe::Just(inner) => applicative.map(function(inner), Maybe::Just),
            Maybe::Nothing => applicative.unit(Maybe::Nothing),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SlotOps;

impl MapRef<SlotWitness> for SlotOps {
    fn map<A, B, F>(&self, value: Slot<A>, mut function: F) -> Slot<B>
    where
        F: FnMut(A) -> B,
    {
        Slot(function(value.0))
    }
}

impl UnitRef<SlotWitness> for SlotOps {
    fn unit<A>(&self, value: A) -> Slot<A> {
        Slot(value)
    }
}

impl ExtractRef<SlotWitness> for SlotOps {
    fn extract<A>(&self, value: Slot<A>) -> A {
        value.0
    }
}

fn maybe_applicative() -> impl Applicative<MaybeWitness> + Clone {
    general::applicative::<MaybeWitness, _, _, _>(general::functor(MaybeOps), general::unit(MaybeOps), MaybeOps)
}

fn maybe_monad() -> impl Monad<MaybeWitness> + Clone {
    general::monad::<MaybeWitness, _, _>(maybe_applicative(), MaybeOps)
}

fn maybe_monad_zero() -> impl MonadZero<MaybeWitness> + Clone {
    general::monad_zero::<MaybeWitness, _, _>(maybe_monad(), MaybeOps)
}

fn first_just<T: 'static>() -> Monoid<Maybe<T>> {
    Monoid::of(Maybe::Nothing, |left, right| match left {
        Maybe::Nothing => right,
        just => just,
    })
}

/// Written once against the type classes; works for any witness.
fn pair_up<W: Witness, M: Monad<W>>(monad: &M, left: Higher<W, i32>, right: Higher<W, i32>) -> Higher<W, (i32, i32)>
where
    Higher<W, i32>: Clone,
{
    monad.flat_map::<i32, (i32, i32), _>(left, |x| monad.map::<i32, (i32, i32), _>(right.clone(), move |y| (x, y)))
}

// =============================================================================
// Functor / Applicative / Monad
// =============================================================================

#[rstest]
fn functor_maps_foreign_values() {
    let functor = general::functor::<MaybeWitness, _>(MaybeOps);
    assert_eq!(functor.map(Maybe::Just(20), |x| x + 1), Maybe::Just(21));
    assert_eq!(functor.void(Maybe::Just("x")), Maybe::Just(()));
    assert_eq!(functor.map(Maybe::<i32>::Nothing, |x| x + 1), Maybe::Nothing);
}

#[rstest]
fn applicative_derives_two_argument_forms() {
    let applicative = maybe_applicative();
    let multiply = applicative.unit(|x: i32, y: i32| x * y);
    assert_eq!(applicative.ap_bi(multiply, Maybe::Just(6), Maybe::Just(7)), Maybe::Just(42));
    assert_eq!(applicative.map2(Maybe::Just(1), Maybe::<i32>::Nothing, |x, y| x + y), Maybe::Nothing);
}

#[rstest]
fn monad_sequences_and_flattens() {
    let monad = maybe_monad();
    let half = |x: i32| if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing };
    assert_eq!(monad.flat_map(Maybe::Just(8), half), Maybe::Just(4));
    assert_eq!(monad.flat_map(Maybe::Just(3), half), Maybe::Nothing);
    assert_eq!(monad.flatten(Maybe::Just(Maybe::Just(1))), Maybe::Just(1));
    assert_eq!(monad.then(Maybe::Just('a'), Maybe::Just(2)), Maybe::Just(2));
}

#[rstest]
fn generic_code_runs_on_every_built_instance() {
    assert_eq!(pair_up::<MaybeWitness, _>(&maybe_monad(), Maybe::Just(1), Maybe::Just(2)), Maybe::Just((1, 2)));
    assert_eq!(pair_up::<polykind::typeclass::OptionWitness, _>(&option::monad(), Some(1), None), None);
    assert_eq!(pair_up::<polykind::typeclass::ListWitness, _>(&list::monad(), vec![1, 2], vec![3]), vec![(1, 3), (2, 3)]);
}

// =============================================================================
// MonadZero / MonadPlus
// =============================================================================

#[rstest]
#[case(Maybe::Just(4), Maybe::Just(4))]
#[case(Maybe::Just(3), Maybe::Nothing)]
#[case(Maybe::Nothing, Maybe::Nothing)]
fn derived_filter_keeps_even_values(#[case] value: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(maybe_monad_zero().filter(value, |x| x % 2 == 0), expected);
}

#[rstest]
fn zero_and_unite_are_typed() {
    let monad_zero = maybe_monad_zero();
    assert_eq!(monad_zero.zero::<String>(), Maybe::Nothing);
    assert_eq!(monad_zero.unite(Maybe::Just(Some(5))), Maybe::Just(5));
    assert_eq!(monad_zero.unite(Maybe::Just(None::<i32>)), Maybe::Nothing);
}

#[rstest]
fn monad_plus_combines_with_supplied_monoid() {
    let plus = general::monad_plus::<MaybeWitness, i32, _>(maybe_monad_zero(), first_just());
    assert_eq!(plus.plus(Maybe::Nothing, Maybe::Just(10)), Maybe::Just(10));
    assert_eq!(plus.plus(Maybe::Just(5), Maybe::Just(7)), Maybe::Just(5));
    assert_eq!(plus.sum(vec![Maybe::Nothing, Maybe::Just(2), Maybe::Just(3)]), Maybe::Just(2));
    assert_eq!(plus.filter(Maybe::Just(1), |x| *x > 1), Maybe::Nothing);
}

#[rstest]
fn monad_plus_maps_through_its_monad_zero() {
    let plus = general::monad_plus::<MaybeWitness, i32, _>(maybe_monad_zero(), first_just());
    assert_eq!(plus.map(Maybe::Just(4), |x| x * 10), Maybe::Just(40));
    assert_eq!(plus.map(Maybe::<i32>::Nothing, |x| x * 10), Maybe::Nothing);
    assert_eq!(plus.flat_map(plus.unit(3), |x| Maybe::Just(x + 1)), Maybe::Just(4));
}

#[rstest]
fn list_monad_plus_concatenates_by_default() {
    let plus = list::monad_plus::<i32>();
    assert_eq!(plus.plus(plus.zero(), vec![10]), vec![10]);
    assert_eq!(plus.plus(vec![1, 2], vec![3]), vec![1, 2, 3]);
}

#[rstest]
fn list_monad_plus_with_first_wins_monoid() {
    let plus = list::monad_plus_with(Monoid::first_non_empty());
    assert_eq!(plus.plus(vec![5], vec![7]), vec![5]);
    assert_eq!(plus.plus(Vec::new(), vec![7]), vec![7]);
}

// =============================================================================
// Traverse / Foldable / Comonad
// =============================================================================

#[rstest]
fn traverse_by_traverse_threads_option_effect() {
    let traverse = general::traverse_by_traverse::<MaybeWitness, _, _>(maybe_applicative(), MaybeOps);
    let applicative = option::applicative();
    assert_eq!(traverse.traverse_a(&applicative, Maybe::Just(3), |x| Some(x * 2)), Some(Maybe::Just(6)));
    assert_eq!(traverse.traverse_a(&applicative, Maybe::Nothing, |x: i32| Some(x)), Some(Maybe::Nothing));
    assert_eq!(traverse.sequence_a(&applicative, Maybe::Just(None::<i32>)), None);
}

#[rstest]
fn traverse_by_traverse_into_list_effect() {
    let traverse = general::traverse_by_traverse::<MaybeWitness, _, _>(maybe_applicative(), MaybeOps);
    let result = traverse.traverse_a(&list::zipping_applicative(), Maybe::Just(2), |x| vec![x, x + 1]);
    assert_eq!(result, vec![Maybe::Just(2), Maybe::Just(3)]);
}

#[rstest]
fn foldable_uses_one_fold_for_both_directions() {
    let foldable = general::foldable::<MaybeWitness, _, _>(MaybeOps, MaybeOps);
    let sum = Monoid::<i32>::sum();
    assert_eq!(foldable.fold_left(Maybe::Just(3), &sum), 3);
    assert_eq!(foldable.fold_right(Maybe::Just(3), &sum), 3);
    assert_eq!(foldable.fold_left(Maybe::Nothing, &sum), 0);
}

#[rstest]
fn comonad_extracts_from_foreign_box() {
    let comonad = general::comonad::<SlotWitness, _, _, _>(general::functor(SlotOps), general::unit(SlotOps), SlotOps);
    assert_eq!(comonad.extract(comonad.unit(7)), 7);
    assert_eq!(comonad.extract(comonad.coflat_map(Slot(2), |slot| slot.0 * 10)), 20);
}

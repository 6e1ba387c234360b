//! Unit tests for Either3 observation, conversion and sequencing.

#![cfg(feature = "control")]

use polykind::control::{Either, Either3, Lazy, NoSuchElementError, Try, Validation};
use polykind::typeclass::Monoid;
use rstest::rstest;
use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

type Outcome = Either3<String, u16, i32>;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Laziness and memoization
// =============================================================================

#[rstest]
fn chain_runs_once_across_many_observations() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let value = Outcome::right(1).map(move |x| {
        counter.set(counter.get() + 1);
        x * 10
    });

    assert!(value.is_right());
    assert!(!value.is_left1());
    assert_eq!(value.to_string(), "Either3.right[10]");
    assert_eq!(value, Either3::right(10));
    assert_eq!(hash_of(&value), hash_of(&Outcome::right(10)));
    assert_eq!(runs.get(), 1);
}

#[rstest]
fn later_defers_construction() {
    let built = Rc::new(Cell::new(false));
    let flag = Rc::clone(&built);
    let value = Outcome::later(move || {
        flag.set(true);
        Either3::left2(4)
    });
    assert!(!built.get());
    assert!(value.is_left2());
    assert!(built.get());
}

#[rstest]
fn right_eval_reuses_forced_lazy() {
    let lazy = Lazy::new(|| 8);
    assert_eq!(*lazy.force(), 8);
    assert_eq!(Outcome::right_eval(lazy).into_right().ok(), Some(8));
}

#[rstest]
fn filter_result_is_deferred() {
    let checked = Rc::new(Cell::new(false));
    let flag = Rc::clone(&checked);
    let filtered = Outcome::right(6).filter(move |x| {
        flag.set(true);
        *x > 5
    });
    assert!(!checked.get());
    assert_eq!(filtered.evaluate(), Some(6));
    assert!(checked.get());
}

#[rstest]
#[case(Outcome::left1("e".to_string()))]
#[case(Outcome::left2(2))]
fn filter_never_promotes_left(#[case] value: Outcome) {
    assert_eq!(value.filter(|_| true).evaluate(), None);
}

// =============================================================================
// Observation
// =============================================================================

#[rstest]
#[case(Outcome::left1("e".to_string()), "left1")]
#[case(Outcome::left2(2), "left2")]
fn get_on_left_fails_with_no_such_element(#[case] value: Outcome, #[case] branch: &'static str) {
    let error = value.get().map(|_| ()).unwrap_err();
    assert_eq!(error, NoSuchElementError::new("Either3::get", branch));
    assert!(error.to_string().contains(branch));
}

#[rstest]
fn visit_selects_matching_branch() {
    let describe = |value: Outcome| {
        value.visit(
            |message| format!("left1 {message}"),
            |code| format!("left2 {code}"),
            |number| format!("right {number}"),
        )
    };
    assert_eq!(describe(Either3::left1("x".to_string())), "left1 x");
    assert_eq!(describe(Either3::left2(3)), "left2 3");
    assert_eq!(describe(Either3::right(9).map(|x| x + 1)), "right 10");
}

#[rstest]
#[case(Outcome::right(1), Outcome::left1("x".to_string()))]
#[case(Outcome::left2(1), Outcome::left2(1))]
fn equality_compares_branches(#[case] left: Outcome, #[case] right: Outcome) {
    assert_eq!(left == right, left.to_string() == right.to_string());
}

#[rstest]
fn debug_format_names_branch() {
    assert_eq!(format!("{:?}", Outcome::left2(5)), "Left2(5)");
    assert_eq!(format!("{:?}", Outcome::left1("m".to_string())), "Left1(\"m\")");
}

// =============================================================================
// Swap
// =============================================================================

#[rstest]
fn swap1_exchanges_right_and_left1() {
    let swapped: Either3<i32, u16, String> = Outcome::right(3).swap1();
    assert_eq!(swapped, Either3::left1(3));
    assert_eq!(Outcome::left2(7).swap1(), Either3::left2(7));
}

#[rstest]
fn swap2_exchanges_right_and_left2() {
    let swapped: Either3<String, i32, u16> = Outcome::left2(4).swap2();
    assert_eq!(swapped, Either3::right(4));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn flat_map_accepts_option_try_and_validation() {
    let from_option = Outcome::right(1).flat_map(|x| Some(x + 1));
    let from_try = Outcome::right(1).flat_map(|x| Try::success(x + 2));
    let from_validation = Outcome::right(1).flat_map(|x| Validation::<(), i32>::success(x + 3));
    assert_eq!(from_option, Either3::right(2));
    assert_eq!(from_try, Either3::right(3));
    assert_eq!(from_validation, Either3::right(4));

    let absent = Outcome::right(1).flat_map(|_| Validation::<(), i32>::fail(()));
    assert_eq!(absent, Either3::left1(String::new()));
}

#[rstest]
fn either_round_trip() {
    let either: Either<String, i32> = Either::Right(5);
    let value = Outcome::from(either.clone());
    assert_eq!(value.to_either(), either);
}

#[rstest]
fn into_iterator_yields_right_only() {
    assert_eq!(Outcome::right(2).into_iter().collect::<Vec<_>>(), vec![2]);
    assert_eq!(Outcome::left2(2).into_iter().count(), 0);
}

// =============================================================================
// Sequencing
// =============================================================================

#[rstest]
fn sequence_returns_first_left_encountered() {
    let values = vec![
        Outcome::right(1),
        Outcome::left2(9).map(|x| x + 1),
        Outcome::left1("later".to_string()),
    ];
    assert_eq!(Outcome::sequence(values), Either3::left2(9));
}

#[rstest]
fn sequence_resolves_lazy_elements_in_order() {
    let values = (1..=4).map(|x| Outcome::later(move || Either3::right(x)).map(|x| x * x));
    assert_eq!(Outcome::sequence(values).into_right().ok(), Some(vec![1, 4, 9, 16]));
}

#[rstest]
fn accumulate_with_product_monoid() {
    let values = vec![Outcome::right(2), Outcome::right(3), Outcome::right(4)];
    assert_eq!(Outcome::accumulate(&Monoid::product(1), values), Either3::right(24));
}

#[rstest]
fn accumulate_short_circuits_on_left() {
    let values = vec![Outcome::right(2), Outcome::left1("stop".to_string())];
    assert_eq!(Outcome::accumulate(&Monoid::sum(), values), Either3::left1("stop".to_string()));
}

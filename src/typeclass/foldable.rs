//! Foldable type class - reducing a structure with a monoid.
//!
//! # Laws
//!
//! For an associative, commutative monoid, both directions agree:
//!
//! ```text
//! fold_left(fa, monoid) == fold_right(fa, monoid)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polykind::instances::list;
//! use polykind::typeclass::{Foldable, Monoid};
//!
//! let foldable = list::foldable();
//! assert_eq!(foldable.fold_left(vec![1, 2, 3, 4], &Monoid::sum()), 10);
//! assert_eq!(foldable.fold_left_with(vec![1, 2, 3, 4], 0, |a, b| a + b), 10);
//! ```

use super::higher::{Higher, Witness};
use super::monoid::Monoid;

/// A type class for witnesses whose values can be reduced to one summary value.
pub trait Foldable<W: Witness> {
    /// Folds from the right: `combine(x1, combine(x2, ... combine(xn, identity)))`.
    fn fold_right<T: Clone>(&self, value: Higher<W, T>, monoid: &Monoid<T>) -> T;

    /// Folds from the left: `combine(... combine(combine(identity, x1), x2) ..., xn)`.
    fn fold_left<T: Clone>(&self, value: Higher<W, T>, monoid: &Monoid<T>) -> T;

    /// Left fold with an ad hoc identity and combine function.
    fn fold_left_with<T: Clone, F>(&self, value: Higher<W, T>, identity: T, combine: F) -> T
    where
        F: Fn(T, T) -> T + 'static,
    {
        self.fold_left(value, &Monoid::of(identity, combine))
    }

    /// Right fold with an ad hoc identity and combine function.
    fn fold_right_with<T: Clone, F>(&self, value: Higher<W, T>, identity: T, combine: F) -> T
    where
        F: Fn(T, T) -> T + 'static,
    {
        self.fold_right(value, &Monoid::of(identity, combine))
    }
}

//! Monad, MonadZero and MonadPlus type classes.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! flat_map(unit(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! flat_map(m, unit) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polykind::instances::list;
//! use polykind::typeclass::{Monad, MonadZero};
//!
//! let monad = list::monad();
//! assert_eq!(monad.flat_map(vec![1, 2], |x| vec![x, x * 10]), vec![1, 10, 2, 20]);
//!
//! let zero = list::monad_zero();
//! assert_eq!(zero.filter(vec![1, 2, 3, 4], |x| x % 2 == 0), vec![2, 4]);
//! ```

use super::applicative::Applicative;
use super::higher::{Higher, Witness};
use super::monoid::Monoid;

/// A type class for witnesses supporting dependent sequencing.
pub trait Monad<W: Witness>: Applicative<W> {
    /// Applies `function` to each element and flattens the results.
    fn flat_map<A, B, F>(&self, value: Higher<W, A>, function: F) -> Higher<W, B>
    where
        F: FnMut(A) -> Higher<W, B>;

    /// Removes one layer of nesting.
    #[inline]
    fn flatten<A>(&self, nested: Higher<W, Higher<W, A>>) -> Higher<W, A> {
        self.flat_map(nested, |inner| inner)
    }

    /// Sequences two computations, keeping the result of the second.
    fn then<A, B>(&self, first: Higher<W, A>, second: Higher<W, B>) -> Higher<W, B>
    where
        Higher<W, B>: Clone,
    {
        self.flat_map(first, move |_| second.clone())
    }
}

/// A monad with an empty value.
///
/// `zero` is typed: one instance can produce the empty value at any element
/// type, so `filter` never needs to cast an untyped empty.
pub trait MonadZero<W: Witness>: Monad<W> {
    /// The empty value of `W` at element type `A`.
    fn zero<A>(&self) -> Higher<W, A>;

    /// Keeps the elements satisfying `predicate`.
    ///
    /// Derived from `flat_map` by default; instances with a native filter
    /// override it.
    fn filter<A, P>(&self, value: Higher<W, A>, mut predicate: P) -> Higher<W, A>
    where
        P: FnMut(&A) -> bool,
    {
        self.flat_map(value, |element| {
            if predicate(&element) {
                self.unit(element)
            } else {
                self.zero()
            }
        })
    }

    /// Narrows `value` to elements of the first case (`Some`) of an option.
    fn unite<A>(&self, value: Higher<W, Option<A>>) -> Higher<W, A> {
        self.flat_map(value, |element| match element {
            Some(present) => self.unit(present),
            None => self.zero(),
        })
    }
}

/// A monad whose values of element type `T` form a monoid.
///
/// The element type is fixed by the instance because the combining monoid is
/// a value over one concrete type.
pub trait MonadPlus<W: Witness, T>: MonadZero<W> {
    /// The combining monoid.
    fn monoid(&self) -> &Monoid<Higher<W, T>>;

    /// Combines two values with [`MonadPlus::monoid`].
    #[inline]
    fn plus(&self, left: Higher<W, T>, right: Higher<W, T>) -> Higher<W, T> {
        self.monoid().combine(left, right)
    }

    /// Combines every value left to right, starting from the monoid identity.
    fn sum<I>(&self, values: I) -> Higher<W, T>
    where
        I: IntoIterator<Item = Higher<W, T>>,
        Higher<W, T>: Clone,
    {
        self.monoid().reduce(values)
    }
}

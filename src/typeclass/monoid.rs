//! Monoid values - an identity element paired with an associative combine.
//!
//! Unlike [`Semigroup`], which is attached to a type, a [`Monoid`] is a
//! first-class value. The same element type may be reduced with different
//! monoids (sum versus product, concatenation versus "first wins"), which is
//! exactly what [`Foldable`](super::Foldable) and
//! [`MonadPlus`](super::MonadPlus) instances need.
//!
//! # Laws
//!
//! ```text
//! combine(identity, a) == a
//! combine(a, identity) == a
//! combine(combine(a, b), c) == combine(a, combine(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polykind::typeclass::Monoid;
//!
//! let sum = Monoid::of(0, |left: i32, right: i32| left + right);
//! assert_eq!(sum.reduce(vec![1, 2, 3, 4]), 10);
//!
//! let first = Monoid::first_non_empty();
//! assert_eq!(first.combine(vec![5], vec![10]), vec![5]);
//! ```

use std::fmt;
use std::ops::{Add, Mul};
use std::rc::Rc;

use super::Semigroup;

/// An identity element plus an associative binary operation over `T`.
pub struct Monoid<T> {
    identity: T,
    combiner: Rc<dyn Fn(T, T) -> T>,
}

impl<T: Clone> Clone for Monoid<T> {
    fn clone(&self) -> Self {
        Self {
            identity: self.identity.clone(),
            combiner: Rc::clone(&self.combiner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Monoid<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Monoid")
            .field("identity", &self.identity)
            .field("combiner", &"<function>")
            .finish()
    }
}

impl<T> Monoid<T> {
    /// Creates a monoid from an identity element and a combine function.
    ///
    /// The caller is responsible for the monoid laws; nothing is checked.
    pub fn of<F>(identity: T, combiner: F) -> Self
    where
        F: Fn(T, T) -> T + 'static,
    {
        Self {
            identity,
            combiner: Rc::new(combiner),
        }
    }

    /// Returns a reference to the identity element.
    #[inline]
    pub const fn identity(&self) -> &T {
        &self.identity
    }

    /// Combines two values.
    #[inline]
    pub fn combine(&self, left: T, right: T) -> T {
        (self.combiner)(left, right)
    }
}

impl<T: Clone> Monoid<T> {
    /// Returns a fresh copy of the identity element.
    #[inline]
    pub fn zero(&self) -> T {
        self.identity.clone()
    }

    /// Reduces the values left to right, starting from the identity.
    pub fn reduce<I>(&self, values: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .fold(self.zero(), |accumulator, value| self.combine(accumulator, value))
    }

    /// Reduces the values right to left, ending with the identity.
    pub fn reduce_right<I>(&self, values: I) -> T
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        values
            .into_iter()
            .rev()
            .fold(self.zero(), |accumulator, value| self.combine(value, accumulator))
    }
}

impl<T: Semigroup + 'static> Monoid<T> {
    /// Builds a monoid whose combine step is [`Semigroup::combine`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polykind::typeclass::Monoid;
    ///
    /// let concat = Monoid::from_semigroup(String::new());
    /// assert_eq!(concat.reduce(vec!["a".to_string(), "b".to_string()]), "ab");
    /// ```
    pub fn from_semigroup(identity: T) -> Self {
        Self::of(identity, T::combine)
    }
}

impl<T: Add<Output = T> + Default + 'static> Monoid<T> {
    /// Addition with `T::default()` as identity.
    pub fn sum() -> Self {
        Self::of(T::default(), |left, right| left + right)
    }
}

impl<T: Mul<Output = T> + 'static> Monoid<T> {
    /// Multiplication with the supplied `one` as identity.
    pub fn product(one: T) -> Self {
        Self::of(one, |left, right| left * right)
    }
}

impl<A: 'static> Monoid<Vec<A>> {
    /// List concatenation with the empty list as identity.
    pub fn concat() -> Self {
        Self::of(Vec::new(), |mut left: Vec<A>, mut right: Vec<A>| {
            left.append(&mut right);
            left
        })
    }

    /// Keeps the left list unless it is empty ("first wins").
    pub fn first_non_empty() -> Self {
        Self::of(Vec::new(), |left: Vec<A>, right| if left.is_empty() { right } else { left })
    }

    /// Keeps the right list unless it is empty ("last wins").
    pub fn last_non_empty() -> Self {
        Self::of(Vec::new(), |left, right: Vec<A>| if right.is_empty() { left } else { right })
    }
}

impl<A: 'static> Monoid<Option<A>> {
    /// Keeps the first present value.
    pub fn first_present() -> Self {
        Self::of(None, |left: Option<A>, right| left.or(right))
    }

    /// Keeps the last present value.
    pub fn last_present() -> Self {
        Self::of(None, |left, right: Option<A>| right.or(left))
    }
}

impl Monoid<String> {
    /// String concatenation with `""` as identity.
    pub fn string_concat() -> Self {
        Self::from_semigroup(String::new())
    }
}

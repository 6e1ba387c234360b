//! Functor and Unit type classes.
//!
//! Instances are *values* keyed by a witness tag rather than methods on the
//! container itself, so one algorithm written against `F: Functor<W>` works for
//! every witness `W` an instance exists for.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! functor.map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! functor.map(functor.map(fa, f), g) == functor.map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polykind::instances::list;
//! use polykind::typeclass::Functor;
//!
//! let doubled = list::functor().map(vec![1, 2, 3], |value| value * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use super::higher::{Higher, Witness};

/// A type class for witnesses whose values can have a function mapped over
/// their contents while preserving structure.
pub trait Functor<W: Witness> {
    /// Applies `function` to every element inside `value`.
    fn map<A, B, F>(&self, value: Higher<W, A>, function: F) -> Higher<W, B>
    where
        F: FnMut(A) -> B;

    /// Replaces every element with a clone of `replacement`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polykind::instances::option;
    /// use polykind::typeclass::Functor;
    ///
    /// assert_eq!(option::functor().replace(Some(5), "x"), Some("x"));
    /// assert_eq!(option::functor().replace(None::<i32>, "x"), None);
    /// ```
    #[inline]
    fn replace<A, B: Clone>(&self, value: Higher<W, A>, replacement: B) -> Higher<W, B> {
        self.map(value, move |_| replacement.clone())
    }

    /// Discards every element, keeping only the structure.
    #[inline]
    fn void<A>(&self, value: Higher<W, A>) -> Higher<W, ()> {
        self.map(value, |_| ())
    }
}

/// A type class for witnesses that can lift a bare value ("pure").
pub trait Unit<W: Witness> {
    /// Wraps `value` in the minimal context of `W`.
    fn unit<A>(&self, value: A) -> Higher<W, A>;
}

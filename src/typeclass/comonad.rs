//! Comonad type class - extracting a value from a context.
//!
//! `extract` must be total, so instances only exist for witnesses whose values
//! always hold exactly one element, such as [`Identity`](super::Identity).
//!
//! # Laws
//!
//! ```text
//! extract(coflat_map(w, f)) == f(w)
//! extract(unit(a)) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polykind::instances::identity;
//! use polykind::typeclass::{Comonad, Identity};
//!
//! let comonad = identity::comonad();
//! assert_eq!(comonad.extract(Identity(5)), 5);
//! ```

use super::functor::{Functor, Unit};
use super::higher::{Higher, Witness};

/// A type class for witnesses whose values always carry one extractable value.
pub trait Comonad<W: Witness>: Functor<W> + Unit<W> {
    /// Pulls the value out of its context.
    fn extract<A>(&self, value: Higher<W, A>) -> A;

    /// Applies a context-consuming function and rewraps its result.
    #[inline]
    fn coflat_map<A, B, F>(&self, value: Higher<W, A>, function: F) -> Higher<W, B>
    where
        F: FnOnce(Higher<W, A>) -> B,
    {
        self.unit(function(value))
    }

    /// Wraps a value in one more layer of context.
    #[inline]
    fn nest<A>(&self, value: Higher<W, A>) -> Higher<W, Higher<W, A>> {
        self.unit(value)
    }
}

//! Traverse type class - turning a structure of effects inside out.
//!
//! Both operations are parameterised by a *second* witness `G` and an
//! applicative instance for it, so one list traversal works with any effect.
//!
//! # Examples
//!
//! ```rust
//! use polykind::instances::{list, option};
//! use polykind::typeclass::Traverse;
//!
//! let traverse = list::traverse();
//! let option = option::applicative();
//!
//! assert_eq!(traverse.sequence_a(&option, vec![Some(1), Some(2)]), Some(vec![1, 2]));
//! assert_eq!(traverse.sequence_a(&option, vec![Some(1), None]), None);
//!
//! let halves = traverse.traverse_a(&option, vec![2, 4], |x| (x % 2 == 0).then_some(x / 2));
//! assert_eq!(halves, Some(vec![1, 2]));
//! ```

use super::applicative::Applicative;
use super::higher::{Higher, Witness};

/// A type class for witnesses that can be traversed with an applicative effect.
pub trait Traverse<W: Witness>: Applicative<W> {
    /// Turns `W<G<T>>` into `G<W<T>>`.
    fn sequence_a<G, T, AG>(&self, applicative: &AG, value: Higher<W, Higher<G, T>>) -> Higher<G, Higher<W, T>>
    where
        G: Witness,
        AG: Applicative<G>;

    /// Maps every element into `G` and sequences the result.
    fn traverse_a<G, A, B, AG, F>(
        &self,
        applicative: &AG,
        value: Higher<W, A>,
        function: F,
    ) -> Higher<G, Higher<W, B>>
    where
        G: Witness,
        AG: Applicative<G>,
        F: FnMut(A) -> Higher<G, B>;
}

//! Type classes over witness-tagged higher-kinded types.
//!
//! This module provides the vocabulary the rest of the crate is written in:
//!
//! - [`Witness`] and [`Higher`]: encoding "a value of shape `W<A>`"
//! - [`Functor`] and [`Unit`]: mapping and lifting
//! - [`Applicative`]: applying wrapped functions
//! - [`Monad`], [`MonadZero`], [`MonadPlus`]: sequencing, emptiness, combining
//! - [`Comonad`]: total extraction
//! - [`Foldable`]: reduction with a [`Monoid`]
//! - [`Traverse`]: turning structures of effects inside out
//! - [`Semigroup`] and [`Monoid`]: associative combination
//!
//! Instances are values, not implementations on the container type. They are
//! assembled from raw operations by the builders in [`general`].
//!
//! # Examples
//!
//! ```rust
//! use polykind::instances::{list, option};
//! use polykind::typeclass::{Functor, Higher, ListWitness, Traverse};
//!
//! fn double_all<F: Functor<ListWitness>>(functor: &F, values: Higher<ListWitness, i32>) -> Vec<i32> {
//!     functor.map(values, |value| value * 2)
//! }
//!
//! assert_eq!(double_all(&list::functor(), vec![1, 2]), vec![2, 4]);
//!
//! let sequenced = list::traverse().sequence_a(&option::applicative(), vec![Some(1), Some(2)]);
//! assert_eq!(sequenced, Some(vec![1, 2]));
//! ```

mod applicative;
mod comonad;
mod foldable;
mod functor;
pub mod general;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod traversable;

pub use applicative::Applicative;
pub use comonad::Comonad;
pub use foldable::Foldable;
pub use functor::{Functor, Unit};
pub use higher::{Higher, IdentityWitness, ListWitness, OptionWitness, Witness};
pub use identity::Identity;
pub use monad::{Monad, MonadPlus, MonadZero};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traverse;

//! # polykind
//!
//! Witness-encoded type classes for Rust, with generic instance builders,
//! adapters over foreign monadic types, and a stack-safe lazy `Either3`.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor), [`Applicative`](typeclass::Applicative),
//!   [`Monad`](typeclass::Monad), [`MonadZero`](typeclass::MonadZero),
//!   [`MonadPlus`](typeclass::MonadPlus), [`Comonad`](typeclass::Comonad),
//!   [`Foldable`](typeclass::Foldable) and [`Traverse`](typeclass::Traverse),
//!   written against witness tags ([`Higher<W, A>`](typeclass::Higher))
//! - **General Instances**: builders in [`typeclass::general`] that assemble
//!   instances from raw operations
//! - **Control Structures**: [`Either3`](control::Either3), [`Try`](control::Try),
//!   [`Validation`](control::Validation) and [`Lazy`](control::Lazy)
//! - **Instances**: ready-made dictionaries for `Vec`, `Option`, `Identity`,
//!   `Try` and `Validation`
//! - **Adapters**: [`TryAdapter`](adapter::TryAdapter) and
//!   [`ValidationAdapter`](adapter::ValidationAdapter), a uniform surface
//!   over two monads with different failure policies
//!
//! ## Feature Flags
//!
//! - `typeclass`: Witness encoding, type class traits and general builders
//! - `control`: `Either3`, `Try`, `Validation`, `Lazy`
//! - `instances`: Instance dictionaries for the built-in witnesses
//! - `adapter`: Monad adapters
//! - `serde`: Serialize/Deserialize for the plain data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use polykind::prelude::*;
//! use polykind::instances::{list, option};
//!
//! let doubled = list::functor().map(vec![1, 2, 3], |value| value * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let sequenced = list::traverse().sequence_a(&option::applicative(), vec![Some(1), None]);
//! assert_eq!(sequenced, None);
//!
//! let adapter = TryAdapter::new();
//! let failed = adapter.empty::<i32>();
//! assert!(!adapter.is_success(&failed));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use polykind::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "adapter")]
    pub use crate::adapter::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "instances")]
pub mod instances;

#[cfg(feature = "adapter")]
pub mod adapter;

#[doc(hidden)]
pub use paste;

//! Control structures: the data types the instance dictionaries operate on.
//!
//! - [`Either3`]: lazy, stack-safe, right-biased union of three alternatives
//! - [`Try`]: success or a failure cause; short-circuits on the first failure
//! - [`Validation`]: success or failure; independent failures accumulate
//! - [`Either`]: the two-branch projection of `Either3`
//! - [`Lazy`]: memoized deferred computation
//!
//! # Examples
//!
//! ```rust
//! use polykind::control::{Either3, Lazy};
//!
//! let value: Either3<String, i32, i32> = Either3::right_eval(Lazy::new(|| 20))
//!     .map(|value| value + 1)
//!     .flat_map(|value| Either3::right(value * 2));
//! assert_eq!(value.to_string(), "Either3.right[42]");
//! ```

mod continuation_queue;
mod either;
mod either3;
mod error;
mod lazy;
mod try_type;
mod validation;

pub use either::Either;
pub use either3::{Either3, IntoEither3};
pub use error::{NoSuchElementError, PoisonedError};
pub use lazy::{Deferred, Lazy};
pub use try_type::{Failure, Try, TryWitness};
pub use validation::{Validation, ValidationWitness};

//! Ready-made instances for the built-in witnesses.
//!
//! Each submodule exposes one raw-operations type (`ListOps`, `OptionOps`, ...)
//! implementing the [`general`](crate::typeclass::general) operation traits,
//! plus factory functions that assemble it into full type class instances.
//!
//! | Module | Witness | Notes |
//! |--------|---------|-------|
//! | [`list`] | `ListWitness` | zipping `ap`, native `filter`, concatenating `plus` |
//! | [`option`] | `OptionWitness` | derived `filter`, first-present `plus` |
//! | [`identity`] | `IdentityWitness` | the only comonad |
//! | [`try_type`] | `TryWitness` | short-circuit `ap`, sentinel zero |
//! | [`validation`] | `ValidationWitness<E>` | accumulating `ap` |

pub mod identity;
pub mod list;
pub mod option;
pub mod try_type;
pub mod validation;

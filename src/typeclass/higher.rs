//! Higher-Kinded Type emulation through witness tags and Generic Associated Types.
//!
//! Rust cannot abstract over a partially applied type such as `Option<_>`.
//! Instead, each type constructor is represented by an uninhabited *witness*
//! tag whose [`Witness::Of`] associated type names the concrete type once an
//! element type is supplied.
//!
//! [`Higher<W, A>`] reads as "a value of conceptual type `W<A>`". Because it is
//! a plain alias of `W::Of<A>`, widening a concrete value into its `Higher`
//! form and narrowing it back are both the identity, and narrowing to the
//! wrong witness is rejected by the compiler instead of failing at runtime.
//!
//! # Example
//!
//! ```rust
//! use polykind::typeclass::{Higher, ListWitness, OptionWitness, Witness};
//!
//! fn first<A: Clone>(list: &Higher<ListWitness, A>) -> Higher<OptionWitness, A> {
//!     list.first().cloned()
//! }
//!
//! let list: Higher<ListWitness, i32> = vec![1, 2, 3];
//! assert_eq!(first(&list), Some(1));
//! ```

use super::identity::Identity;

/// A type-level tag identifying one type constructor.
///
/// Implementors are never instantiated. They exist purely so that type class
/// instances can be written once against "a value of shape `W<_>`" and reused
/// for every witness `W`.
///
/// # Laws
///
/// - **Uninhabited**: the implementing type has no values (an empty `enum`, or
///   a struct holding [`std::convert::Infallible`]).
/// - **Injective**: `Of<A>` and `Of<B>` are the same constructor applied to
///   different element types.
///
/// # Example
///
/// ```rust
/// use polykind::typeclass::Witness;
///
/// enum BoxWitness {}
///
/// impl Witness for BoxWitness {
///     type Of<A> = Box<A>;
/// }
///
/// let boxed: <BoxWitness as Witness>::Of<i32> = Box::new(1);
/// assert_eq!(*boxed, 1);
/// ```
pub trait Witness {
    /// The concrete type this witness stands for, applied to `A`.
    type Of<A>;
}

/// A value of conceptual type `W<A>`.
pub type Higher<W, A> = <W as Witness>::Of<A>;

/// Declares an uninhabited witness tag for a single-parameter type constructor.
///
/// The generated tag is named after the constructor with a `Witness` suffix.
///
/// # Examples
///
/// ```rust
/// use polykind::typeclass::{Higher, Witness};
/// use std::collections::VecDeque;
///
/// polykind::witness! {
///     /// Witness for `VecDeque`.
///     pub VecDeque => VecDeque
/// }
///
/// let queue: Higher<VecDequeWitness, u8> = VecDeque::from(vec![1, 2]);
/// assert_eq!(queue.len(), 2);
/// ```
#[macro_export]
macro_rules! witness {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $constructor:ident
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum [<$name Witness>] {}

            impl $crate::typeclass::Witness for [<$name Witness>] {
                type Of<A> = $constructor<A>;
            }
        }
    };
}

witness! {
    /// Witness for [`Option`], the "Maybe" monad.
    pub Option => Option
}

witness! {
    /// Witness for ordered, finite lists, represented by [`Vec`].
    pub List => Vec
}

witness! {
    /// Witness for [`Identity`], the trivial always-present container.
    pub Identity => Identity
}

static_assertions::const_assert_eq!(std::mem::size_of::<OptionWitness>(), 0);
static_assertions::const_assert_eq!(std::mem::size_of::<ListWitness>(), 0);
static_assertions::const_assert_eq!(std::mem::size_of::<IdentityWitness>(), 0);

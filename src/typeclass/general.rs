//! Building type class instances from raw operation references.
//!
//! A foreign library rarely exposes its container as a type class instance. It
//! does, however, expose the individual operations: a `map` method, a
//! constructor, a `flat_map`. The `*Ref` traits below describe one such raw
//! operation each, and the builder functions in this module assemble them into
//! full instances, deriving whatever the library does not provide.
//!
//! Builders only store their arguments, so every resulting instance is cheap
//! to clone and may be shared freely.
//!
//! # Examples
//!
//! ```rust
//! use polykind::typeclass::general::{self, BindRef, MapRef, UnitRef, ApRef};
//! use polykind::typeclass::{Higher, Monad, OptionWitness, Unit};
//!
//! #[derive(Clone, Copy)]
//! struct OptionOps;
//!
//! impl MapRef<OptionWitness> for OptionOps {
//!     fn map<A, B, F: FnMut(A) -> B>(&self, value: Option<A>, function: F) -> Option<B> {
//!         value.map(function)
//!     }
//! }
//! impl UnitRef<OptionWitness> for OptionOps {
//!     fn unit<A>(&self, value: A) -> Option<A> {
//!         Some(value)
//!     }
//! }
//! impl ApRef<OptionWitness> for OptionOps {
//!     fn ap<A, B, F: FnOnce(A) -> B>(&self, function: Option<F>, value: Option<A>) -> Option<B> {
//!         function.zip(value).map(|(function, value)| function(value))
//!     }
//! }
//! impl BindRef<OptionWitness> for OptionOps {
//!     fn bind<A, B, F>(&self, value: Option<A>, function: F) -> Option<B>
//!     where
//!         F: FnMut(A) -> Higher<OptionWitness, B>,
//!     {
//!         value.and_then(function)
//!     }
//! }
//!
//! let functor = general::functor::<OptionWitness, _>(OptionOps);
//! let applicative = general::applicative::<OptionWitness, _, _, _>(functor, general::unit(OptionOps), OptionOps);
//! let monad = general::monad::<OptionWitness, _, _>(applicative, OptionOps);
//!
//! assert_eq!(monad.flat_map(monad.unit(2), |x| Some(x * 21)), Some(42));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::applicative::Applicative;
use super::comonad::Comonad;
use super::foldable::Foldable;
use super::functor::{Functor, Unit};
use super::higher::{Higher, Witness};
use super::monad::{Monad, MonadPlus, MonadZero};
use super::monoid::Monoid;
use super::traversable::Traverse;

// =============================================================================
// Raw operation references
// =============================================================================

/// A raw `map` operation for witness `W`.
pub trait MapRef<W: Witness> {
    /// Maps `function` over `value`.
    fn map<A, B, F>(&self, value: Higher<W, A>, function: F) -> Higher<W, B>
    where
        F: FnMut(A) -> B;
}

/// A raw constructor lifting a bare value into `W`.
pub trait UnitRef<W: Witness> {
    /// Wraps `value`.
    fn unit<A>(&self, value: A) -> Higher<W, A>;
}

/// A raw `ap` operation for witness `W`.
pub trait ApRef<W: Witness> {
    /// Applies wrapped functions to wrapped values.
    fn ap<A, B, F>(&self, function: Higher<W, F>, value: Higher<W, A>) -> Higher<W, B>
    where
        F: FnOnce(A) -> B;
}

/// A raw `flat_map` operation for witness `W`.
pub trait BindRef<W: Witness> {
    /// Binds `function` over `value`.
    fn bind<A, B, F>(&self, value: Higher<W, A>, function: F) -> Higher<W, B>
    where
        F: FnMut(A) -> Higher<W, B>;
}

/// A raw supplier of the empty value of `W`.
pub trait ZeroRef<W: Witness> {
    /// The empty value at element type `A`.
    fn zero<A>(&self) -> Higher<W, A>;
}

/// A native `filter` for witness `W`.
pub trait FilterRef<W: Witness> {
    /// Keeps the elements matching `predicate`.
    fn filter<A, P>(&self, value: Higher<W, A>, predicate: P) -> Higher<W, A>
    where
        P: FnMut(&A) -> bool;
}

/// A raw total extraction for witness `W`.
pub trait ExtractRef<W: Witness> {
    /// Pulls the single value out of `value`.
    fn extract<A>(&self, value: Higher<W, A>) -> A;
}

/// A raw monoidal fold, in one fixed direction, for witness `W`.
pub trait FoldRef<W: Witness> {
    /// Reduces `value` with `monoid`.
    fn fold<T: Clone>(&self, value: Higher<W, T>, monoid: &Monoid<T>) -> T;
}

/// A raw `sequence` operation for witness `W`.
pub trait SequenceRef<W: Witness> {
    /// Turns `W<G<T>>` into `G<W<T>>` using the applicative for `G`.
    fn sequence<G, T, AG>(&self, applicative: &AG, value: Higher<W, Higher<G, T>>) -> Higher<G, Higher<W, T>>
    where
        G: Witness,
        AG: Applicative<G>;
}

/// A raw `traverse` operation for witness `W`.
pub trait TraverseRef<W: Witness> {
    /// Maps into `G` and sequences, in one pass.
    fn traverse<G, A, B, AG, F>(
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

// =============================================================================
// Assembled instances
// =============================================================================

type Tag<W> = PhantomData<fn() -> W>;

macro_rules! impl_clone_debug {
    ($name:ident < $w:ident $(, $param:ident)* > { $($field:ident),* }) => {
        impl<$w $(, $param: Clone)*> Clone for $name<$w $(, $param)*> {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone(),)*
                    witness: PhantomData,
                }
            }
        }

        impl<$w $(, $param)*> fmt::Debug for $name<$w $(, $param)*> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field("witness", &std::any::type_name::<$w>())
                    .finish_non_exhaustive()
            }
        }
    };
}

fn trace_build<W>(instance: &'static str) {
    tracing::trace!(instance, witness = std::any::type_name::<W>(), "assembled general instance");
}

/// A [`Functor`] backed by a [`MapRef`].
pub struct GeneralFunctor<W, M> {
    map_ref: M,
    witness: Tag<W>,
}
impl_clone_debug!(GeneralFunctor<W, M> { map_ref });

/// A [`Unit`] backed by a [`UnitRef`].
pub struct GeneralUnit<W, U> {
    unit_ref: U,
    witness: Tag<W>,
}
impl_clone_debug!(GeneralUnit<W, U> { unit_ref });

/// An [`Applicative`] assembled from a functor, a unit and an [`ApRef`].
pub struct GeneralApplicative<W, Fu, Un, Ap> {
    functor: Fu,
    unit: Un,
    ap_ref: Ap,
    witness: Tag<W>,
}
impl_clone_debug!(GeneralApplicative<W, Fu, Un, Ap> { functor, unit, ap_ref });

/// A [`Monad`] assembled from an applicative and a [`BindRef`].
pub struct GeneralMonad<W, Ap, Bi> {
    applicative: Ap,
    bind_ref: Bi,
    witness: Tag<W>,
}
impl_clone_debug!(GeneralMonad<W, Ap, Bi> { applicative, bind_ref });

/// A [`MonadZero`] whose `filter` is derived from `flat_map` and `zero`.
pub struct GeneralMonadZero<W, M, Z> {
    monad: M,
    zero_ref: Z,
    witness: Tag<W>,
}
impl_clone_debug!(GeneralMonadZero<W, M, Z> { monad, zero_ref });

/// A [`MonadZero`] that uses a native [`FilterRef`].
pub struct FilteringMonadZero<W, M, Z, Fi> {
    monad: M,
    zero_ref: Z,
    filter_ref: Fi,
    witness: Tag<W>,
}
impl_clone_debug!(FilteringMonadZero<W, M, Z, Fi> { monad, zero_ref, filter_ref });

/// A [`MonadPlus`] assembled from a monad-zero and a combining monoid.
pub struct GeneralMonadPlus<W: Witness, T, MZ> {
    monad_zero: MZ,
    monoid: Monoid<Higher<W, T>>,
    witness: Tag<W>,
}

impl<W: Witness, T, MZ: Clone> Clone for GeneralMonadPlus<W, T, MZ>
where
    Higher<W, T>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            monad_zero: self.monad_zero.clone(),
            monoid: self.monoid.clone(),
            witness: PhantomData,
        }
    }
}

impl<W: Witness, T, MZ> fmt::Debug for GeneralMonadPlus<W, T, MZ> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GeneralMonadPlus")
            .field("witness", &std::any::type_name::<W>())
            .finish_non_exhaustive()
    }
}

/// A [`Comonad`] assembled from a functor, a unit and an [`ExtractRef`].
pub struct GeneralComonad<W, Fu, Un, Ex> {
    functor: Fu,
    unit: Un,
    extract_ref: Ex,
    witness: Tag<W>,
}
impl_clone_debug!(GeneralComonad<W, Fu, Un, Ex> { functor, unit, extract_ref });

/// A [`Foldable`] assembled from a right fold and a left fold.
pub struct GeneralFoldable<W, R, L> {
    fold_right_ref: R,
    fold_left_ref: L,
    witness: Tag<W>,
}
impl_clone_debug!(GeneralFoldable<W, R, L> { fold_right_ref, fold_left_ref });

/// A [`Traverse`] whose `traverse_a` is `map` followed by a [`SequenceRef`].
pub struct GeneralTraverse<W, Ap, S> {
    applicative: Ap,
    sequence_ref: S,
    witness: Tag<W>,
}
impl_clone_debug!(GeneralTraverse<W, Ap, S> { applicative, sequence_ref });

/// A [`Traverse`] whose `sequence_a` is a [`TraverseRef`] with the identity function.
pub struct GeneralTraverseByTraverse<W, Ap, Tr> {
    applicative: Ap,
    traverse_ref: Tr,
    witness: Tag<W>,
}
impl_clone_debug!(GeneralTraverseByTraverse<W, Ap, Tr> { applicative, traverse_ref });

// =============================================================================
// Builders
// =============================================================================

/// Builds a [`Functor`] from a raw `map`.
pub fn functor<W: Witness, M: MapRef<W>>(map_ref: M) -> GeneralFunctor<W, M> {
    trace_build::<W>("functor");
    GeneralFunctor {
        map_ref,
        witness: PhantomData,
    }
}

/// Builds a [`Unit`] from a raw constructor.
pub fn unit<W: Witness, U: UnitRef<W>>(unit_ref: U) -> GeneralUnit<W, U> {
    trace_build::<W>("unit");
    GeneralUnit {
        unit_ref,
        witness: PhantomData,
    }
}

/// Builds an [`Applicative`] from a functor, a unit and a raw `ap`.
pub fn applicative<W, Fu, Un, Ap>(functor: Fu, unit: Un, ap_ref: Ap) -> GeneralApplicative<W, Fu, Un, Ap>
where
    W: Witness,
    Fu: Functor<W>,
    Un: Unit<W>,
    Ap: ApRef<W>,
{
    trace_build::<W>("applicative");
    GeneralApplicative {
        functor,
        unit,
        ap_ref,
        witness: PhantomData,
    }
}

/// Builds a [`Monad`] from an applicative and a raw `flat_map`.
pub fn monad<W, Ap, Bi>(applicative: Ap, bind_ref: Bi) -> GeneralMonad<W, Ap, Bi>
where
    W: Witness,
    Ap: Applicative<W>,
    Bi: BindRef<W>,
{
    trace_build::<W>("monad");
    GeneralMonad {
        applicative,
        bind_ref,
        witness: PhantomData,
    }
}

/// Builds a [`MonadZero`] whose `filter` is derived from `flat_map`.
pub fn monad_zero<W, M, Z>(monad: M, zero_ref: Z) -> GeneralMonadZero<W, M, Z>
where
    W: Witness,
    M: Monad<W>,
    Z: ZeroRef<W>,
{
    trace_build::<W>("monad_zero");
    GeneralMonadZero {
        monad,
        zero_ref,
        witness: PhantomData,
    }
}

/// Builds a [`MonadZero`] that uses the supplied native `filter`.
pub fn monad_zero_with_filter<W, M, Z, Fi>(monad: M, zero_ref: Z, filter_ref: Fi) -> FilteringMonadZero<W, M, Z, Fi>
where
    W: Witness,
    M: Monad<W>,
    Z: ZeroRef<W>,
    Fi: FilterRef<W>,
{
    trace_build::<W>("monad_zero_with_filter");
    FilteringMonadZero {
        monad,
        zero_ref,
        filter_ref,
        witness: PhantomData,
    }
}

/// Builds a [`MonadPlus`] from a monad-zero and the monoid combining its values.
pub fn monad_plus<W, T, MZ>(monad_zero: MZ, monoid: Monoid<Higher<W, T>>) -> GeneralMonadPlus<W, T, MZ>
where
    W: Witness,
    MZ: MonadZero<W>,
{
    trace_build::<W>("monad_plus");
    GeneralMonadPlus {
        monad_zero,
        monoid,
        witness: PhantomData,
    }
}

/// Builds a [`Comonad`] from a functor, a unit and a raw `extract`.
pub fn comonad<W, Fu, Un, Ex>(functor: Fu, unit: Un, extract_ref: Ex) -> GeneralComonad<W, Fu, Un, Ex>
where
    W: Witness,
    Fu: Functor<W>,
    Un: Unit<W>,
    Ex: ExtractRef<W>,
{
    trace_build::<W>("comonad");
    GeneralComonad {
        functor,
        unit,
        extract_ref,
        witness: PhantomData,
    }
}

/// Builds a [`Foldable`] from a right fold and a left fold.
pub fn foldable<W, R, L>(fold_right_ref: R, fold_left_ref: L) -> GeneralFoldable<W, R, L>
where
    W: Witness,
    R: FoldRef<W>,
    L: FoldRef<W>,
{
    trace_build::<W>("foldable");
    GeneralFoldable {
        fold_right_ref,
        fold_left_ref,
        witness: PhantomData,
    }
}

/// Builds a [`Traverse`] from an applicative and a raw `sequence`.
pub fn traverse<W, Ap, S>(applicative: Ap, sequence_ref: S) -> GeneralTraverse<W, Ap, S>
where
    W: Witness,
    Ap: Applicative<W>,
    S: SequenceRef<W>,
{
    trace_build::<W>("traverse");
    GeneralTraverse {
        applicative,
        sequence_ref,
        witness: PhantomData,
    }
}

/// Builds a [`Traverse`] from an applicative and a raw `traverse`.
pub fn traverse_by_traverse<W, Ap, Tr>(applicative: Ap, traverse_ref: Tr) -> GeneralTraverseByTraverse<W, Ap, Tr>
where
    W: Witness,
    Ap: Applicative<W>,
    Tr: TraverseRef<W>,
{
    trace_build::<W>("traverse_by_traverse");
    GeneralTraverseByTraverse {
        applicative,
        traverse_ref,
        witness: PhantomData,
    }
}

// =============================================================================
// Delegation
// =============================================================================

macro_rules! delegate_functor {
    ($name:ident < $w:ident $(, $param:ident)* > via $field:ident where $($bounds:tt)*) => {
        impl<$w: Witness $(, $param)*> Functor<$w> for $name<$w $(, $param)*> where $($bounds)* {
            #[inline]
            fn map<A, B, F>(&self, value: Higher<$w, A>, function: F) -> Higher<$w, B>
            where
                F: FnMut(A) -> B,
            {
                self.$field.map(value, function)
            }
        }
    };
}

macro_rules! delegate_unit {
    ($name:ident < $w:ident $(, $param:ident)* > via $field:ident where $($bounds:tt)*) => {
        impl<$w: Witness $(, $param)*> Unit<$w> for $name<$w $(, $param)*> where $($bounds)* {
            #[inline]
            fn unit<A>(&self, value: A) -> Higher<$w, A> {
                self.$field.unit(value)
            }
        }
    };
}

macro_rules! delegate_applicative {
    ($name:ident < $w:ident $(, $param:ident)* > via $field:ident where $($bounds:tt)*) => {
        impl<$w: Witness $(, $param)*> Applicative<$w> for $name<$w $(, $param)*> where $($bounds)* {
            #[inline]
            fn ap<A, B, F>(&self, function: Higher<$w, F>, value: Higher<$w, A>) -> Higher<$w, B>
            where
                F: FnOnce(A) -> B,
            {
                self.$field.ap(function, value)
            }
        }
    };
}

macro_rules! delegate_monad {
    ($name:ident < $w:ident $(, $param:ident)* > via $field:ident where $($bounds:tt)*) => {
        impl<$w: Witness $(, $param)*> Monad<$w> for $name<$w $(, $param)*> where $($bounds)* {
            #[inline]
            fn flat_map<A, B, F>(&self, value: Higher<$w, A>, function: F) -> Higher<$w, B>
            where
                F: FnMut(A) -> Higher<$w, B>,
            {
                self.$field.flat_map(value, function)
            }
        }
    };
}

impl<W: Witness, M: MapRef<W>> Functor<W> for GeneralFunctor<W, M> {
    #[inline]
    fn map<A, B, F>(&self, value: Higher<W, A>, function: F) -> Higher<W, B>
    where
        F: FnMut(A) -> B,
    {
        self.map_ref.map(value, function)
    }
}

impl<W: Witness, U: UnitRef<W>> Unit<W> for GeneralUnit<W, U> {
    #[inline]
    fn unit<A>(&self, value: A) -> Higher<W, A> {
        self.unit_ref.unit(value)
    }
}

// GeneralApplicative
delegate_functor!(GeneralApplicative<W, Fu, Un, Ap> via functor where Fu: Functor<W>);
delegate_unit!(GeneralApplicative<W, Fu, Un, Ap> via unit where Un: Unit<W>);

impl<W, Fu, Un, Ap> Applicative<W> for GeneralApplicative<W, Fu, Un, Ap>
where
    W: Witness,
    Fu: Functor<W>,
    Un: Unit<W>,
    Ap: ApRef<W>,
{
    #[inline]
    fn ap<A, B, F>(&self, function: Higher<W, F>, value: Higher<W, A>) -> Higher<W, B>
    where
        F: FnOnce(A) -> B,
    {
        self.ap_ref.ap(function, value)
    }
}

// GeneralMonad
delegate_functor!(GeneralMonad<W, Ap, Bi> via applicative where Ap: Applicative<W>);
delegate_unit!(GeneralMonad<W, Ap, Bi> via applicative where Ap: Applicative<W>);
delegate_applicative!(GeneralMonad<W, Ap, Bi> via applicative where Ap: Applicative<W>);

impl<W, Ap, Bi> Monad<W> for GeneralMonad<W, Ap, Bi>
where
    W: Witness,
    Ap: Applicative<W>,
    Bi: BindRef<W>,
{
    #[inline]
    fn flat_map<A, B, F>(&self, value: Higher<W, A>, function: F) -> Higher<W, B>
    where
        F: FnMut(A) -> Higher<W, B>,
    {
        self.bind_ref.bind(value, function)
    }
}

// GeneralMonadZero
delegate_functor!(GeneralMonadZero<W, M, Z> via monad where M: Monad<W>);
delegate_unit!(GeneralMonadZero<W, M, Z> via monad where M: Monad<W>);
delegate_applicative!(GeneralMonadZero<W, M, Z> via monad where M: Monad<W>);
delegate_monad!(GeneralMonadZero<W, M, Z> via monad where M: Monad<W>);

impl<W, M, Z> MonadZero<W> for GeneralMonadZero<W, M, Z>
where
    W: Witness,
    M: Monad<W>,
    Z: ZeroRef<W>,
{
    #[inline]
    fn zero<A>(&self) -> Higher<W, A> {
        self.zero_ref.zero()
    }
}

// FilteringMonadZero
delegate_functor!(FilteringMonadZero<W, M, Z, Fi> via monad where M: Monad<W>);
delegate_unit!(FilteringMonadZero<W, M, Z, Fi> via monad where M: Monad<W>);
delegate_applicative!(FilteringMonadZero<W, M, Z, Fi> via monad where M: Monad<W>);
delegate_monad!(FilteringMonadZero<W, M, Z, Fi> via monad where M: Monad<W>);

impl<W, M, Z, Fi> MonadZero<W> for FilteringMonadZero<W, M, Z, Fi>
where
    W: Witness,
    M: Monad<W>,
    Z: ZeroRef<W>,
    Fi: FilterRef<W>,
{
    #[inline]
    fn zero<A>(&self) -> Higher<W, A> {
        self.zero_ref.zero()
    }

    #[inline]
    fn filter<A, P>(&self, value: Higher<W, A>, predicate: P) -> Higher<W, A>
    where
        P: FnMut(&A) -> bool,
    {
        self.filter_ref.filter(value, predicate)
    }
}

// GeneralMonadPlus
delegate_functor!(GeneralMonadPlus<W, T, MZ> via monad_zero where MZ: MonadZero<W>);
delegate_unit!(GeneralMonadPlus<W, T, MZ> via monad_zero where MZ: MonadZero<W>);
delegate_applicative!(GeneralMonadPlus<W, T, MZ> via monad_zero where MZ: MonadZero<W>);
delegate_monad!(GeneralMonadPlus<W, T, MZ> via monad_zero where MZ: MonadZero<W>);

impl<W: Witness, T, MZ: MonadZero<W>> MonadZero<W> for GeneralMonadPlus<W, T, MZ> {
    #[inline]
    fn zero<A>(&self) -> Higher<W, A> {
        self.monad_zero.zero()
    }

    #[inline]
    fn filter<A, P>(&self, value: Higher<W, A>, predicate: P) -> Higher<W, A>
    where
        P: FnMut(&A) -> bool,
    {
        self.monad_zero.filter(value, predicate)
    }
}

impl<W: Witness, T, MZ: MonadZero<W>> MonadPlus<W, T> for GeneralMonadPlus<W, T, MZ> {
    #[inline]
    fn monoid(&self) -> &Monoid<Higher<W, T>> {
        &self.monoid
    }
}

// GeneralComonad
delegate_functor!(GeneralComonad<W, Fu, Un, Ex> via functor where Fu: Functor<W>);
delegate_unit!(GeneralComonad<W, Fu, Un, Ex> via unit where Un: Unit<W>);

impl<W, Fu, Un, Ex> Comonad<W> for GeneralComonad<W, Fu, Un, Ex>
where
    W: Witness,
    Fu: Functor<W>,
    Un: Unit<W>,
    Ex: ExtractRef<W>,
{
    #[inline]
    fn extract<A>(&self, value: Higher<W, A>) -> A {
        self.extract_ref.extract(value)
    }
}

// GeneralFoldable
impl<W, R, L> Foldable<W> for GeneralFoldable<W, R, L>
where
    W: Witness,
    R: FoldRef<W>,
    L: FoldRef<W>,
{
    #[inline]
    fn fold_right<T: Clone>(&self, value: Higher<W, T>, monoid: &Monoid<T>) -> T {
        self.fold_right_ref.fold(value, monoid)
    }

    #[inline]
    fn fold_left<T: Clone>(&self, value: Higher<W, T>, monoid: &Monoid<T>) -> T {
        self.fold_left_ref.fold(value, monoid)
    }
}

// GeneralTraverse
delegate_functor!(GeneralTraverse<W, Ap, S> via applicative where Ap: Applicative<W>);
delegate_unit!(GeneralTraverse<W, Ap, S> via applicative where Ap: Applicative<W>);
delegate_applicative!(GeneralTraverse<W, Ap, S> via applicative where Ap: Applicative<W>);

impl<W, Ap, S> Traverse<W> for GeneralTraverse<W, Ap, S>
where
    W: Witness,
    Ap: Applicative<W>,
    S: SequenceRef<W>,
{
    #[inline]
    fn sequence_a<G, T, AG>(&self, applicative: &AG, value: Higher<W, Higher<G, T>>) -> Higher<G, Higher<W, T>>
    where
        G: Witness,
        AG: Applicative<G>,
    {
        self.sequence_ref.sequence(applicative, value)
    }

    fn traverse_a<G, A, B, AG, F>(
        &self,
        applicative: &AG,
        value: Higher<W, A>,
        function: F,
    ) -> Higher<G, Higher<W, B>>
    where
        G: Witness,
        AG: Applicative<G>,
        F: FnMut(A) -> Higher<G, B>,
    {
        self.sequence_a(applicative, self.map(value, function))
    }
}

// GeneralTraverseByTraverse
delegate_functor!(GeneralTraverseByTraverse<W, Ap, Tr> via applicative where Ap: Applicative<W>);
delegate_unit!(GeneralTraverseByTraverse<W, Ap, Tr> via applicative where Ap: Applicative<W>);
delegate_applicative!(GeneralTraverseByTraverse<W, Ap, Tr> via applicative where Ap: Applicative<W>);

impl<W, Ap, Tr> Traverse<W> for GeneralTraverseByTraverse<W, Ap, Tr>
where
    W: Witness,
    Ap: Applicative<W>,
    Tr: TraverseRef<W>,
{
    fn sequence_a<G, T, AG>(&self, applicative: &AG, value: Higher<W, Higher<G, T>>) -> Higher<G, Higher<W, T>>
    where
        G: Witness,
        AG: Applicative<G>,
    {
        self.traverse_ref.traverse(applicative, value, |element| element)
    }

    #[inline]
    fn traverse_a<G, A, B, AG, F>(
        &self,
        applicative: &AG,
        value: Higher<W, A>,
        function: F,
    ) -> Higher<G, Higher<W, B>>
    where
        G: Witness,
        AG: Applicative<G>,
        F: FnMut(A) -> Higher<G, B>,
    {
        self.traverse_ref.traverse(applicative, value, function)
    }
}

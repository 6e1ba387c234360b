//! `Either3` - a lazy, right-biased union of three alternatives.
//!
//! An `Either3<L1, L2, R>` is `Left1`, `Left2` or `Right`. Transformations
//! (`map`, `flat_map`, `bimap`) on a right or not-yet-resolved value do not run
//! immediately: they are appended to a type-erased continuation queue, and the
//! whole chain is resolved by an iterative loop on the first observation. Long
//! chains therefore never grow the call stack.
//!
//! Transformations on a `Left1`/`Left2` value short-circuit and return the same
//! left value.
//!
//! Observing a value (`get`, `visit`, `is_right`, equality, hashing,
//! formatting...) resolves it once; the result is memoized in place.
//!
//! # Examples
//!
//! ```rust
//! use polykind::control::Either3;
//!
//! let mut chained: Either3<String, i32, i64> = Either3::right(0);
//! for _ in 0..100_000 {
//!     chained = chained.map(|value| value + 1);
//! }
//! assert_eq!(*chained.get().unwrap(), 100_000);
//!
//! let short_circuited = Either3::<&str, i32, i32>::left1("err")
//!     .map(|value| value + 1)
//!     .flat_map(|value| Either3::right(value * 2));
//! assert_eq!(short_circuited, Either3::left1("err"));
//! ```

use std::any::Any;
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::continuation_queue::{Arrow, ContinuationQueue, QueueStack};
use super::either::Either;
use super::error::NoSuchElementError;
use super::lazy::{Deferred, Lazy};
use super::try_type::Try;
use super::validation::Validation;
use crate::typeclass::Monoid;

// =============================================================================
// Type-erased resolution engine
// =============================================================================

/// A resolved branch with its payload erased.
enum Branch {
    Left1(Box<dyn Any>),
    Left2(Box<dyn Any>),
    Right(Box<dyn Any>),
}

/// An erased, possibly unresolved computation of a branch.
enum Node {
    Done(Branch),
    Suspend(Box<dyn FnOnce() -> Node>),
    Chain(Box<Node>, ContinuationQueue<Branch, Node>),
}

/// A node taken apart; `Node` has a drop impl, so its fields cannot be moved
/// out by pattern.
enum Parts {
    Done(Branch),
    Suspend(Box<dyn FnOnce() -> Node>),
    Chain(Node, ContinuationQueue<Branch, Node>),
}

impl Node {
    fn vacant() -> Self {
        Self::Done(Branch::Right(Box::new(())))
    }

    /// Moves the contents out, leaving a vacant `Done` behind.
    fn take_parts(&mut self) -> Parts {
        match self {
            Self::Done(branch) => Parts::Done(std::mem::replace(branch, Branch::Right(Box::new(())))),
            Self::Suspend(thunk) => {
                let vacant: Box<dyn FnOnce() -> Node> = Box::new(Node::vacant);
                Parts::Suspend(std::mem::replace(thunk, vacant))
            }
            Self::Chain(inner, queue) => Parts::Chain(
                std::mem::replace(&mut **inner, Node::vacant()),
                std::mem::take(queue),
            ),
        }
    }

    /// Appends one continuation step; O(1) when `self` is already a chain.
    fn then(mut self, arrow: Arrow<Branch, Self>) -> Self {
        if let Self::Chain(_, queue) = &mut self {
            queue.push_arrow(arrow);
            self
        } else {
            Self::Chain(Box::new(self), ContinuationQueue::singleton(arrow))
        }
    }

    /// Runs the computation to a branch without recursion.
    ///
    /// All loop state is local, so a continuation that resolves another
    /// `Either3` simply runs a second, independent loop.
    fn resolve(mut self) -> Branch {
        let mut stack = QueueStack::new();
        let mut steps: usize = 0;

        loop {
            steps += 1;
            self = match self.take_parts() {
                Parts::Done(branch) => match stack.pop() {
                    Some(arrow) => arrow.apply(branch),
                    None => {
                        debug_assert!(stack.is_exhausted());
                        tracing::trace!(steps, "resolved either3 chain");
                        return branch;
                    }
                },
                Parts::Suspend(thunk) => thunk(),
                Parts::Chain(inner, queue) => {
                    stack.push_queue(queue);
                    inner
                }
            };
        }
    }
}

thread_local! {
    /// Set while the outermost node drop on this thread is draining.
    static DRAINING: Cell<bool> = const { Cell::new(false) };

    /// Node contents reached during a drain, released by the outermost drop.
    static PENDING_DROPS: RefCell<Vec<Parts>> = const { RefCell::new(Vec::new()) };
}

/// Clears `DRAINING` even when a captured value panics while dropping.
struct DrainGuard;

impl Drop for DrainGuard {
    fn drop(&mut self) {
        DRAINING.with(|draining| draining.set(false));
    }
}

// A suspended thunk owns the `Either3` it was built from, so the derived drop
// glue would recurse once per nested `later` layer. Nested node contents are
// queued instead and released by the outermost drop in a loop.
impl Drop for Node {
    fn drop(&mut self) {
        if matches!(self, Self::Done(_)) {
            return;
        }
        let parts = self.take_parts();

        match DRAINING.try_with(Cell::get) {
            Ok(true) => PENDING_DROPS.with(|pending| pending.borrow_mut().push(parts)),
            Ok(false) => {
                DRAINING.with(|draining| draining.set(true));
                let _guard = DrainGuard;
                drop(parts);
                while let Some(next) = PENDING_DROPS.with(|pending| pending.borrow_mut().pop()) {
                    drop(next);
                }
            }
            // Thread-local storage is being torn down.
            Err(_) => drop(parts),
        }
    }
}

fn unbox<T: 'static>(value: Box<dyn Any>) -> T {
    *value
        .downcast::<T>()
        .expect("Type mismatch in Either3 continuation")
}

fn poisoned() -> ! {
    panic!("Either3 instance has been poisoned")
}

// =============================================================================
// Either3
// =============================================================================

#[derive(Clone, PartialEq, Eq, Hash)]
enum Terminal<L1, L2, R> {
    Left1(L1),
    Left2(L2),
    Right(R),
}

impl<L1, L2, R> Terminal<L1, L2, R> {
    const fn branch_name(&self) -> &'static str {
        match self {
            Self::Left1(_) => "left1",
            Self::Left2(_) => "left2",
            Self::Right(_) => "right",
        }
    }
}

enum State<L1, L2, R> {
    Done(Terminal<L1, L2, R>),
    Lazy(Node),
    /// Taken out for resolution; only observable after a panicking continuation.
    Resolving,
}

/// A right-biased union of `Left1(L1)`, `Left2(L2)` and `Right(R)` with lazy,
/// stack-safe composition.
///
/// Transformations require `'static` types because pending steps are stored
/// type-erased until resolution.
pub struct Either3<L1, L2, R> {
    state: RefCell<State<L1, L2, R>>,
}

impl<L1, L2, R> Either3<L1, L2, R> {
    const fn from_terminal(terminal: Terminal<L1, L2, R>) -> Self {
        Self {
            state: RefCell::new(State::Done(terminal)),
        }
    }

    /// A `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::from_terminal(Terminal::Right(value))
    }

    /// A `Left1` value.
    #[inline]
    pub const fn left1(value: L1) -> Self {
        Self::from_terminal(Terminal::Left1(value))
    }

    /// A `Left2` value.
    #[inline]
    pub const fn left2(value: L2) -> Self {
        Self::from_terminal(Terminal::Left2(value))
    }

    /// Whether the value is already resolved. Does not force resolution.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        matches!(&*self.state.borrow(), State::Done(_))
    }
}

impl<L1: 'static, L2: 'static, R: 'static> Either3<L1, L2, R> {
    const fn lazy(node: Node) -> Self {
        Self {
            state: RefCell::new(State::Lazy(node)),
        }
    }

    fn erase(state: State<L1, L2, R>) -> Node {
        match state {
            State::Done(Terminal::Left1(value)) => Node::Done(Branch::Left1(Box::new(value))),
            State::Done(Terminal::Left2(value)) => Node::Done(Branch::Left2(Box::new(value))),
            State::Done(Terminal::Right(value)) => Node::Done(Branch::Right(Box::new(value))),
            State::Lazy(node) => node,
            State::Resolving => poisoned(),
        }
    }

    fn restore(branch: Branch) -> Terminal<L1, L2, R> {
        match branch {
            Branch::Left1(value) => Terminal::Left1(unbox(value)),
            Branch::Left2(value) => Terminal::Left2(unbox(value)),
            Branch::Right(value) => Terminal::Right(unbox(value)),
        }
    }

    fn into_node(self) -> Node {
        Self::erase(self.state.into_inner())
    }

    fn into_terminal(self) -> Terminal<L1, L2, R> {
        match self.state.into_inner() {
            State::Done(terminal) => terminal,
            State::Lazy(node) => Self::restore(node.resolve()),
            State::Resolving => poisoned(),
        }
    }

    fn force(&self) {
        let is_lazy = match &*self.state.borrow() {
            State::Done(_) => false,
            State::Lazy(_) => true,
            State::Resolving => poisoned(),
        };
        if !is_lazy {
            return;
        }
        let State::Lazy(node) = std::mem::replace(&mut *self.state.borrow_mut(), State::Resolving) else {
            return;
        };
        let terminal = Self::restore(node.resolve());
        *self.state.borrow_mut() = State::Done(terminal);
    }

    fn terminal(&self) -> Ref<'_, Terminal<L1, L2, R>> {
        self.force();
        Ref::map(self.state.borrow(), |state| match state {
            State::Done(terminal) => terminal,
            State::Lazy(_) | State::Resolving => poisoned(),
        })
    }

    // -------------------------------------------------------------------------
    // Factories
    // -------------------------------------------------------------------------

    /// Defers construction of the whole value until it is observed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polykind::control::Either3;
    ///
    /// let deferred: Either3<(), (), i32> = Either3::later(|| Either3::right(5));
    /// assert!(!deferred.is_resolved());
    /// assert!(deferred.is_right());
    /// ```
    pub fn later<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::lazy(Node::Suspend(Box::new(move || supplier().into_node())))
    }

    /// A `Right` whose value comes from a lazy computation.
    pub fn right_eval<F>(value: Lazy<R, F>) -> Self
    where
        F: FnOnce() -> R + 'static,
    {
        Self::lazy(Node::Suspend(Box::new(move || {
            Node::Done(Branch::Right(Box::new(value.evaluate())))
        })))
    }

    /// A `Left1` whose value comes from a lazy computation.
    pub fn left1_eval<F>(value: Lazy<L1, F>) -> Self
    where
        F: FnOnce() -> L1 + 'static,
    {
        Self::lazy(Node::Suspend(Box::new(move || {
            Node::Done(Branch::Left1(Box::new(value.evaluate())))
        })))
    }

    /// A `Left2` whose value comes from a lazy computation.
    pub fn left2_eval<F>(value: Lazy<L2, F>) -> Self
    where
        F: FnOnce() -> L2 + 'static,
    {
        Self::lazy(Node::Suspend(Box::new(move || {
            Node::Done(Branch::Left2(Box::new(value.evaluate())))
        })))
    }

    // -------------------------------------------------------------------------
    // Observations
    // -------------------------------------------------------------------------

    /// Returns `true` for `Right`.
    pub fn is_right(&self) -> bool {
        matches!(&*self.terminal(), Terminal::Right(_))
    }

    /// Returns `true` for `Left1`.
    pub fn is_left1(&self) -> bool {
        matches!(&*self.terminal(), Terminal::Left1(_))
    }

    /// Returns `true` for `Left2`.
    pub fn is_left2(&self) -> bool {
        matches!(&*self.terminal(), Terminal::Left2(_))
    }

    /// Borrows the right value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] when the value is `Left1` or `Left2`.
    pub fn get(&self) -> Result<Ref<'_, R>, NoSuchElementError> {
        Ref::filter_map(self.terminal(), |terminal| match terminal {
            Terminal::Right(value) => Some(value),
            Terminal::Left1(_) | Terminal::Left2(_) => None,
        })
        .map_err(|terminal| NoSuchElementError::new("Either3::get", terminal.branch_name()))
    }

    /// Consumes the value and returns the right value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] when the value is `Left1` or `Left2`.
    pub fn into_right(self) -> Result<R, NoSuchElementError> {
        match self.into_terminal() {
            Terminal::Right(value) => Ok(value),
            other => Err(NoSuchElementError::new("Either3::into_right", other.branch_name())),
        }
    }

    /// The right value, if present.
    pub fn to_option(self) -> Option<R> {
        self.into_right().ok()
    }

    /// Iterates over a clone of the right value, if present.
    pub fn iter(&self) -> std::option::IntoIter<R>
    where
        R: Clone,
    {
        self.get().ok().map(|value| R::clone(&value)).into_iter()
    }

    /// Collapses the three branches into one value.
    pub fn visit<T, A, B, C>(self, left1: A, left2: B, right: C) -> T
    where
        A: FnOnce(L1) -> T,
        B: FnOnce(L2) -> T,
        C: FnOnce(R) -> T,
    {
        match self.into_terminal() {
            Terminal::Left1(value) => left1(value),
            Terminal::Left2(value) => left2(value),
            Terminal::Right(value) => right(value),
        }
    }

    /// The right value lazily filtered by `predicate`. Left branches are always absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polykind::control::Either3;
    ///
    /// let value: Either3<(), (), i32> = Either3::right(10);
    /// assert_eq!(value.filter(|x| *x > 5).evaluate(), Some(10));
    ///
    /// let left: Either3<(), (), i32> = Either3::left1(());
    /// assert_eq!(left.filter(|_| true).evaluate(), None);
    /// ```
    pub fn filter<P>(self, predicate: P) -> Deferred<Option<R>>
    where
        P: FnOnce(&R) -> bool + 'static,
    {
        Lazy::deferred(move || self.to_option().filter(predicate))
    }

    // -------------------------------------------------------------------------
    // Transformations
    // -------------------------------------------------------------------------

    /// Lazily maps the right value.
    pub fn map<R2, F>(self, function: F) -> Either3<L1, L2, R2>
    where
        R2: 'static,
        F: FnOnce(R) -> R2 + 'static,
    {
        match self.state.into_inner() {
            State::Done(Terminal::Left1(value)) => Either3::left1(value),
            State::Done(Terminal::Left2(value)) => Either3::left2(value),
            state => Either3::lazy(Self::erase(state).then(Box::new(move |branch: Branch| match branch {
                Branch::Right(value) => Node::Done(Branch::Right(Box::new(function(unbox::<R>(value))))),
                left => Node::Done(left),
            }))),
        }
    }

    /// Lazily chains a step producing anything convertible to an `Either3`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polykind::control::Either3;
    ///
    /// let value: Either3<i32, (), i32> = Either3::right(2);
    /// assert_eq!(value.flat_map(|x| Some(x * 10)).into_right().ok(), Some(20));
    ///
    /// let absent: Either3<i32, (), i32> = Either3::right(2);
    /// assert!(absent.flat_map(|_| None::<i32>).is_left1());
    /// ```
    pub fn flat_map<R2, M, F>(self, function: F) -> Either3<L1, L2, R2>
    where
        R2: 'static,
        M: IntoEither3<L1, L2, R2>,
        F: FnOnce(R) -> M + 'static,
    {
        match self.state.into_inner() {
            State::Done(Terminal::Left1(value)) => Either3::left1(value),
            State::Done(Terminal::Left2(value)) => Either3::left2(value),
            state => Either3::lazy(Self::erase(state).then(Box::new(move |branch: Branch| match branch {
                Branch::Right(value) => function(unbox::<R>(value)).into_either3().into_node(),
                left => Node::Done(left),
            }))),
        }
    }

    /// Lazily maps the `Left2` and `Right` values. `Left1` passes through.
    pub fn bimap<L2b, R2, F, G>(self, left2_function: F, right_function: G) -> Either3<L1, L2b, R2>
    where
        L2b: 'static,
        R2: 'static,
        F: FnOnce(L2) -> L2b + 'static,
        G: FnOnce(R) -> R2 + 'static,
    {
        match self.state.into_inner() {
            State::Done(Terminal::Left1(value)) => Either3::left1(value),
            state => Either3::lazy(Self::erase(state).then(Box::new(move |branch: Branch| {
                Node::Done(match branch {
                    Branch::Left2(value) => Branch::Left2(Box::new(left2_function(unbox::<L2>(value)))),
                    Branch::Right(value) => Branch::Right(Box::new(right_function(unbox::<R>(value)))),
                    left1 @ Branch::Left1(_) => left1,
                })
            }))),
        }
    }

    /// Lazily runs `action` on the right value, keeping it unchanged.
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&R) + 'static,
    {
        self.map(move |value| {
            action(&value);
            value
        })
    }

    /// Exchanges `Right` and `Left1`. Resolves immediately.
    pub fn swap1(self) -> Either3<R, L2, L1> {
        match self.into_terminal() {
            Terminal::Left1(value) => Either3::right(value),
            Terminal::Left2(value) => Either3::left2(value),
            Terminal::Right(value) => Either3::left1(value),
        }
    }

    /// Exchanges `Right` and `Left2`. Resolves immediately.
    pub fn swap2(self) -> Either3<L1, R, L2> {
        match self.into_terminal() {
            Terminal::Left1(value) => Either3::left1(value),
            Terminal::Left2(value) => Either3::right(value),
            Terminal::Right(value) => Either3::left2(value),
        }
    }

    // -------------------------------------------------------------------------
    // Sequences
    // -------------------------------------------------------------------------

    /// Collects every right value, or returns the first left encountered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polykind::control::Either3;
    ///
    /// let all: Vec<Either3<&str, (), i32>> = vec![Either3::right(1), Either3::right(2)];
    /// assert_eq!(Either3::sequence(all).into_right().ok(), Some(vec![1, 2]));
    ///
    /// let mixed = vec![Either3::right(1), Either3::left1("bad"), Either3::left2(())];
    /// assert!(Either3::<&str, (), i32>::sequence(mixed).is_left1());
    /// ```
    pub fn sequence<I>(values: I) -> Either3<L1, L2, Vec<R>>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::traverse(values, |value| value)
    }

    /// Maps every right value with `function` and collects them, or returns
    /// the first left encountered.
    pub fn traverse<R2, I, F>(values: I, mut function: F) -> Either3<L1, L2, Vec<R2>>
    where
        I: IntoIterator<Item = Self>,
        F: FnMut(R) -> R2,
    {
        let values = values.into_iter();
        let mut collected = Vec::with_capacity(values.size_hint().0);
        for value in values {
            match value.into_terminal() {
                Terminal::Right(value) => collected.push(function(value)),
                Terminal::Left1(value) => return Either3::left1(value),
                Terminal::Left2(value) => return Either3::left2(value),
            }
        }
        Either3::right(collected)
    }

    /// Reduces every right value with `monoid`, or returns the first left encountered.
    pub fn accumulate<I>(monoid: &Monoid<R>, values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        R: Clone,
    {
        match Self::sequence(values).into_terminal() {
            Terminal::Right(collected) => Self::right(monoid.reduce(collected)),
            Terminal::Left1(value) => Self::left1(value),
            Terminal::Left2(value) => Self::left2(value),
        }
    }
}

impl<L1: Default + 'static, L2: 'static, R: 'static> Either3<L1, L2, R> {
    /// `Right` for a present value, otherwise `Left1(L1::default())`.
    pub fn from_option(value: Option<R>) -> Self {
        value.map_or_else(|| Self::left1(L1::default()), Self::right)
    }

    /// `Right` holding the first element, otherwise `Left1(L1::default())`.
    pub fn from_iterable<I>(values: I) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        Self::from_option(values.into_iter().next())
    }

    /// Lazily chains a step producing an iterable; its first element becomes
    /// the right value, an empty iterable becomes `Left1(L1::default())`.
    pub fn flat_map_iterable<R2, I, F>(self, function: F) -> Either3<L1, L2, R2>
    where
        R2: 'static,
        I: IntoIterator<Item = R2>,
        F: FnOnce(R) -> I + 'static,
    {
        self.flat_map(move |value| function(value).into_iter().next())
    }

    /// Projects onto a two-branch [`Either`]; `Left2` becomes `Left(L1::default())`.
    pub fn to_either(self) -> Either<L1, R> {
        match self.into_terminal() {
            Terminal::Left1(value) => Either::Left(value),
            Terminal::Left2(_) => Either::Left(L1::default()),
            Terminal::Right(value) => Either::Right(value),
        }
    }
}

impl<T: 'static> Either3<T, T, T> {
    /// Applies `function` to whichever value is present.
    pub fn visit_any<U, F>(self, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self.into_terminal() {
            Terminal::Left1(value) | Terminal::Left2(value) | Terminal::Right(value) => function(value),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Conversion into an [`Either3`], used by [`Either3::flat_map`].
///
/// Containers that may be empty become `Right` when a value is present and
/// `Left1(L1::default())` otherwise.
pub trait IntoEither3<L1, L2, R> {
    /// Performs the conversion.
    fn into_either3(self) -> Either3<L1, L2, R>;
}

impl<L1, L2, R> IntoEither3<L1, L2, R> for Either3<L1, L2, R> {
    #[inline]
    fn into_either3(self) -> Self {
        self
    }
}

impl<L1: Default, L2, R> IntoEither3<L1, L2, R> for Option<R> {
    fn into_either3(self) -> Either3<L1, L2, R> {
        self.map_or_else(|| Either3::left1(L1::default()), Either3::right)
    }
}

impl<L1: Default, L2, R> IntoEither3<L1, L2, R> for Try<R> {
    fn into_either3(self) -> Either3<L1, L2, R> {
        self.into_option().into_either3()
    }
}

impl<L1: Default, L2, E, R> IntoEither3<L1, L2, R> for Validation<E, R> {
    fn into_either3(self) -> Either3<L1, L2, R> {
        self.into_result().ok().into_either3()
    }
}

impl<L1, L2, R> IntoEither3<L1, L2, R> for Either<L1, R> {
    fn into_either3(self) -> Either3<L1, L2, R> {
        self.fold(Either3::left1, Either3::right)
    }
}

impl<L1, L2, R> From<Either<L1, R>> for Either3<L1, L2, R> {
    fn from(either: Either<L1, R>) -> Self {
        either.into_either3()
    }
}

impl<L1: 'static, L2: 'static, R: 'static> IntoIterator for Either3<L1, L2, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<L1, L2, R> Clone for Either3<L1, L2, R>
where
    L1: Clone + 'static,
    L2: Clone + 'static,
    R: Clone + 'static,
{
    fn clone(&self) -> Self {
        Self::from_terminal(self.terminal().clone())
    }
}

impl<L1, L2, R> PartialEq for Either3<L1, L2, R>
where
    L1: PartialEq + 'static,
    L2: PartialEq + 'static,
    R: PartialEq + 'static,
{
    fn eq(&self, other: &Self) -> bool {
        *self.terminal() == *other.terminal()
    }
}

impl<L1, L2, R> Eq for Either3<L1, L2, R>
where
    L1: Eq + 'static,
    L2: Eq + 'static,
    R: Eq + 'static,
{
}

impl<L1, L2, R> Hash for Either3<L1, L2, R>
where
    L1: Hash + 'static,
    L2: Hash + 'static,
    R: Hash + 'static,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.terminal().hash(state);
    }
}

impl<L1, L2, R> fmt::Debug for Either3<L1, L2, R>
where
    L1: fmt::Debug + 'static,
    L2: fmt::Debug + 'static,
    R: fmt::Debug + 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.terminal() {
            Terminal::Left1(value) => formatter.debug_tuple("Left1").field(value).finish(),
            Terminal::Left2(value) => formatter.debug_tuple("Left2").field(value).finish(),
            Terminal::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L1, L2, R> fmt::Display for Either3<L1, L2, R>
where
    L1: fmt::Display + 'static,
    L2: fmt::Display + 'static,
    R: fmt::Display + 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.terminal() {
            Terminal::Left1(value) => write!(formatter, "Either3.left1[{value}]"),
            Terminal::Left2(value) => write!(formatter, "Either3.left2[{value}]"),
            Terminal::Right(value) => write!(formatter, "Either3.right[{value}]"),
        }
    }
}

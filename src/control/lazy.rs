//! Lazy evaluation with memoization.
//!
//! [`Lazy`] is the deferred "Eval" value accepted by the
//! [`Either3`](super::Either3) `*_eval` factories and returned by
//! [`Either3::filter`](super::Either3::filter).
//!
//! # Examples
//!
//! ```rust
//! use polykind::control::Lazy;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let lazy = Lazy::new(|| {
//!     calls.set(calls.get() + 1);
//!     42
//! });
//!
//! assert_eq!(calls.get(), 0);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

use super::error::PoisonedError;

/// The internal state of a `Lazy` value.
#[derive(Debug)]
enum LazyState<T, F> {
    Uninit(F),
    Init(T),
    Poisoned,
}

/// A lazily evaluated value with memoization.
///
/// The initializer runs at most once, on the first call to [`Lazy::force`].
/// If it panics the value becomes poisoned and every later access panics too.
///
/// This type is NOT thread-safe.
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

/// A lazy value whose initializer is boxed, so differently built lazies share one type.
pub type Deferred<T> = Lazy<T, Box<dyn FnOnce() -> T>>;

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value; `initializer` is not called yet.
    #[inline]
    pub const fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Forces evaluation and returns a reference to the memoized value.
    ///
    /// # Panics
    ///
    /// Panics if the initializer panics, or if it panicked on an earlier call.
    pub fn force(&self) -> Ref<'_, T> {
        let needs_initialization = {
            let state = self.state.borrow();
            match &*state {
                LazyState::Init(_) => false,
                LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
                LazyState::Uninit(_) => true,
            }
        };

        if needs_initialization {
            self.initialize();
        }

        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => value,
            _ => panic!("Lazy should be initialized at this point"),
        })
    }

    fn initialize(&self) {
        let mut state = self.state.borrow_mut();
        let LazyState::Uninit(initializer) = std::mem::replace(&mut *state, LazyState::Poisoned) else {
            return;
        };
        *state = LazyState::Init(initializer());
    }

    /// Consumes the lazy value, running the initializer if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PoisonedError`] if an earlier initialization panicked.
    pub fn into_inner(self) -> Result<T, PoisonedError> {
        match self.state.into_inner() {
            LazyState::Init(value) => Ok(value),
            LazyState::Uninit(initializer) => Ok(initializer()),
            LazyState::Poisoned => Err(PoisonedError),
        }
    }

    /// Consumes the lazy value, running the initializer if needed.
    ///
    /// # Panics
    ///
    /// Panics if an earlier initialization panicked.
    pub fn evaluate(self) -> T {
        match self.into_inner() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Defers `function` until the result is forced.
    pub fn map<U, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        G: FnOnce(T) -> U,
    {
        Lazy::new(move || function(self.evaluate()))
    }
}

impl<T> Lazy<T, fn() -> T> {
    /// Creates an already-evaluated lazy value.
    #[inline]
    pub const fn new_with_value(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Init(value)),
        }
    }

    /// Alias for [`Lazy::new_with_value`].
    #[inline]
    pub const fn pure(value: T) -> Self {
        Self::new_with_value(value)
    }
}

impl<T: 'static> Deferred<T> {
    /// Boxes `initializer` into a [`Deferred`].
    pub fn deferred<F>(initializer: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self::new(Box::new(initializer))
    }
}

impl<T, F> Lazy<T, F> {
    /// Whether the value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Whether a previous initialization panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}

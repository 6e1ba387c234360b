//! Identity wrapper type - the always-present container.
//!
//! `Identity` holds exactly one value, so it is the canonical witness for
//! instances that need a total `extract`, such as [`Comonad`](super::Comonad).

/// Wraps a single value without adding any behaviour.
///
/// # Examples
///
/// ```rust
/// use polykind::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.map(|value| value + 1).into_inner(), 43);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies `function` to the wrapped value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Applies a function returning another `Identity`.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

impl<A> IntoIterator for Identity<A> {
    type Item = A;
    type IntoIter = std::iter::Once<A>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.0)
    }
}

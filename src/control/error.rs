//! Error types for the control structures.

use std::fmt;

/// Raised when a value is requested from a container that does not hold one.
///
/// Returned by [`Either3::get`](super::Either3::get) on a left branch, by
/// `from_iterable` constructors given an empty iterable, and as the cause of a
/// [`Try`](super::Try) whose `filter` predicate did not hold.
///
/// # Examples
///
/// ```rust
/// use polykind::control::NoSuchElementError;
///
/// let error = NoSuchElementError::new("Either3::get", "left1");
/// assert_eq!(format!("{error}"), "Either3::get: no element present (left1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoSuchElementError {
    /// The operation that found no element.
    pub operation: &'static str,
    /// What was found instead.
    pub found: &'static str,
}

impl NoSuchElementError {
    /// Creates a new error for `operation`, which observed `found`.
    #[must_use]
    pub const fn new(operation: &'static str, found: &'static str) -> Self {
        Self { operation, found }
    }
}

impl fmt::Display for NoSuchElementError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: no element present ({})", self.operation, self.found)
    }
}

impl std::error::Error for NoSuchElementError {}

/// Raised when a [`Lazy`](super::Lazy) value is consumed after its
/// initializer panicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoisonedError;

impl fmt::Display for PoisonedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("lazy value has been poisoned by a panicking initializer")
    }
}

impl std::error::Error for PoisonedError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn no_such_element_display_names_operation() {
        let error = NoSuchElementError::new("Try::filter", "predicate rejected value");
        assert_eq!(error.to_string(), "Try::filter: no element present (predicate rejected value)");
    }

    #[rstest]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&NoSuchElementError::new("op", "none"));
        assert_error(&PoisonedError);
    }
}

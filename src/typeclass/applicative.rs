//! Applicative type class - applying wrapped functions to wrapped values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! ap(unit(|x| x), v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! ap(unit(f), unit(x)) == unit(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polykind::instances::list;
//! use polykind::typeclass::Applicative;
//!
//! let functions = vec![|x: i32| x * 2, |x: i32| x * 2, |x: i32| x * 2];
//! let result = list::zipping_applicative().ap(functions, vec![1, 2, 3]);
//! assert_eq!(result, vec![2, 4, 6]);
//! ```

use super::functor::{Functor, Unit};
use super::higher::{Higher, Witness};

/// A type class for witnesses supporting application of a wrapped function
/// to a wrapped value.
///
/// `ap` is where a foreign type's own combination semantics live: an
/// accumulating type merges failures here, a short-circuiting one keeps the
/// first.
pub trait Applicative<W: Witness>: Functor<W> + Unit<W> {
    /// Applies the function(s) inside `function` to the value(s) inside `value`.
    fn ap<A, B, F>(&self, function: Higher<W, F>, value: Higher<W, A>) -> Higher<W, B>
    where
        F: FnOnce(A) -> B;

    /// Applies a wrapped two-argument function to two wrapped values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polykind::instances::option;
    /// use polykind::typeclass::{Applicative, Unit};
    ///
    /// let applicative = option::applicative();
    /// let add = applicative.unit(|x: i32, y: i32| x + y);
    /// assert_eq!(applicative.ap_bi(add, Some(1), Some(2)), Some(3));
    /// ```
    fn ap_bi<A, B, C, F>(
        &self,
        function: Higher<W, F>,
        first: Higher<W, A>,
        second: Higher<W, B>,
    ) -> Higher<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        let curried = self.map(function, |function: F| {
            move |first_value: A| move |second_value: B| function(first_value, second_value)
        });
        self.ap(self.ap(curried, first), second)
    }

    /// Combines two wrapped values with a plain binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polykind::instances::list;
    /// use polykind::typeclass::Applicative;
    ///
    /// let sums = list::zipping_applicative().map2(vec![1, 2], vec![10, 20], |x, y| x + y);
    /// assert_eq!(sums, vec![11, 22]);
    /// ```
    fn map2<A, B, C, F>(&self, first: Higher<W, A>, second: Higher<W, B>, function: F) -> Higher<W, C>
    where
        F: FnOnce(A, B) -> C + Clone,
    {
        let partially_applied = self.map(first, |first_value: A| {
            let function = function.clone();
            move |second_value: B| function(first_value, second_value)
        });
        self.ap(partially_applied, second)
    }
}

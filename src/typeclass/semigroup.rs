//! Semigroup type class - associative binary operations.
//!
//! `Semigroup` is how accumulating foreign types (such as
//! [`Validation`](crate::control::Validation)) merge two failures into one,
//! and how [`Monoid::from_semigroup`](super::Monoid::from_semigroup) obtains its
//! combine step.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use polykind::typeclass::Semigroup;
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!(String::from("ab").combine(String::from("cd")), "abcd");
//! ```

use super::Identity;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines every element of the iterator, left to right.
    ///
    /// Returns `None` for an empty iterator since a semigroup has no identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polykind::typeclass::Semigroup;
    ///
    /// let joined = String::reduce_all(vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(joined, Some("ab".to_string()));
    /// assert_eq!(String::reduce_all(Vec::<String>::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left @ Some(_), None) => left,
            (None, right) => right,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Identity(self.0.combine(other.0))
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!("foo".to_string().combine("bar".to_string()), "foobar");
    }

    #[rstest]
    fn vec_combine_preserves_order() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case(Some(vec![1]), Some(vec![2]), Some(vec![1, 2]))]
    #[case(Some(vec![1]), None, Some(vec![1]))]
    #[case(None, Some(vec![2]), Some(vec![2]))]
    #[case(None, None, None)]
    fn option_combine_lifts_inner(
        #[case] left: Option<Vec<i32>>,
        #[case] right: Option<Vec<i32>>,
        #[case] expected: Option<Vec<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn tuple_combine_is_componentwise() {
        let left = (String::from("a"), vec![1]);
        let right = (String::from("b"), vec![2]);
        assert_eq!(left.combine(right), (String::from("ab"), vec![1, 2]));
    }

    proptest! {
        #[test]
        fn prop_vec_associativity(a in any::<Vec<u8>>(), b in any::<Vec<u8>>(), c in any::<Vec<u8>>()) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_string_associativity(a in ".*", b in ".*", c in ".*") {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}

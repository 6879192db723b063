//! Lazy producer of the natural numbers `1..=n`.

use std::iter::FusedIterator;

/// Yields `1, 2, ..., n` one value per call to `next`.
///
/// The state is just how many values have been produced so far, so nothing
/// is precomputed and the producer never overflows, even for `u64::MAX`.
/// A fresh sequence needs a fresh [`natural_range`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalRange {
    produced: u64,
    n: u64,
}

/// Starts a new lazy sequence over `1..=n`.
///
/// ```
/// use tour_demos::utils::natural_range::natural_range;
///
/// assert_eq!(natural_range(3).collect::<Vec<_>>(), [1, 2, 3]);
/// assert_eq!(natural_range(0).next(), None);
/// ```
pub fn natural_range(n: u64) -> NaturalRange {
    NaturalRange { produced: 0, n }
}

impl NaturalRange {
    /// Values still to come.
    pub fn remaining(&self) -> u64 {
        self.n - self.produced
    }
}

impl Iterator for NaturalRange {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.produced == self.n {
            return None;
        }
        self.produced += 1;
        Some(self.produced)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for NaturalRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_one_through_n() {
        assert_eq!(natural_range(3).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(natural_range(1).collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn test_zero_is_empty() {
        let mut range = natural_range(0);
        assert_eq!(range.remaining(), 0);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn test_stays_exhausted() {
        let mut range = natural_range(2);
        assert_eq!(range.next(), Some(1));
        assert_eq!(range.next(), Some(2));
        assert_eq!(range.next(), None);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = natural_range(3);
        first.next();

        let second = natural_range(3);
        assert_eq!(first.collect::<Vec<_>>(), [2, 3]);
        assert_eq!(second.collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_huge_bound_is_lazy() {
        let mut range = natural_range(u64::MAX);
        assert_eq!(range.next(), Some(1));
        assert_eq!(range.remaining(), u64::MAX - 1);
    }
}

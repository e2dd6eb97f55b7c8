use std::iter::FusedIterator;

use crate::vector::Vector;

use super::CoordinateRange;

/// Lazily yields the vectors of a [`CoordinateRange`], from either end.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    range: &'a CoordinateRange,
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(range: &'a CoordinateRange) -> Self {
        Self {
            range,
            front: 0,
            back: range.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Vector;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let v = self.range.at_logical(self.front);
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        Some(self.range.at_logical(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CoordinateRange {
    type Item = Vector;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

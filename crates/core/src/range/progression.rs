use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// A finite arithmetic progression of integers:
/// `start` is inclusive, `stop` is exclusive and `step` may be negative, but never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Progression {
    start: i64,
    stop: i64,
    step: i64,
}

impl Progression {
    pub const EMPTY: Progression = Progression::new(0, 0, 1);

    pub const fn new(start: i64, stop: i64, step: i64) -> Self {
        debug_assert!(step != 0);
        Self { start, stop, step }
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn stop(&self) -> i64 {
        self.stop
    }

    pub const fn step(&self) -> i64 {
        self.step
    }

    pub fn len(&self) -> usize {
        let span = if self.step > 0 {
            self.stop - self.start
        } else {
            self.start - self.stop
        };

        if span <= 0 {
            0
        } else {
            ((span - 1) as u64 / self.step.unsigned_abs() + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at the given position. Doesn't check bounds.
    #[inline]
    pub fn get(&self, index: usize) -> i64 {
        self.start + self.step * index as i64
    }

    /// Position of `value` inside this progression, if it is a member.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        let offset = value - self.start;
        if offset % self.step != 0 {
            return None;
        }

        let index = offset / self.step;
        if index >= 0 && (index as usize) < self.len() {
            Some(index as usize)
        } else {
            None
        }
    }

    /// Returns the only member of this progression, or [`None`] if it has zero or many.
    pub fn single(&self) -> Option<i64> {
        (self.len() == 1).then_some(self.start)
    }

    /// Intersects an ascending progression with a contiguous range.
    pub fn restrict(&self, bounds: Range<i64>) -> Progression {
        debug_assert!(self.step > 0);

        let start = if self.start >= bounds.start {
            self.start
        } else {
            let skip = (bounds.start - self.start + self.step - 1) / self.step;
            self.start + skip * self.step
        };

        Progression::new(start, self.stop.min(bounds.end), self.step)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = i64> + ExactSizeIterator + '_ {
        (0..self.len()).map(|i| self.get(i))
    }
}

/// The inverse of a modulo operation.
///
/// Returns every numerator `n` within `within` such that `n mod denom == result`. `within` is
/// expected to hold non-negative numbers. The result is empty when `result` isn't in `[0, denom)`.
pub fn rmod(denom: i64, result: i64, within: Range<i64>) -> Result<Progression, RangeError> {
    if denom <= 0 {
        return Err(RangeError::InvalidDenominator(denom));
    }

    if !(0..denom).contains(&result) || within.is_empty() {
        return Ok(Progression::EMPTY);
    }

    let start = within.start + (result - within.start.rem_euclid(denom)).rem_euclid(denom);
    Ok(Progression::new(start, within.end, denom))
}

/// The inverse of an integer division.
///
/// Returns every numerator `n` such that `n div denom == result`.
pub fn rdiv(denom: i64, result: i64) -> Result<Range<i64>, RangeError> {
    if denom <= 0 {
        return Err(RangeError::InvalidDenominator(denom));
    }

    let start = result * denom;
    Ok(start..start + denom)
}

/// A lazy view over a sub sequence of raw indices, used to slice ranges without copying them.
///
/// Windows with less than two elements are normalized, so equal windows compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Window {
    first: i64,
    step: i64,
    len: usize,
}

impl Window {
    pub const EMPTY: Window = Window {
        first: 0,
        step: 1,
        len: 0,
    };

    pub fn new(first: i64, step: i64, len: usize) -> Self {
        match len {
            0 => Self::EMPTY,
            1 => Self {
                first,
                step: 1,
                len,
            },
            _ => Self { first, step, len },
        }
    }

    /// The identity window over `len` raw indices.
    pub fn full(len: usize) -> Self {
        Self::new(0, 1, len)
    }

    pub fn first(&self) -> i64 {
        self.first
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exclusive end, in the same sense as a slice `[first:stop:step]`.
    pub fn stop(&self) -> i64 {
        self.get(self.len)
    }

    /// Last raw index covered, if any.
    pub fn last(&self) -> Option<i64> {
        self.len.checked_sub(1).map(|i| self.get(i))
    }

    #[inline]
    pub fn get(&self, index: usize) -> i64 {
        self.first + self.step * index as i64
    }

    pub fn index_of(&self, raw: i64) -> Option<usize> {
        Progression::new(self.first, self.stop(), self.step).index_of(raw)
    }

    /// Narrows this window by the logical positions in `logical`, which must lie within
    /// `[0, len)`.
    pub fn compose(&self, logical: Progression) -> Window {
        match logical.len() {
            0 => Window::EMPTY,
            1 => Window::new(self.get(logical.start() as usize), 1, 1),
            // Every composed position lies inside this window, so the product fits.
            len => Window::new(
                self.get(logical.start() as usize),
                self.step * logical.step(),
                len,
            ),
        }
    }
}

/// Resolves `[start:stop:step]` slice bounds against a sequence of `len` items, clamping them
/// the way sequence slicing does.
///
/// Returns the logical positions selected, as a progression over `[0, len)`.
pub(crate) fn resolve_slice(
    len: usize,
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
) -> Result<Progression, RangeError> {
    let step = step.unwrap_or(1) as i64;
    if step == 0 {
        return Err(RangeError::SliceStepZero);
    }

    let len = len as i64;
    let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

    let clamp = |bound: Option<isize>, default: i64| match bound {
        None => default,
        Some(b) if b < 0 => (b as i64 + len).max(lower),
        Some(b) => (b as i64).min(upper),
    };

    let start = clamp(start, if step < 0 { upper } else { lower });
    let stop = clamp(stop, if step < 0 { lower } else { upper });

    Ok(Progression::new(start, stop, step))
}

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{error::RangeError, vector::Vector};

mod iter;
mod order;
mod progression;

pub use iter::Iter;
pub use order::Order;
pub use progression::{Progression, Window, rdiv, rmod};

use progression::resolve_slice;

/// A lazy, sliceable sequence of every vector in the 3d box `[start, stop)`, walking `step` at
/// a time on each axis.
///
/// Nothing is materialized: the range only stores its arguments and computes elements, indices
/// and sub ranges on demand, in constant time. The [`Order`] decides which axis is incremented
/// first, so it also decides in which order the vectors are yielded.
///
/// ```
/// # use voxlink_core::{CoordinateRange, Order, Vector};
/// let range = CoordinateRange::with_step(Vector::ZERO, Vector::splat(2), Vector::ONE, Order::Xyz)?;
/// assert_eq!(range.len(), 8);
/// assert_eq!(range.get(1)?, Vector::new(1, 0, 0));
/// assert_eq!(range.index(&Vector::new(0, 1, 0))?, 2);
/// # Ok::<(), voxlink_core::RangeError>(())
/// ```
///
/// Since no vector can be yielded twice, containment, index lookup and counting never need to
/// walk the range.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RangeDesc", into = "RangeDesc")
)]
pub struct CoordinateRange {
    start: Vector,
    stop: Vector,
    step: Vector,
    order: Order,
    /// One progression per axis, from the fastest varying to the slowest.
    axes: [Progression; 3],
    /// Length ignoring the window.
    full_len: usize,
    window: Option<Window>,
}

impl CoordinateRange {
    /// Range from `start` (inclusive) to `stop` (exclusive) with unit step and default order.
    pub fn new(start: Vector, stop: Vector) -> Result<Self, RangeError> {
        Self::with_step(start, stop, Vector::ONE, Order::default())
    }

    /// Same as [`CoordinateRange::new`] starting at the origin.
    pub fn from_stop(stop: Vector) -> Result<Self, RangeError> {
        Self::new(Vector::ZERO, stop)
    }

    /// Fails if any `step` component is zero.
    pub fn with_step(
        start: Vector,
        stop: Vector,
        step: Vector,
        order: Order,
    ) -> Result<Self, RangeError> {
        if step.x == 0 || step.y == 0 || step.z == 0 {
            return Err(RangeError::ZeroStep(step));
        }

        let axes = order.axes().map(|axis| {
            Progression::new(
                start.axis(axis) as i64,
                stop.axis(axis) as i64,
                step.axis(axis) as i64,
            )
        });

        let full_len = if axes.iter().any(Progression::is_empty) {
            0
        } else {
            axes.iter()
                .try_fold(1usize, |acc, axis| acc.checked_mul(axis.len()))
                .filter(|&len| i64::try_from(len).is_ok())
                .ok_or(RangeError::TooLarge)?
        };

        let range = Self {
            start,
            stop,
            step,
            order,
            axes,
            full_len,
            window: None,
        };

        trace!("Created {range} with {full_len} vectors");

        Ok(range)
    }

    pub fn start(&self) -> Vector {
        self.start
    }

    pub fn stop(&self) -> Vector {
        self.stop
    }

    pub fn step(&self) -> Vector {
        self.step
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Raw indices this range was sliced to, if it was sliced at all.
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    pub fn len(&self) -> usize {
        self.window.map_or(self.full_len, |w| w.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the vector at `index`. Negative indices count from the end.
    pub fn get(&self, index: isize) -> Result<Vector, RangeError> {
        let len = self.len();
        let logical = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize)
        };

        match logical {
            Some(i) if i < len => Ok(self.at_logical(i)),
            _ => Err(RangeError::OutOfBounds { index, len }),
        }
    }

    /// Position of `value` in this range, computed without walking it.
    ///
    /// Fails with [`RangeError::NotFound`] if `value` is outside of the box, off the step grid
    /// or outside of the slice this range represents.
    pub fn index(&self, value: &Vector) -> Result<usize, RangeError> {
        let not_found = || RangeError::NotFound(*value);

        let mut positions = [0; 3];
        for (k, axis) in self.order.axes().into_iter().enumerate() {
            let position = self.axes[k]
                .index_of(value.axis(axis) as i64)
                .ok_or_else(not_found)?;
            positions[k] = position as i64;
        }

        let raw = self.raw_index(positions)?.ok_or_else(not_found)?;

        match self.window {
            Some(window) => window.index_of(raw).ok_or_else(not_found),
            None => Ok(raw as usize),
        }
    }

    pub fn contains(&self, value: &Vector) -> bool {
        self.index(value).is_ok()
    }

    /// Either 0 or 1, since a range never holds duplicates.
    pub fn count(&self, value: &Vector) -> usize {
        usize::from(self.contains(value))
    }

    /// Slices `[start:stop:step]` over the logical positions of this range.
    ///
    /// Bounds may be negative or omitted and a negative `step` walks backwards. The returned range
    /// shares this one's arguments and only narrows its window, so slicing a slice works on the
    /// positions of the slice.
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Self, RangeError> {
        let logical = resolve_slice(self.len(), start, stop, step)?;
        let range = self.narrow(logical);

        trace!("Sliced {self} into {range}");

        Ok(range)
    }

    /// This range walked backwards, the same as slicing it with `[::-1]`.
    pub fn reversed(&self) -> Self {
        let len = self.len() as i64;
        self.narrow(Progression::new(len - 1, -1, -1))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Inclusive corners of this range, if it is a whole, non-empty box with a unit step on
    /// every axis. Such ranges can be sent to a server as a single region instead of vector by
    /// vector.
    pub fn cuboid_corners(&self) -> Option<(Vector, Vector)> {
        if self.window.is_some() || self.is_empty() || self.step.abs() != Vector::ONE {
            return None;
        }

        Some((self.at_raw(0), self.at_raw(self.full_len - 1)))
    }

    fn narrow(&self, logical: Progression) -> Self {
        let window = self
            .window
            .unwrap_or_else(|| Window::full(self.full_len))
            .compose(logical);

        Self {
            window: Some(window),
            ..*self
        }
    }

    /// Vector at a position already known to be within `[0, len)`.
    pub(crate) fn at_logical(&self, index: usize) -> Vector {
        let raw = match self.window {
            Some(window) => window.get(index) as usize,
            None => index,
        };
        self.at_raw(raw)
    }

    fn at_raw(&self, raw: usize) -> Vector {
        let [a0, a1, a2] = &self.axes;
        let (l0, l1) = (a0.len(), a1.len());

        let values = [
            a0.get(raw % l0),
            a1.get((raw / l0) % l1),
            a2.get(raw / (l0 * l1)),
        ];

        let mut coords = [0; 3];
        for (axis, value) in self.order.axes().into_iter().zip(values) {
            coords[axis.index()] = value as i32;
        }

        Vector::from(coords)
    }

    /// Finds the raw index whose per axis positions are `[p0, p1, p2]`, by intersecting the
    /// candidates of each axis.
    fn raw_index(&self, [p0, p1, p2]: [i64; 3]) -> Result<Option<i64>, RangeError> {
        let len = self.full_len as i64;
        let l0 = self.axes[0].len() as i64;
        let l1 = self.axes[1].len() as i64;

        // raw mod l0 == p0
        let fastest = rmod(l0, p0, 0..len)?;
        // raw div (l0 * l1) == p2, a single block of contiguous indices
        let block = rdiv(l0 * l1, p2)?;
        // (raw div l0) mod l1 == p1, only a single quotient may fall inside the block
        let Some(quotient) = rmod(l1, p1, 0..len / l0)?
            .restrict(block.start / l0..block.end / l0)
            .single()
        else {
            return Ok(None);
        };

        let row = rdiv(l0, quotient)?;
        Ok(fastest.restrict(row).single())
    }
}

impl std::fmt::Display for CoordinateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "CoordinateRange(start: ({}), stop: ({}), step: ({}), order: {})",
            self.start, self.stop, self.step, self.order
        ))?;

        match self.window {
            Some(window) if window.is_empty() => f.write_str("[empty]"),
            Some(window) => f.write_fmt(format_args!(
                "[{}:{}:{}]",
                window.first(),
                window.stop(),
                window.step()
            )),
            None => Ok(()),
        }
    }
}

/// Compares element by element. When one sequence is a strict prefix of the other they are not
/// comparable at all.
fn lexicographic(
    mut a: impl Iterator<Item = Vector>,
    mut b: impl Iterator<Item = Vector>,
) -> Option<Ordering> {
    loop {
        match (a.next(), b.next()) {
            (Some(va), Some(vb)) => match va.cmp(&vb) {
                Ordering::Equal => continue,
                ord => return Some(ord),
            },
            (None, None) => return Some(Ordering::Equal),
            _ => return None,
        }
    }
}

impl PartialEq for CoordinateRange {
    fn eq(&self, other: &Self) -> bool {
        if self.start == other.start
            && self.stop == other.stop
            && self.step == other.step
            && self.order == other.order
            && self.window == other.window
        {
            return true;
        }

        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for CoordinateRange {}

impl PartialEq<[Vector]> for CoordinateRange {
    fn eq(&self, other: &[Vector]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter().copied())
    }
}

impl PartialEq<Vec<Vector>> for CoordinateRange {
    fn eq(&self, other: &Vec<Vector>) -> bool {
        *self == other[..]
    }
}

impl<const N: usize> PartialEq<[Vector; N]> for CoordinateRange {
    fn eq(&self, other: &[Vector; N]) -> bool {
        *self == other[..]
    }
}

impl PartialEq<CoordinateRange> for Vec<Vector> {
    fn eq(&self, other: &CoordinateRange) -> bool {
        other == self
    }
}

impl PartialOrd for CoordinateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        lexicographic(self.iter(), other.iter())
    }
}

impl PartialOrd<[Vector]> for CoordinateRange {
    fn partial_cmp(&self, other: &[Vector]) -> Option<Ordering> {
        lexicographic(self.iter(), other.iter().copied())
    }
}

impl PartialOrd<Vec<Vector>> for CoordinateRange {
    fn partial_cmp(&self, other: &Vec<Vector>) -> Option<Ordering> {
        self.partial_cmp(&other[..])
    }
}

/// How a range is described in data files. Only `start` and `stop` are required.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RangeDesc {
    start: Vector,
    stop: Vector,
    #[serde(default = "unit_step")]
    step: Vector,
    #[serde(default)]
    order: Order,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window: Option<Window>,
}

#[cfg(feature = "serde")]
fn unit_step() -> Vector {
    Vector::ONE
}

#[cfg(feature = "serde")]
impl TryFrom<RangeDesc> for CoordinateRange {
    type Error = RangeError;

    fn try_from(desc: RangeDesc) -> Result<Self, Self::Error> {
        let range = Self::with_step(desc.start, desc.stop, desc.step, desc.order)?;

        let Some(window) = desc.window else {
            return Ok(range);
        };

        let window = Window::new(window.first(), window.step(), window.len());
        let in_bounds = |raw: i64| raw >= 0 && raw < range.full_len as i64;
        let last = i64::try_from(window.len().saturating_sub(1))
            .ok()
            .and_then(|n| window.step().checked_mul(n))
            .and_then(|offset| window.first().checked_add(offset));
        let fits = window.is_empty()
            || (window.step() != 0 && in_bounds(window.first()) && last.is_some_and(in_bounds));

        if !fits {
            return Err(RangeError::WindowOutOfBounds {
                first: window.first(),
                len: window.len(),
                range_len: range.full_len,
            });
        }

        Ok(Self {
            window: Some(window),
            ..range
        })
    }
}

#[cfg(feature = "serde")]
impl From<CoordinateRange> for RangeDesc {
    fn from(range: CoordinateRange) -> Self {
        Self {
            start: range.start,
            stop: range.stop,
            step: range.step,
            order: range.order,
            window: range.window,
        }
    }
}

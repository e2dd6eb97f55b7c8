//! Client side building blocks for talking to a voxel world server: the [`Vector`] used for
//! every coordinate on the wire, and [`CoordinateRange`], a lazy box of coordinates which can be
//! indexed, sliced and searched without ever being materialized.

pub mod error;
pub mod math;
pub mod range;
pub mod vector;

pub use error::{RangeError, VectorError};
pub use range::{CoordinateRange, Order};
pub use vector::{Axis, Scalar, Vector};

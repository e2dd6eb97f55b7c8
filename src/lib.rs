//! Voxel world client toolkit.
//!
//! Re-exports [`voxlink_core`], which holds the coordinate types every other part of a client
//! builds on.

pub use voxlink_core::*;

pub mod prelude {
    pub use voxlink_core::{
        Axis, CoordinateRange, Order, RangeError, Vector, VectorError,
        math::{dominant_axis, line, sign},
    };
}

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::RangeError, vector::Axis};

/// The order in which the axes of a [`super::CoordinateRange`] are incremented.
///
/// The first letter names the axis which varies fastest. The default, [`Order::Zxy`], walks a
/// whole horizontal layer before moving up on the Y (height) axis, which is also the order
/// servers use when returning the blocks of a region.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    #[default]
    Zxy,
    Zyx,
}

impl Order {
    pub const ALL: [Order; 6] = [
        Order::Xyz,
        Order::Xzy,
        Order::Yxz,
        Order::Yzx,
        Order::Zxy,
        Order::Zyx,
    ];

    /// Axes from the fastest varying to the slowest.
    pub const fn axes(self) -> [Axis; 3] {
        use Axis::*;

        match self {
            Order::Xyz => [X, Y, Z],
            Order::Xzy => [X, Z, Y],
            Order::Yxz => [Y, X, Z],
            Order::Yzx => [Y, Z, X],
            Order::Zxy => [Z, X, Y],
            Order::Zyx => [Z, Y, X],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Order::Xyz => "xyz",
            Order::Xzy => "xzy",
            Order::Yxz => "yxz",
            Order::Yzx => "yzx",
            Order::Zxy => "zxy",
            Order::Zyx => "zyx",
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Order::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| RangeError::InvalidOrder(s.to_string()))
    }
}

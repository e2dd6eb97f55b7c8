use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::VectorError;

/// One of the three world axes. Y is the height axis, X and Z span the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// Numeric types which can be used as [`Vector`] components.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + Display
    + FromStr
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn abs(self) -> Self;

    /// Division rounded towards negative infinity.
    fn floor_div(self, rhs: Self) -> Self;

    /// Remainder which takes the sign of the divisor, pairing with [`Scalar::floor_div`].
    fn floor_mod(self, rhs: Self) -> Self;

    fn pow(self, exp: Self) -> Self;

    fn to_f64(self) -> f64;
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn floor_div(self, rhs: Self) -> Self {
                let q = self / rhs;
                if self % rhs != 0 && (self < 0) != (rhs < 0) {
                    q - 1
                } else {
                    q
                }
            }

            #[inline]
            fn floor_mod(self, rhs: Self) -> Self {
                let r = self % rhs;
                if r != 0 && (r < 0) != (rhs < 0) { r + rhs } else { r }
            }

            /// Negative exponents yield zero, the same as integer division would.
            #[inline]
            fn pow(self, exp: Self) -> Self {
                u32::try_from(exp).map_or(0, |exp| <$t>::pow(self, exp))
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn floor_div(self, rhs: Self) -> Self {
                (self / rhs).floor()
            }

            #[inline]
            fn floor_mod(self, rhs: Self) -> Self {
                let r = self % rhs;
                if r != 0.0 && (r < 0.0) != (rhs < 0.0) { r + rhs } else { r }
            }

            #[inline]
            fn pow(self, exp: Self) -> Self {
                self.powf(exp)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_int_scalar!(i32, i64);
impl_float_scalar!(f32, f64);

/// An immutable 3d vector, used both as world coordinates and as directions.
///
/// Every operation returns a new vector. Binary operators work component-wise against another
/// vector or broadcast a scalar to all three components, so `v + 1` adds one on every axis.
///
/// A scalar is only accepted on the left-hand side of commutative operators:
///
/// ```
/// # use voxlink_core::Vector;
/// assert_eq!(2 * Vector::new(1, 2, 3), Vector::new(2, 4, 6));
/// assert_eq!(1 + Vector::new(1, 2, 3), Vector::new(2, 3, 4));
/// ```
///
/// ```compile_fail
/// # use voxlink_core::Vector;
/// let _ = 1 - Vector::new(0, 0, 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector<T = i32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector<T> {
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vector<U> {
        Vector::new(f(self.x), f(self.y), f(self.z))
    }

    #[inline]
    fn zip_with<U, R>(self, other: Vector<U>, mut f: impl FnMut(T, U) -> R) -> Vector<R> {
        Vector::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }
}

impl<T: Copy> Vector<T> {
    #[inline(always)]
    pub const fn splat(v: T) -> Self {
        Self { x: v, y: v, z: v }
    }

    #[inline]
    pub fn axis(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Scalar> Vector<T> {
    pub const ZERO: Self = Self::splat(T::ZERO);
    pub const ONE: Self = Self::splat(T::ONE);

    /// Unary plus. Vectors are `Copy`, so this is just a copy of `self`.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    #[inline]
    pub fn abs(self) -> Self {
        self.map(Scalar::abs)
    }

    /// Returns `true` when every component is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == T::ZERO && self.y == T::ZERO && self.z == T::ZERO
    }

    #[inline]
    pub fn floor_div(self, rhs: impl Into<Self>) -> Self {
        self.zip_with(rhs.into(), Scalar::floor_div)
    }

    #[inline]
    pub fn floor_mod(self, rhs: impl Into<Self>) -> Self {
        self.zip_with(rhs.into(), Scalar::floor_mod)
    }

    #[inline]
    pub fn pow(self, exp: impl Into<Self>) -> Self {
        self.zip_with(exp.into(), Scalar::pow)
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        (*self - *other).magnitude()
    }

    pub fn magnitude(&self) -> f64 {
        let v = self.as_f64();
        v.dot(&v).sqrt()
    }

    /// Vector with the same direction and a magnitude of one.
    ///
    /// The zero vector has no direction, so it is returned as is.
    pub fn unit(&self) -> Vector<f64> {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            self.as_f64() / magnitude
        } else {
            self.as_f64()
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Vector<f64> {
        self.map(Scalar::to_f64)
    }
}

impl<T: Scalar> From<T> for Vector<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T> From<(T, T, T)> for Vector<T> {
    fn from(value: (T, T, T)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl<T> From<[T; 3]> for Vector<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

macro_rules! impl_vector_op {
    ($op:ident, $fn:ident $(, $bound:ident)?) => {
        impl<T: Scalar $(+ $bound<Output = T>)?> $op for Vector<T> {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: Self) -> Self {
                self.zip_with(rhs, <T as $op>::$fn)
            }
        }

        impl<T: Scalar $(+ $bound<Output = T>)?> $op<T> for Vector<T> {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: T) -> Self {
                self.map(|c| <T as $op>::$fn(c, rhs))
            }
        }
    };
}

impl_vector_op!(Add, add);
impl_vector_op!(Sub, sub);
impl_vector_op!(Mul, mul);
impl_vector_op!(Div, div);
impl_vector_op!(Rem, rem);
impl_vector_op!(Shl, shl, Shl);
impl_vector_op!(Shr, shr, Shr);

impl<T: Scalar> Neg for Vector<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

// Only the commutative operators accept a scalar on the left.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Add<Vector<$t>> for $t {
            type Output = Vector<$t>;

            #[inline]
            fn add(self, rhs: Vector<$t>) -> Vector<$t> {
                rhs + self
            }
        }

        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            #[inline]
            fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs!(i32, i64, f32, f64);

/// Writes `x,y,z` using each component's own `Display`, so whole floats have no fraction:
/// `Vector::new(1.0, 0.5, -2.0)` is written as `1,0.5,-2`.
impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{},{},{}", self.x, self.y, self.z))
    }
}

impl<T: FromStr> FromStr for Vector<T> {
    type Err = VectorError;

    /// Parses the `x,y,z` form written by [`Display`]. Whitespace around components is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.split(',').collect::<Vec<_>>();
        let &[x, y, z] = fields.as_slice() else {
            return Err(VectorError::FieldCount(fields.len()));
        };

        let parse = |field: &str| {
            field
                .trim()
                .parse::<T>()
                .map_err(|_| VectorError::InvalidComponent(field.to_string()))
        };

        Ok(Self::new(parse(x)?, parse(y)?, parse(z)?))
    }
}

#[cfg(feature = "bevy")]
mod bevy_impls {
    use bevy_math::{IVec3, Vec3};

    use super::Vector;

    impl From<IVec3> for Vector<i32> {
        fn from(value: IVec3) -> Self {
            Self::new(value.x, value.y, value.z)
        }
    }

    impl From<Vector<i32>> for IVec3 {
        fn from(value: Vector<i32>) -> Self {
            IVec3::new(value.x, value.y, value.z)
        }
    }

    impl From<Vec3> for Vector<f32> {
        fn from(value: Vec3) -> Self {
            Self::new(value.x, value.y, value.z)
        }
    }

    impl From<Vector<f32>> for Vec3 {
        fn from(value: Vector<f32>) -> Self {
            Vec3::new(value.x, value.y, value.z)
        }
    }
}

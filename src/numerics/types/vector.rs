// src/numerics/types/vector.rs
// Vector3 with default precision f32. Surface normals are plain Vector3s.

use core::ops::{Add, Mul, Neg, Sub};
use serde::{Serialize, Deserialize};

use super::traits::FloatingPoint;
use crate::numerics::error::NumericsError;

/// A 3D vector, generic over the scalar type.
///
/// Used both for positions and for directions; when a `Matrix4x4` is applied
/// to a `Vector3` it is treated as a direction (`w = 0`), so translation
/// never moves a normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// Serialized as an (x, y, z) tuple.
impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T: FloatingPoint> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`NumericsError::ZeroLength`] when the vector has no
    /// direction, e.g. a normal flattened by a singular transform, or one
    /// with a non-finite component.
    ///
    /// Components are divided by the largest magnitude before squaring, so
    /// vectors whose `length_squared` would overflow still normalize.
    pub fn normalized(&self) -> Result<Self, NumericsError> {
        let largest = self.max_abs_component();
        if !(largest > T::zero()) || !largest.is_finite() {
            return Err(NumericsError::ZeroLength);
        }
        let scaled = Self::new(self.x / largest, self.y / largest, self.z / largest);
        let unit = scaled * (T::one() / scaled.length());
        if !(unit.x.is_finite() && unit.y.is_finite() && unit.z.is_finite()) {
            return Err(NumericsError::ZeroLength);
        }
        Ok(unit)
    }

    fn max_abs_component(&self) -> T {
        let (x, y, z) = (self.x.abs(), self.y.abs(), self.z.abs());
        let xy = if y > x { y } else { x };
        if z > xy { z } else { xy }
    }
}

impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

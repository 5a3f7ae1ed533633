// src/numerics/types/matrix.rs
// Matrix3x3: the linear block of a 4x4 transform, which is what actually
// acts on normals.

use core::ops::{Add, Mul, Sub};
use serde::{Serialize, Deserialize};

use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::Vector3;

/// Row-major 3x3 matrix, `data[row][column]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3x3<T: FloatingPoint = f32> {
    pub data: [[T; 3]; 3],
}

impl<T: FloatingPoint> Matrix3x3<T> {
    pub fn new(data: [[T; 3]; 3]) -> Self {
        Self { data }
    }

    pub fn from_rows(r0: [T; 3], r1: [T; 3], r2: [T; 3]) -> Self {
        Self { data: [r0, r1, r2] }
    }

    pub fn from_columns(c0: [T; 3], c1: [T; 3], c2: [T; 3]) -> Self {
        Self::from_rows(c0, c1, c2).transpose()
    }

    pub fn row(&self, idx: usize) -> [T; 3] {
        self.data[idx]
    }

    pub fn column(&self, idx: usize) -> [T; 3] {
        [self.data[0][idx], self.data[1][idx], self.data[2][idx]]
    }

    pub fn zero() -> Self {
        Self { data: [[T::zero(); 3]; 3] }
    }

    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..3 {
            m.data[i][i] = T::one();
        }
        m
    }

    pub fn transpose(&self) -> Self {
        Self::new(core::array::from_fn(|i| self.column(i)))
    }

    /// Determinant by expansion along the first row.
    pub fn determinant(&self) -> T {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[0][1] * (m[1][0] * m[2][2] - m[2][0] * m[1][2])
            + m[0][2] * (m[1][0] * m[2][1] - m[2][0] * m[1][1])
    }

    /// Cofactor matrix: entry `(i, j)` is `(-1)^(i+j)` times the 2x2 minor
    /// left after deleting row `i` and column `j`.
    ///
    /// The columns of the cofactor matrix are the pairwise cross products
    /// of the source columns, which is why it maps the normal of a
    /// parallelogram to the normal of its image.
    pub fn cofactor(&self) -> Self {
        let keep = [[1, 2], [0, 2], [0, 1]];
        let m = &self.data;
        let mut out = Self::zero();
        for i in 0..3 {
            let [ra, rb] = keep[i];
            for j in 0..3 {
                let [ca, cb] = keep[j];
                let minor = m[ra][ca] * m[rb][cb] - m[rb][ca] * m[ra][cb];
                out.data[i][j] = if (i + j) % 2 == 0 { minor } else { -minor };
            }
        }
        out
    }
}

// Serialized as nested row arrays.
impl<T> Serialize for Matrix3x3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix3x3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[[T; 3]; 3]>::deserialize(deserializer)?;
        Ok(Matrix3x3 { data })
    }
}

impl<T: FloatingPoint> Add for Matrix3x3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(core::array::from_fn(|i| {
            core::array::from_fn(|j| self.data[i][j] + other.data[i][j])
        }))
    }
}

impl<T: FloatingPoint> Sub for Matrix3x3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(core::array::from_fn(|i| {
            core::array::from_fn(|j| self.data[i][j] - other.data[i][j])
        }))
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix3x3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.data.map(|row| row.map(|v| v * scalar)))
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Matrix3x3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        let [r0, r1, r2] = self.data.map(Vector3::from);
        Vector3::new(r0.dot(&rhs), r1.dot(&rhs), r2.dot(&rhs))
    }
}

impl<T: FloatingPoint> Mul<Matrix3x3<T>> for Matrix3x3<T> {
    type Output = Matrix3x3<T>;

    fn mul(self, rhs: Matrix3x3<T>) -> Matrix3x3<T> {
        Self::new(core::array::from_fn(|i| {
            core::array::from_fn(|j| {
                self.data[i][0] * rhs.data[0][j]
                    + self.data[i][1] * rhs.data[1][j]
                    + self.data[i][2] * rhs.data[2][j]
            })
        }))
    }
}

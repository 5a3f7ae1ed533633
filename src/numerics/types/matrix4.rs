// src/numerics/types/matrix4.rs
// Matrix4x4: row-major 4x4 transform with cofactor-based normal support.

use core::ops::{Add, Mul, Sub};
use serde::{Serialize, Deserialize};

use crate::numerics::cofactor;
use crate::numerics::error::NumericsError;
use crate::numerics::types::matrix::Matrix3x3;
use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::Vector3;

/// Determinants with magnitude at or below this are treated as singular by
/// [`Matrix4x4::inverse`].
///
/// The threshold is absolute, not relative to the matrix scale: an
/// invertible transform such as `from_scale(1e-5, 1e-5, 1e-5)` (det 1e-15)
/// is rejected. Use [`Matrix4x4::inverse_with_epsilon`] for small-scale
/// transforms.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Row-major 4x4 matrix, `data[row][column]`.
///
/// `data[r][c]` is the element at linear index `4 * r + c` of
/// [`Matrix4x4::to_row_major`], the layout the free functions in
/// [`crate::numerics::cofactor`] operate on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4<T: FloatingPoint = f32> {
    pub data: [[T; 4]; 4],
}

impl<T: FloatingPoint> Matrix4x4<T> {
    pub fn new(data: [[T; 4]; 4]) -> Self {
        Self { data }
    }

    pub fn from_rows(r0: [T; 4], r1: [T; 4], r2: [T; 4], r3: [T; 4]) -> Self {
        Self { data: [r0, r1, r2, r3] }
    }

    pub fn from_row_major(values: [T; 16]) -> Self {
        Self::new(core::array::from_fn(|r| core::array::from_fn(|c| values[4 * r + c])))
    }

    pub fn to_row_major(&self) -> [T; 16] {
        core::array::from_fn(|i| self.data[i / 4][i % 4])
    }

    pub fn zero() -> Self {
        Self { data: [[T::zero(); 4]; 4] }
    }

    pub fn identity() -> Self {
        Self::from_diagonal([T::one(); 4])
    }

    pub fn from_diagonal(diagonal: [T; 4]) -> Self {
        let mut m = Self::zero();
        for i in 0..4 {
            m.data[i][i] = diagonal[i];
        }
        m
    }

    /// Non-uniform scale. A negative factor makes it a reflection.
    pub fn from_scale(sx: T, sy: T, sz: T) -> Self {
        Self::from_diagonal([sx, sy, sz, T::one()])
    }

    pub fn from_translation(tx: T, ty: T, tz: T) -> Self {
        let mut m = Self::identity();
        m.data[0][3] = tx;
        m.data[1][3] = ty;
        m.data[2][3] = tz;
        m
    }

    /// Right-handed rotation about the x axis, angle in radians.
    pub fn from_rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([l, o, o, o], [o, c, -s, o], [o, s, c, o], [o, o, o, l])
    }

    pub fn from_rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([c, o, s, o], [o, l, o, o], [-s, o, c, o], [o, o, o, l])
    }

    pub fn from_rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([c, -s, o, o], [s, c, o, o], [o, o, l, o], [o, o, o, l])
    }

    pub fn row(&self, idx: usize) -> [T; 4] {
        self.data[idx]
    }

    pub fn column(&self, idx: usize) -> [T; 4] {
        core::array::from_fn(|r| self.data[r][idx])
    }

    /// The linear part, i.e. everything that acts on directions.
    pub fn upper_left(&self) -> Matrix3x3<T> {
        Matrix3x3::new(core::array::from_fn(|r| core::array::from_fn(|c| self.data[r][c])))
    }

    pub fn transpose(&self) -> Self {
        Self::new(core::array::from_fn(|i| self.column(i)))
    }

    /// Determinant of the 3x3 submatrix picked out by `rows` and `cols`.
    pub fn minor(&self, rows: [usize; 3], cols: [usize; 3]) -> T {
        cofactor::minor(&self.to_row_major(), rows, cols)
    }

    /// The cofactor matrix. Use this, not [`Matrix4x4::inverse_transpose`],
    /// to transform normals.
    pub fn cofactor(&self) -> Self {
        Self::from_row_major(cofactor::cofactor(&self.to_row_major()))
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        self.cofactor().transpose()
    }

    pub fn determinant(&self) -> T {
        cofactor::determinant(&self.to_row_major())
    }

    /// `adjugate / det`, failing when `|det| <= SINGULAR_EPSILON` or the
    /// determinant is NaN.
    pub fn inverse(&self) -> Result<Self, NumericsError> {
        self.inverse_with_epsilon(SINGULAR_EPSILON)
    }

    pub fn inverse_with_epsilon(&self, epsilon: f64) -> Result<Self, NumericsError> {
        let det = self.determinant();
        if !(det.abs().to_f64() > epsilon) {
            return Err(NumericsError::SingularMatrix { determinant: det.to_f64() });
        }
        Ok(self.adjugate() * (T::one() / det))
    }

    /// The classical normal matrix, `transpose(inverse(M))`.
    ///
    /// Equal to `cofactor / det`, so it points normals the wrong way when
    /// `det < 0` and does not exist when `M` is singular.
    pub fn inverse_transpose(&self) -> Result<Self, NumericsError> {
        self.inverse_transpose_with_epsilon(SINGULAR_EPSILON)
    }

    pub fn inverse_transpose_with_epsilon(&self, epsilon: f64) -> Result<Self, NumericsError> {
        Ok(self.inverse_with_epsilon(epsilon)?.transpose())
    }

    /// Applies the transform to a point (`w = 1`), ignoring the projective row.
    pub fn transform_point(&self, p: Vector3<T>) -> Vector3<T> {
        let t = Vector3::new(self.data[0][3], self.data[1][3], self.data[2][3]);
        *self * p + t
    }
}

impl<T> Serialize for Matrix4x4<T>
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

impl<'de, T> Deserialize<'de> for Matrix4x4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[[T; 4]; 4]>::deserialize(deserializer)?;
        Ok(Matrix4x4 { data })
    }
}

impl<T: FloatingPoint> From<[T; 16]> for Matrix4x4<T> {
    fn from(values: [T; 16]) -> Self {
        Self::from_row_major(values)
    }
}

impl<T: FloatingPoint> From<Matrix4x4<T>> for [T; 16] {
    fn from(m: Matrix4x4<T>) -> Self {
        m.to_row_major()
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Matrix4x4<T> {
    type Error = NumericsError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        let values: [T; 16] = values.try_into().map_err(|_| NumericsError::InvalidLength {
            expected: 16,
            actual: values.len(),
        })?;
        Ok(Self::from_row_major(values))
    }
}

impl<T: FloatingPoint> Add for Matrix4x4<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(core::array::from_fn(|i| {
            core::array::from_fn(|j| self.data[i][j] + other.data[i][j])
        }))
    }
}

impl<T: FloatingPoint> Sub for Matrix4x4<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(core::array::from_fn(|i| {
            core::array::from_fn(|j| self.data[i][j] - other.data[i][j])
        }))
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix4x4<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.data.map(|row| row.map(|v| v * scalar)))
    }
}

impl<T: FloatingPoint> Mul<Matrix4x4<T>> for Matrix4x4<T> {
    type Output = Matrix4x4<T>;

    fn mul(self, rhs: Matrix4x4<T>) -> Matrix4x4<T> {
        Self::new(core::array::from_fn(|i| {
            core::array::from_fn(|j| {
                (0..4).fold(T::zero(), |acc, k| acc + self.data[i][k] * rhs.data[k][j])
            })
        }))
    }
}

/// Direction transform (`w = 0`): only the upper-left 3x3 block applies.
impl<T: FloatingPoint> Mul<Vector3<T>> for Matrix4x4<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.upper_left() * rhs
    }
}

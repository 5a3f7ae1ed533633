// src/numerics/types/traits.rs
// Scalar trait shared by every numerics type.

/// FloatingPoint is the scalar bound used by the vector and matrix types.
///
/// Implemented for `f32` (the default precision everywhere) and `f64`.
/// The minor/cofactor arithmetic only needs the ring operations; the extra
/// methods serve lengths, rotations, overflow and singularity checks.
pub trait FloatingPoint:
Copy + PartialOrd + core::fmt::Debug
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn to_f64(self) -> f64;
    fn is_finite(self) -> bool;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn abs(self) -> Self { f32::abs(self) }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn sin_cos(self) -> (Self, Self) { f32::sin_cos(self) }
    fn to_f64(self) -> f64 { self as f64 }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn abs(self) -> Self { f64::abs(self) }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn sin_cos(self) -> (Self, Self) { f64::sin_cos(self) }
    fn to_f64(self) -> f64 { self }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}

//! Prelude for cofactor
//!
//! Re-exports the vector/matrix types and the normal transform for convenient use.

pub use crate::normals::{face_normal, NormalMethod, NormalTransform, NormalTransformConfig};
pub use crate::numerics::{FloatingPoint, Matrix3x3, Matrix4x4, NumericsError, Vector3};

// Common type aliases for frequently used instantiations
pub type Matrix4x4F32 = Matrix4x4<f32>;
pub type Matrix4x4F64 = Matrix4x4<f64>;
pub type NormalTransformF32 = NormalTransform<f32>;
pub type NormalTransformF64 = NormalTransform<f64>;

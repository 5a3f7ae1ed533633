//! Surface normals under non-uniform scale, skew and reflection.
//!
//! The usual recipe transforms normals by `transpose(inverse(M))`. The
//! matrix that is actually correct is the cofactor matrix of `M`, which
//! equals `det(M) * transpose(inverse(M))`: it needs no inversion, works
//! for singular `M`, and keeps normals facing outward when `M` mirrors.
//!
//! - [`numerics`]: scalar trait, vectors, matrices and the raw
//!   [`minor`](numerics::cofactor::minor) / [`cofactor`](numerics::cofactor::cofactor)
//!   routines over row-major `[T; 16]` arrays.
//! - [`normals`]: [`NormalTransform`], which applies the cofactor matrix
//!   (or, for comparison, the inverse transpose) to normals.

pub mod normals;
pub mod numerics;
pub mod prelude;

pub use normals::{face_normal, NormalMethod, NormalTransform, NormalTransformConfig};
pub use numerics::{FloatingPoint, Matrix3x3, Matrix4x4, NumericsError, Vector3};

// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules,
// plus the free-function cofactor routines over row-major arrays.

pub mod cofactor;
pub mod error;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod vector;
    pub mod matrix;
    pub mod matrix4;
}

pub use error::NumericsError;
pub use types::matrix::Matrix3x3;
pub use types::matrix4::Matrix4x4;
pub use types::traits::FloatingPoint;
pub use types::vector::Vector3;

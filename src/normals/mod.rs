//! Transforming surface normals.
//!
//! A normal is not a tangent direction: when a surface is transformed by
//! `M`, its normals must be transformed by the cofactor matrix of `M` to
//! stay perpendicular to it. [`NormalTransform`] precomputes that matrix
//! once per transform and applies it to any number of normals.
//!
//! The classical `transpose(inverse(M))` is available through
//! [`NormalMethod::InverseTranspose`] for comparison. It agrees with the
//! cofactor matrix up to the factor `1 / det(M)`, which makes it undefined
//! for singular `M` and reverses normals when `det(M) < 0`.

pub mod config;

use tracing::{debug, warn};

use crate::numerics::{FloatingPoint, Matrix4x4, NumericsError, Vector3};

pub use config::{NormalMethod, NormalTransformConfig};

/// Carries normals through a fixed 4x4 transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalTransform<T: FloatingPoint = f32> {
    source: Matrix4x4<T>,
    normal_matrix: Matrix4x4<T>,
    determinant: T,
    config: NormalTransformConfig,
}

impl<T: FloatingPoint> NormalTransform<T> {
    /// Build the normal matrix for `source` according to `config`.
    ///
    /// Only [`NormalMethod::InverseTranspose`] can fail, with
    /// [`NumericsError::SingularMatrix`].
    pub fn new(source: Matrix4x4<T>, config: NormalTransformConfig) -> Result<Self, NumericsError> {
        config.validate()?;
        let determinant = source.determinant();
        debug!(
            method = config.method.name(),
            determinant = determinant.to_f64(),
            "building normal transform"
        );
        if determinant < T::zero() {
            debug!("transform reverses orientation");
        }

        let normal_matrix = match config.method {
            NormalMethod::Cofactor => source.cofactor(),
            NormalMethod::InverseTranspose => source
                .inverse_transpose_with_epsilon(config.singular_epsilon)
                .map_err(|e| {
                    warn!(error = %e, "inverse transpose requested for a singular transform");
                    e
                })?,
        };

        Ok(Self { source, normal_matrix, determinant, config })
    }

    /// Cofactor-based transform with default settings. Never fails.
    pub fn cofactor(source: Matrix4x4<T>) -> Self {
        let determinant = source.determinant();
        Self {
            source,
            normal_matrix: source.cofactor(),
            determinant,
            config: NormalTransformConfig::default(),
        }
    }

    pub fn source(&self) -> &Matrix4x4<T> {
        &self.source
    }

    pub fn normal_matrix(&self) -> &Matrix4x4<T> {
        &self.normal_matrix
    }

    pub fn config(&self) -> &NormalTransformConfig {
        &self.config
    }

    pub fn determinant(&self) -> T {
        self.determinant
    }

    /// True when the source transform mirrors geometry (`det < 0`).
    pub fn is_orientation_reversing(&self) -> bool {
        self.determinant < T::zero()
    }

    /// Transform `normal`, without renormalizing.
    ///
    /// With the cofactor method the result is scaled by the area change of
    /// the transform; it is zero when the transform collapses the surface.
    pub fn apply(&self, normal: Vector3<T>) -> Vector3<T> {
        self.normal_matrix * normal
    }

    /// Transform `normal` and renormalize it when `config.normalize` is set.
    pub fn apply_normalized(&self, normal: Vector3<T>) -> Result<Vector3<T>, NumericsError> {
        let transformed = self.apply(normal);
        if self.config.normalize {
            transformed.normalized()
        } else {
            Ok(transformed)
        }
    }
}

/// Unnormalized normal of triangle `(a, b, c)`, counter-clockwise winding.
pub fn face_normal<T: FloatingPoint>(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Vector3<T> {
    (b - a).cross(&(c - a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: Vector3<f64>, b: Vector3<f64>, eps: f64) {
        assert!((a - b).length() <= eps, "{:?} != {:?}", a, b);
    }

    fn triangle() -> [Vector3<f64>; 3] {
        [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.5),
        ]
    }

    #[test]
    fn test_cofactor_normal_matches_transformed_face() {
        let [a, b, c] = triangle();
        let transforms = [
            Matrix4x4::from_scale(1.0, 4.0, 0.5),
            Matrix4x4::from_rows(
                [1.0, 2.0, 0.0, 3.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.5, 0.0, 1.0, -1.0],
                [0.0, 0.0, 0.0, 1.0],
            ),
            Matrix4x4::from_scale(-1.0, 1.0, 1.0),
            Matrix4x4::from_rotation_y(0.7) * Matrix4x4::from_scale(2.0, -3.0, 1.0),
        ];

        for m in transforms {
            let transform = NormalTransform::cofactor(m);
            let expected = face_normal(
                m.transform_point(a),
                m.transform_point(b),
                m.transform_point(c),
            );
            assert_vec_close(transform.apply(face_normal(a, b, c)), expected, 1e-12);
        }
    }

    #[test]
    fn test_inverse_transpose_flips_under_reflection() {
        let [a, b, c] = triangle();
        let mirror = Matrix4x4::from_scale(-1.0, 1.0, 1.0);
        let n = face_normal(a, b, c);
        let reference = face_normal(
            mirror.transform_point(a),
            mirror.transform_point(b),
            mirror.transform_point(c),
        );

        let cofactor = NormalTransform::new(mirror, NormalTransformConfig::default()).unwrap();
        let classical = NormalTransform::new(
            mirror,
            NormalTransformConfig::with_method(NormalMethod::InverseTranspose),
        )
        .unwrap();

        assert!(cofactor.is_orientation_reversing());
        assert!(cofactor.apply(n).dot(&reference) > 0.0);
        assert!(classical.apply(n).dot(&reference) < 0.0);
        assert_eq!(classical.apply(n), -cofactor.apply(n));
    }

    #[test]
    fn test_singular_transform() {
        let flatten = Matrix4x4::<f64>::from_scale(1.0, 1.0, 0.0);

        let err = NormalTransform::new(
            flatten,
            NormalTransformConfig::with_method(NormalMethod::InverseTranspose),
        )
        .unwrap_err();
        assert!(matches!(err, NumericsError::SingularMatrix { .. }));

        let transform = NormalTransform::new(flatten, NormalTransformConfig::default()).unwrap();
        // The flattened surface still faces +z.
        let up = transform.apply_normalized(Vector3::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(up, Vector3::new(0.0, 0.0, 1.0));
        // A wall perpendicular to the plane collapses to a line: no normal.
        assert_eq!(
            transform.apply_normalized(Vector3::new(1.0, 0.0, 0.0)),
            Err(NumericsError::ZeroLength)
        );
    }

    #[test]
    fn test_apply_normalized_respects_config() {
        let m = Matrix4x4::<f32>::from_scale(2.0, 2.0, 2.0);
        let n = Vector3::new(0.0, 1.0, 0.0);

        let normalizing = NormalTransform::new(m, NormalTransformConfig::default()).unwrap();
        assert_eq!(normalizing.apply_normalized(n).unwrap(), n);

        let raw = NormalTransform::new(m, NormalTransformConfig::parse("normalize=false").unwrap())
            .unwrap();
        assert_eq!(raw.apply_normalized(n).unwrap(), Vector3::new(0.0, 4.0, 0.0));
        assert_eq!(raw.determinant(), 8.0);
        assert!(!raw.is_orientation_reversing());
    }

    #[test]
    fn test_large_scale_normals_stay_unit_in_f32() {
        // Cofactor entries grow with the square of the scale: 1e20 here.
        let transform = NormalTransform::cofactor(Matrix4x4::<f32>::from_scale(1e10, 1e10, 1.0));

        let raw = transform.apply(Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(raw, Vector3::new(0.0, 0.0, 1e20));
        let up = transform.apply_normalized(Vector3::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(up, Vector3::new(0.0, 0.0, 1.0));

        // (1e10, 1e10, 1e20) overflows length_squared in f32.
        let tilted = transform.apply_normalized(Vector3::new(1.0, 1.0, 1.0)).unwrap();
        assert!((tilted.length() - 1.0).abs() < 1e-6);
        assert!((tilted.z - 1.0).abs() < 1e-6);
        assert!(tilted.x > 0.0 && tilted.y > 0.0);
    }

    #[test]
    fn test_rotation_leaves_normals_rigid() {
        let r = Matrix4x4::from_rotation_z(std::f64::consts::FRAC_PI_2);
        let transform = NormalTransform::cofactor(r);

        assert_vec_close(
            transform.apply(Vector3::new(1.0, 0.0, 0.0)),
            Vector3::new(0.0, 1.0, 0.0),
            1e-12,
        );
        assert_eq!(transform.source(), &r);
        assert_eq!(transform.config(), &NormalTransformConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = NormalTransformConfig { singular_epsilon: -1.0, ..Default::default() };
        let err = NormalTransform::new(Matrix4x4::<f32>::identity(), config).unwrap_err();
        assert!(matches!(err, NumericsError::InvalidParameters(_)));
    }
}

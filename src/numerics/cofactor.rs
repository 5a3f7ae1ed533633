// src/numerics/cofactor.rs
//! Minors and the cofactor matrix of a row-major 4x4 matrix.
//!
//! Normals must be transformed by the cofactor matrix `C(M)` rather than by
//! `transpose(inverse(M))`. The two differ by the factor `det(M)`:
//!
//! ```text
//! C(M) = det(M) * transpose(inverse(M))
//! ```
//!
//! Dropping that factor loses its sign, so the inverse transpose flips
//! normals inward under a reflection, and it is undefined when `M` is
//! singular. The cofactor matrix never divides, so it is defined for every
//! real input and keeps the orientation.
//!
//! Element `(r, c)` of a source matrix lives at `src[4 * r + c]`.

use crate::numerics::types::traits::FloatingPoint;

/// Determinant of the 3x3 submatrix of `src` selected by `rows` and `cols`,
/// expanded along the first selected row.
///
/// The three row indices must be distinct, as must the three column
/// indices. Indices outside `0..4` panic on the array access.
#[inline]
pub fn minor<T: FloatingPoint>(src: &[T; 16], rows: [usize; 3], cols: [usize; 3]) -> T {
    let [r0, r1, r2] = rows;
    let [c0, c1, c2] = cols;
    let m = |r: usize, c: usize| src[4 * r + c];

    m(r0, c0) * (m(r1, c1) * m(r2, c2) - m(r2, c1) * m(r1, c2))
        - m(r0, c1) * (m(r1, c0) * m(r2, c2) - m(r2, c0) * m(r1, c2))
        + m(r0, c2) * (m(r1, c0) * m(r2, c1) - m(r2, c0) * m(r1, c1))
}

// Remaining axes once one row or column is removed.
const KEEP: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];

/// The cofactor matrix of `src`, in the same row-major layout.
///
/// Entry `(i, j)` is `(-1)^(i+j)` times the minor obtained by deleting row
/// `i` and column `j`. This is the cofactor matrix itself, not its
/// transpose (the adjugate), and it is what a normal should be multiplied
/// by: `n' = cofactor(M) * n`.
pub fn cofactor<T: FloatingPoint>(src: &[T; 16]) -> [T; 16] {
    let [r0, r1, r2, r3] = KEEP;
    let [c0, c1, c2, c3] = KEEP;

    [
        minor(src, r0, c0),
        -minor(src, r0, c1),
        minor(src, r0, c2),
        -minor(src, r0, c3),
        -minor(src, r1, c0),
        minor(src, r1, c1),
        -minor(src, r1, c2),
        minor(src, r1, c3),
        minor(src, r2, c0),
        -minor(src, r2, c1),
        minor(src, r2, c2),
        -minor(src, r2, c3),
        -minor(src, r3, c0),
        minor(src, r3, c1),
        -minor(src, r3, c2),
        minor(src, r3, c3),
    ]
}

/// Determinant of `src`, by Laplace expansion along row 0.
pub fn determinant<T: FloatingPoint>(src: &[T; 16]) -> T {
    let [r0, ..] = KEEP;
    let [c0, c1, c2, c3] = KEEP;

    src[0] * minor(src, r0, c0) - src[1] * minor(src, r0, c1)
        + src[2] * minor(src, r0, c2) - src[3] * minor(src, r0, c3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ];

    // Independent reference: sign and removed row/column computed per entry.
    fn cofactor_by_definition(src: &[f64; 16]) -> [f64; 16] {
        let mut out = [0.0; 16];
        for i in 0..4 {
            for j in 0..4 {
                let rows: Vec<usize> = (0..4).filter(|&r| r != i).collect();
                let cols: Vec<usize> = (0..4).filter(|&c| c != j).collect();
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                out[4 * i + j] = sign
                    * minor(src, [rows[0], rows[1], rows[2]], [cols[0], cols[1], cols[2]]);
            }
        }
        out
    }

    #[test]
    fn test_minor_of_identity_block() {
        assert_eq!(minor(&IDENTITY, [1, 2, 3], [1, 2, 3]), 1.0);
        // Deleting row 0 and column 1 leaves a zero column.
        assert_eq!(minor(&IDENTITY, [1, 2, 3], [0, 2, 3]), 0.0);
    }

    #[test]
    fn test_minor_expansion_formula() {
        let src: [f64; 16] = [
            2.0, 0.0, 1.0, 9.0,
            1.0, 3.0, 2.0, 9.0,
            1.0, 1.0, 1.0, 9.0,
            9.0, 9.0, 9.0, 9.0,
        ];
        // det [[2,0,1],[1,3,2],[1,1,1]] = 2*(3-2) - 0 + 1*(1-3) = 0
        assert_eq!(minor(&src, [0, 1, 2], [0, 1, 2]), 0.0);
        // Swapping two selected rows flips the sign.
        let src: [f64; 16] = [
            4.0, 0.0, 1.0, 0.0,
            1.0, 3.0, 2.0, 0.0,
            1.0, 1.0, 5.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
        ];
        let a = minor(&src, [0, 1, 2], [0, 1, 2]);
        let b = minor(&src, [1, 0, 2], [0, 1, 2]);
        assert_eq!(a, 4.0 * (15.0 - 2.0) + 1.0 * (1.0 - 3.0));
        assert_eq!(a, -b);
    }

    #[test]
    fn test_identity_cofactor_is_identity() {
        assert_eq!(cofactor(&IDENTITY), IDENTITY);
    }

    #[test]
    fn test_cofactor_matches_definition() {
        let src: [f64; 16] = [
            3.0, -1.0, 2.0, 0.5,
            0.0, 4.0, 1.0, -2.0,
            7.0, 2.0, -3.0, 1.0,
            1.0, 0.0, 2.0, 6.0,
        ];
        assert_eq!(cofactor(&src), cofactor_by_definition(&src));
    }

    #[test]
    fn test_reflection_regression() {
        // diag(-1, 1, 1, 1), det = -1
        let src: [f32; 16] = [
            -1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        let expected: [f32; 16] = [
            1.0, 0.0, 0.0, 0.0,
            0.0, -1.0, 0.0, 0.0,
            0.0, 0.0, -1.0, 0.0,
            0.0, 0.0, 0.0, -1.0,
        ];
        assert_eq!(cofactor(&src), expected);
        assert_eq!(determinant(&src), -1.0);
    }

    #[test]
    fn test_determinant() {
        assert_eq!(determinant(&IDENTITY), 1.0);

        let src: [f64; 16] = [
            2.0, 0.0, 0.0, 5.0,
            0.0, 3.0, 0.0, 6.0,
            0.0, 0.0, 4.0, 7.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        assert_eq!(determinant(&src), 24.0);
    }

    #[test]
    fn test_cofactor_of_singular_matrix_is_defined() {
        // Flattens z: rank 3, det = 0.
        let src: [f32; 16] = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        let c = cofactor(&src);
        assert!(c.iter().all(|v| v.is_finite()));
        assert_eq!(determinant(&src), 0.0);
        // Only the z row/column pair survives.
        assert_eq!(c[10], 1.0);
        assert_eq!(c[0], 0.0);
        assert_eq!(c[5], 0.0);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let src: [f64; 16] = [
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            2.0, 6.0, 4.0, 8.0,
            3.0, 1.0, 1.0, 2.0,
        ];
        let copy = src;
        let _ = cofactor(&src);
        assert_eq!(src, copy);
    }
}

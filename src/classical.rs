//! Classical algebra operations

use crate::error::{MatrixError, MatrixResult, ShapeRequirement};
use crate::matrix::Matrix;
use crate::multiplier::Multiplier;
use crate::types::Scalar;

/// Multiply two n×n matrices (row-major) of size `n`.
pub fn multiply_matrices(a: &[Scalar], b: &[Scalar], n: usize) -> Vec<Scalar> {
    multiply_rectangular(a, b, n, n, n)
}

/// Multiply an m×k matrix by a k×p matrix, both row-major.
///
/// Every output cell gets a fresh accumulator; sums and products wrap.
pub fn multiply_rectangular(
    a: &[Scalar],
    b: &[Scalar],
    m: usize,
    k: usize,
    p: usize,
) -> Vec<Scalar> {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * p);

    let mut c = vec![0; m * p];
    for i in 0..m {
        for j in 0..p {
            let mut sum: Scalar = 0;
            for t in 0..k {
                sum = sum.wrapping_add(a[i * k + t].wrapping_mul(b[t * p + j]));
            }
            c[i * p + j] = sum;
        }
    }
    c
}

/// Triple-loop O(m·n·p) multiplier.
///
/// Accepts any pair of multiplication-compatible matrices and is the
/// reference every other multiplier is checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicalMultiplier;

impl Multiplier for ClassicalMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
        if !a.is_multiplicable_with(b) {
            return Err(MatrixError::incompatible(
                a.order(),
                b.order(),
                ShapeRequirement::Multiplicable,
            ));
        }

        let (m, k) = a.order();
        let p = b.columns();
        log::debug!("classical multiply {}x{} * {}x{}", m, k, k, p);

        let c = multiply_rectangular(a.data(), b.data(), m, k, p);
        Ok(Matrix::from_raw(m, p, c))
    }
}

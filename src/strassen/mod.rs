// src/strassen/mod.rs
//! Strassen matrix multiplication.
//!
//! Each level splits both n×n operands into four quadrants and forms seven
//! half-size products instead of eight:
//!
//! ```text
//! M1 = (A11 + A22)(B11 + B22)      C11 = M1 + M4 - M5 + M7
//! M2 = (A21 + A22) B11             C12 = M3 + M5
//! M3 = A11 (B12 - B22)             C21 = M2 + M4
//! M4 = A22 (B21 - B11)             C22 = M1 - M2 + M3 + M6
//! M5 = (A11 + A12) B22
//! M6 = (A21 - A11)(B11 + B12)
//! M7 = (A12 - A22)(B21 + B22)
//! ```
//!
//! The recursion bottoms out at 1×1 (or at the configured cutover, where the
//! classical kernel takes over), giving ~O(n^2.807) multiplications.
//! Only square operands of equal power-of-two order, at least 2×2, are
//! accepted; 1×1 is reached by recursion but rejected as an input.

pub(crate) mod block;

use crate::classical::multiply_matrices;
use crate::error::{MatrixError, MatrixResult, ShapeRequirement};
use crate::matrix::Matrix;
use crate::multiplier::Multiplier;
use block::{Block, Quadrants};
use std::borrow::Cow;

/// Left and right operand of one of the seven sub-products.
type BlockPair<'a> = (Cow<'a, Block>, Cow<'a, Block>);

/// Tuning knobs for [`StrassenMultiplier`]. None of them change results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrassenParams {
    /// Blocks of this order or smaller are multiplied classically.
    /// Must be a power of two; 1 means recurse all the way down.
    pub cutover: usize,
    /// Number of top recursion levels whose seven products run on the rayon
    /// pool. Ignored unless the `parallel` feature is enabled.
    pub parallel_depth: usize,
}

impl StrassenParams {
    /// Textbook Strassen: recurse down to scalars, single-threaded.
    pub const PURE: StrassenParams = StrassenParams {
        cutover: 1,
        parallel_depth: 0,
    };

    /// Hand the classical kernel anything 64×64 or smaller.
    pub const TUNED: StrassenParams = StrassenParams {
        cutover: 64,
        parallel_depth: 0,
    };

    /// Validate parameters
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.cutover == 0 {
            return Err("cutover must be positive");
        }
        if !self.cutover.is_power_of_two() {
            return Err("cutover must be a power of two");
        }
        Ok(())
    }
}

impl Default for StrassenParams {
    fn default() -> Self {
        StrassenParams::PURE
    }
}

/// Recursive block multiplier for square power-of-two matrices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrassenMultiplier {
    params: StrassenParams,
}

impl StrassenMultiplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if `params` fails [`StrassenParams::validate`].
    pub fn with_params(params: StrassenParams) -> Self {
        if let Err(msg) = params.validate() {
            panic!("invalid Strassen parameters {:?}: {}", params, msg);
        }
        StrassenMultiplier { params }
    }

    pub fn params(&self) -> StrassenParams {
        self.params
    }

    /// Check the square / equal-order / power-of-two precondition and return
    /// the common order. The order must also be even, so 1×1 is refused.
    fn check_shapes(a: &Matrix, b: &Matrix) -> MatrixResult<usize> {
        let fail = |requirement| MatrixError::incompatible(a.order(), b.order(), requirement);

        if !a.is_square() || !b.is_square() {
            return Err(fail(ShapeRequirement::Square));
        }
        if a.rows() != b.rows() {
            return Err(fail(ShapeRequirement::EqualOrder));
        }
        let n = a.rows();
        if n < 2 || !n.is_power_of_two() {
            return Err(fail(ShapeRequirement::PowerOfTwo));
        }
        Ok(n)
    }

    fn product(&self, a: &Block, b: &Block, depth: usize) -> Block {
        let n = a.n;
        if n == 1 {
            return Block::new(1, vec![a.data[0].wrapping_mul(b.data[0])]);
        }
        if n <= self.params.cutover {
            log::trace!("strassen depth {}: classical kernel on {}x{}", depth, n, n);
            return Block::new(n, multiply_matrices(&a.data, &b.data, n));
        }

        let m = {
            let qa = a.split();
            let qb = b.split();
            let operands: [BlockPair<'_>; 7] = [
                (Cow::Owned(&qa.tl + &qa.br), Cow::Owned(&qb.tl + &qb.br)),
                (Cow::Owned(&qa.bl + &qa.br), Cow::Borrowed(&qb.tl)),
                (Cow::Borrowed(&qa.tl), Cow::Owned(&qb.tr - &qb.br)),
                (Cow::Borrowed(&qa.br), Cow::Owned(&qb.bl - &qb.tl)),
                (Cow::Owned(&qa.tl + &qa.tr), Cow::Borrowed(&qb.br)),
                (Cow::Owned(&qa.bl - &qa.tl), Cow::Owned(&qb.tl + &qb.tr)),
                (Cow::Owned(&qa.tr - &qa.br), Cow::Owned(&qb.bl + &qb.br)),
            ];
            self.seven_products(&operands, depth)
        };

        Quadrants {
            tl: &(&(&m[0] + &m[3]) - &m[4]) + &m[6],
            tr: &m[2] + &m[4],
            bl: &m[1] + &m[3],
            br: &(&(&m[0] - &m[1]) + &m[2]) + &m[5],
        }
        .join()
    }

    #[cfg(feature = "parallel")]
    fn seven_products(&self, operands: &[BlockPair<'_>], depth: usize) -> Vec<Block> {
        use rayon::prelude::*;

        if depth < self.params.parallel_depth {
            return operands
                .par_iter()
                .map(|(l, r)| self.product(l, r, depth + 1))
                .collect();
        }
        operands
            .iter()
            .map(|(l, r)| self.product(l, r, depth + 1))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn seven_products(&self, operands: &[BlockPair<'_>], depth: usize) -> Vec<Block> {
        operands
            .iter()
            .map(|(l, r)| self.product(l, r, depth + 1))
            .collect()
    }
}

impl Multiplier for StrassenMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
        let n = Self::check_shapes(a, b)?;
        log::debug!(
            "strassen multiply {}x{} (depth {}, cutover {})",
            n,
            n,
            n.trailing_zeros(),
            self.params.cutover
        );

        let lhs = Block::new(n, a.data().to_vec());
        let rhs = Block::new(n, b.data().to_vec());
        let c = self.product(&lhs, &rhs, 0);
        Ok(Matrix::from_raw(n, n, c.data))
    }
}

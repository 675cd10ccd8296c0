// src/strassen/block.rs
//! Square scratch blocks used inside the Strassen recursion.

use crate::types::Scalar;
use std::ops::{Add, Sub};

/// An n×n row-major grid owned by one recursion frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Block {
    pub n: usize,
    pub data: Vec<Scalar>,
}

/// The four (n/2)×(n/2) quadrants of a block.
#[derive(Debug)]
pub(crate) struct Quadrants {
    pub tl: Block,
    pub tr: Block,
    pub bl: Block,
    pub br: Block,
}

impl Block {
    #[inline]
    pub fn new(n: usize, data: Vec<Scalar>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Block { n, data }
    }

    /// Copy `n`×`n` cells starting at `(row, col)` of this block.
    fn sub_block(&self, row: usize, col: usize, n: usize) -> Block {
        let mut data = Vec::with_capacity(n * n);
        for i in row..row + n {
            let start = i * self.n + col;
            data.extend_from_slice(&self.data[start..start + n]);
        }
        Block { n, data }
    }

    /// Split at the row and column midpoints. `n` must be even.
    pub fn split(&self) -> Quadrants {
        debug_assert!(self.n % 2 == 0, "cannot split odd order {}", self.n);
        let h = self.n / 2;
        Quadrants {
            tl: self.sub_block(0, 0, h),
            tr: self.sub_block(0, h, h),
            bl: self.sub_block(h, 0, h),
            br: self.sub_block(h, h, h),
        }
    }
}

impl Quadrants {
    /// Reassemble four equal quadrants into one block of twice the order.
    pub fn join(self) -> Block {
        let h = self.tl.n;
        let n = 2 * h;
        let mut data = Vec::with_capacity(n * n);
        for (left, right) in [(&self.tl, &self.tr), (&self.bl, &self.br)] {
            for i in 0..h {
                data.extend_from_slice(&left.data[i * h..(i + 1) * h]);
                data.extend_from_slice(&right.data[i * h..(i + 1) * h]);
            }
        }
        Block { n, data }
    }
}

fn zip_with(a: &Block, b: &Block, f: impl Fn(Scalar, Scalar) -> Scalar) -> Block {
    debug_assert_eq!(a.n, b.n);
    let data = a.data.iter().zip(&b.data).map(|(&x, &y)| f(x, y)).collect();
    Block { n: a.n, data }
}

impl Add for &Block {
    type Output = Block;
    #[inline]
    fn add(self, rhs: Self) -> Block {
        zip_with(self, rhs, Scalar::wrapping_add)
    }
}

impl Sub for &Block {
    type Output = Block;
    #[inline]
    fn sub(self, rhs: Self) -> Block {
        zip_with(self, rhs, Scalar::wrapping_sub)
    }
}

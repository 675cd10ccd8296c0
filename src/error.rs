// src/error.rs
//! Error type for matrix construction and multiplication.

use std::fmt;
use thiserror::Error;

/// Shape rule a multiplication failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRequirement {
    /// Left operand's column count must equal the right operand's row count.
    Multiplicable,
    /// Both operands must be square.
    Square,
    /// Both operands must have the same order.
    EqualOrder,
    /// The common order must be a power of two and at least 2.
    PowerOfTwo,
}

impl fmt::Display for ShapeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multiplicable => write!(f, "left columns must equal right rows"),
            Self::Square => write!(f, "operands must be square"),
            Self::EqualOrder => write!(f, "operands must have equal order"),
            Self::PowerOfTwo => write!(f, "order must be an even power of two"),
        }
    }
}

/// Errors raised by [`Matrix`](crate::matrix::Matrix) and the multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row index, column index or row length exceeded its bound.
    #[error("out of range: {what} {index} (limit {bound})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        bound: usize,
    },

    /// Operand orders violate the algorithm's precondition.
    #[error("incompatible shapes {left:?} x {right:?}: {requirement}")]
    IncompatibleShape {
        left: (usize, usize),
        right: (usize, usize),
        requirement: ShapeRequirement,
    },
}

impl MatrixError {
    pub(crate) fn incompatible(
        left: (usize, usize),
        right: (usize, usize),
        requirement: ShapeRequirement,
    ) -> Self {
        MatrixError::IncompatibleShape {
            left,
            right,
            requirement,
        }
    }

    /// True for [`MatrixError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, MatrixError::OutOfRange { .. })
    }

    /// True for [`MatrixError::IncompatibleShape`].
    pub fn is_incompatible_shape(&self) -> bool {
        matches!(self, MatrixError::IncompatibleShape { .. })
    }
}

pub type MatrixResult<T> = Result<T, MatrixError>;

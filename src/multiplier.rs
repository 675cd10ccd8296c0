//! The multiplication capability shared by every algorithm.

use crate::classical::ClassicalMultiplier;
use crate::error::MatrixResult;
use crate::matrix::Matrix;
use crate::strassen::StrassenMultiplier;
use std::fmt;

/// Multiplies two matrices.
///
/// Implementations never modify their inputs and never return a partial
/// result: either the full product of shape `(a.rows(), b.columns())` or an
/// [`IncompatibleShape`](crate::error::MatrixError::IncompatibleShape) error.
/// All implementations give bit-identical results on inputs they accept.
pub trait Multiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> MatrixResult<Matrix>;
}

impl<M: Multiplier + ?Sized> Multiplier for &M {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
        (**self).multiply(a, b)
    }
}

impl<M: Multiplier + ?Sized> Multiplier for Box<M> {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
        (**self).multiply(a, b)
    }
}

/// Algorithm selector for callers that pick at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Triple-loop product, any compatible shapes.
    Classical,
    /// Strassen recursion with default parameters; square power-of-two only.
    Strassen,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Classical, Algorithm::Strassen];

    /// Boxed multiplier for this algorithm with its default configuration.
    pub fn multiplier(self) -> Box<dyn Multiplier + Send + Sync> {
        match self {
            Algorithm::Classical => Box::new(ClassicalMultiplier),
            Algorithm::Strassen => Box::new(StrassenMultiplier::default()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classical => write!(f, "Classical"),
            Self::Strassen => write!(f, "Strassen"),
        }
    }
}

impl Multiplier for Algorithm {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
        match self {
            Algorithm::Classical => ClassicalMultiplier.multiply(a, b),
            Algorithm::Strassen => StrassenMultiplier::default().multiply(a, b),
        }
    }
}

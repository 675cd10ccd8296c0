//! # strassen_engine Quickstart
//!
//! ```rust
//! use strassen_engine::prelude::*;
//! use strassen_engine::ShapeRequirement;
//!
//! let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
//!
//! // pick the algorithm at runtime
//! for alg in Algorithm::ALL {
//!     let square = alg.multiply(&a, &a).unwrap();
//!     assert_eq!(square.to_rows(), vec![vec![7, 10], vec![15, 22]]);
//! }
//!
//! // 2×2 · 2×3 is fine classically, but Strassen wants square operands
//! assert_eq!(Algorithm::Classical.multiply(&a, &b).unwrap().order(), (2, 3));
//! match Algorithm::Strassen.multiply(&a, &b) {
//!     Err(MatrixError::IncompatibleShape { requirement, .. }) => {
//!         assert_eq!(requirement, ShapeRequirement::Square)
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod classical;
pub mod error;
pub mod matrix;
pub mod multiplier;
pub mod prelude;
pub mod strassen;
pub mod types;

// --- Public API exports ---

pub use classical::{multiply_matrices, ClassicalMultiplier};
pub use error::{MatrixError, MatrixResult, ShapeRequirement};
pub use matrix::Matrix;
pub use multiplier::{Algorithm, Multiplier};
pub use strassen::{StrassenMultiplier, StrassenParams};
pub use types::Scalar;

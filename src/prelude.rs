// src/prelude.rs
//! The “everything” import for strassen_engine.
//!
//! Brings you the most commonly used types with one glob:
//! ```rust
//! use strassen_engine::prelude::*;
//! ```

// core data types
pub use crate::error::{MatrixError, MatrixResult};
pub use crate::matrix::Matrix;
pub use crate::types::Scalar;

// multipliers
pub use crate::classical::ClassicalMultiplier;
pub use crate::multiplier::{Algorithm, Multiplier};
pub use crate::strassen::{StrassenMultiplier, StrassenParams};

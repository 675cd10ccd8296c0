// src/types.rs
//! Element type shared by every matrix in the crate.

/// Matrix cell type.
///
/// All arithmetic on cells is wrapping (two's complement), so sums and
/// products that overflow behave like native fixed-width integers instead of
/// panicking in debug builds.
pub type Scalar = i32;

// src/matrix.rs
//! Fixed-shape dense integer matrix.
//!
//! Cells are stored row-major in a single `Vec`, so row `i` occupies
//! `data[i * cols..(i + 1) * cols]`:
//!
//! ```text
//! [[a, b, c],
//!  [d, e, f]]   ->   [a, b, c, d, e, f]
//! ```

use crate::error::{MatrixError, MatrixResult};
use crate::types::Scalar;
use std::fmt;

/// A rows×cols grid of signed integers.
///
/// The shape is fixed at construction; only the contents change.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Scalar>,
}

impl Matrix {
    /// Create a zero-filled `rows`×`cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero, or if `rows * cols` overflows
    /// `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "Matrix dimensions must be positive, got {}x{}",
            rows,
            cols
        );
        let len = rows
            .checked_mul(cols)
            .expect("Matrix dimensions overflow usize");
        Matrix {
            rows,
            cols,
            data: vec![0; len],
        }
    }

    /// Create the `n`×`n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::new(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Build a matrix from a list of rows.
    ///
    /// The column count is taken from the first row. Each row is stored with
    /// [`set_row`](Self::set_row), so shorter rows are zero-padded and longer
    /// ones are rejected.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or its first row is empty.
    pub fn from_rows(rows: &[Vec<Scalar>]) -> MatrixResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut m = Matrix::new(rows.len(), cols);
        for (i, row) in rows.iter().enumerate() {
            m.set_row(i, row)?;
        }
        Ok(m)
    }

    /// Wrap an already row-major buffer. Callers guarantee the length.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<Scalar>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Matrix { rows, cols, data }
    }

    /// Replace row `index` with `values`.
    ///
    /// If `values` is shorter than the column count, the remaining cells of
    /// the row are zeroed so every row keeps exactly `columns()` entries.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if `values` has more entries than the
    /// matrix has columns, or if `index` is not an existing row.
    pub fn set_row(&mut self, index: usize, values: &[Scalar]) -> MatrixResult<()> {
        if values.len() > self.cols {
            return Err(MatrixError::OutOfRange {
                what: "row length",
                index: values.len(),
                bound: self.cols,
            });
        }
        if index >= self.rows {
            return Err(MatrixError::OutOfRange {
                what: "row index",
                index,
                bound: self.rows,
            });
        }

        let start = index * self.cols;
        let row = &mut self.data[start..start + self.cols];
        row[..values.len()].copy_from_slice(values);
        row[values.len()..].fill(0);
        Ok(())
    }

    /// Set a single cell.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if `(row, col)` is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: Scalar) -> MatrixResult<()> {
        if row >= self.rows {
            return Err(MatrixError::OutOfRange {
                what: "row index",
                index: row,
                bound: self.rows,
            });
        }
        if col >= self.cols {
            return Err(MatrixError::OutOfRange {
                what: "column index",
                index: col,
                bound: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Cell at `(row, col)`, or `None` outside the matrix.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= rows()`, like slice indexing.
    #[inline]
    pub fn row(&self, index: usize) -> &[Scalar] {
        assert!(
            index < self.rows,
            "row index {} out of range for {} rows",
            index,
            self.rows
        );
        &self.data[index * self.cols..(index + 1) * self.cols]
    }

    /// Iterate over the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Scalar]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn order(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Read-only view of the whole grid in row-major order.
    ///
    /// This borrows the matrix's own storage; it cannot be used to mutate
    /// the matrix. Use [`to_rows`](Self::to_rows) for an owned copy.
    #[inline]
    pub fn data(&self) -> &[Scalar] {
        &self.data
    }

    /// Owned nested copy of the grid, one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<Scalar>> {
        self.iter_rows().map(<[Scalar]>::to_vec).collect()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True if `self * other` is defined, i.e. `self.columns() == other.rows()`.
    ///
    /// The relation is directional: `a.is_multiplicable_with(&b)` says
    /// nothing about `b.is_multiplicable_with(&a)`.
    #[inline]
    pub fn is_multiplicable_with(&self, other: &Matrix) -> bool {
        self.cols == other.rows
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix {}x{} ", self.rows, self.cols)?;
        f.debug_list().entries(self.iter_rows()).finish()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

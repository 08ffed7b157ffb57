//! Vector and matrix value types.
//!
//! - `Vector`: `DVector<f64>`; dimensionality is its length.
//! - `IntVector`: pivot sequences and constraint-index tuples.
//! - `Matrix`: rows of equal length. Row insertion checks the column count and
//!   never pads or truncates.

use std::fmt;
use std::ops::{Index, IndexMut};

use nalgebra::{DMatrix, DVector};

use crate::error::{DomainError, Result};

pub type Vector = DVector<f64>;
pub type IntVector = Vec<usize>;

/// Dense row-major view of a small real matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::shell()
    }
}

impl Matrix {
    /// Ready-to-use `rows x columns` matrix of zeros.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            data: DMatrix::zeros(rows, columns),
        }
    }

    /// Empty matrix; the first `add_row` fixes the column count.
    pub fn shell() -> Self {
        Self::zeros(0, 0)
    }

    pub fn from_rows(rows: &[Vector]) -> Result<Self> {
        let mut m = Self::shell();
        for r in rows {
            m.add_row(r)?;
        }
        Ok(m)
    }

    #[inline]
    pub fn from_dmatrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    #[inline]
    pub fn into_dmatrix(self) -> DMatrix<f64> {
        self.data
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Column count (0 when no row has been added).
    #[inline]
    pub fn columns(&self) -> usize {
        if self.data.nrows() == 0 {
            0
        } else {
            self.data.ncols()
        }
    }

    #[inline]
    pub fn dimensionality(&self) -> usize {
        self.columns()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.data.nrows() == self.data.ncols()
    }

    /// Append a copy of `row`. On mismatch the matrix is left unchanged.
    pub fn add_row(&mut self, row: &Vector) -> Result<()> {
        if self.is_empty() {
            self.data = DMatrix::from_row_slice(1, row.len(), row.as_slice());
            return Ok(());
        }
        if row.len() != self.data.ncols() {
            return Err(DomainError::DimensionMismatch {
                expected: self.data.ncols(),
                got: row.len(),
            });
        }
        let n = self.data.nrows();
        let grown = std::mem::replace(&mut self.data, DMatrix::zeros(0, 0)).insert_row(n, 0.0);
        self.data = grown;
        self.data.row_mut(n).copy_from(&row.transpose());
        Ok(())
    }

    /// Copy of the row at `index`.
    pub fn row(&self, index: usize) -> Result<Vector> {
        if index >= self.rows() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.rows(),
            });
        }
        Ok(self.data.row(index).transpose())
    }

    /// Sub-matrix of the given rows, in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Matrix> {
        if let Some(&index) = indices.iter().find(|&&i| i >= self.rows()) {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.rows(),
            });
        }
        Ok(Self {
            data: self.data.select_rows(indices.iter()),
        })
    }

    /// `self · x`, dimension-checked.
    pub fn mul_vector(&self, x: &Vector) -> Result<Vector> {
        if x.len() != self.columns() {
            return Err(DomainError::DimensionMismatch {
                expected: self.columns(),
                got: x.len(),
            });
        }
        Ok(&self.data * x)
    }

    #[inline]
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        self.data.swap_rows(a, b);
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    #[inline]
    fn index(&self, ij: (usize, usize)) -> &f64 {
        &self.data[ij]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, ij: (usize, usize)) -> &mut f64 {
        &mut self.data[ij]
    }
}

/// Row-order rendering, `{:6.2} ` per entry.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty Matrix");
        }
        for i in 0..self.rows() {
            for j in 0..self.columns() {
                write!(f, "{:6.2} ", self.data[(i, j)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// `{:6.2} ` per entry (note the trailing space).
pub fn format_vector(v: &Vector) -> String {
    v.iter().map(|x| format!("{:6.2} ", x)).collect()
}

/// `{:3} ` per entry (note the trailing space).
pub fn format_indices(v: &[usize]) -> String {
    v.iter().map(|i| format!("{:3} ", i)).collect()
}

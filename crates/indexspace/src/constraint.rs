//! Constraint sets: the half-spaces `a_i·x <= b_i` bounding a domain of computation.
//!
//! Example: the domain `{ (i,j,k) | 1 <= i,j,k <= N }` is the six rows
//!
//! ```text
//!   i <= N       -i <= -1
//!   j <= N       -j <= -1
//!   k <= N       -k <= -1
//! ```
//!
//! and renders (transposed, one line per index variable) as
//!
//! ```text
//!   1.00   0.00   0.00  -1.00   0.00   0.00
//!   0.00   1.00   0.00   0.00  -1.00   0.00
//!   0.00   0.00   1.00   0.00   0.00  -1.00
//! ```
//!
//! Invariants:
//! - Every constraint shares one dimensionality, fixed by the first insertion.
//! - Append-only; lookup is positional, never by value.

use std::fmt;

use crate::error::{DomainError, Result};
use crate::linalg::{Matrix, Vector};

/// Ordered collection of coefficient rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstraintSet {
    rows: Matrix,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows in order; fails on the first row of the wrong length.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vector>,
    {
        let mut set = Self::new();
        for r in rows {
            set.add(&r)?;
        }
        Ok(set)
    }

    /// Append a copy of `constraint`. On error the set is unchanged.
    pub fn add(&mut self, constraint: &Vector) -> Result<()> {
        if constraint.is_empty() {
            return Err(DomainError::EmptyConstraint);
        }
        self.rows.add_row(constraint)
    }

    /// Copy of the constraint at `index`.
    pub fn get(&self, index: usize) -> Result<Vector> {
        self.rows.row(index)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows.rows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of index variables; 0 for an empty set.
    #[inline]
    pub fn dimensionality(&self) -> usize {
        self.rows.dimensionality()
    }

    /// Coefficient matrix, one constraint per row.
    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.rows
    }

    /// Square sub-system of the chosen constraints, in the given order.
    pub fn select(&self, indices: &[usize]) -> Result<Matrix> {
        self.rows.select_rows(indices)
    }

    /// True iff `a_i·x <= b_i + eps·s_i` for every constraint, where
    /// `s_i = 1 + max(|b_i|, |a_i|·|x|)`.
    ///
    /// The slack grows with the magnitudes entering row `i`, so rounding in a
    /// solved point at large index extents is not mistaken for a violation.
    pub fn satisfies(&self, x: &Vector, b: &Vector, eps: f64) -> Result<bool> {
        if b.len() != self.size() {
            return Err(DomainError::DimensionMismatch {
                expected: self.size(),
                got: b.len(),
            });
        }
        let ax = self.rows.mul_vector(x)?;
        let abs_x = x.abs();
        let m = self.rows.as_dmatrix();
        Ok((0..self.size()).all(|i| {
            let magnitude = m.row(i).abs().transpose().dot(&abs_x);
            let slack = eps * (1.0 + b[i].abs().max(magnitude));
            ax[i] <= b[i] + slack
        }))
    }

    pub fn iter(&self) -> impl Iterator<Item = Vector> + '_ {
        (0..self.size()).map(move |i| self.rows.as_dmatrix().row(i).transpose())
    }
}

/// Transposed rendering: one line per coordinate, entries in insertion order.
impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty Constraint Set");
        }
        let m = self.rows.as_dmatrix();
        for coord in 0..self.dimensionality() {
            for c in 0..self.size() {
                write!(f, "{:6.2} ", m[(c, coord)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Canonical domains of computation used in tests, benchmarks, and demos.
//!
//! Row order is part of the contract: constraint indices in the results refer
//! to it.
//!
//! - `cube(n)`: `{ (i,j,k) | 1 <= i,j,k <= n }`, the six rows
//!   `i<=n, j<=n, k<=n, -i<=-1, -j<=-1, -k<=-1`.
//! - `hyperbox(lower, upper)`: all upper bounds first, then all lower bounds.
//! - `corner_simplex(d, n)`: `x_i >= 1` for each axis, then `Σ x_i <= n`.
//! - `lower_triangular(n)`: `{ (i,j,k) | 1 <= j <= i <= n, 1 <= k <= n }`.

use crate::api::Domain;
use crate::constraint::ConstraintSet;
use crate::error::{DomainError, Result};
use crate::linalg::Vector;

fn from_pairs(rows: Vec<(Vector, f64)>) -> Result<Domain> {
    let rhs = Vector::from_iterator(rows.len(), rows.iter().map(|(_, c)| *c));
    let constraints = ConstraintSet::from_rows(rows.into_iter().map(|(a, _)| a))?;
    Ok(Domain { constraints, rhs })
}

fn axis(d: usize, i: usize, s: f64) -> Vector {
    let mut v = Vector::zeros(d);
    v[i] = s;
    v
}

/// The 3D index cube `[1, n]^3`.
pub fn cube(n: f64) -> Result<Domain> {
    hyperbox(&[1.0; 3], &[n; 3])
}

/// Axis-aligned box `lower <= x <= upper`.
pub fn hyperbox(lower: &[f64], upper: &[f64]) -> Result<Domain> {
    if lower.len() != upper.len() {
        return Err(DomainError::DimensionMismatch {
            expected: upper.len(),
            got: lower.len(),
        });
    }
    let d = upper.len();
    let mut rows = Vec::with_capacity(2 * d);
    for (i, &u) in upper.iter().enumerate() {
        rows.push((axis(d, i, 1.0), u));
    }
    for (i, &l) in lower.iter().enumerate() {
        rows.push((axis(d, i, -1.0), -l));
    }
    from_pairs(rows)
}

/// Corner simplex `{ x | x_i >= 1, Σ x_i <= n }`; non-empty for `n > d`.
pub fn corner_simplex(d: usize, n: f64) -> Result<Domain> {
    let mut rows: Vec<(Vector, f64)> = (0..d).map(|i| (axis(d, i, -1.0), -1.0)).collect();
    rows.push((Vector::repeat(d, 1.0), n));
    from_pairs(rows)
}

/// Triangular prism of a lower-triangular recurrence over `k`.
pub fn lower_triangular(n: f64) -> Result<Domain> {
    from_pairs(vec![
        (Vector::from_vec(vec![1.0, 0.0, 0.0]), n),
        (Vector::from_vec(vec![0.0, -1.0, 0.0]), -1.0),
        (Vector::from_vec(vec![-1.0, 1.0, 0.0]), 0.0),
        (Vector::from_vec(vec![0.0, 0.0, 1.0]), n),
        (Vector::from_vec(vec![0.0, 0.0, -1.0]), -1.0),
    ])
}

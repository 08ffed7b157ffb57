//! Small dense linear algebra for index-space geometry.
//!
//! Purpose
//! - Owned, dimension-checked row matrices (`Matrix`) over `nalgebra::DMatrix`.
//! - Gaussian elimination with partial pivoting that keeps going past a
//!   vanishing pivot, so a rank-deficient system still yields a factorization
//!   plus a `full_rank = false` flag instead of an early abort.
//! - Forward/backward substitution against that factorization.
//!
//! Numerics
//! - Rank detection uses an absolute pivot threshold (`PIVOT_EPS = 1e-12`),
//!   not one scaled by the matrix norm. Inputs in this domain are small systems
//!   with small integer coefficients; heavily scaled rows may be misclassified.
//!
//! No knowledge of constraints or geometry lives here.

mod lu;
mod types;

pub use lu::{factorize, factorize_in_place, solve, LuFactors, PIVOT_EPS};
pub use types::{format_indices, format_vector, IntVector, Matrix, Vector};

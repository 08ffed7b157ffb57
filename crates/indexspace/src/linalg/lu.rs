//! Pivoted LU factorization and triangular solve.

use super::types::{IntVector, Matrix, Vector};
use crate::error::{DomainError, Result};

/// Absolute pivot threshold below which a column is treated as dependent.
///
/// Not scaled by the matrix magnitude. Fine for the small integer systems of
/// index-space constraints; rows scaled by ~1e-12 or smaller read as singular.
pub const PIVOT_EPS: f64 = 1e-12;

/// Combined factors of `P·A = L·U`.
///
/// Invariants:
/// - `lu` holds U on and above the diagonal and the L multipliers strictly
///   below it (unit diagonal of L implicit).
/// - `pivots[k]` is the row swapped into position `k` at elimination step `k`.
/// - `full_rank` is true iff every pivot magnitude exceeded `PIVOT_EPS`.
#[derive(Clone, Debug)]
pub struct LuFactors {
    pub lu: Matrix,
    pub pivots: IntVector,
    pub full_rank: bool,
}

impl LuFactors {
    #[inline]
    pub fn dimension(&self) -> usize {
        self.lu.rows()
    }
}

/// Factorize a copy of `a`; the input stays untouched.
pub fn factorize(a: &Matrix) -> Result<LuFactors> {
    factorize_in_place(a.clone())
}

/// Factorize `a`, reusing its storage for the combined factors.
///
/// Elimination continues past a pivot with `|p| <= PIVOT_EPS`: the column is
/// left unnormalized, `full_rank` drops to false, and later columns are still
/// processed so the returned factors remain informative.
pub fn factorize_in_place(mut a: Matrix) -> Result<LuFactors> {
    if !a.is_square() {
        return Err(DomainError::NotSquare {
            rows: a.rows(),
            cols: a.columns(),
        });
    }
    let n = a.rows();
    let mut pivots: IntVector = vec![0; n];
    let mut full_rank = true;

    for k in 0..n {
        // First row with the largest magnitude in column k wins ties.
        let mut pk = k;
        let mut max = a[(k, k)].abs();
        for j in k + 1..n {
            let v = a[(j, k)].abs();
            if max < v {
                max = v;
                pk = j;
            }
        }
        pivots[k] = pk;
        if pk != k {
            a.swap_rows(k, pk);
        }

        let akk = a[(k, k)];
        if akk.abs() > PIVOT_EPS {
            for i in k + 1..n {
                a[(i, k)] /= akk;
            }
        } else {
            full_rank = false;
        }

        for i in k + 1..n {
            let lik = a[(i, k)];
            for j in k + 1..n {
                let ukj = a[(k, j)];
                a[(i, j)] -= lik * ukj;
            }
        }
    }

    Ok(LuFactors {
        lu: a,
        pivots,
        full_rank,
    })
}

/// Solve `A·x = b` from the factors of `A`.
///
/// Refuses rank-deficient factors rather than dividing by a vanishing pivot.
pub fn solve(f: &LuFactors, b: &Vector) -> Result<Vector> {
    let n = f.dimension();
    if b.len() != n {
        return Err(DomainError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    if !f.full_rank {
        return Err(DomainError::RankDeficient { combination: None });
    }
    let lu = &f.lu;
    let mut x = b.clone();

    // Pb, in the order the pivots were recorded.
    for i in 0..n {
        let p = f.pivots[i];
        if p != i {
            x.swap_rows(i, p);
        }
    }
    // L y = P b
    for i in 0..n {
        let mut acc = x[i];
        for j in 0..i {
            acc -= lu[(i, j)] * x[j];
        }
        x[i] = acc;
    }
    // U x = y
    for i in (0..n).rev() {
        let mut acc = x[i];
        for j in i + 1..n {
            acc -= lu[(i, j)] * x[j];
        }
        x[i] = acc / lu[(i, i)];
    }
    Ok(x)
}

//! H→V: vertices as unique intersections of `d` boundary hyperplanes.

use std::collections::BTreeMap;

use super::cfg::HullCfg;
use super::combinations::combinations;
use super::observe::HullObserver;
use crate::constraint::ConstraintSet;
use crate::error::{DomainError, Result};
use crate::linalg::{factorize_in_place, solve, IntVector, Vector};

/// A point together with the constraints whose boundaries produced it.
///
/// `constraints` is ascending and has exactly `d` entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub point: Vector,
    pub constraints: IntVector,
}

/// Output of one generation pass; read-only afterwards except for reordering
/// incidence lists.
#[derive(Clone, Debug, Default)]
pub struct VertexSet {
    pub dimensionality: usize,
    pub vertices: Vec<Vertex>,
    /// Constraint index → positions in `vertices` lying on its boundary, in
    /// generation order. Constraints without vertices have no entry.
    pub incidence: BTreeMap<usize, Vec<usize>>,
}

impl VertexSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions on `constraint`'s boundary (empty if none).
    pub fn incident(&self, constraint: usize) -> &[usize] {
        self.incidence
            .get(&constraint)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// First vertex within `tol` (Euclidean) of `point`.
    pub fn find(&self, point: &Vector, tol: f64) -> Option<&Vertex> {
        self.vertices
            .iter()
            .find(|v| v.point.len() == point.len() && (&v.point - point).norm() <= tol)
    }
}

/// Enumerate every `d`-combination of constraints and keep full-rank solutions.
///
/// `d` is the set's dimensionality. Sets with fewer than `d` constraints yield
/// no vertices. With `cfg.drop_infeasible`, intersections violating another
/// constraint beyond the row-scaled `cfg.feasibility_eps` are skipped as well.
pub fn generate_vertices<O>(
    set: &ConstraintSet,
    b: &Vector,
    cfg: &HullCfg,
    obs: &mut O,
) -> Result<VertexSet>
where
    O: HullObserver + ?Sized,
{
    let n = set.size();
    if b.len() != n {
        return Err(DomainError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    let d = set.dimensionality();
    let _span = tracing::debug_span!("generate_vertices", n, d).entered();

    let mut out = VertexSet {
        dimensionality: d,
        ..VertexSet::default()
    };
    for comb in combinations(n, d) {
        let sub = set.select(&comb)?;
        let rhs = b.select_rows(comb.iter());
        let lu = factorize_in_place(sub)?;
        if !lu.full_rank {
            obs.rank_deficient(&comb);
            continue;
        }
        let x = solve(&lu, &rhs)?;
        if cfg.drop_infeasible && !set.satisfies(&x, b, cfg.feasibility_eps)? {
            obs.infeasible(&comb, &x);
            continue;
        }
        let idx = out.vertices.len();
        for &c in &comb {
            out.incidence.entry(c).or_default().push(idx);
        }
        let v = Vertex {
            point: x,
            constraints: comb,
        };
        obs.vertex(idx, &v);
        out.vertices.push(v);
    }
    tracing::debug!(vertices = out.vertices.len(), "generated");
    Ok(out)
}

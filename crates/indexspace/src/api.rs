//! Boundary calls for front ends: ingest a constraint set, compute its geometry.
//!
//! The request shell (CLI, service) owns transport and schema validation; it
//! talks to the core only through `ingest` and `compute`. Each call builds
//! fresh state, so concurrent requests need no coordination.
//!
//! Shapes
//! - `DomainSpec`: `{ "constraints": [[a_00, a_01, ...], ...], "rhs": [b_0, ...] }`.
//! - `RenderOutput`: vertices with their generating constraints, plus
//!   constraint index → closed polyline (last point equals first).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constraint::ConstraintSet;
use crate::error::{DomainError, Result};
use crate::hull::{
    generate_vertices, organize, ChainBreak, HullCfg, HullObserver, Polygons, TraceObserver,
    VertexSet,
};
use crate::linalg::Vector;

/// Wire-level description of `A·x <= b`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainSpec {
    pub constraints: Vec<Vec<f64>>,
    pub rhs: Vec<f64>,
}

/// Ingested domain: dimension-checked constraints and matching right-hand side.
#[derive(Clone, Debug, PartialEq)]
pub struct Domain {
    pub constraints: ConstraintSet,
    pub rhs: Vector,
}

impl Domain {
    #[inline]
    pub fn dimensionality(&self) -> usize {
        self.constraints.dimensionality()
    }

    pub fn to_spec(&self) -> DomainSpec {
        DomainSpec {
            constraints: self
                .constraints
                .iter()
                .map(|c| c.iter().copied().collect())
                .collect(),
            rhs: self.rhs.iter().copied().collect(),
        }
    }
}

impl TryFrom<&DomainSpec> for Domain {
    type Error = DomainError;

    fn try_from(spec: &DomainSpec) -> Result<Self> {
        ingest(&spec.constraints, &spec.rhs)
    }
}

/// Build a `Domain` from coefficient rows and right-hand side.
///
/// Fails with `DimensionMismatch` if a row's length disagrees with the first
/// row, or if `rhs` does not have one entry per row.
pub fn ingest(rows: &[Vec<f64>], rhs: &[f64]) -> Result<Domain> {
    if rows.len() != rhs.len() {
        return Err(DomainError::DimensionMismatch {
            expected: rows.len(),
            got: rhs.len(),
        });
    }
    let constraints = ConstraintSet::from_rows(rows.iter().map(|r| Vector::from_column_slice(r)))?;
    Ok(Domain {
        constraints,
        rhs: Vector::from_column_slice(rhs),
    })
}

/// Vertices and per-constraint polygons of one domain.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub vertices: VertexSet,
    pub polygons: Polygons,
}

impl Analysis {
    pub fn chain_breaks(&self) -> impl Iterator<Item = &ChainBreak> {
        self.polygons.values().flat_map(|p| p.breaks.iter())
    }

    /// Escalate the first chain break to an error.
    pub fn require_closed_chains(&self) -> Result<()> {
        match self.chain_breaks().next() {
            Some(b) => Err(DomainError::BrokenAdjacencyChain {
                constraint: b.constraint,
                position: b.position,
                closing: b.closing,
            }),
            None => Ok(()),
        }
    }

    /// Plain-data copy for serialization.
    pub fn render(&self) -> RenderOutput {
        RenderOutput {
            dimensionality: self.vertices.dimensionality,
            vertices: self
                .vertices
                .vertices
                .iter()
                .map(|v| RenderVertex {
                    point: v.point.iter().copied().collect(),
                    constraints: v.constraints.clone(),
                })
                .collect(),
            polylines: self
                .polygons
                .iter()
                .map(|(&c, p)| {
                    let pts = p
                        .polyline
                        .iter()
                        .map(|x| x.iter().copied().collect())
                        .collect();
                    (c, pts)
                })
                .collect(),
            diagnostics: self.chain_breaks().copied().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderVertex {
    pub point: Vec<f64>,
    pub constraints: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub dimensionality: usize,
    pub vertices: Vec<RenderVertex>,
    pub polylines: BTreeMap<usize, Vec<Vec<f64>>>,
    pub diagnostics: Vec<ChainBreak>,
}

/// `compute_with` using default tolerances and `tracing` diagnostics.
pub fn compute(domain: &Domain) -> Result<Analysis> {
    compute_with(domain, &HullCfg::default(), &mut TraceObserver)
}

pub fn compute_with<O>(domain: &Domain, cfg: &HullCfg, obs: &mut O) -> Result<Analysis>
where
    O: HullObserver + ?Sized,
{
    let vertices = generate_vertices(&domain.constraints, &domain.rhs, cfg, obs)?;
    let polygons = organize(&domain.constraints, &vertices, cfg, obs)?;
    Ok(Analysis { vertices, polygons })
}

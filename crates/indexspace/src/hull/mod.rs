//! Vertices and boundary polygons of a bounded domain of computation.
//!
//! Purpose
//! - Turn a constraint set `A·x <= b` (n rows, dimension d) into its vertices
//!   by solving every `d`-combination of boundary hyperplanes.
//! - For each constraint, order the vertices on its boundary so consecutive
//!   entries share a facet-edge, then emit a closed, offset polyline.
//!
//! Assumptions and conventions
//! - Vertex generation is `C(n, d)` LU solves of size `d x d`; both n and d are
//!   small for index-space domains.
//! - Rank-deficient combinations are skipped, not errors.
//! - Two vertices are adjacent iff their generating combinations share exactly
//!   `d-1` constraint indices.
//! - Diagnostics go through an injected `HullObserver`; nothing here prints.

mod cfg;
mod combinations;
mod observe;
mod polygon;
mod vertices;

pub use cfg::{HullCfg, FEAS_EPS, OFFSET_SCALE};
pub use combinations::{combinations, Combinations};
pub use observe::{HullEvent, HullObserver, NoopObserver, RecordingObserver, TraceObserver};
pub use polygon::{order_incidence, organize, shared_count, ChainBreak, Polygon, Polygons};
pub use vertices::{generate_vertices, Vertex, VertexSet};

#[cfg(test)]
mod tests;

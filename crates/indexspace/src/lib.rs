//! Domains of computation: constraint sets, vertices, and boundary polygons.
//!
//! A domain of computation (DoC) is the bounded region of an integer index
//! space over which a system of recurrence equations is defined, written as a
//! conjunction of half-spaces `A·x <= b`. This crate turns such a constraint
//! set into render-ready geometry:
//!
//! - `linalg`: dense row matrices plus pivoted LU and triangular solve.
//! - `constraint`: the ordered, dimension-checked `ConstraintSet`.
//! - `hull`: vertex enumeration over `d`-combinations of constraints and the
//!   per-constraint polygon organizer.
//! - `api`: the two boundary calls used by front ends (`ingest`, `compute`).
//!
//! Everything here is synchronous and free of shared state; one analysis owns
//! its constraint set, vertex set, and polylines.

pub mod api;
pub mod constraint;
pub mod error;
pub mod hull;
pub mod linalg;
pub mod rand;
pub mod special;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{DomainError, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{compute, compute_with, ingest, Analysis, Domain, DomainSpec, RenderOutput};
    pub use crate::constraint::ConstraintSet;
    pub use crate::error::{DomainError, Result};
    pub use crate::hull::{
        generate_vertices, organize, ChainBreak, HullCfg, HullObserver, NoopObserver, Polygon,
        TraceObserver, Vertex, VertexSet,
    };
    pub use crate::linalg::{factorize, factorize_in_place, solve, IntVector, LuFactors, Matrix, Vector};
}

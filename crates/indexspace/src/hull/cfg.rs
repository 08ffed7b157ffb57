//! Tolerance and rendering defaults.
//!
//! Defaults are fixed constants; `HullCfg` exists so front ends can override
//! the offset and the feasibility filter per request.

/// Relative slack allowed when checking an intersection point against every
/// constraint; scaled per row by `ConstraintSet::satisfies`.
pub const FEAS_EPS: f64 = 1e-9;
/// Half a unit cell: how far each polyline is pushed along its constraint row.
pub const OFFSET_SCALE: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    pub feasibility_eps: f64,
    pub offset_scale: f64,
    /// Drop full-rank intersections that violate another constraint.
    pub drop_infeasible: bool,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            feasibility_eps: FEAS_EPS,
            offset_scale: OFFSET_SCALE,
            drop_infeasible: true,
        }
    }
}

impl HullCfg {
    /// Keep every full-rank intersection, feasible or not.
    pub fn exhaustive() -> Self {
        Self {
            drop_infeasible: false,
            ..Self::default()
        }
    }
}

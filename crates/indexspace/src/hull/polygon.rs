//! Per-constraint boundary polygons: adjacency ordering and offset polylines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::cfg::HullCfg;
use super::observe::HullObserver;
use super::vertices::{Vertex, VertexSet};
use crate::constraint::ConstraintSet;
use crate::error::Result;
use crate::linalg::Vector;

/// No successor sharing `d-1` generating constraints was found.
///
/// `position` is the slot whose successor is missing; `closing` marks the
/// wrap-around pair (last → first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainBreak {
    pub constraint: usize,
    pub position: usize,
    pub closing: bool,
}

/// One constraint's boundary, ready for rendering.
#[derive(Clone, Debug)]
pub struct Polygon {
    pub constraint: usize,
    /// Vertex positions in adjacency order (no repetition).
    pub ordered: Vec<usize>,
    /// Offset copies of `ordered`, first point repeated at the end.
    pub polyline: Vec<Vector>,
    pub breaks: Vec<ChainBreak>,
}

impl Polygon {
    #[inline]
    pub fn is_closed_chain(&self) -> bool {
        self.breaks.is_empty()
    }
}

/// Constraint index → polygon, iterated in insertion order of constraints.
pub type Polygons = BTreeMap<usize, Polygon>;

/// Number of constraint indices two combinations have in common.
#[inline]
pub fn shared_count(a: &[usize], b: &[usize]) -> usize {
    a.iter().filter(|i| b.contains(i)).count()
}

/// Reorder `list` (positions into `vertices`) so consecutive entries share
/// `d-1` generating constraints.
///
/// Selection-style: for each slot `i`, the first later entry adjacent to slot
/// `i` is swapped into `i+1`. When none exists the slot is left as is and `i`
/// is returned among the gaps. Panics if `list` holds a position outside
/// `vertices`.
pub fn order_incidence(vertices: &[Vertex], list: &mut [usize], d: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let want = d.saturating_sub(1);
    for i in 0..list.len().saturating_sub(1) {
        let cur = &vertices[list[i]].constraints;
        let next = (i + 1..list.len())
            .find(|&j| shared_count(cur, &vertices[list[j]].constraints) == want);
        match next {
            Some(j) => list.swap(i + 1, j),
            None => gaps.push(i),
        }
    }
    gaps
}

/// Order each constraint's incidence list and build its offset, closed polyline.
///
/// The offset is the constraint row scaled by `cfg.offset_scale`; it only
/// touches the emitted points, never `vs`. Breaks are reported to `obs` and
/// kept on the polygon.
pub fn organize<O>(
    set: &ConstraintSet,
    vs: &VertexSet,
    cfg: &HullCfg,
    obs: &mut O,
) -> Result<Polygons>
where
    O: HullObserver + ?Sized,
{
    let d = vs.dimensionality;
    let mut out = Polygons::new();
    for (&constraint, list) in &vs.incidence {
        let mut ordered = list.clone();
        let mut breaks: Vec<ChainBreak> = order_incidence(&vs.vertices, &mut ordered, d)
            .into_iter()
            .map(|position| ChainBreak {
                constraint,
                position,
                closing: false,
            })
            .collect();
        if let (Some(&first), Some(&last)) = (ordered.first(), ordered.last()) {
            let closes = shared_count(
                &vs.vertices[last].constraints,
                &vs.vertices[first].constraints,
            ) == d.saturating_sub(1);
            if ordered.len() > 1 && !closes {
                breaks.push(ChainBreak {
                    constraint,
                    position: ordered.len() - 1,
                    closing: true,
                });
            }
        }
        for b in &breaks {
            obs.chain_break(b);
        }

        let offset = set.get(constraint)? * cfg.offset_scale;
        let mut polyline: Vec<Vector> = ordered
            .iter()
            .map(|&i| &vs.vertices[i].point + &offset)
            .collect();
        if let Some(first) = polyline.first().cloned() {
            polyline.push(first);
        }
        out.insert(
            constraint,
            Polygon {
                constraint,
                ordered,
                polyline,
                breaks,
            },
        );
    }
    Ok(out)
}

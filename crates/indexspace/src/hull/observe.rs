//! Observability hook for vertex generation and polygon ordering.
//!
//! The core computation stays side-effect free: callers inject a
//! `HullObserver` and decide where events go. `TraceObserver` forwards them to
//! `tracing`; `RecordingObserver` keeps them for assertions.

use super::polygon::ChainBreak;
use super::vertices::Vertex;
use crate::linalg::Vector;

pub trait HullObserver {
    /// The combination's rows do not meet in a unique point.
    fn rank_deficient(&mut self, _combination: &[usize]) {}
    /// Full-rank intersection outside the domain (only when filtering).
    fn infeasible(&mut self, _combination: &[usize], _point: &Vector) {}
    /// A vertex was recorded at position `index` of the vertex list.
    fn vertex(&mut self, _index: usize, _vertex: &Vertex) {}
    /// Ordering found no adjacent successor.
    fn chain_break(&mut self, _brk: &ChainBreak) {}
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl HullObserver for NoopObserver {}

/// Emits structured `tracing` events (chain breaks at warn level).
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceObserver;

impl HullObserver for TraceObserver {
    fn rank_deficient(&mut self, combination: &[usize]) {
        tracing::trace!(combination = ?combination, "rank_deficient");
    }

    fn infeasible(&mut self, combination: &[usize], point: &Vector) {
        tracing::trace!(
            combination = ?combination,
            point = ?point.as_slice(),
            "infeasible_intersection"
        );
    }

    fn vertex(&mut self, index: usize, vertex: &Vertex) {
        tracing::debug!(
            index,
            combination = ?vertex.constraints,
            point = ?vertex.point.as_slice(),
            "vertex"
        );
    }

    fn chain_break(&mut self, brk: &ChainBreak) {
        tracing::warn!(
            constraint = brk.constraint,
            position = brk.position,
            closing = brk.closing,
            "broken_adjacency_chain"
        );
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HullEvent {
    RankDeficient(Vec<usize>),
    Infeasible(Vec<usize>),
    Vertex(usize),
    ChainBreak(ChainBreak),
}

/// Keeps every event in arrival order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<HullEvent>,
}

impl RecordingObserver {
    pub fn chain_breaks(&self) -> impl Iterator<Item = &ChainBreak> {
        self.events.iter().filter_map(|e| match e {
            HullEvent::ChainBreak(b) => Some(b),
            _ => None,
        })
    }

    pub fn count_rank_deficient(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HullEvent::RankDeficient(_)))
            .count()
    }
}

impl HullObserver for RecordingObserver {
    fn rank_deficient(&mut self, combination: &[usize]) {
        self.events.push(HullEvent::RankDeficient(combination.to_vec()));
    }

    fn infeasible(&mut self, combination: &[usize], _point: &Vector) {
        self.events.push(HullEvent::Infeasible(combination.to_vec()));
    }

    fn vertex(&mut self, index: usize, _vertex: &Vertex) {
        self.events.push(HullEvent::Vertex(index));
    }

    fn chain_break(&mut self, brk: &ChainBreak) {
        self.events.push(HullEvent::ChainBreak(*brk));
    }
}

//! Error type shared by every fallible operation in the crate.
//!
//! Construction errors (`DimensionMismatch`, `IndexOutOfRange`,
//! `EmptyConstraint`) are caller-input errors: the receiver is left exactly as
//! it was and there is nothing to retry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A row or right-hand side disagrees with the established dimensionality.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Positional lookup past the end of a set or matrix.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A zero-length coefficient row carries no dimensionality.
    #[error("constraint has no coefficients")]
    EmptyConstraint,

    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// The selected rows do not meet in a unique point.
    ///
    /// Vertex generation skips such combinations; callers only see this
    /// variant when they hand a singular factorization to `solve` directly.
    /// `solve` sees a bare matrix, so `combination` is `None` there.
    #[error("rank-deficient system{}", describe_combination(.combination))]
    RankDeficient { combination: Option<Vec<usize>> },

    /// No successor sharing `d-1` generating constraints was found while
    /// ordering a constraint's incidence list. `closing` marks the
    /// wrap-around pair (last → first) rather than a gap inside the chain.
    #[error(
        "broken adjacency chain on constraint {constraint} at position {position}{}",
        closing_note(.closing)
    )]
    BrokenAdjacencyChain {
        constraint: usize,
        position: usize,
        closing: bool,
    },
}

fn closing_note(closing: &bool) -> &'static str {
    if *closing {
        " (closing pair)"
    } else {
        ""
    }
}

fn describe_combination(combination: &Option<Vec<usize>>) -> String {
    match combination {
        Some(c) => format!(" for constraints {c:?}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

//! Reproducible random domains: index boxes with oblique cuts.
//!
//! Model
//! - Start from the box `[1, n]^d` (rows as in `special::hyperbox`).
//! - Append `cuts` half-spaces `a·x <= c` with `a` in the positive orthant and
//!   `c` between the box centre and its upper corner along `a`, so the centre
//!   stays inside and the domain stays bounded and full-dimensional.
//! - Generic draws give simple polytopes (exactly `d` constraints per vertex).
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::Domain;
use crate::error::Result;
use crate::linalg::Vector;
use crate::special::hyperbox;

#[derive(Clone, Copy, Debug)]
pub struct CutBoxCfg {
    pub dimensionality: usize,
    /// Upper bound of every index; the lower bound is 1.
    pub extent: f64,
    pub cuts: usize,
    /// Where the cut plane sits between centre (0) and upper corner (1).
    pub depth: (f64, f64),
}

impl Default for CutBoxCfg {
    fn default() -> Self {
        Self {
            dimensionality: 3,
            extent: 8.0,
            cuts: 2,
            depth: (0.3, 0.8),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        // splitmix64 finalizer
        fn mix(mut z: u64) -> u64 {
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e37_79b9_7f4a_7c15))))
    }
}

/// Draw a cut box; identical tokens give identical domains.
pub fn draw_cut_box(cfg: CutBoxCfg, tok: ReplayToken) -> Result<Domain> {
    let mut rng = tok.rng();
    let d = cfg.dimensionality.max(1);
    let hi = cfg.extent.max(2.0);
    let mut dom = hyperbox(&vec![1.0; d], &vec![hi; d])?;
    let centre = Vector::repeat(d, 0.5 * (1.0 + hi));
    let corner = Vector::repeat(d, hi);
    let (lo_t, hi_t) = (cfg.depth.0.clamp(0.0, 1.0), cfg.depth.1.clamp(0.0, 1.0));
    let mut rhs: Vec<f64> = dom.rhs.iter().copied().collect();
    for _ in 0..cfg.cuts {
        let a = Vector::from_fn(d, |_, _| rng.gen_range(0.2..1.0));
        let t = if hi_t > lo_t {
            rng.gen_range(lo_t..hi_t)
        } else {
            lo_t
        };
        let c = a.dot(&centre) + t * (a.dot(&corner) - a.dot(&centre));
        dom.constraints.add(&a)?;
        rhs.push(c);
    }
    dom.rhs = Vector::from_vec(rhs);
    Ok(dom)
}

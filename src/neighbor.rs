//! Adjacent-transposition neighborhood.
//!
//! A neighbor of a ranking differs from it by one swap of two adjacent
//! participants. Restricting moves to adjacent pairs keeps each step small
//! and lets the cost be updated locally (see [`crate::cost::delta_cost`]).

use rand::Rng;

use crate::cost::delta_cost;
use crate::ranking::{ParticipantId, Ranking, Weight, WeightTable};

/// The pair of positions `(left, left + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjacentSwap {
    left: usize,
}

impl AdjacentSwap {
    pub fn new(left: usize) -> Self {
        Self { left }
    }

    #[inline]
    pub fn left(self) -> usize {
        self.left
    }

    #[inline]
    pub fn right(self) -> usize {
        self.left + 1
    }
}

/// Maps a uniform draw in `[0, 1)` to one of the `n - 1` adjacent pairs.
///
/// `[0, 1)` is split into `n - 1` equal buckets, assigned to the pairs left to
/// right. Returns `None` when the ranking has fewer than two participants.
pub fn pick_adjacent_pair(ranking: &[ParticipantId], random_value: f64) -> Option<AdjacentSwap> {
    if ranking.len() < 2 {
        return None;
    }
    debug_assert!(
        (0.0..1.0).contains(&random_value),
        "random value {random_value} outside [0, 1)"
    );
    let pairs = ranking.len() - 1;
    // float -> usize casts saturate, so a stray negative draw lands in bucket 0
    let bucket = (random_value * pairs as f64) as usize;
    Some(AdjacentSwap::new(bucket.min(pairs - 1)))
}

/// A candidate ranking one adjacent swap away from the current one.
#[derive(Debug, Clone)]
pub struct Proposal {
    pub ranking: Ranking,
    pub cost: Weight,
    /// `cost - current_cost`.
    pub delta: i64,
    pub swap: AdjacentSwap,
}

/// Draws an adjacent pair, swaps it in a copy of `ranking` and prices the copy
/// incrementally from `current_cost`.
///
/// `ranking` is left untouched. Returns `None` for rankings with fewer than
/// two participants.
pub fn propose<R: Rng + ?Sized>(
    ranking: &Ranking,
    weights: &WeightTable,
    current_cost: Weight,
    rng: &mut R,
) -> Option<Proposal> {
    let swap = pick_adjacent_pair(ranking, rng.random::<f64>())?;
    let mut candidate = ranking.clone();
    candidate.swap_adjacent(swap.left());
    let cost = delta_cost(current_cost, &candidate, swap, weights);
    // both costs are bounded by MAX_TOTAL_WEIGHT
    let delta = cost as i64 - current_cost as i64;
    Some(Proposal {
        ranking: candidate,
        cost,
        delta,
        swap,
    })
}

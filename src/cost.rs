//! Kemeny cost of a ranking against a weight table.
//!
//! The cost of a ranking is the total weight of evidence it contradicts: for
//! every pair where `earlier` is placed before `later`, the weight of
//! `(later, earlier)` is charged.
//!
//! Swapping two adjacent participants only changes the relative order of that
//! one pair, so after such a move the cost can be updated in O(1) by
//! [`delta_cost`] instead of rescanning all pairs with [`full_cost`].

use crate::neighbor::AdjacentSwap;
use crate::ranking::{ParticipantId, Weight, WeightTable};

/// Cost of `ranking` recomputed from scratch. O(n²) lookups.
///
/// Empty and single-element rankings cost zero. The result never exceeds
/// `weights.total()`.
pub fn full_cost(ranking: &[ParticipantId], weights: &WeightTable) -> Weight {
    if weights.is_empty() {
        return 0;
    }
    let mut total: Weight = 0;
    for (i, &earlier) in ranking.iter().enumerate() {
        for &later in &ranking[i + 1..] {
            total += weights.weight(later, earlier);
        }
    }
    total
}

/// Signed cost change caused by `swap`, where `ranking` is the ranking
/// *after* the swap was applied.
///
/// After the swap `first` precedes `second`; before it, `second` preceded
/// `first`. The pair stops contradicting `(first, second)` and starts
/// contradicting `(second, first)`. Both weights are bounded by
/// [`crate::ranking::MAX_TOTAL_WEIGHT`], so the difference fits in `i64`.
pub fn swap_delta(ranking: &[ParticipantId], swap: AdjacentSwap, weights: &WeightTable) -> i64 {
    let first = ranking[swap.left()];
    let second = ranking[swap.right()];
    let released = weights.weight(first, second) as i64;
    let charged = weights.weight(second, first) as i64;
    charged - released
}

/// Updated total cost after `swap`, given the cost before it.
///
/// `ranking` is the ranking after the swap. `current_cost` must be the exact
/// cost of the ranking before the swap.
pub fn delta_cost(
    current_cost: Weight,
    ranking: &[ParticipantId],
    swap: AdjacentSwap,
    weights: &WeightTable,
) -> Weight {
    let delta = swap_delta(ranking, swap, weights);
    debug_assert!(
        current_cost.checked_add_signed(delta).is_some(),
        "cost {current_cost} cannot change by {delta}"
    );
    current_cost.saturating_add_signed(delta)
}

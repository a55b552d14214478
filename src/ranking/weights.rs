//! Pairwise preference weights.

use std::collections::HashMap;

use thiserror::Error;

use super::types::ParticipantId;

/// Non-negative weight of evidence. Costs are sums of weights.
pub type Weight = u64;

/// Largest total a [`WeightTable`] may hold.
///
/// Every cost is bounded by the table total, so costs and cost deltas fit in
/// `i64` without overflow.
pub const MAX_TOTAL_WEIGHT: Weight = i64::MAX as Weight;

/// Adding a weight would push the table total past [`MAX_TOTAL_WEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("total weight would exceed {}", MAX_TOTAL_WEIGHT)]
pub struct WeightOverflow;

/// Ordered pair: evidence that `preferred` should rank above `over`.
///
/// `(a, b)` and `(b, a)` are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferencePair {
    pub preferred: ParticipantId,
    pub over: ParticipantId,
}

impl PreferencePair {
    pub fn new(preferred: ParticipantId, over: ParticipantId) -> Self {
        Self { preferred, over }
    }
}

/// Read-only lookup of preference weights keyed by [`PreferencePair`].
///
/// Pairs that were never added weigh zero.
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    entries: HashMap<PreferencePair, Weight>,
    total: Weight,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` to the evidence that `preferred` ranks above `over`.
    ///
    /// Repeated pairs accumulate. Fails, leaving the table unchanged, if the
    /// total would exceed [`MAX_TOTAL_WEIGHT`].
    pub fn try_add(
        &mut self,
        preferred: ParticipantId,
        over: ParticipantId,
        weight: Weight,
    ) -> Result<(), WeightOverflow> {
        let total = self
            .total
            .checked_add(weight)
            .filter(|&total| total <= MAX_TOTAL_WEIGHT)
            .ok_or(WeightOverflow)?;
        self.total = total;
        *self
            .entries
            .entry(PreferencePair::new(preferred, over))
            .or_insert(0) += weight;
        Ok(())
    }

    /// Like [`WeightTable::try_add`].
    ///
    /// # Panics
    ///
    /// Panics if the total would exceed [`MAX_TOTAL_WEIGHT`].
    pub fn add(&mut self, preferred: ParticipantId, over: ParticipantId, weight: Weight) {
        if let Err(err) = self.try_add(preferred, over, weight) {
            panic!("called `WeightTable::add()` with weight {weight}: {err}");
        }
    }

    /// Weight of evidence that `preferred` ranks above `over`, zero if absent.
    #[inline]
    pub fn weight(&self, preferred: ParticipantId, over: ParticipantId) -> Weight {
        self.entries
            .get(&PreferencePair::new(preferred, over))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct ordered pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights; an upper bound on any ranking's cost.
    pub fn total(&self) -> Weight {
        self.total
    }
}

impl FromIterator<(PreferencePair, Weight)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (PreferencePair, Weight)>>(iter: I) -> Self {
        let mut table = WeightTable::new();
        for (pair, weight) in iter {
            table.add(pair.preferred, pair.over, weight);
        }
        table
    }
}

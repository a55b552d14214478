//! Scheduler state.

use crate::cost::full_cost;
use crate::neighbor::Proposal;
use crate::ranking::{Ranking, Weight, WeightTable};

/// Lifecycle of one annealing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Initializing,
    Annealing,
    Converged,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Fewer than two participants: there is no move to make.
    NoMoves,
    /// The stall counter reached the configured limit.
    StallLimit,
    /// The current ranking contradicts no evidence.
    ZeroCost,
    /// `max_proposals` was exhausted.
    ProposalBudget,
    /// The cancellation flag was raised.
    Cancelled,
}

impl StopReason {
    /// The phase the run ends in.
    pub fn phase(self) -> Phase {
        match self {
            StopReason::ProposalBudget | StopReason::Cancelled => Phase::Annealing,
            _ => Phase::Converged,
        }
    }
}

/// Current ranking, its cost, the temperature and the stall counter.
///
/// Owned by the runner for the duration of a run.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    pub ranking: Ranking,
    pub cost: Weight,
    pub temperature: f64,
    pub stalled: usize,
}

impl SearchState {
    pub fn new(ranking: Ranking, weights: &WeightTable, temperature: f64) -> Self {
        let cost = full_cost(&ranking, weights);
        Self {
            ranking,
            cost,
            temperature,
            stalled: 0,
        }
    }

    pub fn accept(&mut self, proposal: Proposal) {
        self.ranking = proposal.ranking;
        self.cost = proposal.cost;
    }
}

//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::config::{AnnealConfig, ConfigError};
use super::types::{Phase, SearchState, StopReason};
use crate::neighbor::propose;
use crate::ranking::{Ranking, Weight, WeightTable};

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// The current ranking when the run stopped.
    pub ranking: Ranking,

    /// Cost of `ranking`.
    pub cost: Weight,

    /// The lowest-cost ranking visited. May differ from `ranking` when an
    /// accepted worsening move was never undone.
    pub best_ranking: Ranking,

    /// Cost of `best_ranking`.
    pub best_cost: Weight,

    /// Proposals evaluated.
    pub proposals: usize,

    /// Accepted proposals, including cost-neutral and improving ones.
    pub accepted: usize,

    /// Proposals with `delta <= 0`.
    pub improving: usize,

    /// Final value of the stall counter.
    pub stalled: usize,

    /// Completed temperature levels.
    pub temperature_steps: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    pub phase: Phase,

    pub stop_reason: StopReason,

    /// Current cost at the start and after every temperature level.
    pub cost_history: Vec<Weight>,
}

/// Executes the annealing scheduler.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Anneals `initial` against `weights`.
    pub fn run(
        initial: Ranking,
        weights: &WeightTable,
        config: &AnnealConfig,
    ) -> Result<AnnealResult, ConfigError> {
        Self::run_with_cancel(initial, weights, config, None)
    }

    /// Runs with an optional cancellation flag, checked between proposals.
    pub fn run_with_cancel(
        initial: Ranking,
        weights: &WeightTable,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        debug!(seed, "seeding annealer");
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with_rng(initial, weights, config, &mut rng, cancel.as_deref())
    }

    /// Runs with a caller-supplied source of uniform draws.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng + ?Sized>(
        initial: Ranking,
        weights: &WeightTable,
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<AnnealResult, ConfigError> {
        config.validate()?;

        let mut phase = Phase::Initializing;
        let mut state = SearchState::new(initial, weights, config.initial_temperature);
        let mut best_ranking = state.ranking.clone();
        let mut best_cost = state.cost;

        let mut proposals = 0usize;
        let mut accepted = 0usize;
        let mut improving = 0usize;
        let mut temperature_steps = 0usize;
        let mut cost_history = vec![state.cost];

        info!(
            participants = state.ranking.len(),
            weight_entries = weights.len(),
            initial_cost = state.cost,
            "annealing started"
        );

        let mut stop_reason = if state.ranking.len() < 2 {
            Some(StopReason::NoMoves)
        } else if config.stop_at_zero_cost && state.cost == 0 {
            Some(StopReason::ZeroCost)
        } else if config.stall_limit == 0 {
            Some(StopReason::StallLimit)
        } else {
            phase = Phase::Annealing;
            None
        };

        while stop_reason.is_none() {
            for _ in 0..config.temperature_length {
                if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                    stop_reason = Some(StopReason::Cancelled);
                    break;
                }
                if config.max_proposals > 0 && proposals >= config.max_proposals {
                    stop_reason = Some(StopReason::ProposalBudget);
                    break;
                }

                let Some(proposal) = propose(&state.ranking, weights, state.cost, rng) else {
                    stop_reason = Some(StopReason::NoMoves);
                    break;
                };
                proposals += 1;

                if proposal.delta <= 0 {
                    improving += 1;
                    accepted += 1;
                    state.accept(proposal);

                    if state.cost < best_cost {
                        best_cost = state.cost;
                        best_ranking = state.ranking.clone();
                    }
                    if config.stop_at_zero_cost && state.cost == 0 {
                        stop_reason = Some(StopReason::ZeroCost);
                        break;
                    }
                } else {
                    state.stalled += 1;
                    let probability =
                        config
                            .acceptance
                            .probability(state.cost, proposal.delta, state.temperature);
                    if rng.random::<f64>() < probability {
                        accepted += 1;
                        state.accept(proposal);
                    }
                }
            }

            if stop_reason.is_some() {
                break;
            }

            state.temperature *= config.cooling_ratio;
            temperature_steps += 1;
            cost_history.push(state.cost);
            debug!(
                level = temperature_steps,
                temperature = state.temperature,
                cost = state.cost,
                stalled = state.stalled,
                "temperature level complete"
            );

            if state.stalled >= config.stall_limit {
                stop_reason = Some(StopReason::StallLimit);
            }
        }

        let stop_reason = stop_reason.unwrap_or(StopReason::StallLimit);
        phase = match phase {
            Phase::Initializing => Phase::Converged,
            _ => stop_reason.phase(),
        };

        if cost_history.last() != Some(&state.cost) {
            cost_history.push(state.cost);
        }

        if stop_reason == StopReason::Cancelled {
            warn!(proposals, cost = state.cost, "annealing cancelled");
        }
        info!(
            proposals,
            accepted,
            improving,
            cost = state.cost,
            best_cost,
            ?stop_reason,
            "annealing finished"
        );

        Ok(AnnealResult {
            ranking: state.ranking,
            cost: state.cost,
            best_ranking,
            best_cost,
            proposals,
            accepted,
            improving,
            stalled: state.stalled,
            temperature_steps,
            final_temperature: state.temperature,
            phase,
            stop_reason,
            cost_history,
        })
    }
}

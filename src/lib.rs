//! Weighted Kemeny ranking by simulated annealing.
//!
//! Given pairwise preference weights between competitors, finds a single
//! ranking that contradicts as little weight as possible. The problem is
//! NP-hard; this crate searches it approximately:
//!
//! - **Cost model** ([`cost`]): full O(n²) Kemeny score and O(1) update after
//!   an adjacent swap.
//! - **Neighborhood** ([`neighbor`]): uniform choice among the `n - 1`
//!   adjacent transpositions of the current ranking.
//! - **Scheduler** ([`anneal`]): geometric cooling, acceptance of worsening
//!   moves, and termination on a stall counter.
//!
//! Tournament files are read by [`io`] and rendered by [`report`].
//!
//! # Example
//!
//! ```
//! use kemeny_anneal::anneal::{AnnealConfig, AnnealRunner};
//! use kemeny_anneal::ranking::{ParticipantId, Participants, Ranking, WeightTable};
//!
//! let mut participants = Participants::new();
//! for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
//!     participants.insert(ParticipantId(id), name).unwrap();
//! }
//! let mut weights = WeightTable::new();
//! weights.add(ParticipantId(3), ParticipantId(1), 5);
//!
//! let config = AnnealConfig::default().with_seed(42);
//! let result = AnnealRunner::run(Ranking::identity(&participants), &weights, &config).unwrap();
//! assert!(result.ranking.is_permutation_of(&participants));
//! ```

pub mod anneal;
pub mod cost;
pub mod io;
pub mod neighbor;
pub mod ranking;
pub mod report;

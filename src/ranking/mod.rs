//! Participants, rankings and the pairwise weight table.
//!
//! A [`Ranking`] is always a permutation of the [`Participants`] it was built
//! from. A [`WeightTable`] maps an ordered [`PreferencePair`] to the weight of
//! evidence that the first participant should be placed above the second.

mod types;
mod weights;

pub use types::{ParticipantId, Participants, Ranking, RankingError};
pub use weights::{PreferencePair, Weight, WeightOverflow, WeightTable, MAX_TOTAL_WEIGHT};

//! Participant identifiers and permutation-preserving rankings.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::num::ParseIntError;
use std::ops::Deref;
use std::str::FromStr;

use thiserror::Error;

/// Unique identifier of one competitor.
///
/// Identifiers are fixed for a run and compared numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ParticipantId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ParticipantId)
    }
}

/// Errors raised when building participant sets or rankings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("participant {0} appears more than once")]
    Duplicate(ParticipantId),

    #[error("participant {0} is missing from the ranking")]
    Missing(ParticipantId),

    #[error("participant {0} is not registered")]
    Unknown(ParticipantId),
}

/// Ordered mapping from participant identifier to display name.
///
/// Insertion order is preserved and defines the identity ranking.
#[derive(Debug, Clone, Default)]
pub struct Participants {
    order: Vec<ParticipantId>,
    names: HashMap<ParticipantId, String>,
}

impl Participants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a participant. Identifiers must be unique.
    pub fn insert(&mut self, id: ParticipantId, name: impl Into<String>) -> Result<(), RankingError> {
        if self.names.contains_key(&id) {
            return Err(RankingError::Duplicate(id));
        }
        self.order.push(id);
        self.names.insert(id, name.into());
        Ok(())
    }

    pub fn name(&self, id: ParticipantId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.names.contains_key(&id)
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> &[ParticipantId] {
        &self.order
    }

    /// `(id, name)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &str)> + '_ {
        self.order
            .iter()
            .map(move |id| (*id, self.names[id].as_str()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// A linear order over every participant, each appearing exactly once.
///
/// The only mutation offered is an adjacent swap, so a `Ranking` stays a
/// permutation of its participant set for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ranking(Vec<ParticipantId>);

impl Ranking {
    /// The ranking that lists participants in their registration order.
    pub fn identity(participants: &Participants) -> Self {
        Ranking(participants.ids().to_vec())
    }

    /// Validates `order` as a permutation of `participants`.
    pub fn from_order(
        order: Vec<ParticipantId>,
        participants: &Participants,
    ) -> Result<Self, RankingError> {
        let mut seen = HashSet::with_capacity(order.len());
        for &id in &order {
            if !participants.contains(id) {
                return Err(RankingError::Unknown(id));
            }
            if !seen.insert(id) {
                return Err(RankingError::Duplicate(id));
            }
        }
        if let Some(&missing) = participants.ids().iter().find(|id| !seen.contains(id)) {
            return Err(RankingError::Missing(missing));
        }
        Ok(Ranking(order))
    }

    /// Swaps the elements at `left` and `left + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `left + 1` is out of bounds.
    pub fn swap_adjacent(&mut self, left: usize) {
        self.0.swap(left, left + 1);
    }

    /// Returns `true` if this ranking holds every participant exactly once.
    pub fn is_permutation_of(&self, participants: &Participants) -> bool {
        if self.0.len() != participants.len() {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0
            .iter()
            .all(|&id| participants.contains(id) && seen.insert(id))
    }
}

impl Deref for Ranking {
    type Target = [ParticipantId];

    fn deref(&self) -> &[ParticipantId] {
        &self.0
    }
}

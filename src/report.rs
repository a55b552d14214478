//! Plain-text standings table.

use std::fmt;
use std::time::Duration;

use crate::ranking::{Participants, Ranking, Weight};

/// Final standings: one row per participant, then the Kemeny score and,
/// when known, the elapsed wall time.
#[derive(Debug, Clone, Copy)]
pub struct Standings<'a> {
    participants: &'a Participants,
    ranking: &'a Ranking,
    cost: Weight,
    elapsed: Option<Duration>,
}

impl<'a> Standings<'a> {
    pub fn new(participants: &'a Participants, ranking: &'a Ranking, cost: Weight) -> Self {
        Self {
            participants,
            ranking,
            cost,
            elapsed: None,
        }
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }
}

impl fmt::Display for Standings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.ranking.len().to_string().len().max(4);
        writeln!(f, "{:>width$} | Name", "Rank")?;
        for (rank, &id) in self.ranking.iter().enumerate() {
            let name = self.participants.name(id).unwrap_or("<unknown>");
            writeln!(f, "{:>width$} | {name}", rank + 1)?;
        }
        writeln!(f, "Kemeny score = {}", self.cost)?;
        if let Some(elapsed) = self.elapsed {
            writeln!(f, "Elapsed: {:.3} ms", elapsed.as_secs_f64() * 1000.0)?;
        }
        Ok(())
    }
}

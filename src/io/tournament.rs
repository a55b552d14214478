//! Tournament file reader.
//!
//! ```text
//! 3                 participant count
//! 1,Alice           one `id,name` line per participant
//! 2,Bob
//! 3,Carol
//! 3,2,6             summary line, ignored
//! 5,1,2             `weight,preferred,over` lines
//! 3,2,3
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::ranking::{
    ParticipantId, Participants, RankingError, Weight, WeightOverflow, WeightTable,
};

/// Participants and pairwise weights read from one tournament file.
#[derive(Debug, Clone, Default)]
pub struct Tournament {
    pub participants: Participants,
    pub weights: WeightTable,
}

/// Errors raised while reading a tournament. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line 1: expected a participant count, found {found:?}")]
    BadCount { found: String },

    #[error("expected {expected} participants, input ends after {found}")]
    TruncatedParticipants { expected: usize, found: usize },

    #[error("line {line}: expected `id,name`, found {text:?}")]
    BadParticipant { line: usize, text: String },

    #[error("line {line}: {source}")]
    DuplicateParticipant {
        line: usize,
        #[source]
        source: RankingError,
    },

    #[error("line {line}: expected `weight,preferred,over`, found {text:?}")]
    BadWeight { line: usize, text: String },

    #[error("line {line}: unknown participant {id}")]
    UnknownParticipant { line: usize, id: ParticipantId },

    #[error("line {line}: {source}")]
    WeightOverflow {
        line: usize,
        #[source]
        source: WeightOverflow,
    },
}

/// Reads a tournament from `path`.
pub fn read_tournament(path: impl AsRef<Path>) -> Result<Tournament, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tournament = parse_tournament(&text)?;
    debug!(
        path = %path.display(),
        participants = tournament.participants.len(),
        weight_entries = tournament.weights.len(),
        "tournament loaded"
    );
    Ok(tournament)
}

/// Parses tournament text.
pub fn parse_tournament(text: &str) -> Result<Tournament, LoadError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

    let count_line = lines.next().map(|(_, line)| line).unwrap_or_default();
    let expected: usize = count_line.parse().map_err(|_| LoadError::BadCount {
        found: count_line.to_string(),
    })?;

    let mut participants = Participants::new();
    for found in 0..expected {
        let (line, entry) = lines
            .next()
            .ok_or(LoadError::TruncatedParticipants { expected, found })?;
        let (id, name) = parse_participant(entry).ok_or_else(|| LoadError::BadParticipant {
            line,
            text: entry.to_string(),
        })?;
        participants
            .insert(id, name)
            .map_err(|source| LoadError::DuplicateParticipant { line, source })?;
    }

    // summary line
    lines.next();

    let mut weights = WeightTable::new();
    for (line, entry) in lines.filter(|(_, entry)| !entry.is_empty()) {
        let (weight, preferred, over) =
            parse_weight(entry).ok_or_else(|| LoadError::BadWeight {
                line,
                text: entry.to_string(),
            })?;
        for id in [preferred, over] {
            if !participants.contains(id) {
                return Err(LoadError::UnknownParticipant { line, id });
            }
        }
        weights
            .try_add(preferred, over, weight)
            .map_err(|source| LoadError::WeightOverflow { line, source })?;
    }

    Ok(Tournament {
        participants,
        weights,
    })
}

fn parse_participant(entry: &str) -> Option<(ParticipantId, &str)> {
    let (id, name) = entry.split_once(',')?;
    Some((id.parse().ok()?, name.trim()))
}

fn parse_weight(entry: &str) -> Option<(Weight, ParticipantId, ParticipantId)> {
    let mut fields = entry.split(',').map(str::trim);
    let weight = fields.next()?.parse().ok()?;
    let preferred = fields.next()?.parse().ok()?;
    let over = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((weight, preferred, over))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3\n1,Alice\n2,Bob\n3,Carol Ann\n3,2,6\n5,1,2\n3,2,3\n\n";

    #[test]
    fn test_parse_sample() {
        let tournament = parse_tournament(SAMPLE).unwrap();
        let ids: Vec<_> = tournament.participants.ids().to_vec();
        assert_eq!(ids, vec![ParticipantId(1), ParticipantId(2), ParticipantId(3)]);
        assert_eq!(tournament.participants.name(ParticipantId(3)), Some("Carol Ann"));
        assert_eq!(tournament.weights.len(), 2);
        assert_eq!(tournament.weights.weight(ParticipantId(1), ParticipantId(2)), 5);
        assert_eq!(tournament.weights.weight(ParticipantId(2), ParticipantId(1)), 0);
        assert_eq!(tournament.weights.weight(ParticipantId(2), ParticipantId(3)), 3);
    }

    #[test]
    fn test_parse_names_with_commas() {
        let tournament = parse_tournament("1\n7,Smith, John\nsummary\n").unwrap();
        assert_eq!(tournament.participants.name(ParticipantId(7)), Some("Smith, John"));
        assert!(tournament.weights.is_empty());
    }

    #[test]
    fn test_parse_empty_field() {
        let tournament = parse_tournament("0\n").unwrap();
        assert!(tournament.participants.is_empty());
        assert!(tournament.weights.is_empty());
    }

    #[test]
    fn test_parse_bad_count() {
        assert!(matches!(
            parse_tournament("three\n"),
            Err(LoadError::BadCount { found }) if found == "three"
        ));
        assert!(matches!(parse_tournament(""), Err(LoadError::BadCount { .. })));
    }

    #[test]
    fn test_parse_truncated_participants() {
        assert!(matches!(
            parse_tournament("3\n1,A\n2,B"),
            Err(LoadError::TruncatedParticipants {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_parse_bad_participant() {
        assert!(matches!(
            parse_tournament("2\n1,A\nB\n"),
            Err(LoadError::BadParticipant { line: 3, .. })
        ));
        assert!(matches!(
            parse_tournament("1\nx,A\n"),
            Err(LoadError::BadParticipant { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_duplicate_participant() {
        let err = parse_tournament("2\n1,A\n1,B\n").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateParticipant { line: 3, .. }));
        assert_eq!(err.to_string(), "line 3: participant 1 appears more than once");
    }

    #[test]
    fn test_parse_bad_weight() {
        for bad in ["-4,1,2", "1.5,1,2", "4,1", "4,1,2,3", "x,1,2"] {
            let text = format!("2\n1,A\n2,B\nsummary\n{bad}\n");
            assert!(
                matches!(parse_tournament(&text), Err(LoadError::BadWeight { line: 5, .. })),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn test_parse_unknown_participant() {
        assert!(matches!(
            parse_tournament("2\n1,A\n2,B\nsummary\n4,1,9\n"),
            Err(LoadError::UnknownParticipant {
                line: 5,
                id: ParticipantId(9)
            })
        ));
    }

    #[test]
    fn test_parse_rejects_total_weight_overflow() {
        let half = u64::MAX / 2 + 1;
        let text = format!("3\n1,A\n2,B\n3,C\nsummary\n{half},2,1\n{half},3,1\n");
        let err = parse_tournament(&text).unwrap_err();
        assert!(matches!(err, LoadError::WeightOverflow { line: 6, .. }), "{err}");

        let text = format!("2\n1,A\n2,B\nsummary\n{},2,1\n", i64::MAX as u64 + 10);
        assert!(matches!(
            parse_tournament(&text),
            Err(LoadError::WeightOverflow { line: 5, .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_tournament("/definitely/not/here.wmg").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.wmg"));
    }
}

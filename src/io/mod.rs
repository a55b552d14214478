//! Reading tournaments from disk.

mod tournament;

pub use tournament::{parse_tournament, read_tournament, LoadError, Tournament};

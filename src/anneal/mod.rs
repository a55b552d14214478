//! Annealing scheduler.
//!
//! Drives a geometric temperature schedule over the adjacent-swap
//! neighborhood. Each temperature level evaluates a fixed number of
//! proposals; cost-neutral and improving proposals are always taken, worse
//! ones are taken with a probability given by the [`AcceptanceRule`]. Every
//! worsening proposal, accepted or not, advances a stall counter, and the
//! run converges once that counter reaches the configured limit.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Kemeny (1959), "Mathematics without numbers"

mod config;
mod runner;
mod types;

pub use config::{AcceptanceRule, AnnealConfig, ConfigError};
pub use runner::{AnnealResult, AnnealRunner};
pub use types::{Phase, StopReason};

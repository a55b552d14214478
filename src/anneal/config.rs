//! Annealing configuration and acceptance rules.

use thiserror::Error;

use crate::ranking::Weight;

/// Probability rule for accepting a worsening proposal.
///
/// Improving and cost-neutral proposals are always accepted regardless of
/// the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AcceptanceRule {
    /// `exp(-cost / T)` where `cost` is the absolute cost of the current
    /// ranking. Acceptance of uphill moves fades as the ranking improves,
    /// independent of how large the step uphill is.
    #[default]
    AbsoluteCost,

    /// Classic Metropolis criterion `exp(-delta / T)`.
    Metropolis,
}

impl AcceptanceRule {
    /// Probability of accepting a worsening proposal.
    ///
    /// Zero energy gives `1.0` at any temperature. Otherwise a temperature
    /// that is zero, subnormal or non-finite counts as frozen and yields `0.0`.
    pub fn probability(self, current_cost: Weight, delta: i64, temperature: f64) -> f64 {
        let energy = match self {
            AcceptanceRule::AbsoluteCost => current_cost as f64,
            AcceptanceRule::Metropolis => delta as f64,
        };
        if energy <= 0.0 {
            return 1.0;
        }
        if !temperature.is_normal() || temperature < 0.0 {
            return 0.0;
        }
        (-energy / temperature).exp()
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_temperature must be finite and positive, got {0}")]
    InitialTemperature(f64),

    #[error("cooling_ratio must be finite and in (0, 1), got {0}")]
    CoolingRatio(f64),

    #[error("temperature_length must be at least 1")]
    TemperatureLength,
}

/// Configuration for the annealing scheduler.
///
/// # Examples
///
/// ```
/// use kemeny_anneal::anneal::{AcceptanceRule, AnnealConfig};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(2.0)
///     .with_cooling_ratio(0.9)
///     .with_temperature_length(20)
///     .with_stall_limit(1000)
///     .with_acceptance(AcceptanceRule::Metropolis)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealConfig {
    /// Starting temperature.
    pub initial_temperature: f64,

    /// Factor applied to the temperature after each level, in (0, 1).
    pub cooling_ratio: f64,

    /// Proposals evaluated per temperature level.
    pub temperature_length: usize,

    /// Worsening proposals (accepted or not) after which the search stops.
    pub stall_limit: usize,

    /// Acceptance rule for worsening proposals.
    pub acceptance: AcceptanceRule,

    /// Hard budget on proposals. 0 = no limit.
    pub max_proposals: usize,

    /// Stop as soon as the current ranking contradicts no evidence.
    pub stop_at_zero_cost: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            cooling_ratio: 0.95,
            temperature_length: 10,
            stall_limit: 8000,
            acceptance: AcceptanceRule::default(),
            max_proposals: 0,
            stop_at_zero_cost: true,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_ratio(mut self, ratio: f64) -> Self {
        self.cooling_ratio = ratio;
        self
    }

    pub fn with_temperature_length(mut self, n: usize) -> Self {
        self.temperature_length = n;
        self
    }

    pub fn with_stall_limit(mut self, n: usize) -> Self {
        self.stall_limit = n;
        self
    }

    pub fn with_acceptance(mut self, rule: AcceptanceRule) -> Self {
        self.acceptance = rule;
        self
    }

    pub fn with_max_proposals(mut self, n: usize) -> Self {
        self.max_proposals = n;
        self
    }

    pub fn with_stop_at_zero_cost(mut self, stop: bool) -> Self {
        self.stop_at_zero_cost = stop;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.initial_temperature;
        if !t.is_finite() || t <= 0.0 {
            return Err(ConfigError::InitialTemperature(t));
        }
        let ratio = self.cooling_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
            return Err(ConfigError::CoolingRatio(ratio));
        }
        if self.temperature_length == 0 {
            return Err(ConfigError::TemperatureLength);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 1.0).abs() < 1e-12);
        assert!((config.cooling_ratio - 0.95).abs() < 1e-12);
        assert_eq!(config.temperature_length, 10);
        assert_eq!(config.stall_limit, 8000);
        assert_eq!(config.acceptance, AcceptanceRule::AbsoluteCost);
        assert_eq!(config.max_proposals, 0);
        assert!(config.stop_at_zero_cost);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = AnnealConfig::default().with_initial_temperature(t);
            assert!(
                matches!(config.validate(), Err(ConfigError::InitialTemperature(_))),
                "temperature {t} accepted"
            );
        }
    }

    #[test]
    fn test_validate_bad_cooling_ratio() {
        for ratio in [0.0, 1.0, 1.5, -0.5, f64::NAN, f64::NEG_INFINITY] {
            let config = AnnealConfig::default().with_cooling_ratio(ratio);
            assert!(
                matches!(config.validate(), Err(ConfigError::CoolingRatio(_))),
                "ratio {ratio} accepted"
            );
        }
    }

    #[test]
    fn test_validate_zero_temperature_length() {
        let config = AnnealConfig::default().with_temperature_length(0);
        assert_eq!(config.validate(), Err(ConfigError::TemperatureLength));
    }

    #[test]
    fn test_absolute_cost_probability_ignores_delta() {
        let rule = AcceptanceRule::AbsoluteCost;
        let p = rule.probability(2, 100, 1.0);
        assert!((p - (-2.0f64).exp()).abs() < 1e-12);
        assert!((rule.probability(2, 1, 1.0) - p).abs() < 1e-12);
        assert!((rule.probability(0, 5, 0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_metropolis_probability_uses_delta() {
        let rule = AcceptanceRule::Metropolis;
        let p = rule.probability(1000, 3, 2.0);
        assert!((p - (-1.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_frozen_temperature_rejects() {
        for t in [0.0, f64::MIN_POSITIVE / 2.0, f64::NAN] {
            assert_eq!(AcceptanceRule::AbsoluteCost.probability(3, 1, t), 0.0);
            assert_eq!(AcceptanceRule::Metropolis.probability(3, 1, t), 0.0);
        }
    }

    #[test]
    fn test_zero_energy_accepts_at_frozen_temperature() {
        for t in [0.0, f64::MIN_POSITIVE / 2.0, 1e-300] {
            assert_eq!(AcceptanceRule::AbsoluteCost.probability(0, 1, t), 1.0);
        }
        assert_eq!(AcceptanceRule::Metropolis.probability(5, 0, 0.0), 1.0);
    }
}

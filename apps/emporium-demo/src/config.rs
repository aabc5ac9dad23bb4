//! # Demo Configuration
//!
//! Settings for the driver, read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`EMPORIUM_*`)
//! 2. Defaults (this file)
//!
//! With nothing set, the driver reproduces the original wiring: the literal
//! scenario with 10% off and no summary.

use emporium_core::{CoreError, PercentageOff};
use std::str::FromStr;

pub const SCENARIO_VAR: &str = "EMPORIUM_SCENARIO";
pub const STRATEGY_VAR: &str = "EMPORIUM_STRATEGY";
pub const SUMMARY_VAR: &str = "EMPORIUM_SUMMARY";

/// Which wiring the driver runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scenario {
    /// Items are decorated after being added, so the cart keeps the plain
    /// originals. Total: (100.0 + 50.0) × 0.9 = 135.0.
    #[default]
    Literal,

    /// Product 1 is gift-wrapped before being added.
    /// Total: (105.0 + 50.0) × 0.9 = 139.5.
    Corrected,

    /// Both decorations (gift wrap, 20% item discount) are applied before
    /// adding. Total: (105.0 + 40.0) × 0.9 = 130.5.
    Decorated,
}

impl FromStr for Scenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(Scenario::Literal),
            "corrected" => Ok(Scenario::Corrected),
            "decorated" => Ok(Scenario::Decorated),
            _ => Err(ConfigError::InvalidValue {
                key: SCENARIO_VAR.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Which strategy the cart gets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum StrategyChoice {
    /// No strategy set; the total is the raw sum.
    None,
    #[default]
    TenPercent,
    TwentyPercent,
    /// A custom rate in `[0, 1]`.
    Rate(f64),
}

impl StrategyChoice {
    /// The strategy to install, or `None` to leave the cart without one.
    pub fn to_strategy(self) -> Option<PercentageOff> {
        match self {
            StrategyChoice::None => None,
            StrategyChoice::TenPercent => Some(PercentageOff::ten_percent()),
            StrategyChoice::TwentyPercent => Some(PercentageOff::twenty_percent()),
            StrategyChoice::Rate(rate) => Some(PercentageOff::new(rate)),
        }
    }
}

impl FromStr for StrategyChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "none" => Ok(StrategyChoice::None),
            "ten" => Ok(StrategyChoice::TenPercent),
            "twenty" => Ok(StrategyChoice::TwentyPercent),
            other => {
                let rate: f64 = other.parse().map_err(|_| ConfigError::InvalidValue {
                    key: STRATEGY_VAR.to_string(),
                    value: s.to_string(),
                })?;
                PercentageOff::try_new(rate).map_err(|source| ConfigError::InvalidRate {
                    key: STRATEGY_VAR.to_string(),
                    source,
                })?;
                Ok(StrategyChoice::Rate(rate))
            }
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoConfig {
    pub scenario: Scenario,
    pub strategy: StrategyChoice,
    /// Also print the JSON cart summary after the total line.
    pub print_summary: bool,
}

impl DemoConfig {
    /// Loads configuration from `EMPORIUM_*` environment variables.
    ///
    /// ## Environment Variables
    /// - `EMPORIUM_SCENARIO`: `literal` | `corrected` | `decorated`
    /// - `EMPORIUM_STRATEGY`: `none` | `ten` | `twenty` | a rate like `0.15`
    /// - `EMPORIUM_SUMMARY`: `true` | `false`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DemoConfig::default();

        if let Some(scenario) = lookup(SCENARIO_VAR) {
            config.scenario = scenario.parse()?;
        }

        if let Some(strategy) = lookup(STRATEGY_VAR) {
            config.strategy = strategy.parse()?;
        }

        if let Some(summary) = lookup(SUMMARY_VAR) {
            config.print_summary = match summary.trim().parse() {
                Ok(flag) => flag,
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: SUMMARY_VAR.to_string(),
                        value: summary,
                    })
                }
            };
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid rate for {key}: {source}")]
    InvalidRate {
        key: String,
        #[source]
        source: CoreError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_reproduce_original_wiring() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.scenario, Scenario::Literal);
        assert_eq!(config.strategy, StrategyChoice::TenPercent);
        assert!(!config.print_summary);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (SCENARIO_VAR, "Corrected"),
            (STRATEGY_VAR, "twenty"),
            (SUMMARY_VAR, "true"),
        ]))
        .unwrap();

        assert_eq!(config.scenario, Scenario::Corrected);
        assert_eq!(config.strategy, StrategyChoice::TwentyPercent);
        assert!(config.print_summary);
    }

    #[test]
    fn test_custom_rate() {
        let config =
            DemoConfig::from_lookup(lookup_from(&[(STRATEGY_VAR, "0.15")])).unwrap();
        assert_eq!(config.strategy, StrategyChoice::Rate(0.15));
        assert_eq!(
            config.strategy.to_strategy().map(|s| s.rate()),
            Some(0.15)
        );
    }

    #[test]
    fn test_none_strategy() {
        let config =
            DemoConfig::from_lookup(lookup_from(&[(STRATEGY_VAR, "none")])).unwrap();
        assert!(config.strategy.to_strategy().is_none());
    }

    #[test]
    fn test_rejects_unknown_scenario() {
        let err = DemoConfig::from_lookup(lookup_from(&[(SCENARIO_VAR, "sideways")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == SCENARIO_VAR));
    }

    #[test]
    fn test_invalid_value_reports_raw_input() {
        let err = DemoConfig::from_lookup(lookup_from(&[(STRATEGY_VAR, " Foo ")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for EMPORIUM_STRATEGY: \" Foo \""
        );

        let err = DemoConfig::from_lookup(lookup_from(&[(SCENARIO_VAR, "Sideways")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for EMPORIUM_SCENARIO: \"Sideways\""
        );
    }

    #[test]
    fn test_rejects_out_of_range_rate() {
        let err =
            DemoConfig::from_lookup(lookup_from(&[(STRATEGY_VAR, "1.5")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRate { .. }));
    }

    #[test]
    fn test_rejects_bad_summary_flag() {
        let err =
            DemoConfig::from_lookup(lookup_from(&[(SUMMARY_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for EMPORIUM_SUMMARY: \"maybe\""
        );
    }
}

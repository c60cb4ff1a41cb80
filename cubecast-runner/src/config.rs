//! Serializable simulation configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// All parameters needed to reproduce an odds run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// WCA event id (e.g. "333").
    pub event: String,

    /// Number of simulated competitions.
    pub trials: usize,

    /// Recency half-life for the weighted performance profile, in days.
    pub half_life_days: f64,

    /// How far back to pull attempt history, in days.
    pub lookback_days: i64,

    /// Master seed for the deterministic RNG hierarchy.
    pub master_seed: u64,

    /// Roster cap: simulate the top N seeds by average world ranking.
    pub max_competitors: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            event: "333".to_string(),
            trials: 10_000,
            half_life_days: 180.0,
            lookback_days: 365,
            master_seed: 42,
            max_competitors: 16,
        }
    }
}

impl SimulationConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event.is_empty() {
            return Err(ConfigError::Invalid("event must not be empty".into()));
        }
        if self.trials == 0 {
            return Err(ConfigError::Invalid("trials must be > 0".into()));
        }
        if !(self.half_life_days > 0.0) {
            return Err(ConfigError::Invalid("half_life_days must be > 0".into()));
        }
        if self.lookback_days <= 0 {
            return Err(ConfigError::Invalid("lookback_days must be > 0".into()));
        }
        if self.max_competitors == 0 {
            return Err(ConfigError::Invalid("max_competitors must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "event = \"555\"\ntrials = 50000").unwrap();
        file.flush().unwrap();

        let config = SimulationConfig::from_file(file.path()).unwrap();
        assert_eq!(config.event, "555");
        assert_eq!(config.trials, 50_000);
        assert_eq!(config.half_life_days, 180.0);
    }

    #[test]
    fn zero_trials_is_rejected() {
        let config = SimulationConfig {
            trials: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn non_positive_half_life_is_rejected() {
        let config = SimulationConfig {
            half_life_days: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = SimulationConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: SimulationConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}

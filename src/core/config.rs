//! Session configuration.
//!
//! Sessions are configured once at creation. Values can come from
//! `SessionConfig::default()` plus `with_*` overrides, or from a TOML file:
//!
//! ```toml
//! starting_balance = 1000
//! synthetic_count = 4
//! max_multiplier = 10.0
//! seed = 7
//! ```
//!
//! Missing keys fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`SessionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Points the human starts the session with.
    pub starting_balance: u64,

    /// Display name of the human participant.
    pub human_name: String,

    /// Number of synthetic opponents seated after the human.
    pub synthetic_count: u8,

    /// Synthetic names are `"{prefix} {n}"`, starting at 1.
    pub synthetic_name_prefix: String,

    /// Upper bound for every cash-out multiplier.
    pub max_multiplier: f64,

    /// Smallest synthetic stake (inclusive).
    pub synthetic_stake_min: u64,

    /// Largest synthetic stake (inclusive).
    pub synthetic_stake_max: u64,

    /// Initial value of the human stake input. `None` leaves it unset.
    pub initial_stake: Option<u64>,

    /// Initial value of the human multiplier input. `None` leaves it unset.
    pub initial_multiplier: Option<f64>,

    /// Rate at which the displayed multiplier advances. Cosmetic.
    pub speed: f64,

    /// Seed for the session's random source.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            human_name: "me".to_string(),
            synthetic_count: 4,
            synthetic_name_prefix: "CPU".to_string(),
            max_multiplier: 10.0,
            synthetic_stake_min: 1,
            synthetic_stake_max: 100,
            initial_stake: Some(50),
            initial_multiplier: Some(0.0),
            speed: 1.0,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        if !(self.max_multiplier.is_finite() && self.max_multiplier > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_multiplier must be positive, got {}",
                self.max_multiplier
            )));
        }
        if self.synthetic_stake_min > self.synthetic_stake_max {
            return Err(ConfigError::Invalid(format!(
                "synthetic stake range is empty: {}..={}",
                self.synthetic_stake_min, self.synthetic_stake_max
            )));
        }
        if self.synthetic_count == u8::MAX {
            return Err(ConfigError::Invalid(
                "at most 254 synthetic participants supported".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the starting balance.
    #[must_use]
    pub fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Set the number of synthetic opponents.
    #[must_use]
    pub fn with_synthetic_count(mut self, count: u8) -> Self {
        self.synthetic_count = count;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the initial human inputs.
    #[must_use]
    pub fn with_initial_inputs(mut self, stake: Option<u64>, multiplier: Option<f64>) -> Self {
        self.initial_stake = stake;
        self.initial_multiplier = multiplier;
        self
    }

    /// Set the display speed.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }
}

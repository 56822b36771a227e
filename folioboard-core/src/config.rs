//! Dashboard configuration loaded from TOML.
//!
//! Every field is optional in the file; missing values take the defaults
//! below, which reproduce the stock dashboard (entropy-seeded, lenient,
//! 100 000 starting capital, 800 ms apply and 1000 ms fetch latency).

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DashboardParams;
use crate::rng::SeedHierarchy;
use crate::series::{SeriesSettings, STARTING_CAPITAL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Master seed for all random streams. Absent means OS entropy.
    pub seed: Option<u64>,
    /// Reject unknown labels and inverted ranges instead of falling back.
    pub strict: bool,
    pub starting_capital: f64,
    pub apply_latency_ms: u64,
    pub fetch_latency_ms: u64,
    /// Parameters shown before the first apply.
    pub defaults: DashboardParams,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            strict: false,
            starting_capital: STARTING_CAPITAL,
            apply_latency_ms: 800,
            fetch_latency_ms: 1000,
            defaults: DashboardParams::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.starting_capital.is_finite() && self.starting_capital > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "starting_capital must be positive, got {}",
                self.starting_capital
            )));
        }
        if !self.defaults.has_valid_range() {
            return Err(ConfigError::Invalid(format!(
                "default start_date {} is after end_date {}",
                self.defaults.start_date, self.defaults.end_date
            )));
        }
        if self.strict {
            self.defaults
                .validate()
                .map_err(|err| ConfigError::Invalid(format!("defaults: {err}")))?;
        }
        Ok(())
    }

    pub fn apply_latency(&self) -> Duration {
        Duration::from_millis(self.apply_latency_ms)
    }

    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms)
    }

    pub fn series_settings(&self) -> SeriesSettings {
        SeriesSettings {
            starting_capital: self.starting_capital,
        }
    }

    pub fn seeds(&self) -> SeedHierarchy {
        SeedHierarchy::new(self.seed)
    }
}

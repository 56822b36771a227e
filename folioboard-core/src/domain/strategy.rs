//! Trading strategies selectable in the control panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// A strategy label.
///
/// Labels are matched exactly (they are display strings, not identifiers).
/// Anything else lands in `Unknown` and takes the fallback rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strategy {
    MlSentiment,
    BaselineArima,
    BuyAndHold,
    MeanReversion,
    Momentum,
    Unknown(String),
}

impl Strategy {
    pub const CATALOGUE: [Strategy; 5] = [
        Strategy::MlSentiment,
        Strategy::BaselineArima,
        Strategy::BuyAndHold,
        Strategy::MeanReversion,
        Strategy::Momentum,
    ];

    pub fn label(&self) -> &str {
        match self {
            Strategy::MlSentiment => "ML + Sentiment",
            Strategy::BaselineArima => "Baseline ARIMA",
            Strategy::BuyAndHold => "Buy & Hold",
            Strategy::MeanReversion => "Mean Reversion",
            Strategy::Momentum => "Momentum",
            Strategy::Unknown(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Strategy::Unknown(_))
    }

    /// Parse a label, refusing anything outside the catalogue.
    pub fn parse_strict(label: &str) -> Result<Self, DashboardError> {
        match Self::from(label) {
            Strategy::Unknown(l) => Err(DashboardError::UnknownStrategy(l)),
            known => Ok(known),
        }
    }

    pub fn next(&self) -> Strategy {
        match Self::CATALOGUE.iter().position(|s| s == self) {
            Some(i) => Self::CATALOGUE[(i + 1) % Self::CATALOGUE.len()].clone(),
            None => Self::CATALOGUE[0].clone(),
        }
    }

    pub fn prev(&self) -> Strategy {
        let n = Self::CATALOGUE.len();
        match Self::CATALOGUE.iter().position(|s| s == self) {
            Some(i) => Self::CATALOGUE[(i + n - 1) % n].clone(),
            None => Self::CATALOGUE[n - 1].clone(),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::MlSentiment
    }
}

impl From<&str> for Strategy {
    fn from(label: &str) -> Self {
        match label {
            "ML + Sentiment" => Strategy::MlSentiment,
            "Baseline ARIMA" => Strategy::BaselineArima,
            "Buy & Hold" => Strategy::BuyAndHold,
            "Mean Reversion" => Strategy::MeanReversion,
            "Momentum" => Strategy::Momentum,
            other => Strategy::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Strategy {
    fn from(label: String) -> Self {
        Strategy::from(label.as_str())
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.label().to_string()
    }
}

impl FromStr for Strategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Strategy::from(s))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

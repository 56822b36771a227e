//! Asset symbols offered by the control panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// A tradable symbol.
///
/// The catalogue is closed; anything else is carried verbatim in `Other` so
/// the lenient lookups can route it through their default rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Asset {
    Spy,
    Qqq,
    Aapl,
    Msft,
    Tsla,
    Goog,
    Other(String),
}

impl Asset {
    /// Catalogue order, as listed in the control panel.
    pub const CATALOGUE: [Asset; 6] = [
        Asset::Spy,
        Asset::Qqq,
        Asset::Aapl,
        Asset::Msft,
        Asset::Tsla,
        Asset::Goog,
    ];

    pub fn symbol(&self) -> &str {
        match self {
            Asset::Spy => "SPY",
            Asset::Qqq => "QQQ",
            Asset::Aapl => "AAPL",
            Asset::Msft => "MSFT",
            Asset::Tsla => "TSLA",
            Asset::Goog => "GOOG",
            Asset::Other(symbol) => symbol,
        }
    }

    /// Human-readable description shown next to the symbol.
    pub fn description(&self) -> &str {
        match self {
            Asset::Spy => "S&P 500 ETF",
            Asset::Qqq => "Nasdaq ETF",
            Asset::Aapl => "Apple",
            Asset::Msft => "Microsoft",
            Asset::Tsla => "Tesla",
            Asset::Goog => "Google",
            Asset::Other(_) => "Custom symbol",
        }
    }

    /// Index-like symbols expand into a constituent weight table.
    pub fn is_index(&self) -> bool {
        matches!(self, Asset::Spy | Asset::Qqq)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Asset::Other(_))
    }

    /// Parse a symbol, refusing anything outside the catalogue.
    pub fn parse_strict(symbol: &str) -> Result<Self, DashboardError> {
        match Self::from(symbol) {
            Asset::Other(s) => Err(DashboardError::UnknownAsset(s)),
            known => Ok(known),
        }
    }

    /// The next catalogue entry, wrapping around. Custom symbols restart at the top.
    pub fn next(&self) -> Asset {
        match Self::CATALOGUE.iter().position(|a| a == self) {
            Some(i) => Self::CATALOGUE[(i + 1) % Self::CATALOGUE.len()].clone(),
            None => Self::CATALOGUE[0].clone(),
        }
    }

    pub fn prev(&self) -> Asset {
        let n = Self::CATALOGUE.len();
        match Self::CATALOGUE.iter().position(|a| a == self) {
            Some(i) => Self::CATALOGUE[(i + n - 1) % n].clone(),
            None => Self::CATALOGUE[n - 1].clone(),
        }
    }
}

impl Default for Asset {
    fn default() -> Self {
        Asset::Spy
    }
}

impl From<&str> for Asset {
    fn from(raw: &str) -> Self {
        let symbol = raw.trim().to_uppercase();
        match symbol.as_str() {
            "SPY" => Asset::Spy,
            "QQQ" => Asset::Qqq,
            "AAPL" => Asset::Aapl,
            "MSFT" => Asset::Msft,
            "TSLA" => Asset::Tsla,
            "GOOG" => Asset::Goog,
            _ => Asset::Other(symbol),
        }
    }
}

impl From<String> for Asset {
    fn from(raw: String) -> Self {
        Asset::from(raw.as_str())
    }
}

impl From<Asset> for String {
    fn from(asset: Asset) -> Self {
        asset.symbol().to_string()
    }
}

impl FromStr for Asset {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Asset::from(s))
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

//! Dashboard parameters: the single value every surface derives from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Asset, Strategy};
use crate::error::DashboardError;

/// Selected asset, strategy and inclusive date range.
///
/// Missing fields deserialize to the panel defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardParams {
    pub asset: Asset,
    pub strategy: Strategy,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DashboardParams {
    pub fn new(asset: Asset, strategy: Strategy, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            asset,
            strategy,
            start_date,
            end_date,
        }
    }

    pub fn has_valid_range(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Strict validation: ordered range, catalogued strategy and asset.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if !self.has_valid_range() {
            return Err(DashboardError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if let Strategy::Unknown(label) = &self.strategy {
            return Err(DashboardError::UnknownStrategy(label.clone()));
        }
        if let Asset::Other(symbol) = &self.asset {
            return Err(DashboardError::UnknownAsset(symbol.clone()));
        }
        Ok(())
    }

    /// Chart legend label for the strategy line, e.g. `Momentum (MSFT)`.
    pub fn series_label(&self) -> String {
        format!("{} ({})", self.strategy, self.asset)
    }
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            asset: Asset::Spy,
            strategy: Strategy::MlSentiment,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid default start"),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).expect("valid default end"),
        }
    }
}

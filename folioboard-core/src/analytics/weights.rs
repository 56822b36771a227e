//! Portfolio weight allocation.

use serde::{Deserialize, Serialize};

use crate::domain::DashboardParams;

/// Display color for a weight bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB` form.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Bar palette, assigned in table order.
pub const PALETTE: [Rgb; 6] = [
    Rgb(0x10, 0xB9, 0x81),
    Rgb(0x3B, 0x82, 0xF6),
    Rgb(0xF5, 0x9E, 0x0B),
    Rgb(0xEF, 0x44, 0x44),
    Rgb(0x8B, 0x5C, 0xF6),
    Rgb(0xEC, 0x48, 0x99),
];

/// Constituent table shown for index-like assets.
const INDEX_CONSTITUENTS: [(&str, f64); 6] = [
    ("AAPL", 0.22),
    ("MSFT", 0.18),
    ("AMZN", 0.15),
    ("GOOGL", 0.13),
    ("TSLA", 0.12),
    ("NVDA", 0.20),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub asset: String,
    /// Fraction of the portfolio in `[0, 1]`.
    pub weight: f64,
    pub color: Rgb,
}

/// Weights for the selected asset: the constituent table for SPY/QQQ, a
/// single full-weight entry otherwise.
pub fn weights_for(params: &DashboardParams) -> Vec<WeightEntry> {
    if params.asset.is_index() {
        INDEX_CONSTITUENTS
            .iter()
            .zip(PALETTE.iter())
            .map(|(&(asset, weight), &color)| WeightEntry {
                asset: asset.to_string(),
                weight,
                color,
            })
            .collect()
    } else {
        vec![WeightEntry {
            asset: params.asset.symbol().to_string(),
            weight: 1.0,
            color: PALETTE[0],
        }]
    }
}

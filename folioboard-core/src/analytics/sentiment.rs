//! News sentiment headlines.
//!
//! Static per-symbol tables. Nothing is scored at runtime; the only derived
//! field is the date, which is synthesized as `today - index` days.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{Asset, DashboardParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentItem {
    pub headline: String,
    pub source: String,
    pub date: NaiveDate,
    /// Signed score, roughly in `[-1, 1]`.
    pub score: f64,
}

impl SentimentItem {
    pub fn is_positive(&self) -> bool {
        self.score > 0.0
    }
}

type Row = (&'static str, &'static str, f64);

const AAPL: [Row; 3] = [
    ("Apple reports strong iPhone 15 sales", "Financial Times", 0.82),
    ("Apple Vision Pro production ramps up", "Reuters", 0.65),
    ("Apple faces regulatory challenges in EU", "Bloomberg", -0.28),
];

const MSFT: [Row; 3] = [
    ("Microsoft Azure growth accelerates", "Wall Street Journal", 0.78),
    ("Microsoft Copilot adoption surges", "TechCrunch", 0.71),
    ("Microsoft faces antitrust scrutiny", "Reuters", -0.35),
];

const TSLA: [Row; 3] = [
    ("Tesla delivers record quarterly vehicles", "Bloomberg", 0.85),
    ("Tesla Cybertruck production begins", "CNBC", 0.69),
    ("Tesla recalls vehicles over safety concerns", "Reuters", -0.52),
];

const DEFAULT: [Row; 3] = [
    ("Market shows strong momentum", "Financial Times", 0.65),
    ("Tech sector leads gains", "Bloomberg", 0.58),
    ("Economic indicators remain mixed", "Reuters", -0.15),
];

fn table_for(asset: &Asset) -> &'static [Row; 3] {
    match asset {
        Asset::Aapl => &AAPL,
        Asset::Msft => &MSFT,
        Asset::Tsla => &TSLA,
        _ => &DEFAULT,
    }
}

/// Headlines for the selected asset, dated backwards from `today`.
pub fn sentiment_for(params: &DashboardParams, today: NaiveDate) -> Vec<SentimentItem> {
    if let Asset::Other(symbol) = &params.asset {
        tracing::warn!(%symbol, "unknown asset, using default headlines");
    }
    table_for(&params.asset)
        .iter()
        .enumerate()
        .map(|(i, &(headline, source, score))| SentimentItem {
            headline: headline.to_string(),
            source: source.to_string(),
            date: today.checked_sub_days(Days::new(i as u64)).unwrap_or(today),
            score,
        })
        .collect()
}

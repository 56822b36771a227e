//! Static analytics lookups: metric cards, portfolio weights, sentiment.
//!
//! These three functions and the series generator are the seams where a real
//! data/model backend would plug in.

pub mod metrics;
pub mod sentiment;
pub mod weights;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use metrics::{metrics_for, Metric, MetricBase, MetricKind};
pub use sentiment::{sentiment_for, SentimentItem};
pub use weights::{weights_for, Rgb, WeightEntry, PALETTE};

use crate::domain::DashboardParams;

/// Everything the analytics panel renders for one set of parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub metrics: Vec<Metric>,
    pub weights: Vec<WeightEntry>,
    pub sentiment: Vec<SentimentItem>,
}

impl AnalyticsSnapshot {
    pub fn for_params<R: Rng + ?Sized>(params: &DashboardParams, today: NaiveDate, rng: &mut R) -> Self {
        Self {
            metrics: metrics_for(params, rng),
            weights: weights_for(params),
            sentiment: sentiment_for(params, today),
        }
    }
}

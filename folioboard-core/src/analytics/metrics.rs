//! Performance metric cards.
//!
//! Values come from a static per-strategy table; only the `change` field is
//! random, drawn afresh on every call.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::{DashboardParams, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    SharpeRatio,
    MaxDrawdown,
    AnnualizedReturn,
    WinRate,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::SharpeRatio,
        MetricKind::MaxDrawdown,
        MetricKind::AnnualizedReturn,
        MetricKind::WinRate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MetricKind::SharpeRatio => "Sharpe Ratio",
            MetricKind::MaxDrawdown => "Max Drawdown",
            MetricKind::AnnualizedReturn => "Annualized Return",
            MetricKind::WinRate => "Win Rate",
        }
    }

    /// Full width of the uniform jitter applied to `change`, centred on zero.
    pub fn jitter_width(self) -> f64 {
        match self {
            MetricKind::SharpeRatio => 0.20,
            MetricKind::MaxDrawdown => 0.10,
            MetricKind::AnnualizedReturn => 0.15,
            MetricKind::WinRate => 0.08,
        }
    }

    /// Display string for a raw table value.
    pub fn format(self, value: f64) -> String {
        match self {
            MetricKind::SharpeRatio => format!("{value:.2}"),
            _ => format!("{value:.1}%"),
        }
    }
}

/// Static base row for one strategy. Percentages are stored as percent points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBase {
    pub sharpe: f64,
    pub drawdown: f64,
    pub returns: f64,
    pub win_rate: f64,
}

impl MetricBase {
    /// Table row for a strategy; unknown labels take the ML + Sentiment row.
    pub fn for_strategy(strategy: &Strategy) -> Self {
        match strategy {
            Strategy::MlSentiment | Strategy::Unknown(_) => MetricBase {
                sharpe: 1.85,
                drawdown: -8.2,
                returns: 24.3,
                win_rate: 68.5,
            },
            Strategy::BaselineArima => MetricBase {
                sharpe: 1.42,
                drawdown: -11.5,
                returns: 18.7,
                win_rate: 61.2,
            },
            Strategy::BuyAndHold => MetricBase {
                sharpe: 1.15,
                drawdown: -15.8,
                returns: 12.4,
                win_rate: 55.8,
            },
            Strategy::MeanReversion => MetricBase {
                sharpe: 1.28,
                drawdown: -13.2,
                returns: 16.1,
                win_rate: 58.9,
            },
            Strategy::Momentum => MetricBase {
                sharpe: 1.67,
                drawdown: -9.8,
                returns: 21.5,
                win_rate: 64.3,
            },
        }
    }

    pub fn value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::SharpeRatio => self.sharpe,
            MetricKind::MaxDrawdown => self.drawdown,
            MetricKind::AnnualizedReturn => self.returns,
            MetricKind::WinRate => self.win_rate,
        }
    }
}

/// One metric card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub kind: MetricKind,
    pub name: String,
    pub value: String,
    /// Signed fraction shown as the period-over-period badge.
    pub change: f64,
}

impl Metric {
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

/// The four metric cards for the current parameters.
pub fn metrics_for<R: Rng + ?Sized>(params: &DashboardParams, rng: &mut R) -> Vec<Metric> {
    if let Strategy::Unknown(label) = &params.strategy {
        tracing::warn!(strategy = %label, "unknown strategy, using ML + Sentiment metrics");
    }
    let base = MetricBase::for_strategy(&params.strategy);
    MetricKind::ALL
        .iter()
        .map(|&kind| Metric {
            kind,
            name: kind.name().to_string(),
            value: kind.format(base.value(kind)),
            change: (rng.gen::<f64>() - 0.5) * kind.jitter_width(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Asset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(asset: Asset, strategy: Strategy) -> DashboardParams {
        DashboardParams {
            asset,
            strategy,
            ..DashboardParams::default()
        }
    }

    #[test]
    fn buy_and_hold_sharpe_regardless_of_asset() {
        let mut rng = StdRng::seed_from_u64(1);
        for asset in Asset::CATALOGUE.iter().cloned().chain([Asset::Other("ZZZZ".into())]) {
            let m = metrics_for(&params(asset, Strategy::BuyAndHold), &mut rng);
            assert_eq!(m[0].name, "Sharpe Ratio");
            assert_eq!(m[0].value, "1.15");
        }
    }

    #[test]
    fn four_cards_in_order_with_formatting() {
        let mut rng = StdRng::seed_from_u64(2);
        let m = metrics_for(&params(Asset::Spy, Strategy::BuyAndHold), &mut rng);
        let names: Vec<_> = m.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Sharpe Ratio", "Max Drawdown", "Annualized Return", "Win Rate"]);
        let values: Vec<_> = m.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["1.15", "-15.8%", "12.4%", "55.8%"]);
    }

    #[test]
    fn unknown_strategy_falls_back_to_ml_row() {
        let mut rng = StdRng::seed_from_u64(3);
        let m = metrics_for(&params(Asset::Spy, Strategy::Unknown("Pairs".into())), &mut rng);
        assert_eq!(m[0].value, "1.85");
        assert_eq!(m[3].value, "68.5%");
    }

    #[test]
    fn jitter_stays_within_half_width() {
        let mut rng = StdRng::seed_from_u64(4);
        let p = params(Asset::Spy, Strategy::Momentum);
        for _ in 0..2_000 {
            for card in metrics_for(&p, &mut rng) {
                let half = card.kind.jitter_width() / 2.0;
                assert!(card.change >= -half && card.change < half, "{card:?}");
            }
        }
    }

    #[test]
    fn jitter_does_not_accumulate() {
        // Values are static; only change moves between calls.
        let mut rng = StdRng::seed_from_u64(5);
        let p = params(Asset::Spy, Strategy::Momentum);
        let a = metrics_for(&p, &mut rng);
        let b = metrics_for(&p, &mut rng);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.value, y.value);
        }
        assert!(a.iter().zip(&b).any(|(x, y)| x.change != y.change));
    }
}

//! Property tests for generator and lookup invariants.
//!
//! Uses proptest to verify:
//! 1. One point per weekday, ascending, no weekends
//! 2. Values stay non-negative and inside the compounded return bands
//! 3. Identical inputs give identical dates; a fixed seed gives identical values
//! 4. Metric displays depend only on the strategy

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use folioboard_core::analytics::{metrics_for, weights_for};
use folioboard_core::domain::{self, Asset, DashboardParams};
use folioboard_core::series::{generate_series, weekday_count, ReturnBand};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..2_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn arb_range() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (arb_date(), 0i64..120).prop_map(|(start, len)| (start, start + chrono::Duration::days(len)))
}

fn arb_strategy() -> impl Strategy<Value = domain::Strategy> {
    prop_oneof![
        Just(domain::Strategy::MlSentiment),
        Just(domain::Strategy::BaselineArima),
        Just(domain::Strategy::BuyAndHold),
        Just(domain::Strategy::MeanReversion),
        Just(domain::Strategy::Momentum),
        "[A-Za-z ]{1,12}".prop_map(domain::Strategy::from),
    ]
}

fn arb_asset() -> impl Strategy<Value = Asset> {
    prop_oneof![
        proptest::sample::select(Asset::CATALOGUE.to_vec()),
        "[A-Z]{1,5}".prop_map(Asset::from),
    ]
}

// ── 1. Shape ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn one_point_per_weekday((start, end) in arb_range(), strategy in arb_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = generate_series(&Asset::Spy, &strategy, start, end, &mut rng);
        prop_assert_eq!(points.len(), weekday_count(start, end));
        for p in &points {
            prop_assert!(!matches!(p.date.weekday(), Weekday::Sat | Weekday::Sun));
            prop_assert!(p.date >= start && p.date <= end);
        }
        for pair in points.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn inverted_range_is_empty((start, end) in arb_range(), seed in any::<u64>()) {
        prop_assume!(start < end);
        let mut rng = StdRng::seed_from_u64(seed);
        let points = generate_series(&Asset::Spy, &domain::Strategy::Momentum, end, start, &mut rng);
        prop_assert!(points.is_empty());
    }
}

// ── 2. Bounds ────────────────────────────────────────────────────────

proptest! {
    /// Every day compounds a return inside the band, so the final value is
    /// bracketed by compounding the band edges over the elapsed calendar days.
    #[test]
    fn equity_within_compounded_band((start, end) in arb_range(), strategy in arb_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = generate_series(&Asset::Spy, &strategy, start, end, &mut rng);
        let band = ReturnBand::for_strategy(&strategy);
        for p in &points {
            let days = (p.date - start).num_days() as i32 + 1;
            let lo = 100_000.0 * (1.0 + band.low).powi(days) - 1.0;
            let hi = 100_000.0 * (1.0 + band.high).powi(days) + 1.0;
            let equity = p.equity as f64;
            prop_assert!(equity >= lo && equity <= hi, "equity {} outside [{}, {}]", equity, lo, hi);
        }
    }
}

// ── 3. Reproducibility ───────────────────────────────────────────────

proptest! {
    #[test]
    fn same_inputs_same_dates((start, end) in arb_range(), asset in arb_asset(), a in any::<u64>(), b in any::<u64>()) {
        let s = domain::Strategy::BuyAndHold;
        let first = generate_series(&asset, &s, start, end, &mut StdRng::seed_from_u64(a));
        let second = generate_series(&asset, &s, start, end, &mut StdRng::seed_from_u64(b));
        let d1: Vec<_> = first.iter().map(|p| p.date).collect();
        let d2: Vec<_> = second.iter().map(|p| p.date).collect();
        prop_assert_eq!(d1, d2);
    }

    #[test]
    fn fixed_seed_replays((start, end) in arb_range(), strategy in arb_strategy(), seed in any::<u64>()) {
        let first = generate_series(&Asset::Qqq, &strategy, start, end, &mut StdRng::seed_from_u64(seed));
        let second = generate_series(&Asset::Qqq, &strategy, start, end, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }
}

// ── 4. Lookups ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn metric_values_ignore_asset(asset in arb_asset(), strategy in arb_strategy(), seed in any::<u64>()) {
        let with_asset = DashboardParams { asset, strategy: strategy.clone(), ..DashboardParams::default() };
        let with_spy = DashboardParams { strategy, ..DashboardParams::default() };
        let a = metrics_for(&with_asset, &mut StdRng::seed_from_u64(seed));
        let b = metrics_for(&with_spy, &mut StdRng::seed_from_u64(seed.wrapping_add(1)));
        let va: Vec<_> = a.iter().map(|m| m.value.clone()).collect();
        let vb: Vec<_> = b.iter().map(|m| m.value.clone()).collect();
        prop_assert_eq!(va, vb);
        for m in &a {
            prop_assert!(m.change.abs() <= m.kind.jitter_width() / 2.0);
        }
    }

    #[test]
    fn weights_are_fractions(asset in arb_asset()) {
        let params = DashboardParams { asset, ..DashboardParams::default() };
        let weights = weights_for(&params);
        prop_assert!(weights.len() == 1 || weights.len() == 6);
        for w in &weights {
            prop_assert!((0.0..=1.0).contains(&w.weight));
        }
    }
}

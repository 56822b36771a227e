//! Chart data feed: delayed, superseding regeneration of the equity curve.
//!
//! The chart owns its own copy of the parameters it last asked for. A request
//! with different parameters schedules a regeneration after the fetch latency
//! and cancels any regeneration still pending, so the displayed curve always
//! matches the most recent request once it settles.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::domain::DashboardParams;
use crate::schedule::{SupersedingTimer, TaskId};
use crate::series::{generate_series_with, SeriesPoint, SeriesSettings, SeriesSummary};

/// Simulated round-trip for a chart fetch.
pub const DEFAULT_FETCH_LATENCY: Duration = Duration::from_millis(1000);

/// Outcome of a completed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesDelivery {
    pub task: TaskId,
    pub params: DashboardParams,
    pub points: usize,
}

#[derive(Debug, Clone)]
pub struct SeriesFeed {
    latency: Duration,
    settings: SeriesSettings,
    requested: Option<DashboardParams>,
    timer: SupersedingTimer<DashboardParams>,
    points: Vec<SeriesPoint>,
    shown_for: Option<DashboardParams>,
}

impl SeriesFeed {
    pub fn new(latency: Duration, settings: SeriesSettings) -> Self {
        Self {
            latency,
            settings,
            requested: None,
            timer: SupersedingTimer::new(),
            points: Vec::new(),
            shown_for: None,
        }
    }

    /// Ask for a curve for `params`. Identical consecutive requests are
    /// ignored; a changed request replaces any pending one.
    pub fn request(&mut self, params: &DashboardParams, now: Instant) -> Option<TaskId> {
        if self.requested.as_ref() == Some(params) {
            return None;
        }
        self.requested = Some(params.clone());
        let (id, superseded) = self.timer.schedule(now, self.latency, params.clone());
        tracing::debug!(
            task = id.0,
            superseded = ?superseded.map(|t| t.0),
            asset = %params.asset,
            strategy = %params.strategy,
            "chart fetch scheduled"
        );
        Some(id)
    }

    /// Complete the pending fetch if it is due, generating the curve with `rng`.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<SeriesDelivery> {
        let (task, params) = self.timer.poll(now)?;
        self.points = generate_series_with(
            &self.settings,
            &params.asset,
            &params.strategy,
            params.start_date,
            params.end_date,
            rng,
        );
        tracing::info!(task = task.0, points = self.points.len(), "chart series delivered");
        let delivery = SeriesDelivery {
            task,
            params: params.clone(),
            points: self.points.len(),
        };
        self.shown_for = Some(params);
        Some(delivery)
    }

    /// True from construction until the first delivery, and while a fetch is pending.
    pub fn is_loading(&self) -> bool {
        self.timer.is_pending() || self.shown_for.is_none()
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Parameters of the curve currently held, if any.
    pub fn shown_for(&self) -> Option<&DashboardParams> {
        self.shown_for.as_ref()
    }

    pub fn summary(&self) -> Option<SeriesSummary> {
        SeriesSummary::from_points(&self.points, self.settings.starting_capital)
    }
}

impl Default for SeriesFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_LATENCY, SeriesSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Asset, Strategy};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn msft_march() -> DashboardParams {
        DashboardParams::new(
            Asset::Msft,
            Strategy::Momentum,
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 10).unwrap(),
        )
    }

    #[test]
    fn loading_until_first_delivery() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(1);
        let mut feed = SeriesFeed::default();
        assert!(feed.is_loading());

        feed.request(&msft_march(), t0);
        assert!(feed.poll(t0 + Duration::from_millis(999), &mut rng).is_none());
        assert!(feed.is_loading());

        let d = feed.poll(t0 + DEFAULT_FETCH_LATENCY, &mut rng).unwrap();
        assert_eq!(d.points, 8);
        assert!(!feed.is_loading());
        assert_eq!(feed.shown_for(), Some(&msft_march()));
        assert_eq!(feed.points().len(), 8);
    }

    #[test]
    fn identical_request_is_ignored() {
        let t0 = Instant::now();
        let mut feed = SeriesFeed::default();
        assert!(feed.request(&msft_march(), t0).is_some());
        assert!(feed.request(&msft_march(), t0 + Duration::from_millis(10)).is_none());
    }

    #[test]
    fn stale_request_never_overwrites_newer() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(2);
        let mut feed = SeriesFeed::default();

        let first = DashboardParams::default();
        feed.request(&first, t0);
        let second = msft_march();
        let newer = feed.request(&second, t0 + Duration::from_millis(600)).unwrap();

        // First deadline passes: nothing delivered.
        assert!(feed.poll(t0 + Duration::from_millis(1100), &mut rng).is_none());
        let d = feed.poll(t0 + Duration::from_millis(1600), &mut rng).unwrap();
        assert_eq!(d.task, newer);
        assert_eq!(d.params, second);
        assert_eq!(feed.shown_for(), Some(&second));
    }

    #[test]
    fn reloading_keeps_previous_points_until_replaced() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(3);
        let mut feed = SeriesFeed::default();
        feed.request(&msft_march(), t0);
        feed.poll(t0 + DEFAULT_FETCH_LATENCY, &mut rng);

        feed.request(&DashboardParams::default(), t0 + Duration::from_secs(5));
        assert!(feed.is_loading());
        assert_eq!(feed.points().len(), 8);
    }

    #[test]
    fn summary_tracks_points() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(4);
        let mut feed = SeriesFeed::default();
        assert!(feed.summary().is_none());
        feed.request(&msft_march(), t0);
        feed.poll(t0 + DEFAULT_FETCH_LATENCY, &mut rng);
        let s = feed.summary().unwrap();
        assert_eq!(s.last_date, NaiveDate::from_ymd_opt(2023, 3, 10).unwrap());
    }
}

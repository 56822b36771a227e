//! Parameter coordinator: the single owner of the applied parameters.
//!
//! Apply replaces the parameters, regenerates the analytics snapshot
//! immediately and raises the loading flag for the apply latency. The chart
//! feed is handed the same parameters and refreshes on its own, slower timer.
//! The host drives everything by calling [`Coordinator::poll`] from its loop.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;

use crate::analytics::AnalyticsSnapshot;
use crate::config::DashboardConfig;
use crate::control::ParamsListener;
use crate::domain::{Asset, DashboardParams, Strategy};
use crate::error::DashboardError;
use crate::feed::{SeriesDelivery, SeriesFeed};
use crate::rng::Stream;
use crate::schedule::{TaskId, TimerQueue};

/// Something the host should react to after a poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// An apply timer fired and the loading flag was cleared.
    ApplySettled { task: TaskId },
    /// The chart feed finished a fetch.
    SeriesReady(SeriesDelivery),
}

#[derive(Debug)]
pub struct Coordinator {
    config: DashboardConfig,
    params: DashboardParams,
    loading: bool,
    apply_timers: TimerQueue,
    feed: SeriesFeed,
    series_rng: StdRng,
    jitter_rng: StdRng,
    analytics: AnalyticsSnapshot,
    today: NaiveDate,
    last_rejection: Option<DashboardError>,
}

impl Coordinator {
    /// Start with the configured default parameters and request the first curve.
    pub fn new(config: DashboardConfig, now: Instant, today: NaiveDate) -> Self {
        let seeds = config.seeds();
        let mut jitter_rng = seeds.rng_for(Stream::Jitter);
        let params = config.defaults.clone();
        let analytics = AnalyticsSnapshot::for_params(&params, today, &mut jitter_rng);
        let mut feed = SeriesFeed::new(config.fetch_latency(), config.series_settings());
        feed.request(&params, now);
        tracing::info!(
            seeded = seeds.is_deterministic(),
            strict = config.strict,
            "coordinator started"
        );
        Self {
            series_rng: seeds.rng_for(Stream::Series),
            jitter_rng,
            config,
            params,
            loading: false,
            apply_timers: TimerQueue::new(),
            feed,
            analytics,
            today,
            last_rejection: None,
        }
    }

    /// Replace the parameters and kick off both refreshes.
    ///
    /// In strict mode invalid parameters are rejected and nothing changes.
    pub fn apply(&mut self, params: DashboardParams, now: Instant) -> Result<(), DashboardError> {
        if self.config.strict {
            params.validate()?;
        } else {
            warn_lenient(&params);
        }

        self.loading = true;
        self.params = params;
        self.analytics = AnalyticsSnapshot::for_params(&self.params, self.today, &mut self.jitter_rng);
        let task = self.apply_timers.start(now, self.config.apply_latency());
        self.feed.request(&self.params, now);
        self.last_rejection = None;

        tracing::info!(
            task = task.0,
            asset = %self.params.asset,
            strategy = %self.params.strategy,
            start = %self.params.start_date,
            end = %self.params.end_date,
            "parameters applied"
        );
        Ok(())
    }

    /// Fire due apply timers and complete a due chart fetch.
    pub fn poll(&mut self, now: Instant) -> Vec<DashboardEvent> {
        let mut events = Vec::new();
        for task in self.apply_timers.poll(now) {
            self.loading = false;
            tracing::debug!(task = task.0, "apply settled");
            events.push(DashboardEvent::ApplySettled { task });
        }
        if let Some(delivery) = self.feed.poll(now, &mut self.series_rng) {
            events.push(DashboardEvent::SeriesReady(delivery));
        }
        events
    }

    /// Date used for sentiment headlines on the next apply.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn params(&self) -> &DashboardParams {
        &self.params
    }

    pub fn analytics(&self) -> &AnalyticsSnapshot {
        &self.analytics
    }

    pub fn feed(&self) -> &SeriesFeed {
        &self.feed
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn pending_applies(&self) -> usize {
        self.apply_timers.len()
    }

    /// Error from the most recent callback-driven apply, cleared by the next success.
    pub fn last_rejection(&self) -> Option<&DashboardError> {
        self.last_rejection.as_ref()
    }
}

impl ParamsListener for Coordinator {
    fn on_params_change(&mut self, params: DashboardParams) {
        self.set_today(utc_today());
        if let Err(err) = self.apply(params, Instant::now()) {
            tracing::warn!(error = %err, "parameter change rejected");
            self.last_rejection = Some(err);
        }
    }
}

/// Calendar date every surface uses for "today": headline dates and the
/// date pickers' future-date check.
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

fn warn_lenient(params: &DashboardParams) {
    if !params.has_valid_range() {
        tracing::warn!(
            start = %params.start_date,
            end = %params.end_date,
            "inverted date range, chart will be empty"
        );
    }
    if let Strategy::Unknown(label) = &params.strategy {
        tracing::warn!(strategy = %label, "applying unknown strategy");
    }
    if let Asset::Other(symbol) = &params.asset {
        tracing::warn!(%symbol, "applying asset outside the catalogue");
    }
}

//! Test helpers for building app state

use std::time::Instant;

use chrono::NaiveDate;
use folioboard_core::coordinator::Coordinator;
use folioboard_core::DashboardConfig;

use crate::app::AppState;

pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

pub fn test_app(strict: bool) -> AppState {
    let config = DashboardConfig {
        seed: Some(42),
        strict,
        ..DashboardConfig::default()
    };
    let coordinator = Coordinator::new(config, Instant::now(), test_today());
    AppState::new(coordinator, test_today())
}

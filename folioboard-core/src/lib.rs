//! Folioboard Core: domain types, mock data sources, scheduling, coordinator.
//!
//! This crate contains everything below the presentation layer:
//! - Domain types (assets, strategies, dashboard parameters)
//! - Bounded random-walk equity series with weekday filtering
//! - Metric, weight and sentiment lookups
//! - Cooperative delayed tasks and the superseding chart feed
//! - The parameter coordinator and the control-panel draft

pub mod analytics;
pub mod config;
pub mod control;
pub mod coordinator;
pub mod domain;
pub mod error;
pub mod feed;
pub mod rng;
pub mod schedule;
pub mod series;

pub use analytics::AnalyticsSnapshot;
pub use config::{ConfigError, DashboardConfig};
pub use control::{DateField, ParamsDraft, ParamsListener, PickRejection};
pub use coordinator::{Coordinator, DashboardEvent};
pub use domain::{Asset, DashboardParams, Strategy};
pub use error::DashboardError;
pub use series::{generate_series, SeriesPoint};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: state handed across the UI boundary is Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<DashboardParams>();
        require_sync::<DashboardParams>();
        require_send::<SeriesPoint>();
        require_sync::<SeriesPoint>();
        require_send::<AnalyticsSnapshot>();
        require_sync::<AnalyticsSnapshot>();
        require_send::<DashboardConfig>();
        require_sync::<DashboardConfig>();
        require_send::<Coordinator>();
        require_sync::<Coordinator>();
        require_send::<rng::SeedHierarchy>();
        require_sync::<rng::SeedHierarchy>();
    }
}

//! Folioboard TUI - terminal dashboard for the mock strategy data
//!
//! Provides:
//! - A control panel for asset, strategy and date range
//! - The strategy equity curve against its benchmark
//! - Metric cards with portfolio weights and sentiment headlines

pub mod app;
pub mod format;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;

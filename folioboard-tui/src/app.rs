//! Application state: single-owner, main-thread only.
//!
//! All TUI state lives here. Simulated latencies run on the coordinator's
//! cooperative timers, which `tick` advances once per frame.

use std::collections::VecDeque;
use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};

use folioboard_core::coordinator::{Coordinator, DashboardEvent};
use folioboard_core::{DateField, ParamsDraft, ParamsListener};

/// Which panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Control,
    Chart,
    Analytics,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Control => 0,
            Panel::Chart => 1,
            Panel::Analytics => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Control),
            1 => Some(Panel::Chart),
            2 => Some(Panel::Analytics),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Control => "Control",
            Panel::Chart => "Equity Curve",
            Panel::Analytics => "Analytics",
        }
    }

    pub fn next(self) -> Panel {
        match self {
            Panel::Control => Panel::Chart,
            Panel::Chart => Panel::Analytics,
            Panel::Analytics => Panel::Control,
        }
    }

    pub fn prev(self) -> Panel {
        match self {
            Panel::Control => Panel::Analytics,
            Panel::Chart => Panel::Control,
            Panel::Analytics => Panel::Chart,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Validation => "VAL",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// Rows of the control panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlField {
    Asset,
    Strategy,
    StartDate,
    EndDate,
    Apply,
}

impl ControlField {
    pub const ALL: [ControlField; 5] = [
        ControlField::Asset,
        ControlField::Strategy,
        ControlField::StartDate,
        ControlField::EndDate,
        ControlField::Apply,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ControlField::Asset => "Asset",
            ControlField::Strategy => "Strategy",
            ControlField::StartDate => "Start Date",
            ControlField::EndDate => "End Date",
            ControlField::Apply => "Apply",
        }
    }

    pub fn date_field(self) -> Option<DateField> {
        match self {
            ControlField::StartDate => Some(DateField::Start),
            ControlField::EndDate => Some(DateField::End),
            _ => None,
        }
    }

    pub fn down(self) -> ControlField {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1).min(Self::ALL.len() - 1)]
    }

    pub fn up(self) -> ControlField {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[i.saturating_sub(1)]
    }
}

/// Control panel state: the editable draft and the focused row.
#[derive(Debug, Clone)]
pub struct ControlPanelState {
    pub draft: ParamsDraft,
    pub cursor: ControlField,
}

impl ControlPanelState {
    pub fn new(draft: ParamsDraft) -> Self {
        Self {
            draft,
            cursor: ControlField::Asset,
        }
    }
}

/// Bottom half of the analytics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsTab {
    Weights,
    Sentiment,
}

impl AnalyticsTab {
    pub fn index(self) -> usize {
        match self {
            AnalyticsTab::Weights => 0,
            AnalyticsTab::Sentiment => 1,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            AnalyticsTab::Weights => AnalyticsTab::Sentiment,
            AnalyticsTab::Sentiment => AnalyticsTab::Weights,
        }
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Panel states
    pub control: ControlPanelState,
    pub analytics_tab: AnalyticsTab,
    pub coordinator: Coordinator,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub today: NaiveDate,

}

impl AppState {
    pub fn new(coordinator: Coordinator, today: NaiveDate) -> Self {
        let draft = ParamsDraft::new(coordinator.params().clone());
        Self {
            active_panel: Panel::Control,
            running: true,
            control: ControlPanelState::new(draft),
            analytics_tab: AnalyticsTab::Weights,
            coordinator,
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::None,
            today,
        }
    }

    /// Hand the draft to the coordinator.
    pub fn apply_draft(&mut self) {
        self.control.draft.apply(&mut self.coordinator);
        match self.coordinator.last_rejection().cloned() {
            Some(err) => self.push_error(
                ErrorCategory::Validation,
                err.to_string(),
                self.control.draft.params().series_label(),
            ),
            None => self.set_status(format!(
                "Applying {}...",
                self.coordinator.params().series_label()
            )),
        }
    }

    /// Advance the coordinator's timers.
    pub fn tick(&mut self, now: Instant) {
        for event in self.coordinator.poll(now) {
            match event {
                DashboardEvent::ApplySettled { .. } => {
                    if !self.coordinator.is_loading() {
                        self.set_status("Parameters applied");
                    }
                }
                DashboardEvent::SeriesReady(delivery) => {
                    match self.coordinator.feed().summary() {
                        Some(summary) => self.set_status(format!(
                            "Chart updated: {} trading days, strategy {:+.1}% vs benchmark {:+.1}%",
                            delivery.points,
                            summary.equity_return * 100.0,
                            summary.benchmark_return * 100.0
                        )),
                        None => self.set_warning("No trading days in the selected range"),
                    }
                }
            }
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_app;
    use folioboard_core::{Asset, Strategy};
    use std::time::Duration;

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Control.next(), Panel::Chart);
        assert_eq!(Panel::Analytics.next(), Panel::Control);
        assert_eq!(Panel::Control.prev(), Panel::Analytics);
        assert_eq!(Panel::Chart.prev(), Panel::Control);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..3 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(3).is_none());
    }

    #[test]
    fn control_cursor_clamps() {
        assert_eq!(ControlField::Asset.up(), ControlField::Asset);
        assert_eq!(ControlField::EndDate.down(), ControlField::Apply);
        assert_eq!(ControlField::Apply.down(), ControlField::Apply);
        assert_eq!(ControlField::StartDate.date_field(), Some(DateField::Start));
        assert_eq!(ControlField::Asset.date_field(), None);
    }

    #[test]
    fn error_history_caps_at_50() {
        let mut app = test_app(false);
        for i in 0..60 {
            app.push_error(ErrorCategory::Other, format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn apply_draft_enters_loading_and_settles() {
        let mut app = test_app(false);
        app.control.draft.set_asset(Asset::Tsla);
        app.control.draft.set_strategy(Strategy::BuyAndHold);
        app.apply_draft();

        assert!(app.coordinator.is_loading());
        assert_eq!(app.coordinator.params().asset, Asset::Tsla);
        assert_eq!(app.coordinator.analytics().weights.len(), 1);

        app.tick(Instant::now() + Duration::from_secs(2));
        assert!(!app.coordinator.is_loading());
        assert!(!app.coordinator.feed().is_loading());
        assert_eq!(
            app.coordinator.feed().shown_for().map(|p| &p.asset),
            Some(&Asset::Tsla)
        );
        let (msg, level) = app.status_message.clone().unwrap();
        assert!(msg.starts_with("Chart updated: 260 trading days, strategy "));
        assert!(msg.contains("% vs benchmark "));
        assert_eq!(level, StatusLevel::Info);
    }

    #[test]
    fn strict_rejection_is_recorded() {
        let mut app = test_app(true);
        app.control.draft.set_strategy(Strategy::Unknown("Pairs".into()));
        app.apply_draft();
        assert_eq!(app.error_history.len(), 1);
        assert_eq!(app.error_history[0].category, ErrorCategory::Validation);
        assert!(!app.coordinator.is_loading());
    }
}

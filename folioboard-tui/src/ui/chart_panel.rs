//! Panel 2: Chart: strategy equity curve against the benchmark.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use folioboard_core::SeriesPoint;

use crate::app::AppState;
use crate::format;
use crate::theme;

pub const BENCHMARK_LABEL: &str = "Benchmark (S&P 500)";

/// Added above and below the data range on the value axis.
pub const Y_PADDING: f64 = 5_000.0;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let feed = app.coordinator.feed();

    if feed.is_loading() {
        render_message(f, area, "Loading chart data...", theme::warning());
        return;
    }

    let label = feed
        .shown_for()
        .map(|p| p.series_label())
        .unwrap_or_default();
    match y_domain(feed.points()) {
        Some(bounds) => render_chart(f, area, feed.points(), &label, bounds),
        None => render_message(f, area, "No trading days in the selected range.", theme::muted()),
    }
}

/// Value-axis bounds covering both lines, padded by [`Y_PADDING`].
pub fn y_domain(points: &[SeriesPoint]) -> Option<(f64, f64)> {
    let values = points.iter().flat_map(|p| [p.equity, p.benchmark]);
    let min = values.clone().min()?;
    let max = values.max()?;
    Some((min as f64 - Y_PADDING, max as f64 + Y_PADDING))
}

fn render_message(f: &mut Frame, area: Rect, msg: &str, style: Style) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(msg.to_string(), style)),
    ];
    f.render_widget(Paragraph::new(lines).centered(), area);
}

fn render_chart(f: &mut Frame, area: Rect, points: &[SeriesPoint], label: &str, (y_min, y_max): (f64, f64)) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let legend = Line::from(vec![
        Span::styled("━ ", theme::accent()),
        Span::styled(label.to_string(), theme::accent()),
        Span::raw("   "),
        Span::styled("━ ", theme::neutral()),
        Span::styled(BENCHMARK_LABEL, theme::neutral()),
    ]);
    f.render_widget(Paragraph::new(legend), chunks[0]);

    let strategy: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.equity as f64))
        .collect();
    let benchmark: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.benchmark as f64))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name(label.to_string())
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(theme::ACCENT))
            .graph_type(GraphType::Line)
            .data(&strategy),
        Dataset::default()
            .name(BENCHMARK_LABEL)
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(theme::NEUTRAL))
            .graph_type(GraphType::Line)
            .data(&benchmark),
    ];

    let x_max = points.len().saturating_sub(1) as f64;
    let x_labels: Vec<Span> = x_tick_dates(points)
        .into_iter()
        .map(|d| Span::styled(format::axis_date(d), theme::muted()))
        .collect();
    let y_mid = (y_min + y_max) / 2.0;

    let chart = Chart::new(datasets)
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)))
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format::currency(y_min), theme::muted()),
                    Span::styled(format::currency(y_mid), theme::muted()),
                    Span::styled(format::currency(y_max), theme::muted()),
                ]),
        );

    f.render_widget(chart, chunks[1]);
}

/// First, middle and last dates; fewer when the series is short.
fn x_tick_dates(points: &[SeriesPoint]) -> Vec<chrono::NaiveDate> {
    match points.len() {
        0 => Vec::new(),
        1 => vec![points[0].date],
        2 => vec![points[0].date, points[1].date],
        n => vec![points[0].date, points[n / 2].date, points[n - 1].date],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, equity: u64, benchmark: u64) -> SeriesPoint {
        SeriesPoint {
            date: NaiveDate::from_ymd_opt(2023, 3, day).unwrap(),
            equity,
            benchmark,
        }
    }

    #[test]
    fn domain_spans_both_lines_with_padding() {
        let points = [point(1, 100_500, 99_800), point(2, 101_200, 100_100)];
        assert_eq!(y_domain(&points), Some((94_800.0, 106_200.0)));
    }

    #[test]
    fn empty_series_has_no_domain() {
        assert_eq!(y_domain(&[]), None);
    }

    #[test]
    fn ticks_pick_ends_and_middle() {
        let points: Vec<_> = (1..=9).map(|d| point(d, 1, 1)).collect();
        let ticks = x_tick_dates(&points);
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[1], NaiveDate::from_ymd_opt(2023, 3, 5).unwrap());
        assert_eq!(x_tick_dates(&points[..1]).len(), 1);
    }
}

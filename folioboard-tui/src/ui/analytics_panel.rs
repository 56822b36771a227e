//! Panel 3: Analytics: metric cards and the Weights / Sentiment tabs.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use folioboard_core::analytics::{Metric, SentimentItem, WeightEntry};

use crate::app::{AnalyticsTab, AppState};
use crate::format;
use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let snapshot = app.coordinator.analytics();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    render_metric_cards(f, chunks[0], &snapshot.metrics);

    let tabs = Tabs::new(vec!["Weights [w]", "Sentiment [s]"])
        .select(app.analytics_tab.index())
        .style(theme::muted())
        .highlight_style(theme::accent_bold().add_modifier(Modifier::UNDERLINED));
    f.render_widget(tabs, chunks[1]);

    match app.analytics_tab {
        AnalyticsTab::Weights => render_weights(f, chunks[2], &snapshot.weights),
        AnalyticsTab::Sentiment => render_sentiment(f, chunks[2], &snapshot.sentiment),
    }
}

fn render_metric_cards(f: &mut Frame, area: Rect, metrics: &[Metric]) {
    if metrics.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = metrics
        .iter()
        .map(|_| Constraint::Ratio(1, metrics.len() as u32))
        .collect();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let palette = Theme::default();
    for (metric, card) in metrics.iter().zip(cards.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(Span::styled(metric.name.as_str(), theme::muted()));
        let body = Line::from(vec![
            Span::styled(metric.value.as_str(), theme::text().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(
                format::change_badge(metric.change),
                Style::default().fg(palette.change_color(metric.change)),
            ),
        ]);
        f.render_widget(Paragraph::new(body).block(block), *card);
    }
}

fn render_weights(f: &mut Frame, area: Rect, weights: &[WeightEntry]) {
    let bars: Vec<Bar> = weights
        .iter()
        .map(|w| {
            let color = theme::rgb(w.color);
            Bar::default()
                .value(format::bar_height(w.weight))
                .label(Line::from(w.asset.clone()))
                .text_value(format::weight_percent(w.weight))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(color).add_modifier(Modifier::REVERSED))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(2)
        .max(200);
    f.render_widget(chart, area);
}

fn render_sentiment(f: &mut Frame, area: Rect, items: &[SentimentItem]) {
    let palette = Theme::default();
    let mut lines: Vec<Line> = Vec::new();
    for item in items {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>6} ", format::sentiment_score(item.score)),
                Style::default()
                    .fg(palette.sentiment_color(item.score))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(item.headline.as_str(), theme::text()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {} · {}", item.source, item.date.format("%Y-%m-%d")),
            theme::muted(),
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}

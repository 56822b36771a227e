//! Bottom status bar: loading indicator, last status message, hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    if app.coordinator.is_loading() || app.coordinator.feed().is_loading() {
        spans.push(Span::styled(" ● loading ", theme::warning()));
    } else {
        spans.push(Span::styled(" ● ready ", theme::positive()));
    }

    spans.push(Span::styled(
        "1:Control 2:Chart 3:Analytics ?:Help q:Quit",
        theme::muted(),
    ));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

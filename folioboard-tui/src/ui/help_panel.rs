//! Help overlay: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard Shortcuts [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-3", "Focus panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "e", "Open error history");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1: Control");
    key(&mut lines, "j / k", "Move between rows");
    key(&mut lines, "h / l", "Cycle asset or strategy, move a date by one day");
    key(&mut lines, "H / L", "Move a date by 30 days");
    key(&mut lines, "Enter / a", "Apply the draft parameters");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2: Equity Curve");
    key(&mut lines, "", "Strategy and benchmark, refreshed after each apply");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 3: Analytics");
    key(&mut lines, "h / l / t", "Toggle Weights / Sentiment");
    key(&mut lines, "w / s", "Jump to Weights / Sentiment");
    lines.push(Line::from(""));

    section(&mut lines, "Date Rules");
    key(&mut lines, "", "No dates after today");
    key(&mut lines, "", "Start never after end, end never before start");

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

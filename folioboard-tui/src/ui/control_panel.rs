//! Panel 1: Control: asset, strategy, date range and the Apply button.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use folioboard_core::Asset;

use crate::app::{AppState, ControlField, Panel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let draft = app.control.draft.params();
    let focused = app.active_panel == Panel::Control;
    let loading = app.coordinator.is_loading();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[j/k]row [h/l]change [H/L]±30d",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    for field in ControlField::ALL {
        let selected = focused && app.control.cursor == field;
        let label_style = if selected {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::neutral()
        };

        if field == ControlField::Apply {
            lines.push(Line::from(""));
            let text = if loading { "[ Applying... ]" } else { "[ Apply ]" };
            let style = if loading {
                theme::warning()
            } else if selected {
                label_style
            } else {
                theme::accent_bold()
            };
            lines.push(Line::from(Span::styled(format!("  {text}"), style)));
            continue;
        }

        let value = match field {
            ControlField::Asset => asset_label(&draft.asset),
            ControlField::Strategy => draft.strategy.to_string(),
            ControlField::StartDate => draft.start_date.format("%Y-%m-%d").to_string(),
            ControlField::EndDate => draft.end_date.format("%Y-%m-%d").to_string(),
            ControlField::Apply => String::new(),
        };

        lines.push(Line::from(Span::styled(format!("{}:", field.label()), label_style)));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("< {value} >"),
                if selected { theme::accent() } else { theme::text() },
            ),
        ]));
    }

    lines.push(Line::from(""));
    let applied = app.coordinator.params();
    if applied != draft {
        lines.push(Line::from(Span::styled("Unapplied changes", theme::warning())));
    }
    lines.push(Line::from(vec![
        Span::styled("Showing: ", theme::muted()),
        Span::styled(applied.series_label(), theme::accent()),
    ]));
    lines.push(Line::from(Span::styled(
        format!("{} to {}", applied.start_date, applied.end_date),
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}

/// Symbol plus short description for catalogue assets.
fn asset_label(asset: &Asset) -> String {
    if asset.is_known() {
        format!("{} - {}", asset.symbol(), asset.description())
    } else {
        asset.symbol().to_string()
    }
}

//! Keyboard input dispatch: overlays → global keys → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, ControlField, Overlay, Panel};

/// Days moved by `H`/`L` on a date row.
const DATE_JUMP_DAYS: i64 = 30;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Control; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Chart; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Analytics; return; }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Control => handle_control_key(app, key),
        Panel::Chart => {} // display only
        Panel::Analytics => handle_analytics_key(app, key),
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_control_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.control.cursor = app.control.cursor.down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.control.cursor = app.control.cursor.up();
        }
        KeyCode::Char('h') | KeyCode::Left => adjust_control(app, -1),
        KeyCode::Char('l') | KeyCode::Right => adjust_control(app, 1),
        KeyCode::Char('H') => adjust_control(app, -DATE_JUMP_DAYS),
        KeyCode::Char('L') => adjust_control(app, DATE_JUMP_DAYS),
        KeyCode::Enter | KeyCode::Char('a') => app.apply_draft(),
        _ => {}
    }
}

/// Cycle the selection on the focused row, or move its date by `step` days.
fn adjust_control(app: &mut AppState, step: i64) {
    let forward = step > 0;
    match app.control.cursor {
        ControlField::Asset => app.control.draft.cycle_asset(forward),
        ControlField::Strategy => app.control.draft.cycle_strategy(forward),
        ControlField::StartDate | ControlField::EndDate => {
            let Some(field) = app.control.cursor.date_field() else {
                return;
            };
            if let Err(rejection) = app.control.draft.shift_date(field, step, app.today) {
                app.set_warning(rejection.to_string());
            }
        }
        ControlField::Apply => {}
    }
}

fn handle_analytics_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('t') => {
            app.analytics_tab = app.analytics_tab.toggle();
        }
        KeyCode::Char('w') => app.analytics_tab = crate::app::AnalyticsTab::Weights,
        KeyCode::Char('s') => app.analytics_tab = crate::app::AnalyticsTab::Sentiment,
        _ => {}
    }
}

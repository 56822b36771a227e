//! Parrot/neon theme tokens for the Folioboard TUI
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, strategy line)
//! - **Positive**: Neon green (gains, positive sentiment)
//! - **Negative**: Hot pink (losses, negative sentiment)
//! - **Warning**: Neon orange (alerts, loading)
//! - **Neutral**: Cool purple (benchmark line, secondary info)
//! - **Muted**: Steel blue (hints, disabled)

use ratatui::style::{Color, Modifier, Style};

use folioboard_core::analytics::Rgb;

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: ACCENT,
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: NEUTRAL,
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Metric change badge: non-negative is up.
    pub fn change_color(&self, change: f64) -> Color {
        if change >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Sentiment score: strictly positive reads as good news.
    pub fn sentiment_color(&self, score: f64) -> Color {
        if score > 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    pub fn sharpe_color(&self, sharpe: f64) -> Color {
        match sharpe {
            s if s >= 2.0 => self.positive,
            s if s >= 1.0 => self.accent,
            s if s >= 0.5 => self.neutral,
            s if s >= 0.0 => self.muted,
            _ => self.negative,
        }
    }
}

/// Palette entry as a terminal color.
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

// ── Style shorthands used by the panels ──────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn neutral() -> Style {
    Style::default().fg(Theme::default().neutral)
}

pub fn positive() -> Style {
    Style::default().fg(Theme::default().positive)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

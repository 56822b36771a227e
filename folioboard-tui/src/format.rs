//! Display formatting for chart axes, metric badges and analytics rows.

use chrono::{Datelike, NaiveDate};

/// Whole-dollar amount with thousands separators, e.g. `$104,250`.
pub fn currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Month/day axis tick without zero padding, e.g. `3/1`.
pub fn axis_date(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// Change badge: arrow plus absolute percentage with one decimal.
pub fn change_badge(change: f64) -> String {
    let arrow = if change >= 0.0 { '▲' } else { '▼' };
    format!("{arrow} {:.1}%", (change * 100.0).abs())
}

pub fn weight_percent(weight: f64) -> String {
    format!("{:.1}%", weight * 100.0)
}

/// Bar height for a weight, floored so tiny weights stay visible.
pub fn bar_height(weight: f64) -> u64 {
    (weight * 200.0).max(20.0).round() as u64
}

pub fn sentiment_score(score: f64) -> String {
    format!("{score:.2}")
}

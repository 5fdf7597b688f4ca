//! Time utilities: parsing HH:MM and formatting fractional hours.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_time_or_err(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Render fractional hours as "Xh Ym", sign-preserving.
/// Minutes come from rounding the absolute value, so -1.5 → "-1h 30m"
/// and 0.0 → "0h 0m".
pub fn format_hours_minutes(hours: f64) -> String {
    let sign = if hours < 0.0 { "-" } else { "" };
    let total_minutes = (hours.abs() * 60.0).round() as i64;
    format!("{}{}h {}m", sign, total_minutes / 60, total_minutes % 60)
}

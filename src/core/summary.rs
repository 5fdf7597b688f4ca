//! Summary reporting: total logged hours against the configured target,
//! optionally restricted to the current pay period.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::utils::date;
use chrono::{Days, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub entry_count: usize,
    pub total_hours: f64,
    pub target_hours: f64,
    pub remaining_hours: f64,
}

pub fn build_summary(entries: &[WorkEntry], target_hours: f64) -> Summary {
    // Fold from 0.0: f64's sum identity is -0.0, which would print as "-0.00"
    let total_hours = entries.iter().fold(0.0, |acc, e| acc + e.duration_hours);
    Summary {
        entry_count: entries.len(),
        total_hours,
        target_hours,
        remaining_hours: target_hours - total_hours,
    }
}

/// The pay-period window containing `today`: periods are consecutive
/// `length_days`-day spans counted from the anchor date. Dates before the
/// anchor fall into negative period indexes, so the window is still correct.
pub fn current_pay_period(
    today: NaiveDate,
    anchor: NaiveDate,
    length_days: u32,
) -> (NaiveDate, NaiveDate) {
    let len = i64::from(length_days.max(1));
    let days_since_anchor = (today - anchor).num_days();
    let period_index = days_since_anchor.div_euclid(len);

    let offset = period_index * len;
    let start = anchor + chrono::Duration::days(offset);
    let end = start + Days::new(length_days.max(1) as u64 - 1);
    (start, end)
}

/// Resolve the configured pay-period window for today.
pub fn pay_period_from_config(cfg: &Config) -> AppResult<(NaiveDate, NaiveDate)> {
    let anchor = date::parse_date(&cfg.pay_period_start)
        .ok_or_else(|| AppError::Config(format!(
            "Invalid pay_period_start: {}",
            cfg.pay_period_start
        )))?;
    Ok(current_pay_period(date::today(), anchor, cfg.pay_period_days))
}

/// Totals for one finished pay period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_hours: f64,
    pub overtime_hours: f64,
}

/// Per-period totals and overtime for every pay period completed before
/// the one containing `today`. Periods run consecutively from the anchor;
/// a `today` in or before the first period yields an empty list.
pub fn completed_periods(
    entries: &[WorkEntry],
    today: NaiveDate,
    anchor: NaiveDate,
    length_days: u32,
    target_hours: f64,
) -> Vec<PeriodSummary> {
    let len = i64::from(length_days.max(1));
    let current_index = (today - anchor).num_days().div_euclid(len);

    let mut out = Vec::new();
    for i in 0..current_index.max(0) {
        let start = anchor + chrono::Duration::days(i * len);
        let end = start + Days::new(length_days.max(1) as u64 - 1);
        let total_hours = entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .fold(0.0, |acc, e| acc + e.duration_hours);
        out.push(PeriodSummary {
            start,
            end,
            total_hours,
            overtime_hours: total_hours - target_hours,
        });
    }
    out
}

/// Keep only the entries whose date falls inside the window (inclusive).
pub fn filter_window(entries: Vec<WorkEntry>, start: NaiveDate, end: NaiveDate) -> Vec<WorkEntry> {
    entries
        .into_iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect()
}

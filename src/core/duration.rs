//! Net work duration: (end - start) - (break_end - break_start), in hours.

use chrono::{NaiveDate, NaiveTime};

/// Compute the net worked hours for a shift, rounded to two decimals.
///
/// Times are combined with the date into full timestamps before subtracting,
/// so the arithmetic matches what the backing sheet records. There is no
/// bounds checking: an end before the start, or a break longer than the
/// shift, produces a negative result that passes through silently.
pub fn net_duration_hours(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    break_start: NaiveTime,
    break_end: NaiveTime,
) -> f64 {
    let start_dt = date.and_time(start);
    let end_dt = date.and_time(end);
    let break_start_dt = date.and_time(break_start);
    let break_end_dt = date.and_time(break_end);

    let worked = (end_dt - start_dt) - (break_end_dt - break_start_dt);
    round2(worked.num_seconds() as f64 / 3600.0)
}

pub fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

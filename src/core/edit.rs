use crate::core::duration::net_duration_hours;
use crate::db::audit::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_entries_by_date, update_entries_for_date};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Rewrite the entries of a date with new times and a recomputed
    /// duration. Times not given keep the values of the first existing
    /// entry, like a pre-filled edit form.
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        break_start: Option<NaiveTime>,
        break_end: Option<NaiveTime>,
    ) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let existing = load_entries_by_date(pool, &date)?;
        let base = existing
            .first()
            .ok_or_else(|| AppError::NoEntriesForDate(date_str.clone()))?;

        let start = start.unwrap_or(base.start_time);
        let end = end.unwrap_or(base.end_time);
        let break_start = break_start.unwrap_or(base.break_start);
        let break_end = break_end.unwrap_or(base.break_end);

        let duration = net_duration_hours(date, start, end, break_start, break_end);

        let updated =
            update_entries_for_date(pool, &date, start, end, break_start, break_end, duration)?;

        success(format!(
            "Updated {} entries for {} ({:.2} hours)",
            updated, date_str, duration
        ));

        if let Err(e) = audit(
            &pool.conn,
            "edit",
            &date_str,
            &format!("Updated {} entries to {:.2} hours", updated, duration),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}

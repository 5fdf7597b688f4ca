use crate::config::Config;
use crate::core::duration::net_duration_hours;
use crate::core::summary::build_summary;
use crate::db::audit::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{append_entry, load_sheet};
use crate::errors::AppResult;
use crate::models::entry::WorkEntry;
use crate::ui::messages::success;
use crate::utils::time::format_hours_minutes;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `log` command.
pub struct LogLogic;

impl LogLogic {
    /// Compute the net duration, append one row to the backing table,
    /// reload the table and report totals against the target.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        break_start: NaiveTime,
        break_end: NaiveTime,
    ) -> AppResult<()> {
        let duration = net_duration_hours(date, start, end, break_start, break_end);

        let entry = WorkEntry::new(date, start, end, break_start, break_end, duration);
        append_entry(&pool.conn, &entry)?;

        // Reload the full table before reporting, like the sheet refresh
        let sheet = load_sheet(pool)?;
        let summary = build_summary(&sheet.entries, cfg.target_hours);

        success(format!(
            "Logged {:.2} hours for {}",
            duration,
            entry.date_str()
        ));
        println!("Total logged: {:.2} hrs", summary.total_hours);
        println!(
            "Remaining to reach {} hrs target: {}",
            cfg.target_hours,
            format_hours_minutes(summary.remaining_hours)
        );

        // Audit write is non-blocking
        if let Err(e) = audit(
            &pool.conn,
            "log",
            &entry.date_str(),
            &format!("Logged {:.2} hours", duration),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}

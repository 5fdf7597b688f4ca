use crate::db::audit::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entries_for_date, load_entries_by_date};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, date: NaiveDate) -> AppResult<usize> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let entries = load_entries_by_date(pool, &date)?;
        if entries.is_empty() {
            return Err(AppError::NoEntriesForDate(date_str));
        }

        let removed = delete_entries_for_date(pool, &date)?;
        info(format!("Deleted {} entries for {}", removed, date));

        if let Err(e) = audit(
            &pool.conn,
            "del",
            &date_str,
            &format!("Deleted {} entries", removed),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(removed)
    }
}

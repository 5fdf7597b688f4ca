use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Sheet, WorkEntry};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

/// Load the full backing table in insertion order.
/// An empty table yields an empty `Sheet` carrying the full column set.
pub fn load_sheet(pool: &mut DbPool) -> AppResult<Sheet> {
    let mut stmt = pool.conn.prepare("SELECT * FROM entries ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(Sheet { entries })
}

pub fn load_entries_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM entries
         WHERE date = ?1
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<WorkEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start_time = get_time(row, "start_time")?;
    let end_time = get_time(row, "end_time")?;
    let break_start = get_time(row, "break_start")?;
    let break_end = get_time(row, "break_end")?;

    let duration_str: String = row.get("duration_hrs")?;
    let duration_hours: f64 = duration_str.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!(
                "Invalid duration cell: {duration_str}"
            ))),
        )
    })?;

    Ok(WorkEntry {
        id: row.get("id")?,
        date,
        start_time,
        end_time,
        break_start,
        break_end,
        duration_hours,
        created_at: row.get("created_at")?,
    })
}

fn get_time(row: &Row, col: &str) -> Result<NaiveTime> {
    let s: String = row.get(col)?;
    NaiveTime::parse_from_str(&s, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(s.clone())),
        )
    })
}

/// Append one row; every cell is serialized to its sheet display string.
pub fn append_entry(conn: &Connection, entry: &WorkEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (date, start_time, end_time, break_start, break_end, duration_hrs, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            entry.break_start_str(),
            entry.break_end_str(),
            entry.duration_str(),
            entry.created_at,
        ],
    )?;
    Ok(())
}

/// Rewrite the time cells and duration for every row of a date;
/// returns the number of updated rows.
pub fn update_entries_for_date(
    pool: &mut DbPool,
    date: &NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    break_start: NaiveTime,
    break_end: NaiveTime,
    duration_hours: f64,
) -> AppResult<usize> {
    let n = pool.conn.execute(
        "UPDATE entries
         SET start_time = ?1, end_time = ?2, break_start = ?3, break_end = ?4, duration_hrs = ?5
         WHERE date = ?6",
        params![
            start.format("%H:%M").to_string(),
            end.format("%H:%M").to_string(),
            break_start.format("%H:%M").to_string(),
            break_end.format("%H:%M").to_string(),
            format!("{:.2}", duration_hours),
            date.format("%Y-%m-%d").to_string(),
        ],
    )?;
    Ok(n)
}

/// Delete all rows for a date; returns the number of removed rows.
pub fn delete_entries_for_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<usize> {
    let n = pool.conn.execute(
        "DELETE FROM entries WHERE date = ?1",
        [date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}

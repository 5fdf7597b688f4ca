use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// Column set of the backing table, in sheet order.
pub const COLUMNS: [&str; 6] = [
    "Date",
    "Start Time",
    "End Time",
    "Break Start",
    "Break End",
    "Work Duration (hrs)",
];

#[derive(Debug, Clone, Serialize)]
pub struct WorkEntry {
    pub id: i64,
    pub date: NaiveDate,          // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveTime,    // ⇔ entries.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,      // ⇔ entries.end_time (TEXT "HH:MM")
    pub break_start: NaiveTime,   // ⇔ entries.break_start (TEXT "HH:MM")
    pub break_end: NaiveTime,     // ⇔ entries.break_end (TEXT "HH:MM")
    pub duration_hours: f64,      // ⇔ entries.duration_hrs (TEXT, 2-dp decimal)
    pub created_at: String,       // ⇔ entries.created_at (TEXT, ISO8601)
}

impl WorkEntry {
    /// Constructor for entries created from the CLI.
    /// `id = 0` until the row is inserted; `created_at = now() in ISO8601`.
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_start: NaiveTime,
        break_end: NaiveTime,
        duration_hours: f64,
    ) -> Self {
        Self {
            id: 0,
            date,
            start_time,
            end_time,
            break_start,
            break_end,
            duration_hours,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }

    pub fn break_start_str(&self) -> String {
        self.break_start.format("%H:%M").to_string()
    }

    pub fn break_end_str(&self) -> String {
        self.break_end.format("%H:%M").to_string()
    }

    /// Duration as stored in the sheet column, e.g. "7.00".
    pub fn duration_str(&self) -> String {
        format!("{:.2}", self.duration_hours)
    }
}

/// The fully loaded backing table: the fixed column set plus all rows.
/// An empty table still carries the complete column set.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub entries: Vec<WorkEntry>,
}

impl Sheet {
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of the duration column across all loaded rows.
    /// Folded from 0.0 so an empty table sums to 0.0, not -0.0.
    pub fn total_hours(&self) -> f64 {
        self.entries.iter().fold(0.0, |acc, e| acc + e.duration_hours)
    }
}

use crate::models::entry::WorkEntry;
use serde::Serialize;

/// Flat export row; serde field names match the sheet column headers.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Break Start")]
    pub break_start: String,
    #[serde(rename = "Break End")]
    pub break_end: String,
    #[serde(rename = "Work Duration (hrs)")]
    pub duration_hrs: String,
}

impl From<&WorkEntry> for EntryExport {
    fn from(e: &WorkEntry) -> Self {
        Self {
            date: e.date_str(),
            start_time: e.start_str(),
            end_time: e.end_str(),
            break_start: e.break_start_str(),
            break_end: e.break_end_str(),
            duration_hrs: e.duration_str(),
        }
    }
}

//! Library-level tests against the backing table, using the DB API directly.

mod common;
use common::setup_test_db;

use chrono::{NaiveDate, NaiveTime};
use worklog::core::duration::net_duration_hours;
use worklog::db::initialize::init_db;
use worklog::db::pool::DbPool;
use worklog::db::queries::{append_entry, load_sheet};
use worklog::models::entry::{COLUMNS, WorkEntry};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn empty_sheet_has_full_column_set() {
    let db_path = setup_test_db("empty_sheet_columns");
    let mut pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");

    let sheet = load_sheet(&mut pool).expect("load sheet");
    assert!(sheet.is_empty());
    assert_eq!(
        sheet.columns(),
        &[
            "Date",
            "Start Time",
            "End Time",
            "Break Start",
            "Break End",
            "Work Duration (hrs)"
        ]
    );
    assert_eq!(sheet.columns(), &COLUMNS);
}

#[test]
fn appending_n_entries_loads_n_rows_with_matching_sum() {
    let db_path = setup_test_db("append_n_entries");
    let mut pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");

    let mut expected_sum = 0.0;
    for i in 0..10u32 {
        let date = NaiveDate::from_ymd_opt(2025, 11, i + 1).unwrap();
        let start = t(9, 0);
        let end = t(16, 10 + i);
        let hrs = net_duration_hours(date, start, end, t(0, 0), t(0, 0));
        expected_sum += hrs;

        let entry = WorkEntry::new(date, start, end, t(0, 0), t(0, 0), hrs);
        append_entry(&pool.conn, &entry).expect("append entry");
    }

    let sheet = load_sheet(&mut pool).expect("load sheet");
    assert_eq!(sheet.len(), 10);
    assert!((sheet.total_hours() - expected_sum).abs() < 0.01);
}

#[test]
fn loaded_rows_preserve_display_strings() {
    let db_path = setup_test_db("display_strings");
    let mut pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");

    let date = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
    let hrs = net_duration_hours(date, t(9, 0), t(17, 30), t(12, 0), t(12, 30));
    let entry = WorkEntry::new(date, t(9, 0), t(17, 30), t(12, 0), t(12, 30), hrs);
    append_entry(&pool.conn, &entry).expect("append entry");

    let sheet = load_sheet(&mut pool).expect("load sheet");
    let loaded = &sheet.entries[0];
    assert_eq!(loaded.date_str(), "2025-09-08");
    assert_eq!(loaded.start_str(), "09:00");
    assert_eq!(loaded.end_str(), "17:30");
    assert_eq!(loaded.break_start_str(), "12:00");
    assert_eq!(loaded.break_end_str(), "12:30");
    assert_eq!(loaded.duration_str(), "8.00");
}

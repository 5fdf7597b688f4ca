use predicates::str::contains;

mod common;
use common::{init_db_with_data, setup_test_db, wl};

#[test]
fn test_log_reports_duration_and_totals() {
    let db_path = setup_test_db("log_reports_duration");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        &db_path,
        "log",
        "2025-09-08",
        "--start",
        "09:00",
        "--end",
        "16:00",
    ])
    .assert()
    .success()
    .stdout(contains("Logged 7.00 hours for 2025-09-08"))
    .stdout(contains("Total logged: 7.00 hrs"))
    .stdout(contains("Remaining to reach 60 hrs target: 53h 0m"));
}

#[test]
fn test_log_with_break_subtracts_break() {
    let db_path = setup_test_db("log_with_break");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        &db_path,
        "log",
        "2025-09-09",
        "--start",
        "09:00",
        "--end",
        "17:30",
        "--break-start",
        "12:00",
        "--break-end",
        "12:30",
    ])
    .assert()
    .success()
    .stdout(contains("Logged 8.00 hours for 2025-09-09"));
}

#[test]
fn test_summary_sums_all_entries() {
    let db_path = setup_test_db("summary_sums");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Entries logged: 2"))
        .stdout(contains("Total logged: 15.00 hrs"))
        .stdout(contains("Remaining to reach 60 hrs target: 45h 0m"));
}

#[test]
fn test_summary_on_empty_table() {
    let db_path = setup_test_db("summary_empty");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Entries logged: 0"))
        .stdout(contains("Total logged: 0.00 hrs"))
        .stdout(contains("Remaining to reach 60 hrs target: 60h 0m"));
}

#[test]
fn test_list_shows_entries_with_sheet_columns() {
    let db_path = setup_test_db("list_entries");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Work Duration (hrs)"))
        .stdout(contains("2025-09-08"))
        .stdout(contains("2025-09-09"))
        .stdout(contains("7.00"))
        .stdout(contains("8.00"));
}

#[test]
fn test_list_on_empty_table() {
    let db_path = setup_test_db("list_empty");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries logged."));
}

#[test]
fn test_summary_all_periods_lists_finished_periods() {
    let db_path = setup_test_db("summary_all_periods");
    init_db_with_data(&db_path);

    // Both entries fall in the first pay period (2025-09-08..2025-09-21),
    // which has long since completed.
    wl().args(["--db", &db_path, "summary", "--all-periods"])
        .assert()
        .success()
        .stdout(contains("Completed pay periods:"))
        .stdout(contains("2025-09-08 to 2025-09-21  Total: 15h 0m  Overtime: -45h 0m"))
        .stdout(contains("Total logged: 15.00 hrs"));
}

#[test]
fn test_edit_recomputes_duration_for_date() {
    let db_path = setup_test_db("edit_recomputes");
    init_db_with_data(&db_path);

    // 09:00-17:00 with the stored zero break → 8.00 h instead of 7.00 h
    wl().args(["--db", &db_path, "edit", "2025-09-08", "--end", "17:00"])
        .assert()
        .success()
        .stdout(contains("Updated 1 entries for 2025-09-08 (8.00 hours)"));

    wl().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Total logged: 16.00 hrs"));
}

#[test]
fn test_edit_keeps_omitted_times() {
    let db_path = setup_test_db("edit_keeps_times");
    init_db_with_data(&db_path);

    // Only the break changes; start/end keep their stored 09:00-17:30
    wl().args([
        "--db",
        &db_path,
        "edit",
        "2025-09-09",
        "--break-start",
        "13:00",
        "--break-end",
        "14:00",
    ])
    .assert()
    .success()
    .stdout(contains("Updated 1 entries for 2025-09-09 (7.50 hours)"));

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("13:00"))
        .stdout(contains("14:00"))
        .stdout(contains("7.50"));
}

#[test]
fn test_edit_unknown_date_fails() {
    let db_path = setup_test_db("edit_unknown");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "edit", "2025-01-01", "--end", "17:00"])
        .assert()
        .failure()
        .stderr(contains("No entries found for date 2025-01-01"));
}

#[test]
fn test_del_removes_all_entries_for_date() {
    let db_path = setup_test_db("del_removes");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "del", "2025-09-08", "--yes"])
        .assert()
        .success()
        .stdout(contains("2025-09-08"));

    wl().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Entries logged: 1"))
        .stdout(contains("Total logged: 8.00 hrs"));
}

#[test]
fn test_del_unknown_date_fails() {
    let db_path = setup_test_db("del_unknown");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "del", "2025-01-01", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entries found for date 2025-01-01"));
}

#[test]
fn test_log_rejects_invalid_time() {
    let db_path = setup_test_db("log_invalid_time");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        &db_path,
        "log",
        "2025-09-08",
        "--start",
        "25:00",
        "--end",
        "16:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format: 25:00"));
}

#[test]
fn test_log_rejects_invalid_date() {
    let db_path = setup_test_db("log_invalid_date");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "log", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 2025-13-40"));
}

#[test]
fn test_history_records_operations() {
    let db_path = setup_test_db("history_records");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "history"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("log (2025-09-08)"))
        .stdout(contains("log (2025-09-09)"));
}

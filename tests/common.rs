#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests:
/// 7.00 h on 2025-09-08 and 8.00 h on 2025-09-09 (with a lunch break).
pub fn init_db_with_data(db_path: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        db_path,
        "log",
        "2025-09-08",
        "--start",
        "09:00",
        "--end",
        "16:00",
    ])
    .assert()
    .success();

    wl().args([
        "--db",
        db_path,
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
    .success();
}

//! Common test utilities for integration tests

use chrono::NaiveDate;
use cycle_calendar::CycleCalendar;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a date, panicking on invalid input (tests only)
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Path to a settings file inside a fresh temporary directory
///
/// The file itself does not exist yet. Keep the `TempDir` alive for the
/// duration of the test.
pub fn temp_settings_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cycle-calendar.toml");
    (dir, path)
}

/// Open a calendar on an empty temporary settings file
pub fn get_test_calendar(today: NaiveDate) -> (CycleCalendar, TempDir, PathBuf) {
    let (dir, path) = temp_settings_path();
    let calendar = CycleCalendar::open(&path, today).unwrap();
    (calendar, dir, path)
}

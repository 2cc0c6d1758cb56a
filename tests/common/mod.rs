#![allow(dead_code)]

use bmiplan::core::assess;
use bmiplan::core::history;
use bmiplan::db::Database;
use bmiplan::models::HistoryEntry;
use bmiplan::models::measurement::Measurement;
use chrono::NaiveDate;
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// Build a history entry for a metric measurement on a given day.
pub fn make_entry(weight_kg: f64, height_cm: f64, date: NaiveDate) -> HistoryEntry {
    let m = Measurement {
        weight_kg,
        height_cm,
        age: None,
        gender: None,
    };
    let a = assess::assess_measurement(m);
    history::entry_for(&a.measurement, &a.bmi, date)
}

pub fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, n).unwrap()
}

pub fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

mod common;

use bmiplan::core::history::{self, HISTORY_KEY, HISTORY_LIMIT, HistoryStore};
use bmiplan::db::{BlobStore, MemoryStore};
use bmiplan::models::BmiCategory;
use common::{day, make_entry};

#[test]
fn test_load_empty_when_nothing_stored() {
    let store = MemoryStore::new();
    let h = HistoryStore::load(&store).unwrap();
    assert!(h.is_empty());
    assert!(h.latest().is_none());
}

#[test]
fn test_append_puts_newest_first_and_persists() {
    let store = MemoryStore::new();
    let mut h = HistoryStore::load(&store).unwrap();
    h.append(make_entry(70.0, 175.0, day(1))).unwrap();
    h.append(make_entry(72.0, 175.0, day(2))).unwrap();

    assert_eq!(h.len(), 2);
    assert_eq!(h.entries()[0].date, "2026-01-02");
    assert_eq!(h.entries()[1].date, "2026-01-01");

    let reloaded = HistoryStore::load(&store).unwrap();
    assert_eq!(reloaded.entries(), h.entries());
}

#[test]
fn test_history_capped_at_ten_dropping_oldest() {
    let store = MemoryStore::new();
    let mut h = HistoryStore::load(&store).unwrap();
    for n in 1..=12 {
        h.append(make_entry(60.0 + n as f64, 175.0, day(n))).unwrap();
        assert!(h.len() <= HISTORY_LIMIT);
    }
    assert_eq!(h.len(), 10);
    assert_eq!(h.entries()[0].date, "2026-01-12");
    assert_eq!(h.entries()[9].date, "2026-01-03");

    let reloaded = HistoryStore::load(&store).unwrap();
    assert_eq!(reloaded.len(), 10);
}

#[test]
fn test_clear_removes_key() {
    let store = MemoryStore::new();
    let mut h = HistoryStore::load(&store).unwrap();
    h.append(make_entry(70.0, 175.0, day(1))).unwrap();
    assert!(store.contains(HISTORY_KEY));

    let removed = h.clear().unwrap();
    assert_eq!(removed, 1);
    assert!(h.is_empty());
    assert!(!store.contains(HISTORY_KEY));
    assert!(HistoryStore::load(&store).unwrap().is_empty());
}

#[test]
fn test_corrupt_blob_is_empty_history() {
    let store = MemoryStore::new();
    store.set(HISTORY_KEY, "{not json").unwrap();
    let h = HistoryStore::load(&store).unwrap();
    assert!(h.is_empty());

    store.set(HISTORY_KEY, r#"[{"date": 5}]"#).unwrap();
    assert!(HistoryStore::load(&store).unwrap().is_empty());
}

#[test]
fn test_oversized_stored_list_is_truncated_on_load() {
    let store = MemoryStore::new();
    let entries: Vec<_> = (1..=15).map(|n| make_entry(70.0, 175.0, day(n))).collect();
    store
        .set(HISTORY_KEY, &serde_json::to_string(&entries).unwrap())
        .unwrap();
    let h = HistoryStore::load(&store).unwrap();
    assert_eq!(h.len(), HISTORY_LIMIT);
    assert_eq!(h.entries()[0].date, "2026-01-01");
}

#[test]
fn test_entry_snapshot_fields() {
    let e = make_entry(70.04, 175.0, day(5));
    assert_eq!(e.date, "2026-01-05");
    assert_eq!(e.weight, 70.0);
    assert_eq!(e.height, 175.0);
    assert_eq!(e.bmi, 22.9);
    assert_eq!(e.category, BmiCategory::Normal);
    assert!(!e.child_advisory);
}

#[test]
fn test_stored_format_is_json_array() {
    let store = MemoryStore::new();
    let mut h = HistoryStore::load(&store).unwrap();
    h.append(make_entry(45.0, 170.0, day(1))).unwrap();

    let blob = store.get(HISTORY_KEY).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["category"], "severe_thinness");
    assert_eq!(arr[0]["bmi"], 15.6);
}

#[test]
fn test_sqlite_store_round_trip() {
    let (_dir, db) = common::setup_db();
    assert_eq!(db.get("missing").unwrap(), None);

    db.set("k", "v1").unwrap();
    db.set("k", "v2").unwrap();
    assert_eq!(db.get("k").unwrap().as_deref(), Some("v2"));

    db.remove("k").unwrap();
    assert_eq!(db.get("k").unwrap(), None);
    db.remove("k").unwrap();
}

#[test]
fn test_history_over_sqlite_survives_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("data.db");
    {
        let db = bmiplan::db::Database::open(&path).unwrap();
        let mut h = HistoryStore::load(&db).unwrap();
        h.append(make_entry(70.0, 175.0, day(1))).unwrap();
    }
    let db = bmiplan::db::Database::open(&path).unwrap();
    let h = HistoryStore::load(&db).unwrap();
    assert_eq!(h.len(), 1);
    assert_eq!(h.latest().unwrap().bmi, 22.9);
}

#[test]
fn test_entry_today_uses_local_date_format() {
    let e = make_entry(70.0, 175.0, day(1));
    let m = bmiplan::models::Measurement {
        weight_kg: e.weight,
        height_cm: e.height,
        age: Some(12),
        gender: None,
    };
    let a = bmiplan::core::assess::assess_measurement(m);
    let today = history::entry_today(&a.measurement, &a.bmi);
    assert_eq!(today.date.len(), 10);
    assert!(today.child_advisory);
}

use jiff::Timestamp;
use jiff::tz::TimeZone;
use selfsense_core::models::{Assessment, HistoryEntry};
use selfsense_storage::history::{AppendOutcome, HistoryStore};

fn assessment(condition_id: &str, total: u32, level: &str) -> Assessment {
    Assessment {
        condition_id: condition_id.to_string(),
        condition_name: condition_id.to_uppercase(),
        total_score: total,
        risk_level: level.to_string(),
        message: String::new(),
        color_code: String::new(),
        risk_factors: vec![],
        max_possible_score: 40,
    }
}

fn entry(condition_id: &str, at: &str) -> HistoryEntry {
    let recorded_at: Timestamp = at.parse().unwrap();
    HistoryEntry::from_assessment_in(
        &assessment(condition_id, 12, "Moderate Risk"),
        recorded_at,
        &TimeZone::UTC,
    )
}

#[test]
fn missing_file_is_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(dir.path().join("history.json"));
    assert!(store.entries().unwrap().is_empty());
}

#[test]
fn appended_entries_are_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(dir.path().join("nested").join("history.json"));

    store.append(entry("diabetes", "2026-01-01T09:00:00Z")).unwrap();
    store.append(entry("stress", "2026-01-02T09:00:00Z")).unwrap();

    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].condition_id, "stress");
    assert_eq!(entries[1].condition_id, "diabetes");
    assert_eq!(entries[1].date.to_string(), "2026-01-01");
    assert!(!dir.path().join("nested").join("history.json.tmp").exists());
}

#[test]
fn same_condition_and_timestamp_is_a_duplicate() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(dir.path().join("history.json"));

    let first = entry("vision", "2026-02-10T08:00:00Z");
    let again = entry("vision", "2026-02-10T08:00:00Z");
    assert_eq!(store.append(first).unwrap(), AppendOutcome::Appended);
    assert_eq!(store.append(again).unwrap(), AppendOutcome::Duplicate);
    assert_eq!(store.entries().unwrap().len(), 1);
}

#[test]
fn same_day_assessments_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(dir.path().join("history.json"));

    let morning = entry("vision", "2026-02-10T08:00:00Z");
    let evening = entry("vision", "2026-02-10T20:00:00Z");
    assert_eq!(morning.date, evening.date);
    assert_eq!(store.append(morning).unwrap(), AppendOutcome::Appended);
    assert_eq!(store.append(evening).unwrap(), AppendOutcome::Appended);
    assert_eq!(store.entries().unwrap().len(), 2);
}

#[test]
fn filters_by_condition() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(dir.path().join("history.json"));
    store.append(entry("vision", "2026-02-10T08:00:00Z")).unwrap();
    store.append(entry("stress", "2026-02-11T08:00:00Z")).unwrap();
    store.append(entry("vision", "2026-02-12T08:00:00Z")).unwrap();

    let vision = store.for_condition("vision").unwrap();
    assert_eq!(vision.len(), 2);
    assert!(vision.iter().all(|e| e.condition_id == "vision"));
    assert!(store.for_condition("diabetes").unwrap().is_empty());
}

#[test]
fn clear_removes_history() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(dir.path().join("history.json"));
    store.clear().unwrap();
    store.append(entry("stress", "2026-02-11T08:00:00Z")).unwrap();
    store.clear().unwrap();
    assert!(store.entries().unwrap().is_empty());
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json").unwrap();
    let store = HistoryStore::open(&path);
    assert!(store.entries().is_err());
}

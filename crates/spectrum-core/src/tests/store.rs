use crate::store::{ASSESSMENT_KEY, StoredAssessment};
use crate::*;
use chrono::{TimeZone, Utc};
use serde_json::json;

fn sample_result() -> AssessmentResult {
    calculate_result(
        &[LevelId(3), LevelId(3), LevelId(4)],
        &LevelCatalog::reference(),
    )
    .unwrap()
}

#[test]
fn empty_storage_loads_nothing() {
    let store = AssessmentStore::load(MemoryStorage::new());
    assert!(store.result().is_none());
    assert!(store.completed_at().is_none());
    assert!(store.framework_version().is_none());
}

#[test]
fn set_result_stamps_time_and_version() {
    let fixed = Utc.with_ymd_and_hms(2025, 1, 31, 9, 30, 0).unwrap();
    let mut store = AssessmentStore::load(MemoryStorage::new());
    crate::time::with_fixed_now(Some(fixed), || store.set_result(sample_result()));

    assert_eq!(store.result().map(|r| r.primary_level), Some(LevelId(3)));
    assert_eq!(store.completed_at(), Some("2025-01-31T09:30:00.000Z"));
    assert_eq!(store.framework_version(), Some(ASSESSMENT_VERSION));

    let raw = store.storage().get_item(ASSESSMENT_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["frameworkVersion"], json!(ASSESSMENT_VERSION));
    assert_eq!(value["result"]["primaryLevel"], json!(3));
}

#[test]
fn clear_result_resets_all_fields() {
    let mut store = AssessmentStore::load(MemoryStorage::new());
    store.set_result(sample_result());
    store.clear_result();
    assert_eq!(store.state(), &StoredAssessment::default());
}

#[test]
fn file_storage_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = AssessmentStore::load(FileStorage::new(dir.path()));
        store.set_result(sample_result());
    }
    assert!(dir.path().join("ai-maturity-assessment.json").is_file());

    let reloaded = AssessmentStore::load(FileStorage::new(dir.path()));
    assert_eq!(reloaded.result(), Some(&sample_result()));
}

#[test]
fn version_mismatch_clears_stored_result() {
    let storage = MemoryStorage::new();
    let stale = StoredAssessment {
        result: Some(sample_result()),
        completed_at: Some("2024-06-01T00:00:00.000Z".to_string()),
        framework_version: Some("0.9.0".to_string()),
    };
    storage
        .set_item(ASSESSMENT_KEY, &serde_json::to_string(&stale).unwrap())
        .unwrap();

    let store = AssessmentStore::load(storage);
    assert!(store.result().is_none());

    let raw = store.storage().get_item(ASSESSMENT_KEY).unwrap().unwrap();
    let rewritten: StoredAssessment = serde_json::from_str(&raw).unwrap();
    assert_eq!(rewritten, StoredAssessment::default());
}

#[test]
fn unreadable_record_is_discarded() {
    let storage = MemoryStorage::new();
    storage.set_item(ASSESSMENT_KEY, "{not json").unwrap();
    let store = AssessmentStore::load(storage);
    assert!(store.result().is_none());
}

#[test]
fn file_storage_remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("nested"));
    storage.remove_item("missing").unwrap();
    storage.set_item("k", "v").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
}

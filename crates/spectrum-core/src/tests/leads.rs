use crate::leads::{LEADS_KEY, capture_lead, is_valid_email, stored_leads};
use crate::*;
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn email_validation_matches_simple_shape() {
    assert!(is_valid_email("you@company.com"));
    assert!(is_valid_email("a.b+c@sub.example.org"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("no-at-sign.com"));
    assert!(!is_valid_email("you@company"));
    assert!(!is_valid_email("you @company.com"));
    assert!(!is_valid_email("you@@company.com"));
}

#[test]
fn invalid_email_is_rejected_and_not_stored() {
    let storage = MemoryStorage::new();
    let err = capture_lead(
        &storage,
        &SpectrumConfig::empty_object(),
        "nope",
        LevelId(2),
        LevelId(3),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidEmail));
    assert_eq!(err.to_string(), "Please enter a valid email address");
    assert!(storage.get_item(LEADS_KEY).unwrap().is_none());
}

#[test]
fn leads_append_to_local_storage() {
    let storage = MemoryStorage::new();
    let config = SpectrumConfig::empty_object();
    let fixed = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

    crate::time::with_fixed_now(Some(fixed), || {
        capture_lead(&storage, &config, "a@b.co", LevelId(2), LevelId(3)).unwrap();
        capture_lead(&storage, &config, "c@d.co", LevelId(6), LevelId(6)).unwrap();
    });

    let leads = stored_leads(&storage);
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].email, "a@b.co");
    assert_eq!(leads[1].current_level, leads[1].target_level);

    let raw = storage.get_item(LEADS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value[0],
        json!({
            "email": "a@b.co",
            "currentLevel": 2,
            "targetLevel": 3,
            "capturedAt": "2025-03-01T12:00:00.000Z"
        })
    );
}

#[test]
fn corrupt_lead_list_is_replaced() {
    let storage = MemoryStorage::new();
    storage.set_item(LEADS_KEY, "garbage").unwrap();
    capture_lead(
        &storage,
        &SpectrumConfig::empty_object(),
        "a@b.co",
        LevelId(1),
        LevelId(2),
    )
    .unwrap();
    assert_eq!(stored_leads(&storage).len(), 1);
}

//! Persisted SRS data shape shared with the storage layer.

mod common;

use chrono::Duration;
use serde_json::json;
use srs_core::{apply_review, SrsData};

use common::fixtures::rating;
use common::now;

#[test]
fn serializes_camel_case_with_rfc3339_dates() {
    let data = apply_review(None, rating(4), now()).unwrap();
    let value = serde_json::to_value(&data).unwrap();

    assert_eq!(
        value,
        json!({
            "easinessFactor": 2.5,
            "repetitionCount": 1,
            "interval": 1,
            "nextReviewDate": "2024-09-03T10:00:00Z",
            "lastReviewDate": "2024-09-02T10:00:00Z",
            "reviewHistory": [
                { "date": "2024-09-02T10:00:00Z", "rating": 4, "intervalAtReview": 0 }
            ]
        })
    );
}

#[test]
fn never_reviewed_state_has_null_last_review() {
    let value = serde_json::to_value(SrsData::new(now())).unwrap();
    assert!(value["lastReviewDate"].is_null());
    assert_eq!(value["reviewHistory"], json!([]));
}

#[test]
fn round_trips_through_storage() {
    let first = apply_review(None, rating(5), now()).unwrap();
    let second = apply_review(Some(&first), rating(3), now() + Duration::days(1)).unwrap();
    let text = serde_json::to_string(&second).unwrap();
    let restored: SrsData = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, second);
}

#[test]
fn rejects_out_of_range_rating() {
    let text = r#"{
        "easinessFactor": 2.5,
        "repetitionCount": 1,
        "interval": 1,
        "nextReviewDate": "2024-09-03T10:00:00Z",
        "lastReviewDate": null,
        "reviewHistory": [{ "date": "2024-09-02T10:00:00Z", "rating": 9, "intervalAtReview": 0 }]
    }"#;
    assert!(serde_json::from_str::<SrsData>(text).is_err());
}

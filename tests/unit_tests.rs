/// Unit tests for welcome-service wire shapes
///
/// This test module covers:
/// - Inbound notification decoding
/// - Outbound push event JSON shape
/// - Batch envelope and summary serialization
use welcome_service::models::*;

#[test]
fn test_notification_decoding() {
    let json = r#"{"name": "Marcus", "id": 324, "created_at": "2024-05-01T10:00:00Z"}"#;
    let notification: Notification = serde_json::from_str(json).unwrap();

    assert_eq!(notification.id, 324);
    assert_eq!(notification.name, "Marcus");
    assert_eq!(notification.created_at, "2024-05-01T10:00:00Z");
}

#[test]
fn test_notification_created_at_defaults_when_missing() {
    let json = r#"{"name": "Hanna", "id": 4}"#;
    let notification: Notification = serde_json::from_str(json).unwrap();

    assert_eq!(notification.id, 4);
    assert!(notification.created_at.is_empty());
}

#[test]
fn test_notification_rejects_non_integer_id() {
    let json = r#"{"name": "Hanna", "id": "four"}"#;
    assert!(serde_json::from_str::<Notification>(json).is_err());
}

#[test]
fn test_push_event_json_shape() {
    let event = PushEvent {
        sender: "welcome-service".to_string(),
        receiver: 324,
        message: "Hi Marcus, welcome to our community.".to_string(),
        recent_user_ids: vec![4, 5],
    };

    let value = serde_json::to_value(&event).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 4);
    assert_eq!(object["sender"], "welcome-service");
    assert_eq!(object["receiver"], 324);
    assert_eq!(object["message"], "Hi Marcus, welcome to our community.");
    assert_eq!(object["recent_user_ids"], serde_json::json!([4, 5]));
}

#[test]
fn test_event_batch_round_trip() {
    let json = r#"{"records": [{"message": "{\"id\": 1, \"name\": \"Ada\"}"}]}"#;
    let batch: EventBatch = serde_json::from_str(json).unwrap();

    assert_eq!(batch.records.len(), 1);
    let inner: Notification = serde_json::from_str(&batch.records[0].message).unwrap();
    assert_eq!(inner.name, "Ada");

    let encoded = serde_json::to_string(&batch).unwrap();
    let decoded: EventBatch = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.records[0].message, batch.records[0].message);
}

#[test]
fn test_dispatch_summary_serialization() {
    let summary = DispatchSummary {
        received: 3,
        processed: 2,
        failed: 1,
    };

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value, serde_json::json!({"received": 3, "processed": 2, "failed": 1}));
}

#[test]
fn test_stored_record_serialization() {
    let record = StoredRecord {
        id: 324,
        name: "Marcus".to_string(),
        expires_at: 1_714_640_400,
    };

    let json = serde_json::to_string(&record).unwrap();
    let decoded: StoredRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.id, record.id);
    assert_eq!(decoded.name, record.name);
    assert_eq!(decoded.expires_at, record.expires_at);
}

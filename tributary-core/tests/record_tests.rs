//! Integration tests for the record module.
//!
//! These tests deserialize captured DynamoDB Streams wire JSON and verify
//! the record model round-trips it faithfully.

use tributary_core::record::{AttributeValue, ChangeBatch, ChangeRecord, EventKind};

#[test]
fn test_event_kind_serialization() {
    let kind = EventKind::Insert;
    let json = serde_json::to_string(&kind).unwrap();
    assert_eq!(json, r#""INSERT""#);

    let deserialized: EventKind = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, EventKind::Insert);

    let modify: EventKind = serde_json::from_str(r#""MODIFY""#).unwrap();
    assert_eq!(modify, EventKind::Modify);

    let remove: EventKind = serde_json::from_str(r#""REMOVE""#).unwrap();
    assert_eq!(remove, EventKind::Remove);
}

#[test]
fn test_event_kind_unknown_preserves_original() {
    let kind: EventKind = serde_json::from_str(r#""TRUNCATE""#).unwrap();
    assert_eq!(kind, EventKind::Unknown("TRUNCATE".to_string()));
    assert!(kind.is_unknown());
    assert_eq!(kind.label(), "unknown");
}

#[test]
fn test_event_kind_predicates() {
    assert!(EventKind::Insert.has_new_image());
    assert!(EventKind::Modify.has_new_image());
    assert!(!EventKind::Remove.has_new_image());

    assert_eq!(EventKind::Insert.label(), "insert");
    assert_eq!(EventKind::Modify.label(), "modify");
    assert_eq!(EventKind::Remove.label(), "remove");
}

#[test]
fn test_deserialize_full_insert_record() {
    let record: ChangeRecord = serde_json::from_str(
        r#"{
            "eventID": "2f4ea0x07b",
            "eventName": "INSERT",
            "eventVersion": "1.1",
            "eventSource": "aws:dynamodb",
            "awsRegion": "us-east-1",
            "eventSourceARN": "arn:aws:dynamodb:us-east-1:123456789012:table/orders/stream/2025-01-01T00:00:00.000",
            "dynamodb": {
                "ApproximateCreationDateTime": 1735689600.0,
                "Keys": { "id": { "S": "42" } },
                "NewImage": {
                    "id": { "S": "42" },
                    "quantity": { "N": "3" },
                    "in_stock": { "BOOL": true },
                    "discontinued": { "NULL": true },
                    "tags": { "SS": ["a", "b"] },
                    "dimensions": {
                        "M": { "width": { "N": "10" } }
                    },
                    "history": {
                        "L": [ { "S": "created" }, { "N": "1" } ]
                    }
                },
                "SequenceNumber": "111000000000000000000",
                "SizeBytes": 256,
                "StreamViewType": "NEW_AND_OLD_IMAGES"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(record.event_id.as_deref(), Some("2f4ea0x07b"));
    assert!(record.is_insert());
    assert_eq!(record.event_source.as_deref(), Some("aws:dynamodb"));
    assert_eq!(record.view.sequence_number.as_deref(), Some("111000000000000000000"));
    assert_eq!(record.view.size_bytes, Some(256));

    let image = record.new_image().unwrap();
    assert_eq!(
        image.get("id"),
        Some(&AttributeValue::String("42".to_string()))
    );
    assert_eq!(
        image.get("quantity"),
        Some(&AttributeValue::Number("3".to_string()))
    );
    assert_eq!(image.get("in_stock"), Some(&AttributeValue::Boolean(true)));
    assert_eq!(image.get("discontinued"), Some(&AttributeValue::Null(true)));

    match image.get("dimensions").unwrap() {
        AttributeValue::Map(m) => {
            assert_eq!(m.get("width"), Some(&AttributeValue::Number("10".to_string())));
        }
        other => panic!("expected map, got {other:?}"),
    }

    match image.get("history").unwrap() {
        AttributeValue::List(l) => assert_eq!(l.len(), 2),
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn test_attribute_value_round_trip_preserves_wire_shape() {
    let wire = r#"{"M":{"nested":{"L":[{"S":"x"},{"NS":["1","2"]}]}}}"#;

    let value: AttributeValue = serde_json::from_str(wire).unwrap();
    let reserialized = serde_json::to_string(&value).unwrap();

    let original: serde_json::Value = serde_json::from_str(wire).unwrap();
    let round_tripped: serde_json::Value = serde_json::from_str(&reserialized).unwrap();
    assert_eq!(original, round_tripped);
}

#[test]
fn test_remove_record_has_old_image_only() {
    let record: ChangeRecord = serde_json::from_str(
        r#"{
            "eventID": "3",
            "eventName": "REMOVE",
            "dynamodb": {
                "Keys": { "id": { "S": "9" } },
                "OldImage": { "id": { "S": "9" } },
                "StreamViewType": "NEW_AND_OLD_IMAGES"
            }
        }"#,
    )
    .unwrap();

    assert!(!record.is_insert());
    assert!(record.new_image().is_none());
    assert!(record.old_image().is_some());
}

#[test]
fn test_batch_counts() {
    let batch: ChangeBatch = serde_json::from_str(
        r#"{
            "Records": [
                { "eventName": "INSERT", "dynamodb": { "NewImage": { "id": { "S": "1" } } } },
                { "eventName": "MODIFY", "dynamodb": { "NewImage": { "id": { "S": "1" } } } },
                { "eventName": "INSERT", "dynamodb": { "NewImage": { "id": { "S": "2" } } } }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(batch.len(), 3);
    assert!(!batch.is_empty());
    assert_eq!(batch.insert_count(), 2);
}

#[test]
fn test_batch_without_records_key_is_empty() {
    let batch: ChangeBatch = serde_json::from_str("{}").unwrap();
    assert!(batch.is_empty());
    assert_eq!(batch.insert_count(), 0);
}

#[test]
fn test_record_without_event_id() {
    let record: ChangeRecord =
        serde_json::from_str(r#"{ "eventName": "INSERT", "dynamodb": {} }"#).unwrap();

    assert_eq!(record.event_id_or_unknown(), "<unknown>");
}

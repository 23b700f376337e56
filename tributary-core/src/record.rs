//! DynamoDB Streams Change Record Representation
//!
//! This module defines the record types consumed by the Tributary notifier.
//! Records arrive as a batch under a `Records` key, in the wire shape the
//! DynamoDB Streams Lambda integration produces.
//!
//! # Examples
//!
//! ```rust
//! use tributary_core::record::{ChangeBatch, EventKind};
//!
//! let batch: ChangeBatch = serde_json::from_str(
//!     r#"{
//!         "Records": [
//!             {
//!                 "eventID": "1",
//!                 "eventName": "INSERT",
//!                 "dynamodb": {
//!                     "NewImage": { "id": { "S": "42" } },
//!                     "SequenceNumber": "111",
//!                     "StreamViewType": "NEW_AND_OLD_IMAGES"
//!                 }
//!             }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(batch.len(), 1);
//! assert_eq!(batch.insert_count(), 1);
//! assert!(batch.records[0].is_insert());
//! assert!(batch.records[0].new_image().is_some());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A DynamoDB item image: attribute name to typed attribute value.
pub type Image = HashMap<String, AttributeValue>;

/// DynamoDB Streams event kinds.
///
/// Each variant corresponds to one mutation kind on the monitored table.
/// The `Unknown` variant allows forward compatibility with event kinds
/// introduced after this library was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum EventKind {
    /// An item was inserted into the table
    Insert,

    /// An existing item was modified
    Modify,

    /// An item was deleted from the table
    Remove,

    /// An unknown event kind from a newer stream version
    ///
    /// Contains the original event name string for logging and debugging.
    #[serde(untagged)]
    Unknown(String),
}

impl EventKind {
    /// Returns true if this event carries a post-mutation image (insert, modify).
    #[inline]
    pub fn has_new_image(&self) -> bool {
        matches!(self, EventKind::Insert | EventKind::Modify)
    }

    /// Returns true if this is an unknown event kind.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, EventKind::Unknown(_))
    }

    /// Returns a low-cardinality label for metrics and logging.
    ///
    /// Unknown kinds collapse to a single `"unknown"` label so they never
    /// blow up metric cardinality.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            EventKind::Insert => "insert",
            EventKind::Modify => "modify",
            EventKind::Remove => "remove",
            EventKind::Unknown(_) => "unknown",
        }
    }
}

/// A typed DynamoDB attribute value.
///
/// This is the native change-stream representation: every value is tagged
/// with a single-letter (or short) type descriptor, e.g. `{"S": "42"}` for a
/// string or `{"N": "7"}` for a number. Numbers are transported as strings
/// to preserve precision.
///
/// The enum is externally tagged so serde round-trips the wire shape
/// unchanged, which is what keeps the republished payload identical to the
/// image in the incoming record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// String
    #[serde(rename = "S")]
    String(String),

    /// Number, kept as a string to preserve precision
    #[serde(rename = "N")]
    Number(String),

    /// Binary, base64-encoded
    #[serde(rename = "B")]
    Binary(String),

    /// Boolean
    #[serde(rename = "BOOL")]
    Boolean(bool),

    /// Null marker
    #[serde(rename = "NULL")]
    Null(bool),

    /// Nested map of attribute values
    #[serde(rename = "M")]
    Map(HashMap<String, AttributeValue>),

    /// List of attribute values
    #[serde(rename = "L")]
    List(Vec<AttributeValue>),

    /// Set of strings
    #[serde(rename = "SS")]
    StringSet(Vec<String>),

    /// Set of numbers, each kept as a string
    #[serde(rename = "NS")]
    NumberSet(Vec<String>),

    /// Set of base64-encoded binary values
    #[serde(rename = "BS")]
    BinarySet(Vec<String>),
}

/// The nested stream payload of a change record.
///
/// All fields are optional on the wire: which images are present depends on
/// the stream's view type and the event kind. An INSERT on a stream
/// configured with new images always carries `NewImage`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamView {
    /// Key attributes of the mutated item
    #[serde(rename = "Keys", skip_serializing_if = "Option::is_none")]
    pub keys: Option<Image>,

    /// Full item after the mutation (INSERT and MODIFY)
    #[serde(rename = "NewImage", skip_serializing_if = "Option::is_none")]
    pub new_image: Option<Image>,

    /// Full item before the mutation (MODIFY and REMOVE)
    #[serde(rename = "OldImage", skip_serializing_if = "Option::is_none")]
    pub old_image: Option<Image>,

    /// Sequence number of the record within its shard
    #[serde(rename = "SequenceNumber", skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,

    /// Size of the record in bytes
    #[serde(rename = "SizeBytes", skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,

    /// Which images the stream is configured to emit
    #[serde(rename = "StreamViewType", skip_serializing_if = "Option::is_none")]
    pub stream_view_type: Option<String>,

    /// Approximate creation time as a fractional epoch timestamp
    #[serde(
        rename = "ApproximateCreationDateTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub approximate_creation_date_time: Option<f64>,
}

/// One mutation event on the monitored table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Unique identifier of this record
    #[serde(rename = "eventID", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    /// Kind of mutation (INSERT, MODIFY, REMOVE)
    #[serde(rename = "eventName")]
    pub kind: EventKind,

    /// Stream record format version
    #[serde(rename = "eventVersion", skip_serializing_if = "Option::is_none")]
    pub event_version: Option<String>,

    /// Originating service, e.g. "aws:dynamodb"
    #[serde(rename = "eventSource", skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,

    /// ARN of the stream that produced this record
    #[serde(rename = "eventSourceARN", skip_serializing_if = "Option::is_none")]
    pub event_source_arn: Option<String>,

    /// Region the mutation occurred in
    #[serde(rename = "awsRegion", skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,

    /// Nested stream payload with the item images
    #[serde(rename = "dynamodb", default)]
    pub view: StreamView,
}

impl ChangeRecord {
    /// Returns true if this record represents an insertion.
    #[inline]
    pub fn is_insert(&self) -> bool {
        self.kind == EventKind::Insert
    }

    /// Returns the post-mutation item image, if present.
    #[inline]
    pub fn new_image(&self) -> Option<&Image> {
        self.view.new_image.as_ref()
    }

    /// Returns the pre-mutation item image, if present.
    #[inline]
    pub fn old_image(&self) -> Option<&Image> {
        self.view.old_image.as_ref()
    }

    /// Returns the record identifier, or `"<unknown>"` when absent.
    ///
    /// Used for error messages and log fields.
    #[must_use]
    pub fn event_id_or_unknown(&self) -> &str {
        self.event_id.as_deref().unwrap_or("<unknown>")
    }
}

/// An ordered batch of change records, as delivered per invocation.
///
/// The batch is owned by the invoking runtime and discarded after
/// processing; nothing here outlives the invocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChangeBatch {
    /// Records in arrival order
    #[serde(rename = "Records", default)]
    pub records: Vec<ChangeRecord>,
}

impl ChangeBatch {
    /// Returns the number of records in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the batch contains no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in arrival order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChangeRecord> {
        self.records.iter()
    }

    /// Returns how many records in the batch are insertions.
    #[must_use]
    pub fn insert_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_insert()).count()
    }
}

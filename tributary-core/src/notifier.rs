// Copyright 2025 Tributary Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

//! The Change Notifier.
//!
//! [`ChangeNotifier`] walks a batch of change records in arrival order and,
//! for each insertion, republishes the inserted item's new image to the
//! configured destination topic. Non-insert records are skipped. The
//! notifier is stateless across invocations; the only long-lived pieces are
//! the configuration and the publisher client, both injected at
//! construction.
//!
//! # Failure semantics
//!
//! Processing is fail-fast: the first malformed record or failed publish
//! aborts the remainder of the batch and the error propagates to the
//! invoking runtime, which owns redelivery. There is no retry, no partial
//! failure report, and no per-record fault isolation.
//!
//! # Example
//!
//! ```rust
//! use tributary_core::config::NotifierConfig;
//! use tributary_core::notifier::ChangeNotifier;
//! use tributary_core::publisher::RecordingPublisher;
//! use tributary_core::record::ChangeBatch;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NotifierConfig::builder()
//!     .topic_arn("arn:aws:sns:us-east-1:123456789012:inserted-items")
//!     .build()?;
//!
//! let notifier = ChangeNotifier::new(config, RecordingPublisher::new());
//!
//! let batch: ChangeBatch = serde_json::from_str(
//!     r#"{"Records": [{"eventName": "INSERT", "dynamodb": {"NewImage": {"id": {"S": "42"}}}}]}"#,
//! )?;
//!
//! let summary = notifier.handle_batch(&batch).await?;
//! assert_eq!(summary.published, 1);
//! # Ok(())
//! # }
//! ```

use crate::config::NotifierConfig;
use crate::metrics;
use crate::publisher::{OutgoingMessage, PublishError, Publisher};
use crate::record::{ChangeBatch, Image};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Errors raised while handling a batch.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// An INSERT record arrived without a new image.
    ///
    /// Streams configured to emit new images always include one for
    /// insertions, so this indicates a malformed record.
    #[error("INSERT record {event_id} has no new image")]
    MissingNewImage {
        /// Identifier of the offending record
        event_id: String,
    },

    /// The new image could not be encoded into the fan-out envelope.
    #[error("failed to encode fan-out envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The destination service rejected or failed a publish call.
    #[error("publish failed: {0}")]
    Publish(#[source] PublishError),
}

/// Summary of one handled batch, returned to the invoking runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotifySummary {
    /// Records inspected
    pub records_seen: usize,

    /// Notifications published (one per INSERT record)
    pub published: usize,

    /// Non-insert records skipped
    pub skipped: usize,
}

/// Encodes an item image into the fan-out envelope.
///
/// The envelope is `{"default": "<json-encoded-image>"}`: the image is
/// JSON-encoded first, and that *text* becomes the value of the `default`
/// key. Subscribers without a protocol-specific rendering receive the
/// default rendering, which decodes back to the image.
///
/// # Errors
///
/// Returns [`NotifyError::Envelope`] if serialization fails.
pub fn fanout_envelope(image: &Image) -> Result<String, NotifyError> {
    let encoded_image = serde_json::to_string(image).map_err(NotifyError::Envelope)?;

    let envelope = serde_json::json!({ "default": encoded_image });
    serde_json::to_string(&envelope).map_err(NotifyError::Envelope)
}

/// Republishes inserted items from a change batch to a destination topic.
///
/// The publisher is injected at construction so tests can substitute a
/// recording fake (see [`RecordingPublisher`](crate::publisher::RecordingPublisher)).
pub struct ChangeNotifier<P: Publisher> {
    config: NotifierConfig,
    publisher: P,
}

impl<P: Publisher> ChangeNotifier<P> {
    /// Creates a notifier from configuration and a publisher.
    pub fn new(config: NotifierConfig, publisher: P) -> Self {
        Self { config, publisher }
    }

    /// Returns the configured destination topic identifier.
    #[must_use]
    pub fn topic_arn(&self) -> &str {
        self.config.topic_arn()
    }

    /// Returns a reference to the underlying publisher.
    #[must_use]
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Handles one batch of change records.
    ///
    /// Records are processed strictly in arrival order, one publish call
    /// per INSERT record. Returns a [`NotifySummary`] on success.
    ///
    /// # Errors
    ///
    /// Fail-fast: the first [`NotifyError`] aborts the remaining records
    /// and propagates to the caller.
    #[instrument(skip(self, batch), fields(records = batch.len(), topic_arn = %self.config.topic_arn()))]
    pub async fn handle_batch(&self, batch: &ChangeBatch) -> Result<NotifySummary, NotifyError> {
        metrics::record_batch_size(batch.len());

        let mut summary = NotifySummary::default();

        for record in batch.iter() {
            summary.records_seen += 1;
            metrics::increment_records_seen(&record.kind);

            if record.kind.is_unknown() {
                warn!(
                    event_id = record.event_id_or_unknown(),
                    kind = ?record.kind,
                    "Skipping record with unknown event kind"
                );
            }

            if !record.is_insert() {
                debug!(
                    event_id = record.event_id_or_unknown(),
                    kind = record.kind.label(),
                    "Skipping non-insert record"
                );
                metrics::increment_records_skipped(&record.kind);
                summary.skipped += 1;
                continue;
            }

            let image = record
                .new_image()
                .ok_or_else(|| NotifyError::MissingNewImage {
                    event_id: record.event_id_or_unknown().to_string(),
                })?;

            let message = OutgoingMessage::structured(fanout_envelope(image)?);

            let start = Instant::now();
            let outcome = self
                .publisher
                .publish(self.config.topic_arn(), &message)
                .await
                .map_err(|e| {
                    metrics::increment_publish_errors();
                    NotifyError::Publish(e)
                })?;
            metrics::record_publish_duration(start.elapsed());
            metrics::increment_notifications_published();

            debug!(
                event_id = record.event_id_or_unknown(),
                message_id = outcome.message_id.as_deref().unwrap_or("<none>"),
                "Published insertion notification"
            );

            summary.published += 1;
        }

        info!(
            records_seen = summary.records_seen,
            published = summary.published,
            skipped = summary.skipped,
            "Batch handled"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AttributeValue;
    use std::collections::HashMap;

    #[test]
    fn test_fanout_envelope_wraps_encoded_image() {
        let mut image: Image = HashMap::new();
        image.insert("id".to_string(), AttributeValue::String("42".to_string()));

        let envelope = fanout_envelope(&image).unwrap();

        let outer: serde_json::Value = serde_json::from_str(&envelope).unwrap();
        let default = outer
            .get("default")
            .and_then(serde_json::Value::as_str)
            .unwrap();

        // The default rendering is a JSON text value that decodes back to
        // the image's wire shape.
        let inner: serde_json::Value = serde_json::from_str(default).unwrap();
        assert_eq!(inner, serde_json::json!({ "id": { "S": "42" } }));
    }

    #[test]
    fn test_fanout_envelope_empty_image() {
        let image: Image = HashMap::new();
        let envelope = fanout_envelope(&image).unwrap();

        let outer: serde_json::Value = serde_json::from_str(&envelope).unwrap();
        assert_eq!(outer.get("default").unwrap().as_str().unwrap(), "{}");
    }
}

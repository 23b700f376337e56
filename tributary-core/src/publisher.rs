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

//! Publisher Trait and Error Types
//!
//! This module defines the [`Publisher`] trait, the single outbound
//! capability the notifier depends on: "publish this message body to that
//! topic, with this format hint". Abstracting the messaging client behind a
//! trait keeps the notifier testable with a recording fake instead of a
//! real network client.
//!
//! # Examples
//!
//! ## Implementing a custom publisher
//!
//! ```rust
//! use tributary_core::publisher::{
//!     OutgoingMessage, PublishError, PublishOutcome, Publisher,
//! };
//! use async_trait::async_trait;
//!
//! /// A publisher that prints messages instead of sending them.
//! pub struct StdoutPublisher;
//!
//! #[async_trait]
//! impl Publisher for StdoutPublisher {
//!     async fn publish(
//!         &self,
//!         topic_arn: &str,
//!         message: &OutgoingMessage,
//!     ) -> Result<PublishOutcome, PublishError> {
//!         println!("{topic_arn}: {}", message.body);
//!         Ok(PublishOutcome { message_id: None })
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! [`PublishError`] classifies failures by retryability so callers can make
//! informed decisions. The notifier itself never retries (the invoking
//! runtime owns redelivery), but destination implementations still report
//! whether an error was transient.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;

/// Delivery-format indicator for an outgoing message.
///
/// `Json` marks the body as a structured envelope whose keys select
/// subscriber-protocol-specific renderings; `Raw` delivers the body
/// verbatim to every subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MessageStructure {
    /// Structured envelope, interpreted per subscriber protocol
    #[default]
    Json,

    /// Opaque body, delivered as-is
    Raw,
}

impl MessageStructure {
    /// Returns the wire value of the format indicator, if one is sent.
    ///
    /// Raw messages carry no indicator at all.
    #[must_use]
    pub const fn as_protocol_str(&self) -> Option<&'static str> {
        match self {
            Self::Json => Some("json"),
            Self::Raw => None,
        }
    }
}

/// A message ready to be handed to the destination service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Message body text
    pub body: String,

    /// Format indicator for the body
    pub structure: MessageStructure,
}

impl OutgoingMessage {
    /// Creates a structured (JSON-envelope) message.
    #[must_use]
    pub fn structured(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            structure: MessageStructure::Json,
        }
    }

    /// Creates a raw message delivered verbatim.
    #[must_use]
    pub fn raw(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            structure: MessageStructure::Raw,
        }
    }
}

/// Outcome of a successful publish call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublishOutcome {
    /// Message identifier assigned by the destination service, if any
    pub message_id: Option<String>,
}

/// Errors that can occur when publishing to a destination topic.
///
/// Each variant carries whether the operation is worth retrying, for the
/// benefit of callers that own a redelivery policy.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Connection to the destination service failed.
    ///
    /// Typically retryable: timeouts, DNS failures, connection refused.
    #[error("Connection error: {message}")]
    ConnectionError {
        /// Human-readable error message
        message: String,
        /// The underlying connection error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to serialize the message body.
    ///
    /// Non-retryable; indicates a data quality issue.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
        /// The underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The destination service rejected or failed the publish call.
    ///
    /// Retryability depends on the cause: throttling is retryable, a
    /// missing topic or denied authorization is not.
    #[error("Publish error: {message}")]
    PublishFailed {
        /// Human-readable error message
        message: String,
        /// Whether this specific failure is retryable
        retryable: bool,
        /// The underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid publisher configuration.
    ///
    /// Non-retryable; indicates a programming or deployment error.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Human-readable error message
        message: String,
        /// Configuration parameter name if applicable
        parameter: Option<String>,
    },

    /// A generic error that fits no other category.
    #[error("Publisher error: {message}")]
    Other {
        /// Human-readable error message
        message: String,
        /// Whether this error is retryable
        retryable: bool,
        /// The underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PublishError {
    /// Creates a connection error from any error type.
    #[must_use]
    pub fn connection(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::ConnectionError {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a connection error with a custom message.
    #[must_use]
    pub fn connection_msg(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a serialization error from any error type.
    #[must_use]
    pub fn serialization(
        source: impl std::error::Error + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a publish error with retryability information.
    #[must_use]
    pub fn publish(source: impl std::error::Error + Send + Sync + 'static, retryable: bool) -> Self {
        Self::PublishFailed {
            message: source.to_string(),
            retryable,
            source: Some(Box::new(source)),
        }
    }

    /// Creates a publish error with a custom message.
    #[must_use]
    pub fn publish_msg(message: impl Into<String>, retryable: bool) -> Self {
        Self::PublishFailed {
            message: message.into(),
            retryable,
            source: None,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>, parameter: Option<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            parameter,
        }
    }

    /// Creates a generic error.
    #[must_use]
    pub fn other(source: impl std::error::Error + Send + Sync + 'static, retryable: bool) -> Self {
        Self::Other {
            message: source.to_string(),
            retryable,
            source: Some(Box::new(source)),
        }
    }

    /// Returns whether this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionError { .. } => true,
            Self::SerializationError { .. } | Self::ConfigurationError { .. } => false,
            Self::PublishFailed { retryable, .. } | Self::Other { retryable, .. } => *retryable,
        }
    }
}

/// The outbound publish capability.
///
/// Implementations must be `Send + Sync` so a single publisher instance can
/// be shared across invocations for the lifetime of the process; the
/// destination client is read-only configuration and never mutated.
#[async_trait::async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes one message to the given destination topic.
    ///
    /// # Arguments
    ///
    /// * `topic_arn` - Opaque identifier of the destination topic.
    /// * `message` - Body and format indicator to deliver.
    ///
    /// # Errors
    ///
    /// Returns a [`PublishError`] if the destination service rejects or
    /// fails the call. Implementations do not retry; redelivery is owned by
    /// the caller's runtime.
    async fn publish(
        &self,
        topic_arn: &str,
        message: &OutgoingMessage,
    ) -> Result<PublishOutcome, PublishError>;
}

/// One message captured by the [`RecordingPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPublish {
    /// Destination topic the message was published to
    pub topic_arn: String,

    /// Message body
    pub body: String,

    /// Format indicator
    pub structure: MessageStructure,
}

/// A recording publisher for testing.
///
/// Captures every publish in memory and provides inspection methods. It can
/// be configured to fail, either immediately or after a number of
/// successful publishes, to exercise fault paths.
///
/// # Examples
///
/// ```rust
/// use tributary_core::publisher::{OutgoingMessage, Publisher, RecordingPublisher};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let publisher = RecordingPublisher::new();
///
/// publisher
///     .publish("arn:aws:sns:us-east-1:123456789012:orders", &OutgoingMessage::structured("{}"))
///     .await?;
///
/// assert_eq!(publisher.publish_count(), 1);
/// assert_eq!(publisher.messages()[0].body, "{}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    messages: Mutex<Vec<RecordedPublish>>,
    fail_publishes: bool,
    fail_after: Option<usize>,
}

impl RecordingPublisher {
    /// Creates a new recording publisher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the publisher to fail every publish.
    #[must_use]
    pub const fn with_publish_failures(mut self) -> Self {
        self.fail_publishes = true;
        self
    }

    /// Configures the publisher to fail after `n` successful publishes.
    #[must_use]
    pub const fn with_failure_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    /// Returns a snapshot of all captured messages in publish order.
    #[must_use]
    pub fn messages(&self) -> Vec<RecordedPublish> {
        self.lock().clone()
    }

    /// Returns the number of successful publishes.
    #[must_use]
    pub fn publish_count(&self) -> usize {
        self.lock().len()
    }

    /// Clears all captured messages.
    pub fn reset(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RecordedPublish>> {
        self.messages.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(
        &self,
        topic_arn: &str,
        message: &OutgoingMessage,
    ) -> Result<PublishOutcome, PublishError> {
        if self.fail_publishes {
            return Err(PublishError::publish_msg("Simulated publish failure", true));
        }

        let mut messages = self.lock();

        if let Some(limit) = self.fail_after {
            if messages.len() >= limit {
                return Err(PublishError::publish_msg(
                    "Simulated publish failure after limit",
                    true,
                ));
            }
        }

        messages.push(RecordedPublish {
            topic_arn: topic_arn.to_string(),
            body: message.body.clone(),
            structure: message.structure,
        });

        let id = messages.len();
        Ok(PublishOutcome {
            message_id: Some(format!("recorded-{id}")),
        })
    }
}

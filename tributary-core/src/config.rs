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

//! Notifier configuration.
//!
//! The only required configuration is the destination topic identifier. It
//! is read once at process start and treated as immutable for the lifetime
//! of the process; a missing identifier is fatal before any record is
//! handled.

use thiserror::Error;

/// Environment variable naming the destination topic.
pub const TOPIC_ARN_ENV: &str = "SNS_TOPIC_ARN";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("required environment variable {name} is not set")]
    MissingEnv {
        /// Name of the missing variable
        name: &'static str,
    },

    /// The topic identifier was not provided to the builder
    #[error("topic_arn is required")]
    MissingTopicArn,

    /// The topic identifier is present but empty
    #[error("topic_arn cannot be empty")]
    EmptyTopicArn,
}

/// Configuration for the change notifier.
///
/// # Examples
///
/// ```rust
/// use tributary_core::config::NotifierConfig;
///
/// let config = NotifierConfig::builder()
///     .topic_arn("arn:aws:sns:us-east-1:123456789012:inserted-items")
///     .build()
///     .unwrap();
///
/// assert!(config.topic_arn().ends_with("inserted-items"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    topic_arn: String,
}

impl NotifierConfig {
    /// Creates a new builder for `NotifierConfig`.
    #[must_use]
    pub fn builder() -> NotifierConfigBuilder {
        NotifierConfigBuilder::default()
    }

    /// Reads the configuration from the process environment.
    ///
    /// Looks up [`TOPIC_ARN_ENV`]. Call this once at startup: a missing or
    /// empty variable must prevent the process from handling any record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if the variable is unset and
    /// [`ConfigError::EmptyTopicArn`] if it is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let topic_arn = std::env::var(TOPIC_ARN_ENV).map_err(|_| ConfigError::MissingEnv {
            name: TOPIC_ARN_ENV,
        })?;

        Self::builder().topic_arn(topic_arn).build()
    }

    /// Returns the destination topic identifier.
    #[must_use]
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

/// Builder for `NotifierConfig`.
#[derive(Debug, Default)]
pub struct NotifierConfigBuilder {
    topic_arn: Option<String>,
}

impl NotifierConfigBuilder {
    /// Sets the destination topic identifier (required).
    #[must_use]
    pub fn topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    /// Builds the `NotifierConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if the topic identifier is missing or empty.
    pub fn build(self) -> Result<NotifierConfig, ConfigError> {
        let topic_arn = self.topic_arn.ok_or(ConfigError::MissingTopicArn)?;
        if topic_arn.is_empty() {
            return Err(ConfigError::EmptyTopicArn);
        }

        Ok(NotifierConfig { topic_arn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_topic_arn() {
        let err = NotifierConfig::builder().build().unwrap_err();
        assert_eq!(err, ConfigError::MissingTopicArn);
    }

    #[test]
    fn test_builder_rejects_empty_topic_arn() {
        let err = NotifierConfig::builder().topic_arn("").build().unwrap_err();
        assert_eq!(err, ConfigError::EmptyTopicArn);
    }

    #[test]
    fn test_builder_accepts_topic_arn() {
        let config = NotifierConfig::builder()
            .topic_arn("arn:aws:sns:eu-west-1:123456789012:events")
            .build()
            .unwrap();

        assert_eq!(
            config.topic_arn(),
            "arn:aws:sns:eu-west-1:123456789012:events"
        );
    }

    // Environment mutation is process-wide, so the unset and set cases live
    // in a single test to avoid racing with parallel tests.
    #[test]
    fn test_from_env_round_trip() {
        std::env::remove_var(TOPIC_ARN_ENV);
        let err = NotifierConfig::from_env().unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingEnv {
                name: TOPIC_ARN_ENV
            }
        );

        std::env::set_var(TOPIC_ARN_ENV, "arn:aws:sns:us-east-1:123456789012:t");
        let config = NotifierConfig::from_env().unwrap();
        assert_eq!(
            config.topic_arn(),
            "arn:aws:sns:us-east-1:123456789012:t"
        );

        std::env::remove_var(TOPIC_ARN_ENV);
    }
}

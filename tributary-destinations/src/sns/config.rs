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

//! SNS publisher configuration.

use thiserror::Error;

/// Errors raised while building an [`SnsConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnsConfigError {
    /// A region was provided but empty
    #[error("region cannot be empty")]
    EmptyRegion,

    /// An endpoint URL was provided but empty
    #[error("endpoint_url cannot be empty")]
    EmptyEndpointUrl,

    /// The SDK requires at least one attempt
    #[error("max_retries must be at least 1")]
    InvalidMaxRetries,
}

/// Configuration for the SNS publisher.
///
/// Everything is optional: with the defaults the client resolves region and
/// credentials from the standard provider chain (environment, instance
/// profile, etc.), which is the right behavior inside a managed runtime.
///
/// # Examples
///
/// ```rust
/// use tributary_destinations::sns::SnsConfig;
///
/// let config = SnsConfig::builder()
///     .region("eu-west-1")
///     .max_retries(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.region.as_deref(), Some("eu-west-1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnsConfig {
    /// AWS region override (default: provider chain).
    pub region: Option<String>,

    /// Custom endpoint URL for SNS-compatible endpoints (e.g. LocalStack).
    pub endpoint_url: Option<String>,

    /// Maximum attempts for SDK-level transport retries (default: 3).
    ///
    /// This is the SDK's own transport retry; the notifier adds no retry
    /// policy of its own.
    pub max_retries: u32,
}

impl Default for SnsConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            max_retries: 3,
        }
    }
}

impl SnsConfig {
    /// Creates a new builder for `SnsConfig`.
    #[must_use]
    pub fn builder() -> SnsConfigBuilder {
        SnsConfigBuilder::default()
    }
}

/// Builder for `SnsConfig`.
#[derive(Debug, Default)]
pub struct SnsConfigBuilder {
    region: Option<String>,
    endpoint_url: Option<String>,
    max_retries: Option<u32>,
}

impl SnsConfigBuilder {
    /// Sets the AWS region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets a custom SNS endpoint URL (for LocalStack and friends).
    #[must_use]
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Sets the maximum number of SDK transport attempts (default: 3).
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Builds the `SnsConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided field is empty or out of range.
    pub fn build(self) -> Result<SnsConfig, SnsConfigError> {
        if matches!(self.region.as_deref(), Some("")) {
            return Err(SnsConfigError::EmptyRegion);
        }

        if matches!(self.endpoint_url.as_deref(), Some("")) {
            return Err(SnsConfigError::EmptyEndpointUrl);
        }

        let max_retries = self.max_retries.unwrap_or(3);
        if max_retries == 0 {
            return Err(SnsConfigError::InvalidMaxRetries);
        }

        Ok(SnsConfig {
            region: self.region,
            endpoint_url: self.endpoint_url,
            max_retries,
        })
    }
}

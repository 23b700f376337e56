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

//! SNS publisher implementation.

use crate::sns::config::SnsConfig;
use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;
use tracing::{debug, info};
use tributary_core::publisher::{OutgoingMessage, PublishError, PublishOutcome, Publisher};

type SdkPublishError =
    aws_sdk_sns::error::SdkError<aws_sdk_sns::operation::publish::PublishError>;

/// Publishes notifier messages to an AWS SNS topic.
///
/// The client is created once and shared for the lifetime of the process;
/// it is read-only and safe to use from concurrent invocations.
///
/// # Examples
///
/// ```rust,ignore
/// use tributary_destinations::sns::{SnsConfig, SnsPublisher};
///
/// let config = SnsConfig::builder().region("us-east-1").build()?;
/// let publisher = SnsPublisher::new(config).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: SnsClient,
}

impl SnsPublisher {
    /// Creates a new SNS publisher with the given configuration.
    ///
    /// This initializes the AWS SDK with the default credential providers
    /// (environment variables, instance profiles, etc.) and applies any
    /// region or endpoint overrides from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the SDK client cannot be constructed.
    pub async fn new(config: SnsConfig) -> Result<Self, PublishError> {
        info!(
            region = config.region.as_deref().unwrap_or("<provider chain>"),
            endpoint_url = config.endpoint_url.as_deref().unwrap_or("<default>"),
            "Initializing SNS publisher"
        );

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = config.region.clone() {
            loader = loader.region(aws_config::Region::new(region));
        }

        // Custom endpoint for LocalStack and other SNS-compatible services.
        if let Some(endpoint_url) = &config.endpoint_url {
            debug!("Using custom SNS endpoint: {}", endpoint_url);
            loader = loader.endpoint_url(endpoint_url);
        }

        let aws_config = loader.load().await;

        let sns_config = aws_sdk_sns::config::Builder::from(&aws_config)
            .retry_config(
                aws_sdk_sns::config::retry::RetryConfig::standard()
                    .with_max_attempts(config.max_retries),
            )
            .build();

        let client = SnsClient::from_conf(sns_config);

        info!("SNS publisher initialized successfully");

        Ok(Self { client })
    }

    /// Creates a publisher from a pre-built SNS client.
    ///
    /// Useful when the client is configured elsewhere (shared SDK config,
    /// test harnesses with stubbed HTTP connectors).
    #[must_use]
    pub fn from_client(client: SnsClient) -> Self {
        Self { client }
    }

    /// Classifies SDK errors into `PublishError` variants.
    fn classify_sns_error(error: SdkPublishError) -> PublishError {
        use aws_sdk_sns::error::SdkError;

        match error {
            // Network/connection errors - retryable
            SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
                PublishError::connection(error)
            }

            // Service errors - check specific error type
            SdkError::ServiceError(ref service_err) => {
                let err_msg = service_err.err().to_string();

                if err_msg.contains("Throttled")
                    || err_msg.contains("ServiceUnavailable")
                    || err_msg.contains("InternalError")
                {
                    PublishError::publish(error, true)
                } else if err_msg.contains("NotFound")
                    || err_msg.contains("AuthorizationError")
                    || err_msg.contains("InvalidParameter")
                {
                    // Missing topic, denied access, malformed request
                    PublishError::publish(error, false)
                } else {
                    // Default to non-retryable for unknown service errors
                    PublishError::publish(error, false)
                }
            }

            // Construction errors - configuration issue
            SdkError::ConstructionFailure(_) => {
                PublishError::configuration(error.to_string(), Some("sns_client".to_string()))
            }

            // Other errors - default to non-retryable
            _ => PublishError::other(error, false),
        }
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    async fn publish(
        &self,
        topic_arn: &str,
        message: &OutgoingMessage,
    ) -> Result<PublishOutcome, PublishError> {
        debug!(
            topic_arn,
            bytes = message.body.len(),
            "Publishing notification to SNS"
        );

        let mut request = self
            .client
            .publish()
            .target_arn(topic_arn)
            .message(&message.body);

        if let Some(structure) = message.structure.as_protocol_str() {
            request = request.message_structure(structure);
        }

        match request.send().await {
            Ok(output) => {
                let message_id = output.message_id().map(str::to_string);
                debug!(
                    topic_arn,
                    message_id = message_id.as_deref().unwrap_or("<none>"),
                    "SNS publish succeeded"
                );
                Ok(PublishOutcome { message_id })
            }
            Err(e) => Err(Self::classify_sns_error(e)),
        }
    }
}

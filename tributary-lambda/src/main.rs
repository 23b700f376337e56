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

//! Lambda entry point for the Tributary change notifier.
//!
//! Configuration is read once at startup: a missing `SNS_TOPIC_ARN` fails
//! the process before the runtime loop starts, so no record is ever
//! handled without a destination. Each invocation deserializes one
//! `ChangeBatch` and returns the notify summary; any error marks the
//! invocation failed and leaves redelivery to the event source mapping.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;
use tracing::info;
use tributary_core::{metrics, ChangeBatch, ChangeNotifier, NotifierConfig, NotifySummary};
use tributary_destinations::sns::{SnsConfig, SnsPublisher};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .without_time()
        .init();

    metrics::init_metrics();

    // Fatal before any record is read.
    let config = NotifierConfig::from_env()?;

    let publisher = SnsPublisher::new(SnsConfig::builder().build()?).await?;
    let notifier = Arc::new(ChangeNotifier::new(config, publisher));

    info!(topic_arn = %notifier.topic_arn(), "Change notifier initialized");

    run(service_fn(move |event: LambdaEvent<ChangeBatch>| {
        let notifier = Arc::clone(&notifier);
        async move { handle(&notifier, event).await }
    }))
    .await
}

async fn handle(
    notifier: &ChangeNotifier<SnsPublisher>,
    event: LambdaEvent<ChangeBatch>,
) -> Result<NotifySummary, Error> {
    let summary = notifier.handle_batch(&event.payload).await?;
    Ok(summary)
}

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

//! Basic SNS publishing example.
//!
//! Feeds one INSERT record through the notifier against a LocalStack SNS
//! endpoint. To run:
//!
//! ```bash
//! # Start LocalStack and create a topic first:
//! #   awslocal sns create-topic --name inserted-items
//! export SNS_TOPIC_ARN=arn:aws:sns:us-east-1:000000000000:inserted-items
//! cargo run --example sns_basic
//! ```

use tributary_core::{ChangeBatch, ChangeNotifier, NotifierConfig};
use tributary_destinations::sns::{SnsConfig, SnsPublisher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = NotifierConfig::from_env()?;

    let sns_config = SnsConfig::builder()
        .region("us-east-1")
        .endpoint_url("http://localhost:4566")
        .build()?;

    let publisher = SnsPublisher::new(sns_config).await?;
    let notifier = ChangeNotifier::new(config, publisher);

    let batch: ChangeBatch = serde_json::from_str(
        r#"{
            "Records": [
                {
                    "eventID": "example-1",
                    "eventName": "INSERT",
                    "dynamodb": {
                        "NewImage": {
                            "id": { "S": "42" },
                            "name": { "S": "example item" }
                        }
                    }
                }
            ]
        }"#,
    )?;

    let summary = notifier.handle_batch(&batch).await?;
    println!(
        "published {} of {} records ({} skipped)",
        summary.published, summary.records_seen, summary.skipped
    );

    Ok(())
}

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

//! Tributary Destinations - Publisher Implementations
//!
//! This crate provides production publisher implementations for the
//! Tributary change notifier. Publishers are the outbound edge where
//! insertion notifications are handed to a messaging service.
//!
//! # Available Publishers
//!
//! - **SNS**: AWS SNS and SNS-compatible endpoints (LocalStack)
//!
//! # Features
//!
//! Publishers are enabled via Cargo features:
//!
//! - `sns` - AWS SNS publisher (default)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tributary_core::{ChangeNotifier, NotifierConfig};
//! use tributary_destinations::sns::{SnsConfig, SnsPublisher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NotifierConfig::from_env()?;
//!     let publisher = SnsPublisher::new(SnsConfig::builder().build()?).await?;
//!
//!     let notifier = ChangeNotifier::new(config, publisher);
//!     // notifier.handle_batch(&batch).await?;
//!
//!     Ok(())
//! }
//! ```

// SNS publisher module (enabled with "sns" feature)
#[cfg(feature = "sns")]
pub mod sns;

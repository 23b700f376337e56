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

//! SNS publisher for fanning insertion notifications out to subscribers.
//!
//! This module implements the [`Publisher`](tributary_core::publisher::Publisher)
//! trait on top of the AWS SNS `Publish` API. One notifier publish becomes
//! one `Publish` call with the destination `TargetArn`, the envelope body,
//! and `MessageStructure=json` when the message is structured.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tributary_destinations::sns::{SnsConfig, SnsPublisher};
//!
//! let config = SnsConfig::builder()
//!     .region("us-east-1")
//!     .build()?;
//!
//! let publisher = SnsPublisher::new(config).await?;
//! ```
//!
//! # Using LocalStack for testing
//!
//! ```rust,ignore
//! let config = SnsConfig::builder()
//!     .region("us-east-1")
//!     .endpoint_url("http://localhost:4566")
//!     .build()?;
//!
//! let publisher = SnsPublisher::new(config).await?;
//! ```

pub mod config;
mod publisher;

pub use config::{SnsConfig, SnsConfigBuilder, SnsConfigError};
pub use publisher::SnsPublisher;

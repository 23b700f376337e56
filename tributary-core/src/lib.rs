//! Tributary Core - Change Notifier Types and Traits
//!
//! This crate provides the foundational types for Tributary, a small adapter
//! that republishes DynamoDB Streams insertion events to an SNS topic.
//!
//! # Key Components
//!
//! - **Records**: [`record`] module defines the DynamoDB Streams record shape
//! - **Publisher**: [`publisher`] module defines the outbound capability trait
//! - **Notifier**: [`notifier`] module holds the insert-only fan-out logic
//! - **Config**: [`config`] module reads the destination topic from the environment
//!
//! # Example
//!
//! ```rust
//! use tributary_core::record::{ChangeRecord, EventKind};
//!
//! fn inspect(record: &ChangeRecord) {
//!     match record.kind {
//!         EventKind::Insert => println!("new item inserted"),
//!         EventKind::Modify => println!("item modified"),
//!         EventKind::Remove => println!("item removed"),
//!         _ => println!("other event"),
//!     }
//! }
//! ```

pub mod config;
pub mod metrics;
pub mod notifier;
pub mod publisher;
pub mod record;

pub use config::{ConfigError, NotifierConfig};
pub use notifier::{ChangeNotifier, NotifyError, NotifySummary};
pub use publisher::{
    MessageStructure, OutgoingMessage, PublishError, PublishOutcome, Publisher,
};
pub use record::{AttributeValue, ChangeBatch, ChangeRecord, EventKind, Image};

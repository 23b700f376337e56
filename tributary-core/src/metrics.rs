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

//! Metrics instrumentation for the change notifier.
//!
//! Uses the `metrics` crate facade, which supports multiple exporters
//! (Prometheus, StatsD, etc.). All names follow Prometheus conventions:
//! underscores, unit suffixes, `tributary_` prefix, counters ending in
//! `_total`.
//!
//! Labels stay low-cardinality: the only label used is the event kind
//! ("insert", "modify", "remove", "unknown"). Never label by topic ARN,
//! record id, or full error messages.
//!
//! # Examples
//!
//! ```rust
//! use tributary_core::metrics;
//! use tributary_core::record::EventKind;
//!
//! metrics::init_metrics();
//! metrics::increment_records_seen(&EventKind::Insert);
//! metrics::increment_notifications_published();
//! ```

use crate::record::EventKind;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Total change records received, by event kind.
const RECORDS_SEEN_TOTAL: &str = "tributary_records_seen_total";

/// Total records skipped because they were not insertions, by event kind.
const RECORDS_SKIPPED_TOTAL: &str = "tributary_records_skipped_total";

/// Total notifications published to the destination topic.
const NOTIFICATIONS_PUBLISHED_TOTAL: &str = "tributary_notifications_published_total";

/// Total failed publish calls.
const PUBLISH_ERRORS_TOTAL: &str = "tributary_publish_errors_total";

/// Distribution of incoming batch sizes.
const BATCH_SIZE: &str = "tributary_batch_size";

/// Time taken for individual publish calls.
const PUBLISH_DURATION_SECONDS: &str = "tributary_publish_duration_seconds";

/// Initializes metric descriptions for exporters.
///
/// Call once at application startup, before recording any metrics.
pub fn init_metrics() {
    describe_counter!(
        RECORDS_SEEN_TOTAL,
        "Total number of change records received, by event kind"
    );

    describe_counter!(
        RECORDS_SKIPPED_TOTAL,
        "Total number of non-insert records skipped, by event kind"
    );

    describe_counter!(
        NOTIFICATIONS_PUBLISHED_TOTAL,
        "Total number of notifications published to the destination topic"
    );

    describe_counter!(
        PUBLISH_ERRORS_TOTAL,
        "Total number of failed publish calls"
    );

    describe_histogram!(
        BATCH_SIZE,
        metrics::Unit::Count,
        "Distribution of incoming batch sizes (records per invocation)"
    );

    describe_histogram!(
        PUBLISH_DURATION_SECONDS,
        metrics::Unit::Seconds,
        "Time taken for individual publish calls to the destination topic"
    );
}

/// Increments the count of records seen for the given event kind.
pub fn increment_records_seen(kind: &EventKind) {
    counter!(RECORDS_SEEN_TOTAL, "operation" => kind.label()).increment(1);
}

/// Increments the count of skipped (non-insert) records.
pub fn increment_records_skipped(kind: &EventKind) {
    counter!(RECORDS_SKIPPED_TOTAL, "operation" => kind.label()).increment(1);
}

/// Increments the count of published notifications.
pub fn increment_notifications_published() {
    counter!(NOTIFICATIONS_PUBLISHED_TOTAL).increment(1);
}

/// Increments the count of failed publish calls.
pub fn increment_publish_errors() {
    counter!(PUBLISH_ERRORS_TOTAL).increment(1);
}

/// Records the size of an incoming batch.
#[allow(clippy::cast_precision_loss)]
pub fn record_batch_size(size: usize) {
    histogram!(BATCH_SIZE).record(size as f64);
}

/// Records the duration of one publish call.
pub fn record_publish_duration(duration: Duration) {
    histogram!(PUBLISH_DURATION_SECONDS).record(duration.as_secs_f64());
}

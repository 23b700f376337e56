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

//! Tests for SNS publisher configuration.

use tributary_destinations::sns::{SnsConfig, SnsConfigError};

#[test]
fn test_default_config() {
    let config = SnsConfig::builder().build().unwrap();

    assert_eq!(config.region, None);
    assert_eq!(config.endpoint_url, None);
    assert_eq!(config.max_retries, 3);
}

#[test]
fn test_full_config() {
    let config = SnsConfig::builder()
        .region("ap-southeast-2")
        .endpoint_url("http://localhost:4566")
        .max_retries(5)
        .build()
        .unwrap();

    assert_eq!(config.region.as_deref(), Some("ap-southeast-2"));
    assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    assert_eq!(config.max_retries, 5);
}

#[test]
fn test_empty_region_rejected() {
    let err = SnsConfig::builder().region("").build().unwrap_err();
    assert_eq!(err, SnsConfigError::EmptyRegion);
}

#[test]
fn test_empty_endpoint_url_rejected() {
    let err = SnsConfig::builder().endpoint_url("").build().unwrap_err();
    assert_eq!(err, SnsConfigError::EmptyEndpointUrl);
}

#[test]
fn test_zero_max_retries_rejected() {
    let err = SnsConfig::builder().max_retries(0).build().unwrap_err();
    assert_eq!(err, SnsConfigError::InvalidMaxRetries);
}

#[test]
fn test_default_matches_builder_default() {
    assert_eq!(SnsConfig::default(), SnsConfig::builder().build().unwrap());
}

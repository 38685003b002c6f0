// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::{HYPER_HMAC_SHA256, HYPER_REGION, HYPER_REQUEST, HYPER_SERVICE};
use hypersign_core::hash::{hex_hmac_sha256, hex_sha256};
use hypersign_core::time::{format_date, DateTime};

/// Scope: `20230101/us-west-1/hyper/hyper_request`
pub fn credential_scope(time: DateTime) -> String {
    format!(
        "{}/{}/{}/{}",
        format_date(time),
        HYPER_REGION,
        HYPER_SERVICE,
        HYPER_REQUEST
    )
}

/// StringToSign:
///
/// ```text
/// HYPER-HMAC-SHA256
/// 20230101T120000Z
/// 20230101/us-west-1/hyper/hyper_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(timestamp: &str, scope: &str, canonical_request: &str) -> String {
    let hashed = hex_sha256(canonical_request.as_bytes());
    [HYPER_HMAC_SHA256, timestamp, scope, hashed.as_str()].join("\n")
}

/// Lowercase hex HMAC of the string to sign under the derived key.
pub fn compose_signature(signing_key: &[u8], string_to_sign: &str) -> String {
    hex_hmac_sha256(signing_key, string_to_sign.as_bytes())
}

/// Value of the `authorization` header.
pub fn authorization(
    access_key: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{HYPER_HMAC_SHA256} Credential={access_key}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

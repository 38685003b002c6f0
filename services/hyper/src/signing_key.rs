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

use crate::constants::{HYPER_REGION, HYPER_REQUEST, HYPER_SECRET_PREFIX, HYPER_SERVICE};
use hypersign_core::hash::hmac_sha256;
use hypersign_core::time::{format_date, DateTime};

/// Derive the request-scoped signing key.
///
/// ```text
/// kDate        = HMAC("HYPER" + secret, "20230101")
/// kRegion      = HMAC(kDate, "us-west-1")
/// kService     = HMAC(kRegion, "hyper")
/// kCredentials = HMAC(kService, "hyper_request")
/// ```
///
/// The key is only valid for the calendar day of `time`.
pub fn derive_signing_key(secret: &str, time: DateTime) -> Vec<u8> {
    // Sign secret
    let secret = format!("{HYPER_SECRET_PREFIX}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(&sign_date, HYPER_REGION.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(&sign_region, HYPER_SERVICE.as_bytes());
    // Sign request
    hmac_sha256(&sign_service, HYPER_REQUEST.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    #[test]
    fn test_derive_signing_key() {
        let t = Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(
            hex::encode(derive_signing_key("123", t)),
            "a1207f133689cc8687f5a41cb81d52d560a19816d571469b3447c0169fe4719c"
        );
    }

    #[test]
    fn test_key_only_depends_on_date() {
        let morning = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 1).unwrap();
        let night = Utc.with_ymd_and_hms(2023, 1, 1, 23, 59, 59).unwrap();
        let next_day = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();

        assert_eq!(
            derive_signing_key("123", morning),
            derive_signing_key("123", night)
        );
        assert_ne!(
            derive_signing_key("123", night),
            derive_signing_key("123", next_day)
        );
    }
}

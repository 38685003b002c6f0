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

//! Canonical request construction.
//!
//! Header keys are stored in the form the caller supplied them, usually with
//! underscores (`x_hyper_date`), and rendered with hyphens (`x-hyper-date`).
//! The two lists below are sorted on different keys:
//!
//! - signed headers are sorted on the hyphenated name,
//! - canonical headers are sorted on the original key.
//!
//! Both orders are what the server recomputes, so they must stay independent
//! even though they agree for the four base headers.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Render a stored header key as its wire name.
pub fn hyphenate(key: &str) -> Cow<'_, str> {
    if key.contains('_') {
        Cow::Owned(key.replace('_', "-"))
    } else {
        Cow::Borrowed(key)
    }
}

/// Header names sorted on their hyphenated form and joined by `;`.
///
/// ```text
/// content-type;host;x-hyper-content-sha256;x-hyper-date
/// ```
pub fn signed_headers(headers: &BTreeMap<String, String>) -> String {
    let mut names: Vec<Cow<'_, str>> = headers.keys().map(|k| hyphenate(k)).collect();
    names.sort_unstable();
    names.join(";")
}

/// Headers sorted on their original key, rendered `name:value`, one per line
/// with a trailing newline.
///
/// ```text
/// content-type:application/json\nhost:us-west-1.hyper.sh\n
/// ```
pub fn canonical_headers(headers: &BTreeMap<String, String>) -> String {
    // BTreeMap iterates in key order, which is the original key order.
    let mut s = String::with_capacity(256);
    for (k, v) in headers {
        s.push_str(&hyphenate(k));
        s.push(':');
        s.push_str(v);
        s.push('\n');
    }
    s
}

/// Build the canonical request:
///
/// ```text
/// <method>\n<path>\n<query>\n<canonical headers>\n<signed headers>\n<body digest>
/// ```
pub fn canonical_request(
    method: &str,
    path: &str,
    query: &str,
    headers: &BTreeMap<String, String>,
    body_digest: &str,
) -> String {
    let canonical = canonical_headers(headers);
    let signed = signed_headers(headers);

    [
        method,
        path,
        query,
        canonical.as_str(),
        signed.as_str(),
        body_digest,
    ]
    .join("\n")
}

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

use super::*;
use pretty_assertions::assert_eq;

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[test]
fn test_get_containers() -> anyhow::Result<()> {
    let req = sign(&Vector {
        method: Method::GET,
        path: "/containers/json",
        query: &[],
        headers: &[],
        body: "",
        time: "20230101T120000Z",
    })?;

    assert_eq!(req.body_digest(), EMPTY_SHA256);
    assert_eq!(
        req.authorization(),
        Some(
            "HYPER-HMAC-SHA256 Credential=key/20230101/us-west-1/hyper/hyper_request, \
             SignedHeaders=content-type;host;x-hyper-content-sha256;x-hyper-date, \
             Signature=e8970cee918b7620bd6abd9e0aefd14d8789ffa057cc295fffb7af5ca4f73ca5"
        )
    );
    Ok(())
}

#[test]
fn test_post_with_query_on_leap_day() -> anyhow::Result<()> {
    let req = sign(&Vector {
        method: Method::POST,
        path: "/fips/allocate",
        query: &[("count", "2")],
        headers: &[],
        body: "",
        time: "20240229T235959Z",
    })?;

    assert_eq!(req.credential_scope(), "20240229/us-west-1/hyper/hyper_request");
    assert_eq!(
        signature_of(req.authorization().expect("must be signed")),
        "dedd3687e84f7bdef90edbd5dcfb140f5a4b7eaa82c0e96c975399318bd3e294"
    );
    Ok(())
}

#[test]
fn test_get_with_query_in_caller_order() -> anyhow::Result<()> {
    let req = sign(&Vector {
        method: Method::GET,
        path: "/containers/json",
        query: &[("all", "true"), ("since", "3afff57")],
        headers: &[],
        body: "",
        time: "20230101T120000Z",
    })?;

    assert_eq!(req.query(), "all=true&since=3afff57");
    assert_eq!(
        signature_of(req.authorization().expect("must be signed")),
        "6dcf61f05d12e06c745b6845c1abae8cb34991592f262ed6b81f5259918f2cb0"
    );
    Ok(())
}

#[test]
fn test_post_with_body() -> anyhow::Result<()> {
    let req = sign(&Vector {
        method: Method::POST,
        path: "/containers/create",
        query: &[("name", "web")],
        headers: &[],
        body: r#"{"Image":"busybox"}"#,
        time: "20230101T120000Z",
    })?;

    assert_eq!(
        req.body_digest(),
        "ceb41829508a3bb5e4da1d1ddc827df6e9042efa48ac2ea5bf9d1c253ea86c19"
    );
    assert_eq!(
        signature_of(req.authorization().expect("must be signed")),
        "3ef22b9ce3596331ad06f02a45ed45fdf3bba2cbb4ea2b5b874c435c8057e7b0"
    );
    Ok(())
}

#[test]
fn test_matches_reference_computation() -> anyhow::Result<()> {
    let req = sign(&Vector {
        method: Method::DELETE,
        path: "/containers/web",
        query: &[("v", "1"), ("force", "true")],
        headers: &[],
        body: "",
        time: "20231231T235959Z",
    })?;

    let expected = reference_signature(
        "123",
        "20231231",
        "20231231T235959Z",
        &req.canonical_request(),
    );
    assert_eq!(
        signature_of(req.authorization().expect("must be signed")),
        expected
    );
    Ok(())
}

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

#[test]
fn test_extra_headers_sort_orders() -> anyhow::Result<()> {
    let req = sign(&Vector {
        method: Method::GET,
        path: "/containers/json",
        query: &[],
        headers: &[("x1", "one"), ("x_a", "a")],
        body: "",
        time: "20230101T120000Z",
    })?;

    assert_eq!(
        req.signed_headers(),
        "content-type;host;x-a;x-hyper-content-sha256;x-hyper-date;x1"
    );
    let canonical = req.canonical_headers();
    let names: Vec<&str> = canonical
        .lines()
        .map(|l| l.split_once(':').map_or(l, |(k, _)| k))
        .collect();
    assert_eq!(
        names,
        vec![
            "content-type",
            "host",
            "x1",
            "x-a",
            "x-hyper-content-sha256",
            "x-hyper-date"
        ]
    );
    assert_eq!(
        signature_of(req.authorization().expect("must be signed")),
        "6830b77c0bad8599836bd89dad26c1a32d45a1d225054443cdde391d16e0f173"
    );
    Ok(())
}

#[test]
fn test_extra_header_changes_signature() -> anyhow::Result<()> {
    let base = Vector {
        method: Method::POST,
        path: "/images/create",
        query: &[("fromImage", "busybox")],
        headers: &[],
        body: "",
        time: "20230101T120000Z",
    };
    let without = sign(&base)?;
    let with = sign(&Vector {
        headers: &[("x_registry_auth", "e30=")],
        ..base
    })?;

    assert_ne!(without.authorization(), with.authorization());
    assert!(with.signed_headers().ends_with(";x-registry-auth"));
    Ok(())
}

#[test]
fn test_header_value_changes_signature() -> anyhow::Result<()> {
    let base = Vector {
        method: Method::POST,
        path: "/images/load",
        query: &[],
        headers: &[("content_type", "application/x-tar")],
        body: "",
        time: "20230101T120000Z",
    };
    let tar = sign(&base)?;
    let gzip = sign(&Vector {
        headers: &[("content_type", "application/gzip")],
        ..base
    })?;

    assert_eq!(tar.signed_headers(), gzip.signed_headers());
    assert_ne!(
        signature_of(tar.authorization().expect("must be signed")),
        signature_of(gzip.authorization().expect("must be signed"))
    );
    Ok(())
}

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

use crate::canonical;
use crate::constants::*;
use crate::signature::credential_scope;
use crate::Config;
use bytes::Bytes;
use http::header::HeaderName;
use http::HeaderValue;
use http::Method;
use hypersign_core::hash::hex_sha256;
use hypersign_core::time::{format_iso8601, now, DateTime};
use hypersign_core::{Error, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Signing state of a [`SigningRequest`].
///
/// `Signed` is terminal: a request is signed at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningState {
    /// No `authorization` header yet.
    Unsigned,
    /// `authorization` header computed and frozen.
    Signed,
}

/// A request being signed.
///
/// Everything the signature covers is fixed when the request is built: the
/// body and its digest, the timestamp, the header set and the base URL. The only later
/// change is the `authorization` header written by
/// [`RequestSigner`](crate::RequestSigner), which also flips the state to
/// [`SigningState::Signed`]. It is kept apart from the signed header set.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    base_url: String,
    method: Method,
    path: String,
    query: String,
    body: Bytes,
    body_digest: String,
    time: DateTime,
    timestamp: String,
    headers: BTreeMap<String, String>,
    authorization: Option<String>,
    state: SigningState,
}

impl SigningRequest {
    /// Start building a request for `path`, relative to the API version.
    ///
    /// ```
    /// use http::Method;
    /// use hypersign_hyper::{Config, SigningRequest};
    ///
    /// let req = SigningRequest::builder(Method::GET, "/containers/json")
    ///     .query("all", "true")
    ///     .build(&Config::default())
    ///     .unwrap();
    /// assert_eq!(req.path(), "v1.23/containers/json");
    /// assert_eq!(req.query(), "all=true");
    /// ```
    pub fn builder(method: Method, path: impl Into<String>) -> SigningRequestBuilder {
        SigningRequestBuilder::new(method, path)
    }

    /// Base URL the request was built for, e.g. `https://us-west-1.hyper.sh/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Uppercase HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Version-prefixed resource path, e.g. `v1.23/fips`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Form-urlencoded query in caller order, without the leading `?`.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Request body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Hex SHA-256 of the body.
    pub fn body_digest(&self) -> &str {
        &self.body_digest
    }

    /// Capture time.
    pub fn time(&self) -> DateTime {
        self.time
    }

    /// Capture time formatted as `20230101T120000Z`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Current signing state.
    pub fn state(&self) -> SigningState {
        self.state
    }

    /// Whether the `authorization` header has been computed.
    pub fn is_signed(&self) -> bool {
        self.state == SigningState::Signed
    }

    /// Signed headers as they go on the wire: hyphenated name and value.
    pub fn headers(&self) -> impl Iterator<Item = (Cow<'_, str>, &str)> {
        self.headers
            .iter()
            .map(|(k, v)| (canonical::hyphenate(k), v.as_str()))
    }

    /// Look up a header by wire name (`x-hyper-date`) or key (`x_hyper_date`).
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = canonical::hyphenate(name);
        if name.eq_ignore_ascii_case(AUTHORIZATION) {
            return self.authorization();
        }
        self.headers
            .iter()
            .find(|(k, _)| canonical::hyphenate(k).eq_ignore_ascii_case(&name))
            .map(|(_, v)| v.as_str())
    }

    /// The `authorization` header, present once signed.
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// `20230101/us-west-1/hyper/hyper_request`
    pub fn credential_scope(&self) -> String {
        credential_scope(self.time)
    }

    /// Header names covered by the signature, see [`canonical::signed_headers`].
    pub fn signed_headers(&self) -> String {
        canonical::signed_headers(&self.headers)
    }

    /// See [`canonical::canonical_headers`].
    pub fn canonical_headers(&self) -> String {
        canonical::canonical_headers(&self.headers)
    }

    /// Canonical request over the current header set.
    pub fn canonical_request(&self) -> String {
        canonical::canonical_request(
            self.method.as_str(),
            &self.path,
            &self.query,
            &self.headers,
            &self.body_digest,
        )
    }

    /// Full URL: base URL, path, and `?query` when the query is not empty.
    pub fn url(&self) -> String {
        let mut url = self.base_url.clone();
        url.push_str(&self.path);
        // No bare `?` for an empty query; the canonical query line is empty either way.
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }
        url
    }

    /// Produce the ready-to-send representation of a signed request.
    pub fn to_http(&self) -> Result<http::Request<Bytes>> {
        if !self.is_signed() {
            return Err(Error::invalid_argument(
                "request must be signed before it is sent",
            ));
        }

        let mut req = http::Request::builder()
            .method(self.method.clone())
            .uri(self.url())
            .body(self.body.clone())?;

        let headers = req.headers_mut();
        for (k, v) in &self.headers {
            let name = HeaderName::from_bytes(canonical::hyphenate(k).as_bytes())?;
            headers.insert(name, HeaderValue::from_str(v)?);
        }
        if let Some(authorization) = &self.authorization {
            let mut value = HeaderValue::from_str(authorization)?;
            value.set_sensitive(true);
            headers.insert(http::header::AUTHORIZATION, value);
        }

        Ok(req)
    }

    /// Write the `authorization` header and latch the state.
    pub(crate) fn set_signed(&mut self, authorization: String) {
        debug_assert_eq!(self.state, SigningState::Unsigned);

        self.authorization = Some(authorization);
        self.state = SigningState::Signed;
    }
}

/// Builder for [`SigningRequest`].
#[derive(Debug, Clone)]
pub struct SigningRequestBuilder {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Bytes,
    headers: Vec<(String, String)>,
    time: Option<DateTime>,
}

impl SigningRequestBuilder {
    /// Create a builder for `path`, relative to the API version.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Bytes::new(),
            headers: Vec::new(),
            time: None,
        }
    }

    /// Append a query parameter. Parameters are sent in the order appended.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the raw body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the body to the JSON encoding of `value`.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        let bs = serde_json::to_vec(value).map_err(|e| {
            Error::invalid_argument("failed to encode request body as json").with_source(e)
        })?;
        self.body = Bytes::from(bs);
        Ok(self)
    }

    /// Add an extra header, e.g. `x_registry_auth`.
    ///
    /// Keys are lowercased. A key whose wire name matches an existing header
    /// replaces it; `host`, `x-hyper-date`, `x-hyper-content-sha256` and
    /// `authorization` are owned by the signer and rejected at build time.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Pin the capture time instead of taking the current time.
    ///
    /// # Note
    ///
    /// Requests should always be signed with the current time. Only use this
    /// to reproduce a known signature.
    pub fn time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Freeze the request: encode the query, hash the body, capture the time
    /// and compute the base headers.
    pub fn build(self, config: &Config) -> Result<SigningRequest> {
        config.validate()?;

        let method = {
            let upper = self.method.as_str().to_ascii_uppercase();
            Method::from_bytes(upper.as_bytes()).map_err(|e| {
                Error::invalid_argument(format!("invalid method {upper:?}")).with_source(e)
            })?
        };

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query)
            .finish();

        let body_digest = hex_sha256(&self.body);
        let time = self.time.unwrap_or_else(now);
        let timestamp = format_iso8601(time);

        let mut headers = BTreeMap::from([
            (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
            (X_HYPER_DATE.to_string(), timestamp.clone()),
            (HOST.to_string(), config.host.clone()),
            (X_HYPER_CONTENT_SHA256.to_string(), body_digest.clone()),
        ]);

        for (key, value) in self.headers {
            let key = key.to_ascii_lowercase();
            validate_header(&key, &value)?;

            let name = canonical::hyphenate(&key).into_owned();
            headers.retain(|k, _| canonical::hyphenate(k) != name);
            headers.insert(key, value);
        }

        Ok(SigningRequest {
            base_url: config.base_url(),
            method,
            path: config.resource_path(&self.path),
            query,
            body: self.body,
            body_digest,
            time,
            timestamp,
            headers,
            authorization: None,
            state: SigningState::Unsigned,
        })
    }
}

fn validate_header(key: &str, value: &str) -> Result<()> {
    if key.is_empty()
        || !key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(Error::invalid_argument(format!(
            "invalid header name {key:?}"
        )));
    }

    let name = canonical::hyphenate(key);
    let reserved = [HOST, X_HYPER_DATE, X_HYPER_CONTENT_SHA256, AUTHORIZATION];
    if reserved.iter().any(|r| canonical::hyphenate(r) == name) {
        return Err(Error::invalid_argument(format!(
            "header {name} is computed by the signer and cannot be set"
        )));
    }

    HeaderValue::from_str(value)?;
    Ok(())
}

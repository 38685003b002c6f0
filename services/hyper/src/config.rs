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

use crate::constants::*;
use hypersign_core::{Context, Error, Result};

/// Config carries the endpoint a client talks to.
///
/// It is built once and shared read-only by every request, so tests can point
/// a client at a fake host or API version without touching global state. The
/// signing region, service and request type are not part of it: they are
/// fixed by the signing scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// URL scheme, `https` unless testing against a local endpoint.
    pub scheme: String,
    /// API host, also sent as the signed `host` header.
    pub host: String,
    /// API version prefix, e.g. `v1.23`.
    pub version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl Config {
    /// Set the API host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the URL scheme.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set the API version prefix.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Override fields from `HYPER_HOST` and `HYPER_API_VERSION` when set.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(HYPER_HOST).filter(|v| !v.is_empty()) {
            self.host = v;
        }
        if let Some(v) = ctx.env_var(HYPER_API_VERSION).filter(|v| !v.is_empty()) {
            self.version = v;
        }
        self
    }

    /// Check the config can produce valid URLs.
    pub fn validate(&self) -> Result<()> {
        if self.scheme != "https" && self.scheme != "http" {
            return Err(Error::config_invalid(format!(
                "unsupported scheme {:?}",
                self.scheme
            )));
        }
        if self.host.is_empty() || self.host.contains('/') {
            return Err(Error::config_invalid(format!(
                "invalid host {:?}",
                self.host
            )));
        }
        if self.version.is_empty() || self.version.contains('/') {
            return Err(Error::config_invalid(format!(
                "invalid api version {:?}",
                self.version
            )));
        }
        Ok(())
    }

    /// Base URL, always ending with `/`: `https://us-west-1.hyper.sh/`
    pub fn base_url(&self) -> String {
        format!("{}://{}/", self.scheme, self.host)
    }

    /// Prefix a resource path with the API version: `/fips` => `v1.23/fips`
    pub fn resource_path(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.version, path)
        } else {
            format!("{}/{}", self.version, path)
        }
    }
}

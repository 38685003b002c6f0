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

use crate::Client;
use http::Method;
use hypersign_core::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A floating IP as listed by `GET /fips`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Fip {
    /// The IP address.
    pub fip: String,
    /// Name given to the IP, empty when unnamed.
    pub name: String,
    /// Attached container id, empty when free.
    pub container: String,
    /// Attached service, empty when free.
    pub service: String,
}

/// Parameters of [`Client::fip_allocate`].
#[derive(Debug, Clone, Default)]
pub struct FipAllocateParams {
    /// Number of IPs to allocate. Required.
    pub count: Option<u32>,
}

impl Client {
    /// List floating IPs, optionally narrowed by `filters`
    /// (e.g. `{"name": ["web"]}`).
    pub async fn fips_ls(
        &self,
        filters: Option<&BTreeMap<String, Vec<String>>>,
    ) -> Result<Vec<Fip>> {
        let mut builder = self.request(Method::GET, "/fips");
        if let Some(filters) = filters {
            let filters = serde_json::to_string(filters).map_err(|e| {
                Error::invalid_argument("failed to encode filters").with_source(e)
            })?;
            builder = builder.query("filters", filters);
        }

        self.send(builder).await?.json()
    }

    /// Release a floating IP.
    pub async fn fip_release(&self, ip: &str) -> Result<()> {
        if ip.is_empty() {
            return Err(Error::invalid_argument("ip is required"));
        }

        self.send(self.request(Method::POST, "/fips/release").query("ip", ip))
            .await?;
        Ok(())
    }

    /// Allocate floating IPs and return them.
    pub async fn fip_allocate(&self, params: &FipAllocateParams) -> Result<Vec<String>> {
        let count = match params.count {
            Some(count) if count > 0 => count,
            Some(_) => return Err(Error::invalid_argument("count must be positive")),
            None => return Err(Error::invalid_argument("count is required")),
        };

        self.send(
            self.request(Method::POST, "/fips/allocate")
                .query("count", count.to_string()),
        )
        .await?
        .json()
    }
}

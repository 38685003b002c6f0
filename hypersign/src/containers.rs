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
use hypersign_core::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Query options of [`Client::containers`].
///
/// Options are sent in the order `all`, `limit`, `since`, `before`, `size`,
/// and only when set.
#[derive(Debug, Clone, Default)]
pub struct ListContainersOptions {
    /// Include stopped containers.
    pub all: Option<bool>,
    /// Return at most this many of the most recently created containers.
    pub limit: Option<u32>,
    /// Only containers created after this id or name.
    pub since: Option<String>,
    /// Only containers created before this id or name.
    pub before: Option<String>,
    /// Include container sizes.
    pub size: Option<bool>,
}

impl ListContainersOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(all) = self.all {
            pairs.push(("all", all.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(since) = &self.since {
            pairs.push(("since", since.clone()));
        }
        if let Some(before) = &self.before {
            pairs.push(("before", before.clone()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }
}

/// A container as listed by `GET /containers/json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Container {
    /// Container id.
    pub id: String,
    /// Names, each with a leading `/`.
    pub names: Vec<String>,
    /// Image the container was created from.
    pub image: String,
    /// Command run in the container.
    pub command: String,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// `running`, `exited` and so on.
    pub state: String,
    /// Human readable status.
    pub status: String,
    /// Container labels.
    pub labels: HashMap<String, String>,
}

impl Client {
    /// List containers.
    pub async fn containers(&self, opts: &ListContainersOptions) -> Result<Vec<Container>> {
        let mut builder = self.request(Method::GET, "/containers/json");
        for (k, v) in opts.query_pairs() {
            builder = builder.query(k, v);
        }

        self.send(builder).await?.json()
    }
}

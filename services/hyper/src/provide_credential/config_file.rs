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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use hypersign_core::{Context, Error, ProvideCredential, Result};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;

/// ConfigFileCredentialProvider loads credential from the hyper CLI config
/// file.
///
/// The file is `~/.hyper/config.json` unless `HYPER_CONFIG_FILE` is set:
///
/// ```json
/// {
///   "clouds": {
///     "tcp://us-west-1.hyper.sh:443": {
///       "accesskey": "<access key>",
///       "secretkey": "<secret key>"
///     }
///   }
/// }
/// ```
///
/// The `clouds` entry whose host matches the API host is used. A missing file
/// or entry yields `None`; a file that is not valid JSON is an error.
#[derive(Debug, Default, Clone)]
pub struct ConfigFileCredentialProvider {
    path: Option<String>,
    host: Option<String>,
}

impl ConfigFileCredentialProvider {
    /// Create a new ConfigFileCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of `HYPER_CONFIG_FILE` or the default path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Match `clouds` entries against this host instead of `HYPER_HOST` or
    /// the default host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    clouds: HashMap<String, CloudEntry>,
}

#[derive(Default, Deserialize)]
struct CloudEntry {
    #[serde(default)]
    accesskey: String,
    #[serde(default)]
    secretkey: String,
}

impl std::fmt::Debug for CloudEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudEntry").finish_non_exhaustive()
    }
}

/// `tcp://us-west-1.hyper.sh:443` -> `us-west-1.hyper.sh`
fn strip_host(s: &str) -> &str {
    let s = s.split_once("://").map_or(s, |(_, rest)| rest);
    let s = s.trim_end_matches('/');
    s.split_once(':').map_or(s, |(host, _)| host)
}

#[async_trait]
impl ProvideCredential for ConfigFileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => ctx
                .env_var(HYPER_CONFIG_FILE)
                .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string()),
        };

        let Some(expanded_path) = ctx.expand_home_dir(&path) else {
            debug!("failed to expand homedir for path: {path}");
            return Ok(None);
        };

        let content = match ctx.file_read(&expanded_path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("failed to read config file {expanded_path}: {err:?}");
                return Ok(None);
            }
        };

        let conf: ConfigFile = serde_json::from_slice(&content).map_err(|e| {
            Error::config_invalid(format!("failed to parse config file {expanded_path}"))
                .with_source(e)
        })?;

        let host = match &self.host {
            Some(host) => host.clone(),
            None => ctx
                .env_var(HYPER_HOST)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        };
        let host = strip_host(&host);

        let entry = conf
            .clouds
            .iter()
            .find(|(k, _)| strip_host(k).eq_ignore_ascii_case(host));
        let Some((key, entry)) = entry else {
            debug!("no cloud entry for host {host} in config file {expanded_path}");
            return Ok(None);
        };

        if entry.accesskey.is_empty() || entry.secretkey.is_empty() {
            debug!("cloud entry {key} in config file {expanded_path} is incomplete");
            return Ok(None);
        }

        debug!("loaded credential for {key} from config file {expanded_path}");
        Ok(Some(Credential::new(&entry.accesskey, &entry.secretkey)))
    }
}

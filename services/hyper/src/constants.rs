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

// Signing scheme.
pub const HYPER_HMAC_SHA256: &str = "HYPER-HMAC-SHA256";
pub const HYPER_SECRET_PREFIX: &str = "HYPER";
pub const HYPER_REGION: &str = "us-west-1";
pub const HYPER_SERVICE: &str = "hyper";
pub const HYPER_REQUEST: &str = "hyper_request";

// API endpoint defaults.
pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_HOST: &str = "us-west-1.hyper.sh";
pub const DEFAULT_VERSION: &str = "v1.23";

// Header keys, in the underscored form they are sorted by.
pub const CONTENT_TYPE: &str = "content_type";
pub const HOST: &str = "host";
pub const X_HYPER_DATE: &str = "x_hyper_date";
pub const X_HYPER_CONTENT_SHA256: &str = "x_hyper_content_sha256";
pub const AUTHORIZATION: &str = "authorization";

pub const APPLICATION_JSON: &str = "application/json";

// Env values used by hyper clients.
pub const HYPER_ACCESS_KEY: &str = "HYPER_ACCESS_KEY";
pub const HYPER_SECRET_KEY: &str = "HYPER_SECRET_KEY";
pub const HYPER_CONFIG_FILE: &str = "HYPER_CONFIG_FILE";
pub const HYPER_HOST: &str = "HYPER_HOST";
pub const HYPER_API_VERSION: &str = "HYPER_API_VERSION";

pub const DEFAULT_CONFIG_FILE: &str = "~/.hyper/config.json";

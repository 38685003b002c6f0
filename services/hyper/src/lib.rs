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

//! Hyper.sh service signer.
//!
//! Signs requests with `HYPER-HMAC-SHA256`, a SigV4-style scheme: a
//! canonical request is hashed into a string to sign, which is HMACed with a
//! key derived from the secret key and the request date.
//!
//! ```
//! use http::Method;
//! use hypersign_hyper::{Config, Credential, RequestSigner, SigningRequest};
//!
//! # fn main() -> hypersign_core::Result<()> {
//! let config = Config::default();
//! let mut req = SigningRequest::builder(Method::GET, "/containers/json")
//!     .query("all", "true")
//!     .build(&config)?;
//!
//! RequestSigner::new().sign(&mut req, &Credential::new("access_key", "secret_key"))?;
//! assert!(req.is_signed());
//!
//! let http_req = req.to_http()?;
//! assert_eq!(
//!     http_req.uri(),
//!     "https://us-west-1.hyper.sh/v1.23/containers/json?all=true"
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

pub mod canonical;

mod signature;
mod signing_key;

mod request;
pub use request::SigningRequest;
pub use request::SigningRequestBuilder;
pub use request::SigningState;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;

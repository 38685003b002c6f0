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

mod extra_headers;
mod standard;

use hmac::{Hmac, Mac};
use http::Method;
use hypersign_core::time::parse_iso8601;
use hypersign_hyper::{Config, Credential, RequestSigner, SigningRequest};
use sha2::{Digest, Sha256};

/// Inputs of one signing vector.
pub struct Vector<'a> {
    pub method: Method,
    pub path: &'a str,
    pub query: &'a [(&'a str, &'a str)],
    pub headers: &'a [(&'a str, &'a str)],
    pub body: &'a str,
    pub time: &'a str,
}

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn credential() -> Credential {
    Credential::new("key", "123")
}

pub fn sign(v: &Vector) -> anyhow::Result<SigningRequest> {
    init();

    let mut builder = SigningRequest::builder(v.method.clone(), v.path)
        .body(v.body.to_string())
        .time(parse_iso8601(v.time)?);
    for (k, val) in v.query {
        builder = builder.query(*k, *val);
    }
    for (k, val) in v.headers {
        builder = builder.header(*k, *val);
    }

    let mut req = builder.build(&Config::default())?;
    RequestSigner::new().sign(&mut req, &credential())?;
    Ok(req)
}

fn hmac(key: &[u8], data: &str) -> Vec<u8> {
    let mut m = Hmac::<Sha256>::new_from_slice(key).expect("hmac accepts any key length");
    m.update(data.as_bytes());
    m.finalize().into_bytes().to_vec()
}

/// Signature computed straight from the canonical request text, without the
/// crate's key derivation or string to sign.
pub fn reference_signature(secret: &str, date: &str, timestamp: &str, creq: &str) -> String {
    let k_date = hmac(format!("HYPER{secret}").as_bytes(), date);
    let k_region = hmac(&k_date, "us-west-1");
    let k_service = hmac(&k_region, "hyper");
    let k_credentials = hmac(&k_service, "hyper_request");

    let sts = format!(
        "HYPER-HMAC-SHA256\n{timestamp}\n{date}/us-west-1/hyper/hyper_request\n{}",
        hex::encode(Sha256::digest(creq.as_bytes()))
    );
    hex::encode(hmac(&k_credentials, &sts))
}

/// The `Signature=` field of an authorization header.
pub fn signature_of(authorization: &str) -> &str {
    authorization
        .rsplit_once("Signature=")
        .map(|(_, s)| s)
        .expect("authorization must carry a signature")
}

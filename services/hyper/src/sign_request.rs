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

use crate::signature::{authorization, compose_signature, string_to_sign};
use crate::signing_key::derive_signing_key;
use crate::Credential;
use crate::SigningRequest;
use hypersign_core::{Error, Result, SigningCredential};
use log::debug;

/// RequestSigner that implements HYPER-HMAC-SHA256.
///
/// The signer is stateless. The signing time is the capture time of the
/// [`SigningRequest`], so the signature only depends on the request and the
/// credential.
#[derive(Debug, Clone, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute and attach the `authorization` header.
    ///
    /// Signing an already signed request is a no-op: the first
    /// `authorization` header is kept as is.
    pub fn sign(&self, req: &mut SigningRequest, cred: &Credential) -> Result<()> {
        if req.is_signed() {
            debug!("request has been signed already, skip signing");
            return Ok(());
        }
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "access key and secret key must not be empty",
            ));
        }

        // Scope: "20230101/us-west-1/hyper/hyper_request"
        let scope = req.credential_scope();
        debug!("calculated scope: {scope}");

        let creq = req.canonical_request();
        debug!("calculated canonical request: {creq}");

        let string_to_sign = string_to_sign(req.timestamp(), &scope, &creq);
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = derive_signing_key(&cred.secret_key, req.time());
        let signature = compose_signature(&signing_key, &string_to_sign);

        let value = authorization(&cred.access_key, &scope, &req.signed_headers(), &signature);
        req.set_signed(value);

        Ok(())
    }
}

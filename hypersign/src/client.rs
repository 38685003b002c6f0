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

use crate::classify::classify;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use hypersign_core::{Context, Error, ProvideCredential, Result, SigningCredential};
use hypersign_hyper::{Config, Credential, RequestSigner, SigningRequest, SigningRequestBuilder};
use log::debug;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client signs and sends requests to the Hyper.sh API.
///
/// Cloning a client is cheap: the config and credential are shared
/// read-only, and every request owns its own signing state, so clones can be
/// used from multiple tasks without coordination.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    config: Arc<Config>,
    credential: Arc<Credential>,
    signer: RequestSigner,
}

impl Client {
    /// Create a client from an explicit credential.
    pub fn new(ctx: Context, config: Config, credential: Credential) -> Result<Self> {
        config.validate()?;
        if !credential.is_valid() {
            return Err(Error::credential_invalid(
                "access key and secret key must not be empty",
            ));
        }

        Ok(Self {
            ctx,
            config: Arc::new(config),
            credential: Arc::new(credential),
            signer: RequestSigner::new(),
        })
    }

    /// Create a client with the credential loaded from `provider`.
    ///
    /// The credential is loaded once and used for the life of the client.
    pub async fn from_provider(
        ctx: Context,
        config: Config,
        provider: &impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let Some(credential) = provider.provide_credential(&ctx).await? else {
            return Err(Error::credential_invalid(format!(
                "no credential found by provider {provider:?}"
            )));
        };
        Self::new(ctx, config, credential)
    }

    /// The endpoint config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The context carrying the transport.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Start building a request for `path`, relative to the API version.
    pub fn request(&self, method: Method, path: impl Into<String>) -> SigningRequestBuilder {
        SigningRequest::builder(method, path)
    }

    /// Build `builder` against this client's config and execute it.
    pub async fn send(&self, builder: SigningRequestBuilder) -> Result<Response> {
        let mut req = builder.build(&self.config)?;
        self.execute(&mut req).await
    }

    /// Sign `req` if it is not signed yet, send it and classify the response.
    ///
    /// A non-2xx status fails with the matching [`ErrorKind`](crate::ErrorKind),
    /// carrying the status and response body.
    ///
    /// A request built against another endpoint config fails with
    /// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// before it is signed or sent.
    pub async fn execute(&self, req: &mut SigningRequest) -> Result<Response> {
        if req.base_url() != self.config.base_url()
            || !req.path().starts_with(&self.config.resource_path(""))
        {
            return Err(Error::invalid_argument(format!(
                "request for {}{} does not target endpoint {}{}",
                req.base_url(),
                req.path(),
                self.config.base_url(),
                self.config.version
            )));
        }

        self.signer.sign(req, &self.credential)?;

        let http_req = req.to_http()?;
        debug!("sending request: {} {}", http_req.method(), http_req.uri());

        let resp = self.ctx.http_send(http_req).await?;
        let (parts, body) = resp.into_parts();
        debug!(
            "got response: {} {}: {}",
            req.method(),
            req.path(),
            parts.status
        );

        if let Some(kind) = classify(parts.status) {
            return Err(Error::new(
                kind,
                format!(
                    "{} {} failed with status {}",
                    req.method(),
                    req.path(),
                    parts.status
                ),
            )
            .with_response(parts.status, body));
        }

        Ok(Response {
            status: parts.status,
            headers: parts.headers,
            body,
        })
    }
}

/// A successful response.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Status code, always 2xx.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume the response into its body.
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            Error::unexpected("failed to decode response body as json").with_source(e)
        })
    }
}

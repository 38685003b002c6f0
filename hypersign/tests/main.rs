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

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, StatusCode};
use hypersign::{
    Client, Config, Context, Credential, EnvCredentialProvider, ErrorKind, FipAllocateParams,
    HttpSend, ListContainersOptions, StaticEnv,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use test_case::test_case;

/// HttpSend that records every request and answers with a canned response.
#[derive(Debug, Clone)]
struct MockHttpSend {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl MockHttpSend {
    fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            requests: Arc::default(),
        }
    }

    fn requests(&self) -> Vec<(Method, String, Option<String>)> {
        self.requests
            .lock()
            .expect("lock must not be poisoned")
            .iter()
            .map(|req| {
                let auth = req
                    .headers()
                    .get(http::header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                (req.method().clone(), req.uri().to_string(), auth)
            })
            .collect()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
    ) -> hypersign::Result<http::Response<Bytes>> {
        self.requests
            .lock()
            .expect("lock must not be poisoned")
            .push(req);

        Ok(http::Response::builder()
            .status(self.status)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Bytes::from_static(self.body.as_bytes()))?)
    }
}

fn client(mock: &MockHttpSend) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(mock.clone());
    Client::new(ctx, Config::default(), Credential::new("key", "123")).expect("client must build")
}

#[test_case(StatusCode::UNAUTHORIZED, ErrorKind::Unauthorized)]
#[test_case(StatusCode::NOT_FOUND, ErrorKind::NotFound)]
#[test_case(StatusCode::IM_A_TEAPOT, ErrorKind::UnexpectedStatus)]
#[test_case(StatusCode::SERVICE_UNAVAILABLE, ErrorKind::ServiceUnavailable)]
#[tokio::test]
async fn test_status_is_classified(status: StatusCode, kind: ErrorKind) {
    let mock = MockHttpSend::new(status, r#"{"message":"nope"}"#);
    let client = client(&mock);

    let err = client.fips_ls(None).await.unwrap_err();
    assert_eq!(err.kind(), kind);
    assert_eq!(err.status(), Some(status));
    assert_eq!(
        err.body().map(|b| b.as_ref()),
        Some(br#"{"message":"nope"}"#.as_slice())
    );
}

#[tokio::test]
async fn test_success_returns_body() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, r#"{"ok":true}"#);
    let client = client(&mock);

    let resp = client
        .send(client.request(Method::GET, "/info"))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body().as_ref(), br#"{"ok":true}"#);
    assert_eq!(resp.headers()["content-type"], "application/json");
    Ok(())
}

#[tokio::test]
async fn test_signed_request_on_the_wire() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, "[]");
    let client = client(&mock);

    client.fips_ls(None).await?;

    let sent = mock.requests.lock().expect("lock must not be poisoned");
    assert_eq!(sent.len(), 1);
    let req = &sent[0];
    assert_eq!(req.uri(), "https://us-west-1.hyper.sh/v1.23/fips");
    assert_eq!(req.headers()["host"], "us-west-1.hyper.sh");
    assert_eq!(req.headers()["content-type"], "application/json");
    assert!(req.headers().contains_key("x-hyper-date"));
    assert_eq!(
        req.headers()["x-hyper-content-sha256"],
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    let auth = req.headers()["authorization"].to_str()?;
    assert!(auth.starts_with("HYPER-HMAC-SHA256 Credential=key/"));
    assert!(auth.contains(
        "SignedHeaders=content-type;host;x-hyper-content-sha256;x-hyper-date, Signature="
    ));
    Ok(())
}

#[tokio::test]
async fn test_execute_twice_keeps_signature() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, "{}");
    let client = client(&mock);

    let mut req = client
        .request(Method::GET, "/containers/json")
        .build(client.config())?;
    client.execute(&mut req).await?;
    client.execute(&mut req).await?;

    let sent = mock.requests();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].2.is_some());
    assert_eq!(sent[0], sent[1]);
    Ok(())
}

#[tokio::test]
async fn test_fip_allocate() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, r#"["209.177.88.1","209.177.88.2"]"#);
    let client = client(&mock);

    let ips = client
        .fip_allocate(&FipAllocateParams { count: Some(2) })
        .await?;
    assert_eq!(ips, vec!["209.177.88.1", "209.177.88.2"]);

    let sent = mock.requests();
    assert_eq!(sent[0].0, Method::POST);
    assert_eq!(sent[0].1, "https://us-west-1.hyper.sh/v1.23/fips/allocate?count=2");
    Ok(())
}

#[test_case(None; "missing count")]
#[test_case(Some(0); "zero count")]
#[tokio::test]
async fn test_fip_allocate_without_count(count: Option<u32>) {
    let mock = MockHttpSend::new(StatusCode::OK, "[]");
    let client = client(&mock);

    let err = client
        .fip_allocate(&FipAllocateParams { count })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_fip_release() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::NO_CONTENT, "");
    let client = client(&mock);

    client.fip_release("209.177.88.1").await?;
    assert_eq!(
        mock.requests()[0].1,
        "https://us-west-1.hyper.sh/v1.23/fips/release?ip=209.177.88.1"
    );

    let err = client.fip_release("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(mock.requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_fips_ls_with_filters() -> Result<()> {
    let mock = MockHttpSend::new(
        StatusCode::OK,
        r#"[{"fip":"209.177.88.1","name":"web","container":"","service":""}]"#,
    );
    let client = client(&mock);

    let filters = BTreeMap::from([("name".to_string(), vec!["web".to_string()])]);
    let fips = client.fips_ls(Some(&filters)).await?;
    assert_eq!(fips.len(), 1);
    assert_eq!(fips[0].name, "web");

    assert_eq!(
        mock.requests()[0].1,
        "https://us-west-1.hyper.sh/v1.23/fips?filters=%7B%22name%22%3A%5B%22web%22%5D%7D"
    );
    Ok(())
}

#[test_case(ListContainersOptions::default(), ""; "no options")]
#[test_case(ListContainersOptions { all: Some(true), ..Default::default() }, "?all=true"; "all")]
#[test_case(ListContainersOptions { limit: Some(5), ..Default::default() }, "?limit=5"; "limit")]
#[test_case(ListContainersOptions { before: Some("3afff57".into()), ..Default::default() }, "?before=3afff57"; "before")]
#[test_case(ListContainersOptions { size: Some(true), ..Default::default() }, "?size=true"; "size")]
#[test_case(
    ListContainersOptions { since: Some("3afff57".into()), all: Some(true), ..Default::default() },
    "?all=true&since=3afff57";
    "all and since"
)]
#[tokio::test]
async fn test_containers_query(opts: ListContainersOptions, query: &str) {
    let mock = MockHttpSend::new(StatusCode::OK, r#"[{"Id":"8dfafdbc3a40","Created":1367854155}]"#);
    let client = client(&mock);

    let containers = client.containers(&opts).await.expect("must list");
    assert_eq!(containers[0].id, "8dfafdbc3a40");
    assert_eq!(
        mock.requests()[0].1,
        format!("https://us-west-1.hyper.sh/v1.23/containers/json{query}")
    );
}

#[tokio::test]
async fn test_from_provider_without_credential() {
    let ctx = Context::new().with_env(StaticEnv::default());

    let err = Client::from_provider(ctx, Config::default(), &EnvCredentialProvider::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}

#[tokio::test]
async fn test_custom_host() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, "[]");
    let ctx = Context::new().with_http_send(mock.clone());
    let config = Config::default()
        .with_scheme("http")
        .with_host("127.0.0.1:8080")
        .with_version("v1.24");
    let client = Client::new(ctx, config, Credential::new("key", "123"))?;

    client.fips_ls(None).await?;

    let sent = mock.requests.lock().expect("lock must not be poisoned");
    assert_eq!(sent[0].uri(), "http://127.0.0.1:8080/v1.24/fips");
    assert_eq!(sent[0].headers()["host"], "127.0.0.1:8080");
    Ok(())
}

#[test_case(Config::default().with_host("other.example.com"); "other host")]
#[test_case(Config::default().with_scheme("http"); "other scheme")]
#[test_case(Config::default().with_version("v9"); "other version")]
#[tokio::test]
async fn test_execute_rejects_request_for_other_endpoint(build_config: Config) {
    let mock = MockHttpSend::new(StatusCode::OK, "[]");
    let client = client(&mock);

    let mut req = client
        .request(Method::GET, "/fips")
        .build(&build_config)
        .expect("must build");
    let err = client.execute(&mut req).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!req.is_signed());
    assert!(mock.requests().is_empty());
}

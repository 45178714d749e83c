//! Wire-level tests for the gateway: auth header handling, content-type
//! selection, and the hard/soft failure split.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::{json, Value};
use techmart_client::body::RequestBody;
use techmart_client::gateway::Method;
use techmart_client::{ClientConfig, ClientError, Gateway};
use techmart_core::diff::PatchSet;
use techmart_core::token::{MemoryTokenStore, TokenStore};

fn gateway_for(base_url: &str) -> (Gateway, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let gateway = Gateway::new(
        &ClientConfig::new(base_url),
        Arc::clone(&store) as Arc<dyn TokenStore>,
    )
    .expect("gateway should build");
    (gateway, store)
}

#[tokio::test]
async fn bearer_header_is_attached_when_a_token_is_stored() {
    let (base_url, state) = common::spawn_backend().await;
    let (gateway, store) = gateway_for(&base_url);
    store.save("tok-123");

    gateway
        .request(Method::GET, "/ping", RequestBody::Empty)
        .await
        .expect("ping should succeed");

    assert_eq!(
        state.last_auth.lock().unwrap().as_deref(),
        Some("Bearer tok-123")
    );
}

#[tokio::test]
async fn no_auth_header_without_a_token() {
    let (base_url, state) = common::spawn_backend().await;
    let (gateway, _store) = gateway_for(&base_url);

    gateway
        .request(Method::GET, "/ping", RequestBody::Empty)
        .await
        .expect("ping should succeed");

    assert_eq!(state.last_auth.lock().unwrap().as_deref(), None);
}

#[tokio::test]
async fn json_bodies_carry_the_json_content_type() {
    let (base_url, state) = common::spawn_backend().await;
    let (gateway, _store) = gateway_for(&base_url);

    let echoed: Value = gateway
        .expect(
            Method::POST,
            "/echo",
            RequestBody::Json(json!({ "status": "PREPARING" })),
        )
        .await
        .expect("echo should succeed");

    assert_eq!(echoed["status"], "PREPARING");
    let content_type = state.last_content_type.lock().unwrap().clone().unwrap();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn multipart_bodies_let_the_transport_set_the_boundary() {
    let (base_url, state) = common::spawn_backend().await;
    let (gateway, _store) = gateway_for(&base_url);

    let mut patch = PatchSet::new();
    patch.set("brandName", json!("Acer Inc."));

    gateway
        .request(Method::PUT, "/brands/b1", RequestBody::form(patch, None))
        .await
        .expect("update should succeed");

    let content_type = state.last_content_type.lock().unwrap().clone().unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
}

#[tokio::test]
async fn non_2xx_status_is_a_hard_error() {
    let (base_url, _state) = common::spawn_backend().await;
    let (gateway, _store) = gateway_for(&base_url);

    let result = gateway
        .request(Method::GET, "/fail-http", RequestBody::Empty)
        .await;

    assert_matches!(result, Err(ClientError::Http { status: 500, ref body }) if body == "boom");
}

#[tokio::test]
async fn application_failure_flows_back_as_data_from_request() {
    let (base_url, _state) = common::spawn_backend().await;
    let (gateway, _store) = gateway_for(&base_url);

    let envelope = gateway
        .request(Method::GET, "/fail-app", RequestBody::Empty)
        .await
        .expect("transport level should succeed");

    assert!(!envelope.is_success());
    assert_eq!(envelope.code, 9001);
    assert_eq!(envelope.message, "Thao tác thất bại");
}

#[tokio::test]
async fn typed_helpers_convert_application_failures() {
    let (base_url, _state) = common::spawn_backend().await;
    let (gateway, _store) = gateway_for(&base_url);

    let result: Result<Value, _> = gateway.get("/fail-app").await;

    assert_matches!(
        result,
        Err(ClientError::Application { code: 9001, ref message }) if message == "Thao tác thất bại"
    );
}

#[tokio::test]
async fn success_without_result_is_no_data() {
    let (base_url, _state) = common::spawn_backend().await;
    let (gateway, _store) = gateway_for(&base_url);

    let result: Result<Value, _> = gateway.get("/no-data").await;

    assert_matches!(result, Err(ClientError::NoData));
}

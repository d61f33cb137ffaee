#![allow(dead_code)]

use api_rest::{router, AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use feed_core::{DiscoveryClient, DiscoveryConfig};
use http_body_util::BodyExt;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

/// Router over a freshly seeded store whose discovery client points at `base_url`.
pub fn app_with_upstream(base_url: &str, access_key: Option<&str>) -> Router {
    let cfg = DiscoveryConfig::new(
        base_url,
        access_key.map(str::to_string),
        Duration::from_secs(2),
    )
    .expect("discovery config");
    let discovery = DiscoveryClient::new(cfg).expect("discovery client");
    router(AppState::new(discovery))
}

/// Router with discovery left unconfigured.
pub fn app() -> Router {
    app_with_upstream("http://127.0.0.1:9", None)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        req = req.header("X-User", user);
    }
    let req = match body {
        Some(json) => req
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => req.body(Body::empty()),
    }
    .expect("build request");

    let res = app.clone().oneshot(req).await.expect("router is infallible");
    let status = res.status();
    let bytes = res
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

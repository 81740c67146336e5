//! Test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use serde_json::Value;

use calgate::api::{AppState, app};
use calgate::core::AppConfig;

/// Config with both sets of credentials pointed at the given upstreams.
/// Pass `None` to leave that service unconfigured.
pub fn test_config(google_url: Option<&str>, airtable_url: Option<&str>) -> AppConfig {
    let mut vars: HashMap<&str, String> = HashMap::new();
    if let Some(url) = google_url {
        vars.insert("GOOGLE_CALENDAR_TOKEN", String::from("test-google-token"));
        vars.insert("GOOGLE_CALENDAR_API_URL", url.to_string());
    }
    if let Some(url) = airtable_url {
        vars.insert("AIRTABLE_API_KEY", String::from("test-airtable-key"));
        vars.insert("AIRTABLE_BASE_ID", String::from("appTEST"));
        vars.insert("AIRTABLE_API_URL", url.to_string());
    }
    vars.insert("UPSTREAM_TIMEOUT_SECS", String::from("1"));
    AppConfig::from_lookup(|key| vars.get(key).cloned()).expect("Failed to build test config")
}

/// Creates a test application router for the given config
pub fn test_app(config: AppConfig) -> Router {
    let app_state = AppState::new(config).expect("Failed to build app state");
    app(Arc::new(app_state))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// An upstream that accepts connections and never answers
pub async fn silent_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}", addr)
}

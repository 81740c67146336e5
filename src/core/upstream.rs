//! Plumbing shared by the upstream API clients

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{GatewayError, Result, Service};

const MAX_RAW_ERROR_LEN: usize = 500;

/// Build the one HTTP client used for every upstream call. The timeout
/// covers the whole request including reading the body.
pub fn build_client(timeout: Duration) -> anyhow::Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("calgate/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Send a request and decode a successful JSON response
pub async fn send_json<T: DeserializeOwned>(service: Service, request: RequestBuilder) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(service, e))?;
    let response = check_status(service, response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| transport_error(service, e))
}

/// Turn a non-2xx response into a `GatewayError`
pub async fn check_status(service: Service, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    });
    tracing::warn!(%service, status = status.as_u16(), "Upstream request failed: {}", message);

    if status == StatusCode::UNAUTHORIZED {
        return Err(GatewayError::Authentication(format!(
            "{} rejected the credentials: {}",
            service, message
        )));
    }

    Err(GatewayError::Upstream {
        service,
        status: Some(status.as_u16()),
        message,
    })
}

pub fn transport_error(service: Service, err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        tracing::warn!(%service, "Upstream request timed out");
        return GatewayError::Timeout { service };
    }
    if err.is_decode() {
        return GatewayError::Upstream {
            service,
            status: None,
            message: format!("Unexpected response body: {}", err),
        };
    }
    tracing::warn!(%service, "Upstream request failed: {}", err);
    GatewayError::Upstream {
        service,
        status: err.status().map(|s| s.as_u16()),
        message: err.to_string(),
    }
}

/// Pull the human readable message out of an upstream error body.
///
/// Google returns `{"error": {"code": 404, "message": "..."}}` while
/// Airtable returns either `{"error": {"type": "...", "message":
/// "..."}}` or `{"error": "NOT_FOUND"}`.
pub fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<Value>(trimmed) {
        let error = json.get("error");
        if let Some(msg) = error.and_then(|e| e.get("message")).and_then(Value::as_str) {
            return Some(msg.to_string());
        }
        if let Some(kind) = error.and_then(|e| e.get("type")).and_then(Value::as_str) {
            return Some(kind.to_string());
        }
        if let Some(msg) = error.and_then(Value::as_str) {
            return Some(msg.to_string());
        }
    }

    let mut raw: String = trimmed.chars().take(MAX_RAW_ERROR_LEN).collect();
    if raw.len() < trimmed.len() {
        raw.push_str("...");
    }
    Some(raw)
}

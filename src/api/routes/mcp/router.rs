//! Router for the MCP endpoint (streamable HTTP, JSON responses only)

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
};
use serde_json::Value;

use crate::api::state::SharedState;
use crate::mcp::protocol::{INVALID_REQUEST, JsonRpcResponse, PARSE_ERROR};

async fn handle_message(State(state): State<SharedState>, body: Bytes) -> Response {
    let message: Value = match serde_json::from_slice(&body) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Unparseable MCP message: {}", e);
            let resp = JsonRpcResponse::failure(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {}", e),
            );
            return (StatusCode::BAD_REQUEST, Json(resp)).into_response();
        }
    };

    if message.is_array() {
        let resp = JsonRpcResponse::failure(
            Value::Null,
            INVALID_REQUEST,
            "Batch requests are not supported",
        );
        return Json(resp).into_response();
    }

    match state.mcp.handle(&state.gateway, message).await {
        Some(resp) => Json(resp).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Create the MCP router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(handle_message))
}

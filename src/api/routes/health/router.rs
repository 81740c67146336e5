//! Router for liveness checks

use axum::{Router, response::Json, routing::get};

use super::public::{HealthResponse, IndexResponse};
use crate::api::state::SharedState;

async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: String::from("Calendar & Airtable MCP gateway is running"),
    })
}

/// Never touches an upstream
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

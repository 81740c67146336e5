//! Router for the contacts API

use axum::{Router, extract::State, response::Json, routing::post};

use super::public;
use crate::api::public::{ApiError, AppJson};
use crate::api::state::SharedState;
use crate::gateway::contacts;

async fn search_contacts(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<public::ContactSearchRequest>,
) -> Result<Json<public::ContactSearchResponse>, ApiError> {
    let resp = contacts::search_contacts(&state.gateway, payload).await?;
    Ok(Json(resp))
}

/// Create the contacts router
pub fn router() -> Router<SharedState> {
    Router::new().route("/search", post(search_contacts))
}

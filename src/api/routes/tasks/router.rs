//! Router for the tasks API

use axum::{Router, extract::State, response::Json, routing::post};

use super::public;
use crate::api::public::{ApiError, AppJson};
use crate::api::state::SharedState;
use crate::gateway::tasks;

async fn create_task(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<public::CreateTaskRequest>,
) -> Result<Json<public::CreateTaskResponse>, ApiError> {
    let resp = tasks::create_task(&state.gateway, payload).await?;
    Ok(Json(resp))
}

/// Create the tasks router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(create_task))
}

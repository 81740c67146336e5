//! Router for the reminders API

use axum::{Router, extract::State, response::Json, routing::post};

use super::public;
use crate::api::public::{ApiError, AppJson};
use crate::api::state::SharedState;
use crate::gateway::reminders;

async fn create_reminder(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<public::CreateReminderRequest>,
) -> Result<Json<public::CreateReminderResponse>, ApiError> {
    let resp = reminders::create_reminder(&state.gateway, payload).await?;
    Ok(Json(resp))
}

/// Create the reminders router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(create_reminder))
}

//! Router for the calendar API

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};

use super::public;
use crate::api::public::{ApiError, AppJson, AppQuery};
use crate::api::state::SharedState;
use crate::gateway::{availability, calendar};

async fn list_events(
    State(state): State<SharedState>,
    AppQuery(params): AppQuery<public::EventsQuery>,
) -> Result<Json<public::EventsResponse>, ApiError> {
    let resp = calendar::list_events(&state.gateway, params).await?;
    Ok(Json(resp))
}

async fn create_event(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<public::CreateEventRequest>,
) -> Result<Json<public::CreateEventResponse>, ApiError> {
    let resp = calendar::create_event(&state.gateway, payload).await?;
    Ok(Json(resp))
}

async fn check_availability(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<public::AvailabilityRequest>,
) -> Result<Json<public::AvailabilityResponse>, ApiError> {
    let resp = availability::check_availability(&state.gateway, payload).await?;
    Ok(Json(resp))
}

/// Create the calendar router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/check-availability", post(check_availability))
}

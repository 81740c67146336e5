//! Router for generic Airtable table access

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::get,
};
use serde_json::{Map, Value};

use super::public;
use crate::api::public::{ApiError, AppJson, AppQuery};
use crate::api::state::SharedState;
use crate::gateway::records;

async fn list_records(
    State(state): State<SharedState>,
    Path(table): Path<String>,
    AppQuery(params): AppQuery<public::RecordsQuery>,
) -> Result<Json<public::RecordsResponse>, ApiError> {
    let resp = records::list_records(&state.gateway, &table, params).await?;
    Ok(Json(resp))
}

async fn create_record(
    State(state): State<SharedState>,
    Path(table): Path<String>,
    AppJson(fields): AppJson<Map<String, Value>>,
) -> Result<Json<public::CreateRecordResponse>, ApiError> {
    let resp = records::create_record(&state.gateway, &table, fields).await?;
    Ok(Json(resp))
}

/// Create the Airtable router
pub fn router() -> Router<SharedState> {
    Router::new().route("/{table}", get(list_records).post(create_record))
}

use serde_json::{Map, Value};

use super::{Gateway, require_text};
use crate::api::public::airtable::{CreateRecordResponse, RecordsQuery, RecordsResponse};
use crate::core::error::{GatewayError, Result};

pub async fn list_records(
    gateway: &Gateway,
    table: &str,
    query: RecordsQuery,
) -> Result<RecordsResponse> {
    let table = require_text("table", table)?;
    let formula = query.filter_formula.filter(|f| !f.trim().is_empty());
    let records = gateway
        .airtable()?
        .list_records(&table, formula.as_deref())
        .await?;
    Ok(RecordsResponse { records })
}

pub async fn create_record(
    gateway: &Gateway,
    table: &str,
    fields: Map<String, Value>,
) -> Result<CreateRecordResponse> {
    let table = require_text("table", table)?;
    if fields.is_empty() {
        return Err(GatewayError::validation("record must have at least one field"));
    }
    let record = gateway.airtable()?.create_record(&table, fields).await?;
    Ok(CreateRecordResponse {
        success: true,
        record,
    })
}

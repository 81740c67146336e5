use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::{Gateway, require_text};
use crate::api::public::tasks::{CreateTaskRequest, CreateTaskResponse};
use crate::core::error::{GatewayError, Result};

const DEFAULT_STATUS: &str = "To Do";
const DEFAULT_PRIORITY: &str = "Medium";

/// Map a task request onto the Airtable columns. Absent optional values
/// are left out so Airtable keeps the cell empty.
pub fn task_fields(req: CreateTaskRequest) -> Result<Map<String, Value>> {
    let name = require_text("name", &req.name)?;

    let mut fields = Map::new();
    fields.insert("Name".to_string(), Value::String(name));
    fields.insert(
        "Status".to_string(),
        Value::String(req.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
    );
    fields.insert(
        "Priority".to_string(),
        Value::String(req.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string())),
    );
    if let Some(due_date) = req.due_date {
        NaiveDate::parse_from_str(due_date.trim(), "%Y-%m-%d").map_err(|_| {
            GatewayError::validation(format!("due_date must be YYYY-MM-DD, got '{}'", due_date))
        })?;
        fields.insert("Due Date".to_string(), Value::String(due_date.trim().to_string()));
    }
    fields.insert(
        "Notes".to_string(),
        Value::String(req.notes.unwrap_or_default()),
    );

    Ok(fields)
}

pub async fn create_task(gateway: &Gateway, req: CreateTaskRequest) -> Result<CreateTaskResponse> {
    let fields = task_fields(req)?;
    let table = &gateway.config().airtable_tasks_table;
    let task = gateway.airtable()?.create_record(table, fields).await?;
    Ok(CreateTaskResponse {
        success: true,
        task,
    })
}

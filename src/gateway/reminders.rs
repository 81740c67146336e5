//! Reminders are written to both upstreams: a short calendar event and
//! a pending task.

use chrono::Duration;
use serde_json::{Map, Value};

use super::{Gateway, parse_instant, require_text};
use crate::airtable::Record;
use crate::api::public::reminders::{
    CreateReminderRequest, CreateReminderResponse, ReminderFailure,
};
use crate::core::error::{GatewayError, Result, Service};
use crate::google::gcal::{Event, EventDateTime};

const REMINDER_LENGTH_MINUTES: i64 = 15;
const REMINDER_STATUS: &str = "Pending";

/// The calendar event and task fields for a reminder
pub fn reminder_parts(
    req: &CreateReminderRequest,
    time_zone: &str,
) -> Result<(Event, Map<String, Value>)> {
    let title = require_text("title", &req.title)?;
    let start = parse_instant("datetime", &req.datetime)?;
    let end = start + Duration::minutes(REMINDER_LENGTH_MINUTES);
    let name = format!("Reminder: {}", title);

    let event = Event {
        summary: Some(name.clone()),
        description: (!req.notes.is_empty()).then(|| req.notes.clone()),
        start: Some(EventDateTime::at(start, Some(time_zone.to_string()))),
        end: Some(EventDateTime::at(end, Some(time_zone.to_string()))),
        ..Default::default()
    };

    // Due date is the calendar date as the caller wrote it, not the UTC one
    let due_date = req
        .datetime
        .trim()
        .split('T')
        .next()
        .unwrap_or_default()
        .to_string();

    let mut fields = Map::new();
    fields.insert("Name".to_string(), Value::String(name));
    fields.insert("Status".to_string(), Value::String(REMINDER_STATUS.to_string()));
    fields.insert("Due Date".to_string(), Value::String(due_date));
    fields.insert("Notes".to_string(), Value::String(req.notes.clone()));

    Ok((event, fields))
}

async fn create_calendar_side(gateway: &Gateway, event: &Event) -> Result<Event> {
    let calendar_id = gateway.calendar_id(None);
    gateway.calendar()?.create_event(&calendar_id, event).await
}

async fn create_task_side(gateway: &Gateway, fields: Map<String, Value>) -> Result<Record> {
    let table = &gateway.config().airtable_tasks_table;
    gateway.airtable()?.create_record(table, fields).await
}

fn failure(service: Service, err: &GatewayError) -> ReminderFailure {
    ReminderFailure {
        service: service.as_str().to_string(),
        code: err.code().to_string(),
        message: err.to_string(),
    }
}

/// Create both halves of a reminder. Fails only when neither half
/// could be created; a partial result lists the half that failed.
pub async fn create_reminder(
    gateway: &Gateway,
    req: CreateReminderRequest,
) -> Result<CreateReminderResponse> {
    let (event, fields) = reminder_parts(&req, &gateway.config().reminder_time_zone)?;

    let (calendar, task) = tokio::join!(
        create_calendar_side(gateway, &event),
        create_task_side(gateway, fields)
    );

    let mut errors = Vec::new();
    let calendar_event = match calendar {
        Ok(event) => Some(event),
        Err(err) => {
            tracing::error!("Failed to create reminder event: {}", err);
            errors.push((Service::GoogleCalendar, err));
            None
        }
    };
    let airtable_task = match task {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::error!("Failed to create reminder task: {}", err);
            errors.push((Service::Airtable, err));
            None
        }
    };

    if calendar_event.is_none() && airtable_task.is_none() {
        let (_, first) = errors.remove(0);
        return Err(first);
    }

    Ok(CreateReminderResponse {
        success: errors.is_empty(),
        calendar_created: calendar_event.is_some(),
        airtable_created: airtable_task.is_some(),
        calendar_event,
        airtable_task,
        errors: errors
            .iter()
            .map(|(service, err)| failure(*service, err))
            .collect(),
    })
}

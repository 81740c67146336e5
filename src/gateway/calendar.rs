use chrono::{Duration, Utc};

use super::{Gateway, parse_instant, require_text};
use crate::api::public::calendar::{
    CreateEventRequest, CreateEventResponse, EventsQuery, EventsResponse,
};
use crate::core::error::{GatewayError, Result};
use crate::google::gcal::{Event, EventDateTime};

const DEFAULT_DAYS_AHEAD: i64 = 7;

/// List events between `start_time` and `end_time`, defaulting to the
/// next week.
pub async fn list_events(gateway: &Gateway, query: EventsQuery) -> Result<EventsResponse> {
    let start = match query.start_time.as_deref() {
        Some(raw) => parse_instant("start_time", raw)?,
        None => Utc::now(),
    };
    let end = match query.end_time.as_deref() {
        Some(raw) => parse_instant("end_time", raw)?,
        None => start + Duration::days(DEFAULT_DAYS_AHEAD),
    };
    if end <= start {
        return Err(GatewayError::validation("end_time must be after start_time"));
    }

    let calendar_id = gateway.calendar_id(query.calendar_id);
    let events = gateway
        .calendar()?
        .list_events(&calendar_id, start, end)
        .await?;

    Ok(EventsResponse { events })
}

pub async fn create_event(
    gateway: &Gateway,
    req: CreateEventRequest,
) -> Result<CreateEventResponse> {
    let summary = require_text("summary", &req.summary)?;
    let start = parse_instant("start.dateTime", &req.start.date_time)?;
    let end = parse_instant("end.dateTime", &req.end.date_time)?;
    if end <= start {
        return Err(GatewayError::validation(
            "end.dateTime must be after start.dateTime",
        ));
    }

    let event = Event {
        summary: Some(summary),
        description: req.description.filter(|d| !d.is_empty()),
        location: req.location.filter(|l| !l.is_empty()),
        start: Some(EventDateTime::at(start, req.start.time_zone)),
        end: Some(EventDateTime::at(end, req.end.time_zone)),
        attendees: (!req.attendees.is_empty()).then_some(req.attendees),
        ..Default::default()
    };

    let calendar_id = gateway.calendar_id(req.calendar_id);
    let created = gateway
        .calendar()?
        .create_event(&calendar_id, &event)
        .await?;

    Ok(CreateEventResponse {
        success: true,
        id: created.id.clone(),
        event: created,
    })
}

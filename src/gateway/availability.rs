//! Free/busy check for a single requested slot

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use super::Gateway;
use crate::api::public::calendar::{AvailabilityRequest, AvailabilityResponse, RequestedSlot};
use crate::core::error::{GatewayError, Result};
use crate::google::Event;

const MAX_DURATION_MINUTES: i64 = 24 * 60;

/// The `[start, end)` window a request asks about, in UTC
pub fn requested_window(req: &AvailabilityRequest) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let date = NaiveDate::parse_from_str(req.date.trim(), "%Y-%m-%d").map_err(|_| {
        GatewayError::validation(format!("date must be YYYY-MM-DD, got '{}'", req.date))
    })?;
    let start_time = ["%H:%M", "%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(req.start_time.trim(), fmt).ok())
        .ok_or_else(|| {
            GatewayError::validation(format!(
                "start_time must be HH:MM, got '{}'",
                req.start_time
            ))
        })?;
    if req.duration_minutes <= 0 || req.duration_minutes > MAX_DURATION_MINUTES {
        return Err(GatewayError::validation(format!(
            "duration_minutes must be between 1 and {}",
            MAX_DURATION_MINUTES
        )));
    }

    let start = date.and_time(start_time).and_utc();
    Ok((start, start + Duration::minutes(req.duration_minutes)))
}

/// Busy events whose interval overlaps `[start, end)`. Intervals that
/// only touch the window do not count.
pub fn conflicts(events: &[Event], start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.is_busy())
        .filter(|event| match event.interval() {
            Some((event_start, event_end)) => event_start < end && start < event_end,
            None => false,
        })
        .collect()
}

pub async fn check_availability(
    gateway: &Gateway,
    req: AvailabilityRequest,
) -> Result<AvailabilityResponse> {
    let (start, end) = requested_window(&req)?;
    let calendar_id = gateway.calendar_id(req.calendar_id.clone());
    let events = gateway
        .calendar()?
        .list_events(&calendar_id, start, end)
        .await?;

    let conflicts: Vec<String> = conflicts(&events, start, end)
        .into_iter()
        .map(|event| {
            event
                .summary
                .clone()
                .unwrap_or_else(|| "Untitled".to_string())
        })
        .collect();
    tracing::debug!("{} conflicts between {} and {}", conflicts.len(), start, end);

    Ok(AvailabilityResponse {
        available: conflicts.is_empty(),
        conflicts,
        requested_slot: RequestedSlot {
            date: req.date,
            start_time: req.start_time,
            duration_minutes: req.duration_minutes,
        },
    })
}

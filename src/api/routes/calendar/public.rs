//! Public types for the calendar API
use serde::{Deserialize, Serialize};

use crate::google::gcal::{Attendee, Event};

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub calendar_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
pub struct EventTime {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(rename = "timeZone", default)]
    pub time_zone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub summary: String,
    pub start: EventTime,
    pub end: EventTime,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub calendar_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub success: bool,
    pub id: Option<String>,
    pub event: Event,
}

fn default_duration_minutes() -> i64 {
    60
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub date: String,
    pub start_time: String,
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: i64,
    #[serde(default)]
    pub calendar_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RequestedSlot {
    pub date: String,
    pub start_time: String,
    pub duration_minutes: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub conflicts: Vec<String>,
    pub requested_slot: RequestedSlot,
}

//! Public types for the reminders API
use serde::{Deserialize, Serialize};

use crate::airtable::Record;
use crate::google::Event;

#[derive(Debug, Deserialize)]
pub struct CreateReminderRequest {
    pub title: String,
    pub datetime: String,
    #[serde(default)]
    pub notes: String,
}

/// One half of a reminder that could not be created
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ReminderFailure {
    pub service: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateReminderResponse {
    pub success: bool,
    pub calendar_created: bool,
    pub airtable_created: bool,
    pub calendar_event: Option<Event>,
    pub airtable_task: Option<Record>,
    pub errors: Vec<ReminderFailure>,
}

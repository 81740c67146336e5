use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Function, Parameters, Property, ToolCall, parse_args, to_output};
use crate::api::public::calendar::{
    AvailabilityRequest, CreateEventRequest, EventTime, EventsQuery,
};
use crate::core::error::Result;
use crate::gateway::{Gateway, availability, calendar};
use crate::google::gcal::Attendee;

#[derive(Serialize)]
pub struct ListCalendarEventsProps {
    pub start_time: Property,
    pub end_time: Property,
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct ListCalendarEventsTool {
    pub function: Function<ListCalendarEventsProps>,
}

#[async_trait]
impl ToolCall for ListCalendarEventsTool {
    async fn call(&self, gateway: &Gateway, args: Value) -> Result<Value> {
        let query: EventsQuery = parse_args(args)?;
        to_output(calendar::list_events(gateway, query).await?)
    }

    fn function_name(&self) -> String {
        self.function.name.clone()
    }
}

impl ListCalendarEventsTool {
    pub fn new() -> Self {
        let function = Function {
            name: String::from("list_calendar_events"),
            description: String::from(
                "List Google Calendar events in a time range. Defaults to the next 7 days.",
            ),
            input_schema: Parameters::object(
                ListCalendarEventsProps {
                    start_time: Property::string(
                        "Start of the range as an RFC 3339 timestamp (default is now).",
                    ),
                    end_time: Property::string(
                        "End of the range as an RFC 3339 timestamp (default is 7 days after the start).",
                    ),
                },
                &[],
            ),
        };
        Self { function }
    }
}

impl Default for ListCalendarEventsTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct CreateCalendarEventProps {
    pub summary: Property,
    pub start: Property,
    pub end: Property,
    pub time_zone: Property,
    pub description: Property,
    pub location: Property,
    pub attendees: Property,
}

#[derive(Deserialize)]
pub struct CreateCalendarEventArgs {
    pub summary: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl From<CreateCalendarEventArgs> for CreateEventRequest {
    fn from(args: CreateCalendarEventArgs) -> Self {
        CreateEventRequest {
            summary: args.summary,
            start: EventTime {
                date_time: args.start,
                time_zone: args.time_zone.clone(),
            },
            end: EventTime {
                date_time: args.end,
                time_zone: args.time_zone,
            },
            description: args.description,
            location: args.location,
            attendees: args
                .attendees
                .into_iter()
                .map(|email| Attendee {
                    email,
                    display_name: None,
                    response_status: None,
                })
                .collect(),
            calendar_id: None,
        }
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct CreateCalendarEventTool {
    pub function: Function<CreateCalendarEventProps>,
}

#[async_trait]
impl ToolCall for CreateCalendarEventTool {
    async fn call(&self, gateway: &Gateway, args: Value) -> Result<Value> {
        let args: CreateCalendarEventArgs = parse_args(args)?;
        to_output(calendar::create_event(gateway, args.into()).await?)
    }

    fn function_name(&self) -> String {
        self.function.name.clone()
    }
}

impl CreateCalendarEventTool {
    pub fn new() -> Self {
        let function = Function {
            name: String::from("create_calendar_event"),
            description: String::from("Create an event on the Google Calendar."),
            input_schema: Parameters::object(
                CreateCalendarEventProps {
                    summary: Property::string("Title of the event."),
                    start: Property::string("Start of the event as an RFC 3339 timestamp."),
                    end: Property::string("End of the event as an RFC 3339 timestamp."),
                    time_zone: Property::string(
                        "IANA time zone for the event, for example America/New_York.",
                    ),
                    description: Property::string("Longer description of the event."),
                    location: Property::string("Where the event takes place."),
                    attendees: Property::string_array(
                        "People to invite.",
                        "Email address of an attendee.",
                    ),
                },
                &["summary", "start", "end"],
            ),
        };
        Self { function }
    }
}

impl Default for CreateCalendarEventTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct CheckAvailabilityProps {
    pub date: Property,
    pub start_time: Property,
    pub duration_minutes: Property,
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct CheckAvailabilityTool {
    pub function: Function<CheckAvailabilityProps>,
}

#[async_trait]
impl ToolCall for CheckAvailabilityTool {
    async fn call(&self, gateway: &Gateway, args: Value) -> Result<Value> {
        let req: AvailabilityRequest = parse_args(args)?;
        to_output(availability::check_availability(gateway, req).await?)
    }

    fn function_name(&self) -> String {
        self.function.name.clone()
    }
}

impl CheckAvailabilityTool {
    pub fn new() -> Self {
        let function = Function {
            name: String::from("check_availability"),
            description: String::from(
                "Check whether a time slot is free on the calendar. Times are in UTC.",
            ),
            input_schema: Parameters::object(
                CheckAvailabilityProps {
                    date: Property::string("Date of the slot as YYYY-MM-DD."),
                    start_time: Property::string("Start of the slot as HH:MM (24 hour)."),
                    duration_minutes: Property::integer(
                        "Length of the slot in minutes (default is 60).",
                    ),
                },
                &["date", "start_time"],
            ),
        };
        Self { function }
    }
}

impl Default for CheckAvailabilityTool {
    fn default() -> Self {
        Self::new()
    }
}

//! Google Calendar v3 events client

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::{Result, Service};
use crate::core::upstream::send_json;

/// Start or end of an event. Timed events use `dateTime`, all-day
/// events use `date`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventDateTime {
    pub fn at(instant: DateTime<Utc>, time_zone: Option<String>) -> Self {
        Self {
            date_time: Some(format_rfc3339(instant)),
            date: None,
            time_zone,
        }
    }

    /// Resolve to an instant. All-day dates resolve to midnight UTC.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        if let Some(date_time) = &self.date_time {
            return DateTime::parse_from_rfc3339(date_time)
                .ok()
                .map(|dt| dt.with_timezone(&Utc));
        }
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<String>,
}

/// Google's event resource. Only the fields the gateway reads are typed,
/// everything else is carried through untouched in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<EventDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<EventDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<Attendee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// The interval the event occupies. All-day events without an end
    /// are treated as lasting one day.
    pub fn interval(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.start.as_ref()?.instant()?;
        let end = match self.end.as_ref().and_then(EventDateTime::instant) {
            Some(end) => end,
            None if self.start.as_ref()?.date.is_some() => start + Duration::days(1),
            None => start,
        };
        Some((start, end))
    }

    /// Whether the event marks its time as busy
    pub fn is_busy(&self) -> bool {
        self.status.as_deref() != Some("cancelled")
            && self.transparency.as_deref() != Some("transparent")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventsListResponse {
    #[serde(default)]
    items: Vec<Event>,
    next_page_token: Option<String>,
}

/// Format an instant the way the Calendar API expects it
pub fn format_rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub struct CalendarClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl CalendarClient {
    pub fn new(client: Client, base_url: &str, access_token: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }

    fn events_url(&self, calendar_id: &str) -> String {
        format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(calendar_id)
        )
    }

    /// List events overlapping `[time_min, time_max)`, expanding
    /// recurring events and following every page.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Result<Vec<Event>> {
        let url = self.events_url(calendar_id);
        let time_min = format_rfc3339(time_min);
        let time_max = format_rfc3339(time_max);

        let mut events = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut query: Vec<(&str, &str)> = vec![
                ("timeMin", time_min.as_str()),
                ("timeMax", time_max.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
            ];
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }

            let request = self
                .client
                .get(&url)
                .bearer_auth(&self.access_token)
                .query(&query);
            let page: EventsListResponse = send_json(Service::GoogleCalendar, request).await?;
            events.extend(page.items);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        tracing::debug!("Fetched {} events from {}", events.len(), calendar_id);
        Ok(events)
    }

    #[tracing::instrument(skip(self, event), level = "debug")]
    pub async fn create_event(&self, calendar_id: &str, event: &Event) -> Result<Event> {
        let request = self
            .client
            .post(self.events_url(calendar_id))
            .bearer_auth(&self.access_token)
            .json(event);
        let created: Event = send_json(Service::GoogleCalendar, request).await?;
        tracing::info!("Created event {:?} in {}", created.id, calendar_id);
        Ok(created)
    }
}

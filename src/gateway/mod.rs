//! Gateway operations shared by the REST routes and the MCP tools.
//! Each operation validates its input, looks up the credentials it
//! needs and makes the upstream calls.

pub mod availability;
pub mod calendar;
pub mod contacts;
pub mod records;
pub mod reminders;
pub mod tasks;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::airtable::AirtableClient;
use crate::core::error::{GatewayError, Result};
use crate::core::upstream::build_client;
use crate::core::AppConfig;
use crate::google::CalendarClient;

pub struct Gateway {
    config: AppConfig,
    http: reqwest::Client,
}

impl Gateway {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let http = build_client(config.upstream_timeout)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Calendar client for the configured token
    pub fn calendar(&self) -> Result<CalendarClient> {
        let token = self.config.google_token()?;
        Ok(CalendarClient::new(
            self.http.clone(),
            &self.config.google_calendar_api_url,
            token,
        ))
    }

    /// Airtable client for the configured key and base
    pub fn airtable(&self) -> Result<AirtableClient> {
        let (api_key, base_id) = self.config.airtable_credentials()?;
        Ok(AirtableClient::new(
            self.http.clone(),
            &self.config.airtable_api_url,
            api_key,
            base_id,
        ))
    }

    fn calendar_id(&self, requested: Option<String>) -> String {
        requested
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| self.config.google_calendar_id.clone())
    }
}

/// Parse a timestamp supplied by a caller. Accepts RFC 3339, or a
/// timestamp or date without an offset which is taken as UTC.
pub(crate) fn parse_instant(field: &str, value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }
    Err(GatewayError::validation(format!(
        "{} must be an RFC 3339 timestamp, got '{}'",
        field, value
    )))
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(GatewayError::validation(format!("{} must not be empty", field)));
    }
    Ok(value.to_string())
}

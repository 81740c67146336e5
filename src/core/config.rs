use std::env;
use std::time::Duration;

use anyhow::{Result, anyhow};

use super::error::GatewayError;

pub const GOOGLE_CALENDAR_API_URL: &str = "https://www.googleapis.com/calendar/v3";
pub const AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub google_calendar_token: Option<String>,
    pub google_calendar_id: String,
    pub google_calendar_api_url: String,
    pub airtable_api_key: Option<String>,
    pub airtable_base_id: Option<String>,
    pub airtable_api_url: String,
    pub airtable_tasks_table: String,
    pub airtable_contacts_table: String,
    pub reminder_time_zone: String,
    pub upstream_timeout: Duration,
}

impl AppConfig {
    /// Load the config from the process environment. Credentials are
    /// optional here; routes that need one fail when it is missing.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values are treated the same as unset ones
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let upstream_timeout = match var("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| anyhow!("Invalid UPSTREAM_TIMEOUT_SECS: {}", raw))?;
                if secs == 0 {
                    return Err(anyhow!("UPSTREAM_TIMEOUT_SECS must be greater than 0"));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Self {
            google_calendar_token: var("GOOGLE_CALENDAR_TOKEN"),
            google_calendar_id: var("GOOGLE_CALENDAR_ID").unwrap_or_else(|| "primary".to_string()),
            google_calendar_api_url: var("GOOGLE_CALENDAR_API_URL")
                .unwrap_or_else(|| GOOGLE_CALENDAR_API_URL.to_string()),
            airtable_api_key: var("AIRTABLE_API_KEY"),
            airtable_base_id: var("AIRTABLE_BASE_ID"),
            airtable_api_url: var("AIRTABLE_API_URL")
                .unwrap_or_else(|| AIRTABLE_API_URL.to_string()),
            airtable_tasks_table: var("AIRTABLE_TASKS_TABLE").unwrap_or_else(|| "Tasks".to_string()),
            airtable_contacts_table: var("AIRTABLE_CONTACTS_TABLE")
                .unwrap_or_else(|| "Contacts".to_string()),
            reminder_time_zone: var("REMINDER_TIME_ZONE")
                .unwrap_or_else(|| "America/New_York".to_string()),
            upstream_timeout,
        })
    }

    pub fn google_token(&self) -> Result<&str, GatewayError> {
        self.google_calendar_token
            .as_deref()
            .ok_or_else(|| GatewayError::missing_credential("GOOGLE_CALENDAR_TOKEN"))
    }

    /// Airtable needs both the key and the base id
    pub fn airtable_credentials(&self) -> Result<(&str, &str), GatewayError> {
        let api_key = self
            .airtable_api_key
            .as_deref()
            .ok_or_else(|| GatewayError::missing_credential("AIRTABLE_API_KEY"))?;
        let base_id = self
            .airtable_base_id
            .as_deref()
            .ok_or_else(|| GatewayError::missing_credential("AIRTABLE_BASE_ID"))?;
        Ok((api_key, base_id))
    }
}

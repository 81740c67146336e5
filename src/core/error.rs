//! Error taxonomy shared by the REST routes and the MCP tools

use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Which upstream API an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    GoogleCalendar,
    Airtable,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::GoogleCalendar => "google_calendar",
            Service::Airtable => "airtable",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-2xx from an upstream, or a transport failure when `status`
    /// is `None`
    #[error("{service} error: {message}")]
    Upstream {
        service: Service,
        status: Option<u16>,
        message: String,
    },

    #[error("{service} did not respond in time")]
    Timeout { service: Service },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl GatewayError {
    pub fn missing_credential(var: &str) -> Self {
        Self::Authentication(format!("Missing env var {}", var))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Machine readable code included in every error response
    pub fn code(&self) -> &'static str {
        match self {
            Self::Authentication(_) => "authentication_error",
            Self::Validation(_) => "validation_error",
            Self::Upstream { .. } => "upstream_error",
            Self::Timeout { .. } => "timeout_error",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            // Keep the upstream status when it is an error status
            Self::Upstream { status, .. } => status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn service(&self) -> Option<Service> {
        match self {
            Self::Upstream { service, .. } | Self::Timeout { service } => Some(*service),
            _ => None,
        }
    }

    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}

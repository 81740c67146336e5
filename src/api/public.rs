//! Public API types

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::QueryRejection;
use serde_json::json;

use crate::core::error::GatewayError;

// Errors

pub struct ApiError(GatewayError);

/// Convert `ApiError` into an Axum compatible response with a JSON
/// body of `{"error": {"code", "message", ...}}`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = err.status_code();

        // Always log the error
        if status.is_server_error() {
            tracing::error!("{}", err);
        } else {
            tracing::warn!("{}", err);
        }

        let mut body = json!({
            "code": err.code(),
            "message": err.to_string(),
        });
        if let Some(service) = err.service() {
            body["service"] = json!(service.as_str());
        }
        if let Some(upstream_status) = err.upstream_status() {
            body["upstream_status"] = json!(upstream_status);
        }

        (status, Json(json!({ "error": body }))).into_response()
    }
}

/// Enables using `?` on anything that converts into a `GatewayError`
impl<E> From<E> for ApiError
where
    E: Into<GatewayError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        GatewayError::Validation(rejection.to_string())
    }
}

// Extractors that reject with the JSON error body instead of axum's
// plain text one

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum_extra::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);

// Re-export public types from each route

pub mod airtable {
    pub use crate::api::routes::airtable::public::*;
}

pub mod calendar {
    pub use crate::api::routes::calendar::public::*;
}

pub mod contacts {
    pub use crate::api::routes::contacts::public::*;
}

pub mod health {
    pub use crate::api::routes::health::public::*;
}

pub mod reminders {
    pub use crate::api::routes::reminders::public::*;
}

pub mod tasks {
    pub use crate::api::routes::tasks::public::*;
}

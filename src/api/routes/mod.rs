//! API routes module

pub mod airtable;
pub mod calendar;
pub mod contacts;
pub mod health;
mod mcp;
pub mod reminders;
pub mod tasks;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Liveness and banner routes
        .merge(health::router())
        // Calendar routes
        .nest("/calendar", calendar::router())
        // Task routes
        .nest("/tasks", tasks::router())
        // Contact routes
        .nest("/contacts", contacts::router())
        // Reminder routes
        .nest("/reminders", reminders::router())
        // Generic Airtable record routes
        .nest("/airtable", airtable::router())
        // MCP tool calling
        .nest("/mcp", mcp::router())
}

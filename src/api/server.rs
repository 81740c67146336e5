use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::routes;
use crate::api::state::{AppState, SharedState};
use crate::core::AppConfig;

pub fn app(shared_state: SharedState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(shared_state)
}

fn init_tracing() {
    // Ignore the error when a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format! {
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                }
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutting down");
}

// Run the server
pub async fn serve(host: String, port: u16, config: AppConfig) -> anyhow::Result<()> {
    init_tracing();

    if config.google_calendar_token.is_none() {
        tracing::warn!("GOOGLE_CALENDAR_TOKEN is not set, calendar routes will return 401");
    }
    if config.airtable_api_key.is_none() || config.airtable_base_id.is_none() {
        tracing::warn!("Airtable credentials are not set, Airtable routes will return 401");
    }

    let shared_state = Arc::new(AppState::new(config)?);
    let app = app(Arc::clone(&shared_state));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server started. Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

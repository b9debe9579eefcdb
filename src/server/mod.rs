//! HTTP server for meeting-assistant
//!
//! Exposes the liveness route and transcript extraction over axum.

mod routes;

pub use routes::{build_router, AppState, HEALTH_MESSAGE};

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Settings;
use crate::llm::{build_extractor, MeetingExtractor};

/// Bind the configured address and serve until Ctrl-C.
///
/// A missing API key does not stop the server; extraction requests then
/// answer 503 while the health check keeps working.
pub async fn run(settings: &Settings) -> Result<()> {
    let extractor: Option<Arc<dyn MeetingExtractor>> = match build_extractor(settings) {
        Ok(extractor) => Some(Arc::from(extractor)),
        Err(e) => {
            warn!("Extraction disabled: {}", e);
            None
        }
    };

    let app = build_router(AppState { extractor });

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

//! HTTP server exposing the contacts API.
//!
//! Routes:
//! - `GET /api/contacts` list, newest first
//! - `POST /api/contacts` create
//! - `DELETE /api/contacts/:id` delete

pub mod handlers;
mod middleware;
mod response;

use crate::services::ContactService;
use anyhow::Result;
use axum::http::HeaderValue;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{delete, get};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Base path of the contacts resource.
pub const CONTACTS_PATH: &str = "/api/contacts";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub(crate) service: Arc<dyn ContactService>,
    pub(crate) cors_origin: Option<HeaderValue>,
}

impl AppState {
    /// Build state around `service`, allowing `frontend_origin` cross-origin.
    ///
    /// An origin that is not a valid header value disables CORS headers.
    pub fn new(service: Arc<dyn ContactService>, frontend_origin: &str) -> Self {
        let cors_origin = match HeaderValue::from_str(frontend_origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring CORS origin {:?}: {}", frontend_origin, e);
                None
            }
        };
        Self {
            service,
            cors_origin,
        }
    }
}

/// Assemble the router with CORS and request tracing applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            CONTACTS_PATH,
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            &format!("{}/:id", CONTACTS_PATH),
            delete(handlers::delete_contact),
        )
        .layer(from_fn_with_state(state.clone(), middleware::cors_middleware))
        .layer(from_fn(middleware::request_tracing_middleware))
        .with_state(state)
}

/// Serve the API on `listener` until Ctrl-C is received.
pub async fn run_server(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}

//! REST API server for contacts.
//!
//! Routes:
//! - `GET /` health check
//! - `GET /api/contacts` list, newest first
//! - `POST /api/contacts` create
//! - `DELETE /api/contacts/:id` delete

mod handlers;
mod middleware;
mod response;

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use crate::repositories::ContactRepository;
use crate::services::{ContactService, ContactServiceImpl};
use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{delete, get};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactService>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>) -> Self {
        Self { contacts }
    }

    /// State backed by the default service over `repository`.
    pub fn from_repository(repository: Arc<dyn ContactRepository>) -> Self {
        Self::new(Arc::new(ContactServiceImpl::new(repository)))
    }
}

/// CORS policy admitting the browser client at `client_url`.
fn cors_layer(client_url: &str) -> ConfigResult<CorsLayer> {
    let origin = HeaderValue::from_str(client_url).map_err(|e| ConfigError::InvalidValue {
        var: "CLIENT_URL".to_string(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Build the application router.
pub fn build_router(state: AppState, client_url: &str) -> ConfigResult<Router> {
    let router = Router::new()
        .route("/", get(handlers::health))
        .route(
            "/api/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route("/api/contacts/:id", delete(handlers::delete_contact))
        .fallback(handlers::route_not_found)
        .layer(axum::middleware::from_fn(
            middleware::request_tracing_middleware,
        ))
        .layer(cors_layer(client_url)?)
        .with_state(state);

    Ok(router)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Serve the API until Ctrl-C.
pub async fn run_server(config: &Config, state: AppState) -> Result<()> {
    let app = build_router(state, &config.client_url)?;
    let listener = TcpListener::bind(config.socket_addr()?).await?;
    info!("Contact API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

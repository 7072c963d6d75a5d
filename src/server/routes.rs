//! Axum route handlers for the lettura HTTP server.
//!
//! # Routes
//!
//! - `GET  /health` — Returns `{"status": "ok", ...}`
//! - `POST /chat`   — One conversational turn (see `chat::handler`)

use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::chat::{chat_handler, CompanionConfig, CompletionClient, ContextStore, InMemoryContextStore};
use crate::utilities::errors::CompanionError;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Read path into the persistence layer.
    pub context_store: Arc<dyn ContextStore>,
    /// Client for the external completion service.
    pub completion: Arc<CompletionClient>,
}

impl AppState {
    /// State with the in-memory context store.
    pub fn new(config: &CompanionConfig) -> Result<Self, CompanionError> {
        Ok(Self {
            context_store: Arc::new(InMemoryContextStore::new()),
            completion: Arc::new(CompletionClient::new(config)?),
        })
    }

    /// State with a caller-provided context store.
    pub fn with_store(
        config: &CompanionConfig,
        store: Arc<dyn ContextStore>,
    ) -> Result<Self, CompanionError> {
        Ok(Self {
            context_store: store,
            completion: Arc::new(CompletionClient::new(config)?),
        })
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "lettura",
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

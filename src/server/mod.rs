//! HTTP server for the reading-companion boundary.
//!
//! # Endpoints
//!
//! - `GET  /health` — Liveness probe
//! - `POST /chat`   — One conversational turn

pub mod routes;

pub use routes::{app_router, AppState};

//! lettura HTTP server binary.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `LETTURA_API_KEY` — Completion provider API key (or `OPENAI_API_KEY`)
//! - `LETTURA_BASE_URL` — Provider base URL (default: OpenAI)
//! - `LETTURA_MODEL` — Model name (default: gpt-4o-mini)
//! - `LETTURA_TIMEOUT_SECS` — Per-request timeout (default: 30)
//! - `RUST_LOG` — Tracing filter (default: "info")

use lettura::chat::CompanionConfig;
use lettura::server::{app_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lettura=debug".into()),
        )
        .init();

    let config = CompanionConfig::from_env()?;
    let state = AppState::new(&config)?;
    let app = app_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);

    tracing::info!("lettura server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health — liveness probe");
    tracing::info!("  POST /chat   — one conversational turn");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

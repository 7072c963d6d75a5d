//! Chat handler — POST /chat endpoint implementation.
//!
//! The per-turn pipeline:
//! 1. Pick the last user message from the history
//! 2. Orchestrate it (intent, stance weights, variants, safety flag)
//! 3. Resolve the user-context snapshot and the current book
//! 4. Assemble the persona block and the per-turn block
//! 5. Call the completion service
//! 6. Return the reply plus orchestration metadata

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::chat::completion::ChatMessage;
use crate::orchestration::{orchestrate, OrchestrationResult};
use crate::prompt::{build_turn_prompt, persona_prompt};
use crate::server::routes::AppState;
use crate::utilities::errors::CompanionError;

// ============================================================================
// Request / Response types
// ============================================================================

/// Incoming chat request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// Turn history, oldest first. The last "user" entry drives orchestration.
    pub messages: Vec<ChatMessage>,
    /// Owner of the library context.
    pub user_id: String,
    /// Session identifier; a fresh one is minted when absent.
    pub session_id: Option<String>,
    /// Book currently open in the UI, if any.
    pub current_book_id: Option<String>,
}

/// Chat response with orchestration metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// The companion's reply text.
    pub reply: String,
    /// Session identifier (echoed or minted).
    pub session_id: String,
    /// The policy bundle that shaped this turn.
    pub orchestration: OrchestrationResult,
}

// ============================================================================
// Handler
// ============================================================================

/// POST /chat — process one turn through the orchestration pipeline.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<Value>)> {
    // An empty history still orchestrates: the empty message resolves to
    // the reflection defaults rather than an error.
    let last_user_message = request
        .messages
        .iter()
        .rev()
        .find(|m| m.role == "user")
        .map(|m| m.content.clone())
        .unwrap_or_default();

    let result = orchestrate(&last_user_message);
    tracing::debug!(
        intent = %result.intent,
        safety = result.safety_flag,
        "turn orchestrated"
    );

    let context = state
        .context_store
        .user_context(&request.user_id)
        .await
        .map_err(internal_error)?;

    let current_book = match &request.current_book_id {
        Some(book_id) => state
            .context_store
            .current_book(&request.user_id, book_id)
            .await
            .map_err(internal_error)?,
        None => None,
    };

    let turn_prompt = build_turn_prompt(&result, &context, current_book.as_ref());

    let reply = state
        .completion
        .complete(persona_prompt(), &turn_prompt, &request.messages)
        .await
        .map_err(|e| {
            tracing::warn!("completion service failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        })?;

    let session_id = request
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Ok(Json(ChatResponse {
        reply,
        session_id,
        orchestration: result,
    }))
}

fn internal_error(e: CompanionError) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": e.to_string() })),
    )
}

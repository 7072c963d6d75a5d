//! Chat module — POST /chat boundary around the orchestration core.
//!
//! ```text
//! ChatRequest (history + user id + optional current book)
//!   → orchestrate(last user message)
//!   → ContextStore snapshot
//!   → persona block + per-turn block
//!   → CompletionClient
//!   → ChatResponse (reply + orchestration metadata)
//! ```

pub mod completion;
pub mod config;
pub mod context_store;
pub mod handler;

pub use completion::{ChatMessage, CompletionClient};
pub use config::CompanionConfig;
pub use context_store::{ContextStore, InMemoryContextStore};
pub use handler::{chat_handler, ChatRequest, ChatResponse};

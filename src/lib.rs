//! # lettura
//!
//! Conversational orchestration core for a reading-companion assistant.
//!
//! A single free-text user message is turned into a deterministic policy
//! bundle — intent, stance weights, response-style variants, safety flag —
//! which then shapes the prompt handed to an external completion service:
//!
//! ```text
//! user message
//!   → orchestration (intent + weights + variants + safety)
//!   → prompt assembly (persona block + per-turn block)
//!   → completion service
//! ```
//!
//! The core (`orchestration`, `persona`) is pure and total: no I/O, no
//! state, no error paths. The boundary (`chat`, `server`) wraps it in an
//! HTTP service with a context read path and a completion client.

pub mod chat;
pub mod orchestration;
pub mod persona;
pub mod prompt;
pub mod server;
pub mod utilities;

pub use orchestration::{classify_intent, detect_safety, orchestrate, Intent, OrchestrationResult};
pub use persona::{resolve_weights, FtVariant, IlVariant, RcVariant, Stance, StanceWeights};
pub use prompt::{build_turn_prompt, persona_prompt, CurrentBook, UserContext};

/// Library version.
pub const VERSION: &str = "0.3.1";

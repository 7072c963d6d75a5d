//! Error types for the companion boundary.
//!
//! The orchestration core itself is total and has no error states; these
//! variants cover the external collaborators around it (completion service,
//! context read path, configuration).

use thiserror::Error;

/// Errors surfaced by the boundary layers.
#[derive(Debug, Error)]
pub enum CompanionError {
    /// Completion service unreachable or the response could not be read.
    #[error("completion service error: {message}")]
    Completion { message: String },

    /// Completion service replied with a non-success status.
    #[error("completion service returned {status}: {body}")]
    CompletionStatus { status: u16, body: String },

    /// Context read path failure.
    #[error("context store error: {message}")]
    Context { message: String },

    /// Invalid or missing configuration.
    #[error("configuration error: {message}")]
    Config { message: String },
}

//! Prompt assembly — the sole consumer of an [`OrchestrationResult`].
//!
//! Turns the per-turn policy bundle plus the user-context snapshot into the
//! two text blocks handed verbatim to the completion service: the stable
//! persona block and the per-turn instruction block.
//!
//! [`OrchestrationResult`]: crate::orchestration::OrchestrationResult

pub mod assembler;
pub mod context;

pub use assembler::{build_turn_prompt, persona_prompt};
pub use context::{
    BookSnapshot, ConversationSummary, CurrentBook, EmotionalCheckIn, ProfileAxis, ReadingStatus,
    SavedQuote, UserContext,
};

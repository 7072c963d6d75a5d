//! Read-only context snapshots fetched from the persistence layer.
//!
//! These are external inputs to the prompt assembler, resolved by the
//! request handler before orchestration. The core never writes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recent emotional check-in recorded by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalCheckIn {
    /// Mood label as entered (e.g. "sereno", "stanco").
    pub mood: String,
    /// Optional free-text note.
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// A quote the user saved from a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQuote {
    pub text: String,
    pub book_title: Option<String>,
    pub saved_at: DateTime<Utc>,
}

/// Reading state of a library entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    Reading,
    Finished,
    Abandoned,
}

/// An in-progress or recently-read book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub title: String,
    pub author: Option<String>,
    pub status: ReadingStatus,
    /// 0–100 when known.
    pub progress_percent: Option<u8>,
}

/// One axis of the user's thematic profile (e.g. "introspezione" = 0.8).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAxis {
    pub axis: String,
    pub value: f32,
}

/// Summary of a past conversation, kept instead of the raw transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

/// The full user-context snapshot handed to the prompt assembler.
///
/// Any section may be empty; empty sections are omitted from the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    pub check_ins: Vec<EmotionalCheckIn>,
    pub quotes: Vec<SavedQuote>,
    pub books: Vec<BookSnapshot>,
    pub axes: Vec<ProfileAxis>,
    pub summaries: Vec<ConversationSummary>,
}

/// The book currently open in the UI, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentBook {
    pub title: String,
    pub author: Option<String>,
    /// 0–100 when known.
    pub progress_percent: Option<u8>,
}

//! Crisis vocabulary scan, independent of intent routing.
//!
//! A plain case-insensitive substring containment test, deliberately
//! without word boundaries: broad recall is the point, false positives are
//! acceptable and false negatives are not. The flag is computed on every
//! turn alongside classification and is never gated by it.
//!
//! This keyword list and the crisis regex list in `intent.rs` are
//! maintained separately and can disagree: the regexes route the turn,
//! the keywords arm the safety protocol in the prompt.

const CRISIS_KEYWORDS: &[&str] = &[
    "suicid",
    "farla finita",
    "non voglio più vivere",
    "non voglio piu vivere",
    "farmi del male",
    "togliermi la vita",
    "ammazzarmi",
    "autolesion",
    "tagliarmi",
];

/// Returns true if the lowercased message contains any crisis keyword.
///
/// Total over all strings; never errors.
pub fn detect_safety(message: &str) -> bool {
    let lowered = message.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

// ============================================================================
// Tests
// ============================================================================

//! Intent classification using ordered regex cascades.
//!
//! Every user turn is assigned exactly one [`Intent`]. Classification is
//! first-match-wins over fixed pattern lists (designed for Italian), with
//! one structural exception: crisis phrasing is checked in a separate pass
//! before the general cascade, so a message that matches both a crisis
//! phrase and, say, a library-update phrase still resolves to
//! `CrisisOverwhelm`.
//!
//! Pattern tables are compiled-in policy data. No runtime registration,
//! no mutation.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The conversational purpose of a single user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// The user reports something about their library (finished a book,
    /// rating, progress, additions).
    LibraryUpdate,
    /// The user wants help choosing what to read.
    Recommendation,
    /// The user wants to talk about a specific book's content.
    BookDiscussion,
    /// The user talks about themselves, their mood, their life.
    PersonalReflection,
    /// Crisis or overwhelm phrasing. Hard priority over everything else.
    CrisisOverwhelm,
    /// Questions about the companion itself.
    Meta,
    /// Extension point — no patterns route here yet.
    CasualDialogue,
}

impl Intent {
    /// Wire/label name matching the serde representation.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::LibraryUpdate => "library_update",
            Intent::Recommendation => "recommendation",
            Intent::BookDiscussion => "book_discussion",
            Intent::PersonalReflection => "personal_reflection",
            Intent::CrisisOverwhelm => "crisis_overwhelm",
            Intent::Meta => "meta",
            Intent::CasualDialogue => "casual_dialogue",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// Crisis routing patterns — checked before the general cascade.
///
/// Broader than the keyword list in `safety.rs`: overwhelm phrasing routes
/// here too, even when no literal crisis keyword is present.
static CRISIS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)non voglio più vivere",
        r"(?i)farla finita",
        r"(?i)\bsuicid",
        r"(?i)farmi del male",
        r"(?i)togliermi la vita",
        r"(?i)\bautolesion",
        r"(?i)non ce la faccio più",
        r"(?i)sono sopraffatt",
        r"(?i)sto crollando",
        r"(?i)è troppo per me",
    ])
});

/// General intent cascade, evaluated top-to-bottom after the crisis pass.
static INTENT_CASCADE: Lazy<Vec<(Intent, Vec<Regex>)>> = Lazy::new(|| {
    vec![
        (
            Intent::LibraryUpdate,
            compile(&[
                r"(?i)ho (appena )?finito di leggere",
                r"(?i)ho (appena )?iniziato (a leggere|un libro)",
                r"(?i)sto leggendo",
                r"(?i)ho letto\b",
                r"(?i)da(gli|lle|i) un voto",
                r"(?i)voto di \d",
                r"(?i)aggiungi(lo)? (alla|in) (libreria|lista|wishlist)",
                r"(?i)segna(lo)? come (letto|finito|abbandonato)",
                r"(?i)sono a pagina \d+",
                r"(?i)l'ho abbandonato",
            ]),
        ),
        (
            Intent::Recommendation,
            compile(&[
                r"(?i)cosa (potrei |posso |dovrei )?leggere",
                r"(?i)consigliami",
                r"(?i)mi consigli\b",
                r"(?i)suggerisci",
                r"(?i)che libro mi",
                r"(?i)prossima lettura",
                r"(?i)qualcosa (di simile|del genere)",
            ]),
        ),
        (
            Intent::BookDiscussion,
            compile(&[
                r"(?i)questo libro",
                r"(?i)\bfinale\b",
                r"(?i)\bfinisce\b",
                r"(?i)come va a finire",
                r"(?i)\bprotagonista\b",
                r"(?i)\bpersonaggi",
                r"(?i)\btrama\b",
                r"(?i)l'autore|l'autrice",
                r"(?i)cosa significa",
                r"(?i)\bcapitolo\b",
            ]),
        ),
        (
            Intent::PersonalReflection,
            compile(&[
                r"(?i)mi sento",
                r"(?i)sono (triste|stanc|felice|ansios|giù|nervos|confus)",
                r"(?i)\bultimamente\b",
                r"(?i)penso che\b",
                r"(?i)sto pensando",
                r"(?i)(nella|della) mia vita",
                r"(?i)sto attraversando",
            ]),
        ),
        (
            Intent::Meta,
            compile(&[
                r"(?i)chi sei",
                r"(?i)come funzioni",
                r"(?i)cosa (sai|puoi) fare",
                r"(?i)come ti chiami",
                r"(?i)sei un('|a )?(ia|intelligenza artificiale|bot|robot)",
            ]),
        ),
    ]
});

/// Classify a single free-text message into exactly one [`Intent`].
///
/// Total over all strings: empty input, non-Italian text and emoji all
/// resolve to the reflection default rather than an error.
pub fn classify_intent(message: &str) -> Intent {
    // Hard priority override: crisis phrasing wins regardless of any other
    // content in the message. Kept outside the general cascade on purpose.
    if CRISIS_PATTERNS.iter().any(|re| re.is_match(message)) {
        return Intent::CrisisOverwhelm;
    }

    for (intent, patterns) in INTENT_CASCADE.iter() {
        if patterns.iter().any(|re| re.is_match(message)) {
            return *intent;
        }
    }

    // The safest fallback for an introspective reading companion.
    Intent::PersonalReflection
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_update_detection() {
        assert_eq!(
            classify_intent("Ho finito di leggere Dune, dagli un voto di 9"),
            Intent::LibraryUpdate
        );
        assert_eq!(
            classify_intent("Sto leggendo Il nome della rosa"),
            Intent::LibraryUpdate
        );
        assert_eq!(classify_intent("Sono a pagina 120"), Intent::LibraryUpdate);
    }

    #[test]
    fn test_recommendation_detection() {
        assert_eq!(
            classify_intent("Non so cosa leggere, sono bloccato"),
            Intent::Recommendation
        );
        assert_eq!(
            classify_intent("Consigliami un romanzo breve"),
            Intent::Recommendation
        );
    }

    #[test]
    fn test_book_discussion_detection() {
        assert_eq!(
            classify_intent("Perché finisce così questo libro?"),
            Intent::BookDiscussion
        );
        assert_eq!(
            classify_intent("Il protagonista mi sembra piatto"),
            Intent::BookDiscussion
        );
    }

    #[test]
    fn test_reflection_detection_and_default() {
        assert_eq!(
            classify_intent("Ultimamente dormo poco"),
            Intent::PersonalReflection
        );
        // No pattern matches at all → reflection default, not an error.
        assert_eq!(classify_intent(""), Intent::PersonalReflection);
        assert_eq!(classify_intent("xyzzy 🌒"), Intent::PersonalReflection);
    }

    #[test]
    fn test_meta_detection() {
        assert_eq!(classify_intent("Chi sei esattamente?"), Intent::Meta);
        assert_eq!(classify_intent("Come funzioni?"), Intent::Meta);
    }

    #[test]
    fn test_crisis_overrides_other_intents() {
        // Matches both a crisis phrase and a library-update phrase:
        // the crisis pass runs first and wins.
        assert_eq!(
            classify_intent("Ho finito di leggere ma non ce la faccio più"),
            Intent::CrisisOverwhelm
        );
        assert_eq!(
            classify_intent("Non voglio più vivere, mi sento a pezzi"),
            Intent::CrisisOverwhelm
        );
    }

    #[test]
    fn test_cascade_order_is_fixed() {
        let order: Vec<Intent> = INTENT_CASCADE.iter().map(|(i, _)| *i).collect();
        assert_eq!(
            order,
            vec![
                Intent::LibraryUpdate,
                Intent::Recommendation,
                Intent::BookDiscussion,
                Intent::PersonalReflection,
                Intent::Meta,
            ]
        );
    }

    #[test]
    fn test_labels_match_serde_names() {
        let json = serde_json::to_string(&Intent::LibraryUpdate).unwrap();
        assert_eq!(json, "\"library_update\"");
        assert_eq!(Intent::CrisisOverwhelm.label(), "crisis_overwhelm");
    }
}

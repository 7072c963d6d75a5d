//! Stance blending — the three persona facets of the companion.
//!
//! Every reply blends three stances:
//!
//! | Stance            | Role                                        |
//! |-------------------|---------------------------------------------|
//! | FriendTrust       | Warm, concrete, decision-oriented           |
//! | ReflectiveCoach   | Mirrors patterns, asks grounded questions   |
//! | InfiniteLibrarian | Knows the shelves, maps themes and paths    |
//!
//! The blend is a fixed weight triple per intent. The numbers are tuning
//! constants stated verbatim in the per-turn prompt as descriptive hints to
//! the language model — they are not a probability distribution and are
//! never renormalized.

use serde::{Deserialize, Serialize};

use crate::orchestration::Intent;

/// The three persona facets blended in every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// Warm, concrete, decision-oriented friend.
    FriendTrust,
    /// Mirrors recurring patterns, proposes small experiments.
    ReflectiveCoach,
    /// Thematic guide across the user's whole library.
    InfiniteLibrarian,
}

impl Stance {
    /// All three stances in canonical order.
    pub const ALL: [Stance; 3] = [
        Stance::FriendTrust,
        Stance::ReflectiveCoach,
        Stance::InfiniteLibrarian,
    ];

    /// Human-readable name used in prompt text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Stance::FriendTrust => "FriendTrust",
            Stance::ReflectiveCoach => "ReflectiveCoach",
            Stance::InfiniteLibrarian => "InfiniteLibrarian",
        }
    }
}

/// Relative emphasis of the three stances for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StanceWeights {
    /// FriendTrust emphasis.
    pub ft: f32,
    /// ReflectiveCoach emphasis.
    pub rc: f32,
    /// InfiniteLibrarian emphasis.
    pub il: f32,
}

impl StanceWeights {
    const fn new(ft: f32, rc: f32, il: f32) -> Self {
        Self { ft, rc, il }
    }

    /// Weights as an array `[ft, rc, il]` in canonical stance order.
    pub fn as_array(&self) -> [f32; 3] {
        [self.ft, self.rc, self.il]
    }

    /// The stance with the highest weight (ties resolve in canonical order).
    pub fn dominant(&self) -> Stance {
        if self.ft >= self.rc && self.ft >= self.il {
            Stance::FriendTrust
        } else if self.rc >= self.il {
            Stance::ReflectiveCoach
        } else {
            Stance::InfiniteLibrarian
        }
    }
}

/// Fixed weight row for each intent. Pure table lookup, no computation.
pub fn resolve_weights(intent: Intent) -> StanceWeights {
    match intent {
        Intent::LibraryUpdate => StanceWeights::new(0.7, 0.1, 0.2),
        Intent::Recommendation => StanceWeights::new(0.2, 0.1, 0.7),
        Intent::BookDiscussion => StanceWeights::new(0.2, 0.2, 0.6),
        Intent::PersonalReflection => StanceWeights::new(0.3, 0.6, 0.1),
        Intent::CrisisOverwhelm => StanceWeights::new(0.8, 0.2, 0.0),
        Intent::Meta => StanceWeights::new(0.5, 0.2, 0.3),
        // Unused extension point — shares the reflection row until tuned.
        Intent::CasualDialogue => StanceWeights::new(0.3, 0.6, 0.1),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rows_exact_literals() {
        let expected = [
            (Intent::LibraryUpdate, StanceWeights::new(0.7, 0.1, 0.2)),
            (Intent::Recommendation, StanceWeights::new(0.2, 0.1, 0.7)),
            (Intent::BookDiscussion, StanceWeights::new(0.2, 0.2, 0.6)),
            (Intent::PersonalReflection, StanceWeights::new(0.3, 0.6, 0.1)),
            (Intent::CrisisOverwhelm, StanceWeights::new(0.8, 0.2, 0.0)),
            (Intent::Meta, StanceWeights::new(0.5, 0.2, 0.3)),
        ];
        for (intent, weights) in expected {
            assert_eq!(resolve_weights(intent), weights, "row for {}", intent);
        }
    }

    #[test]
    fn test_weights_non_negative() {
        for intent in [
            Intent::LibraryUpdate,
            Intent::Recommendation,
            Intent::BookDiscussion,
            Intent::PersonalReflection,
            Intent::CrisisOverwhelm,
            Intent::Meta,
            Intent::CasualDialogue,
        ] {
            for w in resolve_weights(intent).as_array() {
                assert!(w >= 0.0);
            }
        }
    }

    #[test]
    fn test_dominant_stance() {
        assert_eq!(
            resolve_weights(Intent::LibraryUpdate).dominant(),
            Stance::FriendTrust
        );
        assert_eq!(
            resolve_weights(Intent::PersonalReflection).dominant(),
            Stance::ReflectiveCoach
        );
        assert_eq!(
            resolve_weights(Intent::Recommendation).dominant(),
            Stance::InfiniteLibrarian
        );
    }
}

//! Per-turn response-shape variants, one per stance.
//!
//! Variants are orthogonal to the intent: all three are selected on every
//! turn from the raw message via ordered regex cues, each with a stable
//! default. Only the InfiniteLibrarian selector also consults the resolved
//! intent, as a fallback for recommendation turns.
//!
//! Each variant carries the instruction text that the prompt assembler
//! states verbatim in the per-turn block.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::orchestration::Intent;

// ============================================================================
// Variant enums
// ============================================================================

/// FriendTrust response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FtVariant {
    /// Cut through indecision with one clear pick.
    QuickDecision,
    /// Lay out the honest tradeoff. Default.
    Tradeoff,
    /// Propose the smallest concrete next step.
    MinimalPlan,
    /// Extension point — no cues route here yet.
    ConversationalHumility,
}

impl FtVariant {
    /// Instruction stated verbatim in the per-turn prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            FtVariant::QuickDecision => {
                "Taglia corto sull'indecisione: proponi una scelta netta e spiegala in una frase."
            }
            FtVariant::Tradeoff => {
                "Esponi con onestà il compromesso in gioco, senza girarci intorno."
            }
            FtVariant::MinimalPlan => {
                "Proponi il primo passo più piccolo possibile, fattibile già stasera."
            }
            FtVariant::ConversationalHumility => {
                "Ammetti apertamente quello che non sai e chiedi prima di assumere."
            }
        }
    }
}

/// ReflectiveCoach response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RcVariant {
    /// Surface a tension between what is said and what is done. Default.
    Contradiction,
    /// Place the pattern on a timeline of past check-ins.
    Timeline,
    /// Propose a small behavioral experiment.
    Experiment,
}

impl RcVariant {
    /// Instruction stated verbatim in the per-turn prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            RcVariant::Contradiction => {
                "Rifletti con delicatezza una tensione tra ciò che dice e ciò che fa."
            }
            RcVariant::Timeline => {
                "Colloca il pattern nel tempo: quando è iniziato, quando si ripete."
            }
            RcVariant::Experiment => {
                "Proponi un piccolo esperimento concreto da provare questa settimana."
            }
        }
    }
}

/// InfiniteLibrarian response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IlVariant {
    /// Read the message through a recurring theme. Default.
    Theme,
    /// Talk about how a book ends and what the ending does.
    Ending,
    /// Draw a parallel between books or authors.
    Comparison,
    /// Sketch an ordered reading path.
    ReadingPath,
}

impl IlVariant {
    /// Instruction stated verbatim in the per-turn prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            IlVariant::Theme => {
                "Collega il discorso a un tema ricorrente nelle sue letture."
            }
            IlVariant::Ending => {
                "Parla del finale: cosa fa, cosa lascia, perché è costruito così."
            }
            IlVariant::Comparison => {
                "Traccia un parallelo tra libri o autori che conosce già."
            }
            IlVariant::ReadingPath => {
                "Disegna un percorso di lettura ordinato, due o tre tappe al massimo."
            }
        }
    }
}

impl fmt::Display for FtVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FtVariant::QuickDecision => "quick_decision",
            FtVariant::Tradeoff => "tradeoff",
            FtVariant::MinimalPlan => "minimal_plan",
            FtVariant::ConversationalHumility => "conversational_humility",
        })
    }
}

impl fmt::Display for RcVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RcVariant::Contradiction => "contradiction",
            RcVariant::Timeline => "timeline",
            RcVariant::Experiment => "experiment",
        })
    }
}

impl fmt::Display for IlVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IlVariant::Theme => "theme",
            IlVariant::Ending => "ending",
            IlVariant::Comparison => "comparison",
            IlVariant::ReadingPath => "reading_path",
        })
    }
}

// ============================================================================
// Selection cues
// ============================================================================

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

static FT_QUICK_DECISION: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bbloccat",
        r"(?i)non so\b",
        r"(?i)non riesco a (decidere|scegliere)",
        r"(?i)\bindecis",
    ])
});

static FT_MINIMAL_PLAN: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)primo passo",
        r"(?i)da dove (inizio|comincio|parto)",
        r"(?i)\bstasera\b",
        r"(?i)\badesso\b",
        r"(?i)\bsubito\b",
    ])
});

static RC_TIMELINE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bsempre\b",
        r"(?i)di solito",
        r"(?i)ogni volta",
        r"(?i)\btendenza\b",
        r"(?i)\bschema\b",
        r"(?i)come al solito",
    ])
});

static RC_EXPERIMENT: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)cambiar",
        r"(?i)migliorar",
        r"(?i)\bprovare\b",
        r"(?i)\bprovo\b",
        r"(?i)esperiment",
    ])
});

static IL_ENDING: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bfinale\b",
        r"(?i)\bfinisce\b",
        r"(?i)come (va a )?finire",
    ])
});

static IL_COMPARISON: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)simile a",
        r"(?i)\bparagon",
        r"(?i)\bconfront",
        r"(?i)assomiglia",
        r"(?i)parallel",
    ])
});

static IL_READING_PATH: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bpercorso\b",
        r"(?i)in che ordine",
        r"(?i)piano di lettura",
        r"(?i)\bsequenza\b",
    ])
});

fn any_match(patterns: &[Regex], message: &str) -> bool {
    patterns.iter().any(|re| re.is_match(message))
}

// ============================================================================
// Selectors
// ============================================================================

/// Pick the FriendTrust variant for this turn.
pub fn select_ft_variant(message: &str) -> FtVariant {
    if any_match(&FT_QUICK_DECISION, message) {
        FtVariant::QuickDecision
    } else if any_match(&FT_MINIMAL_PLAN, message) {
        FtVariant::MinimalPlan
    } else {
        FtVariant::Tradeoff
    }
}

/// Pick the ReflectiveCoach variant for this turn.
pub fn select_rc_variant(message: &str) -> RcVariant {
    if any_match(&RC_TIMELINE, message) {
        RcVariant::Timeline
    } else if any_match(&RC_EXPERIMENT, message) {
        RcVariant::Experiment
    } else {
        RcVariant::Contradiction
    }
}

/// Pick the InfiniteLibrarian variant for this turn.
///
/// The only selector that also sees the resolved intent: a recommendation
/// turn without explicit cues falls back to a reading path rather than the
/// theme default.
pub fn select_il_variant(message: &str, intent: Intent) -> IlVariant {
    if any_match(&IL_ENDING, message) {
        IlVariant::Ending
    } else if any_match(&IL_COMPARISON, message) {
        IlVariant::Comparison
    } else if any_match(&IL_READING_PATH, message) {
        IlVariant::ReadingPath
    } else if intent == Intent::Recommendation {
        IlVariant::ReadingPath
    } else {
        IlVariant::Theme
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ft_quick_decision_cues() {
        assert_eq!(
            select_ft_variant("Non so cosa leggere, sono bloccato"),
            FtVariant::QuickDecision
        );
        assert_eq!(
            select_ft_variant("non riesco a decidere tra due romanzi"),
            FtVariant::QuickDecision
        );
    }

    #[test]
    fn test_ft_minimal_plan_cues() {
        assert_eq!(
            select_ft_variant("qual è il primo passo?"),
            FtVariant::MinimalPlan
        );
        assert_eq!(
            select_ft_variant("voglio iniziare stasera"),
            FtVariant::MinimalPlan
        );
    }

    #[test]
    fn test_ft_quick_decision_wins_over_minimal_plan() {
        // Both cue families present — quick decision is checked first.
        assert_eq!(
            select_ft_variant("sono bloccato, da dove inizio stasera?"),
            FtVariant::QuickDecision
        );
    }

    #[test]
    fn test_ft_default_tradeoff() {
        assert_eq!(select_ft_variant(""), FtVariant::Tradeoff);
        assert_eq!(
            select_ft_variant("Ho finito di leggere Dune, dagli un voto di 9"),
            FtVariant::Tradeoff
        );
    }

    #[test]
    fn test_rc_timeline_cues() {
        assert_eq!(select_rc_variant("mi capita sempre così"), RcVariant::Timeline);
        assert_eq!(select_rc_variant("ogni volta mollo a metà"), RcVariant::Timeline);
    }

    #[test]
    fn test_rc_experiment_and_default() {
        assert_eq!(
            select_rc_variant("vorrei migliorare la mia costanza"),
            RcVariant::Experiment
        );
        assert_eq!(select_rc_variant(""), RcVariant::Contradiction);
    }

    #[test]
    fn test_il_selection() {
        assert_eq!(
            select_il_variant("Perché finisce così questo libro?", Intent::BookDiscussion),
            IlVariant::Ending
        );
        assert_eq!(
            select_il_variant("è simile a Borges?", Intent::BookDiscussion),
            IlVariant::Comparison
        );
        assert_eq!(
            select_il_variant("in che ordine li leggo?", Intent::Recommendation),
            IlVariant::ReadingPath
        );
    }

    #[test]
    fn test_il_recommendation_fallback() {
        // No explicit cue, but the intent is a recommendation.
        assert_eq!(
            select_il_variant("consigliami qualcosa di corto", Intent::Recommendation),
            IlVariant::ReadingPath
        );
        assert_eq!(select_il_variant("", Intent::PersonalReflection), IlVariant::Theme);
    }

    #[test]
    fn test_instructions_non_empty() {
        for v in [
            FtVariant::QuickDecision,
            FtVariant::Tradeoff,
            FtVariant::MinimalPlan,
            FtVariant::ConversationalHumility,
        ] {
            assert!(!v.instruction().is_empty());
        }
    }
}

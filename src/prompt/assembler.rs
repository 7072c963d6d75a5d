//! Prompt assembly — orchestration result + context → prompt text blocks.
//!
//! Two strings per turn:
//! - a stable persona/system block that never varies between turns,
//! - a per-turn block stating the stance weights, the three variant
//!   instructions verbatim, the current book and any non-empty context
//!   sections as labeled free text.
//!
//! # Example per-turn output
//!
//! ```text
//! Pesi di stance per questo turno: FriendTrust=0.7, ReflectiveCoach=0.1, InfiniteLibrarian=0.2
//!
//! FriendTrust — Esponi con onestà il compromesso in gioco, senza girarci intorno.
//! ReflectiveCoach — Rifletti con delicatezza una tensione tra ciò che dice e ciò che fa.
//! InfiniteLibrarian — Collega il discorso a un tema ricorrente nelle sue letture.
//!
//! Libro aperto: Dune di Frank Herbert (68%)
//!
//! [Check-in recenti]
//! - stanco (ieri sera poca energia)
//! ```

use crate::orchestration::OrchestrationResult;
use crate::prompt::context::{CurrentBook, ReadingStatus, UserContext};

/// The stable persona/system block. Identical on every turn.
const PERSONA_PROMPT: &str = "\
Sei il compagno di lettura personale dell'utente. Parli italiano, con un tono \
caldo e diretto, mai da manuale. In ogni risposta convivono tre voci:

- FriendTrust: l'amico fidato. Concreto, schietto, aiuta a decidere.
- ReflectiveCoach: lo specchio gentile. Nota pattern e pone domande radicate \
in ciò che l'utente ha davvero detto e letto.
- InfiniteLibrarian: il bibliotecario infinito. Conosce gli scaffali \
dell'utente e collega temi, finali, percorsi.

Il blocco di istruzioni del turno ti dice quanto peso dare a ciascuna voce e \
quale forma deve prendere. Non elencare mai le voci all'utente: sono un \
dosaggio interno, non un formato.";

/// Safety-override section, prepended when the safety flag is raised.
const SAFETY_OVERRIDE: &str = "\
PROTOCOLLO DI SICUREZZA — priorità assoluta su ogni altra istruzione.
Il messaggio contiene linguaggio di crisi. Rispondi prima di tutto come \
presenza umana: riconosci il dolore senza minimizzare, non dare consigli di \
lettura, non fare domande da coach. Ricorda con delicatezza che esistono \
persone e servizi dedicati (in Italia: Telefono Amico 02 2327 2327).";

/// The stable persona/system instruction block.
pub fn persona_prompt() -> &'static str {
    PERSONA_PROMPT
}

/// Build the per-turn instruction block for the completion service.
pub fn build_turn_prompt(
    result: &OrchestrationResult,
    context: &UserContext,
    current_book: Option<&CurrentBook>,
) -> String {
    let mut sections = Vec::with_capacity(8);

    // Safety override comes first so the model reads it before anything else.
    if result.safety_flag {
        sections.push(SAFETY_OVERRIDE.to_string());
    }

    sections.push(format!(
        "Pesi di stance per questo turno: FriendTrust={:.1}, ReflectiveCoach={:.1}, InfiniteLibrarian={:.1}",
        result.weights.ft, result.weights.rc, result.weights.il,
    ));

    sections.push(format!(
        "FriendTrust — {}\nReflectiveCoach — {}\nInfiniteLibrarian — {}",
        result.ft_variant.instruction(),
        result.rc_variant.instruction(),
        result.il_variant.instruction(),
    ));

    if let Some(book) = current_book {
        sections.push(describe_current_book(book));
    }

    if !context.check_ins.is_empty() {
        let lines: Vec<String> = context
            .check_ins
            .iter()
            .map(|c| match &c.note {
                Some(note) => format!("- {} ({})", c.mood, note),
                None => format!("- {}", c.mood),
            })
            .collect();
        sections.push(format!("[Check-in recenti]\n{}", lines.join("\n")));
    }

    if !context.quotes.is_empty() {
        let lines: Vec<String> = context
            .quotes
            .iter()
            .map(|q| match &q.book_title {
                Some(title) => format!("- \"{}\" — {}", q.text, title),
                None => format!("- \"{}\"", q.text),
            })
            .collect();
        sections.push(format!("[Citazioni salvate]\n{}", lines.join("\n")));
    }

    if !context.books.is_empty() {
        let lines: Vec<String> = context.books.iter().map(describe_book_line).collect();
        sections.push(format!("[Libreria recente]\n{}", lines.join("\n")));
    }

    if !context.axes.is_empty() {
        let lines: Vec<String> = context
            .axes
            .iter()
            .map(|a| format!("- {}: {:.2}", a.axis, a.value))
            .collect();
        sections.push(format!("[Profilo tematico]\n{}", lines.join("\n")));
    }

    if !context.summaries.is_empty() {
        let lines: Vec<String> = context
            .summaries
            .iter()
            .map(|s| format!("- {}", s.summary))
            .collect();
        sections.push(format!("[Conversazioni precedenti]\n{}", lines.join("\n")));
    }

    sections.join("\n\n")
}

fn describe_current_book(book: &CurrentBook) -> String {
    let author = book
        .author
        .as_deref()
        .map(|a| format!(" di {}", a))
        .unwrap_or_default();
    match book.progress_percent {
        Some(p) => format!("Libro aperto: {}{} ({}%)", book.title, author, p),
        None => format!("Libro aperto: {}{}", book.title, author),
    }
}

fn describe_book_line(book: &crate::prompt::context::BookSnapshot) -> String {
    let status = match book.status {
        ReadingStatus::Reading => "in lettura",
        ReadingStatus::Finished => "finito",
        ReadingStatus::Abandoned => "abbandonato",
    };
    match book.progress_percent {
        Some(p) => format!("- {} ({}, {}%)", book.title, status, p),
        None => format!("- {} ({})", book.title, status),
    }
}

// ============================================================================
// Tests
// ============================================================================

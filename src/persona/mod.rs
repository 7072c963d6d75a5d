//! Persona system — the companion's three stances and their per-turn shape.
//!
//! ```text
//! Intent ──────────────► StanceWeights   (fixed table, resolve_weights)
//! message ─┬───────────► FtVariant       (select_ft_variant)
//!          ├───────────► RcVariant       (select_rc_variant)
//!          └─ + intent ► IlVariant       (select_il_variant)
//! ```
//!
//! Weights say *how much* of each stance a reply should carry; variants say
//! *what shape* each stance takes this turn. The two axes are independent.

pub mod stance;
pub mod variants;

pub use stance::{resolve_weights, Stance, StanceWeights};
pub use variants::{
    select_ft_variant, select_il_variant, select_rc_variant, FtVariant, IlVariant, RcVariant,
};

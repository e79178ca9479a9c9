//! Fixed catalogs backing the analysis engine.
//!
//! Pure data: fallacy pattern rules, stance argument templates, slot filler
//! phrases, counter-strategy templates, and the indicator lexicons. Nothing
//! here is mutated at runtime — the engine compiles what needs compiling
//! once at construction and shares it read-only across calls.

mod fallacies;
pub mod lexicon;
mod templates;

pub use fallacies::{FALLACY_RULES, FallacyKind, FallacyRule};
pub use templates::{
    ArgumentTemplate, COUNTER_STRATEGIES, ETHICS_REBUTTAL, FILLER_SLOTS, FillerSlot,
    GENERIC_CLOSING, RESEARCH_REBUTTAL, RIGHTS_REBUTTAL, STANCE_TEMPLATES, Stance,
};

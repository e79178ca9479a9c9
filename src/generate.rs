//! Stance argument generation via slot-substitution templates.
//!
//! Template texts are parsed once at engine construction into typed segment
//! lists; that is where catalog consistency is enforced. A slot name with no
//! filler entry or an unclosed brace fails construction with a
//! [`CatalogError`], so a compiled template can never render an
//! unsubstituted `{slot}` token.
//!
//! Generation is intentionally non-deterministic: repeated calls with
//! identical inputs draw fresh templates and fillers. Callers that need
//! reproducibility inject a seeded [`Rng`].

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{FILLER_SLOTS, STANCE_TEMPLATES, Stance};
use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// Template compilation
// ---------------------------------------------------------------------------

/// One parsed piece of a template string.
#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    /// The debate topic, lower-cased from caller input.
    Topic,
    /// Index into [`FILLER_SLOTS`].
    Slot(usize),
}

/// A template parsed into segments.
#[derive(Debug, Clone)]
pub(crate) struct CompiledTemplate {
    segments: Vec<Segment>,
}

impl CompiledTemplate {
    /// Parse `{slot}` tokens, resolving each against the filler catalog.
    pub(crate) fn compile(text: &str) -> Result<Self, CatalogError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| CatalogError::UnclosedSlot {
                    template: text.to_string(),
                })?;
            let name = &after[..close];

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            if name == "topic" {
                segments.push(Segment::Topic);
            } else {
                let index = FILLER_SLOTS
                    .iter()
                    .position(|slot| slot.name == name)
                    .ok_or_else(|| CatalogError::UnknownSlot {
                        slot: name.to_string(),
                        template: text.to_string(),
                    })?;
                segments.push(Segment::Slot(index));
            }
            rest = &after[close + 1..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Render the template: the topic slot gets the lower-cased topic, and
    /// each filler slot gets one uniformly-drawn phrase. Repeated
    /// occurrences of the same slot reuse the draw.
    pub(crate) fn fill(&self, topic: &str, rng: &mut impl Rng) -> String {
        let topic_lower = topic.to_lowercase();
        let mut chosen: HashMap<usize, &'static str> = HashMap::new();
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Topic => out.push_str(&topic_lower),
                Segment::Slot(index) => {
                    let phrase = match chosen.get(index) {
                        Some(phrase) => *phrase,
                        None => {
                            // Non-empty by construction-time validation.
                            let phrase =
                                FILLER_SLOTS[*index].phrases.choose(rng).copied().unwrap_or("");
                            chosen.insert(*index, phrase);
                            phrase
                        }
                    };
                    out.push_str(phrase);
                }
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Stance argument generator
// ---------------------------------------------------------------------------

/// Generates a plausible (if generic) argument for a stance on a topic by
/// drawing one template and filling its slots.
#[derive(Debug)]
pub struct StanceGenerator {
    for_templates: Vec<CompiledTemplate>,
    against_templates: Vec<CompiledTemplate>,
}

impl StanceGenerator {
    /// Compile and validate the stance template catalog.
    pub fn new() -> Result<Self, CatalogError> {
        for slot in FILLER_SLOTS {
            if slot.phrases.is_empty() {
                return Err(CatalogError::EmptyFillers {
                    slot: slot.name.to_string(),
                });
            }
        }

        let mut for_templates = Vec::new();
        let mut against_templates = Vec::new();
        for template in STANCE_TEMPLATES {
            let compiled = CompiledTemplate::compile(template.text)?;
            match template.stance {
                Stance::For => for_templates.push(compiled),
                Stance::Against => against_templates.push(compiled),
            }
        }
        for (stance, pool) in [
            (Stance::For, &for_templates),
            (Stance::Against, &against_templates),
        ] {
            if pool.is_empty() {
                return Err(CatalogError::NoTemplates { stance });
            }
        }

        Ok(Self {
            for_templates,
            against_templates,
        })
    }

    /// Generate an argument for the given stance on a topic.
    pub fn stance_argument(&self, topic: &str, stance: Stance, rng: &mut impl Rng) -> String {
        let pool = match stance {
            Stance::For => &self.for_templates,
            Stance::Against => &self.against_templates,
        };
        pool.choose(rng)
            .map(|template| template.fill(topic, rng))
            .unwrap_or_default()
    }
}

//! Stance templates, filler phrases, and counter-strategy templates.
//!
//! Template texts carry `{slot}` tokens. The `{topic}` slot is filled from
//! caller input (lower-cased); every other slot must name an entry in
//! [`FILLER_SLOTS`], which the engine enforces when it compiles the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

// ---------------------------------------------------------------------------
// Stance
// ---------------------------------------------------------------------------

/// The side of a debate topic being argued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stance {
    For,
    Against,
}

impl Stance {
    /// The opposing side.
    pub fn opposite(self) -> Self {
        match self {
            Stance::For => Stance::Against,
            Stance::Against => Stance::For,
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stance::For => write!(f, "For"),
            Stance::Against => write!(f, "Against"),
        }
    }
}

impl FromStr for Stance {
    type Err = InputError;

    /// Case-insensitive; anything other than the two recognized tags is
    /// rejected rather than falling through to a catalog lookup failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "for" => Ok(Stance::For),
            "against" => Ok(Stance::Against),
            _ => Err(InputError::UnrecognizedStance {
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Stance argument templates
// ---------------------------------------------------------------------------

/// A parameterized argument template for one stance.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentTemplate {
    pub stance: Stance,
    pub text: &'static str,
}

const fn t(stance: Stance, text: &'static str) -> ArgumentTemplate {
    ArgumentTemplate { stance, text }
}

pub const STANCE_TEMPLATES: &[ArgumentTemplate] = &[
    t(
        Stance::For,
        "Supporting {topic} is essential because it promotes {benefit} and addresses the critical issue of {problem}.",
    ),
    t(
        Stance::For,
        "The evidence clearly demonstrates that {topic} leads to {positive_outcome} and significantly improves {area}.",
    ),
    t(
        Stance::For,
        "From an ethical standpoint, {topic} is necessary to ensure {moral_good} and prevent {harm}.",
    ),
    t(
        Stance::For,
        "Research consistently shows that {topic} results in measurable improvements in {field}.",
    ),
    t(
        Stance::For,
        "The practical benefits of {topic} include {benefit} and the reduction of {problem}.",
    ),
    t(
        Stance::For,
        "Historical precedent supports {topic} as it has proven effective in {context}.",
    ),
    t(
        Stance::For,
        "Economic analysis reveals that {topic} generates {positive_outcome} while minimizing {concern}.",
    ),
    t(
        Stance::Against,
        "Opposing {topic} is crucial because it prevents {negative_outcome} and protects our fundamental {value}.",
    ),
    t(
        Stance::Against,
        "The risks associated with {topic} far outweigh any potential benefits, particularly regarding {concern}.",
    ),
    t(
        Stance::Against,
        "Historical evidence shows that {topic} has consistently led to {negative_consequence} in {context}.",
    ),
    t(
        Stance::Against,
        "From a practical perspective, {topic} is unfeasible due to {obstacle} and significant {limitation}.",
    ),
    t(
        Stance::Against,
        "The unintended consequences of {topic} include {harm} and the erosion of {value}.",
    ),
    t(
        Stance::Against,
        "Economic analysis reveals that {topic} would result in {negative_outcome} and increased {concern}.",
    ),
    t(
        Stance::Against,
        "Ethical considerations demand we reject {topic} to preserve {moral_good} and prevent {harm}.",
    ),
];

// ---------------------------------------------------------------------------
// Filler catalog
// ---------------------------------------------------------------------------

/// A slot name and its candidate filler phrases.
#[derive(Debug, Clone, Copy)]
pub struct FillerSlot {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
}

pub const FILLER_SLOTS: &[FillerSlot] = &[
    FillerSlot {
        name: "benefit",
        phrases: &[
            "social equality",
            "technological innovation",
            "economic prosperity",
            "educational advancement",
            "healthcare improvements",
            "environmental protection",
            "individual freedom",
            "community safety",
        ],
    },
    FillerSlot {
        name: "problem",
        phrases: &[
            "systemic inequality",
            "economic inefficiency",
            "social injustice",
            "environmental degradation",
            "public health risks",
            "educational gaps",
            "technological disparity",
        ],
    },
    FillerSlot {
        name: "positive_outcome",
        phrases: &[
            "increased prosperity",
            "improved health outcomes",
            "enhanced security",
            "greater equality",
            "technological advancement",
            "environmental sustainability",
            "social cohesion",
        ],
    },
    FillerSlot {
        name: "negative_outcome",
        phrases: &[
            "economic instability",
            "loss of privacy",
            "increased inequality",
            "social division",
            "environmental damage",
            "public safety risks",
            "erosion of rights",
        ],
    },
    FillerSlot {
        name: "area",
        phrases: &[
            "public education",
            "healthcare systems",
            "economic development",
            "social welfare",
            "environmental policy",
            "technological infrastructure",
            "community relations",
        ],
    },
    FillerSlot {
        name: "moral_good",
        phrases: &[
            "justice",
            "fairness",
            "human dignity",
            "equality",
            "freedom",
            "compassion",
            "integrity",
            "respect for rights",
        ],
    },
    FillerSlot {
        name: "harm",
        phrases: &[
            "discrimination",
            "exploitation",
            "suffering",
            "injustice",
            "oppression",
            "environmental damage",
            "economic hardship",
            "social fragmentation",
        ],
    },
    FillerSlot {
        name: "value",
        phrases: &[
            "individual liberty",
            "democratic principles",
            "economic stability",
            "social cohesion",
            "cultural diversity",
            "personal privacy",
            "community values",
        ],
    },
    FillerSlot {
        name: "concern",
        phrases: &[
            "privacy violations",
            "economic disruption",
            "unintended consequences",
            "abuse of power",
            "social inequality",
            "environmental impact",
            "public safety",
        ],
    },
    FillerSlot {
        name: "field",
        phrases: &[
            "public health metrics",
            "economic indicators",
            "educational outcomes",
            "environmental measures",
            "social welfare statistics",
            "technological adoption rates",
        ],
    },
    FillerSlot {
        name: "context",
        phrases: &[
            "similar circumstances",
            "comparable situations",
            "historical precedents",
            "international examples",
            "previous implementations",
        ],
    },
    FillerSlot {
        name: "obstacle",
        phrases: &[
            "implementation challenges",
            "resource limitations",
            "political opposition",
            "technical difficulties",
            "regulatory barriers",
        ],
    },
    FillerSlot {
        name: "limitation",
        phrases: &[
            "budget constraints",
            "technological barriers",
            "social resistance",
            "legal restrictions",
            "practical challenges",
        ],
    },
    FillerSlot {
        name: "negative_consequence",
        phrases: &[
            "economic decline",
            "social unrest",
            "increased inequality",
            "environmental damage",
            "loss of freedoms",
            "public dissatisfaction",
        ],
    },
];

// ---------------------------------------------------------------------------
// Counter-strategies and canned rebuttals
// ---------------------------------------------------------------------------

/// Rebuttal templates for arguments leaning on benefit/advantage language.
/// Filled with the same substitution mechanism as the stance templates.
pub const COUNTER_STRATEGIES: &[&str] = &[
    "However, this perspective overlooks the significant {concern} that could arise from {topic}.",
    "While your argument has merit, it fails to address the potential {negative_outcome} and {limitation}.",
    "This viewpoint doesn't fully consider the {obstacle} that would make {topic} impractical.",
    "Although you raise valid points, the evidence suggests that {topic} often leads to {negative_consequence}.",
    "Your argument assumes ideal conditions, but real-world implementation would face {limitation} and {concern}.",
    "While theoretically sound, this position ignores the {harm} that vulnerable populations might experience.",
    "This perspective may be too optimistic about {topic}, given the historical tendency toward {negative_consequence}.",
];

/// Fixed rebuttal for arguments citing research or studies.
pub const RESEARCH_REBUTTAL: &str = "While some studies support this view, conflicting research and \
     methodological concerns suggest the evidence is not as conclusive as presented.";

/// Fixed rebuttal for arguments grounded in moral or ethical language.
pub const ETHICS_REBUTTAL: &str = "This raises important questions about competing ethical frameworks \
     and whose moral standards should take precedence in a diverse society.";

/// Fixed rebuttal for arguments appealing to freedom or rights.
pub const RIGHTS_REBUTTAL: &str = "We must carefully balance individual freedoms with collective \
     responsibilities and consider how these rights impact other members of society.";

/// Closing sentence appended when no keyword class matched.
pub const GENERIC_CLOSING: &str = "Additionally, your argument doesn't fully address the potential \
     negative implications and alternative perspectives that need consideration.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stance_parses_case_insensitively() {
        assert_eq!("for".parse::<Stance>().unwrap(), Stance::For);
        assert_eq!("AGAINST".parse::<Stance>().unwrap(), Stance::Against);
        assert_eq!(" For ".parse::<Stance>().unwrap(), Stance::For);
    }

    #[test]
    fn stance_rejects_unknown_values() {
        assert!("maybe".parse::<Stance>().is_err());
        assert!("".parse::<Stance>().is_err());
    }

    #[test]
    fn opposite_flips_both_ways() {
        assert_eq!(Stance::For.opposite(), Stance::Against);
        assert_eq!(Stance::Against.opposite(), Stance::For);
    }

    #[test]
    fn both_stances_have_templates() {
        let fors = STANCE_TEMPLATES
            .iter()
            .filter(|t| t.stance == Stance::For)
            .count();
        let againsts = STANCE_TEMPLATES
            .iter()
            .filter(|t| t.stance == Stance::Against)
            .count();
        assert!(fors > 0);
        assert!(againsts > 0);
    }

    #[test]
    fn filler_slots_are_named_and_non_empty() {
        for slot in FILLER_SLOTS {
            assert!(!slot.name.is_empty());
            assert!(!slot.phrases.is_empty(), "slot {} is empty", slot.name);
        }
    }
}

//! The fallacy pattern catalog.
//!
//! Each rule pairs a fallacy kind with an ordered list of regex patterns and
//! a fixed explanation. Patterns are written for lower-cased text; the
//! detector lowers the argument once before scanning. Rule order here is
//! the order matches appear in a [`DetectionResult`](crate::detect::DetectionResult).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named category of reasoning error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FallacyKind {
    AdHominem,
    Strawman,
    FalseDichotomy,
    AppealToEmotion,
    HastyGeneralization,
    SlipperySlope,
    AppealToAuthority,
}

impl fmt::Display for FallacyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallacyKind::AdHominem => write!(f, "Ad Hominem"),
            FallacyKind::Strawman => write!(f, "Strawman"),
            FallacyKind::FalseDichotomy => write!(f, "False Dichotomy"),
            FallacyKind::AppealToEmotion => write!(f, "Appeal To Emotion"),
            FallacyKind::HastyGeneralization => write!(f, "Hasty Generalization"),
            FallacyKind::SlipperySlope => write!(f, "Slippery Slope"),
            FallacyKind::AppealToAuthority => write!(f, "Appeal To Authority"),
        }
    }
}

/// One catalog entry: a fallacy kind, its textual patterns, and the
/// explanation shown to the user when any pattern fires.
#[derive(Debug, Clone, Copy)]
pub struct FallacyRule {
    pub kind: FallacyKind,
    /// Tried in order; the first match wins and ends this rule's scan.
    pub patterns: &'static [&'static str],
    pub explanation: &'static str,
}

/// The process-wide rule set, in presentation order.
pub const FALLACY_RULES: &[FallacyRule] = &[
    FallacyRule {
        kind: FallacyKind::AdHominem,
        patterns: &[
            r"you are (stupid|dumb|ignorant|wrong|foolish|idiotic)",
            r"people like you",
            r"typical (liberal|conservative|democrat|republican)",
            r"you don't understand",
            r"you're just",
            r"you obviously",
            r"anyone with half a brain",
        ],
        explanation: "Attacking the person rather than their argument",
    },
    FallacyRule {
        kind: FallacyKind::Strawman,
        patterns: &[
            r"so you're saying",
            r"what you really mean",
            r"you want to",
            r"your position is that",
            r"you're claiming that",
            r"you believe that",
        ],
        explanation: "Misrepresenting opponent's argument to make it easier to attack",
    },
    FallacyRule {
        kind: FallacyKind::FalseDichotomy,
        patterns: &[
            r"either.*or",
            r"only two (options|choices|ways)",
            r"you must choose",
            r"there are only",
            r"it's either.*or nothing",
        ],
        explanation: "Presenting only two options when more exist",
    },
    FallacyRule {
        kind: FallacyKind::AppealToEmotion,
        patterns: &[
            r"think of the children",
            r"how can you live with yourself",
            r"this is heartbreaking",
            r"imagine if",
            r"this is disgusting",
            r"this is outrageous",
        ],
        explanation: "Using emotional manipulation instead of logical reasoning",
    },
    FallacyRule {
        kind: FallacyKind::HastyGeneralization,
        patterns: &[
            r"all .* are",
            r"every .* is",
            r"always",
            r"never",
            r"everybody knows",
            r"everyone agrees",
        ],
        explanation: "Making broad conclusions from limited examples",
    },
    FallacyRule {
        kind: FallacyKind::SlipperySlope,
        patterns: &[
            r"if we allow.*then",
            r"this will lead to",
            r"next thing you know",
            r"where does it end",
            r"before you know it",
            r"it's a slippery slope",
        ],
        explanation: "Assuming one event will lead to extreme consequences",
    },
    FallacyRule {
        kind: FallacyKind::AppealToAuthority,
        patterns: &[
            r"experts say",
            r"studies show",
            r"scientists agree",
            r"everyone knows",
            r"it's common knowledge",
        ],
        explanation: "Citing authority without proper evidence or context",
    },
];

//! Lexical strength metrics, improvement suggestions, and coarse labels.
//!
//! Everything here is a pure function of the argument text, the fixed
//! lexicons, and (for suggestions) a detection result. Indicator counts are
//! crude by design: a set word counts once if it occurs anywhere as a
//! substring of the lower-cased argument, however often it repeats.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::lexicon::{
    BALANCE_CUES, BALANCE_INDICATORS, CAUSAL_CUES, EVIDENCE_CUES, EVIDENCE_INDICATORS,
    REASONING_INDICATORS, SPECIFICITY_CUES,
};
use crate::detect::DetectionResult;
use crate::text::contains_any;

/// Suggestions returned per call, at most.
pub const MAX_SUGGESTIONS: usize = 4;

/// Below this word count an argument needs expanding.
const SHORT_ARGUMENT_WORDS: usize = 30;
/// Below this word count an argument could still use more support.
const DEVELOPING_ARGUMENT_WORDS: usize = 50;

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Lexical metrics for one argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub evidence_indicators: usize,
    pub reasoning_indicators: usize,
    pub balance_indicators: usize,
}

impl StrengthMetrics {
    /// Combined indicator total used by the coarse assessment.
    pub fn indicator_total(&self) -> usize {
        self.evidence_indicators + self.reasoning_indicators + self.balance_indicators
    }
}

/// Compute lexical metrics for an argument. Zero-length input yields all
/// zeros.
pub fn analyze(argument: &str) -> StrengthMetrics {
    let lowered = argument.to_lowercase();
    let count_present =
        |words: &[&str]| words.iter().filter(|word| lowered.contains(*word)).count();

    StrengthMetrics {
        word_count: argument.split_whitespace().count(),
        sentence_count: argument
            .split(['.', '!', '?'])
            .filter(|segment| !segment.trim().is_empty())
            .count(),
        evidence_indicators: count_present(EVIDENCE_INDICATORS),
        reasoning_indicators: count_present(REASONING_INDICATORS),
        balance_indicators: count_present(BALANCE_INDICATORS),
    }
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

/// Build improvement suggestions in priority order, capped at
/// [`MAX_SUGGESTIONS`]. Never returns an empty list.
pub fn suggest(argument: &str, detection: &DetectionResult) -> Vec<String> {
    let lowered = argument.to_lowercase();
    let mut suggestions: Vec<String> = Vec::new();

    if detection.has_fallacies {
        suggestions
            .push("Address the logical fallacies identified to strengthen your reasoning".into());
        suggestions.push(
            "Focus on evidence-based claims rather than emotional appeals or personal attacks"
                .into(),
        );
    }

    let word_count = argument.split_whitespace().count();
    if word_count < SHORT_ARGUMENT_WORDS {
        suggestions
            .push("Expand your argument with more detailed reasoning and specific examples".into());
    } else if word_count < DEVELOPING_ARGUMENT_WORDS {
        suggestions.push(
            "Consider adding more supporting evidence or addressing potential counterarguments"
                .into(),
        );
    }

    if !contains_any(&lowered, CAUSAL_CUES) {
        suggestions.push(
            "Add clear causal reasoning using connecting words like 'because', 'since', or 'therefore'"
                .into(),
        );
    }
    if !contains_any(&lowered, EVIDENCE_CUES) {
        suggestions.push(
            "Include references to research, data, or credible sources to support your claims"
                .into(),
        );
    }
    if !contains_any(&lowered, BALANCE_CUES) {
        suggestions.push(
            "Acknowledge potential counterarguments or limitations to demonstrate balanced thinking"
                .into(),
        );
    }
    if argument.matches('!').count() > 2 {
        suggestions.push(
            "Adopt a more measured tone - excessive emphasis can weaken your argument's credibility"
                .into(),
        );
    }
    if !contains_any(&lowered, SPECIFICITY_CUES) {
        suggestions.push(
            "Include specific examples or case studies to make your argument more concrete and persuasive"
                .into(),
        );
    }

    if suggestions.is_empty() {
        suggestions.extend([
            "Consider strengthening your argument with more detailed explanations".to_string(),
            "Think about potential objections and address them preemptively".to_string(),
            "Add more specific examples to illustrate your main points".to_string(),
        ]);
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

// ---------------------------------------------------------------------------
// Coarse labels
// ---------------------------------------------------------------------------

/// Overall assessment from the combined indicator total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assessment {
    Strong,
    Moderate,
    NeedsWork,
}

impl Assessment {
    pub fn from_metrics(metrics: &StrengthMetrics) -> Self {
        match metrics.indicator_total() {
            total if total >= 3 => Assessment::Strong,
            total if total >= 1 => Assessment::Moderate,
            _ => Assessment::NeedsWork,
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assessment::Strong => write!(f, "Strong"),
            Assessment::Moderate => write!(f, "Moderate"),
            Assessment::NeedsWork => write!(f, "Needs Work"),
        }
    }
}

/// Complexity level from a simple additive score over the metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn from_metrics(metrics: &StrengthMetrics) -> Self {
        let mut score = 0;
        if metrics.word_count > 100 {
            score += 2;
        } else if metrics.word_count > 50 {
            score += 1;
        }
        if metrics.evidence_indicators > 0 {
            score += 2;
        }
        if metrics.reasoning_indicators > 0 {
            score += 2;
        }
        if metrics.balance_indicators > 0 {
            score += 1;
        }

        match score {
            s if s >= 6 => Complexity::Advanced,
            s if s >= 3 => Complexity::Intermediate,
            _ => Complexity::Beginner,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Beginner => write!(f, "Beginner"),
            Complexity::Intermediate => write!(f, "Intermediate"),
            Complexity::Advanced => write!(f, "Advanced"),
        }
    }
}

//! Indicator and cue word lists.
//!
//! Fixed lexical cue sets used as crude proxies for argument quality. The
//! indicator sets feed the strength metrics; the cue sets drive suggestion
//! checks and counterargument keyword classes. The two groups overlap but
//! are intentionally not identical — each reproduces the word list its
//! check was tuned with.

// ── Strength indicators ─────────────────────────────────────────────────

/// Words signalling cited evidence.
pub const EVIDENCE_INDICATORS: &[&str] = &[
    "research",
    "study",
    "data",
    "statistics",
    "evidence",
    "survey",
    "report",
];

/// Causal and inferential connectives.
pub const REASONING_INDICATORS: &[&str] = &[
    "because",
    "since",
    "therefore",
    "thus",
    "consequently",
    "as a result",
    "hence",
];

/// Words acknowledging the other side.
pub const BALANCE_INDICATORS: &[&str] = &[
    "however",
    "although",
    "while",
    "despite",
    "nevertheless",
    "but",
    "yet",
];

// ── Suggestion cues ─────────────────────────────────────────────────────

pub const CAUSAL_CUES: &[&str] = &["because", "since", "therefore", "thus", "as a result"];

pub const EVIDENCE_CUES: &[&str] = &[
    "research",
    "study",
    "evidence",
    "data",
    "statistics",
    "survey",
];

pub const BALANCE_CUES: &[&str] = &["however", "although", "while", "despite", "nevertheless"];

pub const SPECIFICITY_CUES: &[&str] = &[
    "example",
    "instance",
    "case",
    "specifically",
    "particularly",
];

// ── Counterargument keyword classes ─────────────────────────────────────

/// Benefit/advantage language; answered with a filled counter-strategy.
pub const BENEFIT_CUES: &[&str] = &["benefit", "advantage", "positive", "good"];

/// Research/study language.
pub const RESEARCH_CUES: &[&str] = &["research", "study", "evidence", "data"];

/// Moral/ethical language.
pub const MORAL_CUES: &[&str] = &["moral", "ethical", "right", "wrong"];

/// Freedom/rights language.
pub const FREEDOM_CUES: &[&str] = &["freedom", "rights", "liberty"];

// ── Keyword extraction ──────────────────────────────────────────────────

/// Stop words excluded from keyword extraction.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "this", "that", "these", "those", "i", "you", "he", "she", "it", "we",
    "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their",
];

// ── Coaching data ───────────────────────────────────────────────────────

/// General debate tips, sampled for display.
pub const DEBATE_TIPS: &[&str] = &[
    "Start with a clear thesis statement that outlines your main position.",
    "Use the PEEL structure: Point, Evidence, Explanation, Link.",
    "Always consider and address potential counterarguments.",
    "Support your claims with credible sources and evidence.",
    "Use logical reasoning rather than emotional appeals.",
    "Be respectful and focus on ideas, not personal attacks.",
    "Practice active listening to understand opposing viewpoints.",
    "Use specific examples to illustrate your points.",
    "Keep your arguments concise and well-organized.",
    "End with a strong conclusion that reinforces your main points.",
];

/// Question frames crossed with extracted keywords to propose topics.
/// The single `{keyword}` slot is substituted directly.
pub const TOPIC_QUESTIONS: &[&str] = &[
    "Should {keyword} be regulated by government?",
    "Is {keyword} more beneficial than harmful?",
    "Does {keyword} threaten traditional values?",
    "Should {keyword} be available to everyone?",
    "Is {keyword} a fundamental right?",
];

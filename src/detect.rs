//! Fallacy detection over the fixed pattern catalog.
//!
//! The argument is lower-cased once, then each rule's patterns are tried in
//! order against it. The first pattern that fires records one match for that
//! rule's kind and ends the rule's scan, so a kind never appears twice no
//! matter how many of its patterns would match. Detection is deterministic;
//! only generation is randomized.

use regex::Regex;
use serde::Serialize;

use crate::catalog::{FALLACY_RULES, FallacyKind};
use crate::error::CatalogError;

/// One detected fallacy.
#[derive(Debug, Clone, Serialize)]
pub struct FallacyMatch {
    pub kind: FallacyKind,
    /// Catalog explanation for this kind, shown to the user verbatim.
    pub explanation: &'static str,
}

/// The outcome of one detection pass. Matches appear in catalog order, not
/// in the order their patterns occur in the text.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionResult {
    pub has_fallacies: bool,
    pub matches: Vec<FallacyMatch>,
}

#[derive(Debug)]
struct CompiledRule {
    kind: FallacyKind,
    patterns: Vec<Regex>,
    explanation: &'static str,
}

/// Scans arguments against the compiled fallacy catalog.
#[derive(Debug)]
pub struct FallacyDetector {
    rules: Vec<CompiledRule>,
}

impl FallacyDetector {
    /// Compile the pattern catalog. A pattern that fails to compile is a
    /// catalog bug, fatal at construction.
    pub fn new() -> Result<Self, CatalogError> {
        let mut rules = Vec::with_capacity(FALLACY_RULES.len());
        for rule in FALLACY_RULES {
            let mut patterns = Vec::with_capacity(rule.patterns.len());
            for pattern in rule.patterns {
                patterns.push(Regex::new(pattern).map_err(|source| CatalogError::BadPattern {
                    kind: rule.kind,
                    pattern: (*pattern).to_string(),
                    source,
                })?);
            }
            rules.push(CompiledRule {
                kind: rule.kind,
                patterns,
                explanation: rule.explanation,
            });
        }
        Ok(Self { rules })
    }

    /// Detect fallacies in an argument. Empty input is a normal no-match
    /// result, not an error.
    pub fn detect(&self, argument: &str) -> DetectionResult {
        let lowered = argument.to_lowercase();
        let mut matches = Vec::new();
        for rule in &self.rules {
            // First pattern match wins; remaining patterns for the kind are skipped.
            if rule.patterns.iter().any(|p| p.is_match(&lowered)) {
                matches.push(FallacyMatch {
                    kind: rule.kind,
                    explanation: rule.explanation,
                });
            }
        }
        DetectionResult {
            has_fallacies: !matches.is_empty(),
            matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> FallacyDetector {
        FallacyDetector::new().unwrap()
    }

    #[test]
    fn clean_argument_has_no_fallacies() {
        let result = detector().detect(
            "Investing in public transit reduces congestion because fewer cars are on the road.",
        );
        assert!(!result.has_fallacies);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn empty_argument_is_a_normal_no_match() {
        let result = detector().detect("");
        assert!(!result.has_fallacies);
    }

    #[test]
    fn ad_hominem_matches_once_even_with_multiple_patterns() {
        // Hits both "you are stupid" and "people like you".
        let result = detector().detect("You are stupid and people like you ruin debates");
        let ad_hominem: Vec<_> = result
            .matches
            .iter()
            .filter(|m| m.kind == FallacyKind::AdHominem)
            .collect();
        assert_eq!(ad_hominem.len(), 1);
    }

    #[test]
    fn detection_is_case_insensitive() {
        let result = detector().detect("YOU ARE WRONG about everything");
        assert!(
            result
                .matches
                .iter()
                .any(|m| m.kind == FallacyKind::AdHominem)
        );
    }

    #[test]
    fn matches_follow_catalog_order() {
        // Slippery slope appears before ad hominem in the text, but catalog
        // order puts AdHominem first.
        let result = detector().detect("This will lead to chaos, and you are stupid for doubting it");
        let kinds: Vec<FallacyKind> = result.matches.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![FallacyKind::AdHominem, FallacyKind::SlipperySlope]
        );
    }

    #[test]
    fn appeal_to_authority_detected() {
        let result = detector().detect("Everyone knows experts say this is true");
        assert!(
            result
                .matches
                .iter()
                .any(|m| m.kind == FallacyKind::AppealToAuthority)
        );
    }

    #[test]
    fn hasty_generalization_via_always() {
        let result = detector().detect("The policy always works");
        assert!(
            result
                .matches
                .iter()
                .any(|m| m.kind == FallacyKind::HastyGeneralization)
        );
    }

    #[test]
    fn detection_is_idempotent() {
        let d = detector();
        let text = "Either you agree with me or you hate progress. Think of the children!";
        let first = d.detect(text);
        let second = d.detect(text);
        let first_kinds: Vec<_> = first.matches.iter().map(|m| m.kind).collect();
        let second_kinds: Vec<_> = second.matches.iter().map(|m| m.kind).collect();
        assert_eq!(first_kinds, second_kinds);
        assert_eq!(first.has_fallacies, second.has_fallacies);
    }

    #[test]
    fn matches_carry_catalog_explanations() {
        let result = detector().detect("so you're saying we should do nothing");
        let m = result
            .matches
            .iter()
            .find(|m| m.kind == FallacyKind::Strawman)
            .unwrap();
        assert!(m.explanation.contains("Misrepresenting"));
    }
}

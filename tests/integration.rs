//! End-to-end integration tests for the rhetor engine.
//!
//! These exercise the full review pipeline the CLI drives: stance
//! generation, fallacy detection, counterargument composition, and the
//! strength/suggestion heuristics working over the same inputs.

use rand::SeedableRng;
use rand::rngs::StdRng;

use rhetor::catalog::{FallacyKind, GENERIC_CLOSING, Stance};
use rhetor::engine::Engine;
use rhetor::strength::Assessment;
use rhetor::text;

fn engine() -> Engine {
    Engine::new().unwrap()
}

#[test]
fn full_review_of_a_flawed_argument() {
    let engine = engine();
    let topic = "Social media platforms should fact-check all content";
    let argument = "You are stupid if you disagree. Either we fact-check \
         everything or democracy dies. Think of the children!";

    let review = engine.review_with_rng(topic, Stance::For, argument, &mut StdRng::seed_from_u64(1));

    // The bot argues the other side.
    assert_eq!(review.bot_stance, Stance::Against);
    assert!(review.bot_argument.contains("social media platforms should fact-check all content"));

    // All three planted fallacies surface, in catalog order, once each.
    let kinds: Vec<FallacyKind> = review.detection.matches.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FallacyKind::AdHominem,
            FallacyKind::FalseDichotomy,
            FallacyKind::AppealToEmotion,
        ]
    );

    // Fallacy guidance leads the suggestion list.
    assert!(review.suggestions[0].contains("logical fallacies"));
    assert!(review.suggestions.len() <= 4);

    // The counterargument carries the topic and ends in exactly one sentence
    // beyond the base.
    assert!(review.counterargument.contains("social media platforms should fact-check all content"));
    assert!(!review.counterargument.contains('{'));
}

#[test]
fn clean_evidence_backed_argument_reviews_well() {
    let engine = engine();
    let topic = "Remote work is better than office work";
    let argument = "The study data demonstrate higher output, because commuting time \
         is reclaimed for focused work. However, hybrid schedules can keep \
         collaboration strong, particularly for new hires.";

    let review =
        engine.review_with_rng(topic, Stance::For, argument, &mut StdRng::seed_from_u64(2));

    assert!(!review.detection.has_fallacies);
    assert!(review.metrics.evidence_indicators >= 2); // study + data
    assert!(review.metrics.reasoning_indicators >= 1); // because
    assert!(review.metrics.balance_indicators >= 1); // however
    assert_eq!(review.assessment, Assessment::Strong);
    assert!(!review.suggestions.is_empty());
}

#[test]
fn mixed_indicator_scenario_detects_hasty_generalization() {
    let engine = engine();
    let argument =
        "The study shows that because of this, the policy always works, however some disagree.";

    let detection = engine.detect_fallacies(argument);
    assert!(
        detection
            .matches
            .iter()
            .any(|m| m.kind == FallacyKind::HastyGeneralization)
    );

    let metrics = engine.strength(argument);
    assert!(metrics.evidence_indicators >= 1);
    assert!(metrics.reasoning_indicators >= 1);
    assert!(metrics.balance_indicators >= 1);
}

#[test]
fn counterargument_base_comes_from_the_opposite_stance_pool() {
    let engine = engine();
    let topic = "Standardized testing should be abolished in schools";

    // Same seed: the composer's base draw must replay the direct draw for
    // the opposite stance.
    let counter = engine.counterargument_with_rng(
        topic,
        "no cues in this text",
        Stance::For,
        &mut StdRng::seed_from_u64(5),
    );
    let base =
        engine.stance_argument_with_rng(topic, Stance::Against, &mut StdRng::seed_from_u64(5));
    assert!(counter.starts_with(&base));
    assert!(counter.ends_with(GENERIC_CLOSING));
}

#[test]
fn detection_is_deterministic_while_generation_is_not_required_to_be() {
    let engine = engine();
    let argument = "People like you never listen to the other side.";

    let first = engine.detect_fallacies(argument);
    let second = engine.detect_fallacies(argument);
    let first_kinds: Vec<FallacyKind> = first.matches.iter().map(|m| m.kind).collect();
    let second_kinds: Vec<FallacyKind> = second.matches.iter().map(|m| m.kind).collect();
    assert_eq!(first_kinds, second_kinds);

    // Generation reproducibility is opt-in via the injected rng.
    let a = engine.stance_argument_with_rng("zoos", Stance::For, &mut StdRng::seed_from_u64(9));
    let b = engine.stance_argument_with_rng("zoos", Stance::For, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn empty_argument_is_handled_end_to_end() {
    let engine = engine();
    let review = engine.review_with_rng(
        "Universal basic income should be implemented globally",
        Stance::Against,
        "",
        &mut StdRng::seed_from_u64(7),
    );

    assert!(!review.detection.has_fallacies);
    assert_eq!(review.metrics.word_count, 0);
    assert_eq!(review.metrics.sentence_count, 0);
    assert!(!review.suggestions.is_empty());
    assert_eq!(review.assessment, Assessment::NeedsWork);
}

#[test]
fn keyword_pipeline_feeds_topic_suggestions() {
    let keywords = text::extract_keywords(
        "Surveillance cameras in public spaces reduce crime rates",
        3,
    );
    assert!(keywords.contains(&"surveillance".to_string()));

    let topics = text::topic_suggestions(&keywords);
    assert!(!topics.is_empty());
    assert!(topics.iter().all(|t| !t.contains("{keyword}")));
}

//! Counterargument composition.
//!
//! A counterargument is an opposite-stance argument plus exactly one
//! appended rebuttal. The rebuttal is chosen by scanning the user's argument
//! for topical keyword classes in a fixed order (benefit/advantage,
//! research, moral, freedom/rights); if several classes match, one of their
//! rebuttals is drawn uniformly, and if none match a generic closing
//! sentence is used instead.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::lexicon::{BENEFIT_CUES, FREEDOM_CUES, MORAL_CUES, RESEARCH_CUES};
use crate::catalog::{
    COUNTER_STRATEGIES, ETHICS_REBUTTAL, GENERIC_CLOSING, RESEARCH_REBUTTAL, RIGHTS_REBUTTAL,
    Stance,
};
use crate::error::CatalogError;
use crate::generate::{CompiledTemplate, StanceGenerator};
use crate::text::contains_any;

/// Composes counterarguments from the opposite-stance generator and the
/// counter-strategy catalog.
#[derive(Debug)]
pub struct CounterComposer {
    strategies: Vec<CompiledTemplate>,
}

impl CounterComposer {
    /// Compile the counter-strategy catalog.
    pub fn new() -> Result<Self, CatalogError> {
        let mut strategies = Vec::with_capacity(COUNTER_STRATEGIES.len());
        for text in COUNTER_STRATEGIES {
            strategies.push(CompiledTemplate::compile(text)?);
        }
        Ok(Self { strategies })
    }

    /// Build a counterargument to the user's position.
    ///
    /// The base is always generated under the stance opposite to
    /// `user_stance`; the user's argument is only re-scanned to pick the
    /// appended rebuttal.
    pub fn compose(
        &self,
        generator: &StanceGenerator,
        topic: &str,
        user_argument: &str,
        user_stance: Stance,
        rng: &mut impl Rng,
    ) -> String {
        let base = generator.stance_argument(topic, user_stance.opposite(), rng);
        let lowered = user_argument.to_lowercase();

        let mut rebuttals: Vec<String> = Vec::new();
        if contains_any(&lowered, BENEFIT_CUES) {
            if let Some(strategy) = self.strategies.choose(rng) {
                rebuttals.push(strategy.fill(topic, rng));
            }
        }
        if contains_any(&lowered, RESEARCH_CUES) {
            rebuttals.push(RESEARCH_REBUTTAL.to_string());
        }
        if contains_any(&lowered, MORAL_CUES) {
            rebuttals.push(ETHICS_REBUTTAL.to_string());
        }
        if contains_any(&lowered, FREEDOM_CUES) {
            rebuttals.push(RIGHTS_REBUTTAL.to_string());
        }

        match rebuttals.choose(rng) {
            Some(rebuttal) => format!("{base} {rebuttal}"),
            None => format!("{base} {GENERIC_CLOSING}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn fixtures() -> (StanceGenerator, CounterComposer) {
        (StanceGenerator::new().unwrap(), CounterComposer::new().unwrap())
    }

    const TOPIC: &str = "universal basic income";

    #[test]
    fn base_uses_the_opposite_stance() {
        let (generator, composer) = fixtures();
        // Identical seeds: the composer draws the base from the same rng
        // stream, so the base must equal a direct Against-stance draw.
        let composed = composer.compose(
            &generator,
            TOPIC,
            "no keyword cues here at all",
            Stance::For,
            &mut StdRng::seed_from_u64(11),
        );
        let expected_base =
            generator.stance_argument(TOPIC, Stance::Against, &mut StdRng::seed_from_u64(11));
        assert!(composed.starts_with(&expected_base));
    }

    #[test]
    fn no_cues_appends_the_generic_closing() {
        let (generator, composer) = fixtures();
        let composed = composer.compose(
            &generator,
            TOPIC,
            "plain text without cues",
            Stance::Against,
            &mut StdRng::seed_from_u64(3),
        );
        assert!(composed.ends_with(crate::catalog::GENERIC_CLOSING));
    }

    #[test]
    fn research_cue_appends_the_research_rebuttal() {
        let (generator, composer) = fixtures();
        let composed = composer.compose(
            &generator,
            TOPIC,
            "a recent study backs me up",
            Stance::For,
            &mut StdRng::seed_from_u64(5),
        );
        assert!(composed.ends_with(RESEARCH_REBUTTAL));
    }

    #[test]
    fn multiple_cues_append_exactly_one_rebuttal() {
        let (generator, composer) = fixtures();
        // Matches the moral and freedom classes, not benefit/research.
        let composed = composer.compose(
            &generator,
            TOPIC,
            "it is the ethical choice and protects our liberty",
            Stance::For,
            &mut StdRng::seed_from_u64(9),
        );
        let ends_with_one = composed.ends_with(ETHICS_REBUTTAL) ^ composed.ends_with(RIGHTS_REBUTTAL);
        assert!(ends_with_one, "expected exactly one canned rebuttal: {composed}");
    }

    #[test]
    fn benefit_cue_draws_a_filled_strategy() {
        let (generator, composer) = fixtures();
        let composed = composer.compose(
            &generator,
            TOPIC,
            "the advantage is obvious",
            Stance::For,
            &mut StdRng::seed_from_u64(13),
        );
        // The strategy rebuttal is fully substituted.
        assert!(!composed.contains('{'));
        assert!(!composed.ends_with(GENERIC_CLOSING));
    }
}

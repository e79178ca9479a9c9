//! Engine facade: top-level API for rhetor.
//!
//! The `Engine` compiles the fixed catalogs once at construction (where all
//! catalog-consistency errors surface) and exposes the analysis operations.
//! It holds no mutable state, so a single instance is safe to share across
//! threads; randomized operations take the caller's [`Rng`] or fall back to
//! the thread-local one.

use rand::Rng;
use serde::Serialize;

use crate::catalog::{COUNTER_STRATEGIES, FALLACY_RULES, STANCE_TEMPLATES, Stance};
use crate::counter::CounterComposer;
use crate::detect::{DetectionResult, FallacyDetector};
use crate::error::RhetorResult;
use crate::generate::StanceGenerator;
use crate::strength::{self, Assessment, Complexity, StrengthMetrics};

/// The rhetor analysis engine.
///
/// Owns the compiled fallacy rules, stance templates, and counter-strategy
/// templates.
#[derive(Debug)]
pub struct Engine {
    detector: FallacyDetector,
    generator: StanceGenerator,
    composer: CounterComposer,
}

/// A full review of one argument: the opposing position, fallacy findings,
/// a counterargument, suggestions, and strength metrics. Each part is
/// computed independently from the inputs; only the counterargument builds
/// on the stance generator.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub topic: String,
    pub user_stance: Stance,
    pub bot_stance: Stance,
    /// The bot's own argument for the opposing side.
    pub bot_argument: String,
    pub detection: DetectionResult,
    pub counterargument: String,
    pub metrics: StrengthMetrics,
    pub suggestions: Vec<String>,
    pub assessment: Assessment,
    pub complexity: Complexity,
}

impl Engine {
    /// Compile the catalogs and build the engine. Fails only on
    /// catalog-consistency bugs, never on user input.
    pub fn new() -> RhetorResult<Self> {
        let detector = FallacyDetector::new()?;
        let generator = StanceGenerator::new()?;
        let composer = CounterComposer::new()?;

        tracing::info!(
            rules = FALLACY_RULES.len(),
            templates = STANCE_TEMPLATES.len(),
            strategies = COUNTER_STRATEGIES.len(),
            "initializing rhetor engine"
        );

        Ok(Self {
            detector,
            generator,
            composer,
        })
    }

    /// Detect logical fallacies in an argument.
    pub fn detect_fallacies(&self, argument: &str) -> DetectionResult {
        self.detector.detect(argument)
    }

    /// Generate an argument for a stance on a topic.
    pub fn stance_argument(&self, topic: &str, stance: Stance) -> String {
        self.stance_argument_with_rng(topic, stance, &mut rand::thread_rng())
    }

    /// [`Engine::stance_argument`] with an injected randomness source.
    pub fn stance_argument_with_rng(
        &self,
        topic: &str,
        stance: Stance,
        rng: &mut impl Rng,
    ) -> String {
        self.generator.stance_argument(topic, stance, rng)
    }

    /// Generate a counterargument to the user's position.
    pub fn counterargument(&self, topic: &str, user_argument: &str, user_stance: Stance) -> String {
        self.counterargument_with_rng(topic, user_argument, user_stance, &mut rand::thread_rng())
    }

    /// [`Engine::counterargument`] with an injected randomness source.
    pub fn counterargument_with_rng(
        &self,
        topic: &str,
        user_argument: &str,
        user_stance: Stance,
        rng: &mut impl Rng,
    ) -> String {
        self.composer
            .compose(&self.generator, topic, user_argument, user_stance, rng)
    }

    /// Compute lexical strength metrics for an argument.
    pub fn strength(&self, argument: &str) -> StrengthMetrics {
        strength::analyze(argument)
    }

    /// Build improvement suggestions from an argument and its detection
    /// result.
    pub fn suggestions(&self, argument: &str, detection: &DetectionResult) -> Vec<String> {
        strength::suggest(argument, detection)
    }

    /// Run the full review: opposing argument, fallacy check,
    /// counterargument, suggestions, and metrics.
    pub fn review(&self, topic: &str, user_stance: Stance, argument: &str) -> Review {
        self.review_with_rng(topic, user_stance, argument, &mut rand::thread_rng())
    }

    /// [`Engine::review`] with an injected randomness source.
    pub fn review_with_rng(
        &self,
        topic: &str,
        user_stance: Stance,
        argument: &str,
        rng: &mut impl Rng,
    ) -> Review {
        let bot_stance = user_stance.opposite();
        let bot_argument = self.stance_argument_with_rng(topic, bot_stance, rng);
        let detection = self.detect_fallacies(argument);
        let counterargument = self.counterargument_with_rng(topic, argument, user_stance, rng);
        let suggestions = self.suggestions(argument, &detection);
        let metrics = self.strength(argument);

        tracing::debug!(
            words = metrics.word_count,
            fallacies = detection.matches.len(),
            suggestions = suggestions.len(),
            "argument reviewed"
        );

        Review {
            topic: topic.to_string(),
            user_stance,
            bot_stance,
            bot_argument,
            detection,
            counterargument,
            assessment: Assessment::from_metrics(&metrics),
            complexity: Complexity::from_metrics(&metrics),
            metrics,
            suggestions,
        }
    }
}

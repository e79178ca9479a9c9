//! rhetor CLI: rule-based argument analysis.

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use rhetor::catalog::Stance;
use rhetor::engine::Engine;
use rhetor::strength::{Assessment, Complexity};
use rhetor::text;

#[derive(Parser)]
#[command(name = "rhetor", version, about = "Rule-based argument analysis")]
struct Cli {
    /// Emit results as JSON instead of formatted text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full review: opposing argument, fallacy check, counterargument,
    /// suggestions, and strength metrics.
    Review {
        /// The debate topic.
        #[arg(long)]
        topic: String,

        /// Your side of the topic ("for" or "against").
        #[arg(long)]
        stance: Stance,

        /// Your argument.
        #[arg(long)]
        argument: String,
    },

    /// Generate a stance argument for a topic.
    Generate {
        #[arg(long)]
        topic: String,

        /// The stance to argue ("for" or "against").
        #[arg(long)]
        stance: Stance,
    },

    /// Generate a counterargument to your position.
    Counter {
        #[arg(long)]
        topic: String,

        #[arg(long)]
        stance: Stance,

        #[arg(long)]
        argument: String,
    },

    /// Detect logical fallacies in an argument.
    Fallacies {
        #[arg(long)]
        argument: String,
    },

    /// Show strength metrics for an argument.
    Strength {
        #[arg(long)]
        argument: String,
    },

    /// Suggest debate topics from free text.
    Topics {
        #[arg(long)]
        text: String,
    },

    /// Print a few debate tips.
    Tips,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let engine = Engine::new()?;

    match cli.command {
        Commands::Review {
            topic,
            stance,
            argument,
        } => {
            text::validate_topic(&topic)?;
            text::validate_argument(&argument)?;
            let argument = text::clean_text(&argument);

            let review = engine.review(&topic, stance, &argument);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&review).into_diagnostic()?
                );
                return Ok(());
            }

            println!("The {} position:", review.bot_stance);
            println!("  {}\n", review.bot_argument);

            println!("Fallacy check:");
            if review.detection.has_fallacies {
                for m in &review.detection.matches {
                    println!("  {}: {}", m.kind, m.explanation);
                }
            } else {
                println!("  No obvious logical fallacies detected.");
            }
            println!();

            println!("Counterargument to your {} position:", review.user_stance);
            println!("  {}\n", review.counterargument);

            println!("Suggestions:");
            for (i, suggestion) in review.suggestions.iter().enumerate() {
                println!("  {}. {}", i + 1, suggestion);
            }
            println!();

            let m = &review.metrics;
            println!(
                "Metrics: {} words, {} sentences, evidence {}, reasoning {}, balance {}",
                m.word_count,
                m.sentence_count,
                m.evidence_indicators,
                m.reasoning_indicators,
                m.balance_indicators
            );
            println!(
                "Assessment: {} ({} level)",
                review.assessment, review.complexity
            );
        }

        Commands::Generate { topic, stance } => {
            text::validate_topic(&topic)?;
            let argument = engine.stance_argument(&topic, stance);
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "stance": stance, "argument": argument })
                );
            } else {
                println!("{argument}");
            }
        }

        Commands::Counter {
            topic,
            stance,
            argument,
        } => {
            text::validate_topic(&topic)?;
            let counter = engine.counterargument(&topic, &argument, stance);
            if cli.json {
                println!("{}", serde_json::json!({ "counterargument": counter }));
            } else {
                println!("{counter}");
            }
        }

        Commands::Fallacies { argument } => {
            let detection = engine.detect_fallacies(&argument);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&detection).into_diagnostic()?
                );
            } else if detection.has_fallacies {
                for m in &detection.matches {
                    println!("{}: {}", m.kind, m.explanation);
                }
            } else {
                println!("No obvious logical fallacies detected.");
            }
        }

        Commands::Strength { argument } => {
            let metrics = engine.strength(&argument);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&metrics).into_diagnostic()?
                );
            } else {
                println!(
                    "{} words, {} sentences, evidence {}, reasoning {}, balance {}",
                    metrics.word_count,
                    metrics.sentence_count,
                    metrics.evidence_indicators,
                    metrics.reasoning_indicators,
                    metrics.balance_indicators
                );
                println!(
                    "Assessment: {} ({} level)",
                    Assessment::from_metrics(&metrics),
                    Complexity::from_metrics(&metrics)
                );
            }
        }

        Commands::Topics { text: input } => {
            let keywords = text::extract_keywords(&input, 3);
            let suggestions = text::topic_suggestions(&keywords);
            if cli.json {
                println!("{}", serde_json::json!({ "topics": suggestions }));
            } else if suggestions.is_empty() {
                println!("No keywords found to build topics from.");
            } else {
                for suggestion in suggestions {
                    println!("{suggestion}");
                }
            }
        }

        Commands::Tips => {
            let tips = text::debate_tips(&mut rand::thread_rng(), 3);
            if cli.json {
                println!("{}", serde_json::json!({ "tips": tips }));
            } else {
                for tip in tips {
                    println!("- {tip}");
                }
            }
        }
    }

    Ok(())
}

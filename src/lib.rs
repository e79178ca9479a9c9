//! # rhetor
//!
//! Rule-based argument analysis: fallacy detection via a fixed pattern
//! catalog, template-driven stance and counterargument generation, and
//! lexical strength heuristics for short persuasive texts.
//!
//! ## Architecture
//!
//! - **Catalogs** (`catalog`): immutable fallacy patterns, stance templates,
//!   slot fillers, counter-strategies, and indicator lexicons
//! - **Detection** (`detect`): regex scan with at most one match per fallacy kind
//! - **Generation** (`generate`): uniform template choice + slot substitution
//! - **Counterarguments** (`counter`): opposite-stance base + one keyed rebuttal
//! - **Strength** (`strength`): lexical metrics, suggestions, coarse labels
//! - **Engine** (`engine`): facade compiling the catalogs once at construction
//!
//! ## Library usage
//!
//! ```
//! use rhetor::catalog::Stance;
//! use rhetor::engine::Engine;
//!
//! let engine = Engine::new().unwrap();
//! let detection = engine.detect_fallacies("People like you never consider the facts.");
//! assert!(detection.has_fallacies);
//!
//! let counter = engine.counterargument(
//!     "Remote work is better than office work",
//!     "Studies show clear productivity benefits.",
//!     Stance::For,
//! );
//! assert!(!counter.is_empty());
//! ```

pub mod catalog;
pub mod counter;
pub mod detect;
pub mod engine;
pub mod error;
pub mod generate;
pub mod strength;
pub mod text;

//! Rich diagnostic error types for rhetor.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text. Catalog errors are fatal at
//! engine construction; input errors belong to the string boundary (CLI,
//! stance parsing). A constructed engine's analysis calls never fail.

use miette::Diagnostic;
use thiserror::Error;

use crate::catalog::{FallacyKind, Stance};

/// Top-level error type for rhetor.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum RhetorError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Input(#[from] InputError),
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Catalog-consistency failures, raised while compiling the fixed catalogs
/// at engine construction. These are programming errors in the catalog data,
/// never recoverable per-call.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("invalid pattern for {kind}: \"{pattern}\"")]
    #[diagnostic(
        code(rhetor::catalog::bad_pattern),
        help("Fix the regular expression in the fallacy catalog. Patterns are matched against lower-cased text.")
    )]
    BadPattern {
        kind: FallacyKind,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("template references unknown slot {{{slot}}}: \"{template}\"")]
    #[diagnostic(
        code(rhetor::catalog::unknown_slot),
        help(
            "Every slot a template references must be \"topic\" or have an entry \
             in the filler catalog. Add the filler list or fix the slot name."
        )
    )]
    UnknownSlot { slot: String, template: String },

    #[error("unclosed slot brace in template: \"{template}\"")]
    #[diagnostic(
        code(rhetor::catalog::unclosed_slot),
        help("Slot tokens are written {{name}}. Close the brace or escape the literal.")
    )]
    UnclosedSlot { template: String },

    #[error("filler catalog entry \"{slot}\" has no phrases")]
    #[diagnostic(
        code(rhetor::catalog::empty_fillers),
        help("Each filler slot needs at least one candidate phrase.")
    )]
    EmptyFillers { slot: String },

    #[error("no argument templates for stance {stance}")]
    #[diagnostic(
        code(rhetor::catalog::no_templates),
        help("The template catalog must carry at least one template per stance.")
    )]
    NoTemplates { stance: Stance },
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

/// Validation failures at the string boundary. Core analyzers are total over
/// well-typed inputs and never produce these.
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("unrecognized stance: \"{value}\"")]
    #[diagnostic(
        code(rhetor::input::unrecognized_stance),
        help("Valid stances are \"for\" and \"against\".")
    )]
    UnrecognizedStance { value: String },

    #[error("topic too short ({length} characters)")]
    #[diagnostic(
        code(rhetor::input::topic_too_short),
        help("Provide a debate topic of at least 10 characters.")
    )]
    TopicTooShort { length: usize },

    #[error("argument too short ({length} characters)")]
    #[diagnostic(
        code(rhetor::input::argument_too_short),
        help("Provide an argument of at least 20 characters.")
    )]
    ArgumentTooShort { length: usize },
}

pub type RhetorResult<T> = std::result::Result<T, RhetorError>;

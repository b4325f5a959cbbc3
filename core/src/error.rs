//! Error taxonomy for schema construction and parsing.
//!
//! Two failure paths, deliberately distinct:
//!
//! - [`SchemaError`] — configuration bugs caught at schema-build time
//!   (`finalize()`). These reflect programmer error, never user input, and
//!   are not recoverable at runtime.
//! - [`ValidationError`] — the single runtime error surface of `parse()`.
//!   Every user-input problem, including post-validation hook rejections,
//!   arrives here; nothing is retried because argument parsing has no
//!   transient failure mode.

use thiserror::Error;

/// Runtime parse failure.
///
/// Each variant names the offending option or token; the `Display` impl
/// produces the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A flag appeared more often than its occurrence limit allows.
    #[error("option '{option}' may be used at most {limit} time(s)")]
    OccurrenceLimitExceeded { option: String, limit: usize },
    /// A flag was present but supplied no value where one is mandatory.
    #[error("option '{0}' requires a value")]
    MissingRequiredValue(String),
    /// A required option was never supplied and has no default.
    #[error("missing required option '{0}'")]
    MissingRequiredOption(String),
    /// A scalar-shaped option received more than one token.
    #[error("option '{0}' expects a single value")]
    ArityMismatch(String),
    /// The element converter rejected a token.
    #[error("invalid value for option '{option}': {message}")]
    ConversionFailed { option: String, message: String },
    /// The token is not a member of a literal shape's allowed set.
    #[error("invalid value '{value}' for option '{option}' (allowed: {})", .allowed.join(", "))]
    InvalidLiteralValue {
        option: String,
        value: String,
        allowed: Vec<String>,
    },
    /// A token matched no declared option (only when unknown tokens are
    /// rejected by configuration).
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
    /// The post-validation hook rejected the parsed mapping.
    #[error("{0}")]
    Rejected(String),
}

/// Schema-construction failure returned by `finalize()`.
///
/// These never surface from `parse()`; a schema that finalized successfully
/// cannot produce them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two option descriptors share a name.
    #[error("duplicate option name: '{0}'")]
    DuplicateOption(String),
    /// Option name is empty, starts with the flag sigil, or contains
    /// whitespace.
    #[error("invalid option name: '{0}'")]
    InvalidName(String),
    /// A literal shape declared no allowed values.
    #[error("literal option '{0}' must declare at least one allowed value")]
    EmptyLiteralSet(String),
    /// `max_occurrences` was set to zero.
    #[error("option '{0}' must allow at least one occurrence")]
    ZeroOccurrenceLimit(String),
}

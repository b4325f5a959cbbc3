//! Option descriptors: the schema unit.
//!
//! An [`OptionSpec`] declares one named option — its value shape,
//! abbreviation policy, positional flag, help text, default, and occurrence
//! limit. Descriptors are built once from the schema and are read-only for
//! the rest of the process's life.

use crate::shape::ValueShape;
use crate::value::ArgValue;

/// Declaration of a single option.
///
/// Requiredness is derived, not stored: an option is required exactly when
/// it has no default and its shape is not `Optional`.
///
/// # Examples
///
/// ```
/// use argot_core::{ArgValue, Converter, OptionSpec, ValueShape};
///
/// let jobs = OptionSpec::new("jobs", ValueShape::Scalar(Converter::int()))
///     .with_help("Number of parallel jobs");
/// assert!(jobs.required());
///
/// let verbose = OptionSpec::flag("verbose");
/// assert!(!verbose.required());
/// assert_eq!(verbose.default, Some(ArgValue::Bool(false)));
/// ```
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Unique identifier; also the canonical long-flag suffix (`--{name}`).
    pub name: String,
    /// Target value shape.
    pub shape: ValueShape,
    /// Whether a short form may be generated for this option.
    pub allow_abbreviation: bool,
    /// Whether this option binds by position rather than by flag.
    pub positional: bool,
    /// Display text for help rendering; never parsed.
    pub help: Option<String>,
    /// Value used when the option is absent from the input.
    pub default: Option<ArgValue>,
    /// How many times the flag may appear; each occurrence may carry
    /// multiple tokens.
    pub max_occurrences: usize,
}

impl OptionSpec {
    /// Creates a descriptor with the given name and shape.
    ///
    /// Defaults: abbreviation allowed, non-positional, no help text, no
    /// default value, at most one occurrence.
    pub fn new(name: impl Into<String>, shape: ValueShape) -> Self {
        Self {
            name: name.into(),
            shape,
            allow_abbreviation: true,
            positional: false,
            help: None,
            default: None,
            max_occurrences: 1,
        }
    }

    /// Creates a boolean flag that defaults to `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::OptionSpec;
    ///
    /// let flag = OptionSpec::flag("dry-run");
    /// assert_eq!(flag.long_form(), "--dry-run");
    /// ```
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, ValueShape::Bool).with_default(ArgValue::Bool(false))
    }

    /// Sets the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Sets the default value, which also makes the option non-required.
    pub fn with_default(mut self, default: impl Into<ArgValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Marks the option as positional: it binds by position among leftover
    /// value tokens instead of by flag spelling.
    pub fn positional(mut self) -> Self {
        self.positional = true;
        self
    }

    /// Disables short-form generation for this option.
    pub fn no_abbreviation(mut self) -> Self {
        self.allow_abbreviation = false;
        self
    }

    /// Raises the occurrence limit.
    pub fn max_occurrences(mut self, limit: usize) -> Self {
        self.max_occurrences = limit;
        self
    }

    /// Whether the option must be supplied.
    pub fn required(&self) -> bool {
        self.default.is_none() && !matches!(self.shape, ValueShape::Optional(_))
    }

    /// The canonical long spelling (`--{name}`).
    pub fn long_form(&self) -> String {
        format!("--{}", self.name)
    }
}

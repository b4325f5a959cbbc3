//! Parser orchestrator: schema builder, finalized parser, result mapping.
//!
//! The builder/finalize split makes the schema structurally immutable once
//! parsing starts: [`Schema`] accumulates descriptors and configuration,
//! [`Schema::finalize`] validates the configuration and freezes everything
//! into an [`ArgParser`], and the parser may then be shared across calls and
//! threads without synchronization.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::coerce::coerce;
use crate::error::{SchemaError, ValidationError};
use crate::group::group_tokens;
use crate::help;
use crate::option::OptionSpec;
use crate::resolver::NameTable;
use crate::shape::ValueShape;
use crate::value::ArgValue;

/// User-supplied post-validation hook.
///
/// Runs on the fully assembled mapping and may transform or reject it.
/// Rejections are folded into [`ValidationError::Rejected`], keeping a
/// single runtime error surface.
pub type PostValidate = Arc<dyn Fn(Matches) -> Result<Matches, String> + Send + Sync>;

/// Immutable result mapping: option name → coerced typed value.
///
/// Serializes as a plain map (`{"name": value, ...}`).
///
/// # Examples
///
/// ```
/// use argot_core::{Converter, OptionSpec, Schema, ValueShape};
///
/// let parser = Schema::new("demo")
///     .option(OptionSpec::new("jobs", ValueShape::Scalar(Converter::int())))
///     .option(OptionSpec::flag("verbose"))
///     .finalize()
///     .unwrap();
///
/// let argv: Vec<String> = ["--jobs", "4"].iter().map(|s| s.to_string()).collect();
/// let matches = parser.parse(&argv).unwrap();
/// assert_eq!(matches.get_int("jobs"), Some(4));
/// assert_eq!(matches.get_bool("verbose"), Some(false));
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Matches {
    values: HashMap<String, ArgValue>,
}

impl Matches {
    /// The raw value for an option, if the option exists in the schema.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Boolean payload of an option's value.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name)?.as_bool()
    }

    /// Integer payload of an option's value.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_int()
    }

    /// Float payload of an option's value.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_float()
    }

    /// String payload of an option's value.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_str()
    }

    /// List payload of an option's value.
    pub fn get_list(&self, name: &str) -> Option<&[ArgValue]> {
        self.get(name)?.as_list()
    }

    /// Whether the option carries a value other than `Absent`.
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_absent())
    }

    /// Replaces or inserts a value; intended for post-validation hooks that
    /// transform the mapping.
    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        self.values.insert(name.into(), value);
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of options in the mapping.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Mutable schema under construction.
///
/// # Examples
///
/// ```
/// use argot_core::{OptionSpec, Schema, SchemaError};
///
/// // Duplicate names are a configuration error, fatal at build time.
/// let err = Schema::new("demo")
///     .option(OptionSpec::flag("verbose"))
///     .option(OptionSpec::flag("verbose"))
///     .finalize()
///     .unwrap_err();
/// assert_eq!(err, SchemaError::DuplicateOption("verbose".into()));
/// ```
pub struct Schema {
    name: String,
    description: String,
    allow_unknown: bool,
    abbreviate: bool,
    options: Vec<OptionSpec>,
    post_validate: Option<PostValidate>,
}

impl Schema {
    /// Starts a schema. `name` is display-only (help rendering, logs).
    ///
    /// Defaults: unknown tokens rejected, abbreviation generation enabled.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            allow_unknown: false,
            abbreviate: true,
            options: Vec::new(),
            post_validate: None,
        }
    }

    /// Sets the display description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Permits (true) or rejects (false) tokens matching no option.
    pub fn allow_unknown(mut self, allow: bool) -> Self {
        self.allow_unknown = allow;
        self
    }

    /// Schema-wide switch for short-form generation.
    pub fn abbreviate(mut self, abbreviate: bool) -> Self {
        self.abbreviate = abbreviate;
        self
    }

    /// Declares an option.
    pub fn option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    /// Installs the post-validation hook.
    pub fn post_validate(
        mut self,
        hook: impl Fn(Matches) -> Result<Matches, String> + Send + Sync + 'static,
    ) -> Self {
        self.post_validate = Some(Arc::new(hook));
        self
    }

    /// Validates the configuration and freezes it into an [`ArgParser`].
    ///
    /// Configuration bugs (duplicate names, empty literal sets, zero
    /// occurrence limits) surface here as [`SchemaError`] — a path distinct
    /// from the runtime [`ValidationError`], since they reflect programmer
    /// error rather than user input.
    pub fn finalize(self) -> Result<ArgParser, SchemaError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for spec in &self.options {
            if spec.name.is_empty()
                || spec.name.starts_with('-')
                || spec.name.contains(char::is_whitespace)
            {
                return Err(SchemaError::InvalidName(spec.name.clone()));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(SchemaError::DuplicateOption(spec.name.clone()));
            }
            if spec.max_occurrences == 0 {
                return Err(SchemaError::ZeroOccurrenceLimit(spec.name.clone()));
            }
            check_shape(&spec.name, &spec.shape)?;
        }

        let table = NameTable::build(&self.options, self.abbreviate);
        Ok(ArgParser {
            name: self.name,
            description: self.description,
            allow_unknown: self.allow_unknown,
            options: self.options,
            table,
            post_validate: self.post_validate,
        })
    }
}

fn check_shape(name: &str, shape: &ValueShape) -> Result<(), SchemaError> {
    match shape {
        ValueShape::Literal(allowed) if allowed.is_empty() => {
            Err(SchemaError::EmptyLiteralSet(name.to_string()))
        }
        ValueShape::Optional(inner) => check_shape(name, inner),
        _ => Ok(()),
    }
}

/// Finalized, immutable parser.
///
/// Descriptors and the acceptable-name table are built once; `parse` owns
/// its transient state exclusively, so one parser may serve concurrent calls.
pub struct ArgParser {
    name: String,
    description: String,
    allow_unknown: bool,
    options: Vec<OptionSpec>,
    table: NameTable,
    post_validate: Option<PostValidate>,
}

impl std::fmt::Debug for ArgParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgParser")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("allow_unknown", &self.allow_unknown)
            .field("options", &self.options)
            .field("post_validate", &self.post_validate.as_ref().map(|_| "<fn>"))
            .finish_non_exhaustive()
    }
}

impl ArgParser {
    /// Display name of the schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display description of the schema.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared options, in declaration order.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// The acceptable-name table.
    pub fn name_table(&self) -> &NameTable {
        &self.table
    }

    /// Renders a help page from the descriptors' help texts.
    pub fn render_help(&self) -> String {
        help::render(self)
    }

    /// Parses a caller-supplied token sequence.
    ///
    /// The sequence is typically `std::env::args().skip(1)`, but nothing is
    /// hardwired to the process environment.
    pub fn parse(&self, argv: &[String]) -> Result<Matches, ValidationError> {
        debug!(schema = %self.name, tokens = argv.len(), "parsing argument vector");
        let grouped = group_tokens(argv, &self.options, &self.table, self.allow_unknown)?;

        let mut matches = Matches::default();
        for spec in &self.options {
            match grouped.groups.get(&spec.name) {
                Some(groups) if !groups.is_empty() => {
                    let value = coerce(spec, groups)?;
                    matches.insert(spec.name.clone(), value);
                }
                _ => {
                    if let Some(default) = &spec.default {
                        matches.insert(spec.name.clone(), default.clone());
                    } else if spec.required() {
                        return Err(ValidationError::MissingRequiredOption(spec.name.clone()));
                    } else {
                        matches.insert(spec.name.clone(), ArgValue::Absent);
                    }
                }
            }
        }

        match &self.post_validate {
            Some(hook) => hook(matches).map_err(ValidationError::Rejected),
            None => Ok(matches),
        }
    }

    /// Convenience wrapper collecting any string-ish iterator before parsing.
    pub fn parse_from<I, S>(&self, argv: I) -> Result<Matches, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        self.parse(&argv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Converter;

    fn parser(options: Vec<OptionSpec>) -> ArgParser {
        let mut schema = Schema::new("test");
        for spec in options {
            schema = schema.option(spec);
        }
        schema.finalize().unwrap()
    }

    #[test]
    fn test_empty_argv_succeeds_iff_nothing_required() {
        let p = parser(vec![
            OptionSpec::flag("verbose"),
            OptionSpec::new(
                "jobs",
                ValueShape::optional(ValueShape::Scalar(Converter::int())),
            ),
        ]);
        let m = p.parse(&[]).unwrap();
        assert_eq!(m.get_bool("verbose"), Some(false));
        assert!(!m.is_present("jobs"));
    }

    #[test]
    fn test_missing_required_names_first_in_declaration_order() {
        let p = parser(vec![
            OptionSpec::flag("verbose"),
            OptionSpec::new("alpha", ValueShape::Scalar(Converter::string())),
            OptionSpec::new("beta", ValueShape::Scalar(Converter::string())),
        ]);
        let err = p.parse(&[]).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredOption("alpha".into()));
    }

    #[test]
    fn test_finalize_rejects_empty_literal_set() {
        let err = Schema::new("test")
            .option(OptionSpec::new("mode", ValueShape::Literal(Vec::new())))
            .finalize()
            .unwrap_err();
        assert_eq!(err, SchemaError::EmptyLiteralSet("mode".into()));
    }

    #[test]
    fn test_finalize_rejects_zero_occurrence_limit() {
        let err = Schema::new("test")
            .option(OptionSpec::flag("verbose").max_occurrences(0))
            .finalize()
            .unwrap_err();
        assert_eq!(err, SchemaError::ZeroOccurrenceLimit("verbose".into()));
    }

    #[test]
    fn test_finalize_rejects_sigil_prefixed_name() {
        let err = Schema::new("test")
            .option(OptionSpec::flag("--verbose"))
            .finalize()
            .unwrap_err();
        assert_eq!(err, SchemaError::InvalidName("--verbose".into()));
    }

    #[test]
    fn test_hook_can_reject() {
        let p = Schema::new("test")
            .option(OptionSpec::new("jobs", ValueShape::Scalar(Converter::int())))
            .post_validate(|m| {
                if m.get_int("jobs").is_some_and(|j| j <= 0) {
                    Err("--jobs must be positive".to_string())
                } else {
                    Ok(m)
                }
            })
            .finalize()
            .unwrap();

        let err = p.parse_from(["--jobs", "0"]).unwrap_err();
        assert_eq!(err, ValidationError::Rejected("--jobs must be positive".into()));
        assert_eq!(err.to_string(), "--jobs must be positive");
    }

    #[test]
    fn test_hook_can_transform() {
        let p = Schema::new("test")
            .option(OptionSpec::new(
                "jobs",
                ValueShape::optional(ValueShape::Scalar(Converter::int())),
            ))
            .post_validate(|mut m| {
                if !m.is_present("jobs") {
                    m.insert("jobs", ArgValue::Int(1));
                }
                Ok(m)
            })
            .finalize()
            .unwrap();

        let m = p.parse(&[]).unwrap();
        assert_eq!(m.get_int("jobs"), Some(1));
    }

    #[test]
    fn test_matches_serialize_to_json_map() {
        let p = parser(vec![
            OptionSpec::new("tags", ValueShape::List(Converter::string()))
                .with_default(ArgValue::List(Vec::new())),
        ]);
        let m = p.parse_from(["--tags", "a", "b"]).unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["a", "b"]));
    }
}

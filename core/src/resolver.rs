//! Acceptable-name table and abbreviation generation.
//!
//! For every non-positional option the table records the accepted spellings:
//! the long form `--{name}` first, then at most one generated short form
//! `-{abbrev}`. Abbreviations are the shortest unique prefix of the name,
//! lengthened on collision; when every prefix of the name is already claimed
//! the option simply gets no short form. All spellings across all options
//! are pairwise distinct by construction.

use std::collections::HashMap;

use crate::option::OptionSpec;

/// Immutable mapping between input tokens and canonical option names.
///
/// Built once per schema; `resolve` is exact string match only — no fuzzy or
/// prefix matching happens at parse time.
///
/// # Examples
///
/// ```
/// use argot_core::{Converter, NameTable, OptionSpec, ValueShape};
///
/// let specs = vec![
///     OptionSpec::flag("verbose"),
///     OptionSpec::new("value", ValueShape::Scalar(Converter::string())),
/// ];
/// let table = NameTable::build(&specs, true);
///
/// assert_eq!(table.resolve("--verbose"), Some("verbose"));
/// assert_eq!(table.resolve("-v"), Some("verbose"));
/// // "value" collides on "-v"; it gets the next unique prefix.
/// assert_eq!(table.resolve("-va"), Some("value"));
/// assert_eq!(table.resolve("--bogus"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    /// Spelling → canonical option name.
    canonical: HashMap<String, String>,
    /// Declaration order: option name → accepted spellings, long form first.
    accepted: Vec<(String, Vec<String>)>,
}

impl NameTable {
    /// Builds the table from the descriptors, in declaration order.
    ///
    /// Positional options never match by flag spelling and contribute no
    /// entries. `abbreviate` is the schema-wide switch; each descriptor can
    /// still opt out individually.
    pub fn build(specs: &[OptionSpec], abbreviate: bool) -> Self {
        let mut table = Self::default();
        for spec in specs.iter().filter(|s| !s.positional) {
            let mut spellings = Vec::new();
            let long = spec.long_form();
            table.canonical.insert(long.clone(), spec.name.clone());
            spellings.push(long);

            if abbreviate && spec.allow_abbreviation {
                if let Some(short) = table.claim_abbreviation(&spec.name) {
                    spellings.push(short);
                }
            }
            table.accepted.push((spec.name.clone(), spellings));
        }
        table
    }

    /// Claims the shortest unique prefix of `name` as a short form.
    ///
    /// Returns `None` when every prefix, including the full name, is already
    /// taken — the degenerate case where no short form is assigned.
    fn claim_abbreviation(&mut self, name: &str) -> Option<String> {
        let chars: Vec<char> = name.chars().collect();
        for end in 1..=chars.len() {
            let prefix: String = chars[..end].iter().collect();
            let candidate = format!("-{prefix}");
            if !self.canonical.contains_key(&candidate) {
                self.canonical.insert(candidate.clone(), name.to_string());
                return Some(candidate);
            }
        }
        None
    }

    /// Maps an input token back to a canonical option name, if any.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.canonical.get(token).map(String::as_str)
    }

    /// Accepted spellings for an option, long form first.
    pub fn spellings(&self, name: &str) -> Option<&[String]> {
        self.accepted
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.as_slice())
    }

    /// The generated short form for an option, when one was assigned.
    pub fn short_form(&self, name: &str) -> Option<&str> {
        self.spellings(name)?.get(1).map(String::as_str)
    }
}

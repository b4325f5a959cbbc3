//! Tokenizer/grouper: argv → per-option raw value-groups.
//!
//! The scan walks the argument vector left to right. A token is a flag token
//! iff it resolves through the [`NameTable`]; everything else is a value
//! token. Each flag occurrence consumes the maximal contiguous run of
//! following value tokens as its value-group (possibly empty), and the
//! per-option occurrence budget is spent here, not at coercion time.
//!
//! Bare value tokens with no preceding flag are collected and bound to
//! positional options in declaration order afterwards.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::option::OptionSpec;
use crate::resolver::NameTable;

/// Raw grouping result: option name → ordered value-groups.
///
/// A boolean flag occurrence with no value tokens is recorded as an empty
/// group — the presence marker the coercer relies on.
#[derive(Debug, Default)]
pub(crate) struct GroupedArgs {
    pub(crate) groups: HashMap<String, Vec<Vec<String>>>,
}

/// Whether a token looks like a flag spelling.
///
/// A lone `-` is a value token by convention; anything longer that starts
/// with the sigil ends a value run even when it resolves to nothing.
fn is_sigil(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

pub(crate) fn group_tokens(
    argv: &[String],
    specs: &[OptionSpec],
    table: &NameTable,
    allow_unknown: bool,
) -> Result<GroupedArgs, ValidationError> {
    let mut remaining: HashMap<String, usize> = HashMap::new();
    let mut grouped = GroupedArgs::default();
    let mut leftover: Vec<String> = Vec::new();

    let mut i = 0;
    while i < argv.len() {
        let token = argv[i].as_str();

        let Some(name) = table.resolve(token) else {
            if is_sigil(token) {
                if !allow_unknown {
                    return Err(ValidationError::UnknownArgument(token.to_string()));
                }
                // Skip the unknown flag and exactly one run of contiguous
                // value tokens, then resume scanning for the next flag.
                let mut j = i + 1;
                while j < argv.len() && !is_sigil(&argv[j]) {
                    j += 1;
                }
                warn!(token, skipped = j - i - 1, "skipping unknown argument");
                i = j;
            } else {
                leftover.push(token.to_string());
                i += 1;
            }
            continue;
        };

        let Some(spec) = specs.iter().find(|s| s.name == name) else {
            // The table is built from these descriptors; an unmatched name
            // would be a construction bug, surfaced as unknown.
            return Err(ValidationError::UnknownArgument(token.to_string()));
        };

        let budget = remaining
            .entry(spec.name.clone())
            .or_insert(spec.max_occurrences);
        if *budget == 0 {
            return Err(ValidationError::OccurrenceLimitExceeded {
                option: spec.name.clone(),
                limit: spec.max_occurrences,
            });
        }
        *budget -= 1;

        let mut run: Vec<String> = Vec::new();
        let mut j = i + 1;
        while j < argv.len() && !is_sigil(&argv[j]) {
            run.push(argv[j].clone());
            j += 1;
        }
        if run.is_empty() && !spec.shape.is_bool() {
            return Err(ValidationError::MissingRequiredValue(spec.name.clone()));
        }
        debug!(option = %spec.name, tokens = run.len(), "grouped occurrence");
        grouped.groups.entry(spec.name.clone()).or_default().push(run);
        i = j;
    }

    bind_positionals(specs, leftover, &mut grouped, allow_unknown)?;
    Ok(grouped)
}

/// Assigns leftover value tokens to positional options in declaration order.
///
/// Each positional takes one token, except a list-shaped positional which
/// takes all remaining tokens. Surplus tokens follow the unknown-argument
/// policy.
fn bind_positionals(
    specs: &[OptionSpec],
    leftover: Vec<String>,
    grouped: &mut GroupedArgs,
    allow_unknown: bool,
) -> Result<(), ValidationError> {
    let mut cursor = 0;
    for spec in specs.iter().filter(|s| s.positional) {
        if cursor >= leftover.len() {
            break;
        }
        let take = if spec.shape.is_list() {
            leftover.len() - cursor
        } else {
            1
        };
        let group = leftover[cursor..cursor + take].to_vec();
        cursor += take;
        debug!(option = %spec.name, tokens = take, "bound positional");
        grouped.groups.entry(spec.name.clone()).or_default().push(group);
    }

    if cursor < leftover.len() {
        if !allow_unknown {
            return Err(ValidationError::UnknownArgument(leftover[cursor].clone()));
        }
        warn!(count = leftover.len() - cursor, "ignoring unbound value tokens");
    }
    Ok(())
}

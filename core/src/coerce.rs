//! Value coercion: raw value-groups → typed values.
//!
//! Dispatch is a `match` over [`ValueShape`], total over the enum. Converter
//! failures are wrapped with the option name; the raw error never escapes
//! on its own.

use crate::error::ValidationError;
use crate::option::OptionSpec;
use crate::shape::ValueShape;
use crate::value::ArgValue;

/// Coerces the collected value-groups of one option.
///
/// Only called when at least one group was recorded; the orchestrator
/// handles the absent case (defaults and requiredness) before coercion.
pub(crate) fn coerce(
    spec: &OptionSpec,
    groups: &[Vec<String>],
) -> Result<ArgValue, ValidationError> {
    coerce_shape(&spec.name, &spec.shape, groups)
}

fn coerce_shape(
    option: &str,
    shape: &ValueShape,
    groups: &[Vec<String>],
) -> Result<ArgValue, ValidationError> {
    match shape {
        // Presence alone decides; any grouped tokens are ignored.
        ValueShape::Bool => Ok(ArgValue::Bool(true)),

        ValueShape::Scalar(converter) => {
            let token = single_token(option, groups)?;
            converter
                .apply(token)
                .map_err(|message| ValidationError::ConversionFailed {
                    option: option.to_string(),
                    message,
                })
        }

        ValueShape::List(converter) => {
            let mut items = Vec::new();
            for token in groups.iter().flatten() {
                let item = converter.apply(token).map_err(|message| {
                    ValidationError::ConversionFailed {
                        option: option.to_string(),
                        message,
                    }
                })?;
                items.push(item);
            }
            Ok(ArgValue::List(items))
        }

        ValueShape::Literal(allowed) => {
            let token = single_token(option, groups)?;
            if allowed.iter().any(|a| a == token) {
                Ok(ArgValue::Str(token.to_string()))
            } else {
                Err(ValidationError::InvalidLiteralValue {
                    option: option.to_string(),
                    value: token.to_string(),
                    allowed: allowed.clone(),
                })
            }
        }

        ValueShape::Optional(inner) => {
            if groups.is_empty() {
                Ok(ArgValue::Absent)
            } else {
                coerce_shape(option, inner, groups)
            }
        }
    }
}

/// Requires exactly one token across all groups.
fn single_token<'a>(
    option: &str,
    groups: &'a [Vec<String>],
) -> Result<&'a str, ValidationError> {
    let tokens: Vec<&str> = groups.iter().flatten().map(String::as_str).collect();
    if tokens.len() != 1 {
        return Err(ValidationError::ArityMismatch(option.to_string()));
    }
    Ok(tokens[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Converter;

    fn groups(runs: &[&[&str]]) -> Vec<Vec<String>> {
        runs.iter()
            .map(|run| run.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    fn scalar(name: &str) -> OptionSpec {
        OptionSpec::new(name, ValueShape::Scalar(Converter::int()))
    }

    #[test]
    fn test_bool_ignores_tokens() {
        let spec = OptionSpec::flag("verbose");
        let value = coerce(&spec, &groups(&[&["yes"]])).unwrap();
        assert_eq!(value, ArgValue::Bool(true));
    }

    #[test]
    fn test_scalar_rejects_multiple_tokens() {
        let err = coerce(&scalar("x"), &groups(&[&["a", "b"]])).unwrap_err();
        assert_eq!(err, ValidationError::ArityMismatch("x".into()));
    }

    #[test]
    fn test_scalar_rejects_multiple_groups() {
        let spec = scalar("x").max_occurrences(2);
        let err = coerce(&spec, &groups(&[&["1"], &["2"]])).unwrap_err();
        assert_eq!(err, ValidationError::ArityMismatch("x".into()));
    }

    #[test]
    fn test_scalar_wraps_converter_failure() {
        let err = coerce(&scalar("jobs"), &groups(&[&["abc"]])).unwrap_err();
        match err {
            ValidationError::ConversionFailed { option, message } => {
                assert_eq!(option, "jobs");
                assert!(message.contains("invalid digit"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_list_flattens_groups_in_order() {
        let spec = OptionSpec::new("tags", ValueShape::List(Converter::string()));
        let value = coerce(&spec, &groups(&[&["a", "b"], &["c"]])).unwrap();
        assert_eq!(
            value,
            ArgValue::List(vec![
                ArgValue::Str("a".into()),
                ArgValue::Str("b".into()),
                ArgValue::Str("c".into()),
            ])
        );
    }

    #[test]
    fn test_list_aborts_on_first_bad_element() {
        let spec = OptionSpec::new("nums", ValueShape::List(Converter::int()));
        let err = coerce(&spec, &groups(&[&["1", "x", "3"]])).unwrap_err();
        assert!(matches!(err, ValidationError::ConversionFailed { .. }));
    }

    #[test]
    fn test_literal_membership() {
        let spec = OptionSpec::new("mode", ValueShape::literal(["fast", "safe"]));
        assert_eq!(
            coerce(&spec, &groups(&[&["fast"]])).unwrap(),
            ArgValue::Str("fast".into())
        );

        let err = coerce(&spec, &groups(&[&["turbo"]])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLiteralValue {
                option: "mode".into(),
                value: "turbo".into(),
                allowed: vec!["fast".into(), "safe".into()],
            }
        );
    }

    #[test]
    fn test_optional_delegates_when_present() {
        let spec = OptionSpec::new(
            "jobs",
            ValueShape::optional(ValueShape::Scalar(Converter::int())),
        );
        assert_eq!(
            coerce(&spec, &groups(&[&["4"]])).unwrap(),
            ArgValue::Int(4)
        );
        assert_eq!(coerce(&spec, &[]).unwrap(), ArgValue::Absent);
    }
}

//! Value shapes: how raw tokens become typed values.
//!
//! A shape is a closed tag, not an open type hierarchy. The coercer
//! dispatches with a `match` that is total over this enum, so adding a shape
//! is a deliberate, reviewable change rather than an implicit extension
//! point.

use crate::value::Converter;

/// Target shape of an option's value.
///
/// # Examples
///
/// ```
/// use argot_core::{Converter, ValueShape};
///
/// let scalar = ValueShape::Scalar(Converter::int());
/// assert_eq!(scalar.tag(), "scalar");
///
/// let mode = ValueShape::literal(["fast", "safe"]);
/// assert_eq!(mode.tag(), "literal");
///
/// let maybe = ValueShape::optional(ValueShape::Bool);
/// assert!(maybe.is_bool());
/// ```
#[derive(Debug, Clone)]
pub enum ValueShape {
    /// Exactly one token, run through the converter.
    Scalar(Converter),
    /// Presence flag; tokens are ignored.
    Bool,
    /// Every token across all occurrences, each run through the converter.
    List(Converter),
    /// Exactly one token that must match one of the allowed raw values.
    Literal(Vec<String>),
    /// Absent when never supplied, otherwise coerced by the inner shape.
    Optional(Box<ValueShape>),
}

impl ValueShape {
    /// Builds a `Literal` shape from any collection of allowed values.
    pub fn literal<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Literal(allowed.into_iter().map(Into::into).collect())
    }

    /// Builds an `Optional` shape around an inner shape.
    pub fn optional(inner: ValueShape) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Short tag for diagnostics and help rendering.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Bool => "bool",
            Self::List(_) => "list",
            Self::Literal(_) => "literal",
            Self::Optional(_) => "optional",
        }
    }

    /// Whether the shape is boolean at its core.
    ///
    /// The grouper uses this to accept a flag occurrence with no value
    /// tokens: a bare `--flag` is a presence marker for boolean shapes and a
    /// missing-value error for everything else.
    pub fn is_bool(&self) -> bool {
        match self {
            Self::Bool => true,
            Self::Optional(inner) => inner.is_bool(),
            _ => false,
        }
    }

    /// Whether the shape collects every token (a `List` at its core).
    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::Optional(inner) => inner.is_list(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bool_sees_through_optional() {
        assert!(ValueShape::Bool.is_bool());
        assert!(ValueShape::optional(ValueShape::Bool).is_bool());
        assert!(!ValueShape::optional(ValueShape::Scalar(Converter::string())).is_bool());
    }

    #[test]
    fn test_literal_builder_collects_values() {
        let shape = ValueShape::literal(["json", "yaml"]);
        match shape {
            ValueShape::Literal(allowed) => assert_eq!(allowed, vec!["json", "yaml"]),
            other => panic!("unexpected shape: {}", other.tag()),
        }
    }
}

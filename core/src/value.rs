//! Typed argument values and token converters.
//!
//! [`ArgValue`] is the result type of every coercion: a small closed set of
//! value kinds that serializes cleanly with [`serde`] (untagged, so a parsed
//! mapping round-trips through JSON as plain scalars and arrays).
//!
//! [`Converter`] turns one raw token into an [`ArgValue`]. Converters are
//! shared, cheaply cloneable handles; the built-ins ([`Converter::string`],
//! [`Converter::int`], [`Converter::float`]) cover the common cases and
//! [`Converter::new`] accepts any closure for domain-specific parsing.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A typed value produced by coercing one or more raw tokens.
///
/// `Absent` is the value of an `Optional`-shaped option that was never
/// supplied and has no explicit default. It serializes as `null`.
///
/// # Examples
///
/// ```
/// use argot_core::ArgValue;
///
/// let v = ArgValue::Int(42);
/// assert_eq!(v.as_int(), Some(42));
/// assert!(!v.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// Boolean flag value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(String),
    /// Ordered sequence of values.
    List(Vec<ArgValue>),
    /// No value was supplied (and no default applies).
    Absent,
}

impl ArgValue {
    /// Returns the boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the list payload, if this is a `List`.
    pub fn as_list(&self) -> Option<&[ArgValue]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Whether this value is `Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "{}", rendered.join(", "))
            }
            Self::Absent => Ok(()),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ArgValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for ArgValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<ArgValue>> for ArgValue {
    fn from(items: Vec<ArgValue>) -> Self {
        Self::List(items)
    }
}

type ConvertFn = dyn Fn(&str) -> Result<ArgValue, String> + Send + Sync;

/// Converts one raw token into a typed [`ArgValue`].
///
/// Conversion failures are plain messages; the coercer wraps them into
/// [`ValidationError::ConversionFailed`](crate::ValidationError) together
/// with the option name, so converters never need to know which option they
/// serve.
///
/// # Examples
///
/// ```
/// use argot_core::{ArgValue, Converter};
///
/// let int = Converter::int();
/// assert_eq!(int.apply("42"), Ok(ArgValue::Int(42)));
/// assert!(int.apply("forty-two").is_err());
/// ```
#[derive(Clone)]
pub struct Converter {
    name: &'static str,
    func: Arc<ConvertFn>,
}

impl Converter {
    /// Wraps an arbitrary conversion closure.
    ///
    /// The `name` is used in `Debug` output and help rendering only.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{ArgValue, Converter};
    ///
    /// let port = Converter::new("port", |token| {
    ///     token
    ///         .parse::<u16>()
    ///         .map(|p| ArgValue::Int(i64::from(p)))
    ///         .map_err(|e| e.to_string())
    /// });
    /// assert_eq!(port.apply("8080"), Ok(ArgValue::Int(8080)));
    /// assert!(port.apply("99999").is_err());
    /// ```
    pub fn new(
        name: &'static str,
        f: impl Fn(&str) -> Result<ArgValue, String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            func: Arc::new(f),
        }
    }

    /// Identity converter: the token becomes an [`ArgValue::Str`] unchanged.
    pub fn string() -> Self {
        Self::new("string", |token| Ok(ArgValue::Str(token.to_string())))
    }

    /// Parses the token as an `i64`.
    pub fn int() -> Self {
        Self::new("int", |token| {
            token
                .parse::<i64>()
                .map(ArgValue::Int)
                .map_err(|e| e.to_string())
        })
    }

    /// Parses the token as an `f64`.
    pub fn float() -> Self {
        Self::new("float", |token| {
            token
                .parse::<f64>()
                .map(ArgValue::Float)
                .map_err(|e| e.to_string())
        })
    }

    /// Applies the conversion to a single token.
    pub fn apply(&self, token: &str) -> Result<ArgValue, String> {
        (self.func)(token)
    }

    /// Display name of the conversion (e.g. `"int"`).
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Converter").field(&self.name).finish()
    }
}

//! Declarative command-line argument parsing.
//!
//! Given a schema of named options — each with a target value shape, arity,
//! defaulting and abbreviation rules — and a raw token sequence, produce a
//! validated mapping from option name to typed value, or a precise
//! diagnostic:
//!
//! - [`OptionSpec`] — one declared option: name, shape, abbreviation policy,
//!   positional flag, help text, default, occurrence limit.
//! - [`ValueShape`] — the closed set of coercion targets: `Scalar`, `Bool`,
//!   `List`, `Literal`, `Optional`.
//! - [`Schema`] / [`ArgParser`] — builder/finalize split: the schema is
//!   mutable while options are declared, then frozen into an immutable
//!   parser that may be shared across calls and threads.
//! - [`Matches`] — the immutable result mapping, serde-serializable.
//! - [`ValidationError`] / [`SchemaError`] — runtime diagnostics vs.
//!   build-time configuration bugs, kept on separate paths.
//!
//! # Example
//!
//! ```
//! use argot_core::{ArgValue, Converter, OptionSpec, Schema, ValueShape};
//!
//! let parser = Schema::new("snap")
//!     .description("Snapshot a directory tree")
//!     .option(
//!         OptionSpec::new("source", ValueShape::Scalar(Converter::string()))
//!             .positional()
//!             .with_help("Directory to snapshot"),
//!     )
//!     .option(OptionSpec::flag("verbose"))
//!     .option(
//!         OptionSpec::new("tags", ValueShape::List(Converter::string()))
//!             .max_occurrences(2)
//!             .with_default(ArgValue::List(Vec::new())),
//!     )
//!     .finalize()
//!     .expect("schema is well formed");
//!
//! let matches = parser
//!     .parse_from(["src", "--tags", "a", "b", "--verbose"])
//!     .unwrap();
//!
//! assert_eq!(matches.get_str("source"), Some("src"));
//! assert_eq!(matches.get_bool("verbose"), Some(true));
//! assert_eq!(matches.get_list("tags").map(<[_]>::len), Some(2));
//! ```

mod coerce;
mod error;
mod group;
mod help;
mod option;
mod parser;
mod resolver;
mod shape;
mod value;

pub use error::{SchemaError, ValidationError};
pub use option::OptionSpec;
pub use parser::{ArgParser, Matches, PostValidate, Schema};
pub use resolver::NameTable;
pub use shape::ValueShape;
pub use value::{ArgValue, Converter};

//! Help page rendering from option descriptors.
//!
//! Two-column layout with the left column width computed per section, so
//! descriptions line up regardless of flag-name lengths.

use crate::option::OptionSpec;
use crate::parser::ArgParser;
use crate::shape::ValueShape;

pub(crate) fn render(parser: &ArgParser) -> String {
    let mut out = String::new();

    if parser.description().trim().is_empty() {
        out.push_str(parser.name());
        out.push('\n');
    } else {
        out.push_str(&format!("{} - {}\n", parser.name(), parser.description().trim()));
    }

    out.push_str(&format!("\nUsage: {} [OPTIONS]", parser.name()));
    for spec in parser.options().iter().filter(|s| s.positional) {
        if spec.required() {
            out.push_str(&format!(" <{}>", spec.name.to_ascii_uppercase()));
        } else {
            out.push_str(&format!(" [{}]", spec.name.to_ascii_uppercase()));
        }
    }
    out.push('\n');

    let positionals: Vec<&OptionSpec> = parser.options().iter().filter(|s| s.positional).collect();
    let options: Vec<&OptionSpec> = parser.options().iter().filter(|s| !s.positional).collect();

    if !positionals.is_empty() {
        out.push_str("\nArguments:\n");
        push_rows(
            &mut out,
            positionals
                .iter()
                .map(|s| (positional_left(s), right_column(s)))
                .collect(),
        );
    }

    if !options.is_empty() {
        out.push_str("\nOptions:\n");
        push_rows(
            &mut out,
            options
                .iter()
                .map(|s| (option_left(parser, s), right_column(s)))
                .collect(),
        );
    }

    out
}

fn push_rows(out: &mut String, rows: Vec<(String, String)>) {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    for (left, help) in rows {
        if help.is_empty() {
            out.push_str(&format!("  {left}\n"));
        } else {
            out.push_str(&format!("  {left:width$}  {help}\n"));
        }
    }
}

fn positional_left(spec: &OptionSpec) -> String {
    let name = spec.name.to_ascii_uppercase();
    if spec.required() {
        format!("<{name}>")
    } else {
        format!("[{name}]")
    }
}

fn option_left(parser: &ArgParser, spec: &OptionSpec) -> String {
    let mut left = spec.long_form();
    if let Some(short) = parser.name_table().short_form(&spec.name) {
        left.push_str(&format!(", {short}"));
    }
    if let Some(placeholder) = value_placeholder(&spec.shape) {
        left.push_str(&format!(" {placeholder}"));
    }
    left
}

fn value_placeholder(shape: &ValueShape) -> Option<String> {
    match shape {
        ValueShape::Bool => None,
        ValueShape::Scalar(converter) => Some(format!("<{}>", converter.name().to_ascii_uppercase())),
        ValueShape::List(converter) => Some(format!("<{}>...", converter.name().to_ascii_uppercase())),
        ValueShape::Literal(allowed) => Some(format!("<{}>", allowed.join("|"))),
        ValueShape::Optional(inner) => value_placeholder(inner),
    }
}

fn right_column(spec: &OptionSpec) -> String {
    let mut out = spec.help.as_deref().unwrap_or("").trim().to_string();
    if spec.required() && !spec.positional {
        if out.is_empty() {
            out.push_str("required");
        } else {
            out.push_str(" (required)");
        }
    }
    if let Some(default) = &spec.default {
        let rendered = default.to_string();
        if !rendered.is_empty() {
            if out.is_empty() {
                out.push_str(&format!("[default: {rendered}]"));
            } else {
                out.push_str(&format!(" [default: {rendered}]"));
            }
        }
    }
    out
}

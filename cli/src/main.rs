//! Demonstration binary: parses its own argv with `argot-core` and renders
//! the result with `argot-term`.
//!
//! The schema models a fictional snapshot tool and exercises every value
//! shape: positional scalar and list, boolean flags, repeated lists with an
//! occurrence limit, literal sets, and an optional integer with a
//! post-validation check.

use std::process::ExitCode;

use argot_core::{ArgParser, ArgValue, Converter, Matches, OptionSpec, Schema, ValueShape};
use argot_term::style::{ansi256, paint, Attribute, TextStyle};
use argot_term::Menu;
use tracing::debug;

fn build_parser() -> ArgParser {
    Schema::new("argot-demo")
        .description("Snapshot a directory tree (demonstration schema)")
        .option(
            OptionSpec::new("source", ValueShape::Scalar(Converter::string()))
                .positional()
                .with_help("Directory to snapshot"),
        )
        .option(
            OptionSpec::new("output", ValueShape::Scalar(Converter::string()))
                .with_default("snapshot.json")
                .with_help("Where to write the snapshot"),
        )
        .option(
            OptionSpec::new("tags", ValueShape::List(Converter::string()))
                .max_occurrences(3)
                .with_default(ArgValue::List(Vec::new()))
                .with_help("Labels attached to the snapshot"),
        )
        .option(
            OptionSpec::new("mode", ValueShape::literal(["fast", "safe"]))
                .with_default("safe")
                .with_help("Trade-off between speed and durability"),
        )
        .option(
            OptionSpec::new("jobs", ValueShape::optional(ValueShape::Scalar(Converter::int())))
                .with_help("Number of parallel jobs"),
        )
        .option(
            OptionSpec::new("format", ValueShape::literal(["json", "yaml"]))
                .with_default("json")
                .with_help("Output format for the parsed mapping"),
        )
        .option(OptionSpec::flag("verbose").with_help("Chatty output"))
        .option(OptionSpec::flag("interactive").with_help("Browse the result in a menu"))
        .post_validate(|m| {
            if m.get_int("jobs").is_some_and(|jobs| jobs <= 0) {
                return Err("--jobs must be positive".to_string());
            }
            Ok(m)
        })
        .finalize()
        .expect("demo schema is well formed")
}

fn render(matches: &Matches) -> String {
    match matches.get_str("format") {
        Some("yaml") => serde_yaml::to_string(matches).expect("mapping serializes"),
        _ => {
            let mut out = serde_json::to_string_pretty(matches).expect("mapping serializes");
            out.push('\n');
            out
        }
    }
}

fn interactive(matches: &Matches) -> std::io::Result<()> {
    let rendered = render(matches);
    let source = matches
        .get_str("source")
        .unwrap_or("<unset>")
        .to_string();
    Menu::new("argot demo")
        .heading("-- parsed arguments --")
        .action("Show parsed mapping", move || print!("{rendered}"))
        .submenu(
            Menu::new("Details").action("Show source", move || println!("source: {source}")),
        )
        .run()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parser = build_parser();

    if argv.iter().any(|a| a == "--help" || a == "-h") {
        print!("{}", parser.render_help());
        return ExitCode::SUCCESS;
    }

    match parser.parse(&argv) {
        Ok(matches) => {
            debug!(options = matches.len(), "parse succeeded");
            if matches.get_bool("interactive") == Some(true) {
                if let Err(err) = interactive(&matches) {
                    eprintln!("menu error: {err}");
                    return ExitCode::FAILURE;
                }
            } else {
                print!("{}", render(&matches));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let red = TextStyle::new().fg(ansi256(196)).attribute(Attribute::Bold);
            eprintln!("{} {err}", paint("error:", red));
            ExitCode::from(2)
        }
    }
}

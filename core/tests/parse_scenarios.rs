//! End-to-end parse scenarios over full schemas.

use argot_core::{
    ArgValue, Converter, OptionSpec, Schema, ValidationError, ValueShape,
};

fn int_scalar(name: &str) -> OptionSpec {
    OptionSpec::new(name, ValueShape::Scalar(Converter::int()))
}

#[test]
fn required_int_option_round_trip() {
    let parser = Schema::new("t")
        .option(int_scalar("name"))
        .finalize()
        .unwrap();

    let matches = parser.parse_from(["--name", "42"]).unwrap();
    assert_eq!(matches.get_int("name"), Some(42));

    assert_eq!(
        parser.parse(&[]).unwrap_err(),
        ValidationError::MissingRequiredOption("name".into())
    );

    match parser.parse_from(["--name", "abc"]).unwrap_err() {
        ValidationError::ConversionFailed { option, message } => {
            assert_eq!(option, "name");
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn scalar_with_two_tokens_is_arity_mismatch() {
    let parser = Schema::new("t")
        .option(OptionSpec::new("x", ValueShape::Scalar(Converter::string())))
        .finalize()
        .unwrap();

    assert_eq!(
        parser.parse_from(["--x", "a", "b"]).unwrap_err(),
        ValidationError::ArityMismatch("x".into())
    );
}

#[test]
fn bool_flag_presence_and_default() {
    let parser = Schema::new("t")
        .option(OptionSpec::flag("flag"))
        .finalize()
        .unwrap();

    assert_eq!(
        parser.parse_from(["--flag"]).unwrap().get_bool("flag"),
        Some(true)
    );
    assert_eq!(parser.parse(&[]).unwrap().get_bool("flag"), Some(false));
}

#[test]
fn occurrence_limit_is_exact() {
    let parser = Schema::new("t")
        .option(
            OptionSpec::new("tags", ValueShape::List(Converter::string()))
                .max_occurrences(2)
                .with_default(ArgValue::List(Vec::new())),
        )
        .finalize()
        .unwrap();

    let matches = parser
        .parse_from(["--tags", "a", "b", "--tags", "c"])
        .unwrap();
    assert_eq!(
        matches.get("tags"),
        Some(&ArgValue::List(vec![
            ArgValue::Str("a".into()),
            ArgValue::Str("b".into()),
            ArgValue::Str("c".into()),
        ]))
    );

    assert_eq!(
        parser
            .parse_from(["--tags", "a", "--tags", "b", "--tags", "c"])
            .unwrap_err(),
        ValidationError::OccurrenceLimitExceeded {
            option: "tags".into(),
            limit: 2,
        }
    );
}

#[test]
fn literal_rejects_values_outside_allowed_set() {
    let parser = Schema::new("t")
        .option(
            OptionSpec::new("mode", ValueShape::literal(["fast", "safe"]))
                .with_default(ArgValue::Str("safe".into())),
        )
        .finalize()
        .unwrap();

    assert_eq!(
        parser.parse(&[]).unwrap().get_str("mode"),
        Some("safe")
    );
    assert_eq!(
        parser.parse_from(["--mode", "fast"]).unwrap().get_str("mode"),
        Some("fast")
    );
    assert_eq!(
        parser.parse_from(["--mode", "turbo"]).unwrap_err(),
        ValidationError::InvalidLiteralValue {
            option: "mode".into(),
            value: "turbo".into(),
            allowed: vec!["fast".into(), "safe".into()],
        }
    );
}

#[test]
fn abbreviations_never_misroute() {
    let parser = Schema::new("t")
        .option(int_scalar("size").with_default(ArgValue::Int(0)))
        .option(int_scalar("seed").with_default(ArgValue::Int(0)))
        .finalize()
        .unwrap();

    let table = parser.name_table();
    let short_size = table.short_form("size").unwrap().to_string();
    let short_seed = table.short_form("seed").unwrap().to_string();
    assert_ne!(short_size, short_seed);

    let matches = parser
        .parse_from([short_size.as_str(), "1", short_seed.as_str(), "2"])
        .unwrap();
    assert_eq!(matches.get_int("size"), Some(1));
    assert_eq!(matches.get_int("seed"), Some(2));
}

#[test]
fn list_round_trip_preserves_order_and_count() {
    let parser = Schema::new("t")
        .option(
            OptionSpec::new("items", ValueShape::List(Converter::string()))
                .max_occurrences(3),
        )
        .finalize()
        .unwrap();

    let tokens = ["z", "a", "m"];
    let matches = parser
        .parse_from(["--items", "z", "a", "m"])
        .unwrap();
    let items = matches.get_list("items").unwrap();
    let back: Vec<&str> = items.iter().filter_map(ArgValue::as_str).collect();
    assert_eq!(back, tokens);

    let json = serde_json::to_value(&matches).unwrap();
    assert_eq!(json["items"], serde_json::json!(["z", "a", "m"]));
}

#[test]
fn unknown_tokens_policy_is_configurable() {
    let strict = Schema::new("t")
        .option(OptionSpec::flag("verbose"))
        .finalize()
        .unwrap();
    assert_eq!(
        strict.parse_from(["--wat"]).unwrap_err(),
        ValidationError::UnknownArgument("--wat".into())
    );

    let lenient = Schema::new("t")
        .option(OptionSpec::flag("verbose"))
        .allow_unknown(true)
        .finalize()
        .unwrap();
    let matches = lenient
        .parse_from(["--wat", "x", "y", "--verbose"])
        .unwrap();
    assert_eq!(matches.get_bool("verbose"), Some(true));
}

#[test]
fn mixed_flags_and_positionals() {
    let parser = Schema::new("t")
        .option(
            OptionSpec::new("source", ValueShape::Scalar(Converter::string())).positional(),
        )
        .option(
            OptionSpec::new("dest", ValueShape::Scalar(Converter::string())).positional(),
        )
        .option(OptionSpec::flag("force"))
        .finalize()
        .unwrap();

    // Value tokens following a flag belong to that flag's group, so the
    // positionals go first here.
    let matches = parser
        .parse_from(["a.txt", "b.txt", "--force"])
        .unwrap();
    assert_eq!(matches.get_bool("force"), Some(true));
    assert_eq!(matches.get_str("source"), Some("a.txt"));
    assert_eq!(matches.get_str("dest"), Some("b.txt"));
}

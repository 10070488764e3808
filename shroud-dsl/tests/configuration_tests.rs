//! Integration tests for complete configurations

use shroud_core::{AccessFlags, Configuration, KeepIntent, ParserSettings};
use shroud_dsl::{parse_args, parse_text, pretty_print_with_separator, round_trip, ParseError};
use shroud_test_utils::assertions::*;
use shroud_test_utils::fixtures::{sample_configuration, ConfigDir, SAMPLE_CONFIG};

fn settings() -> ParserSettings {
    ParserSettings::default()
        .with_path_separator(':')
        .with_inherit_environment(false)
}

#[test]
fn test_sample_configuration() -> Result<(), ParseError> {
    let config = parse_text("sample.pro", SAMPLE_CONFIG, &settings())?;
    assert_eq!(config, sample_configuration());
    assert_all_disjoint(&config);
    Ok(())
}

#[test]
fn test_sample_configuration_from_file() -> Result<(), ParseError> {
    let dir = ConfigDir::new();
    let path = dir.write("sample.pro", SAMPLE_CONFIG);

    let mut config = Configuration::default();
    shroud_dsl::ConfigurationParser::from_file(&path, &settings())?.parse(&mut config)?;
    assert_eq!(config, sample_configuration());
    Ok(())
}

#[test]
fn test_arguments_split_anywhere() -> Result<(), ParseError> {
    let joined = parse_args(
        ["-keep public class com.example.Main { public static void main(java.lang.String[]); }"],
        &settings(),
    )?;
    let split = parse_args(
        [
            "-keep", "public", "class", "com.example.Main", "{", "public", "static", "void",
            "main(java.lang.String[]);", "}",
        ],
        &settings(),
    )?;
    assert_eq!(joined, split);

    let main = assert_keeps_class(&joined, "com/example/Main");
    assert_eq!(main.intent, KeepIntent::KEEP);
    assert_eq!(main.access.required_set, AccessFlags::PUBLIC);
    assert_eq!(main.methods[0].descriptor.as_deref(), Some("([Ljava/lang/String;)V"));
    Ok(())
}

#[test]
fn test_windows_path_separator() -> Result<(), ParseError> {
    let settings = settings().with_path_separator(';');
    let config = parse_args(["-injars", "a.jar;b.jar"], &settings)?;
    assert_class_path(config.in_jars.as_ref(), &[("a.jar", None), ("b.jar", None)]);

    let printed = pretty_print_with_separator(&config, ';');
    assert_eq!(printed, "-injars a.jar;b.jar\n");
    Ok(())
}

#[test]
fn test_round_trip_sample_is_fixed_point() -> Result<(), ParseError> {
    let printed = round_trip(SAMPLE_CONFIG, &settings())?;
    assert_eq!(parse_text("printed.pro", &printed, &settings())?, sample_configuration());
    assert_eq!(round_trip(&printed, &settings())?, printed);
    Ok(())
}

#[test]
fn test_configuration_serializes_to_json() -> Result<(), ParseError> {
    let config = parse_text("sample.pro", SAMPLE_CONFIG, &settings())?;
    let json = serde_json::to_string(&config).unwrap();
    let back: Configuration = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
    Ok(())
}

#[test]
fn test_error_leaves_no_configuration() {
    let result = parse_text("bad.pro", "-verbose\n-keep class A {\n", &settings());
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expecting class member description or closing '}' before end of line 2 of file 'bad.pro'"
    );
}

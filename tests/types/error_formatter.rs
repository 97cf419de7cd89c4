use std::io;

use structured_error::{kvs, ChainFormatConfig, StructuredError};

fn sample() -> StructuredError {
    let io_err = io::Error::new(io::ErrorKind::TimedOut, "timed out");
    let inner = StructuredError::wrap_opaque(io_err, "connecting").with_kv("host", "db-1");
    StructuredError::wrap(inner, "loading user").with_kvs(kvs!("user_id" => 42, "attempt" => 2))
}

#[test]
fn default_format_matches_display() {
    let err = sample();
    assert_eq!(err.fmt().to_string(), err.to_string());
    assert_eq!(err.to_string(), "loading user: connecting: timed out");
}

#[test]
fn show_kvs_appends_each_layer_pairs() {
    let err = sample();
    let rendered = err.fmt().show_kvs(true).to_string();

    assert_eq!(
        rendered,
        "loading user {user_id=42 attempt=2}: connecting {host=db-1}: timed out"
    );
}

#[test]
fn custom_separator() {
    let err = sample();
    let rendered = err.fmt().with_separator(" <- ").to_string();

    assert_eq!(rendered, "loading user <- connecting <- timed out");
}

#[test]
fn cascaded_indents_by_depth() {
    let err = sample();
    let rendered = err.fmt().cascaded().to_string();

    let expected = "loading user {user_id=42 attempt=2}\n  connecting {host=db-1}\n    timed out";
    assert_eq!(rendered, expected);
}

#[test]
fn alternate_display_uses_cascaded_form() {
    let err = sample();
    assert_eq!(format!("{:#}", err), err.fmt().cascaded().to_string());
}

#[test]
fn cascade_switches_default_separator_to_newline() {
    let err = StructuredError::wrap(StructuredError::new("inner"), "outer");
    let rendered = err.fmt().cascade(true).to_string();

    assert_eq!(rendered, "outer\n  inner");
}

#[test]
fn config_with_kvs_skips_layers_without_pairs() {
    let err = StructuredError::wrap(StructuredError::new("inner").with_kv("a", 1), "outer");
    let rendered = err.fmt().with_config(ChainFormatConfig::with_kvs()).to_string();

    assert_eq!(rendered, "outer: inner {a=1}");
}

use std::error::Error;
use std::io;

use structured_error::{kvs, new, wrap, wrap_optional, Cause, StructuredError};

#[test]
fn new_has_no_cause_and_renders_message() {
    let err = StructuredError::new("hello").with_kv("a", 1);

    assert_eq!(err.message(), "hello");
    assert!(err.cause().is_none());
    assert!(err.source().is_none());
    assert_eq!(err.to_string(), "hello");
    assert_eq!(err.kvs(), &kvs!("a" => 1));
}

#[test]
fn wrap_renders_message_and_cause() {
    let e1 = StructuredError::new("m1");
    let e2 = StructuredError::wrap(e1.clone(), "m2");

    assert_eq!(e2.to_string(), format!("m2: {}", e1));
    assert!(e2.cause().is_some_and(Cause::is_structured));
}

#[test]
fn wrap_keeps_pairs_per_layer() {
    let e1 = StructuredError::new("m1").with_kv("a", 1);
    let e2 = StructuredError::wrap(e1, "m2").with_kv("b", 2);

    assert_eq!(e2.kvs(), &kvs!("b" => 2));
    assert_eq!(e2.kvs().len(), 1, "cause pairs are not merged into the wrapper");
}

#[test]
fn three_layers_render_outer_first() {
    let e1 = new("m1", kvs!("k" => "v"));
    let e2 = wrap(e1, "m2", kvs!("k2" => "v2"));
    let e3 = wrap(e2, "m3", kvs!("k3" => "v3"));

    assert_eq!(e3.to_string(), "m3: m2: m1");
    assert_eq!(e3.collect_kvs().len(), 3);
}

#[test]
fn rendering_matches_layer_concatenation() {
    let messages = ["read header", "open archive", "import"];
    let mut err = StructuredError::new(messages[0]);
    for message in &messages[1..] {
        err = StructuredError::wrap(err, *message);
    }

    let expected: Vec<&str> = messages.iter().rev().copied().collect();
    assert_eq!(err.to_string(), expected.join(": "));
}

#[test]
fn wrap_opaque_renders_foreign_error() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let err = StructuredError::wrap_opaque(io_err, "reading config").with_kv("path", "/etc/app.toml");

    assert_eq!(err.to_string(), "reading config: no such file");
    assert!(!err.cause().is_some_and(Cause::is_structured));

    let source = err.source().expect("source is set");
    assert_eq!(source.to_string(), "no such file");
    assert!(source.downcast_ref::<io::Error>().is_some());
}

#[test]
fn source_exposes_structured_cause() {
    let err = StructuredError::wrap(StructuredError::new("inner"), "outer");

    let source = err.source().expect("source is set");
    let inner = source.downcast_ref::<StructuredError>().expect("structured cause");
    assert_eq!(inner.message(), "inner");
}

#[test]
fn wrap_optional_without_cause_equals_new() {
    let err = wrap_optional(None::<StructuredError>, "lonely", kvs!("a" => 1));

    assert!(err.cause().is_none());
    assert_eq!(err.to_string(), "lonely");

    let wrapped = wrap_optional(Some(StructuredError::new("inner")), "outer", kvs!());
    assert_eq!(wrapped.to_string(), "outer: inner");
}

#[test]
fn boxed_dyn_error_becomes_opaque_cause() {
    let boxed: Box<dyn Error + Send + Sync> = "plain failure".into();
    let err = StructuredError::wrap(boxed, "running job");

    assert_eq!(err.to_string(), "running job: plain failure");
    assert!(err.collect_kvs().is_empty());
    assert!(err.cause().is_some_and(|c| !c.is_structured()));
}

#[test]
fn clone_shares_the_cause() {
    let err = StructuredError::wrap(StructuredError::new("inner").with_kv("a", 1), "outer");
    let copy = err.clone();

    assert_eq!(copy.to_string(), err.to_string());
    assert_eq!(copy.collect_kvs(), err.collect_kvs());
}

#[test]
fn error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<StructuredError>();
    assert_send_sync::<Cause>();
}

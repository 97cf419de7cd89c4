use std::io;

use structured_error::traits::{ResultExt, StructuredResultExt};
use structured_error::{is, kvs, StructuredError, StructuredResult, Value};

fn open(path: &'static str) -> StructuredResult<()> {
    Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "missing"))
        .wrap_err("opening file", kvs!("path" => path))
}

#[test]
fn wrap_err_on_err() {
    let err = open("/tmp/x").unwrap_err();

    assert_eq!(err.to_string(), "opening file: missing");
    assert_eq!(err.kvs(), &kvs!("path" => "/tmp/x"));
    assert!(err.cause().is_some_and(|c| !c.is_structured()));
}

#[test]
fn wrap_err_on_ok() {
    let result: Result<i32, io::Error> = Ok(42);
    let wrapped = result.wrap_err("should not appear", kvs!());
    assert_eq!(wrapped.unwrap(), 42);
}

#[test]
fn wrap_err_with_is_lazy_on_ok() {
    let mut called = false;
    let result: Result<(), io::Error> = Ok(());

    let _ = result.wrap_err_with(|| {
        called = true;
        ("never", kvs!())
    });
    assert!(!called, "closure for wrap_err_with should not be called on Ok result");
}

#[test]
fn wrap_err_with_builds_on_err() {
    let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
    let err = result.wrap_err_with(|| (format!("rendering row {}", 3), kvs!("row" => 3))).unwrap_err();

    assert_eq!(err.message(), "rendering row 3");
    assert!(is(&err, &std::fmt::Error));
}

#[test]
fn structured_wrap_keeps_inner_pairs_reachable() {
    let err = open("/etc/app.toml")
        .wrap("loading settings", kvs!("profile" => "prod", "path" => "override"))
        .unwrap_err();

    let kvs = err.collect_kvs();
    assert_eq!(kvs.len(), 3);
    assert_eq!(kvs.get("path"), Some(&Value::from("override")));
    assert_eq!(err.to_string(), "loading settings: opening file: missing");
}

#[test]
fn structured_wrap_with_is_lazy_on_ok() {
    let mut called = false;
    let result: StructuredResult<u8> = Ok(1);

    let value = result
        .wrap_with(|| {
            called = true;
            ("never", kvs!())
        })
        .unwrap();
    assert_eq!(value, 1);
    assert!(!called);
}

#[test]
fn structured_wrap_with_builds_on_err() {
    let result: StructuredResult<u8> = Err(StructuredError::new("inner").with_kv("a", 1));
    let err = result.wrap_with(|| ("outer", kvs!("b" => 2))).unwrap_err();

    assert_eq!(err.collect_kvs(), kvs!("b" => 2, "a" => 1));
}

#[test]
fn wrap_err_on_structured_error_keeps_inner_pairs() {
    let result: StructuredResult<()> = Err(StructuredError::new("inner").with_kv("a", 1));
    let err = result.wrap_err("outer", kvs!("b" => 2)).unwrap_err();

    assert!(err.cause().is_some_and(|c| c.is_structured()));
    assert_eq!(err.collect_kvs(), kvs!("b" => 2, "a" => 1));
}

//! Call site capture

use metaerr::{err, params, traced, Arg, Error, MAX_STACK_DEPTH};
use serde_json::Value;
use std::cell::RefCell;

fn is_location(frame: &str) -> bool {
    frame
        .rsplit_once(':')
        .is_some_and(|(file, line)| !file.is_empty() && line.parse::<u32>().is_ok())
}

#[test]
fn test_traced_keeps_builder_semantics() {
    let e = traced!("db failed", err!("timeout"), params! { "attempt" => 2 });
    assert_eq!(e.message(), Some("timeout: db failed"));
    assert_eq!(e.meta(), &params! { "attempt" => 2 });
}

#[test]
fn test_stack_is_capped() {
    let e = traced!("capped");
    assert!(e.stack().len() <= MAX_STACK_DEPTH);
    assert!(e.stack().iter().all(|frame| is_location(frame)));
}

#[cfg(feature = "full-backtrace")]
#[test]
fn test_stack_starts_at_caller() {
    let e = traced!("here");
    let first = e.stack().first().expect("debug builds resolve file and line");
    assert!(first.contains("trace_test.rs"), "unexpected first frame {first}");
}

#[cfg(feature = "full-backtrace")]
#[test]
fn test_json_value_includes_stack() {
    let e = Error::build_with_trace([Arg::from("with stack")]);
    let value = e.to_json_value();

    let stack = value["stack"].as_array().expect("stack should be rendered");
    assert!(!stack.is_empty());
    assert!(stack.len() <= MAX_STACK_DEPTH);
    assert!(stack.iter().all(Value::is_string));
    assert_eq!(value["error"], "with stack");
}

#[cfg(feature = "full-backtrace")]
#[test]
fn test_describe_includes_stack() {
    let e = traced!("msg");
    let text = e.describe();
    assert!(text.starts_with("msg | Stack: ["));
    assert!(text.ends_with(']'));
}

#[test]
fn test_traced_without_arguments() {
    let e = traced!();
    assert!(e.is_empty());
    assert!(e.stack().len() <= MAX_STACK_DEPTH);
}

#[test]
fn test_wrapping_drops_inner_stack() {
    let inner = traced!("inner");
    let outer = err!(inner);
    assert!(outer.stack().is_empty());
    assert!(outer.to_json_value().get("stack").is_none());
}

/// Argument iterator that builds a traced error of its own while being consumed
#[cfg(feature = "full-backtrace")]
struct TracingArgs<'a> {
    inner: &'a RefCell<Option<(Error, u32)>>,
    done: bool,
}

#[cfg(feature = "full-backtrace")]
impl Iterator for TracingArgs<'_> {
    type Item = Arg;

    fn next(&mut self) -> Option<Arg> {
        if self.done {
            return None;
        }
        self.done = true;
        *self.inner.borrow_mut() = Some((traced!("inner"), line!()));
        Some(Arg::from("outer"))
    }
}

#[cfg(feature = "full-backtrace")]
#[test]
fn test_nested_trace_starts_at_its_own_caller() {
    let inner = RefCell::new(None);
    let outer = Error::build_with_trace(TracingArgs { inner: &inner, done: false });
    let outer_line = line!() - 1;

    let (inner, inner_line) = inner.into_inner().expect("iterator should have run");
    let inner_first = inner.stack().first().expect("debug builds resolve file and line");
    let outer_first = outer.stack().first().expect("debug builds resolve file and line");

    assert!(inner_first.ends_with(&format!("trace_test.rs:{inner_line}")), "inner frame {inner_first}");
    assert!(outer_first.ends_with(&format!("trace_test.rs:{outer_line}")), "outer frame {outer_first}");
    assert_eq!(outer.message(), Some("outer"));
}

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use stacklog::{stack, Emitter, ErrorsValue, Level, Record, LOG_META_ENV};

fn capturing(emitter: Emitter) -> (Emitter, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&lines);
    let emitter = emitter.with_sink(move |line| captured.lock().unwrap().push(line.to_string()));
    (emitter, lines)
}

fn only_line(lines: &Arc<Mutex<Vec<String>>>) -> String {
    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    lines[0].clone()
}

#[test]
fn empty_record_emits_level_only() {
    let (emitter, lines) = capturing(Emitter::new());

    emitter.log(Record::new());

    assert_eq!(only_line(&lines), r#"{"level":"INFO"}"#);
}

#[test]
fn recognized_fields_emit_in_schema_order() {
    let (emitter, lines) = capturing(Emitter::new());

    emitter.log(
        Record::new()
            .level(Level::Warn)
            .message("Hello world")
            .code("03030303")
            .data(json!({"hello": "world"})),
    );

    assert_eq!(
        only_line(&lines),
        r#"{"level":"WARN","message":"Hello world","code":"03030303","data":{"hello":"world"}}"#
    );
}

#[test]
fn time_aliases_to_metric_in_ms() {
    let (emitter, lines) = capturing(Emitter::new());

    emitter.log(
        Record::new()
            .level(Level::Warn)
            .message("Hello world")
            .code("03030303")
            .time(34)
            .unit("seconds")
            .data("hello"),
    );

    // `time` wins over any caller-chosen unit.
    assert_eq!(
        only_line(&lines),
        r#"{"level":"WARN","message":"Hello world","code":"03030303","metric":34,"unit":"ms","data":"hello"}"#
    );
}

#[test]
fn metric_keeps_caller_unit_when_time_absent() {
    let (emitter, lines) = capturing(Emitter::new());

    emitter.log(
        Record::new()
            .level(Level::Warn)
            .metric(34)
            .unit("seconds")
            .op_id("1234"),
    );

    assert_eq!(
        only_line(&lines),
        r#"{"level":"WARN","metric":34,"unit":"seconds","op_id":"1234"}"#
    );
}

#[test]
fn unit_without_metric_is_omitted() {
    let (emitter, lines) = capturing(Emitter::new());

    emitter.log(Record::new().unit("seconds"));

    assert_eq!(only_line(&lines), r#"{"level":"INFO"}"#);
}

#[test]
fn non_numeric_time_is_dropped() {
    let (emitter, lines) = capturing(Emitter::new());

    emitter.log(Record::new().time("fast"));

    assert_eq!(only_line(&lines), r#"{"level":"INFO"}"#);
}

#[test]
fn level_normalization_follows_aliases() {
    assert_eq!(Level::parse("warning"), Level::Warn);
    assert_eq!(Level::parse(" WARN "), Level::Warn);
    assert_eq!(Level::parse("critical"), Level::Critical);
    assert_eq!(Level::parse("debug"), Level::Info);
    assert_eq!(Level::parse(""), Level::Info);
}

#[test]
fn meta_defaults_lead_the_record() {
    let (emitter, lines) = capturing(Emitter::with_meta(json!({"api_name": "hello"})));

    emitter.log(Record::new().message("Hello world"));

    assert_eq!(
        only_line(&lines),
        r#"{"api_name":"hello","level":"INFO","message":"Hello world"}"#
    );
}

#[test]
fn non_object_meta_falls_back_to_empty() {
    let (emitter, lines) = capturing(Emitter::with_meta(json!(["not", "an", "object"])));

    emitter.log(Record::new());

    assert_eq!(only_line(&lines), r#"{"level":"INFO"}"#);
}

#[test]
fn meta_loads_from_environment() {
    // Single test touches the variable; integration tests in this file run in
    // one process.
    std::env::set_var(LOG_META_ENV, r#"{"api_name":"hello"}"#);
    let (emitter, lines) = capturing(Emitter::from_env());

    std::env::set_var(LOG_META_ENV, "{not json");
    let malformed = Emitter::from_env();

    std::env::remove_var(LOG_META_ENV);
    let absent = Emitter::from_env();

    emitter.log(Record::new());

    assert_eq!(only_line(&lines), r#"{"api_name":"hello","level":"INFO"}"#);
    assert!(malformed.meta().is_empty());
    assert!(absent.meta().is_empty());
}

#[test]
fn passthrough_fields_follow_recognized_ones() {
    let (emitter, lines) = capturing(Emitter::new());

    emitter.log(
        Record::new()
            .level(Level::Warn)
            .message("Hello world")
            .field("hello", "world"),
    );

    assert_eq!(
        only_line(&lines),
        r#"{"level":"WARN","message":"Hello world","hello":"world"}"#
    );
}

#[test]
fn passthrough_shadows_defaults_but_not_recognized_fields() {
    let (emitter, lines) = capturing(Emitter::with_meta(json!({"region": "eu-west-1"})));

    emitter.log(
        Record::new()
            .level(Level::Error)
            .field("region", "us-east-1")
            .field("level", "nope"),
    );

    // The default keeps its position with the caller's value; the populated
    // recognized field is untouched.
    assert_eq!(
        only_line(&lines),
        r#"{"region":"us-east-1","level":"ERROR"}"#
    );
}

#[test]
fn errors_field_renders_stacked_error() {
    let (emitter, lines) = capturing(Emitter::new());
    let err = stack!["Should fail", "Should fail again", "Failed again"];

    emitter.log(Record::new().errors(err));

    let parsed: Value = serde_json::from_str(&only_line(&lines)).unwrap();
    assert_eq!(
        parsed["errors"],
        json!("error: Should fail\nerror: Should fail again\nerror: Failed again")
    );
}

#[test]
fn errors_field_joins_mixed_list_in_order() {
    let (emitter, lines) = capturing(Emitter::new());
    let stacked = stack!["Should fail", "Failed again"];
    let boom = std::io::Error::other("Boom");

    emitter.log(Record::new().errors(ErrorsValue::List(vec![
        ErrorsValue::from_error(&boom),
        ErrorsValue::from("extra text"),
        ErrorsValue::from(stacked),
    ])));

    let parsed: Value = serde_json::from_str(&only_line(&lines)).unwrap();
    assert_eq!(
        parsed["errors"],
        json!("Boom\nextra text\nerror: Should fail\nerror: Failed again")
    );
}

#[test]
fn empty_errors_list_is_omitted() {
    let (emitter, lines) = capturing(Emitter::new());

    emitter.log(Record::new().errors(ErrorsValue::List(Vec::new())));

    assert_eq!(only_line(&lines), r#"{"level":"INFO"}"#);
}

#[test]
fn unserializable_data_is_dropped_not_fatal() {
    let (emitter, lines) = capturing(Emitter::new());

    // Non-string map keys cannot become a JSON object.
    let bad: std::collections::HashMap<Vec<u8>, &str> =
        std::collections::HashMap::from([(vec![1, 2], "x")]);

    emitter.log(Record::new().message("still emitted").data(bad));

    assert_eq!(
        only_line(&lines),
        r#"{"level":"INFO","message":"still emitted"}"#
    );
}

#[test]
fn panicking_sink_does_not_escape() {
    let emitter = Emitter::new().with_sink(|_| panic!("sink exploded"));

    emitter.log(Record::new().message("swallowed"));
}

#[test]
fn empty_message_is_omitted() {
    let (emitter, lines) = capturing(Emitter::new());

    emitter.log(Record::new().message(""));

    assert_eq!(only_line(&lines), r#"{"level":"INFO"}"#);
}

#[test]
fn level_shorthands_emit_messages() {
    let (emitter, lines) = capturing(Emitter::new());

    emitter.warn("replica lagging");

    assert_eq!(
        only_line(&lines),
        r#"{"level":"WARN","message":"replica lagging"}"#
    );
}

#[test]
fn fresh_op_ids_are_unique_hex() {
    let a = stacklog::fresh_op_id();
    let b = stacklog::fresh_op_id();

    assert_ne!(a, b);
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

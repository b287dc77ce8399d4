use objectform::{
    DomNode, DuplicatePolicy, FieldValue, FormObject,
    cli::commands::{cmd_extract, cmd_fill, run_extract, run_fill},
    extract,
    form::filter::FieldFilter,
    scope::loader::{load_object, load_scope, parse_object},
    trace::{
        logger::TraceLogger,
        trace::{FieldOutcome, Operation, TraceEvent, value_fingerprint},
    },
};
use serde_json::Value;

use crate::common::utils::{fixture, two_field_form};

mod common;

fn read_trace(path: &std::path::Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

// =========================================================================
// extract command
// =========================================================================

#[test]
fn cmd_extract_writes_json_object() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");

    cmd_extract(
        &fixture("signup_form.html"),
        None,
        &FieldFilter {
            skip: vec!["action".into()],
            ..FieldFilter::default()
        },
        out.to_str(),
        0,
        &TraceLogger::disabled(),
    )
    .unwrap();

    let obj = load_object(out.to_str().unwrap()).unwrap();
    assert_eq!(obj.len(), 6);
    assert!(!obj.contains_key("action"));
    assert_eq!(obj["newsletter"], FieldValue::Bool(true));
}

#[test]
fn cmd_extract_into_seed_keeps_extra_keys() {
    let dir = tempfile::tempdir().unwrap();
    let seed = dir.path().join("seed.json");
    let out = dir.path().join("out.json");
    std::fs::write(&seed, r#"{"source": "import", "display_name": "old"}"#).unwrap();

    cmd_extract(
        &fixture("settings_snapshot.json"),
        seed.to_str(),
        &FieldFilter::default(),
        out.to_str(),
        0,
        &TraceLogger::disabled(),
    )
    .unwrap();

    let obj = load_object(out.to_str().unwrap()).unwrap();
    let keys: Vec<_> = obj.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["source", "display_name", "notifications", "tag"]);
    assert_eq!(obj["display_name"], FieldValue::Text("ada".into()));
}

#[test]
fn cmd_extract_missing_scope_fails() {
    let result = cmd_extract(
        "tests/fixtures/nope.html",
        None,
        &FieldFilter::default(),
        None,
        0,
        &TraceLogger::disabled(),
    );
    assert!(result.is_err());
}

// =========================================================================
// fill command
// =========================================================================

#[test]
fn cmd_fill_writes_filled_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let values = dir.path().join("values.json");
    let out = dir.path().join("filled.json");
    std::fs::write(
        &values,
        r#"{"email": "grace@example.com", "terms": true, "newsletter": false, "missing": "x"}"#,
    )
    .unwrap();

    cmd_fill(
        &fixture("signup_form.html"),
        values.to_str().unwrap(),
        DuplicatePolicy::All,
        out.to_str(),
        0,
        &TraceLogger::disabled(),
    )
    .unwrap();

    let filled = load_scope(out.to_str().unwrap()).unwrap();
    let obj = extract(&filled);
    assert_eq!(obj["email"], FieldValue::Text("grace@example.com".into()));
    assert_eq!(obj["terms"], FieldValue::Bool(true));
    assert_eq!(obj["newsletter"], FieldValue::Bool(false));
    assert_eq!(obj["plan"], FieldValue::Text("pro".into()), "Untouched fields keep values");
    assert!(!obj.contains_key("missing"));
}

#[test]
fn cmd_fill_rejects_invalid_values_file() {
    let dir = tempfile::tempdir().unwrap();
    let values = dir.path().join("values.json");
    std::fs::write(&values, r#"{"age": 42}"#).unwrap();

    let result = cmd_fill(
        &fixture("settings_snapshot.json"),
        values.to_str().unwrap(),
        DuplicatePolicy::All,
        None,
        0,
        &TraceLogger::disabled(),
    );
    assert!(result.is_err());
}

#[test]
fn run_fill_honours_first_policy_on_snapshot() {
    let mut scope = load_scope(&fixture("settings_snapshot.json")).unwrap();
    let values = parse_object(r#"{"tag": "only-first"}"#).unwrap();

    let unmatched = run_fill(&mut scope, &values, DuplicatePolicy::First, &TraceLogger::disabled());

    assert!(unmatched.is_empty());
    let tags: Vec<_> = scope.find_inputs("tag").iter().map(|el| el.value.clone()).collect();
    assert_eq!(tags, vec!["only-first", "second"]);
}

// =========================================================================
// Tracing
// =========================================================================

#[test]
fn run_extract_traces_assigned_and_filtered_fields() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.jsonl");
    let tracer = TraceLogger::new(trace_path.to_str().unwrap());
    assert!(tracer.is_enabled());

    let scope = DomNode::element("form")
        .with_child(DomNode::input("user", "text").with_value("ada"))
        .with_child(DomNode::input("password", "password").with_value("hunter2"));
    let filter = FieldFilter {
        skip: vec!["password".into()],
        ..FieldFilter::default()
    };

    let obj = run_extract(&scope, FormObject::new(), &filter, &tracer);
    assert_eq!(obj.len(), 1);

    let events = read_trace(&trace_path);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["operation"], "extract");
    assert_eq!(events[0]["field"], "user");
    assert_eq!(events[0]["outcome"], "assigned");
    assert_eq!(events[0]["kind"], "text");
    assert_eq!(events[1]["field"], "password");
    assert_eq!(events[1]["outcome"], "filtered");
    assert!(!events[1]["kind"].is_null(), "Filtered fields still carry a kind");

    let raw = std::fs::read_to_string(&trace_path).unwrap();
    assert!(!raw.contains("hunter2"), "Raw values never reach the trace");
    assert_eq!(
        events[1]["value_fingerprint"],
        value_fingerprint(&FieldValue::Text("hunter2".into()))
    );
}

#[test]
fn run_extract_traces_checkbox_kind() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.jsonl");
    let tracer = TraceLogger::new(trace_path.to_str().unwrap());

    run_extract(&two_field_form(), FormObject::new(), &FieldFilter::default(), &tracer);

    let events = read_trace(&trace_path);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["kind"], "text");
    assert_eq!(events[1]["field"], "b");
    assert_eq!(events[1]["kind"], "checkbox");
}

#[test]
fn log_field_on_disabled_logger_is_silent() {
    TraceLogger::disabled().log_field(
        Operation::Extract,
        "x",
        FieldOutcome::Assigned,
        None,
        &FieldValue::Bool(true),
    );
}

#[test]
fn run_fill_traces_filled_and_unmatched_fields() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.jsonl");
    let tracer = TraceLogger::new(trace_path.to_str().unwrap());

    let mut scope = two_field_form();
    let values = parse_object(r#"{"b": true, "ghost": "x"}"#).unwrap();

    let unmatched = run_fill(&mut scope, &values, DuplicatePolicy::All, &tracer);
    assert_eq!(unmatched, vec!["ghost"]);

    let events = read_trace(&trace_path);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["operation"], "fill");
    assert_eq!(events[0]["outcome"], "filled");
    assert_eq!(events[0]["kind"], "checkbox");
    assert_eq!(events[1]["field"], "ghost");
    assert_eq!(events[1]["outcome"], "unmatched");
    assert!(events[1]["kind"].is_null());
}

#[test]
fn trace_logger_appends_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let trace_path = dir.path().join("trace.jsonl");

    for field in ["one", "two"] {
        let tracer = TraceLogger::new(trace_path.to_str().unwrap());
        tracer.log(&TraceEvent::now(Operation::Extract, field).with_outcome(FieldOutcome::Assigned));
    }

    let events = read_trace(&trace_path);
    assert_eq!(events.len(), 2);
    assert_eq!(events[1]["field"], "two");
    assert!(events[0]["timestamp_ms"].as_u64().unwrap() > 0);
}

#[test]
fn trace_logger_with_bad_path_is_disabled() {
    let tracer = TraceLogger::new("/nonexistent-dir/for/sure/trace.jsonl");
    assert!(!tracer.is_enabled());
    // Logging to a disabled tracer is silent
    tracer.log(&TraceEvent::now(Operation::Fill, "x"));

    assert!(!TraceLogger::from_path(None).is_enabled());
}

#[test]
fn fingerprint_is_stable_sha1_hex() {
    let fp = value_fingerprint(&FieldValue::Text("abc".into()));
    assert_eq!(fp, "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(
        value_fingerprint(&FieldValue::Bool(true)),
        value_fingerprint(&FieldValue::Text("true".into()))
    );
}

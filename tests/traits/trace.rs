//! Tests for tracing integration.

use std::collections::HashMap;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use rail_result::traits::TraceExt;
use rail_result::Result;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

struct CapturedEvent {
    level: Level,
    fields: HashMap<&'static str, String>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

struct FieldRecorder<'a>(&'a mut HashMap<&'static str, String>);

impl Visit for FieldRecorder<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name(), format!("{value:?}"));
    }
}

#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<CapturedEvent>>>);

impl<S: Subscriber> Layer<S> for EventLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldRecorder(&mut fields));
        self.0.lock().unwrap().push(CapturedEvent { level: *event.metadata().level(), fields });
    }
}

/// Runs `f` with a subscriber that records every event, and returns them.
fn capture_events<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let log = EventLog::default();
    let subscriber = tracing_subscriber::registry().with(log.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    let events = std::mem::take(&mut *log.0.lock().unwrap());
    (out, events)
}

#[test]
fn trace_err_passes_value_through_silently() {
    let (r, events) = capture_events(|| {
        let r: Result<i32, &str> = Result::from_val(42);
        r.trace_err("load")
    });

    assert_eq!(*r, 42);
    assert!(events.is_empty());
}

#[test]
fn trace_err_emits_warn_with_operation_and_payload() {
    let (r, events) = capture_events(|| {
        let r: Result<i32, &str> = Result::from_err("failed");
        r.trace_err("load")
    });

    assert_eq!(*r.err(), "failed");
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.level, Level::WARN);
    assert_eq!(event.field("operation"), Some("load"));
    assert_eq!(event.field("error"), Some("\"failed\""));
}

#[test]
fn trace_with_emits_at_requested_level() {
    for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
        let (r, events) = capture_events(|| {
            let r: Result<(), String> = Result::from_err("x");
            r.trace_with(level, "sync")
        });

        assert!(r.has_err());
        assert_eq!(events.len(), 1, "one event at {level}");
        assert_eq!(events[0].level, level);
        assert_eq!(events[0].field("operation"), Some("sync"));
    }
}

#[test]
fn trace_err_inside_span_keeps_payload() {
    let (r, events) = capture_events(|| {
        let span = tracing::info_span!("request", id = 7);
        let _guard = span.enter();

        let r: Result<i32, i32> = Result::from_err(-1);
        r.trace_err("request")
    });

    assert_eq!(*r.err(), -1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("error"), Some("-1"));
}

#[test]
fn misuse_emits_error_event_before_panic() {
    let (outcome, events) = capture_events(|| {
        let r: Result<i32, &str> = Result::from_err("x");
        catch_unwind(AssertUnwindSafe(|| *r.val()))
    });

    assert!(outcome.is_err());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].field("kind"), Some("missing value"));
}

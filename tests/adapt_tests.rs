//! Integration tests for the failure adapters.

use optkit::adapt::{CapturedError, FailureOrigin};
use optkit::gate::{Opt, some};
use optkit::{wrap_call, wrap_error_code, wrap_exception};
use rstest::rstest;
use std::any::type_name;
use std::ffi::OsString;
use std::fmt;
use std::num::ParseIntError;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

// =============================================================================
// Wrapped functions
// =============================================================================

fn parse_int(text: &str) -> Result<i32, ParseIntError> {
    text.parse()
}

fn halve(value: i32) -> i32 {
    assert!(value % 2 == 0, "cannot halve an odd number");
    value / 2
}

fn save(name: &str) -> Result<(), String> {
    if name.is_empty() {
        Err("name must not be empty".to_string())
    } else {
        Ok(())
    }
}

fn unlink(path: &str) -> i32 {
    if path.starts_with('/') { 0 } else { -2 }
}

fn to_utf8(text: OsString) -> Result<String, OsString> {
    text.into_string()
}

fn first_byte(bytes: &[u8]) -> Result<u8, ()> {
    bytes.first().copied().ok_or(())
}

#[cfg(unix)]
fn invalid_utf8() -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(vec![b'f', 0xff, b'o'])
}

// =============================================================================
// Event recording
// =============================================================================

#[derive(Clone, Default)]
struct RecordedEvents(Arc<Mutex<Vec<(Level, String)>>>);

impl RecordedEvents {
    fn take(&self) -> Vec<(Level, String)> {
        self.0
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct FunctionField(String);

impl Visit for FunctionField {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "function" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "function" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for RecordedEvents {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let mut function = FunctionField::default();
        event.record(&mut function);
        if let Ok(mut events) = self.0.lock() {
            events.push((*event.metadata().level(), function.0));
        }
    }
}

fn with_recorded_events<R>(body: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
    let recorded = RecordedEvents::default();
    let subscriber = Registry::default().with(recorded.clone());
    let result = tracing::subscriber::with_default(subscriber, body);
    (result, recorded.take())
}

// =============================================================================
// wrap_call!
// =============================================================================

#[rstest]
#[case("10", some(10))]
#[case("-7", some(-7))]
#[case("bob", Opt::Absent)]
#[case("", Opt::Absent)]
fn test_wrap_call_descriptor(#[case] input: &str, #[case] expected: Opt<i32>) {
    let parse = wrap_call!(parse_int(text: &str) -> i32);
    assert_eq!(parse(input), expected);
}

#[rstest]
fn test_wrap_call_arity_and_closure_forms() {
    let by_arity = wrap_call!(parse_int, 1);
    assert_eq!(by_arity("42"), some(42));
    assert_eq!(by_arity("forty-two"), Opt::Absent);

    let by_closure = wrap_call!(|text: &str| text.parse::<u8>());
    assert_eq!(by_closure("255"), some(255));
    assert_eq!(by_closure("256"), Opt::Absent);
}

#[rstest]
fn test_wrap_call_catches_panics() {
    let halve = wrap_call!(halve(value: i32) -> i32);
    assert_eq!(halve(8), some(4));
    assert_eq!(halve(7), Opt::Absent);
}

#[rstest]
fn test_wrap_call_accepts_errors_without_display() {
    let convert = wrap_call!(to_utf8(text: OsString) -> String);
    assert_eq!(convert(OsString::from("plain")), some("plain".to_string()));

    let first = wrap_call!(first_byte(bytes: &[u8]) -> u8);
    assert_eq!(first(&b"abc"[..]), some(b'a'));
    assert_eq!(first(&[]), Opt::Absent);

    let to_array = wrap_call!(|bytes: Vec<u8>| <[u8; 2]>::try_from(bytes));
    assert_eq!(to_array(vec![1, 2]), some([1, 2]));
    assert_eq!(to_array(vec![1, 2, 3]), Opt::Absent);
}

#[cfg(unix)]
#[rstest]
fn test_wrap_call_rejects_invalid_unicode() {
    let convert = wrap_call!(to_utf8(text: OsString) -> String);
    assert_eq!(convert(invalid_utf8()), Opt::Absent);
}

#[rstest]
fn test_adapted_function_is_reusable() {
    let parse = wrap_call!(parse_int(text: &str) -> i32);
    let inputs = ["1", "x", "3"];
    let parsed: Vec<Opt<i32>> = inputs.into_iter().map(&parse).collect();
    assert_eq!(parsed, vec![some(1), Opt::Absent, some(3)]);
}

// =============================================================================
// wrap_exception!
// =============================================================================

#[rstest]
fn test_wrap_exception_captures_errors() {
    let checked_save = wrap_exception!(save(name: &str) -> Result<(), String>);
    assert!(checked_save("report").is_none());

    match checked_save("") {
        Opt::Present(error) => {
            assert_eq!(error.origin(), FailureOrigin::Error);
            assert_eq!(error.function(), "save");
            assert_eq!(error.message(), "name must not be empty");
            assert_eq!(
                error.downcast_ref::<String>().map(String::as_str),
                Some("name must not be empty")
            );
        }
        Opt::Absent => panic!("expected a captured error"),
    }
}

#[cfg(unix)]
#[rstest]
fn test_wrap_exception_names_errors_without_display_by_type() {
    let checked_convert = wrap_exception!(to_utf8(text: OsString));
    assert!(checked_convert(OsString::from("plain")).is_none());

    match checked_convert(invalid_utf8()) {
        Opt::Present(error) => {
            assert_eq!(error.origin(), FailureOrigin::Error);
            assert_eq!(error.message(), type_name::<OsString>());
            assert_eq!(error.downcast_ref::<OsString>(), Some(&invalid_utf8()));
        }
        Opt::Absent => panic!("expected a captured error"),
    }
}

#[rstest]
fn test_wrap_exception_captures_panics() {
    let checked_halve = wrap_exception!(halve(value: i32));
    let captured: Opt<CapturedError> = checked_halve(3);
    assert!(captured.is_some_and(|error| {
        error.is_panic() && error.message() == "cannot halve an odd number"
    }));
    assert!(checked_halve(4).is_none());
}

// =============================================================================
// wrap_error_code!
// =============================================================================

#[rstest]
#[case("/var/log/app.log", Opt::Absent)]
#[case("relative.log", some(-2))]
fn test_wrap_error_code(#[case] path: &str, #[case] expected: Opt<i32>) {
    let remove = wrap_error_code!(unlink(path: &str) -> i32);
    assert_eq!(remove(path), expected);
}

#[rstest]
fn test_wrap_error_code_closure_form() {
    let exit_status = wrap_error_code!(|code: u8| code);
    assert_eq!(exit_status(0), Opt::Absent);
    assert_eq!(exit_status(3), some(3));
}

// =============================================================================
// Logging at the adapter boundary
// =============================================================================

#[rstest]
fn test_failures_are_logged_with_function_name() {
    let parse = wrap_call!(parse_int(text: &str) -> i32);
    let checked_halve = wrap_call!(halve(value: i32) -> i32);
    let remove = wrap_error_code!(unlink(path: &str) -> i32);

    let ((), events) = with_recorded_events(|| {
        assert_eq!(parse("5"), some(5));
        assert_eq!(parse("five"), Opt::Absent);
        assert_eq!(checked_halve(1), Opt::Absent);
        assert_eq!(remove("/tmp"), Opt::Absent);
        assert_eq!(remove("tmp"), some(-2));
    });

    assert_eq!(
        events,
        vec![
            (Level::DEBUG, "parse_int".to_string()),
            (Level::WARN, "halve".to_string()),
            (Level::DEBUG, "unlink".to_string()),
        ]
    );
}

#[rstest]
fn test_closure_form_is_logged_with_call_site() {
    let (parse, line) = (wrap_call!(|text: &str| text.parse::<u8>()), line!());

    let ((), events) = with_recorded_events(|| {
        assert_eq!(parse("x"), Opt::Absent);
    });

    assert_eq!(
        events,
        vec![(Level::DEBUG, format!("closure@{}:{}", file!(), line))]
    );
}

//! Adapted functions can be stored and called repeatedly.

use optkit::adapt::CapturedError;
use optkit::gate::Opt;
use optkit::{wrap_call, wrap_error_code, wrap_exception};

struct Toolkit {
    parse: Box<dyn Fn(&str) -> Opt<i64>>,
    validate: Box<dyn Fn(&str) -> Opt<CapturedError>>,
    status: Box<dyn Fn(i32) -> Opt<i32>>,
}

fn validate(text: &str) -> Result<(), String> {
    if text.chars().all(|character| character.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("not a number: {text}"))
    }
}

fn passthrough(code: i32) -> i32 {
    code
}

fn main() {
    let toolkit = Toolkit {
        parse: Box::new(wrap_call!(|text: &str| text.parse::<i64>())),
        validate: Box::new(wrap_exception!(validate(text: &str))),
        status: Box::new(wrap_error_code!(passthrough(code: i32) -> i32)),
    };

    for _ in 0..3 {
        assert_eq!((toolkit.parse)("12"), Opt::Present(12));
        assert!((toolkit.validate)("12").is_none());
        assert!((toolkit.validate)("1x").is_some());
        assert_eq!((toolkit.status)(0), Opt::Absent);
        assert_eq!((toolkit.status)(7), Opt::Present(7));
    }
}

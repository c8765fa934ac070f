//! The `chain!` macro for existential application.

/// Applies a step to the value of an optional, short-circuiting on absence.
///
/// # Syntax
///
/// ```text
/// chain!(head => .method(args).field.other())   // dotted form
/// chain!(head, step_function)                    // function form
/// ```
///
/// `head` may be bare or optional (see [`to_opt!`](crate::to_opt)) and is
/// evaluated exactly once. If it is absent, the step is never evaluated. If
/// it is present, the whole step runs unconditionally on the contained value:
/// presence is only checked at the head.
///
/// The result depends on what the step produces:
///
/// | Step result | `chain!` result |
/// |-------------|-----------------|
/// | `Opt<U>`, `Option<U>` or `Chain<U>` | `Chain<U>` (flattened) |
/// | `()` | `()` (the step only ran for its effects) |
/// | any other `R` | `Chain<R>` |
///
/// # Examples
///
/// ## Dotted access
///
/// ```rust
/// use optkit::chain;
/// use optkit::gate::{Opt, some};
///
/// // `find` returns `Option<usize>`, which is flattened.
/// assert_eq!(chain!(some("Hello") => .find('l')), Opt::Present(2));
///
/// // `len` returns a bare `usize`, which is wrapped.
/// assert_eq!(chain!(some("Hello") => .trim().len()), Opt::Present(5));
/// ```
///
/// ## Absence skips the step and its side effects
///
/// ```rust
/// use optkit::chain;
/// use optkit::gate::{Opt, none};
///
/// let mut calls = 0;
/// let mut count = |text: &str| {
///     calls += 1;
///     text.len()
/// };
/// let absent: Opt<&str> = none();
/// assert_eq!(chain!(absent, |text| count(text)), Opt::Absent);
/// assert_eq!(calls, 0);
/// ```
///
/// ## Void steps
///
/// ```rust
/// use optkit::chain;
/// use optkit::gate::some;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// chain!(some(&log) => .borrow_mut().push("visited"));
/// assert_eq!(*log.borrow(), vec!["visited"]);
/// ```
#[macro_export]
macro_rules! chain {
    ($head:expr => $($step:tt)+) => {
        match $crate::to_opt!($head) {
            $crate::gate::Opt::Present(value) => {
                #[allow(unused_imports)]
                use $crate::chain::__private::{FlattenKind as _, VoidKind as _, WrapKind as _};
                let result = value $($step)+;
                (&&result).step_kind().finish(result)
            }
            $crate::gate::Opt::Absent => ::core::default::Default::default(),
        }
    };

    ($head:expr, $step:expr $(,)?) => {
        match $crate::to_opt!($head) {
            $crate::gate::Opt::Present(value) => {
                #[allow(unused_imports)]
                use $crate::chain::__private::{FlattenKind as _, VoidKind as _, WrapKind as _};
                let result = ($step)(value);
                (&&result).step_kind().finish(result)
            }
            $crate::gate::Opt::Absent => ::core::default::Default::default(),
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::chain::Chain;
    use crate::gate::{Opt, none, some};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_dotted_presence() {
        let result: Chain<usize> = chain!(some("Hello") => .find('l'));
        assert_eq!(result, some(2));
    }

    #[rstest]
    fn test_dotted_absence_keeps_step_type() {
        let absent: Opt<&str> = none();
        let result: Chain<usize> = chain!(absent => .find('l'));
        assert!(result.is_none());
    }

    #[rstest]
    fn test_bare_head_is_present() {
        assert_eq!(chain!("abc" => .len()), some(3));
    }

    #[rstest]
    fn test_multi_step_runs_after_head_check() {
        let steps = Cell::new(0);
        let bump = |value: i32| {
            steps.set(steps.get() + 1);
            value + 1
        };
        let result = chain!(some(1), |value| bump(bump(value)));
        assert_eq!(result, some(3));
        assert_eq!(steps.get(), 2);

        let skipped = chain!(none::<i32>(), |value| bump(bump(value)));
        assert_eq!(skipped, Opt::Absent);
        assert_eq!(steps.get(), 2);
    }

    #[rstest]
    fn test_nested_chain_flattens() {
        let inner = chain!(some("  padded ") => .trim());
        let outer = chain!(inner => .strip_prefix("pad"));
        assert_eq!(outer, some("ded"));
    }

    #[rstest]
    fn test_void_step_on_absent() {
        let calls = Cell::new(0);
        let absent: Opt<&Cell<i32>> = none();
        chain!(absent => .set(calls.get() + 1));
        chain!(none::<i32>(), |_value| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
    }
}

//! Integration tests for `opt_and!` and `opt_or!`.

#![cfg(feature = "logic")]

use optkit::gate::{Opt, none, some};
use optkit::logic::{and_all, or_any};
use optkit::{opt_and, opt_or};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Short-circuiting
// =============================================================================

#[rstest]
fn test_and_skips_after_absent() {
    let evaluated = Cell::new(false);
    let side_effect = || {
        evaluated.set(true);
        some(1)
    };

    assert_eq!(opt_and!(none::<i32>(), side_effect()), Opt::Absent);
    assert!(!evaluated.get());
}

#[rstest]
fn test_and_returns_last_when_all_present() {
    assert_eq!(opt_and!(some('a'), some("b")), some("b"));
    assert_eq!(opt_and!(1, 2, 3), some(3));
}

#[rstest]
fn test_or_skips_after_present() {
    let evaluated = Cell::new(false);
    let side_effect = || {
        evaluated.set(true);
        some("late")
    };

    assert_eq!(opt_or!(some("early"), side_effect()), some("early"));
    assert!(!evaluated.get());
    assert_eq!(opt_or!(none(), some("b")), some("b"));
}

#[rstest]
fn test_or_accepts_bare_last_operand() {
    let configured: Option<u16> = None;
    assert_eq!(opt_or!(configured, none(), 80), some(80));
}

// =============================================================================
// Iterator Forms
// =============================================================================

#[rstest]
fn test_iterator_forms() {
    assert_eq!(and_all(vec![Some(1), Some(2), Some(3)]), some(3));
    assert_eq!(and_all(Vec::<Opt<i32>>::new()), Opt::Absent);
    assert_eq!(or_any([none(), some(2), some(3)]), some(2));
}

// =============================================================================
// Laws
// =============================================================================

fn arb_opt() -> impl Strategy<Value = Opt<u8>> {
    prop_oneof![Just(Opt::Absent), any::<u8>().prop_map(Opt::Present)]
}

proptest! {
    /// The macro forms agree with `Opt::and` / `Opt::or`.
    #[test]
    fn prop_macros_match_methods(left in arb_opt(), right in arb_opt()) {
        prop_assert_eq!(opt_and!(left, right), left.and(right));
        prop_assert_eq!(opt_or!(left, right), left.or(right));
    }

    /// The iterator forms agree with the macro forms.
    #[test]
    fn prop_iterator_forms_match_macros(first in arb_opt(), second in arb_opt(), third in arb_opt()) {
        prop_assert_eq!(and_all([first, second, third]), opt_and!(first, second, third));
        prop_assert_eq!(or_any([first, second, third]), opt_or!(first, second, third));
    }
}

//! Integration tests for `opt_cmp!`.

#![cfg(feature = "compare")]

use optkit::compare::opt_cmp;
use optkit::gate::{Opt, none, some};
use optkit::opt_cmp;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn test_returns_left_value_when_comparison_holds() {
    assert_eq!(opt_cmp(some("hello"), PartialEq::ne, some("world")), some("hello"));
    assert_eq!(opt_cmp(some("hello"), PartialEq::eq, some("world")), Opt::Absent);
}

#[rstest]
#[case(some(1), some(1), some(1))]
#[case(some(1), some(2), Opt::Absent)]
#[case(none(), some(1), Opt::Absent)]
#[case(some(1), none(), Opt::Absent)]
#[case(none(), none(), Opt::Absent)]
fn test_equality_operator(#[case] left: Opt<i32>, #[case] right: Opt<i32>, #[case] expected: Opt<i32>) {
    assert_eq!(opt_cmp!(left, ==, right), expected);
}

#[rstest]
fn test_operators_with_bare_operands() {
    assert_eq!(opt_cmp!(3, <, 4), some(3));
    assert_eq!(opt_cmp!(3, >, 4), Opt::Absent);
    assert_eq!(opt_cmp!(some(4), <=, 4), some(4));
    assert_eq!(opt_cmp!(4, >=, Some(5)), Opt::Absent);
    assert_eq!(opt_cmp!("a", !=, some("b")), some("a"));
}

#[rstest]
fn test_custom_predicate() {
    let same_length = |left: &&str, right: &&str| left.len() == right.len();
    assert_eq!(opt_cmp!(some("abc"), same_length, "xyz"), some("abc"));
    assert_eq!(opt_cmp!(some("abc"), same_length, "xy"), Opt::Absent);
}

#[rstest]
fn test_method_form() {
    let limit = 10;
    assert_eq!(some(3).cmp_by(|value, limit| value < limit, limit), some(3));
    assert_eq!(some(30).cmp_by(|value, limit| value < limit, some(limit)), Opt::Absent);
    assert_eq!(none().cmp_by(|value: &i32, limit| value < limit, limit), Opt::Absent);
}

proptest! {
    /// A present result is always the left operand.
    #[test]
    fn prop_result_is_left_or_absent(left in any::<i16>(), right in any::<i16>()) {
        let result = opt_cmp!(left, <, right);
        prop_assert!(result == Opt::Absent || result == some(left));
        prop_assert_eq!(result.is_some(), left < right);
    }
}

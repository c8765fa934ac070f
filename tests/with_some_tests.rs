//! Integration tests for multi-value unpacking.

#![cfg(all(feature = "unpack", feature = "derive"))]

use optkit::gate::{Opt, none, some};
use optkit::unpack::{lift2, with_some as with_all};
use optkit::with_some;
use rstest::rstest;
use std::cell::{Cell, RefCell};

// =============================================================================
// Binding
// =============================================================================

#[rstest]
#[case(3, 900)]
#[case(2, 600)]
fn test_binds_every_value(#[case] multiplier: i32, #[case] expected: i32) {
    let total = with_some!(
        [some(100), some(200), some(multiplier)],
        some [x, y, z] => (x + y) * z,
        none => 0,
    );
    assert_eq!(total, expected);
}

#[rstest]
fn test_branch_order_is_free() {
    let total = with_some!(
        [some(1), some(2)],
        none => -1,
        some [a, b] => a + b,
    );
    assert_eq!(total, 3);
}

#[rstest]
fn test_single_form_binds_value_directly() {
    let doubled = with_some!(some(21), some value => value * 2, none => 0);
    assert_eq!(doubled, 42);

    let absent = with_some!(none::<i32>(), some value => value * 2, none => 0);
    assert_eq!(absent, 0);
}

#[rstest]
#[case(some(4), 5)]
#[case(none(), 0)]
fn test_single_expression_accepts_one_name_list(
    #[case] operand: Opt<i32>,
    #[case] expected: i32,
) {
    let result = with_some!(operand, some [value] => value + 1, none => 0);
    assert_eq!(result, expected);
}

#[rstest]
fn test_mixed_operand_forms() {
    let described = with_some!(
        ["width", Some(3), some(4.5)],
        some [label, count, size] => format!("{label}: {count} x {size}"),
        none => String::new(),
    );
    assert_eq!(described, "width: 3 x 4.5");
}

#[rstest]
fn test_mut_and_wildcard_names() {
    let result = with_some!(
        [some(vec![3, 1, 2]), some("ignored")],
        some [mut values, _] => {
            values.sort_unstable();
            values
        },
        none => Vec::new(),
    );
    assert_eq!(result, vec![1, 2, 3]);
}

// =============================================================================
// Evaluation Order
// =============================================================================

#[rstest]
fn test_stops_at_first_absent() {
    let evaluated = Cell::new(0);
    let side_effect = || {
        evaluated.set(evaluated.get() + 1);
        some(2)
    };

    let result = with_some!(
        [none::<i32>(), side_effect()],
        some [first, second] => first + second,
        none => -1,
    );

    assert_eq!(result, -1);
    assert_eq!(evaluated.get(), 0);
}

#[rstest]
fn test_evaluates_left_to_right_once() {
    let order = RefCell::new(Vec::new());
    let record = |label: &'static str| {
        order.borrow_mut().push(label);
        some(label)
    };

    let joined = with_some!(
        [record("a"), record("b"), record("c")],
        some [a, b, c] => format!("{a}{b}{c}"),
        none => String::new(),
    );

    assert_eq!(joined, "abc");
    assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
}

#[rstest]
fn test_exactly_one_branch_runs() {
    let some_runs = Cell::new(0);
    let none_runs = Cell::new(0);

    for input in [some(1), none()] {
        with_some!(
            input,
            some _ => some_runs.set(some_runs.get() + 1),
            none => none_runs.set(none_runs.get() + 1),
        );
    }

    assert_eq!(some_runs.get(), 1);
    assert_eq!(none_runs.get(), 1);
}

// =============================================================================
// Control Flow in Branches
// =============================================================================

fn first_even_sum(pairs: &[(Opt<i32>, Opt<i32>)]) -> Opt<i32> {
    for (left, right) in pairs {
        with_some!(
            [*left, *right],
            some [a, b] => {
                if (a + b) % 2 == 0 {
                    return some(a + b);
                }
            },
            none => continue,
        );
    }
    none()
}

#[rstest]
fn test_return_and_continue_in_branches() {
    let pairs = [(some(1), none()), (some(1), some(2)), (some(3), some(5))];
    assert_eq!(first_even_sum(&pairs), some(8));
}

fn parse_both(left: &str, right: &str) -> Result<i32, std::num::ParseIntError> {
    let sum = with_some!(
        [some(left), some(right)],
        some [a, b] => a.parse::<i32>()? + b.parse::<i32>()?,
        none => 0,
    );
    Ok(sum)
}

#[rstest]
fn test_question_mark_in_branch() {
    assert_eq!(parse_both("2", "3"), Ok(5));
    assert!(parse_both("2", "x").is_err());
}

// =============================================================================
// Builder Form and Lifting
// =============================================================================

#[rstest]
fn test_builder_matches_macro() {
    let from_builder = with_all((|| some(100), || some(200), || some(3)))
        .on_some(|(x, y, z)| (x + y) * z)
        .on_none(|| 0);
    let from_macro = with_some!(
        [some(100), some(200), some(3)],
        some [x, y, z] => (x + y) * z,
        none => 0,
    );
    assert_eq!(from_builder, from_macro);
}

#[rstest]
fn test_builder_is_lazy() {
    let evaluated = Cell::new(false);
    let result = with_all((
        || none::<i32>(),
        || {
            evaluated.set(true);
            some(1)
        },
    ))
    .on_none(|| "absent")
    .on_some(|_| "present");

    assert_eq!(result, "absent");
    assert!(!evaluated.get());
}

#[rstest]
fn test_lifted_function_short_circuits() {
    let area = lift2(|width: u32, height: u32| width * height);
    assert_eq!(area(some(3), some(4)), some(12));
    assert_eq!(area(none(), some(4)), Opt::Absent);
}

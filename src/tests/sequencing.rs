//! Merging and sequencing tests.
//!
//! The one place a success is represented by a value rather than omitted is
//! the placeholder slot of a failed merge; these tests pin that behaviour.

use crate::{
    merge, sequence, sequence_all, sequence_with, Accumulator, DefaultMergePolicy,
    ErrorAccumulator, OkAccumulator, Outcome, Sentinel,
};

use super::common::{validate_age, validate_email, validate_name, FieldError};

/// Test sequencing three successes of different types.
///
/// Verifies:
/// - The success payload is the ordered tuple of all values
/// - The inputs are unaffected when cloned in
#[test]
fn sequence_collects_every_success() {
    let name = Outcome::<String, i32>::Ok("aaa".to_string());
    let count = Outcome::<i32, bool>::Ok(1);
    let tail = Outcome::<String, String>::Ok("ccc".to_string());

    let merged = sequence((name.clone(), count, tail.clone()));

    assert_eq!(
        merged.into_value(),
        ("aaa".to_string(), 1, "ccc".to_string())
    );
    assert_eq!(name.get_value(), "aaa");
    assert_eq!(tail.get_value(), "ccc");
}

/// Test the positional defaults of a failed tuple sequence.
///
/// Verifies:
/// - The error is a tuple with one slot per input
/// - Successful slots hold each type's default (`0`, `false`)
/// - The failing slot holds the real error
#[test]
fn sequence_fills_defaults_for_successes() {
    let merged = sequence!(
        Outcome::<String, i32>::Ok("aaa".to_string()),
        Outcome::<i32, bool>::Ok(1),
        Outcome::<String, String>::Err("err".to_string()),
    );

    assert_eq!(merged.into_error(), (0, false, "err".to_string()));
}

/// Test a form validation where two of three fields fail.
#[test]
fn form_validation_reports_each_field() {
    let merged = sequence((
        validate_name("Ada"),
        validate_age(7),
        validate_email("ada.example.org"),
    ));

    let (name, age, email) = merged.into_error();
    assert_eq!(name, FieldError::Valid);
    assert_eq!(age, FieldError::Invalid("age 7".to_string()));
    assert_eq!(email, FieldError::Invalid("ada.example.org".to_string()));
}

/// Test the positional-default law with homogeneous outcomes.
///
/// Merging three outcomes where only the third fails yields
/// `[default, default, error]`.
#[test]
fn merge_positional_default_law() {
    let first = Outcome::<i32, String>::Ok(1);
    let second = Outcome::<i32, String>::Ok(2);
    let third = Outcome::<i32, String>::Err("third".to_string());

    let left: Outcome<OkAccumulator<i32>, ErrorAccumulator<String>> =
        merge(&DefaultMergePolicy, first, second);
    let merged: Outcome<OkAccumulator<i32>, ErrorAccumulator<String>> =
        merge(&DefaultMergePolicy, left, third);

    assert_eq!(
        merged.into_error().into_vec(),
        vec![String::new(), String::new(), "third".to_string()]
    );
}

/// Test that left and right folds agree on slot order.
#[test]
fn merge_fold_order_is_irrelevant() {
    let inputs = || {
        (
            Outcome::<i32, i32>::Err(1),
            Outcome::<i32, i32>::Ok(5),
            Outcome::<i32, i32>::Err(3),
        )
    };
    let policy = Sentinel(0);

    let (a, b, c) = inputs();
    let ab: Outcome<Accumulator<i32>, Accumulator<i32>> = merge(&policy, a, b);
    let left: Outcome<Accumulator<i32>, Accumulator<i32>> = merge(&policy, ab, c);

    let (a, b, c) = inputs();
    let bc: Outcome<Accumulator<i32>, Accumulator<i32>> = merge(&policy, b, c);
    let right: Outcome<Accumulator<i32>, Accumulator<i32>> = merge(&policy, a, bc);

    assert_eq!(left, right);
    assert_eq!(left.into_error().into_vec(), vec![1, 0, 3]);
}

/// Test the list form over a mix of successes and failures.
///
/// Verifies:
/// - Values keep input order when everything succeeds
/// - A failure anywhere yields one error slot per input
/// - A `Sentinel` replaces the per-type default
#[test]
fn sequence_all_over_a_list() {
    let all_ok = sequence_all(
        &DefaultMergePolicy,
        (1..=4).map(Outcome::<i32, String>::success),
    );
    assert_eq!(all_ok.into_value().into_vec(), vec![1, 2, 3, 4]);

    let emails = ["a@x", "", "b@y", "c"];
    let merged = sequence_all(
        &Sentinel(FieldError::Valid),
        emails.iter().map(|email| validate_email(email)),
    );
    let errors = merged.into_error();
    assert_eq!(errors.len(), emails.len());
    assert_eq!(errors[0], FieldError::Valid);
    assert_eq!(errors[1], FieldError::Missing);
    assert_eq!(errors[2], FieldError::Valid);
    assert_eq!(errors[3], FieldError::Invalid("c".to_string()));
}

/// Test that a caller-chosen sentinel is distinguishable from real errors.
#[test]
fn sentinel_marks_successful_slots() {
    let merged = sequence_with(
        &Sentinel(-1),
        (
            Outcome::<&str, i32>::Ok("ok"),
            Outcome::<&str, i32>::Err(0),
        ),
    );
    assert_eq!(merged, Outcome::Err((-1, 0)));
}

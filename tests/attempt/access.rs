use attempt_rail::types::{ContractViolation, Variant};
use attempt_rail::Attempt;

use crate::support::panic_message;

#[test]
fn simple_success_exposes_only_its_result() {
    let result = "result";
    let success = Attempt::<&str, i32>::success(result);

    assert!(!success.is_failure());
    assert!(success.is_success());
    assert_eq!(success.get_result(), &result);

    let mut seen = None;
    let success = success
        .if_failure(|_| panic!("failure hook ran on a success"))
        .if_success(|inner| seen = Some(*inner));
    assert_eq!(seen, Some(result));
    assert_eq!(success, Attempt::success(result));
}

#[test]
fn simple_failure_exposes_only_its_error() {
    let error = 0;
    let failure = Attempt::<&str, i32>::failure(error);

    assert!(failure.is_failure());
    assert!(!failure.is_success());
    assert_eq!(failure.get_error(), &error);

    let mut seen = None;
    let _ = failure
        .if_success(|_| panic!("success hook ran on a failure"))
        .if_failure(|inner| seen = Some(*inner));
    assert_eq!(seen, Some(error));
}

#[test]
fn get_error_on_success_is_an_empty_access() {
    let success = Attempt::<&str, i32>::success("result");
    let message = panic_message(|| {
        let _ = success.get_error();
    });

    assert_eq!(message, ContractViolation::EmptyAccess { expected: Variant::Failure }.to_string());
}

#[test]
fn get_result_on_failure_is_an_empty_access() {
    let failure = Attempt::<&str, i32>::failure(0);
    let message = panic_message(|| {
        let _ = failure.get_result();
    });

    assert_eq!(message, ContractViolation::EmptyAccess { expected: Variant::Success }.to_string());
}

#[test]
fn try_accessors_return_the_violation_instead_of_panicking() {
    let success = Attempt::<u8, &str>::success(1);
    assert_eq!(success.try_result(), Ok(&1));
    assert_eq!(
        success.try_error(),
        Err(ContractViolation::EmptyAccess { expected: Variant::Failure })
    );

    let failure = Attempt::<u8, &str>::failure("e");
    assert_eq!(failure.try_error(), Ok(&"e"));
    assert_eq!(
        failure.try_result(),
        Err(ContractViolation::EmptyAccess { expected: Variant::Success })
    );
}

#[test]
fn owned_accessors_return_the_matching_side() {
    assert_eq!(Attempt::<u8, &str>::success(1).into_value(), Some(1));
    assert_eq!(Attempt::<u8, &str>::success(1).into_error(), None);
    assert_eq!(Attempt::<u8, &str>::failure("e").into_value(), None);
    assert_eq!(Attempt::<u8, &str>::failure("e").into_error(), Some("e"));
}

#[test]
fn as_ref_borrows_without_consuming() {
    let attempt = Attempt::<String, String>::success("kept".to_string());
    assert_eq!(attempt.as_ref().map_result(String::len), Attempt::success(4));
    assert_eq!(attempt.get_result(), "kept");
}

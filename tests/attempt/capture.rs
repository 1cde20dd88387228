use attempt_rail::Attempt;

#[derive(Debug, PartialEq)]
enum LoadError {
    Missing(&'static str),
    Parse,
}

fn lookup(key: &'static str) -> Result<&'static str, LoadError> {
    match key {
        "port" => Ok("8080"),
        "name" => Ok("not a number"),
        _ => Err(LoadError::Missing(key)),
    }
}

fn load_number(key: &'static str) -> Attempt<u16, LoadError> {
    Attempt::attempt(|| {
        let raw = lookup(key)?;
        raw.parse::<u16>().map_err(|_| LoadError::Parse)
    })
}

#[test]
fn attempt_wraps_a_normal_return_as_success() {
    let success = Attempt::attempt(|| Ok::<_, LoadError>("result"));
    assert!(success.is_success());
    assert_eq!(success.get_result(), &"result");
}

#[test]
fn attempt_wraps_a_raised_error_as_failure() {
    assert_eq!(load_number("port"), Attempt::success(8080));
    assert_eq!(load_number("name"), Attempt::failure(LoadError::Parse));
    assert_eq!(load_number("host"), Attempt::failure(LoadError::Missing("host")));
}

#[cfg(feature = "std")]
mod unwind {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use attempt_rail::types::{ContractViolation, Variant};
    use attempt_rail::Attempt;

    #[test]
    fn attempt_unwind_captures_a_panic_as_failure() {
        let failure = Attempt::attempt_unwind(|| -> u8 { panic!("exploded") });

        assert!(failure.is_failure());
        assert_eq!(failure.get_error().message(), Some("exploded"));
        assert_eq!(failure.get_error().to_string(), "panicked: exploded");
    }

    #[test]
    fn attempt_unwind_keeps_formatted_and_opaque_payloads() {
        let code = 7;
        let formatted = Attempt::attempt_unwind(move || -> u8 { panic!("code {code}") });
        assert_eq!(formatted.get_error().message(), Some("code 7"));

        let opaque = Attempt::attempt_unwind(|| -> u8 { std::panic::panic_any(42u32) });
        let fault = opaque.into_error().expect("panic should be captured");
        assert_eq!(fault.message(), None);
        assert_eq!(fault.payload().downcast_ref::<u32>(), Some(&42));
    }

    #[test]
    fn attempt_unwind_returns_normal_results() {
        assert_eq!(Attempt::attempt_unwind(|| 40 + 2).into_value(), Some(42));
    }

    #[test]
    fn attempt_unwind_does_not_mask_contract_violations() {
        let wrong = Attempt::<u8, &str>::failure("e");
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            Attempt::attempt_unwind(AssertUnwindSafe(|| *wrong.get_result()))
        }));

        let payload = match outcome {
            Ok(_) => panic!("contract violation was captured as a failure"),
            Err(payload) => payload,
        };
        assert_eq!(
            payload.downcast_ref::<ContractViolation>(),
            Some(&ContractViolation::EmptyAccess { expected: Variant::Success })
        );
    }
}

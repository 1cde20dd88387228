use attempt_rail::traits::ResultExt;
use attempt_rail::validation::Validation;
use attempt_rail::Attempt;

#[test]
fn into_attempt_keeps_the_variant() {
    assert_eq!(Ok::<u8, &str>(1).into_attempt(), Attempt::success(1));
    assert_eq!(Err::<u8, &str>("e").into_attempt(), Attempt::failure("e"));
}

#[test]
fn into_validation_records_errors_against_a_subject() {
    let port = "70000".parse::<u16>().map_err(|_| "port out of range");
    let validation = Validation::valid("config").merge(port.into_validation("port"));

    assert_eq!(validation.subject(), &"config");
    assert_eq!(validation.errors(), &["port out of range"]);

    let fine = "80".parse::<u16>().map_err(|_| "unused").into_validation("port");
    assert!(fine.is_valid());
}

use attempt_rail::validating_all;
use attempt_rail::validation::Validation;
use attempt_rail::validator::{
    ensuring_predicate, validating_all, validating_field, ValidatingAll, Validator,
};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    age: u8,
}

#[test]
fn ensuring_predicate_reports_its_error_when_rejected() {
    let empty_error = 0;
    let validator = ensuring_predicate(|s: &&str| !s.is_empty(), empty_error);

    assert_eq!(validator.validate("").errors(), &[empty_error]);
    assert!(validator.validate("test").errors().is_empty());
}

#[test]
fn validating_all_runs_every_rule_in_listing_order() {
    let empty_error = 0;
    let too_long_error = 1;
    let contains_bad_letter_error = 2;

    let validator = validating_all![
        ensuring_predicate(|s: &&str| !s.is_empty(), empty_error),
        ensuring_predicate(|s: &&str| s.len() < 10, too_long_error),
        ensuring_predicate(|s: &&str| !s.contains('e'), contains_bad_letter_error),
    ];

    assert_eq!(validator.validate("").errors(), &[empty_error]);
    assert_eq!(
        validator.validate("test test test").errors(),
        &[too_long_error, contains_bad_letter_error]
    );
    assert!(validator.validate("potato").errors().is_empty());
}

#[test]
fn validating_all_accepts_boxed_validators() {
    let validator = validating_all::<i32, &str, _>([
        Box::new(ensuring_predicate(|n: &i32| *n > 0, "not positive")) as Box<dyn Validator<_, _>>,
        Box::new(|n: i32| Validation::valid(n).validate(|n| *n % 2 == 0, "odd")),
        Box::new(ensuring_predicate(|n: &i32| *n < 100, "too large")),
    ]);

    assert_eq!(validator.len(), 3);
    assert_eq!(validator.validate(-3).errors(), &["not positive", "odd"]);
    assert_eq!(validator.validate(101).errors(), &["odd", "too large"]);
    assert!(validator.validate(42).is_valid());
}

#[test]
fn validating_all_keeps_the_subject() {
    let validator = validating_all![
        ensuring_predicate(|u: &User| !u.name.is_empty(), "name"),
        ensuring_predicate(|u: &User| u.age >= 18, "age"),
    ];
    let user = User { name: String::new(), age: 12 };

    let validation = validator.validate(user.clone());
    assert_eq!(validation.subject(), &user);
    assert_eq!(validation.errors(), &["name", "age"]);
}

#[test]
fn validating_all_ignores_subjects_rewritten_by_a_rule() {
    let validator = validating_all![
        |n: i32| Validation::valid(n + 100),
        ensuring_predicate(|n: &i32| *n < 10, "too large"),
    ];

    let validation = validator.validate(1);
    assert_eq!(validation.subject(), &1);
    assert!(validation.is_valid());

    let rewriting_and_failing = validating_all![
        |n: i32| Validation::invalid(-n, "negated"),
        ensuring_predicate(|n: &i32| *n > 0, "not positive"),
    ];
    assert_eq!(rewriting_and_failing.validate(5), Validation::invalid(5, "negated"));
}

#[test]
fn empty_validating_all_accepts_everything() {
    let validator: ValidatingAll<u8, &str> = ValidatingAll::new();
    assert!(validator.is_empty());
    assert!(validator.validate(0).is_valid());
}

#[test]
fn validating_field_reports_field_errors_on_the_parent() {
    let empty_error = 0;
    let field_validator = ensuring_predicate(|len: &usize| *len > 0, empty_error);
    let validator = validating_field(|s: &&str| s.len(), field_validator);

    assert_eq!(validator.validate("").errors(), &[empty_error]);
    assert!(validator.validate("test").errors().is_empty());
}

#[test]
fn field_validators_compose_with_validating_all() {
    let name_rules = validating_all![
        ensuring_predicate(|name: &String| !name.is_empty(), "name is empty"),
        ensuring_predicate(|name: &String| name.len() <= 8, "name is too long"),
    ];
    let validator = validating_all![
        validating_field(|u: &User| u.name.clone(), name_rules),
        validating_field(|u: &User| u.age, ensuring_predicate(|age: &u8| *age >= 18, "minor")),
    ];

    let user = User { name: "Bartholomew".to_string(), age: 17 };
    let validation = validator.validate(user.clone());

    assert_eq!(validation.subject(), &user);
    assert_eq!(validation.errors(), &["name is too long", "minor"]);
    assert!(validator
        .validate(User { name: "Ann".to_string(), age: 30 })
        .is_valid());
}

#[test]
fn closures_are_validators() {
    let even = |n: u32| Validation::valid(n).validate(|n| n % 2 == 0, "odd");

    assert!(even.validate(4).is_valid());
    assert_eq!(even.validate(3).to_attempt().into_error().unwrap().as_slice(), &["odd"]);
}

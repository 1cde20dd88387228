
use attempt_rail::validation::Validation;

#[test]
fn collecting_validations_keeps_every_subject_and_error() {
    let fields = vec![
        Validation::valid("alice"),
        Validation::invalid("", "empty"),
        Validation::invalid_with("x", "too short", ["lowercase"]),
    ];

    let all: Validation<Vec<&str>, &str> = fields.into_iter().collect();
    assert_eq!(all.subject(), &vec!["alice", "", "x"]);
    assert_eq!(all.errors(), &["empty", "too short", "lowercase"]);
}

#[test]
fn collecting_only_valid_validations_is_valid() {
    let all: Validation<Vec<u8>, &str> = (1..=3).map(Validation::valid).collect();
    assert!(all.is_valid());
    assert_eq!(all.into_subject(), vec![1, 2, 3]);
}

#[test]
fn error_iterators_follow_report_order() {
    let validation = Validation::invalid_with("s", 'a', ['b', 'c']);

    let collected: String = validation.iter_errors().collect();
    assert_eq!(collected, "abc");

    let mut by_ref = Vec::new();
    for error in &validation {
        by_ref.push(*error);
    }
    assert_eq!(by_ref, vec!['a', 'b', 'c']);
}

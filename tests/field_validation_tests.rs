use bella_vista_page::*;
use test_utils::*;

/// Field Validation Engine tests: rule evaluation order, the canonical
/// contact schema, and whole-form reporting.

#[test]
fn test_required_fields_fail_when_empty() {
    init_logging();
    let validator = contact_validator();

    for (field, message) in [
        ("name", "Name is required"),
        ("email", "Email is required"),
        ("message", "Message is required"),
    ] {
        let result = validator.validate(field, "").unwrap();
        assert!(!result.valid, "{} should be invalid when empty", field);
        assert_eq!(result.message, message);
    }
}

#[test]
fn test_email_pattern() {
    let validator = contact_validator();

    let valid = validator.validate("email", "a@b.com").unwrap();
    assert!(valid.valid);
    assert!(valid.message.is_empty());

    let invalid = validator.validate("email", "a@b").unwrap();
    assert!(!invalid.valid);
    assert_eq!(invalid.message, "Please enter a valid email address");

    let spaced = validator.validate("email", "a b@c.com").unwrap();
    assert!(!spaced.valid);
}

#[test]
fn test_name_length_bounds() {
    let validator = contact_validator();

    assert!(!validator.validate("name", "a").unwrap().valid);
    assert!(validator.validate("name", "Al").unwrap().valid);
    assert!(validator.validate("name", &"x".repeat(50)).unwrap().valid);
    assert!(!validator.validate("name", &"x".repeat(51)).unwrap().valid);
}

#[test]
fn test_phone_is_optional_but_patterned() {
    let validator = contact_validator();

    assert!(validator.validate("phone", "").unwrap().valid);
    assert!(validator.validate("phone", "12345").unwrap().valid);
    assert!(validator.validate("phone", "+12025550144").unwrap().valid);

    let letters = validator.validate("phone", "abc").unwrap();
    assert!(!letters.valid);
    assert_eq!(letters.message, "Please enter a valid phone number");

    // The pattern rejects a leading zero.
    assert!(!validator.validate("phone", "0123").unwrap().valid);
}

#[test]
fn test_message_length_bounds() {
    let validator = contact_validator();

    assert!(!validator.validate("message", &"x".repeat(9)).unwrap().valid);
    assert!(validator.validate("message", &"x".repeat(10)).unwrap().valid);
    assert!(validator.validate("message", &"x".repeat(500)).unwrap().valid);

    let too_long = validator.validate("message", &"x".repeat(501)).unwrap();
    assert!(!too_long.valid);
    assert_eq!(too_long.message, "Message must be between 10-500 characters");
}

#[test]
fn test_whole_form_report() {
    let validator = contact_validator();

    let report = validator.validate_form(&valid_values());
    assert!(report.valid);
    assert!(report.invalid_fields().is_empty());

    let mut values = valid_values();
    values.insert("email".to_string(), "nope".to_string());
    values.insert("message".to_string(), "short".to_string());

    let report = validator.validate_form(&values);
    assert!(!report.valid);
    assert_eq!(report.invalid_fields(), vec!["email", "message"]);
    assert_eq!(
        report.message_for("email"),
        Some("Please enter a valid email address")
    );
    assert!(report.message_for("name").is_none());
}

#[test]
fn test_whole_form_trims_values() {
    let validator = contact_validator();

    let mut values = valid_values();
    values.insert("name".to_string(), "  Ada Lovelace  ".to_string());

    let report = validator.validate_form(&values);
    assert!(report.valid);
    assert_eq!(report.values.get("name").map(String::as_str), Some("Ada Lovelace"));
}

#[test]
fn test_missing_fields_validate_as_empty() {
    let validator = contact_validator();

    let report = validator.validate_form(&std::collections::HashMap::new());
    assert!(!report.valid);
    // Optional phone passes even though it was never supplied.
    assert_eq!(report.invalid_fields(), vec!["email", "message", "name"]);
}

#[test]
fn test_validation_never_panics_on_odd_input() {
    let validator = contact_validator();

    let long = "é".repeat(600);
    for value in ["\0", "\u{1F355}", "\t\r\n", long.as_str()] {
        let _ = validator.validate("name", value).unwrap();
        let _ = validator.validate("email", value).unwrap();
        let _ = validator.validate("phone", value).unwrap();
        let _ = validator.validate("message", value).unwrap();
    }
}

#[test]
fn test_revalidation_policy_matches_host_events() {
    assert!(should_revalidate(EditTrigger::Blur, false));
    assert!(!should_revalidate(EditTrigger::Input, false));
    assert!(should_revalidate(EditTrigger::Input, true));
}

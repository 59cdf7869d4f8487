use bella_vista_page::*;
use test_utils::init_logging;

/// Schema parser tests: loading rule tables from JSON (and files), with
/// classified parse errors.

const FULL_SCHEMA: &str = r#"{
    "version": "1.0.0",
    "fields": {
        "name": {
            "label": "Name",
            "required": true,
            "min_length": 2,
            "max_length": 50,
            "message": "Name must be between 2-50 characters"
        },
        "email": {
            "label": "Email",
            "required": true,
            "pattern": "^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$",
            "message": "Please enter a valid email address"
        },
        "phone": {
            "label": "Phone",
            "pattern": "^[\\+]?[1-9][\\d]{0,15}$",
            "message": "Please enter a valid phone number"
        },
        "message": {
            "label": "Message",
            "required": true,
            "min_length": 10,
            "max_length": 500,
            "message": "Message must be between 10-500 characters"
        }
    }
}"#;

#[test]
fn test_parsed_schema_behaves_like_the_builtin() {
    init_logging();
    let parsed = SchemaParser::from_json(FULL_SCHEMA).unwrap();
    assert_eq!(parsed, FormSchema::contact_form());

    let validator = FieldValidator::new(parsed).unwrap();
    assert!(validator.validate("email", "a@b.com").unwrap().valid);
    assert!(!validator.validate("email", "a@b").unwrap().valid);
}

#[test]
fn test_empty_and_whitespace_inputs_are_rejected() {
    for input in ["", "   ", "\n\t"] {
        let err = SchemaParser::from_json(input).unwrap_err();
        assert!(matches!(err, PageError::SchemaParse(_)));
        assert!(err.to_string().contains("input string is empty"));
    }
}

#[test]
fn test_syntax_errors_carry_location() {
    let err = SchemaParser::from_json("{\"version\": \"1.0.0\", \"fields\": }").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("Syntax error"));
    assert!(text.contains("line 1"));
}

#[test]
fn test_wrong_shape_is_a_data_error() {
    let err = SchemaParser::from_json(r#"{"version": 3}"#).unwrap_err();
    assert!(err.to_string().contains("Invalid data structure"));
}

#[test]
fn test_file_context_appears_in_errors() {
    let err = SchemaParser::from_json_with_context("{", Some("rules/contact.json")).unwrap_err();
    assert!(err.to_string().contains("rules/contact.json"));
}

#[tokio::test]
async fn test_load_schema_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contact.json");
    tokio::fs::write(&path, FULL_SCHEMA).await.unwrap();

    let schema = SchemaParser::from_file(path.to_str().unwrap()).await.unwrap();
    assert_eq!(schema.len(), 4);
}

#[tokio::test]
async fn test_missing_schema_file_is_an_error() {
    let err = SchemaParser::from_file("/nonexistent/contact.json")
        .await
        .unwrap_err();
    assert!(matches!(err, PageError::SchemaParse(_)));
}

#[cfg(feature = "yaml-support")]
#[test]
fn test_yaml_schema_parses() {
    let yaml = r#"
version: "1.0.0"
fields:
  email:
    label: Email
    required: true
    pattern: "^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$"
    message: Please enter a valid email address
"#;
    let schema = SchemaParser::from_yaml(yaml).unwrap();
    assert!(schema.has_field("email"));
}

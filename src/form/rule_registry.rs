use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declarative constraint set for one form field.
///
/// Rules are immutable once the schema is built; the same rule evaluates
/// every edit of its field for the lifetime of the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldRule {
    /// Display label used in the "required" message (e.g. "Name")
    pub label: String,

    /// Whether an empty value fails validation (default: false)
    #[serde(default)]
    pub required: bool,

    /// Minimum length in characters (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum length in characters (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Regular expression the value must match when non-empty (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Message shown on any failure other than a missing required value
    pub message: String,
}

impl FieldRule {
    /// Create a new rule with a display label and a failure message
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            message: message.into(),
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set length constraints
    pub fn with_length_range(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Set the pattern constraint
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Message reported when a required field is left empty
    pub fn required_message(&self) -> String {
        format!("{} is required", self.label)
    }
}

/// Mapping from field identifier to its rule.
///
/// Fixed for the lifetime of the form; fields are validated independently
/// (no cross-field rules).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FormSchema {
    /// Schema version
    pub version: String,

    /// Rule table keyed by field identifier
    #[serde(default)]
    fields: HashMap<String, FieldRule>,
}

impl FormSchema {
    /// Create an empty schema
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a field rule to the schema
    pub fn add_field(&mut self, name: impl Into<String>, rule: FieldRule) {
        self.fields.insert(name.into(), rule);
    }

    /// Get the rule for a field
    pub fn get_field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    /// Check whether the schema knows a field
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field identifiers in deterministic (sorted) order
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of fields in the schema
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The canonical contact form schema: name, email, phone, message.
    pub fn contact_form() -> Self {
        let mut schema = Self::new("1.0.0");

        schema.add_field(
            "name",
            FieldRule::new("Name", "Name must be between 2-50 characters")
                .required()
                .with_length_range(Some(2), Some(50)),
        );

        schema.add_field(
            "email",
            FieldRule::new("Email", "Please enter a valid email address")
                .required()
                .with_pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"),
        );

        // The leading-digit class rejects numbers starting with 0.
        schema.add_field(
            "phone",
            FieldRule::new("Phone", "Please enter a valid phone number")
                .optional()
                .with_pattern(r"^[\+]?[1-9][\d]{0,15}$"),
        );

        schema.add_field(
            "message",
            FieldRule::new("Message", "Message must be between 10-500 characters")
                .required()
                .with_length_range(Some(10), Some(500)),
        );

        schema
    }
}

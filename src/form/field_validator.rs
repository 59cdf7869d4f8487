use crate::error::{PageError, Result};
use crate::form::rule_registry::{FieldRule, FormSchema};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of validating a single field.
///
/// Ephemeral: recomputed on every validation call, never persisted. A failed
/// validation is an expected result, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    /// Whether validation passed
    pub valid: bool,

    /// Human-readable failure message (empty when valid)
    pub message: String,
}

impl ValidationResult {
    /// A passing result
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result with the given message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Per-field results of a whole-form validation pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormReport {
    /// Whether every field passed
    pub valid: bool,

    /// Result per field identifier
    pub results: HashMap<String, ValidationResult>,

    /// The (trimmed) values that were validated, keyed by field identifier
    pub values: HashMap<String, String>,
}

impl FormReport {
    /// Identifiers of the fields that failed, in deterministic order
    pub fn invalid_fields(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .results
            .iter()
            .filter(|(_, result)| !result.valid)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Failure message for a field, if it failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.results
            .get(field)
            .filter(|result| !result.valid)
            .map(|result| result.message.as_str())
    }
}

/// Host edit events that can trigger re-validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTrigger {
    /// Focus left the field
    Blur,
    /// The field content changed
    Input,
}

/// Whether a field should be re-validated for an edit event.
///
/// Blur always validates; input only re-validates a field already marked
/// invalid, so the error clears as the user types without flagging fields
/// they have not finished entering.
pub fn should_revalidate(trigger: EditTrigger, currently_invalid: bool) -> bool {
    match trigger {
        EditTrigger::Blur => true,
        EditTrigger::Input => currently_invalid,
    }
}

/// Field validation engine.
///
/// Holds a fixed [`FormSchema`] with every pattern compiled up front; a
/// malformed pattern is a construction error, never a per-field failure.
#[derive(Debug)]
pub struct FieldValidator {
    schema: FormSchema,
    patterns: HashMap<String, Regex>,
}

impl FieldValidator {
    /// Build a validator from a schema, compiling all patterns
    pub fn new(schema: FormSchema) -> Result<Self> {
        let mut patterns = HashMap::new();

        for name in schema.field_names() {
            let rule = schema
                .get_field(name)
                .expect("field name listed by its own schema");
            if let Some(pattern) = &rule.pattern {
                let regex = Regex::new(pattern).map_err(|source| PageError::InvalidPattern {
                    field: name.to_string(),
                    source,
                })?;
                patterns.insert(name.to_string(), regex);
            }
        }

        debug!(
            "Field validator ready: {} fields, {} compiled patterns",
            schema.len(),
            patterns.len()
        );

        Ok(Self { schema, patterns })
    }

    /// Build a validator for the canonical contact form
    pub fn contact_form() -> Result<Self> {
        Self::new(FormSchema::contact_form())
    }

    /// The schema this validator evaluates
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Validate a single field value against its rule.
    ///
    /// Checks run in order with the first failure winning: required,
    /// min length, max length, pattern. Returns `Err` only for a field the
    /// schema does not know, which is a host programming error.
    pub fn validate(&self, field: &str, value: &str) -> Result<ValidationResult> {
        let rule = self
            .schema
            .get_field(field)
            .ok_or_else(|| PageError::UnknownField(field.to_string()))?;

        Ok(self.evaluate(field, rule, value))
    }

    /// Validate every field in the schema against the supplied values.
    ///
    /// Values are trimmed before evaluation, matching submit-time semantics;
    /// missing fields validate as empty. Submission must proceed only when
    /// the returned report is valid.
    pub fn validate_form(&self, values: &HashMap<String, String>) -> FormReport {
        let mut results = HashMap::new();
        let mut trimmed_values = HashMap::new();
        let mut valid = true;

        for name in self.schema.field_names() {
            let rule = self
                .schema
                .get_field(name)
                .expect("field name listed by its own schema");
            let value = values
                .get(name)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();

            let result = self.evaluate(name, rule, &value);
            valid &= result.valid;

            trimmed_values.insert(name.to_string(), value);
            results.insert(name.to_string(), result);
        }

        if !valid {
            debug!(
                "Form validation failed for fields: {:?}",
                results
                    .iter()
                    .filter(|(_, r)| !r.valid)
                    .map(|(n, _)| n.as_str())
                    .collect::<Vec<_>>()
            );
        }

        FormReport {
            valid,
            results,
            values: trimmed_values,
        }
    }

    fn evaluate(&self, field: &str, rule: &FieldRule, value: &str) -> ValidationResult {
        // Required check runs on the trimmed value; the remaining checks see
        // the value as supplied.
        if rule.required && value.trim().is_empty() {
            return ValidationResult::fail(rule.required_message());
        }

        let length = value.chars().count();

        if let Some(min_length) = rule.min_length {
            if length < min_length {
                return ValidationResult::fail(rule.message.clone());
            }
        }

        if let Some(max_length) = rule.max_length {
            if length > max_length {
                return ValidationResult::fail(rule.message.clone());
            }
        }

        if rule.pattern.is_some() && !value.is_empty() {
            let regex = self
                .patterns
                .get(field)
                .expect("pattern compiled at construction");
            if !regex.is_match(value) {
                return ValidationResult::fail(rule.message.clone());
            }
        }

        ValidationResult::ok()
    }
}

use crate::error::PageError;
use crate::form::rule_registry::FormSchema;
use log::{debug, error, info};
use regex::Regex;
use tokio::fs;

/// Form schema parser for JSON and YAML rule tables
pub struct SchemaParser;

impl SchemaParser {
    /// Parse a form schema from a JSON string
    pub fn from_json(json_str: &str) -> Result<FormSchema, PageError> {
        Self::from_json_with_context(json_str, None)
    }

    /// Parse a form schema from a JSON string with file context
    pub fn from_json_with_context(
        json_str: &str,
        file_path: Option<&str>,
    ) -> Result<FormSchema, PageError> {
        let context = file_path
            .map(|p| format!(" (file: {})", p))
            .unwrap_or_default();
        debug!(
            "Attempting to parse form schema from JSON{} ({} bytes)",
            context,
            json_str.len()
        );

        if json_str.trim().is_empty() {
            error!("Form schema JSON string is empty{}", context);
            return Err(PageError::SchemaParse(format!(
                "JSON parsing error{}: input string is empty",
                context
            )));
        }

        match serde_json::from_str::<FormSchema>(json_str) {
            Ok(schema) => {
                info!("Successfully parsed form schema from JSON{}", context);
                debug!(
                    "Parsed schema version {} with {} fields",
                    schema.version,
                    schema.len()
                );
                Self::validate_schema(&schema)?;
                Ok(schema)
            }
            Err(e) => {
                error!("Failed to parse form schema from JSON{}: {}", context, e);

                let detailed_error = match e.classify() {
                    serde_json::error::Category::Io => {
                        format!("JSON parsing error{} - I/O issue: {}", context, e)
                    }
                    serde_json::error::Category::Syntax => {
                        format!(
                            "JSON parsing error{} - Syntax error at line {}, column {}: {}",
                            context,
                            e.line(),
                            e.column(),
                            e
                        )
                    }
                    serde_json::error::Category::Data => {
                        format!(
                            "JSON parsing error{} - Invalid data structure: {}",
                            context, e
                        )
                    }
                    serde_json::error::Category::Eof => {
                        format!(
                            "JSON parsing error{} - Unexpected end of file: {}",
                            context, e
                        )
                    }
                };

                Err(PageError::SchemaParse(detailed_error))
            }
        }
    }

    /// Parse a form schema from a YAML string
    #[cfg(feature = "yaml-support")]
    pub fn from_yaml(yaml_str: &str) -> Result<FormSchema, PageError> {
        debug!(
            "Attempting to parse form schema from YAML ({} bytes)",
            yaml_str.len()
        );

        if yaml_str.trim().is_empty() {
            error!("Form schema YAML string is empty");
            return Err(PageError::SchemaParse(
                "YAML parsing error: input string is empty".to_string(),
            ));
        }

        let schema: FormSchema = serde_yaml::from_str(yaml_str).map_err(|e| {
            error!("Failed to parse form schema from YAML: {}", e);
            PageError::SchemaParse(format!("YAML parsing error: {}", e))
        })?;

        info!("Successfully parsed form schema from YAML");
        Self::validate_schema(&schema)?;
        Ok(schema)
    }

    /// Load and parse a form schema from a file.
    ///
    /// The format is chosen by extension: `.yaml`/`.yml` when the
    /// `yaml-support` feature is enabled, JSON otherwise.
    pub async fn from_file(path: &str) -> Result<FormSchema, PageError> {
        debug!("Loading form schema from file: {}", path);

        let content = fs::read_to_string(path).await.map_err(|e| {
            error!("Failed to read schema file {}: {}", path, e);
            PageError::SchemaParse(format!("Cannot read schema file {}: {}", path, e))
        })?;

        #[cfg(feature = "yaml-support")]
        if path.ends_with(".yaml") || path.ends_with(".yml") {
            return Self::from_yaml(&content);
        }

        Self::from_json_with_context(&content, Some(path))
    }

    /// Structural validation beyond what deserialization enforces
    fn validate_schema(schema: &FormSchema) -> Result<(), PageError> {
        if schema.is_empty() {
            return Err(PageError::InvalidSchema(
                "schema defines no fields".to_string(),
            ));
        }

        for name in schema.field_names() {
            let rule = schema
                .get_field(name)
                .expect("field name listed by its own schema");

            if rule.label.trim().is_empty() {
                return Err(PageError::InvalidSchema(format!(
                    "field '{}' has an empty label",
                    name
                )));
            }

            if rule.message.trim().is_empty() {
                return Err(PageError::InvalidSchema(format!(
                    "field '{}' has an empty failure message",
                    name
                )));
            }

            if let (Some(min), Some(max)) = (rule.min_length, rule.max_length) {
                if min > max {
                    return Err(PageError::InvalidSchema(format!(
                        "field '{}' has min_length {} greater than max_length {}",
                        name, min, max
                    )));
                }
            }

            if let Some(pattern) = &rule.pattern {
                Regex::new(pattern).map_err(|source| PageError::InvalidPattern {
                    field: name.to_string(),
                    source,
                })?;
            }
        }

        Ok(())
    }
}

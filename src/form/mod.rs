pub mod field_validator;
pub mod rule_registry;
pub mod schema_parser;
pub mod submission;

pub use field_validator::{
    should_revalidate, EditTrigger, FieldValidator, FormReport, ValidationResult,
};
pub use rule_registry::{FieldRule, FormSchema};
pub use schema_parser::SchemaParser;
pub use submission::{
    AttemptStatus, ButtonPresentation, SubmissionController, SubmissionHandle, SubmissionMachine,
    SubmissionState, SubmissionTicket,
};

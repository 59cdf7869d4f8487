//! # Bella Vista Page
//!
//! Headless interaction engine for a restaurant landing page. Every behavior
//! of the page is implemented against injected interfaces and plain data, so
//! the whole crate runs and tests without a document tree.
//!
//! ## Features
//!
//! - **Field Validation Engine**: declarative per-field rules with
//!   first-failure-wins evaluation and human-readable messages
//! - **Submission Lifecycle**: explicit Idle/Validating/Submitting/Submitted
//!   state machine with timed transitions
//! - **Theme Preference**: injectable preference store persisting the
//!   dark-mode flag
//! - **Scheduled Promotions**: clock-gated weekend badge with show/hide
//!   timers and manual dismissal
//! - **Navigation Sync**: scroll-position to active-section mapping and
//!   navbar styling
//! - **Gallery Modal & Scroll Reveal**: keyboard-aware modal state and
//!   one-time staggered reveal animations
//!
//! ## Quick Start
//!
//! ```rust
//! use bella_vista_page::{FieldValidator, FormSchema};
//! use std::collections::HashMap;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Build the validation engine from the canonical contact schema
//!     let validator = FieldValidator::new(FormSchema::contact_form())?;
//!
//!     // Validate a single field as the user edits it
//!     let result = validator.validate("email", "a@b")?;
//!     assert!(!result.valid);
//!     assert_eq!(result.message, "Please enter a valid email address");
//!
//!     // Validate the whole form at submit time
//!     let mut values = HashMap::new();
//!     values.insert("name".to_string(), "Ada Lovelace".to_string());
//!     values.insert("email".to_string(), "ada@example.com".to_string());
//!     values.insert("phone".to_string(), String::new());
//!     values.insert("message".to_string(), "Table for two on Friday, please.".to_string());
//!
//!     let report = validator.validate_form(&values);
//!     assert!(report.valid);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod page;
pub mod prefs;
pub mod schedule;
pub mod utils;

// Form exports (validation engine and submission lifecycle)
pub use form::{
    should_revalidate, AttemptStatus, ButtonPresentation, EditTrigger, FieldRule, FieldValidator,
    FormReport, FormSchema, SchemaParser, SubmissionController, SubmissionHandle,
    SubmissionMachine, SubmissionState, SubmissionTicket, ValidationResult,
};

// Preference exports (theme persistence)
pub use prefs::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Theme, ThemeController,
    DARK_MODE_KEY,
};

// Schedule exports (clock-gated badge and timers)
pub use schedule::{BadgeController, BadgeState, Clock, FixedClock, SystemClock, TimerManager, PROMO_DAYS};

// Page exports (navigation, gallery, reveal)
pub use page::{
    GalleryImage, GalleryModal, Key, ModalContent, NavTracker, NavUpdate, ObserverOptions,
    RevealController, RevealKind, RevealStyle, SectionGeometry, IMAGE_TAB_INDEX,
};

// Configuration exports
pub use config::PageConfig;

// Error exports
pub use error::PageError;

// Result type alias
pub type Result<T> = std::result::Result<T, PageError>;

// Utility exports
pub use utils::Debouncer;

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        BadgeController, BadgeState, Clock, FieldRule, FieldValidator, FormReport, FormSchema,
        GalleryModal, NavTracker, PageConfig, PageError, PreferenceStore, Result,
        RevealController, SubmissionController, SubmissionState, Theme, ThemeController,
        ValidationResult,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "bella-vista-page");
    }
}

//! Contact form

pub mod submission;
pub mod validation;

pub use submission::{ContactSession, SubmissionStatus, SubmitOutcome};
pub use validation::{
    ContactForm, Field, FieldError, ValidationErrors, ValidationRules,
    validate, validate_field,
};

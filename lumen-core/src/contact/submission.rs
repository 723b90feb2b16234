//! Contact form session: edits, validation and the simulated submit cycle

use std::time::Duration;

use super::validation::{
    ContactForm, Field, ValidationErrors, ValidationRules, validate,
    validate_field,
};
use crate::constants::contact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// The form was accepted; the confirmation stays up until dismissed or
    /// the visitor starts a new message.
    Succeeded,
}

/// Result of asking the session to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are recorded on the session.
    Invalid,
    /// A submission is already in flight.
    AlreadySubmitting,
    /// Submission began with this snapshot of the form.
    Started(ContactForm),
}

#[derive(Debug, Clone)]
pub struct ContactSession {
    form: ContactForm,
    errors: ValidationErrors,
    status: SubmissionStatus,
    rules: ValidationRules,
    submit_delay: Duration,
}

impl Default for ContactSession {
    fn default() -> Self {
        Self::new(
            ValidationRules::default(),
            Duration::from_millis(contact::SUBMIT_DELAY_MS),
        )
    }
}

impl ContactSession {
    pub fn new(rules: ValidationRules, submit_delay: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
            rules,
            submit_delay,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// How long the host waits before reporting the submission complete.
    pub fn submit_delay(&self) -> Duration {
        self.submit_delay
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Update one field. Its error, if any, is cleared until the next
    /// submit or blur. Edits are ignored while submitting.
    pub fn edit(&mut self, field: Field, value: String) {
        if self.is_submitting() {
            return;
        }
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
        }
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// Re-check a single field when it loses focus.
    pub fn blur(&mut self, field: Field) {
        match validate_field(&self.form, field, &self.rules) {
            Some(error) => {
                log::trace!("contact field {field:?} rejected: {error}");
                self.errors.insert(field, error);
            }
            None => self.errors.clear(field),
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::AlreadySubmitting;
        }
        match validate(&self.form, &self.rules) {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                self.status = SubmissionStatus::Submitting;
                log::debug!("contact form submitted");
                SubmitOutcome::Started(self.form.clone())
            }
            Err(errors) => {
                log::debug!("contact form rejected: {} field(s)", errors.len());
                self.errors = errors;
                self.status = SubmissionStatus::Idle;
                SubmitOutcome::Invalid
            }
        }
    }

    /// The simulated round trip finished. Clears the form.
    pub fn complete(&mut self) {
        if !self.is_submitting() {
            return;
        }
        self.form = ContactForm::default();
        self.status = SubmissionStatus::Succeeded;
    }

    /// Hide the confirmation notice.
    pub fn dismiss(&mut self) {
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
        }
    }
}

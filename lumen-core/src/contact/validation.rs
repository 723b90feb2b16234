//! Field-by-field contact form validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::constants::contact;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email regex should compile")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?[0-9\s\-()]{7,}$").expect("phone regex should compile")
});

/// Form fields, ordered as they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Service,
        Self::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Service => "Service",
            Self::Message => "Message",
        }
    }
}

/// Why a single field was rejected. The display text is shown next to the
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter at least {min} characters")]
    TooShort { min: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationRules {
    pub min_name_chars: usize,
    pub min_message_chars: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_name_chars: contact::MIN_NAME_CHARS,
            min_message_chars: contact::MIN_MESSAGE_CHARS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Optional.
    pub phone: String,
    /// Optional choice from the services list.
    pub service: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Service => {
                self.service = (!value.trim().is_empty()).then_some(value)
            }
            Field::Message => self.message = value,
        }
    }
}

/// Every failing field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<(Field, FieldError)>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0
            .iter()
            .find_map(|(f, err)| (*f == field).then_some(err))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().map(|(field, _)| *field)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.retain(|(f, _)| *f != field);
    }

    /// Record `error` for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.clear(field);
        self.0.push((field, error));
        self.0.sort_by_key(|(f, _)| *f);
    }
}

fn min_chars(value: &str, min: usize) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(FieldError::Required)
    } else if trimmed.chars().count() < min {
        Some(FieldError::TooShort { min })
    } else {
        None
    }
}

/// Check a single field.
pub fn validate_field(
    form: &ContactForm,
    field: Field,
    rules: &ValidationRules,
) -> Option<FieldError> {
    match field {
        Field::Name => min_chars(&form.name, rules.min_name_chars),
        Field::Email => {
            let email = form.email.trim();
            if email.is_empty() {
                Some(FieldError::Required)
            } else if !EMAIL_PATTERN.is_match(email) {
                Some(FieldError::InvalidEmail)
            } else {
                None
            }
        }
        Field::Phone => {
            let phone = form.phone.trim();
            (!phone.is_empty() && !PHONE_PATTERN.is_match(phone))
                .then_some(FieldError::InvalidPhone)
        }
        Field::Service => None,
        Field::Message => min_chars(&form.message, rules.min_message_chars),
    }
}

/// Check every field, collecting all failures.
pub fn validate(
    form: &ContactForm,
    rules: &ValidationRules,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        if let Some(error) = validate_field(form, field, rules) {
            errors.insert(field, error);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

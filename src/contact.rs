//! Contact
//!
//! The contact form on the home screen: name, email and message are all
//! required, and the email must look like `something@domain.tld`.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::info;

#[expect(clippy::expect_used, reason = "the pattern is a valid literal")]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender name
    Name,

    /// Sender email address
    Email,

    /// Message body
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        })
    }
}

/// A single field validation error.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was left empty.
    #[error("{0} is required")]
    Required(ContactField),

    /// The email address is not valid.
    #[error("Email is invalid")]
    InvalidEmail,
}

impl ContactError {
    /// The field the error belongs to.
    pub fn field(self) -> ContactField {
        match self {
            Self::Required(field) => field,
            Self::InvalidEmail => ContactField::Email,
        }
    }
}

/// Every validation error found on a form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(SmallVec<[ContactError; 3]>);

impl ValidationErrors {
    /// The errors, in field order.
    pub fn errors(&self) -> &[ContactError] {
        &self.0
    }

    /// The error for a field, if it has one.
    pub fn get(&self, field: ContactField) -> Option<ContactError> {
        self.0.iter().copied().find(|error| error.field() == field)
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for error in &self.0 {
            if !first {
                f.write_str(", ")?;
            }

            write!(f, "{error}")?;
            first = false;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A message sent from a valid contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Sender name
    pub name: String,

    /// Sender email address
    pub email: String,

    /// Message body
    pub message: String,
}

/// Contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name
    pub name: String,

    /// Sender email address
    pub email: String,

    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Create a form with every field filled in.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validate every field, collecting all errors.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] if any field is invalid.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = SmallVec::new();

        if self.name.is_empty() {
            errors.push(ContactError::Required(ContactField::Name));
        }

        if self.email.is_empty() {
            errors.push(ContactError::Required(ContactField::Email));
        } else if !EMAIL.is_match(&self.email) {
            errors.push(ContactError::InvalidEmail);
        }

        if self.message.is_empty() {
            errors.push(ContactError::Required(ContactField::Message));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Validate the form and, if valid, take its contents and reset it.
    ///
    /// An invalid form is left as it was so the user can correct it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] if any field is invalid.
    pub fn submit(&mut self) -> Result<ContactSubmission, ValidationErrors> {
        self.validate()?;

        let form = std::mem::take(self);

        info!(name = %form.name, email = %form.email, "contact form submitted");

        Ok(ContactSubmission {
            name: form.name,
            email: form.email,
            message: form.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn valid_form_passes() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");

        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default()
            .validate()
            .err()
            .unwrap_or_default();

        assert_eq!(
            errors.errors(),
            [
                ContactError::Required(ContactField::Name),
                ContactError::Required(ContactField::Email),
                ContactError::Required(ContactField::Message),
            ]
        );
        assert_eq!(
            errors.to_string(),
            "Name is required, Email is required, Message is required"
        );
    }

    #[test]
    fn malformed_email_is_invalid() {
        for email in ["ada", "ada@example", "@example.com", "ada example@com"] {
            let form = ContactForm::new("Ada", email, "Hello");
            let errors = form.validate().err().unwrap_or_default();

            assert_eq!(
                errors.get(ContactField::Email),
                Some(ContactError::InvalidEmail),
                "{email} should be rejected"
            );
            assert_eq!(errors.get(ContactField::Name), None);
        }
    }

    #[test]
    fn submit_resets_valid_form() -> TestResult {
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hello");

        let submission = form.submit()?;

        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(form, ContactForm::default());

        Ok(())
    }

    #[test]
    fn submit_keeps_invalid_form() {
        let mut form = ContactForm::new("Ada", "not-an-email", "Hello");

        assert!(form.submit().is_err());
        assert_eq!(form.email, "not-an-email");
    }
}

//! Contact form validation and submission rules.
//!
//! Validation walks every required field except the honeypot and records at
//! most one error per field, so the page can mark all bad fields at once.
//! A populated honeypot short-circuits everything: the submission is
//! rejected before validation runs and the visitor sees the same generic
//! error a relay failure would produce.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::fmt;

use crate::text::capitalize;

pub const MIN_MESSAGE_LEN: usize = 10;
pub const MESSAGE_FIELD: &str = "message";

pub const SENDING_LABEL: &str = "Sending...";
pub const INVALID_SUMMARY: &str = "Please fill in all required fields correctly.";
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon!";
pub const GENERIC_FAILURE: &str =
    "Oops! There was a problem sending your message. Please try again.";
pub const NETWORK_FAILURE: &str =
    "Oops! There was a problem sending your message. Please try again or email me directly.";

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    /// Classify a control from its tag name and `type` attribute.
    #[must_use]
    pub fn from_control(tag_name: &str, input_type: &str) -> Self {
        if tag_name.eq_ignore_ascii_case("textarea") {
            Self::TextArea
        } else if input_type.eq_ignore_ascii_case("email") {
            Self::Email
        } else {
            Self::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
            required: true,
        }
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// First rule this field breaks, if any.
    #[must_use]
    pub fn check(&self) -> Option<FieldError> {
        let value = self.value.trim();
        if value.is_empty() {
            return Some(FieldError::Required {
                field: self.name.clone(),
            });
        }
        if self.kind == FieldKind::Email && !is_valid_email(value) {
            return Some(FieldError::InvalidEmail);
        }
        if self.name == MESSAGE_FIELD && value.chars().count() < MIN_MESSAGE_LEN {
            return Some(FieldError::TooShort {
                min: MIN_MESSAGE_LEN,
            });
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Required { field: String },
    InvalidEmail,
    TooShort { min: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", capitalize(field)),
            Self::InvalidEmail => f.write_str("Please enter a valid email address"),
            Self::TooShort { min } => {
                write!(f, "Message must be at least {min} characters long")
            }
        }
    }
}

/// Per-field errors in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub errors: Vec<(String, FieldError)>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn error_for(&self, name: &str) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, err)| err)
    }
}

#[must_use]
pub fn validate(fields: &[FormField], honeypot: &str) -> ValidationReport {
    let errors = fields
        .iter()
        .filter(|f| f.required && f.name != honeypot)
        .filter_map(|f| f.check().map(|err| (f.name.clone(), err)))
        .collect();
    ValidationReport { errors }
}

/// Name/value pairs to post, honeypot excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Spam,
    Invalid(ValidationReport),
}

impl Rejection {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Spam => GENERIC_FAILURE,
            Self::Invalid(_) => INVALID_SUMMARY,
        }
    }
}

/// Gate a submission: honeypot first, then validation.
///
/// # Errors
///
/// Returns [`Rejection::Spam`] when the honeypot holds anything, or
/// [`Rejection::Invalid`] with the per-field report when validation fails.
pub fn prepare_submission(fields: &[FormField], honeypot: &str) -> Result<Submission, Rejection> {
    if fields
        .iter()
        .any(|f| f.name == honeypot && !f.value.is_empty())
    {
        log::debug!("honeypot populated, dropping submission");
        return Err(Rejection::Spam);
    }
    let report = validate(fields, honeypot);
    if !report.is_valid() {
        return Err(Rejection::Invalid(report));
    }
    Ok(Submission {
        fields: fields
            .iter()
            .filter(|f| f.name != honeypot)
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayError {
    pub message: String,
}

/// Error body returned by the form relay on non-success responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct RelayErrorBody {
    #[serde(default)]
    pub errors: Option<Vec<RelayError>>,
}

impl RelayErrorBody {
    #[must_use]
    pub fn joined(&self) -> Option<String> {
        self.errors.as_ref().map(|errs| {
            errs.iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// The relay answered with a failure status; carries its joined error messages when it sent any.
    Relay(Option<String>),
    Network,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Sent)
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Sent => SUCCESS_MESSAGE.to_string(),
            Self::Relay(Some(joined)) => format!("Error: {joined}"),
            Self::Relay(None) => GENERIC_FAILURE.to_string(),
            Self::Network => NETWORK_FAILURE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, message: &str, honeypot: &str) -> Vec<FormField> {
        vec![
            FormField::new("name", FieldKind::Text, name),
            FormField::new("email", FieldKind::Email, email),
            FormField::new("subject", FieldKind::Text, "").optional(),
            FormField::new("message", FieldKind::TextArea, message),
            FormField::new("honeypot", FieldKind::Text, honeypot).optional(),
        ]
    }

    #[test]
    fn empty_required_field_is_reported() {
        let report = validate(&contact("  ", "a@b.co", "Long enough text", ""), "honeypot");
        assert!(!report.is_valid());
        assert_eq!(
            report.error_for("name").map(ToString::to_string).as_deref(),
            Some("Name is required")
        );
        assert!(report.error_for("subject").is_none());
    }

    #[test]
    fn malformed_email_is_invalid() {
        let report = validate(&contact("Ada", "not-an-email", "Long enough text", ""), "honeypot");
        assert_eq!(report.error_for("email"), Some(&FieldError::InvalidEmail));
        assert!(is_valid_email("ada@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("a da@example.com"));
    }

    #[test]
    fn message_length_boundary() {
        let nine = validate(&contact("Ada", "a@b.co", "123456789", ""), "honeypot");
        assert_eq!(
            nine.error_for("message"),
            Some(&FieldError::TooShort { min: 10 })
        );
        let ten = validate(&contact("Ada", "a@b.co", "1234567890", ""), "honeypot");
        assert!(ten.is_valid());
    }

    #[test]
    fn all_failing_fields_are_collected_one_error_each() {
        let report = validate(&contact("", "", "", ""), "honeypot");
        assert_eq!(report.errors.len(), 3);
        assert_eq!(
            report.error_for("email"),
            Some(&FieldError::Required {
                field: "email".into()
            })
        );
        assert_eq!(
            report.error_for("message").map(ToString::to_string).as_deref(),
            Some("Message is required")
        );
    }

    #[test]
    fn honeypot_rejects_before_validation() {
        let result = prepare_submission(&contact("", "bad", "", "i am a bot"), "honeypot");
        assert_eq!(result, Err(Rejection::Spam));
        assert_eq!(Rejection::Spam.message(), GENERIC_FAILURE);
    }

    #[test]
    fn successful_submission_strips_honeypot() {
        let submission =
            prepare_submission(&contact("Ada", "ada@example.com", "Hello there, friend", ""), "honeypot")
                .unwrap();
        assert!(submission.fields.iter().all(|(name, _)| name != "honeypot"));
        assert!(submission.fields.iter().any(|(name, _)| name == "subject"));
        assert_eq!(submission.fields.len(), 4);
    }

    #[test]
    fn invalid_submission_carries_report() {
        let Err(Rejection::Invalid(report)) =
            prepare_submission(&contact("Ada", "ada@example.com", "short", ""), "honeypot")
        else {
            panic!("expected invalid rejection");
        };
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn relay_errors_are_joined() {
        let body: RelayErrorBody = serde_json::from_str(
            r#"{ "errors": [{ "message": "email invalid" }, { "message": "rate limited" }] }"#,
        )
        .unwrap();
        let outcome = SubmitOutcome::Relay(body.joined());
        assert_eq!(outcome.message(), "Error: email invalid, rate limited");

        let empty: RelayErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(SubmitOutcome::Relay(empty.joined()).message(), GENERIC_FAILURE);
        assert_eq!(SubmitOutcome::Network.message(), NETWORK_FAILURE);
        assert!(SubmitOutcome::Sent.is_success());
    }

    #[test]
    fn field_kind_from_control() {
        assert_eq!(FieldKind::from_control("TEXTAREA", ""), FieldKind::TextArea);
        assert_eq!(FieldKind::from_control("INPUT", "email"), FieldKind::Email);
        assert_eq!(FieldKind::from_control("INPUT", "text"), FieldKind::Text);
    }
}

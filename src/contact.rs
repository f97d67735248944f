use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stand-in latency for the message delivery call.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Value of the `name` attribute on the rendered input.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "your.email@example.com",
            Field::Subject => "What's this about?",
            Field::Message => "Your Message",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Message => "textarea",
            Field::Name | Field::Subject => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
}

/// Per-field validation failures. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    fn insert(&mut self, field: Field, err: ValidationError) {
        self.0.insert(field, err);
    }

    fn clear_field(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }
}

/// Checks every field independently; the result only holds the failures.
pub fn validate(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, ValidationError::NameRequired);
    }
    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, ValidationError::EmailRequired);
    } else if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(Field::Email, ValidationError::InvalidEmail);
    }
    if fields.subject.trim().is_empty() {
        errors.insert(Field::Subject, ValidationError::SubjectRequired);
    }
    if fields.message.trim().is_empty() {
        errors.insert(Field::Message, ValidationError::MessageRequired);
    }
    errors
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Sending,
    Success,
    Failure,
}

impl SubmissionStatus {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Validating | Self::Sending)
    }

    /// Text for the submit button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sending => "Sending...",
            Self::Success => "Message Sent!",
            Self::Idle | Self::Validating | Self::Failure => "Send Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Failed to send message. Please try again.")]
    Delivery(String),
}

/// What a submit action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed and the form is now `Sending`. Holds the message to deliver.
    Accepted(FormFields),
    /// Validation failed; the per-field errors are on the form.
    Rejected { errors: usize },
    /// A submission was already in flight.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    fields: FormFields,
    errors: FieldErrors,
    status: SubmissionStatus,
    failure: Option<SubmissionError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error_for(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(field)
    }

    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Sending
    }

    pub fn failure_message(&self) -> Option<String> {
        if self.status != SubmissionStatus::Failure {
            return None;
        }
        self.failure.as_ref().map(ToString::to_string)
    }

    fn set_status(&mut self, status: SubmissionStatus) {
        if self.status != status {
            log::debug!("contact form: {:?} -> {:?}", self.status, status);
        }
        if status != SubmissionStatus::Failure {
            self.failure = None;
        }
        self.status = status;
    }

    /// Stores the new value and drops only this field's error. Other
    /// errors stay until their own field is edited or the form is resubmitted.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.clear_field(field);
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Failure
        ) {
            self.set_status(SubmissionStatus::Idle);
        }
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if !self.can_submit() {
            log::debug!("contact form: submit ignored while sending");
            return SubmitAttempt::Ignored;
        }
        self.set_status(SubmissionStatus::Validating);
        let errors = validate(&self.fields);
        if !errors.is_empty() {
            let count = errors.len();
            self.errors = errors;
            self.set_status(SubmissionStatus::Idle);
            return SubmitAttempt::Rejected { errors: count };
        }
        self.errors = FieldErrors::default();
        self.set_status(SubmissionStatus::Sending);
        log::info!(
            "contact form: sending message ({} chars)",
            self.fields.message.chars().count()
        );
        SubmitAttempt::Accepted(self.fields.clone())
    }

    /// Finishes the in-flight submission. Does nothing unless `Sending`.
    pub fn complete_submit(&mut self, result: Result<(), SubmissionError>) {
        if self.status != SubmissionStatus::Sending {
            log::warn!(
                "contact form: completion received while {:?}, dropping",
                self.status
            );
            return;
        }
        match result {
            Ok(()) => {
                self.fields.clear();
                self.set_status(SubmissionStatus::Success);
            }
            Err(e) => {
                log::warn!("contact form: delivery failed: {e:?}");
                self.set_status(SubmissionStatus::Failure);
                self.failure = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    fn form_with(fields: &FormFields) -> ContactForm {
        let mut form = ContactForm::new();
        for f in Field::ALL {
            form.on_field_change(f, fields.get(f));
        }
        form
    }

    fn messages(errors: &FieldErrors) -> Vec<(Field, String)> {
        errors.iter().map(|(f, e)| (f, e.to_string())).collect()
    }

    #[test]
    fn test_blank_fields_fail_everywhere() {
        let fields = FormFields {
            name: "   ".to_string(),
            email: "".to_string(),
            subject: "\t".to_string(),
            message: "\n".to_string(),
        };
        let errors = validate(&fields);
        assert_eq!(
            messages(&errors),
            vec![
                (Field::Name, "Name is required".to_string()),
                (Field::Email, "Email is required".to_string()),
                (Field::Subject, "Subject is required".to_string()),
                (Field::Message, "Message is required".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_email_only() {
        let fields = FormFields {
            email: "not-an-email".to_string(),
            ..filled()
        };
        let errors = validate(&fields);
        assert_eq!(
            messages(&errors),
            vec![(Field::Email, "Please enter a valid email".to_string())]
        );
    }

    #[test]
    fn test_email_pattern() {
        let check = |email: &str| {
            let fields = FormFields {
                email: email.to_string(),
                ..filled()
            };
            validate(&fields).get(Field::Email)
        };
        assert_eq!(check("a@b.co"), None);
        assert_eq!(check("first.last@sub.domain.org"), None);
        assert_eq!(check("a@b"), Some(ValidationError::InvalidEmail));
        assert_eq!(check("a b@c.de"), Some(ValidationError::InvalidEmail));
        assert_eq!(check("a@@b.co"), Some(ValidationError::InvalidEmail));
        assert_eq!(check("@b.co"), Some(ValidationError::InvalidEmail));
        // pattern runs on the raw value, only the emptiness check trims
        assert_eq!(check(" a@b.co"), Some(ValidationError::InvalidEmail));
        assert_eq!(check("   "), Some(ValidationError::EmailRequired));
    }

    #[test]
    fn test_valid_fields() {
        let fields = FormFields {
            email: "a@b.co".to_string(),
            ..filled()
        };
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn test_validate_idempotent() {
        let fields = FormFields {
            name: String::new(),
            email: "nope".to_string(),
            ..filled()
        };
        assert_eq!(validate(&fields), validate(&fields));
        assert_eq!(validate(&fields).len(), 2);
    }

    #[test]
    fn test_submit_success_resets_fields() {
        let mut form = form_with(&filled());
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let attempt = form.begin_submit();
        assert_eq!(attempt, SubmitAttempt::Accepted(filled()));
        assert_eq!(form.status(), SubmissionStatus::Sending);
        assert!(!form.can_submit());
        assert!(form.status().is_busy());

        form.complete_submit(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.fields().is_blank());
        assert!(form.errors().is_empty());
        assert_eq!(form.status().label(), "Message Sent!");
    }

    #[test]
    fn test_submit_rejected_keeps_fields() {
        let fields = FormFields {
            name: String::new(),
            ..filled()
        };
        let mut form = form_with(&fields);

        let attempt = form.begin_submit();
        assert_eq!(attempt, SubmitAttempt::Rejected { errors: 1 });
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(
            messages(form.errors()),
            vec![(Field::Name, "Name is required".to_string())]
        );
        assert_eq!(form.fields(), &fields);
    }

    #[test]
    fn test_submit_while_sending_is_ignored() {
        let mut form = form_with(&filled());
        assert!(matches!(form.begin_submit(), SubmitAttempt::Accepted(_)));

        assert_eq!(form.begin_submit(), SubmitAttempt::Ignored);
        assert_eq!(form.status(), SubmissionStatus::Sending);
        assert_eq!(form.fields(), &filled());

        // only one completion takes effect
        form.complete_submit(Ok(()));
        form.complete_submit(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_edit_clears_only_that_error() {
        let mut form = ContactForm::new();
        form.on_field_change(Field::Email, "bad");
        assert_eq!(form.begin_submit(), SubmitAttempt::Rejected { errors: 4 });

        form.on_field_change(Field::Email, "new@value.com");
        assert_eq!(form.error_for(Field::Email), None);
        assert_eq!(form.error_for(Field::Name), Some(ValidationError::NameRequired));
        assert_eq!(
            form.error_for(Field::Subject),
            Some(ValidationError::SubjectRequired)
        );
        assert_eq!(
            form.error_for(Field::Message),
            Some(ValidationError::MessageRequired)
        );
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn test_edit_does_not_revalidate() {
        let mut form = ContactForm::new();
        form.begin_submit();
        // still blank, but the edit clears the error without checking it
        form.on_field_change(Field::Name, "  ");
        assert_eq!(form.error_for(Field::Name), None);
        assert_eq!(form.begin_submit(), SubmitAttempt::Rejected { errors: 4 });
    }

    #[test]
    fn test_success_shown_until_edit() {
        let mut form = form_with(&filled());
        form.begin_submit();
        form.complete_submit(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);

        form.on_field_change(Field::Name, "B");
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_resubmit_blank_after_success() {
        let mut form = form_with(&filled());
        form.begin_submit();
        form.complete_submit(Ok(()));

        assert_eq!(form.begin_submit(), SubmitAttempt::Rejected { errors: 4 });
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_failure_keeps_fields_for_retry() {
        let mut form = form_with(&filled());
        form.begin_submit();
        form.complete_submit(Err(SubmissionError::Delivery("timeout".to_string())));

        assert_eq!(form.status(), SubmissionStatus::Failure);
        assert_eq!(form.fields(), &filled());
        assert_eq!(
            form.failure_message().as_deref(),
            Some("Failed to send message. Please try again.")
        );
        assert!(form.can_submit());

        assert!(matches!(form.begin_submit(), SubmitAttempt::Accepted(_)));
        assert_eq!(form.failure_message(), None);
        form.complete_submit(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_completion_without_submit_dropped() {
        let mut form = form_with(&filled());
        form.complete_submit(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields(), &filled());
    }

    #[test]
    fn test_field_names() {
        for f in Field::ALL {
            assert_eq!(f.as_str().parse::<Field>(), Ok(f));
        }
        assert_eq!(
            "phone".parse::<Field>(),
            Err(UnknownField("phone".to_string()))
        );

        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(serde_json::to_value(Field::Subject).unwrap(), "subject");
    }
}

use serde::Serialize;

use crate::error::RelayError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

/// Payload handed to both relay templates.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// First field failing the required / email-shape checks.
    pub fn first_invalid(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|field| {
            let value = self.get(*field).trim();
            value.is_empty() || (*field == Field::Email && !looks_like_email(value))
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
    /// Submit refused before dispatch; names the first failing field.
    Invalid(Field),
}

/// Form fields plus the submission lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactController {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactController {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    pub fn update(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if matches!(self.status, SubmissionStatus::Invalid(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Starts an attempt and returns the payload to dispatch, or None when
    /// a submission is already in flight or the form is incomplete.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.is_pending() {
            return None;
        }
        if let Some(field) = self.form.first_invalid() {
            self.status = SubmissionStatus::Invalid(field);
            return None;
        }
        self.status = SubmissionStatus::Pending;
        Some(self.form.clone())
    }

    /// Settles the in-flight attempt. Fields reset only on success.
    pub fn finish(&mut self, result: &Result<(), RelayError>) {
        if !self.is_pending() {
            return;
        }
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.form = ContactForm::default();
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
            }
        }
    }
}

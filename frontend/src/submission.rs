//! Contact form record and the seam it is handed to on submit.

use std::fmt;
use std::rc::Rc;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::error::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// Name, email and message are required; phone is optional.
    pub fn validate(&self) -> Result<(), SubmitError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SubmitError::MissingField(field));
            }
        }

        if !is_plausible_email(self.email.trim()) {
            return Err(SubmitError::InvalidEmail);
        }
        Ok(())
    }
}

/// Edits applied to the form one at a time, so updates that land before
/// the next render each see the previous one.
pub enum FormAction {
    Set(Field, String),
    Clear,
}

impl Reducible for ContactSubmission {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Set(field, value) => {
                let mut next = (*self).clone();
                next.set(field, value);
                Rc::new(next)
            }
            FormAction::Clear => Rc::new(ContactSubmission::default()),
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Receives validated submissions.
pub trait ContactSink {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

/// Writes the record to the browser console; there is no backend yet.
pub struct ConsoleSink;

impl ContactSink for ConsoleSink {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let record = serde_json::to_string(submission).map_err(|e| SubmitError::Rejected(e.to_string()))?;
        info!("Form submitted: {}", record);
        Ok(())
    }
}

/// Cheaply clonable sink handle usable as a component prop.
#[derive(Clone)]
pub struct SinkHandle(Rc<dyn ContactSink>);

impl SinkHandle {
    pub fn new(sink: impl ContactSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    /// Validates, then hands the record to the sink.
    pub fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        if let Err(err) = submission.validate() {
            warn!("Contact form not sent: {}", err);
            return Err(err);
        }
        self.0.submit(submission)
    }
}

impl Default for SinkHandle {
    fn default() -> Self {
        Self::new(ConsoleSink)
    }
}

impl PartialEq for SinkHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

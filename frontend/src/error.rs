use thiserror::Error;

use crate::submission::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unsupported locale code: {0:?}")]
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("required field is empty: {0}")]
    MissingField(Field),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("submission rejected: {0}")]
    Rejected(String),
}

impl SubmitError {
    /// Translation key of the message shown under the contact form.
    pub fn message_key(&self) -> &'static str {
        match self {
            SubmitError::MissingField(_) => "fieldRequired",
            SubmitError::InvalidEmail => "invalidEmail",
            SubmitError::Rejected(_) => "submitFailed",
        }
    }
}

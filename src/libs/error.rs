//! Error types surfaced by the reporting core.
//!
//! Every user-facing failure carries a [`Message`] so callers can surface a
//! localization key instead of literal text. Collaborator failures (store
//! lookups, sinks) are wrapped untouched.

use crate::libs::messages::Message;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller is not signed in, inactive, or lacks the required role.
    #[error("{0}")]
    Auth(Message),

    /// A report was requested for an unrecognized period token.
    #[error("{0}")]
    InvalidPeriod(Message),

    /// Input failed validation (empty task name, malformed filter, ...).
    #[error("{0}")]
    Validation(Message),

    /// A collaborating store failed.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl Error {
    /// The localization key of the underlying message, if any.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            Error::Auth(msg) | Error::InvalidPeriod(msg) | Error::Validation(msg) => Some(msg.key()),
            Error::Store(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

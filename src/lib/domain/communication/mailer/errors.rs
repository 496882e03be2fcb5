//! Mailer errors

use lettre::address::AddressError;
use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The relay refused the submission or the connection failed
    #[error(transparent)]
    SmtpError(#[from] lettre::transport::smtp::Error),

    /// A sender or recipient mailbox could not be parsed
    #[error("Invalid email address")]
    InvalidAddress(#[from] AddressError),

    /// The message could not be assembled
    #[error(transparent)]
    MessageError(#[from] lettre::error::Error),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}

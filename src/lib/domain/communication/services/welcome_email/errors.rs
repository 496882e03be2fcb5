//! Welcome email errors

use thiserror::Error;

use crate::domain::communication::mailer::errors::MailerError;

/// Errors raised while sending a welcome email
#[derive(Debug, Error)]
pub enum WelcomeEmailError {
    /// The email body could not be rendered
    #[error("Could not render the welcome email")]
    RenderError(anyhow::Error),

    /// The relay refused or failed the submission
    #[error(transparent)]
    DispatchError(#[from] MailerError),
}

impl From<askama::Error> for WelcomeEmailError {
    fn from(err: askama::Error) -> Self {
        WelcomeEmailError::RenderError(err.into())
    }
}

impl From<css_inline::InlineError> for WelcomeEmailError {
    fn from(err: css_inline::InlineError) -> Self {
        WelcomeEmailError::RenderError(err.into())
    }
}

//! Application state module

use std::fmt;
use std::sync::Arc;

use crate::domain::communication::services::welcome_email::WelcomeEmailService;

/// Global application state
#[derive(Clone)]
pub struct AppState<W>
where
    W: WelcomeEmailService,
{
    /// Welcome email service
    pub welcome_emails: Arc<W>,
}

impl<W> AppState<W>
where
    W: WelcomeEmailService,
{
    /// Create a new application state
    pub fn new(welcome_emails: W) -> Self {
        Self {
            welcome_emails: Arc::new(welcome_emails),
        }
    }
}

impl<W> fmt::Debug for AppState<W>
where
    W: WelcomeEmailService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("welcome_emails", &"WelcomeEmailService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::communication::services::welcome_email::MockWelcomeEmailService;

#[cfg(test)]
pub fn test_state(
    welcome_emails: Option<MockWelcomeEmailService>,
) -> AppState<MockWelcomeEmailService> {
    let welcome_emails = welcome_emails
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockWelcomeEmailService::new()));

    AppState { welcome_emails }
}

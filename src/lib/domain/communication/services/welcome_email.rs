//! Welcome email service

use std::sync::Arc;

use askama::Template;
use async_trait::async_trait;
use tracing::info;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{
    email_addresses::EmailAddress,
    emails::welcome::{WelcomeEmailTemplate, WELCOME_SUBJECT},
    mailer::{message::OutboundMessage, Mailer, SendReceipt},
};

pub mod errors;

use errors::WelcomeEmailError;

/// Welcome email service
#[async_trait]
pub trait WelcomeEmailService: Clone + Send + Sync + 'static {
    /// Render the welcome email for a user and dispatch it.
    ///
    /// # Arguments
    /// * `user_name` - The name used in the greeting.
    /// * `recipient` - The validated [`EmailAddress`] to send to.
    ///
    /// # Returns
    /// - [`Ok`] with the relay's [`SendReceipt`] if the relay accepted the message.
    /// - [`Err`] with a [`WelcomeEmailError`] if rendering or dispatch failed.
    async fn send_welcome_email(
        &self,
        user_name: &str,
        recipient: &EmailAddress,
    ) -> Result<SendReceipt, WelcomeEmailError>;
}

#[cfg(test)]
mock! {
    pub WelcomeEmailService {}

    impl Clone for WelcomeEmailService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl WelcomeEmailService for WelcomeEmailService {
        async fn send_welcome_email(
            &self,
            user_name: &str,
            recipient: &EmailAddress,
        ) -> Result<SendReceipt, WelcomeEmailError>;
    }
}

/// Welcome email service implementation
#[derive(Debug, Clone)]
pub struct WelcomeEmailServiceImpl<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    sender: String,
}

impl<M> WelcomeEmailServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new welcome email service.
    ///
    /// `sender` is the mailbox every welcome email is sent from; the
    /// sender policy is fixed, not per-call configurable.
    pub fn new(mailer: Arc<M>, sender: &str) -> Self {
        Self {
            mailer,
            sender: sender.to_string(),
        }
    }

    /// Renders the welcome message for one recipient.
    ///
    /// Pure string construction; deterministic for identical inputs.
    pub fn render(
        &self,
        user_name: &str,
        recipient: &EmailAddress,
    ) -> Result<OutboundMessage, WelcomeEmailError> {
        let template = WelcomeEmailTemplate::new(user_name);
        let html = css_inline::inline(&template.render()?)?;
        let plain = template.render_plain();

        Ok(OutboundMessage {
            from: self.sender.clone(),
            to: recipient.clone(),
            subject: WELCOME_SUBJECT.to_string(),
            html_body: html,
            plain_body: plain,
        })
    }
}

#[async_trait]
impl<M> WelcomeEmailService for WelcomeEmailServiceImpl<M>
where
    M: Mailer,
{
    async fn send_welcome_email(
        &self,
        user_name: &str,
        recipient: &EmailAddress,
    ) -> Result<SendReceipt, WelcomeEmailError> {
        let message = self.render(user_name, recipient)?;

        let receipt = self.mailer.send(&message).await?;

        info!(to = %recipient, message_id = %receipt.message_id, "welcome email sent");

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use testresult::TestResult;

    use crate::domain::communication::mailer::{errors::MailerError, MockMailer};

    use super::*;

    fn service(mailer: MockMailer) -> WelcomeEmailServiceImpl<MockMailer> {
        WelcomeEmailServiceImpl::new(Arc::new(mailer), "Your Company <sender@example.com>")
    }

    #[test]
    fn test_render_builds_the_full_message() -> TestResult {
        let recipient = EmailAddress::new("ada@example.com")?;

        let message = service(MockMailer::new()).render("Ada", &recipient)?;

        assert_eq!(message.from, "Your Company <sender@example.com>");
        assert_eq!(message.to, recipient);
        assert_eq!(message.subject, WELCOME_SUBJECT);
        assert!(message.html_body.contains("Welcome aboard, Ada!"));
        assert!(message.plain_body.starts_with("Hi Ada,"));

        Ok(())
    }

    #[test]
    fn test_render_is_deterministic() -> TestResult {
        let recipient = EmailAddress::new("ada@example.com")?;
        let service = service(MockMailer::new());

        let first = service.render("Ada", &recipient)?;
        let second = service.render("Ada", &recipient)?;

        assert_eq!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_welcome_email_success() -> TestResult {
        let recipient = EmailAddress::new("ada@example.com")?;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(|message| {
                message.subject == WELCOME_SUBJECT && message.to.to_string() == "ada@example.com"
            })
            .returning(|_| {
                Ok(SendReceipt {
                    message_id: "250 2.0.0 OK".to_string(),
                })
            });

        let receipt = service(mailer).send_welcome_email("Ada", &recipient).await?;

        assert_eq!(receipt.message_id, "250 2.0.0 OK");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_welcome_email_dispatch_failure() -> TestResult {
        let recipient = EmailAddress::new("ada@example.com")?;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailerError::UnknownError(anyhow!("relay down"))));

        let result = service(mailer).send_welcome_email("Ada", &recipient).await;

        assert_eq!(result.unwrap_err().to_string(), "relay down");

        Ok(())
    }
}

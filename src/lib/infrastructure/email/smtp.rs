//! SMTP mailer implementation

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::MultiPart,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::domain::communication::mailer::{
    errors::MailerError, message::OutboundMessage, Mailer, SendReceipt,
};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(long = "smtp-host", env = "SMTP_HOST", default_value = "smtp.gmail.com")]
    pub host: String,

    /// The SMTP port
    #[clap(long = "smtp-port", env = "SMTP_PORT", default_value = "587")]
    pub port: u16,

    /// Wrap the connection in TLS from the first byte instead of
    /// upgrading via STARTTLS. Never set; the relay is always spoken
    /// to in STARTTLS mode.
    #[clap(skip)]
    pub implicit_tls: bool,

    /// The SMTP username, also the address welcome emails are sent from
    #[clap(
        long = "email-user",
        env = "EMAIL_USER",
        default_value = "your-email@gmail.com"
    )]
    pub username: String,

    /// The SMTP password
    #[clap(
        long = "email-pass",
        env = "EMAIL_PASS",
        default_value = "your-app-password"
    )]
    pub password: String,
}

impl SMTPConfig {
    /// The fixed sender mailbox: the configured username behind the
    /// company display name.
    pub fn sender(&self) -> String {
        format!("Your Company <{}>", self.username)
    }
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SMTPMailer {
    config: SMTPConfig,
}

impl SMTPMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SMTPConfig) -> Self {
        Self { config }
    }

    /// Build the transport for one submission
    pub fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        let relay = if self.config.implicit_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?.tls(
                Tls::Opportunistic(TlsParameters::new(self.config.host.to_string())?),
            )
        };

        Ok(relay.credentials(creds).port(self.config.port).build())
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<SendReceipt, MailerError> {
        let email = Message::builder()
            .from(message.from.parse()?)
            .to(message.to.to_string().parse()?)
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.plain_body.clone(),
                message.html_body.clone(),
            ))?;

        let response = self.transport()?.send(email).await?;

        Ok(SendReceipt {
            message_id: response.message().collect::<Vec<_>>().join(" "),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn config() -> SMTPConfig {
        SMTPConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            implicit_tls: false,
            username: "sender@example.com".to_string(),
            password: "app-password".to_string(),
        }
    }

    #[test]
    fn test_sender_wraps_the_username_in_a_display_name() {
        assert_eq!(config().sender(), "Your Company <sender@example.com>");
    }

    #[tokio::test]
    async fn test_transport_builds_without_connecting() -> TestResult {
        let mailer = SMTPMailer::new(config());

        mailer.transport()?;

        Ok(())
    }
}

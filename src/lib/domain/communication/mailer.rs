//! Mail dispatch module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

pub mod errors;
pub mod message;

use errors::MailerError;
use message::OutboundMessage;

/// Receipt returned by the relay for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// The relay's identifier for the message; an opaque string with no
    /// format guarantee.
    pub message_id: String,
}

/// Mail transport seam.
///
/// Exactly one submission attempt is made per call; retries are the
/// caller's problem (and this service makes none).
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Submit a rendered message to the relay.
    ///
    /// # Arguments
    /// * `message` - The [`OutboundMessage`] to hand to the relay.
    ///
    /// # Returns
    /// A [`SendReceipt`] with the relay's message identifier, or a
    /// [`MailerError`] describing the failure.
    async fn send(&self, message: &OutboundMessage) -> Result<SendReceipt, MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, message: &OutboundMessage) -> Result<SendReceipt, MailerError>;
    }
}

//! Email message

use crate::domain::communication::email_addresses::EmailAddress;

/// A fully-rendered email, ready for transmission.
///
/// Built fresh per request and discarded after the send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// The sender, as a display-name/address mailbox string
    pub from: String,

    /// The recipient of the email
    pub to: EmailAddress,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,

    /// The plain text body of the email
    pub plain_body: String,
}

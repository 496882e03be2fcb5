//! Email communication domain

pub mod email_addresses;
pub mod emails;
pub mod mailer;
pub mod services;

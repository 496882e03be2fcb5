//! Communication services

pub mod welcome_email;

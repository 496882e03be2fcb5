//! Welcome email template

use askama::Template;

/// Subject line for every welcome email
pub const WELCOME_SUBJECT: &str = "Welcome to Our Platform! 🎉";

/// Welcome email template
#[derive(Debug, Template)]
#[template(path = "emails/welcome.html")]
pub struct WelcomeEmailTemplate {
    /// The new user's name, interpolated into the greeting
    pub user_name: String,
}

impl WelcomeEmailTemplate {
    /// Creates a new `WelcomeEmailTemplate`
    pub fn new(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
        }
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        format!(
            "Hi {name},\n\n\
             Thank you for joining our platform! We're excited to have you as part of our community.\n\n\
             Here's what you can do to get started:\n\
             - Complete your profile\n\
             - Explore our features\n\
             - Connect with other users\n\
             - Check out our tutorials\n\n\
             If you have any questions, feel free to reach out to our support team. We're here to help!",
            name = self.user_name
        )
    }
}

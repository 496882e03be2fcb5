//! Test welcome email handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    domain::communication::{
        email_addresses::EmailAddress, services::welcome_email::WelcomeEmailService,
    },
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Name used for the fixed test identity
const TEST_USER_NAME: &str = "Test User";

/// Address used for the fixed test identity
const TEST_USER_EMAIL: &str = "test@example.com";

/// Outcome of the test dispatch, success or failure
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOutcome {
    /// Whether the relay accepted the message
    pub success: bool,

    /// The relay's message identifier, when accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// The failure description, when refused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Test welcome email response body
#[derive(Debug, Serialize, Deserialize)]
pub struct TestWelcomeEmailResponse {
    /// Whether the test ran; the dispatch outcome lives in `result`
    pub success: bool,

    /// Human-readable confirmation
    pub message: String,

    /// The dispatch outcome, reported even when the send failed
    pub result: SendOutcome,
}

/// Send the welcome email to the fixed test identity.
///
/// Responds 200 whether or not the relay accepted the message; the
/// dispatch outcome is embedded in the body instead of the status code.
pub async fn handler<W: WelcomeEmailService>(
    State(state): State<AppState<W>>,
) -> Result<Json<TestWelcomeEmailResponse>, ApiError> {
    let recipient = EmailAddress::new(TEST_USER_EMAIL)?;

    let result = match state
        .welcome_emails
        .send_welcome_email(TEST_USER_NAME, &recipient)
        .await
    {
        Ok(receipt) => SendOutcome {
            success: true,
            message_id: Some(receipt.message_id),
            error: None,
        },
        Err(err) => SendOutcome {
            success: false,
            message_id: None,
            error: Some(err.to_string()),
        },
    };

    Ok(Json(TestWelcomeEmailResponse {
        success: true,
        message: "Test welcome email sent".to_string(),
        result,
    }))
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::{
        domain::communication::{
            mailer::{errors::MailerError, SendReceipt},
            services::welcome_email::{errors::WelcomeEmailError, MockWelcomeEmailService},
        },
        infrastructure::http::{router, state::test_state},
    };

    use super::TestWelcomeEmailResponse;

    #[tokio::test]
    async fn test_test_welcome_email_success() -> TestResult {
        let mut welcome_emails = MockWelcomeEmailService::new();

        welcome_emails
            .expect_send_welcome_email()
            .times(1)
            .withf(|user_name, recipient| {
                user_name == "Test User" && recipient.to_string() == "test@example.com"
            })
            .returning(|_, _| {
                Ok(SendReceipt {
                    message_id: "250 2.0.0 OK".to_string(),
                })
            });

        let state = test_state(Some(welcome_emails));

        let response = TestServer::new(router(state))?
            .post("/test-welcome-email")
            .await;

        response.assert_status_ok();

        let json = response.json::<TestWelcomeEmailResponse>();

        assert!(json.success);
        assert_eq!(json.message, "Test welcome email sent");
        assert!(json.result.success);
        assert_eq!(json.result.message_id.as_deref(), Some("250 2.0.0 OK"));
        assert!(json.result.error.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_test_welcome_email_still_responds_200_on_dispatch_failure() -> TestResult {
        let mut welcome_emails = MockWelcomeEmailService::new();

        welcome_emails
            .expect_send_welcome_email()
            .times(1)
            .returning(|_, _| {
                Err(WelcomeEmailError::DispatchError(MailerError::UnknownError(
                    anyhow!("relay down"),
                )))
            });

        let state = test_state(Some(welcome_emails));

        let response = TestServer::new(router(state))?
            .post("/test-welcome-email")
            .await;

        response.assert_status_ok();

        let json = response.json::<TestWelcomeEmailResponse>();

        assert!(json.success);
        assert!(!json.result.success);
        assert_eq!(json.result.error.as_deref(), Some("relay down"));
        assert!(json.result.message_id.is_none());

        Ok(())
    }
}

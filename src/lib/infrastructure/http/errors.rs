//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::communication::{
    email_addresses::EmailAddressError, services::welcome_email::errors::WelcomeEmailError,
};

/// An error response
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    /// Always `false`; the happy-path bodies carry `success: true`
    pub success: bool,

    /// The error message
    pub error: String,
}

/// An error raised in the API
#[derive(Debug, Deserialize)]
pub struct ApiError {
    /// The status code
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    /// Create a new not found error
    pub fn new_404(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.to_string(),
        }
    }

    /// Create a new internal server error
    pub fn new_500(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                success: false,
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<EmailAddressError> for ApiError {
    fn from(err: EmailAddressError) -> Self {
        match err {
            EmailAddressError::EmptyEmailAddress | EmailAddressError::InvalidEmailAddress => {
                ApiError::new_400("Invalid email format")
            }
        }
    }
}

impl From<WelcomeEmailError> for ApiError {
    fn from(err: WelcomeEmailError) -> Self {
        match err {
            WelcomeEmailError::DispatchError(err) => ApiError::new_500(&err.to_string()),
            WelcomeEmailError::RenderError(err) => {
                error!("could not render welcome email: {err}");
                ApiError::new_500("Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use testresult::TestResult;

    use crate::domain::communication::{
        mailer::errors::MailerError, services::welcome_email::errors::WelcomeEmailError,
    };

    use super::ApiError;

    #[tokio::test]
    async fn test_error_response() -> TestResult {
        let error = ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        };

        let response = error.into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(body, r#"{"success":false,"error":"Internal server error"}"#);

        Ok(())
    }

    #[test]
    fn test_api_error_from_error() {
        let error = anyhow!("Internal server error");
        let api_error = ApiError::from(error);

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "Internal server error");
    }

    #[test]
    fn test_dispatch_error_surfaces_the_relay_message() {
        let error = WelcomeEmailError::DispatchError(MailerError::UnknownError(anyhow!(
            "relay down"
        )));

        let api_error = ApiError::from(error);

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "relay down");
    }

    #[test]
    fn test_render_error_stays_generic() {
        let error = WelcomeEmailError::RenderError(anyhow!("template exploded"));

        let api_error = ApiError::from(error);

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "Internal server error");
    }
}

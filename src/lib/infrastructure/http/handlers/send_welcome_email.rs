//! Send welcome email handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    domain::communication::{
        email_addresses::EmailAddress, services::welcome_email::WelcomeEmailService,
    },
    infrastructure::http::{errors::ApiError, extract::JsonOrForm, state::AppState},
};

/// Send welcome email request body
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendWelcomeEmailBody {
    /// The new user's name
    pub user_name: Option<String>,

    /// The new user's email address
    pub user_email: Option<String>,
}

/// Send welcome email response body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendWelcomeEmailResponse {
    /// Always `true` on this body; failures use the error shape
    pub success: bool,

    /// Human-readable confirmation
    pub message: String,

    /// The relay's identifier for the accepted message
    pub message_id: String,
}

/// Send a welcome email to a new user
pub async fn handler<W: WelcomeEmailService>(
    State(state): State<AppState<W>>,
    JsonOrForm(body): JsonOrForm<SendWelcomeEmailBody>,
) -> Result<Json<SendWelcomeEmailResponse>, ApiError> {
    let user_name = body.user_name.unwrap_or_default();
    let user_email = body.user_email.unwrap_or_default();

    if user_name.is_empty() || user_email.is_empty() {
        return Err(ApiError::new_400("userName and userEmail are required"));
    }

    let recipient = EmailAddress::new(&user_email)?;

    let receipt = state
        .welcome_emails
        .send_welcome_email(&user_name, &recipient)
        .await?;

    Ok(Json(SendWelcomeEmailResponse {
        success: true,
        message: "Welcome email sent successfully".to_string(),
        message_id: receipt.message_id,
    }))
}

//! API descriptor handler

use axum::Json;
use serde::{Deserialize, Serialize};

/// The endpoints advertised by the descriptor
#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointList {
    /// The send endpoint
    #[serde(rename = "POST /send-welcome-email")]
    pub send_welcome_email: String,

    /// The health endpoint
    #[serde(rename = "GET /health")]
    pub health: String,
}

/// The API descriptor response
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    /// The service name
    pub message: String,

    /// Available endpoints
    pub endpoints: EndpointList,
}

/// Describe the API
pub async fn handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome Email Sender API".to_string(),
        endpoints: EndpointList {
            send_welcome_email: "Send welcome email to a new user".to_string(),
            health: "Check API health".to_string(),
        },
    })
}

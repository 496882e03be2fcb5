//! API handler modules

use std::any::Any;

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use crate::domain::communication::services::welcome_email::WelcomeEmailService;

use super::{
    errors::{ApiError, ErrorResponse},
    state::AppState,
};

pub mod health;
pub mod index;
pub mod send_welcome_email;
pub mod test_welcome_email;

/// Create the route table
pub fn router<W: WelcomeEmailService>() -> Router<AppState<W>> {
    Router::new()
        .route("/", get(index::handler))
        .route("/health", get(health::handler))
        .route("/send-welcome-email", post(send_welcome_email::handler))
        .route("/test-welcome-email", post(test_welcome_email::handler))
        .fallback(not_found)
}

/// Reject unknown paths with a JSON 404
async fn not_found() -> ApiError {
    ApiError::new_404("Endpoint not found")
}

/// Catch panics and return a 500 error
pub fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    error!("panic while handling a request: {details}");

    let error = ErrorResponse {
        success: false,
        error: "Something went wrong!".to_string(),
    };

    let response = Json(error).into_response();

    (StatusCode::INTERNAL_SERVER_ERROR, response).into_response()
}

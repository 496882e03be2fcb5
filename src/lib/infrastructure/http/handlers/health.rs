//! Health check handler

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"OK"` while the process is serving
    pub status: String,

    /// The time the check ran
    pub timestamp: DateTime<Utc>,
}

/// Report service health
pub async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
    })
}

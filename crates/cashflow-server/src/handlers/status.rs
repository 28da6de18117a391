//! Service status handler

use axum::Json;
use serde::Serialize;

/// Status message body
#[derive(Serialize)]
pub struct StatusResponse {
    pub message: String,
}

/// GET / - Service liveness message
pub async fn get_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Cash Flow Report API is running".to_string(),
    })
}

//! Chat handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{error, info};

use crate::{AppError, AppState};
use cashflow_core::{ChatBackend, ChatQuery};

/// Chat response body
#[derive(Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// POST /api/chat - Answer a free-text question about a report period
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(query): Json<ChatQuery>,
) -> Result<Json<ChatResponse>, AppError> {
    info!(
        report_type = %query.report_type,
        year = query.year,
        month = query.month,
        "Processing chat request"
    );

    let message = state.chat.respond(&query).await.map_err(|e| {
        error!(
            error = %e,
            report_type = %query.report_type,
            year = query.year,
            month = query.month,
            "Error in chat"
        );
        AppError::internal(&e.to_string())
    })?;

    Ok(Json(ChatResponse { message }))
}

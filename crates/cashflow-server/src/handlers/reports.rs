//! Report handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{error, info};

use crate::{AppError, AppState};
use cashflow_core::{RecordStore, ReportQuery, Transaction};

/// Report response envelope
#[derive(Serialize)]
pub struct ReportResponse {
    pub data: Vec<Transaction>,
}

/// POST /api/reports - Fetch transactions for a report period
///
/// An empty record list is a valid outcome and returns 200, not an error.
/// Out-of-range months are not validated here; they surface as a server
/// error from the store.
pub async fn generate_report(
    State(state): State<Arc<AppState>>,
    Json(query): Json<ReportQuery>,
) -> Result<Json<ReportResponse>, AppError> {
    info!(
        report_type = %query.report_type,
        year = query.year,
        month = query.month,
        "Generating report"
    );

    let data = state
        .provider
        .query(&query.report_type, query.year, query.month)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                report_type = %query.report_type,
                year = query.year,
                month = query.month,
                "Error generating report"
            );
            AppError::internal(&e.to_string())
        })?;

    Ok(Json(ReportResponse { data }))
}

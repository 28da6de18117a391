//! Wire-level data model
//!
//! These types cross the HTTP boundary, so field names follow the JSON
//! contract (camelCase) rather than Rust convention.

use serde::{Deserialize, Serialize};

/// A single cash flow transaction
///
/// Synthesized per request by the mock store or fetched from the remote
/// store; never persisted or mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Opaque unique identifier (UUID v4)
    pub id: String,
    /// 6-digit numeric account string
    pub account_number: String,
    pub description: String,
    /// Signed amount, rounded to 2 decimal places
    pub amount: f64,
    /// ISO-8601 timestamp string (`YYYY-MM-DDTHH:MM:SS`)
    pub date: String,
    pub category: String,
}

/// Identifies which transactions to fetch
///
/// `report_type` is an open label set, not a closed enum: unrecognized
/// values degrade to general-ledger behavior instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub report_type: String,
    pub year: i32,
    pub month: u32,
}

/// A free-text question with report context
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatQuery {
    pub message: String,
    pub report_type: String,
    pub year: i32,
    pub month: u32,
}

//! Canned chat replies for local development
//!
//! Keyword-matches the user message against a small set of templates so the
//! chat endpoint can be exercised without a hosted model. The figures are
//! placeholders, parameterized only by report type and period.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ChatQuery;

use super::ChatBackend;

/// Select a canned reply for a message about a report period
///
/// Case-insensitive substring match, first match wins: summary, then
/// largest, then compare, then a generic acknowledgment. Deterministic
/// for identical inputs.
pub fn select_reply(message: &str, report_type: &str, year: i32, month: u32) -> String {
    let message = message.to_lowercase();

    if message.contains("summary") {
        format!(
            "The {} cash flow for {}/{} shows a total inflow of $245,678.90 and \
             outflow of $198,456.78, resulting in a net positive flow of $47,222.12.",
            report_type, month, year
        )
    } else if message.contains("largest") {
        format!(
            "The largest transaction in the {} report for {}/{} was $34,500.00 \
             for equipment purchase on {}/15/{}.",
            report_type, month, year, month, year
        )
    } else if message.contains("compare") {
        format!(
            "Compared to the previous month, the {} cash flow for {}/{} shows a 12% \
             increase in total volume and a 5% increase in net position.",
            report_type, month, year
        )
    } else {
        format!(
            "I've analyzed the {} cash flow data for {}/{}. The data shows healthy \
             financial activity with balanced inflows and outflows. Is there something \
             specific you'd like to know about this period?",
            report_type, month, year
        )
    }
}

/// Canned chat backend
#[derive(Debug, Clone, Default)]
pub struct CannedBackend;

impl CannedBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatBackend for CannedBackend {
    async fn respond(&self, query: &ChatQuery) -> Result<String> {
        Ok(select_reply(
            &query.message,
            &query.report_type,
            query.year,
            query.month,
        ))
    }

    fn model(&self) -> &str {
        "canned"
    }
}

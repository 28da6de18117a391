//! Remote document-store gateway
//!
//! Thin pass-through to the production transaction store. The store itself
//! (query language, partitioning, retention) lives behind an HTTP gateway;
//! this client only shapes the request and unwraps the response envelope.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Transaction;

use super::RecordStore;

/// Client for the remote transaction store
#[derive(Debug)]
pub struct RemoteStore {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl Clone for RemoteStore {
    fn clone(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreQuery<'a> {
    report_type: &'a str,
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct StoreResponse {
    data: Vec<Transaction>,
}

impl RemoteStore {
    /// Create a client against a store gateway base URL
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl RecordStore for RemoteStore {
    async fn query(&self, report_type: &str, year: i32, month: u32) -> Result<Vec<Transaction>> {
        debug!(report_type, year, month, "Querying remote store");

        let mut req_builder = self
            .http_client
            .post(format!("{}/query", self.base_url))
            .json(&StoreQuery {
                report_type,
                year,
                month,
            });

        if let Some(ref api_key) = self.api_key {
            req_builder = req_builder.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req_builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Store(format!(
                "Store gateway error {}: {}",
                status, body
            )));
        }

        // No matches is a valid outcome: callers get an empty list, not an error.
        let store_response: StoreResponse = response.json().await?;
        Ok(store_response.data)
    }

    fn describe(&self) -> &str {
        &self.base_url
    }
}

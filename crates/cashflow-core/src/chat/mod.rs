//! Pluggable chat backend abstraction
//!
//! This module provides a backend-agnostic interface for answering
//! free-text questions about report data.
//!
//! # Architecture
//!
//! - `ChatBackend` trait: defines the respond interface
//! - `ChatClient` enum: concrete wrapper providing Clone + compile-time
//!   dispatch
//! - Backend implementations: `CannedBackend` (local development),
//!   `OpenAiBackend` (hosted model)
//!
//! The backend is selected once at startup from the deployment mode.

mod canned;
mod openai;

pub use canned::{select_reply, CannedBackend};
pub use openai::OpenAiBackend;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ChatQuery;

/// System context handed to the model alongside the user message
pub fn report_context(report_type: &str, year: i32, month: u32) -> String {
    format!(
        "You are an AI assistant analyzing cash flow data for {} report from {}-{}. \
         Provide clear, concise financial insights.",
        report_type, year, month
    )
}

/// Trait defining the interface for chat backends
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Produce a text reply for a chat query
    async fn respond(&self, query: &ChatQuery) -> Result<String>;

    /// Get the model name (for logging)
    fn model(&self) -> &str;
}

/// Concrete chat client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Debug, Clone)]
pub enum ChatClient {
    /// Canned keyword-matched replies for local development
    Canned(CannedBackend),
    /// Hosted model over the chat completions API
    OpenAi(OpenAiBackend),
}

impl ChatClient {
    /// Create a canned-reply client
    pub fn canned() -> Self {
        ChatClient::Canned(CannedBackend::new())
    }

    /// Create a hosted-model client
    pub fn openai(api_key: &str) -> Self {
        ChatClient::OpenAi(OpenAiBackend::new(api_key))
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn respond(&self, query: &ChatQuery) -> Result<String> {
        match self {
            ChatClient::Canned(b) => b.respond(query).await,
            ChatClient::OpenAi(b) => b.respond(query).await,
        }
    }

    fn model(&self) -> &str {
        match self {
            ChatClient::Canned(b) => b.model(),
            ChatClient::OpenAi(b) => b.model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_context_embeds_query() {
        let context = report_context("AP", 2024, 2);
        assert!(context.contains("AP report from 2024-2"));
    }

    #[tokio::test]
    async fn test_client_dispatches_to_canned() {
        let client = ChatClient::canned();
        assert_eq!(client.model(), "canned");

        let query = ChatQuery {
            message: "hello".to_string(),
            report_type: "GL".to_string(),
            year: 2024,
            month: 3,
        };
        let reply = client.respond(&query).await.unwrap();
        assert!(!reply.is_empty());
    }
}

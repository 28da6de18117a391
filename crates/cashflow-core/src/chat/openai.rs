//! Hosted model backend over the OpenAI chat completions API
//!
//! # Configuration
//!
//! The API key is resolved through the secret store at startup
//! (`OPENAI_API_KEY`), never read per request.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::ChatQuery;

use super::{report_context, ChatBackend};

const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const MAX_TOKENS: u32 = 500;

/// Hosted model client
#[derive(Debug)]
pub struct OpenAiBackend {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl Clone for OpenAiBackend {
    fn clone(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiBackend {
    /// Create a client against the default API host
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against a custom host (proxies, tests)
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Make a chat completion request
    ///
    /// This is the collaborator boundary: a system context plus the user
    /// message in, synthesized text out.
    pub async fn complete(&self, system_context: &str, user_message: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_context.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_message.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
        };

        debug!(model = %self.model, "Requesting chat completion");

        let response = self
            .http_client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Model(format!("Model API error {}: {}", status, body)));
        }

        let chat_response: ChatCompletionResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Model("Model returned no choices".to_string()))
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn respond(&self, query: &ChatQuery) -> Result<String> {
        let context = report_context(&query.report_type, query.year, query.month);
        self.complete(&context, &query.message).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}

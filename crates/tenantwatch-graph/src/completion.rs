//! Azure OpenAI chat-completion client

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use tenantwatch_common::CompletionConfig;
use tenantwatch_core::{CompletionClient, CoreResult, DomainError};

use crate::error::GraphError;

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Chat-completion client for the configured Azure OpenAI deployment.
pub struct HttpCompletionClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpCompletionClient {
    #[must_use]
    pub fn new(config: &CompletionConfig) -> Self {
        let endpoint = config.endpoint.trim_end_matches('/');
        Self {
            http: reqwest::Client::new(),
            url: format!(
                "{endpoint}/openai/deployments/{}/chat/completions?api-version={}",
                config.deployment, config.api_version
            ),
            api_key: config.api_key.clone(),
        }
    }

    async fn send_prompt(&self, prompt: &str) -> Result<String, GraphError> {
        debug!(chars = prompt.len(), "sending completion request");
        let response = self
            .http
            .post(&self.url)
            .header("api-key", &self.api_key)
            .json(&json!({
                "messages": [{"role": "user", "content": prompt}],
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| GraphError::Decode(e.to_string()))?;
        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GraphError::Decode("response contained no choices".to_string()))
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, prompt: &str) -> CoreResult<String> {
        self.send_prompt(prompt)
            .await
            .map_err(|e| DomainError::CompletionError(e.to_string()))
    }
}

use crate::domain::model::{ChatRequest, ChatResponse};
use crate::domain::ports::{CompletionClient, ConfigProvider};
use crate::utils::error::{PromptError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

/// OpenAI 相容的 `/chat/completions` 客戶端（方舟 Ark 預設端點）
pub struct ArkClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ArkClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url().trim_end_matches('/')),
            api_key: config.api_key().map(str::to_string),
            timeout: config.timeout(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| body.to_string())
    }
}

impl fmt::Debug for ArkClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArkClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl CompletionClient for ArkClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        tracing::debug!(
            "Sending completion request to {} (model: {}, thinking: {}, timeout: {:?})",
            self.endpoint,
            request.model,
            request.thinking.kind,
            self.timeout
        );

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("Completion API response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(PromptError::ApiStatusError {
                status: status.as_u16(),
                message: Self::error_message(&body),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        if let Some(usage) = parsed.usage {
            tracing::info!(
                "🧮 Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }
        Ok(parsed)
    }
}

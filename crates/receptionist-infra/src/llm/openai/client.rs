//! OpenAiProvider -- concrete [`LlmProvider`] implementation for the
//! OpenAI Chat Completions API.
//!
//! Follows the same shape as `AnthropicProvider`: a non-streaming POST
//! with the API key held in [`secrecy::SecretString`], never logged and
//! never in Debug output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use receptionist_core::llm::provider::LlmProvider;
use receptionist_types::chat::MessageRole;
use receptionist_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use super::types::{OpenAiMessage, OpenAiRequest, OpenAiResponse};

/// OpenAI Chat Completions provider.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider.
    ///
    /// `timeout` bounds the whole completion call; a timed-out request
    /// surfaces as a provider error.
    pub fn new(api_key: SecretString, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into an [`OpenAiRequest`].
    ///
    /// The system block becomes the leading `system` message; the domain
    /// `bot` role becomes `assistant`.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAiRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = &request.system {
            messages.push(OpenAiMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        for m in &request.messages {
            messages.push(OpenAiMessage {
                role: match m.role {
                    MessageRole::User => "user".to_string(),
                    MessageRole::Bot => "assistant".to_string(),
                },
                content: m.content.clone(),
            });
        }

        OpenAiRequest {
            model: request.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

// OpenAiProvider intentionally does NOT derive Debug to prevent
// accidental exposure of internal state.

impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_openai_request(request);
        let url = self.url("/v1/chat/completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited {
                    retry_after_ms: None,
                },
                503 => LlmError::Overloaded(error_body),
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let openai_resp: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let content = openai_resp
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| {
                LlmError::Deserialization("response contained no completion choices".to_string())
            })?;

        Ok(CompletionResponse {
            id: openai_resp.id,
            content,
            model: openai_resp.model,
            usage: Usage {
                input_tokens: openai_resp.usage.prompt_tokens,
                output_tokens: openai_resp.usage.completion_tokens,
            },
        })
    }
}

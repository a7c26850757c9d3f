//! AI provider clients.
//!
//! Concrete [`LlmProvider`] implementations for the Anthropic Messages
//! API and the OpenAI Chat Completions API, plus the dispatch enum the
//! application wires in based on configuration.

pub mod anthropic;
pub mod openai;

use receptionist_core::llm::provider::LlmProvider;
use receptionist_types::config::{AppConfig, ProviderKind};
use receptionist_types::llm::{CompletionRequest, CompletionResponse, LlmError};
use tracing::warn;

use std::time::Duration;

use anthropic::AnthropicProvider;
use openai::OpenAiProvider;

/// The provider selected by configuration, as one concrete type.
///
/// `Unconfigured` stands in when the selected provider's API key is
/// missing from the environment: every call fails with an authentication
/// error without touching the network, and the chat layer reports the
/// turn as unanswered.
pub enum ShopLlmProvider {
    Anthropic(AnthropicProvider),
    OpenAi(OpenAiProvider),
    Unconfigured,
}

impl LlmProvider for ShopLlmProvider {
    fn name(&self) -> &str {
        match self {
            ShopLlmProvider::Anthropic(p) => p.name(),
            ShopLlmProvider::OpenAi(p) => p.name(),
            ShopLlmProvider::Unconfigured => "unconfigured",
        }
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        match self {
            ShopLlmProvider::Anthropic(p) => p.complete(request).await,
            ShopLlmProvider::OpenAi(p) => p.complete(request).await,
            ShopLlmProvider::Unconfigured => Err(LlmError::AuthenticationFailed),
        }
    }
}

/// Build the provider named by the configuration, resolving its API key
/// from the environment.
pub fn build_provider(config: &AppConfig) -> ShopLlmProvider {
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let Some(api_key) = crate::secret::provider_api_key(config.provider) else {
        warn!(
            provider = %config.provider,
            env_var = config.provider.api_key_var(),
            "API key not set; chat turns will go unanswered until it is configured"
        );
        return ShopLlmProvider::Unconfigured;
    };

    match config.provider {
        ProviderKind::Anthropic => {
            ShopLlmProvider::Anthropic(AnthropicProvider::new(api_key, timeout))
        }
        ProviderKind::OpenAi => ShopLlmProvider::OpenAi(OpenAiProvider::new(api_key, timeout)),
    }
}

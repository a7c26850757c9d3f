//! LlmProvider trait definition.
//!
//! This is the abstraction the chat session manager talks to. One
//! synchronous request/response call per chat turn; no streaming. The
//! call is bounded by the provider's HTTP client timeout, and a timeout
//! surfaces as an ordinary provider error.

use receptionist_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for AI provider backends (Anthropic, OpenAI).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in receptionist-infra.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "anthropic", "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}

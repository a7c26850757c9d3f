//! Application configuration types for Super Receptionist.
//!
//! `AppConfig` represents the top-level `config.toml` that selects the AI
//! provider and its generation parameters. API keys never live here; they
//! are resolved from environment variables at startup.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Which AI provider backend answers chat messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Anthropic,
    OpenAi,
}

impl ProviderKind {
    /// The environment variable holding this provider's API key.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
        }
    }

    /// The model used when `config.toml` does not name one.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "claude-sonnet-4-20250514",
            ProviderKind::OpenAi => "gpt-4o-mini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Anthropic => write!(f, "anthropic"),
            ProviderKind::OpenAi => write!(f, "openai"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(ProviderKind::Anthropic),
            "openai" => Ok(ProviderKind::OpenAi),
            other => Err(format!("invalid provider kind: '{other}'")),
        }
    }
}

/// Top-level configuration, loaded from `{data_dir}/config.toml`.
///
/// All fields have sensible defaults so the server starts with no config
/// file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// AI provider backend.
    #[serde(default = "default_provider")]
    pub provider: ProviderKind,

    /// Model identifier; falls back to the provider's default when absent.
    #[serde(default)]
    pub model: Option<String>,

    /// Upper bound on generated tokens per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature passed to the provider.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// AI call timeout. A timed-out call counts as a provider failure.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_provider() -> ProviderKind {
    ProviderKind::Anthropic
}

fn default_max_tokens() -> u32 {
    1_000
}

fn default_temperature() -> f64 {
    0.7
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// The model to use: configured name or the provider default.
    pub fn resolved_model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.provider.default_model().to_string())
    }
}

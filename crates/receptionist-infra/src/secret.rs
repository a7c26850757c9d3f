//! Environment-based API key resolution.
//!
//! API keys never live in `config.toml`; they are read from the
//! provider's environment variable at startup and wrapped in
//! [`SecretString`] so they cannot leak through Debug output or logs.

use receptionist_types::config::ProviderKind;
use secrecy::SecretString;

/// Resolve the API key for a provider from its environment variable
/// (`ANTHROPIC_API_KEY` or `OPENAI_API_KEY`).
///
/// Returns None when the variable is unset or empty.
pub fn provider_api_key(provider: ProviderKind) -> Option<SecretString> {
    match std::env::var(provider.api_key_var()) {
        Ok(value) if !value.trim().is_empty() => Some(SecretString::from(value)),
        _ => None,
    }
}

//! OpenAI Chat Completions API provider.

mod client;
mod types;

pub use client::OpenAiProvider;

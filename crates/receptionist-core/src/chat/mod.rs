//! Chat conversation persistence and orchestration.
//!
//! `repository` defines the conversation store port, `service` implements
//! the chat session manager on top of it, `locks` provides the
//! per-conversation write serialization, and `prompt` assembles the AI
//! request from shop configuration and history.

pub mod locks;
pub mod prompt;
pub mod repository;
pub mod service;

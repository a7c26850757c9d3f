//! Shared domain types for Super Receptionist.
//!
//! This crate contains the core domain types used across the backend:
//! chat messages and conversations, shop configuration records, AI provider
//! request/response shapes, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod shop;

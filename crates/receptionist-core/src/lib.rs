//! Business logic and repository trait definitions for Super Receptionist.
//!
//! This crate defines the "ports" (repository traits) that the
//! infrastructure layer implements. It depends only on
//! `receptionist-types` -- never on `receptionist-infra` or any
//! database/IO crate.

pub mod chat;
pub mod llm;
pub mod shop;

//! Shop configuration persistence abstractions.
//!
//! Repository ports for the menu, the cake design catalog, and the
//! free-form settings documents, plus the service that exposes them to
//! the HTTP layer and assembles the AI prompt context.

pub mod repository;
pub mod service;

//! Shop configuration repository traits.
//!
//! Menu and cake designs use replace-all semantics: the training UI
//! always submits the complete list, so an update is delete-everything
//! plus insert. Settings are a small key-to-JSON-document store.
//! Implementations live in receptionist-infra.

use receptionist_types::error::RepositoryError;
use receptionist_types::shop::{CakeDesign, MenuItem};

/// Repository trait for the shop menu.
pub trait MenuRepository: Send + Sync {
    /// All menu items in their stored order.
    fn all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<MenuItem>, RepositoryError>> + Send;

    /// Replace the entire menu in one transaction.
    fn replace_all(
        &self,
        items: &[MenuItem],
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}

/// Repository trait for the cake design catalog.
pub trait DesignRepository: Send + Sync {
    /// All designs in their stored order, images re-encoded as data URLs.
    fn all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<CakeDesign>, RepositoryError>> + Send;

    /// Replace the entire catalog in one transaction.
    fn replace_all(
        &self,
        designs: &[CakeDesign],
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}

/// Trait for key-to-JSON-document settings storage.
pub trait SettingsStore: Send + Sync {
    /// Get a settings document. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>, RepositoryError>> + Send;

    /// Set a settings document (upsert).
    fn set(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}

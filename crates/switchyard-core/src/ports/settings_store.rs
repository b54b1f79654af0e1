//! Settings store trait definition.
//!
//! This port defines the interface for settings persistence. The core does
//! not specify the storage format; implementations handle serialization
//! internally.

use async_trait::async_trait;
use thiserror::Error;

use crate::settings::DirectorySettings;

/// Settings persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend error (filesystem, database, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Repository for directory-override settings.
///
/// Every successful mutation in the settings service reaches `save`, so
/// settings survive restart.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the persisted settings.
    ///
    /// Returns default settings if none are stored.
    async fn load(&self) -> Result<DirectorySettings, StoreError>;

    /// Persist the settings document.
    async fn save(&self, settings: &DirectorySettings) -> Result<(), StoreError>;
}

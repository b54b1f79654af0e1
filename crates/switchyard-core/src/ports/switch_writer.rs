//! Provider-switch writer trait definition.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ProviderProfile;

/// A single directory's live-file application failed.
#[derive(Debug, Error)]
pub enum SwitchWriteError {
    /// The target config directory could not be created.
    #[error("Failed to create config directory {dir}: {reason}")]
    CreateDir { dir: PathBuf, reason: String },

    /// A file inside the directory could not be written.
    #[error("Failed to write {file} in {dir}: {reason}")]
    WriteFailed {
        dir: PathBuf,
        file: String,
        reason: String,
    },

    /// A file's content could not be rendered to bytes.
    #[error("Failed to render {file}: {reason}")]
    RenderFailed { file: String, reason: String },
}

/// Port for applying a provider profile to one config directory.
///
/// One directory per call, atomically-as-a-unit inside that directory: if a
/// later file fails, files already replaced there are rolled back (previous
/// bytes restored, or removed if they did not exist). Cross-directory
/// consistency is the switch service's concern.
#[async_trait]
pub trait ProviderSwitchWriter: Send + Sync {
    /// Write the profile's files into `dir`, creating it on demand.
    async fn apply(&self, dir: &Path, profile: &ProviderProfile) -> Result<(), SwitchWriteError>;
}

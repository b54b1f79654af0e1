//! JSON-file implementation of the `SettingsStore` trait.
//!
//! The document is the flat camelCase form `DirectorySettings` serializes
//! to (`enableConfigDirOverrides`, `claudeConfigDir`, ...), so files written
//! by earlier releases of the host app load unchanged.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use switchyard_core::{DirectorySettings, SettingsStore, StoreError};

/// Stores settings as a single pretty-printed JSON document.
///
/// Loading a missing file yields defaults; loading a corrupt file warns and
/// yields defaults, and the corrupt file is only overwritten on the next
/// successful save. Saves replace the document atomically (temp file +
/// rename) and create the parent directory on demand.
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The document location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "settings.json".into(), |n| n.to_string_lossy().into_owned());
        let tmp = self.path.with_file_name(format!("{file_name}.tmp"));
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &self.path).await
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn load(&self) -> Result<DirectorySettings, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(DirectorySettings::default());
            }
            Err(err) => return Err(StoreError::Storage(err.to_string())),
        };

        match serde_json::from_str(&content) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    %err,
                    "settings file is corrupt; using defaults"
                );
                Ok(DirectorySettings::default())
            }
        }
    }

    async fn save(&self, settings: &DirectorySettings) -> Result<(), StoreError> {
        let mut json = serde_json::to_string_pretty(settings)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        json.push('\n');
        self.write_atomic(json.as_bytes())
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}

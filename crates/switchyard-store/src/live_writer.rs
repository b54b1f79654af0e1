//! Filesystem implementation of the `ProviderSwitchWriter` trait.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use switchyard_core::{ProviderProfile, ProviderSwitchWriter, SwitchWriteError};

/// Writes a profile's live files into one config directory.
///
/// The directory is created on demand. Writes are two-phase per directory:
/// before each file is replaced its previous bytes are snapshotted, and a
/// failure on a later file restores every file already replaced (or removes
/// ones that did not exist), so a directory never ends up with half a
/// profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProviderSwitchWriter;

impl FsProviderSwitchWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProviderSwitchWriter for FsProviderSwitchWriter {
    async fn apply(&self, dir: &Path, profile: &ProviderProfile) -> Result<(), SwitchWriteError> {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| SwitchWriteError::CreateDir {
                dir: dir.to_path_buf(),
                reason: e.to_string(),
            })?;

        // (path, previous bytes) for everything replaced so far.
        let mut written: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::new();

        for file in &profile.files {
            let path = dir.join(&file.name);

            let previous = match fs::read(&path).await {
                Ok(bytes) => Some(bytes),
                Err(err) if err.kind() == io::ErrorKind::NotFound => None,
                Err(err) => {
                    rollback(&written).await;
                    return Err(SwitchWriteError::WriteFailed {
                        dir: dir.to_path_buf(),
                        file: file.name.clone(),
                        reason: format!("cannot snapshot existing file: {err}"),
                    });
                }
            };

            let bytes = match file.content.render() {
                Ok(bytes) => bytes,
                Err(err) => {
                    rollback(&written).await;
                    return Err(SwitchWriteError::RenderFailed {
                        file: file.name.clone(),
                        reason: err.to_string(),
                    });
                }
            };

            if let Err(err) = fs::write(&path, &bytes).await {
                rollback(&written).await;
                return Err(SwitchWriteError::WriteFailed {
                    dir: dir.to_path_buf(),
                    file: file.name.clone(),
                    reason: err.to_string(),
                });
            }
            written.push((path, previous));
        }

        Ok(())
    }
}

/// Best-effort restore of already-replaced files, newest first.
async fn rollback(written: &[(PathBuf, Option<Vec<u8>>)]) {
    for (path, previous) in written.iter().rev() {
        let result = match previous {
            Some(bytes) => fs::write(path, bytes).await,
            None => fs::remove_file(path).await,
        };
        if let Err(err) = result {
            warn!(path = %path.display(), %err, "rollback of live file failed");
        }
    }
}

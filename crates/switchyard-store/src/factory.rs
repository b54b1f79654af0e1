//! Composition utilities for building `AppCore` with filesystem backends.
//!
//! This module is focused purely on construction and contains no domain
//! logic. `anyhow` is used here, at the composition seam, and nowhere else.

use std::path::PathBuf;
use std::sync::Arc;

use switchyard_core::{
    AppCore, DirectoryPicker, PlatformDirectoryProvider, Ports, SettingsEventEmitter,
    default_host_config_dir,
};

use crate::live_writer::FsProviderSwitchWriter;
use crate::settings_file::JsonFileSettingsStore;

/// Default location of the settings document: `settings.json` under the
/// host app's config directory.
#[must_use]
pub fn default_settings_path() -> PathBuf {
    default_host_config_dir().join("settings.json")
}

/// Open the settings store at its default location.
#[must_use]
pub fn open_default_store() -> JsonFileSettingsStore {
    JsonFileSettingsStore::new(default_settings_path())
}

/// Build a fully composed `AppCore` over the filesystem adapters.
///
/// The picker and emitter stay caller-supplied: they belong to the shell
/// (native dialog, event transport), not to this crate.
pub async fn build_app_core(
    picker: Arc<dyn DirectoryPicker>,
    emitter: Arc<dyn SettingsEventEmitter>,
) -> anyhow::Result<AppCore> {
    let core = AppCore::load(Ports {
        store: Arc::new(open_default_store()),
        provider: Arc::new(PlatformDirectoryProvider::new()),
        picker,
        emitter,
        writer: Arc::new(FsProviderSwitchWriter::new()),
    })
    .await?;
    Ok(core)
}

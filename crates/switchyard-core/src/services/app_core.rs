//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (desktop shell,
//! CLI, tests) receive an `AppCore` instance built from concrete port
//! implementations and use it to access all functionality.

use std::sync::Arc;

use crate::domain::{AppId, ProviderProfile};
use crate::ports::{
    CoreError, DirectoryPicker, ProviderSwitchWriter, ResolvedDirectoryProvider,
    SettingsEventEmitter, SettingsStore,
};
use crate::sync::SyncPropagationPolicy;

use super::{
    DirectoryActionDispatcher, DirectorySettingsService, ProviderSwitchService, SwitchError,
    SwitchReport,
};

/// Port implementations `AppCore` is composed from.
pub struct Ports {
    pub store: Arc<dyn SettingsStore>,
    pub provider: Arc<dyn ResolvedDirectoryProvider>,
    pub picker: Arc<dyn DirectoryPicker>,
    pub emitter: Arc<dyn SettingsEventEmitter>,
    pub writer: Arc<dyn ProviderSwitchWriter>,
}

/// The core application facade.
pub struct AppCore {
    settings: DirectorySettingsService,
    dispatcher: DirectoryActionDispatcher,
    switcher: ProviderSwitchService,
    provider: Arc<dyn ResolvedDirectoryProvider>,
}

impl AppCore {
    /// Load persisted settings and compose the services.
    pub async fn load(ports: Ports) -> Result<Self, CoreError> {
        Self::load_with_policy(ports, SyncPropagationPolicy::default()).await
    }

    /// Load with an externally configured sync fan-out policy.
    pub async fn load_with_policy(
        ports: Ports,
        policy: SyncPropagationPolicy,
    ) -> Result<Self, CoreError> {
        let settings = DirectorySettingsService::load(
            ports.store,
            Arc::clone(&ports.provider),
            ports.emitter,
        )
        .await?;
        Ok(Self {
            settings,
            dispatcher: DirectoryActionDispatcher::new(
                ports.picker,
                Arc::clone(&ports.provider),
            ),
            switcher: ProviderSwitchService::with_policy(ports.writer, policy),
            provider: ports.provider,
        })
    }

    /// Access the settings service.
    #[must_use]
    pub const fn settings(&self) -> &DirectorySettingsService {
        &self.settings
    }

    /// Mutable access to the settings service (mutation entry points).
    pub const fn settings_mut(&mut self) -> &mut DirectorySettingsService {
        &mut self.settings
    }

    /// Access the directory-action dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &DirectoryActionDispatcher {
        &self.dispatcher
    }

    /// Access the provider-switch service.
    #[must_use]
    pub const fn switcher(&self) -> &ProviderSwitchService {
        &self.switcher
    }

    /// Apply a provider switch for `app` against the current settings and
    /// resolved defaults.
    pub async fn switch_provider(
        &self,
        app: AppId,
        profile: &ProviderProfile,
    ) -> Result<SwitchReport, SwitchError> {
        let resolved = self.provider.resolved_directories();
        self.switcher
            .switch_provider(self.settings.settings(), &resolved, app, profile)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LiveFile, PerApp, ResolvedDirectories};
    use crate::ports::{
        BrowseError, FixedDirectoryProvider, NoopSettingsEmitter, StoreError, SwitchWriteError,
    };
    use crate::settings::DirectorySettings;
    use async_trait::async_trait;
    use serde_json::json;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    struct MemoryStore(Mutex<DirectorySettings>);

    #[async_trait]
    impl SettingsStore for MemoryStore {
        async fn load(&self) -> Result<DirectorySettings, StoreError> {
            Ok(self.0.lock().unwrap().clone())
        }
        async fn save(&self, settings: &DirectorySettings) -> Result<(), StoreError> {
            *self.0.lock().unwrap() = settings.clone();
            Ok(())
        }
    }

    struct ScriptedPicker(Mutex<Vec<Result<Option<String>, BrowseError>>>);

    #[async_trait]
    impl DirectoryPicker for ScriptedPicker {
        async fn pick_directory(&self) -> Result<Option<String>, BrowseError> {
            self.0.lock().unwrap().remove(0)
        }
    }

    struct MemoryWriter(Mutex<Vec<PathBuf>>);

    #[async_trait]
    impl ProviderSwitchWriter for MemoryWriter {
        async fn apply(
            &self,
            dir: &Path,
            _profile: &ProviderProfile,
        ) -> Result<(), SwitchWriteError> {
            self.0.lock().unwrap().push(dir.to_path_buf());
            Ok(())
        }
    }

    fn ports(picker_script: Vec<Result<Option<String>, BrowseError>>) -> (Ports, Arc<MemoryWriter>) {
        let writer = Arc::new(MemoryWriter(Mutex::new(Vec::new())));
        let ports = Ports {
            store: Arc::new(MemoryStore(Mutex::new(DirectorySettings::default()))),
            provider: Arc::new(FixedDirectoryProvider::new(ResolvedDirectories {
                host_config: "/home/u/.switchyard".into(),
                apps: PerApp::from_fn(|app| format!("/home/u/.{app}")),
            })),
            picker: Arc::new(ScriptedPicker(Mutex::new(picker_script))),
            emitter: Arc::new(NoopSettingsEmitter::new()),
            writer: Arc::clone(&writer) as Arc<dyn ProviderSwitchWriter>,
        };
        (ports, writer)
    }

    #[tokio::test]
    async fn browse_result_feeds_the_override() {
        let (ports, _) = ports(vec![Ok(Some("/picked/dir".into()))]);
        let mut core = AppCore::load(ports).await.unwrap();

        if let Some(path) = core.dispatcher().browse().await.unwrap() {
            core.settings_mut()
                .set_app_override(AppId::Gemini, Some(path))
                .await
                .unwrap();
        }

        assert_eq!(
            core.settings().settings().stored_override(AppId::Gemini),
            Some("/picked/dir")
        );
    }

    #[tokio::test]
    async fn cancelled_browse_mutates_nothing() {
        let (ports, _) = ports(vec![Ok(None)]);
        let mut core = AppCore::load(ports).await.unwrap();
        core.settings_mut()
            .set_app_override(AppId::Gemini, Some("/before".into()))
            .await
            .unwrap();

        if let Some(path) = core.dispatcher().browse().await.unwrap() {
            core.settings_mut()
                .set_app_override(AppId::Gemini, Some(path))
                .await
                .unwrap();
        }

        assert_eq!(
            core.settings().settings().stored_override(AppId::Gemini),
            Some("/before")
        );
    }

    #[tokio::test]
    async fn switch_uses_current_settings_and_defaults() {
        let (ports, writer) = ports(vec![]);
        let mut core = AppCore::load(ports).await.unwrap();
        core.settings_mut()
            .set_app_override(AppId::Codex, Some("/wsl/.codex".into()))
            .await
            .unwrap();
        core.settings_mut()
            .set_sync_to_both_config_dirs(true)
            .await
            .unwrap();

        let profile = ProviderProfile::new(vec![LiveFile::json("auth.json", json!({}))]);
        let report = core.switch_provider(AppId::Codex, &profile).await.unwrap();

        assert_eq!(report.succeeded.len(), 2);
        assert_eq!(
            *writer.0.lock().unwrap(),
            vec![PathBuf::from("/wsl/.codex"), PathBuf::from("/home/u/.codex")]
        );
    }
}

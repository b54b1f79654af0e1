//! Settings service - orchestrates directory-override mutations.
//!
//! Every mutation entry point follows the same persist-then-commit order:
//! the working copy is saved through the store port first, and only a
//! successful save commits it in memory and emits the matching event. A
//! rejected save leaves memory and disk consistent.

use std::sync::Arc;

use tracing::debug;

use crate::domain::AppId;
use crate::events::SettingsEvent;
use crate::ports::{CoreError, ResolvedDirectoryProvider, SettingsEventEmitter, SettingsStore};
use crate::resolve::{EffectiveDirectories, OverrideGate, effective_path};
use crate::settings::{DirectorySettings, DirectorySettingsUpdate};

/// Service for directory-override settings.
///
/// Holds the single in-memory settings value for the panel's lifetime.
/// Mutations take `&mut self`: there is exactly one writer, the host event
/// loop.
pub struct DirectorySettingsService {
    state: DirectorySettings,
    store: Arc<dyn SettingsStore>,
    provider: Arc<dyn ResolvedDirectoryProvider>,
    emitter: Arc<dyn SettingsEventEmitter>,
}

impl DirectorySettingsService {
    /// Load persisted settings and build the service.
    pub async fn load(
        store: Arc<dyn SettingsStore>,
        provider: Arc<dyn ResolvedDirectoryProvider>,
        emitter: Arc<dyn SettingsEventEmitter>,
    ) -> Result<Self, CoreError> {
        let state = store.load().await?;
        Ok(Self {
            state,
            store,
            provider,
            emitter,
        })
    }

    /// The current settings value.
    #[must_use]
    pub const fn settings(&self) -> &DirectorySettings {
        &self.state
    }

    /// The gate view over the current settings.
    #[must_use]
    pub const fn gate(&self) -> OverrideGate {
        self.state.gate()
    }

    /// Effective display value for the host config directory.
    #[must_use]
    pub fn effective_host_dir(&self) -> String {
        let resolved = self.provider.resolved_directories();
        effective_path(self.state.host_config_override(), &resolved.host_config).to_string()
    }

    /// Effective display value for a managed app's directory, gate-aware.
    #[must_use]
    pub fn effective_app_dir(&self, app: AppId) -> String {
        let resolved = self.provider.resolved_directories();
        effective_path(self.state.active_override(app), resolved.app_default(app)).to_string()
    }

    /// Snapshot of every effective display value.
    #[must_use]
    pub fn effective_directories(&self) -> EffectiveDirectories {
        EffectiveDirectories::compute(&self.state, &self.provider.resolved_directories())
    }

    /// Replace the host config override.
    pub async fn set_host_config_override(
        &mut self,
        value: Option<String>,
    ) -> Result<(), CoreError> {
        debug!(?value, "setting host config override");
        let mut next = self.state.clone();
        next.set_host_config_override(value.clone());
        self.commit(next, SettingsEvent::HostOverrideChanged { value })
            .await
    }

    /// Replace the override for `app`. Any string is accepted, including the
    /// empty string.
    pub async fn set_app_override(
        &mut self,
        app: AppId,
        value: Option<String>,
    ) -> Result<(), CoreError> {
        debug!(%app, ?value, "setting app config override");
        let mut next = self.state.clone();
        next.set_app_override(app, value.clone());
        self.commit(next, SettingsEvent::AppOverrideChanged { app, value })
            .await
    }

    /// Toggle the global overrides gate. Stored overrides are untouched.
    pub async fn set_overrides_enabled(&mut self, enabled: bool) -> Result<(), CoreError> {
        debug!(enabled, "toggling config dir overrides");
        let mut next = self.state.clone();
        next.set_overrides_enabled(enabled);
        self.commit(next, SettingsEvent::OverridesEnabledChanged { enabled })
            .await
    }

    /// Toggle the sync-provider-switch-to-both-config-dirs flag.
    pub async fn set_sync_to_both_config_dirs(&mut self, enabled: bool) -> Result<(), CoreError> {
        debug!(enabled, "toggling provider switch sync policy");
        let mut next = self.state.clone();
        next.set_sync_to_both_config_dirs(enabled);
        self.commit(next, SettingsEvent::SyncPolicyChanged { enabled })
            .await
    }

    /// Reset the host config override back to the resolved default.
    pub async fn reset_host_config_override(&mut self) -> Result<(), CoreError> {
        self.set_host_config_override(None).await
    }

    /// Reset the override for `app` back to the resolved default.
    pub async fn reset_app_override(&mut self, app: AppId) -> Result<(), CoreError> {
        self.set_app_override(app, None).await
    }

    /// Apply a whole-form partial update in one persisted step.
    pub async fn update(&mut self, update: &DirectorySettingsUpdate) -> Result<(), CoreError> {
        let mut next = self.state.clone();
        next.merge(update);
        let event = SettingsEvent::SettingsReplaced {
            settings: next.clone(),
        };
        self.commit(next, event).await
    }

    /// Persist-then-commit: a failing save leaves the in-memory state
    /// unchanged.
    async fn commit(
        &mut self,
        next: DirectorySettings,
        event: SettingsEvent,
    ) -> Result<(), CoreError> {
        self.store.save(&next).await?;
        self.state = next;
        self.emitter.emit(event);
        Ok(())
    }
}

//! Directory-override settings: the aggregate mutable state.
//!
//! These are pure domain types with no infrastructure dependencies. All
//! mutation operations are total, synchronous, and in-memory; persistence
//! and event emission are the settings service's concern.

use serde::{Deserialize, Serialize};

use crate::domain::{AppId, PerApp};
use crate::resolve::OverrideGate;

/// The directory-override settings aggregate.
///
/// Invariants:
/// - `app_overrides` holds exactly one entry per [`AppId`] (guaranteed by
///   [`PerApp`]).
/// - `None` is distinct from `Some("")`: `None` defers to the resolved
///   default, while the empty string is a literal override value the user
///   chose. Values are never trimmed or emptiness-collapsed.
/// - Disabling `overrides_enabled` never mutates `app_overrides`; stored
///   overrides survive the gate being toggled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SettingsDoc", into = "SettingsDoc")]
pub struct DirectorySettings {
    host_config_override: Option<String>,
    app_overrides: PerApp<Option<String>>,
    overrides_enabled: bool,
    sync_to_both_config_dirs: bool,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            host_config_override: None,
            app_overrides: PerApp::default(),
            overrides_enabled: true,
            sync_to_both_config_dirs: false,
        }
    }
}

impl DirectorySettings {
    /// Override for the host application's own config directory.
    #[must_use]
    pub fn host_config_override(&self) -> Option<&str> {
        self.host_config_override.as_deref()
    }

    /// All stored per-app overrides, gate-ignoring.
    #[must_use]
    pub const fn app_overrides(&self) -> &PerApp<Option<String>> {
        &self.app_overrides
    }

    /// The stored override for `app`, regardless of the gate.
    #[must_use]
    pub fn stored_override(&self, app: AppId) -> Option<&str> {
        self.app_overrides.get(app).as_deref()
    }

    /// The override for `app` as the gate currently exposes it: the stored
    /// value when overrides are enabled, `None` while they are disabled.
    #[must_use]
    pub fn active_override(&self, app: AppId) -> Option<&str> {
        self.gate().visible_override(self.stored_override(app))
    }

    #[must_use]
    pub const fn overrides_enabled(&self) -> bool {
        self.overrides_enabled
    }

    #[must_use]
    pub const fn sync_to_both_config_dirs(&self) -> bool {
        self.sync_to_both_config_dirs
    }

    /// The gate view over the current `overrides_enabled` value.
    #[must_use]
    pub const fn gate(&self) -> OverrideGate {
        OverrideGate::new(self.overrides_enabled)
    }

    /// Replace the host config override unconditionally.
    pub fn set_host_config_override(&mut self, value: Option<String>) {
        self.host_config_override = value;
    }

    /// Replace the override for `app`. Any string is accepted, including the
    /// empty string.
    pub fn set_app_override(&mut self, app: AppId, value: Option<String>) {
        self.app_overrides.set(app, value);
    }

    /// Replace the global gate. No cascading mutation: stored overrides are
    /// untouched.
    pub const fn set_overrides_enabled(&mut self, enabled: bool) {
        self.overrides_enabled = enabled;
    }

    /// Replace the sync-to-both-config-dirs flag.
    pub const fn set_sync_to_both_config_dirs(&mut self, enabled: bool) {
        self.sync_to_both_config_dirs = enabled;
    }

    /// Reset the host config override back to the resolved default.
    pub fn reset_host_config_override(&mut self) {
        self.set_host_config_override(None);
    }

    /// Reset the override for `app` back to the resolved default.
    pub fn reset_app_override(&mut self, app: AppId) {
        self.set_app_override(app, None);
    }

    /// Merge a partial update into this settings value, only touching fields
    /// the update carries.
    pub fn merge(&mut self, update: &DirectorySettingsUpdate) {
        if let Some(ref value) = update.host_config_override {
            self.host_config_override.clone_from(value);
        }
        for app in AppId::ALL {
            if let Some(value) = update.app_overrides.get(app) {
                self.app_overrides.set(app, value.clone());
            }
        }
        if let Some(enabled) = update.overrides_enabled {
            self.overrides_enabled = enabled;
        }
        if let Some(enabled) = update.sync_to_both_config_dirs {
            self.sync_to_both_config_dirs = enabled;
        }
    }
}

/// Partial settings update for adapters that submit whole forms.
///
/// Each field is `Option<...>`:
/// - `None` = don't change this field
/// - `Some(None)` = clear the override (for the override fields)
/// - `Some(Some(value))` / `Some(value)` = set the field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorySettingsUpdate {
    pub host_config_override: Option<Option<String>>,
    pub app_overrides: PerApp<Option<Option<String>>>,
    pub overrides_enabled: Option<bool>,
    pub sync_to_both_config_dirs: Option<bool>,
}

/// The persisted wire form: a flat camelCase document with one field per
/// app, matching what earlier releases of the host app wrote to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    host_config_dir: Option<String>,
    #[serde(default = "default_true")]
    enable_config_dir_overrides: bool,
    #[serde(default)]
    sync_provider_switch_to_both_config_dirs: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    claude_config_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    codex_config_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gemini_config_dir: Option<String>,
}

const fn default_true() -> bool {
    true
}

impl From<SettingsDoc> for DirectorySettings {
    fn from(doc: SettingsDoc) -> Self {
        let mut app_overrides = PerApp::default();
        app_overrides.set(AppId::Claude, doc.claude_config_dir);
        app_overrides.set(AppId::Codex, doc.codex_config_dir);
        app_overrides.set(AppId::Gemini, doc.gemini_config_dir);
        Self {
            host_config_override: doc.host_config_dir,
            app_overrides,
            overrides_enabled: doc.enable_config_dir_overrides,
            sync_to_both_config_dirs: doc.sync_provider_switch_to_both_config_dirs,
        }
    }
}

impl From<DirectorySettings> for SettingsDoc {
    fn from(settings: DirectorySettings) -> Self {
        Self {
            host_config_dir: settings.host_config_override,
            enable_config_dir_overrides: settings.overrides_enabled,
            sync_provider_switch_to_both_config_dirs: settings.sync_to_both_config_dirs,
            claude_config_dir: settings.app_overrides.get(AppId::Claude).clone(),
            codex_config_dir: settings.app_overrides.get(AppId::Codex).clone(),
            gemini_config_dir: settings.app_overrides.get(AppId::Gemini).clone(),
        }
    }
}

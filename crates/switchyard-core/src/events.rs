//! Canonical event union for settings mutations.
//!
//! This module is the single source of truth for the events adapters
//! subscribe to when they mirror settings changes (re-render, persistence
//! diagnostics, telemetry).
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "app_override_changed", "app": "codex", "override": "/wsl/.codex" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::AppId;
use crate::settings::DirectorySettings;

/// One settings mutation, emitted after it has been persisted and committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettingsEvent {
    /// The host app's own config-directory override changed.
    HostOverrideChanged {
        #[serde(rename = "override")]
        value: Option<String>,
    },

    /// A managed app's config-directory override changed.
    AppOverrideChanged {
        app: AppId,
        #[serde(rename = "override")]
        value: Option<String>,
    },

    /// The global "overrides enabled" gate was toggled.
    OverridesEnabledChanged { enabled: bool },

    /// The sync-provider-switch-to-both-config-dirs flag was toggled.
    SyncPolicyChanged { enabled: bool },

    /// A whole-form update replaced the settings document.
    SettingsReplaced { settings: DirectorySettings },
}

impl SettingsEvent {
    /// Stable event name for adapter subscriptions.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::HostOverrideChanged { .. } => "settings:host_override_changed",
            Self::AppOverrideChanged { .. } => "settings:app_override_changed",
            Self::OverridesEnabledChanged { .. } => "settings:overrides_enabled_changed",
            Self::SyncPolicyChanged { .. } => "settings:sync_policy_changed",
            Self::SettingsReplaced { .. } => "settings:replaced",
        }
    }
}

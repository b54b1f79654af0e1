//! Effective-path resolution: the single source of truth for override
//! precedence.
//!
//! Everything that displays, persists, or writes to an "active" directory
//! goes through [`effective_path`], so the precedence rule cannot drift
//! between the UI and the filesystem behavior.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{AppId, DirectoryTarget, PerApp, ResolvedDirectories};
use crate::settings::DirectorySettings;

/// The override precedence rule.
///
/// A present override wins verbatim, even when it is the empty string;
/// otherwise the resolved default applies. Total, no side effects.
#[must_use]
pub fn effective_path<'a>(override_path: Option<&'a str>, resolved_default: &'a str) -> &'a str {
    override_path.unwrap_or(resolved_default)
}

/// The global "overrides enabled" gate as a pure value.
///
/// The gate decides whether per-app override inputs are editable and whether
/// stored overrides participate in resolution. It never mutates the stored
/// values: closing the gate hides overrides, it does not discard them, so
/// re-opening it restores them without re-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideGate {
    enabled: bool,
}

impl OverrideGate {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether per-app override inputs accept edits.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        self.enabled
    }

    /// The stored override as resolution should see it: unchanged while the
    /// gate is open, `None` while it is closed.
    #[must_use]
    pub const fn visible_override<'a>(self, stored: Option<&'a str>) -> Option<&'a str> {
        if self.enabled { stored } else { None }
    }
}

/// Every effective display value for one render pass, captured in a single
/// struct.
///
/// This is the "golden truth" snapshot: adapters render from it, and
/// integration tests compare it across mutations instead of re-deriving
/// precedence ad hoc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveDirectories {
    /// Effective host config directory (host override is not gated).
    pub host_config: String,
    /// Effective directory per managed app, gate-aware.
    pub apps: PerApp<String>,
}

impl EffectiveDirectories {
    /// Compute the snapshot from current settings and resolved defaults.
    #[must_use]
    pub fn compute(settings: &DirectorySettings, resolved: &ResolvedDirectories) -> Self {
        Self {
            host_config: effective_path(settings.host_config_override(), &resolved.host_config)
                .to_string(),
            apps: resolved.apps.map(|app, default| {
                effective_path(settings.active_override(app), default).to_string()
            }),
        }
    }
}

impl fmt::Display for EffectiveDirectories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "host_config = {}", self.host_config)?;
        let mut entries = self.apps.iter().peekable();
        while let Some((app, dir)) = entries.next() {
            if entries.peek().is_some() {
                writeln!(f, "{app} = {dir}")?;
            } else {
                write!(f, "{app} = {dir}")?;
            }
        }
        Ok(())
    }
}

/// Resolve a [`DirectoryTarget`] to a concrete directory string.
///
/// `Primary` is the gate-aware effective directory and always resolves.
/// `Alternate` is the other side of the override split and ignores the gate;
/// it resolves to `None` when the app has no distinct alternate (no override
/// stored, or the alternate would coincide with the primary).
#[must_use]
pub fn resolve_target(
    target: DirectoryTarget,
    settings: &DirectorySettings,
    resolved: &ResolvedDirectories,
) -> Option<String> {
    match target {
        DirectoryTarget::Primary(app) => Some(
            effective_path(settings.active_override(app), resolved.app_default(app)).to_string(),
        ),
        DirectoryTarget::Alternate(app) => {
            let stored = settings.stored_override(app)?;
            let default = resolved.app_default(app);
            let primary = effective_path(settings.active_override(app), default);
            let alternate = if primary == stored { default } else { stored };
            if alternate == primary {
                None
            } else {
                Some(alternate.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved() -> ResolvedDirectories {
        ResolvedDirectories {
            host_config: "/home/u/.switchyard".into(),
            apps: PerApp::from_fn(|app| format!("/home/u/.{app}")),
        }
    }

    #[test]
    fn present_override_wins_verbatim() {
        assert_eq!(effective_path(Some("/custom"), "/default"), "/custom");
    }

    #[test]
    fn empty_string_is_a_real_override() {
        assert_eq!(effective_path(Some(""), "/default"), "");
    }

    #[test]
    fn absent_override_falls_back_to_default() {
        assert_eq!(effective_path(None, "/default"), "/default");
    }

    #[test]
    fn closed_gate_hides_overrides_open_gate_restores_them() {
        let stored = Some("/custom");
        assert_eq!(OverrideGate::new(false).visible_override(stored), None);
        assert_eq!(OverrideGate::new(true).visible_override(stored), stored);
        assert!(!OverrideGate::new(false).is_editable());
        assert!(OverrideGate::new(true).is_editable());
    }

    #[test]
    fn snapshot_shows_default_while_gate_is_closed() {
        let mut settings = DirectorySettings::default();
        settings.set_overrides_enabled(false);
        settings.set_app_override(AppId::Claude, Some("/custom/claude".into()));

        let effective = EffectiveDirectories::compute(&settings, &resolved());
        assert_eq!(effective.apps[AppId::Claude], "/home/u/.claude");

        settings.set_overrides_enabled(true);
        let effective = EffectiveDirectories::compute(&settings, &resolved());
        assert_eq!(effective.apps[AppId::Claude], "/custom/claude");
    }

    #[test]
    fn snapshot_host_override_ignores_gate() {
        let mut settings = DirectorySettings::default();
        settings.set_overrides_enabled(false);
        settings.set_host_config_override(Some("/custom/host".into()));

        let effective = EffectiveDirectories::compute(&settings, &resolved());
        assert_eq!(effective.host_config, "/custom/host");
    }

    #[test]
    fn reset_restores_resolved_default() {
        let mut settings = DirectorySettings::default();
        settings.set_app_override(AppId::Gemini, Some("/custom/gemini".into()));
        settings.reset_app_override(AppId::Gemini);

        let effective = EffectiveDirectories::compute(&settings, &resolved());
        assert_eq!(effective.apps[AppId::Gemini], "/home/u/.gemini");
    }

    #[test]
    fn display_lists_every_slot() {
        let effective = EffectiveDirectories::compute(&DirectorySettings::default(), &resolved());
        let output = effective.to_string();
        assert!(output.contains("host_config = /home/u/.switchyard"));
        assert!(output.contains("claude = /home/u/.claude"));
        assert!(output.contains("gemini = /home/u/.gemini"));
    }

    #[test]
    fn primary_target_respects_gate() {
        let mut settings = DirectorySettings::default();
        settings.set_app_override(AppId::Codex, Some("/wsl/.codex".into()));

        settings.set_overrides_enabled(true);
        assert_eq!(
            resolve_target(DirectoryTarget::Primary(AppId::Codex), &settings, &resolved()),
            Some("/wsl/.codex".into())
        );

        settings.set_overrides_enabled(false);
        assert_eq!(
            resolve_target(DirectoryTarget::Primary(AppId::Codex), &settings, &resolved()),
            Some("/home/u/.codex".into())
        );
    }

    #[test]
    fn alternate_target_is_the_other_side_and_ignores_gate() {
        let mut settings = DirectorySettings::default();
        settings.set_app_override(AppId::Codex, Some("/wsl/.codex".into()));

        // Gate open: primary is the override, alternate is the default.
        assert_eq!(
            resolve_target(DirectoryTarget::Alternate(AppId::Codex), &settings, &resolved()),
            Some("/home/u/.codex".into())
        );

        // Gate closed: primary is the default, alternate is the configured override.
        settings.set_overrides_enabled(false);
        assert_eq!(
            resolve_target(DirectoryTarget::Alternate(AppId::Codex), &settings, &resolved()),
            Some("/wsl/.codex".into())
        );
    }

    #[test]
    fn alternate_without_override_resolves_to_nothing() {
        let settings = DirectorySettings::default();
        assert_eq!(
            resolve_target(DirectoryTarget::Alternate(AppId::Claude), &settings, &resolved()),
            None
        );
    }

    #[test]
    fn alternate_equal_to_default_is_not_distinct() {
        let mut settings = DirectorySettings::default();
        settings.set_app_override(AppId::Claude, Some("/home/u/.claude".into()));
        assert_eq!(
            resolve_target(DirectoryTarget::Alternate(AppId::Claude), &settings, &resolved()),
            None
        );
    }
}

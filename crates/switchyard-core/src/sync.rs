//! Sync fan-out policy for provider switches.

use crate::domain::{AppId, DirectoryTarget, PerApp};

/// Externally configured companion mapping for sync fan-out.
///
/// The default pairs every app with its own alternate directory: a switch
/// mirrors into the same app's other side of the override split. Adapters
/// may pair apps with another app's directory instead; nothing here is
/// hardcoded about cross-app pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionMap {
    companions: PerApp<Option<DirectoryTarget>>,
}

impl Default for CompanionMap {
    fn default() -> Self {
        Self {
            companions: PerApp::from_fn(|app| Some(DirectoryTarget::Alternate(app))),
        }
    }
}

impl CompanionMap {
    /// A map with no companions configured: sync fan-out degenerates to the
    /// primary target for every app.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            companions: PerApp::from_fn(|_| None),
        }
    }

    /// Configure the companion for `app`.
    #[must_use]
    pub fn with_companion(mut self, app: AppId, companion: DirectoryTarget) -> Self {
        self.companions.set(app, Some(companion));
        self
    }

    /// The configured companion for `app`, if any.
    #[must_use]
    pub fn companion_for(&self, app: AppId) -> Option<DirectoryTarget> {
        *self.companions.get(app)
    }
}

/// Decides which directories a provider switch targets.
///
/// The policy only determines fan-out; applying the switch and reporting
/// per-target outcomes is the switch service's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPropagationPolicy {
    companions: CompanionMap,
}

impl SyncPropagationPolicy {
    #[must_use]
    pub const fn new(companions: CompanionMap) -> Self {
        Self { companions }
    }

    /// The targets a switch on `primary` must be applied to, set semantics.
    ///
    /// With sync disabled this is the primary alone. With sync enabled the
    /// configured companion is added; a missing companion or one that
    /// duplicates the primary degenerates to the primary alone.
    #[must_use]
    pub fn targets_for(&self, sync_enabled: bool, primary: AppId) -> Vec<DirectoryTarget> {
        let primary_target = DirectoryTarget::Primary(primary);
        if !sync_enabled {
            return vec![primary_target];
        }
        match self.companions.companion_for(primary) {
            Some(companion) if companion != primary_target => vec![primary_target, companion],
            _ => vec![primary_target],
        }
    }
}

//! Provider-switch application across one or more config directories.
//!
//! The switch service fans a profile out to every directory the sync policy
//! selects and collects per-target outcomes. Directories that were written
//! stay written when a later target fails; the report names both sides so
//! the user can reconcile manually instead of the service guessing at a
//! cross-directory rollback.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{AppId, DirectoryTarget, ProviderProfile, ResolvedDirectories};
use crate::paths::normalize_user_path;
use crate::ports::ProviderSwitchWriter;
use crate::resolve::resolve_target;
use crate::settings::DirectorySettings;
use crate::sync::SyncPropagationPolicy;

/// One directory successfully written by a switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetWrite {
    pub target: DirectoryTarget,
    pub dir: String,
}

/// One directory a switch failed to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetFailure {
    pub target: DirectoryTarget,
    pub dir: String,
    pub reason: String,
}

/// Per-target outcomes of one provider switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchReport {
    pub succeeded: Vec<TargetWrite>,
    pub failed: Vec<TargetFailure>,
}

/// Provider-switch failure, always carrying the full per-target report.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// Some targets were written, some were not. No automatic rollback of
    /// the targets that succeeded.
    #[error("provider switch wrote {} of {} target directories", .0.succeeded.len(), .0.succeeded.len() + .0.failed.len())]
    PartialFailure(SwitchReport),

    /// No target directory was written.
    #[error("provider switch failed for every target directory")]
    AllTargetsFailed(SwitchReport),
}

impl SwitchError {
    /// The per-target report, for reconciliation.
    #[must_use]
    pub const fn report(&self) -> &SwitchReport {
        match self {
            Self::PartialFailure(report) | Self::AllTargetsFailed(report) => report,
        }
    }
}

/// Applies provider profiles to every directory the policy selects.
pub struct ProviderSwitchService {
    writer: Arc<dyn ProviderSwitchWriter>,
    policy: SyncPropagationPolicy,
}

impl ProviderSwitchService {
    /// Build with the default same-app companion policy.
    pub fn new(writer: Arc<dyn ProviderSwitchWriter>) -> Self {
        Self::with_policy(writer, SyncPropagationPolicy::default())
    }

    /// Build with an externally configured fan-out policy.
    pub const fn with_policy(
        writer: Arc<dyn ProviderSwitchWriter>,
        policy: SyncPropagationPolicy,
    ) -> Self {
        Self { writer, policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &SyncPropagationPolicy {
        &self.policy
    }

    /// Apply `profile` for `app` to every directory the policy selects.
    ///
    /// Targets that resolve to no distinct directory are skipped; distinct
    /// directories deduplicate after normalization. A target whose configured
    /// path cannot be normalized counts as that target's failure.
    pub async fn switch_provider(
        &self,
        settings: &DirectorySettings,
        resolved: &ResolvedDirectories,
        app: AppId,
        profile: &ProviderProfile,
    ) -> Result<SwitchReport, SwitchError> {
        let targets = self
            .policy
            .targets_for(settings.sync_to_both_config_dirs(), app);

        let mut report = SwitchReport::default();
        let mut seen_dirs: Vec<PathBuf> = Vec::new();

        for target in targets {
            let Some(raw) = resolve_target(target, settings, resolved) else {
                debug!(%target, "skipping target with no distinct directory");
                continue;
            };

            let dir = match normalize_user_path(&raw) {
                Ok(dir) => dir,
                Err(err) => {
                    warn!(%target, raw = %raw, %err, "target directory is unusable");
                    report.failed.push(TargetFailure {
                        target,
                        dir: raw,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            if seen_dirs.contains(&dir) {
                debug!(%target, dir = %dir.display(), "skipping duplicate target directory");
                continue;
            }
            seen_dirs.push(dir.clone());

            match self.writer.apply(&dir, profile).await {
                Ok(()) => report.succeeded.push(TargetWrite {
                    target,
                    dir: dir.display().to_string(),
                }),
                Err(err) => {
                    warn!(%target, dir = %dir.display(), %err, "provider switch write failed");
                    report.failed.push(TargetFailure {
                        target,
                        dir: dir.display().to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        if report.failed.is_empty() {
            Ok(report)
        } else if report.succeeded.is_empty() {
            Err(SwitchError::AllTargetsFailed(report))
        } else {
            Err(SwitchError::PartialFailure(report))
        }
    }
}

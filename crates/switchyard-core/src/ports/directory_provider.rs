//! Resolved-directory provider trait and its shipped implementations.

use crate::domain::{PerApp, ResolvedDirectories};
use crate::paths::{default_app_config_dir, default_host_config_dir};

/// Supplies the platform default directory for every slot.
///
/// Synchronous and side-effect-free; called on demand (typically once per
/// render pass). Implementations must return a complete mapping with a
/// non-empty entry for every slot, even when the directory does not exist
/// yet.
pub trait ResolvedDirectoryProvider: Send + Sync {
    /// The current platform defaults.
    fn resolved_directories(&self) -> ResolvedDirectories;
}

/// Production implementation backed by the platform path resolvers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDirectoryProvider;

impl PlatformDirectoryProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ResolvedDirectoryProvider for PlatformDirectoryProvider {
    fn resolved_directories(&self) -> ResolvedDirectories {
        ResolvedDirectories {
            host_config: default_host_config_dir().to_string_lossy().into_owned(),
            apps: PerApp::from_fn(|app| {
                default_app_config_dir(app).to_string_lossy().into_owned()
            }),
        }
    }
}

/// Fixed-value implementation for tests and captive configurations.
#[derive(Debug, Clone)]
pub struct FixedDirectoryProvider {
    resolved: ResolvedDirectories,
}

impl FixedDirectoryProvider {
    #[must_use]
    pub const fn new(resolved: ResolvedDirectories) -> Self {
        Self { resolved }
    }
}

impl ResolvedDirectoryProvider for FixedDirectoryProvider {
    fn resolved_directories(&self) -> ResolvedDirectories {
        self.resolved.clone()
    }
}

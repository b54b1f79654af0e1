//! Core domain, ports, and services for switchyard's config-directory
//! override management.
//!
//! The host application coordinates several external CLI tools, each of
//! which reads its configuration from a directory on disk. This crate owns
//! the non-presentational logic: how an effective directory is computed
//! from an optional user override and a platform-resolved default, how the
//! global "overrides enabled" gate changes what resolution sees, and how
//! the sync flag fans a provider switch out across directories.
//!
//! External collaborators (file picker, settings storage, event transport,
//! the live-file writer) are trait ports in [`ports`]; filesystem adapters
//! live in the `switchyard-store` crate.

pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod resolve;
pub mod services;
pub mod settings;
pub mod sync;

// Re-export commonly used types for convenience
pub use domain::{
    AppId, DirectorySlot, DirectoryTarget, LiveContent, LiveFile, PerApp, ProviderProfile,
    ResolvedDirectories,
};
pub use events::SettingsEvent;
pub use paths::{PathError, default_app_config_dir, default_host_config_dir, normalize_user_path};
pub use ports::{
    BrowseError, CoreError, DirectoryPicker, FixedDirectoryProvider, NoopSettingsEmitter,
    PlatformDirectoryProvider, ProviderSwitchWriter, ResolvedDirectoryProvider,
    SettingsEventEmitter, SettingsStore, StoreError, SwitchWriteError,
};
pub use resolve::{EffectiveDirectories, OverrideGate, effective_path, resolve_target};
pub use services::{
    AppCore, DirectoryActionDispatcher, DirectorySettingsService, Ports, ProviderSwitchService,
    SwitchError, SwitchReport, TargetFailure, TargetWrite,
};
pub use settings::{DirectorySettings, DirectorySettingsUpdate};
pub use sync::{CompanionMap, SyncPropagationPolicy};

//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core expects from its collaborators: the
//! platform default-path resolver, the native file picker, the settings
//! store, the event sink, and the live-file writer. They contain no
//! implementation details and use only domain types.

pub mod directory_picker;
pub mod directory_provider;
pub mod event_emitter;
pub mod settings_store;
pub mod switch_writer;

use thiserror::Error;

pub use directory_picker::{BrowseError, DirectoryPicker};
pub use directory_provider::{
    FixedDirectoryProvider, PlatformDirectoryProvider, ResolvedDirectoryProvider,
};
pub use event_emitter::{NoopSettingsEmitter, SettingsEventEmitter};
pub use settings_store::{SettingsStore, StoreError};
pub use switch_writer::{ProviderSwitchWriter, SwitchWriteError};

use crate::paths::PathError;

/// Service-level error umbrella.
///
/// Services surface port failures through this type so adapters can handle
/// everything behind one `Result`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Settings persistence failed; the triggering mutation was not committed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The native directory dialog failed to open.
    #[error(transparent)]
    Browse(#[from] BrowseError),

    /// A chosen path could not be turned into a usable filesystem path.
    #[error(transparent)]
    Path(#[from] PathError),
}

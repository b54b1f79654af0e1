//! Routes browse/reset intents to the picker and default-path resolver.

use std::sync::Arc;

use tracing::debug;

use crate::domain::DirectorySlot;
use crate::ports::{BrowseError, DirectoryPicker, ResolvedDirectoryProvider};

/// Dispatcher for the settings panel's directory actions.
///
/// It never holds the settings state across the dialog await; the caller
/// feeds a successful browse result back into the settings service.
pub struct DirectoryActionDispatcher {
    picker: Arc<dyn DirectoryPicker>,
    provider: Arc<dyn ResolvedDirectoryProvider>,
}

impl DirectoryActionDispatcher {
    pub fn new(
        picker: Arc<dyn DirectoryPicker>,
        provider: Arc<dyn ResolvedDirectoryProvider>,
    ) -> Self {
        Self { picker, provider }
    }

    /// Open the native directory dialog.
    ///
    /// `Ok(Some(path))` is the user's choice, to be fed into the matching
    /// `set_*_override` operation. `Ok(None)` is cancellation: no mutation
    /// anywhere. `Err` means the dialog itself failed; state is equally
    /// untouched, but the failure is surfaced for diagnostics.
    pub async fn browse(&self) -> Result<Option<String>, BrowseError> {
        let choice = self.picker.pick_directory().await?;
        if choice.is_none() {
            debug!("directory dialog cancelled");
        }
        Ok(choice)
    }

    /// The resolved default for a slot, for reset-to-default display.
    #[must_use]
    pub fn resolve_default(&self, slot: DirectorySlot) -> String {
        self.provider
            .resolved_directories()
            .for_slot(slot)
            .to_string()
    }
}

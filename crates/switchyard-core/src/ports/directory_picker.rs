//! Native directory-picker trait definition.

use async_trait::async_trait;
use thiserror::Error;

/// The native directory dialog failed to open.
///
/// This is distinct from cancellation: cancelling the dialog is a normal
/// completion (`Ok(None)`), not an error.
#[derive(Debug, Clone, Error)]
pub enum BrowseError {
    /// The platform refused to open the dialog (e.g. permission denied).
    #[error("Failed to open directory dialog: {0}")]
    DialogFailed(String),
}

/// Port for the native directory-picker dialog.
///
/// The only suspending operation in the system: callers await the user's
/// choice without borrowing any settings state across the await, so other
/// controls stay live while the dialog is open.
#[async_trait]
pub trait DirectoryPicker: Send + Sync {
    /// Open the native dialog and wait for the user's choice.
    ///
    /// `Ok(None)` means the user cancelled; no mutation should follow.
    async fn pick_directory(&self) -> Result<Option<String>, BrowseError>;
}

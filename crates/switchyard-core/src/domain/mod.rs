//! Pure domain types with no I/O dependencies.

mod app;
mod profile;
mod target;

pub use app::{AppId, DirectorySlot, PerApp, ResolvedDirectories};
pub use profile::{LiveContent, LiveFile, ProviderProfile};
pub use target::DirectoryTarget;

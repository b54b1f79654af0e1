//! Path utilities: platform default directories and user-path normalization.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod error;
mod platform;

pub use error::PathError;
pub use platform::{default_app_config_dir, default_host_config_dir, normalize_user_path};

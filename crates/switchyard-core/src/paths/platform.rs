//! Platform default directories for the host app and the managed tools.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use super::error::PathError;
use crate::domain::AppId;

/// Home directory with a logged fallback to the current directory.
///
/// A resolvable default must always exist, even on a box with no home
/// directory, so resolution never fails here.
fn home_dir_or_current() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| {
        warn!("failed to resolve user home directory; falling back to current directory");
        PathBuf::from(".")
    })
}

/// Default directory for the host app's own configuration.
///
/// Resolution order:
/// 1. `SWITCHYARD_CONFIG_DIR` environment variable (highest priority)
/// 2. `~/.switchyard`
pub fn default_host_config_dir() -> PathBuf {
    if let Some(path) = env::var_os("SWITCHYARD_CONFIG_DIR").filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    home_dir_or_current().join(".switchyard")
}

/// Default configuration directory for a managed app.
pub fn default_app_config_dir(app: AppId) -> PathBuf {
    let dot_dir = match app {
        AppId::Claude => ".claude",
        AppId::Codex => ".codex",
        AppId::Gemini => ".gemini",
    };
    home_dir_or_current().join(dot_dir)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
///
/// This is filesystem plumbing, not precedence: it runs strictly after the
/// effective path has been chosen, when a directory is actually used.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

//! Managed application identifiers and per-app containers.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Identifier for one of the managed external CLI tools.
///
/// The set is closed and defined at compile time; adding a tool is a code
/// change, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    Claude,
    Codex,
    Gemini,
}

impl AppId {
    /// Every managed app, in canonical display order.
    pub const ALL: [Self; 3] = [Self::Claude, Self::Codex, Self::Gemini];

    /// Canonical lowercase name, matching the serde wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Codex => "codex",
            Self::Gemini => "gemini",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the configuration-directory slots the panel manages: the host
/// application's own directory, or a managed app's directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectorySlot {
    HostConfig,
    App(AppId),
}

/// A container holding exactly one `T` per [`AppId`].
///
/// This makes the "one entry per app, never partial" invariant impossible to
/// violate: there is no way to construct a `PerApp` with a missing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerApp<T> {
    claude: T,
    codex: T,
    gemini: T,
}

impl<T> PerApp<T> {
    /// Build a container by invoking `f` once per app.
    pub fn from_fn(mut f: impl FnMut(AppId) -> T) -> Self {
        Self {
            claude: f(AppId::Claude),
            codex: f(AppId::Codex),
            gemini: f(AppId::Gemini),
        }
    }

    /// Borrow the entry for `app`.
    pub const fn get(&self, app: AppId) -> &T {
        match app {
            AppId::Claude => &self.claude,
            AppId::Codex => &self.codex,
            AppId::Gemini => &self.gemini,
        }
    }

    /// Mutably borrow the entry for `app`.
    pub const fn get_mut(&mut self, app: AppId) -> &mut T {
        match app {
            AppId::Claude => &mut self.claude,
            AppId::Codex => &mut self.codex,
            AppId::Gemini => &mut self.gemini,
        }
    }

    /// Replace the entry for `app`, returning the previous value.
    pub fn set(&mut self, app: AppId, value: T) -> T {
        std::mem::replace(self.get_mut(app), value)
    }

    /// Apply `f` to every entry, producing a new container.
    pub fn map<U>(&self, mut f: impl FnMut(AppId, &T) -> U) -> PerApp<U> {
        PerApp::from_fn(|app| f(app, self.get(app)))
    }

    /// Iterate entries in [`AppId::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (AppId, &T)> {
        AppId::ALL.into_iter().map(|app| (app, self.get(app)))
    }
}

impl<T: Default> Default for PerApp<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<AppId> for PerApp<T> {
    type Output = T;

    fn index(&self, app: AppId) -> &T {
        self.get(app)
    }
}

/// The platform-computed default directory for every slot.
///
/// Produced entirely by the `ResolvedDirectoryProvider` port and treated as
/// read-only input by the core. Every entry is expected to be non-empty: a
/// resolvable default always exists, even if it points at a directory that
/// has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDirectories {
    /// Default directory for the host application's own configuration.
    pub host_config: String,
    /// Default directory per managed app.
    pub apps: PerApp<String>,
}

impl ResolvedDirectories {
    /// The default directory for `app`.
    #[must_use]
    pub fn app_default(&self, app: AppId) -> &str {
        self.apps.get(app)
    }

    /// The default directory for a slot.
    #[must_use]
    pub fn for_slot(&self, slot: DirectorySlot) -> &str {
        match slot {
            DirectorySlot::HostConfig => &self.host_config,
            DirectorySlot::App(app) => self.app_default(app),
        }
    }
}

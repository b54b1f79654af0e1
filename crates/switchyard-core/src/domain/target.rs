//! Directory targets for provider-switch fan-out.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AppId;

/// One concrete config directory a provider switch can be applied to.
///
/// `Primary` is the app's effective directory: the override when the global
/// gate is open and an override is stored, the resolved default otherwise.
/// `Alternate` is the directory on the other side of that split, and it
/// ignores the gate: the sync mirror keeps writing the *configured* override
/// directory even while overrides are disabled. An app with no override
/// configured has no distinct alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "app", rename_all = "snake_case")]
pub enum DirectoryTarget {
    Primary(AppId),
    Alternate(AppId),
}

impl DirectoryTarget {
    /// The app this target belongs to.
    #[must_use]
    pub const fn app(self) -> AppId {
        match self {
            Self::Primary(app) | Self::Alternate(app) => app,
        }
    }
}

impl fmt::Display for DirectoryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(app) => write!(f, "primary({app})"),
            Self::Alternate(app) => write!(f, "alternate({app})"),
        }
    }
}

//! Provider-switch payloads.
//!
//! A provider switch places a small set of "live" files into a config
//! directory. The core never interprets those files; the external
//! provider-switch actor produces them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The ordered set of files one provider switch writes into a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub files: Vec<LiveFile>,
}

impl ProviderProfile {
    #[must_use]
    pub const fn new(files: Vec<LiveFile>) -> Self {
        Self { files }
    }
}

/// One named file inside a [`ProviderProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveFile {
    /// File name relative to the target config directory.
    pub name: String,
    pub content: LiveContent,
}

impl LiveFile {
    /// A JSON document file (e.g. `auth.json`).
    pub fn json(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            content: LiveContent::Json(value),
        }
    }

    /// A verbatim text file (e.g. `config.toml`).
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: LiveContent::Text(text.into()),
        }
    }
}

/// File content: a JSON document rendered pretty-printed, or verbatim text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LiveContent {
    Json(Value),
    Text(String),
}

impl LiveContent {
    /// Render the bytes to write to disk.
    ///
    /// JSON documents are pretty-printed with a trailing newline; text is
    /// written verbatim.
    pub fn render(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Self::Json(value) => {
                let mut bytes = serde_json::to_vec_pretty(value)?;
                bytes.push(b'\n');
                Ok(bytes)
            }
            Self::Text(text) => Ok(text.clone().into_bytes()),
        }
    }
}

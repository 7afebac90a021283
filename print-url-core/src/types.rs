//! Public types shared by the URL builder operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrintUrlError;

/// Target environment of the print view.
///
/// Each environment maps to a fixed origin, see [`origin`](Self::origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Remote dev server (`https://localhost:9002`).
    #[default]
    Remote,
    /// Local dev server (`http://localhost:4200`).
    Local,
}

impl Environment {
    /// Base origin, without a trailing slash.
    pub const fn origin(self) -> &'static str {
        match self {
            Self::Remote => "https://localhost:9002",
            Self::Local => "http://localhost:4200",
        }
    }

    /// All environments, in display order.
    pub const fn all() -> &'static [Self] {
        &[Self::Remote, Self::Local]
    }

    /// The other environment.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Remote => Self::Local,
            Self::Local => Self::Remote,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Local => write!(f, "local"),
        }
    }
}

impl FromStr for Environment {
    type Err = PrintUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "local" => Ok(Self::Local),
            _ => Err(PrintUrlError::ValidationError(format!(
                "Unsupported environment: {s}"
            ))),
        }
    }
}

/// How the widget is hosted, which selects the path segment after the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Standalone page (`/s/`).
    #[default]
    Standalone,
    /// Integrated into the host application (`/i/`).
    Integrated,
}

impl Mode {
    /// Path segment, including both slashes.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Standalone => "/s/",
            Self::Integrated => "/i/",
        }
    }

    /// All modes, in display order.
    pub const fn all() -> &'static [Self] {
        &[Self::Standalone, Self::Integrated]
    }

    /// The other mode.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Standalone => Self::Integrated,
            Self::Integrated => Self::Standalone,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standalone => write!(f, "standalone"),
            Self::Integrated => write!(f, "integrated"),
        }
    }
}

impl FromStr for Mode {
    type Err = PrintUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standalone" => Ok(Self::Standalone),
            "integrated" => Ok(Self::Integrated),
            _ => Err(PrintUrlError::ValidationError(format!(
                "Unsupported mode: {s}"
            ))),
        }
    }
}

/// Fields parsed from a pasted payload.
///
/// Keys keep their original case and insertion order. Inserting an existing
/// key replaces its value but keeps its position. A value of `None` marks a
/// line that had no `:` separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadFields {
    entries: Vec<(String, Option<String>)>,
}

impl PayloadFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Value of `key`, or `None` if the key is missing or has no value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove `key`, returning its stored value if the key was present.
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

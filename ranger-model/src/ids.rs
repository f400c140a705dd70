//! Plugin identifiers.

use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// The host platform's unique reference to a plugin: its basename relative to
/// the plugins directory, e.g. `advanced-custom-fields/acf.php`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginId(pub(crate) String);

impl PluginId {
    /// Parses and validates a plugin basename.
    ///
    /// Rejects empty values, surrounding whitespace, absolute paths and
    /// parent-directory segments.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        let valid = !s.is_empty()
            && s.trim() == s
            && !s.starts_with('/')
            && !s.contains('\\')
            && !s.split('/').any(|segment| segment.is_empty() || segment == "..");
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(ModelError::InvalidPluginId(s.to_string()))
        }
    }

    /// Returns the basename as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the plugin directory (`advanced-custom-fields` for
    /// `advanced-custom-fields/acf.php`), or `None` for single-file plugins.
    #[must_use]
    pub fn directory(&self) -> Option<&str> {
        self.0.split_once('/').map(|(dir, _)| dir)
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PluginId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PluginId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

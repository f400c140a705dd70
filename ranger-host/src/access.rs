//! Capability-based authorization for report callers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Administrative capability a caller may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Site-wide settings management; the only capability the report checks.
    ManageOptions,
    ActivatePlugins,
    EditPosts,
    Read,
}

/// Capability required to render the usage report.
pub const REPORT_CAPABILITY: Capability = Capability::ManageOptions;

/// The identity a report render is performed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    login: String,
    capabilities: HashSet<Capability>,
}

impl Caller {
    /// Creates a caller holding `capabilities`.
    pub fn new(login: impl Into<String>, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            login: login.into(),
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// A caller with no identity and no capabilities.
    pub fn anonymous() -> Self {
        Self {
            login: String::new(),
            capabilities: HashSet::new(),
        }
    }

    /// A caller holding every administrative capability.
    pub fn administrator(login: impl Into<String>) -> Self {
        Self::new(
            login,
            [
                Capability::ManageOptions,
                Capability::ActivatePlugins,
                Capability::EditPosts,
                Capability::Read,
            ],
        )
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn is_anonymous(&self) -> bool {
        self.login.is_empty()
    }

    /// Returns whether the caller holds `capability`.
    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

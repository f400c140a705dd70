//! TOML configuration for the admin server.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::http::{HeaderMap, header};
use ranger_db::DEFAULT_TABLE_PREFIX;
use ranger_host::{Caller, Capability};
use serde::Deserialize;
use tracing::warn;

/// Server configuration. Every field can also be set from the command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Path to the site's SQLite database.
    #[serde(default)]
    pub database: Option<PathBuf>,

    #[serde(default = "default_table_prefix")]
    pub table_prefix: String,

    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    #[serde(default)]
    pub users: Vec<UserConfig>,
}

/// A caller allowed to authenticate with a bearer token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    pub login: String,
    pub token: String,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

fn default_table_prefix() -> String {
    DEFAULT_TABLE_PREFIX.to_string()
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8088))
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            database: None,
            table_prefix: default_table_prefix(),
            listen: default_listen(),
            users: Vec::new(),
        }
    }
}

impl AdminConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

/// Maps bearer tokens to callers.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    by_token: HashMap<String, Caller>,
}

impl UserDirectory {
    pub fn from_users(users: &[UserConfig]) -> Self {
        let mut by_token = HashMap::new();
        for user in users {
            if user.token.trim().is_empty() {
                warn!(login = %user.login, "ignoring user with empty token");
                continue;
            }
            let caller = Caller::new(user.login.clone(), user.capabilities.iter().copied());
            if by_token.insert(user.token.clone(), caller).is_some() {
                warn!(login = %user.login, "token shared by several users; last one wins");
            }
        }
        Self { by_token }
    }

    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }

    /// Resolves the caller from an `Authorization: Bearer` header. Missing or
    /// unknown tokens resolve to the anonymous caller.
    pub fn resolve(&self, headers: &HeaderMap) -> Caller {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .and_then(|token| self.by_token.get(token))
            .cloned()
            .unwrap_or_else(Caller::anonymous)
    }
}

/// Extracts the credentials of a `Bearer` authorization value. The scheme
/// name is case-insensitive.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("Bearer")
        .then_some(token.trim())
        .filter(|token| !token.is_empty())
}

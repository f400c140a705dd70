use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use ranger_host::{ContentScope, ContentStore, HostResult, LikePattern, PluginRegistry};
use ranger_model::PluginId;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Params, params};
use tracing::{debug, info};

use crate::php::{self, PhpValue};
use crate::{DbError, DbResult};

/// Table prefix of a default WordPress install.
pub const DEFAULT_TABLE_PREFIX: &str = "wp_";

/// Read-only view of a WordPress-schema SQLite database.
pub struct WpDatabase {
    conn: Mutex<Connection>,
    prefix: String,
}

impl WpDatabase {
    /// Opens the database at `path` read-only.
    pub fn open(path: &Path, table_prefix: &str) -> DbResult<Self> {
        validate_prefix(table_prefix)?;
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!(path = %path.display(), prefix = table_prefix, "opened content database");
        Ok(Self {
            conn: Mutex::new(conn),
            prefix: table_prefix.to_string(),
        })
    }

    /// Wraps an existing connection (in-memory fixtures, shared handles).
    pub fn from_connection(conn: Connection, table_prefix: &str) -> DbResult<Self> {
        validate_prefix(table_prefix)?;
        Ok(Self {
            conn: Mutex::new(conn),
            prefix: table_prefix.to_string(),
        })
    }

    pub fn table_prefix(&self) -> &str {
        &self.prefix
    }

    /// Counts published posts and pages whose raw content matches `pattern`.
    pub fn count_published_matching(&self, pattern: &LikePattern) -> DbResult<u64> {
        let sql = format!(
            "SELECT COUNT(ID) FROM {}posts
             WHERE post_status = 'publish'
               AND post_type IN ('post', 'page')
               AND post_content LIKE ?1 ESCAPE '\\'",
            self.prefix
        );
        self.count(&sql, pattern, params![pattern.as_sql()])
    }

    /// Counts stored page-builder layouts whose JSON matches `pattern`.
    pub fn count_layouts_matching(&self, pattern: &LikePattern) -> DbResult<u64> {
        let sql = format!(
            "SELECT COUNT(post_id) FROM {}postmeta
             WHERE meta_key = ?2
               AND meta_value LIKE ?1 ESCAPE '\\'",
            self.prefix
        );
        self.count(
            &sql,
            pattern,
            params![pattern.as_sql(), ContentScope::LAYOUT_META_KEY],
        )
    }

    /// Basenames of every active plugin: the site's `active_plugins` option,
    /// plus network-activated plugins on multisite installs.
    pub fn active_plugins(&self) -> DbResult<Vec<String>> {
        let conn = self.lock()?;

        let site_sql = format!(
            "SELECT option_value FROM {}options WHERE option_name = ?1 LIMIT 1",
            self.prefix
        );
        let mut active: Vec<String> = match lookup(&conn, &site_sql, "active_plugins")? {
            Some(raw) => php::unserialize(&raw)?
                .array_values()
                .filter_map(PhpValue::as_str)
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        let sitemeta = format!("{}sitemeta", self.prefix);
        if table_exists(&conn, &sitemeta)? {
            let network_sql = format!(
                "SELECT meta_value FROM {sitemeta} WHERE meta_key = ?1 LIMIT 1"
            );
            if let Some(raw) = lookup(&conn, &network_sql, "active_sitewide_plugins")? {
                let network = php::unserialize(&raw)?;
                active.extend(
                    network
                        .array_keys()
                        .filter_map(PhpValue::as_str)
                        .map(str::to_string),
                );
            }
        }

        debug!(count = active.len(), "loaded active plugins");
        Ok(active)
    }

    fn count(&self, sql: &str, pattern: &LikePattern, params: impl Params) -> DbResult<u64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(sql, params, |row| row.get(0))?;
        debug!(pattern = pattern.as_sql(), count, "content query");
        Ok(u64::try_from(count).unwrap_or(0))
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| DbError::LockPoisoned)
    }
}

impl PluginRegistry for WpDatabase {
    fn is_plugin_active(&self, id: &PluginId) -> HostResult<bool> {
        let active = self.active_plugins()?;
        Ok(active.iter().any(|basename| basename == id.as_str()))
    }
}

impl ContentStore for WpDatabase {
    fn count_matches(&self, scope: ContentScope, pattern: &LikePattern) -> HostResult<u64> {
        let count = match scope {
            ContentScope::PublishedContent => self.count_published_matching(pattern)?,
            ContentScope::LayoutData => self.count_layouts_matching(pattern)?,
        };
        Ok(count)
    }
}

fn validate_prefix(prefix: &str) -> DbResult<()> {
    let valid = !prefix.is_empty()
        && prefix
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(DbError::InvalidPrefix(prefix.to_string()))
    }
}

fn lookup(conn: &Connection, sql: &str, key: &str) -> DbResult<Option<String>> {
    Ok(conn
        .query_row(sql, params![key], |row| row.get::<_, String>(0))
        .optional()?)
}

fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

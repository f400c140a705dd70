//! SQLite-backed host capabilities for the Review Ranger usage report.
//!
//! [`WpDatabase`] reads a WordPress-schema database (`{prefix}posts`,
//! `{prefix}postmeta`, `{prefix}options` and, on multisite installs,
//! `{prefix}sitemeta`) and implements both host capabilities on top of it:
//!
//! - plugin activation from the PHP-serialized `active_plugins` and
//!   `active_sitewide_plugins` options
//! - `LIKE` counting queries with bound, escaped patterns
//!
//! Every statement is read-only. The table prefix is the only text spliced
//! into SQL and is validated when the database is opened.

mod database;
mod error;
pub mod php;

pub use database::{DEFAULT_TABLE_PREFIX, WpDatabase};
pub use error::{DbError, DbResult};

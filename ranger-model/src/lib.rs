//! Plugin catalog model for the Review Ranger usage report.
//!
//! Defines the static, hand-curated description of the plugins the report
//! evaluates:
//! - [`PluginId`] — the host platform's stable plugin reference (`dir/file.php`)
//! - [`Category`] — the closed set of heuristic categories
//! - [`PluginKind`] — one variant per category, carrying exactly the fields
//!   that category needs (shortcode tag, layout needle)
//! - [`PluginEntry`] / [`Catalog`] — the ordered, immutable catalog
//!
//! Nothing here talks to the host platform; see `ranger-host` for the
//! capability seams and `ranger-report` for the classification rules.

mod catalog;
mod entry;
mod ids;

pub use catalog::Catalog;
pub use entry::{Category, PluginEntry, PluginKind};
pub use ids::PluginId;

/// Result type alias using the crate's error type.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Errors raised while building catalog entries.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid plugin identifier: {0:?}")]
    InvalidPluginId(String),

    #[error("plugin '{plugin}': {field} must not be empty")]
    EmptyField { plugin: String, field: &'static str },

    #[error("plugin '{plugin}': category '{category}' requires {field}")]
    MissingField {
        plugin: String,
        category: Category,
        field: &'static str,
    },

    #[error("plugin '{plugin}': category '{category}' does not accept {field}")]
    UnexpectedField {
        plugin: String,
        category: Category,
        field: &'static str,
    },

    #[error("duplicate plugin in catalog: {0}")]
    DuplicatePlugin(String),
}

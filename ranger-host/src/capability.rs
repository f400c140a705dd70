use ranger_model::PluginId;

use crate::{HostResult, LikePattern};

/// Which stored records a content query searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentScope {
    /// Raw content of published posts and pages.
    PublishedContent,
    /// Page-builder layout JSON stored as record metadata.
    LayoutData,
}

impl ContentScope {
    /// Metadata key the host stores page-builder layouts under.
    pub const LAYOUT_META_KEY: &'static str = "_elementor_data";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublishedContent => "published-content",
            Self::LayoutData => "layout-data",
        }
    }
}

/// The host's plugin-activation registry.
pub trait PluginRegistry: Send + Sync {
    /// Returns whether `id` is currently enabled. Has no side effects.
    fn is_plugin_active(&self, id: &PluginId) -> HostResult<bool>;
}

/// Read-only counting queries against the host's content store.
pub trait ContentStore: Send + Sync {
    /// Counts records in `scope` whose text contains `pattern`'s needle.
    fn count_matches(&self, scope: ContentScope, pattern: &LikePattern) -> HostResult<u64>;
}

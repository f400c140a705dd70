//! In-memory host implementation.
//!
//! Mirrors the SQL-backed store's scoping rules (published `post`/`page`
//! records for content, the layout meta key for layouts) so report logic can
//! be exercised without a database.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use ranger_model::PluginId;
use tracing::debug;

use crate::{ContentScope, ContentStore, HostResult, LikePattern, PluginRegistry};

/// A stored content record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPost {
    pub post_type: String,
    pub status: String,
    pub content: String,
}

impl StoredPost {
    /// A published record of type `post`.
    pub fn published(content: impl Into<String>) -> Self {
        Self {
            post_type: "post".into(),
            status: "publish".into(),
            content: content.into(),
        }
    }

    fn is_content_bearing(&self) -> bool {
        self.status == "publish" && matches!(self.post_type.as_str(), "post" | "page")
    }
}

/// Plugin registry and content store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    active: HashSet<PluginId>,
    posts: Vec<StoredPost>,
    layouts: Vec<String>,
    queries: AtomicU64,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as active.
    pub fn with_active(mut self, id: PluginId) -> Self {
        self.active.insert(id);
        self
    }

    pub fn with_post(mut self, post: StoredPost) -> Self {
        self.posts.push(post);
        self
    }

    /// Adds a stored page-builder layout payload.
    pub fn with_layout(mut self, layout_json: impl Into<String>) -> Self {
        self.layouts.push(layout_json.into());
        self
    }

    /// Number of queries issued against either capability so far.
    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::Relaxed)
    }
}

impl PluginRegistry for MemoryHost {
    fn is_plugin_active(&self, id: &PluginId) -> HostResult<bool> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        Ok(self.active.contains(id))
    }
}

impl ContentStore for MemoryHost {
    fn count_matches(&self, scope: ContentScope, pattern: &LikePattern) -> HostResult<u64> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        let count = match scope {
            ContentScope::PublishedContent => self
                .posts
                .iter()
                .filter(|post| post.is_content_bearing() && pattern.matches(&post.content))
                .count(),
            ContentScope::LayoutData => self
                .layouts
                .iter()
                .filter(|layout| pattern.matches(layout))
                .count(),
        };
        debug!(scope = scope.as_str(), pattern = pattern.as_sql(), count, "memory content query");
        Ok(count as u64)
    }
}

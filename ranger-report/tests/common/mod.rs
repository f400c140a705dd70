//! Shared fakes for report tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use ranger_host::{
    ContentScope, ContentStore, HostError, HostResult, LikePattern, MemoryHost, PluginRegistry,
    StoredPost,
};
use ranger_model::{Category, PluginEntry, PluginId, PluginKind};

pub fn id(s: &str) -> PluginId {
    PluginId::parse(s).unwrap()
}

pub fn entry(id_str: &str, label: &str, kind: PluginKind) -> PluginEntry {
    PluginEntry::new(id(id_str), label, kind)
}

/// An entry of `category` with whatever fields that category requires.
pub fn entry_for(category: Category) -> PluginEntry {
    let (tag, needle) = match category {
        Category::Shortcode => (Some("gallery-x"), None),
        Category::Elementor => (None, Some("gx-")),
        _ => (None, None),
    };
    PluginEntry::from_parts(
        id(&format!("{}/{}.php", category, category)),
        &format!("Sample {category}"),
        category,
        tag,
        needle,
    )
    .unwrap()
}

/// A host with `n` published posts containing `[tag]`.
pub fn host_with_shortcodes(tag: &str, n: usize) -> MemoryHost {
    (0..n).fold(MemoryHost::new(), |host, i| {
        host.with_post(StoredPost::published(format!("post {i} [{tag}]")))
    })
}

/// Content store whose queries fail when the needle contains `poison`.
pub struct PoisonedStore {
    pub inner: MemoryHost,
    pub poison: String,
    pub calls: AtomicU64,
}

impl PoisonedStore {
    pub fn new(inner: MemoryHost, poison: &str) -> Self {
        Self {
            inner,
            poison: poison.to_string(),
            calls: AtomicU64::new(0),
        }
    }
}

impl ContentStore for PoisonedStore {
    fn count_matches(&self, scope: ContentScope, pattern: &LikePattern) -> HostResult<u64> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if pattern.needle().contains(&self.poison) {
            return Err(HostError::Query("disk I/O error".into()));
        }
        self.inner.count_matches(scope, pattern)
    }
}

/// Registry that fails for one plugin and reports all others active.
pub struct FlakyRegistry {
    pub broken: PluginId,
}

impl PluginRegistry for FlakyRegistry {
    fn is_plugin_active(&self, id: &PluginId) -> HostResult<bool> {
        if *id == self.broken {
            Err(HostError::Unavailable("connection reset".into()))
        } else {
            Ok(true)
        }
    }
}

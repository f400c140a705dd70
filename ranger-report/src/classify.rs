//! Per-category usage heuristics.

use ranger_host::{ContentScope, ContentStore, HostResult, LikePattern};
use ranger_model::{Category, PluginEntry, PluginId, PluginKind};
use tracing::{debug, warn};

const IMAGE_OPTIMIZER_LABEL: &str = "Imagify";
const MAINTENANCE_MODE_LABEL: &str = "Minimal Coming Soon & Maintenance Mode";
const REVIEW_MANUALLY: &str = "Review manually.";

/// Activation state shown in the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginStatus {
    Active,
    Inactive,
    /// The registry lookup failed for this entry.
    Unknown,
}

impl PluginStatus {
    pub fn from_active(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Unknown => "Unknown",
        }
    }
}

/// One rendered line of the report. Built per render, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReportRow {
    pub id: PluginId,
    pub label: String,
    pub category: Category,
    pub status: PluginStatus,
    pub usage: String,
    pub recommendation: String,
}

/// Counts published posts and pages containing the `[tag` shortcode opening.
pub fn count_content_matches(store: &dyn ContentStore, tag: &str) -> HostResult<u64> {
    store.count_matches(ContentScope::PublishedContent, &LikePattern::shortcode(tag))
}

/// Counts stored page-builder layouts containing `needle`.
pub fn count_layout_matches(store: &dyn ContentStore, needle: &str) -> HostResult<u64> {
    store.count_matches(ContentScope::LayoutData, &LikePattern::containing(needle))
}

/// Applies `entry`'s category heuristic and builds its report row.
///
/// Never fails: a content query error becomes an "undetermined" usage text
/// with a manual-review recommendation, so other rows are unaffected.
pub fn classify(
    entry: &PluginEntry,
    status: PluginStatus,
    store: &dyn ContentStore,
) -> UsageReportRow {
    let (usage, recommendation) = match describe(entry, store) {
        Ok(texts) => texts,
        Err(err) => {
            warn!(plugin = %entry.id(), error = %err, "usage query failed");
            (
                format!("Usage could not be determined ({err})."),
                REVIEW_MANUALLY.to_string(),
            )
        }
    };

    UsageReportRow {
        id: entry.id().clone(),
        label: entry.label().to_string(),
        category: entry.category(),
        status,
        usage,
        recommendation,
    }
}

fn describe(entry: &PluginEntry, store: &dyn ContentStore) -> HostResult<(String, String)> {
    let label = entry.label();
    let texts = match entry.kind() {
        PluginKind::Shortcode { tag, layout_needle } => {
            let count = count_content_matches(store, tag)?;
            let mut usage = format!("Found {count} published posts/pages with [{tag}] shortcode.");
            let note = match layout_needle {
                Some(needle) => {
                    let layouts = count_layout_matches(store, needle)?;
                    if layouts > 0 {
                        usage.push_str(&format!(" Also detected in {layouts} Elementor layouts."));
                    }
                    "If usage count is 0, it is likely safe to deactivate. Otherwise forms will disappear."
                        .to_string()
                }
                None => format!(
                    "If usage count is 0, the [{tag}] shortcode is probably not used and the plugin is a good candidate to disable."
                ),
            };
            debug!(plugin = %entry.id(), count, "shortcode usage");
            (usage, note)
        }
        PluginKind::Elementor { needle } => {
            let layouts = count_layout_matches(store, needle)?;
            debug!(plugin = %entry.id(), layouts, "layout usage");
            (
                format!(
                    "Detected {layouts} Elementor layouts using {label} widgets (pattern \"{needle}\")."
                ),
                "If count is 0, plugin might be unused. If >0, disabling will break those sections."
                    .to_string(),
            )
        }
        PluginKind::Addon => {
            let lowered = label.to_lowercase();
            let note = if lowered.contains("rank math") {
                "Deactivating PRO will keep core SEO but remove PRO features (advanced schema, analytics, etc.)."
            } else if lowered.contains("essential addons") {
                "If free Essential Addons widgets are in use but PRO widgets are not, Pro can usually be disabled."
            } else {
                "Check plugin settings to confirm if any PRO-only features are used before disabling."
            };
            fixed(
                "Pro/add-on plugin. Depends on whether its extra features are configured.",
                note,
            )
        }
        PluginKind::Core => fixed(
            "Core data / fields plugin (used by custom templates).",
            "Do NOT disable. Templates that rely on ACF fields will break.",
        ),
        PluginKind::Seo => fixed(
            "Global SEO engine (titles, meta, schema, sitemaps).",
            "Do NOT disable on a production SEO site.",
        ),
        PluginKind::SeoAddon => fixed(
            "Adds extra SEO features on top of Rank Math free.",
            "Not strictly required for basic SEO, but recommended to keep for full functionality.",
        ),
        PluginKind::Performance => {
            let note = if label == IMAGE_OPTIMIZER_LABEL {
                "Safe to deactivate; existing optimised images remain. New uploads will no longer be compressed."
            } else {
                "Deactivating will usually slow the site and change how assets are cached/minified."
            };
            fixed("Site-wide performance/optimisation plugin.", note)
        }
        PluginKind::Tracking => fixed(
            "Likely injecting Analytics / Pixel / GTM codes site-wide.",
            "If deactivated without migrating codes elsewhere, tracking data will stop.",
        ),
        PluginKind::OneOff => fixed(
            "Used only for importing/exporting demo content.",
            "Safe to deactivate on a live site when not actively importing.",
        ),
        PluginKind::Import => fixed(
            "Bulk import tool for posts/listings.",
            "Existing content stays. Only ongoing or scheduled imports require it to stay active.",
        ),
        PluginKind::Helper => {
            let note = if label == MAINTENANCE_MODE_LABEL {
                "Safe to deactivate as long as you do not rely on its maintenance mode right now."
            } else {
                "Safe to deactivate in production; mostly affects backend UX."
            };
            fixed("Editor/onboarding / maintenance helper.", note)
        }
        PluginKind::Unknown => fixed("No automatic heuristic defined.", REVIEW_MANUALLY),
    };
    Ok(texts)
}

fn fixed(usage: &str, note: &str) -> (String, String) {
    (usage.to_string(), note.to_string())
}

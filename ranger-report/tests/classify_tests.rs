mod common;

use common::{PoisonedStore, entry, entry_for, host_with_shortcodes, id};
use pretty_assertions::assert_eq;
use ranger_host::{MemoryHost, StoredPost};
use ranger_model::{Catalog, Category, PluginEntry, PluginKind};
use ranger_report::{PluginStatus, classify, count_content_matches, count_layout_matches};

fn builtin(label: &str) -> PluginEntry {
    Catalog::builtin()
        .iter()
        .find(|e| e.label() == label)
        .cloned()
        .unwrap()
}

#[test]
fn every_category_produces_texts() {
    let host = MemoryHost::new();
    for category in Category::ALL {
        let row = classify(&entry_for(category), PluginStatus::Inactive, &host);
        assert!(!row.usage.is_empty(), "{category} usage");
        assert!(!row.recommendation.is_empty(), "{category} recommendation");
        assert_eq!(row.category, category);
    }
}

#[test]
fn unrecognized_category_falls_back_to_manual_review() {
    let category = Category::from_tag("page-cache-warmer");
    let entry = PluginEntry::from_parts(id("warmer/warmer.php"), "Warmer", category, None, None)
        .unwrap();
    let row = classify(&entry, PluginStatus::Active, &MemoryHost::new());
    assert_eq!(row.usage, "No automatic heuristic defined.");
    assert_eq!(row.recommendation, "Review manually.");
}

#[test]
fn core_plugin_active_says_do_not_disable() {
    let host = MemoryHost::new();
    let row = classify(&builtin("Advanced Custom Fields"), PluginStatus::Active, &host);

    assert_eq!(row.status.label(), "Active");
    assert_eq!(row.usage, "Core data / fields plugin (used by custom templates).");
    assert!(row.recommendation.starts_with("Do NOT disable."));
    assert_eq!(host.query_count(), 0);
}

#[test]
fn shortcode_with_no_matches() {
    let host = MemoryHost::new().with_post(StoredPost::published("nothing to see"));
    let row = classify(&builtin("Easy Table of Contents"), PluginStatus::Active, &host);

    assert_eq!(row.usage, "Found 0 published posts/pages with [ez-toc] shortcode.");
    assert!(row.recommendation.contains("good candidate to disable"));
    assert_eq!(host.query_count(), 1);
}

#[test]
fn forms_plugin_reports_shortcodes_and_layouts() {
    let host = host_with_shortcodes("wpforms id=\"9\"", 3)
        .with_layout(r#"[{"widgetType":"wpforms"}]"#)
        .with_layout(r#"[{"widgetType":"wpforms","form_id":"9"}]"#);
    let row = classify(&builtin("WPForms Lite"), PluginStatus::Active, &host);

    assert!(row.usage.contains("Found 3"));
    assert!(row.usage.contains("Also detected in 2 Elementor layouts."));
    assert!(row.recommendation.contains("forms will disappear"));
    assert_eq!(host.query_count(), 2);
}

#[test]
fn forms_plugin_omits_layout_sentence_when_zero() {
    let host = host_with_shortcodes("wpforms", 1);
    let row = classify(&builtin("WPForms Lite"), PluginStatus::Active, &host);
    assert_eq!(row.usage, "Found 1 published posts/pages with [wpforms] shortcode.");
}

#[test]
fn elementor_pack_counts_layouts() {
    let host = MemoryHost::new()
        .with_layout(r#"[{"widgetType":"eael-post-grid"}]"#)
        .with_layout(r#"[{"widgetType":"eael-countdown"}]"#)
        .with_layout(r#"[{"widgetType":"image"}]"#);
    let row = classify(
        &builtin("Essential Addons for Elementor"),
        PluginStatus::Active,
        &host,
    );
    assert_eq!(
        row.usage,
        "Detected 2 Elementor layouts using Essential Addons for Elementor widgets (pattern \"eael-\")."
    );
    assert!(row.recommendation.contains("disabling will break those sections"));
}

#[test]
fn addon_dispatch_on_label() {
    let host = MemoryHost::new();
    let rank_math = classify(
        &entry("rm-pro/rm.php", "Rank Math Business Add-on", PluginKind::Addon),
        PluginStatus::Active,
        &host,
    );
    assert!(rank_math.recommendation.contains("keep core SEO"));

    let essential = classify(
        &builtin("Essential Addons for Elementor – Pro"),
        PluginStatus::Active,
        &host,
    );
    assert!(essential.recommendation.contains("Pro can usually be disabled"));

    let generic = classify(&builtin("Easy Table of Contents PRO"), PluginStatus::Active, &host);
    assert!(generic.recommendation.starts_with("Check plugin settings"));
    assert_eq!(
        generic.usage,
        "Pro/add-on plugin. Depends on whether its extra features are configured."
    );
}

#[test]
fn performance_dispatch_on_exact_label() {
    let host = MemoryHost::new();
    let imagify = classify(&builtin("Imagify"), PluginStatus::Active, &host);
    assert!(imagify.recommendation.contains("New uploads will no longer be compressed"));

    let rocket = classify(&builtin("WP Rocket"), PluginStatus::Active, &host);
    assert!(rocket.recommendation.contains("slow the site"));

    // Exact match only.
    let lookalike = classify(
        &entry("imagify-x/x.php", "Imagify Extra", PluginKind::Performance),
        PluginStatus::Active,
        &host,
    );
    assert!(lookalike.recommendation.contains("slow the site"));
}

#[test]
fn helper_dispatch_on_exact_label() {
    let host = MemoryHost::new();
    let maintenance = classify(
        &builtin("Minimal Coming Soon & Maintenance Mode"),
        PluginStatus::Inactive,
        &host,
    );
    assert!(maintenance.recommendation.contains("maintenance mode right now"));

    let onboarding = classify(
        &builtin("Extendify WordPress Onboarding and AI Assistant"),
        PluginStatus::Inactive,
        &host,
    );
    assert_eq!(
        onboarding.recommendation,
        "Safe to deactivate in production; mostly affects backend UX."
    );
}

#[test]
fn fixed_categories() {
    let host = MemoryHost::new();
    let cases = [
        ("Rank Math SEO", "Do NOT disable on a production SEO site."),
        (
            "Rank Math SEO PRO",
            "Not strictly required for basic SEO, but recommended to keep for full functionality.",
        ),
        (
            "Tracking Code Manager",
            "If deactivated without migrating codes elsewhere, tracking data will stop.",
        ),
        (
            "WordPress Importer",
            "Safe to deactivate on a live site when not actively importing.",
        ),
        (
            "WP All Import",
            "Existing content stays. Only ongoing or scheduled imports require it to stay active.",
        ),
    ];
    for (label, expected) in cases {
        let row = classify(&builtin(label), PluginStatus::Active, &host);
        assert_eq!(row.recommendation, expected, "{label}");
    }
    assert_eq!(host.query_count(), 0);
}

#[test]
fn query_failure_is_reported_in_row() {
    let store = PoisonedStore::new(MemoryHost::new(), "ez-toc");
    let row = classify(&builtin("Easy Table of Contents"), PluginStatus::Active, &store);

    assert!(row.usage.starts_with("Usage could not be determined"));
    assert!(row.usage.contains("disk I/O error"));
    assert_eq!(row.recommendation, "Review manually.");
    assert_eq!(row.status, PluginStatus::Active);
}

#[test]
fn count_helpers_scope_queries() {
    let host = MemoryHost::new()
        .with_post(StoredPost::published("[gallery-x]"))
        .with_layout("gallery-x");
    assert_eq!(count_content_matches(&host, "gallery-x").unwrap(), 1);
    assert_eq!(count_layout_matches(&host, "gallery-x").unwrap(), 1);
    assert_eq!(count_layout_matches(&host, "[gallery-x").unwrap(), 0);
}

#[test]
fn wildcard_in_tag_matches_literally() {
    let host = MemoryHost::new()
        .with_post(StoredPost::published("[formXone]"))
        .with_post(StoredPost::published("[form_one]"));
    assert_eq!(count_content_matches(&host, "form_one").unwrap(), 1);
}

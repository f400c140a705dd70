use std::collections::HashSet;

use pretty_assertions::assert_eq;
use ranger_model::{Catalog, Category, ModelError, PluginEntry, PluginId, PluginKind};

#[test]
fn builtin_has_fifteen_unique_entries() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 15);

    let ids: HashSet<_> = catalog.iter().map(|e| e.id().clone()).collect();
    assert_eq!(ids.len(), catalog.len());

    // Rebuilding through the validating constructor must succeed.
    assert!(Catalog::new(catalog.entries().to_vec()).is_ok());
}

#[test]
fn builtin_ids_are_valid_basenames() {
    for entry in &Catalog::builtin() {
        assert!(PluginId::parse(entry.id().as_str()).is_ok(), "{}", entry.id());
    }
}

#[test]
fn builtin_declaration_order() {
    let labels: Vec<_> = Catalog::builtin().iter().map(|e| e.label().to_string()).collect();
    assert_eq!(labels.first().map(String::as_str), Some("Advanced Custom Fields"));
    assert_eq!(labels.last().map(String::as_str), Some("WPForms Lite"));
    assert_eq!(labels[8], "Rank Math SEO");
}

#[test]
fn builtin_fields_follow_category() {
    for entry in &Catalog::builtin() {
        match entry.category() {
            Category::Shortcode => assert!(entry.shortcode_tag().is_some()),
            Category::Elementor => {
                assert!(entry.shortcode_tag().is_none());
                assert!(entry.match_needle().is_some());
            }
            _ => {
                assert!(entry.shortcode_tag().is_none());
                assert!(entry.match_needle().is_none());
            }
        }
    }
}

#[test]
fn builtin_only_forms_plugin_has_layout_needle_on_shortcode() {
    let with_needle: Vec<_> = Catalog::builtin()
        .iter()
        .filter(|e| e.category() == Category::Shortcode && e.match_needle().is_some())
        .map(|e| e.label().to_string())
        .collect();
    assert_eq!(with_needle, vec!["WPForms Lite".to_string()]);
}

#[test]
fn new_rejects_duplicates() {
    let id = PluginId::parse("wp-rocket/wp-rocket.php").unwrap();
    let entries = vec![
        PluginEntry::new(id.clone(), "WP Rocket", PluginKind::Performance),
        PluginEntry::new(id, "WP Rocket again", PluginKind::Helper),
    ];
    let err = Catalog::new(entries).unwrap_err();
    assert!(matches!(err, ModelError::DuplicatePlugin(ref p) if p == "wp-rocket/wp-rocket.php"));
}

#[test]
fn get_finds_entry() {
    let catalog = Catalog::builtin();
    let id = PluginId::parse("imagify/imagify.php").unwrap();
    assert_eq!(catalog.get(&id).map(|e| e.label()), Some("Imagify"));

    let missing = PluginId::parse("hello.php").unwrap();
    assert!(catalog.get(&missing).is_none());
}

#[test]
fn empty_catalog_is_allowed() {
    let catalog = Catalog::new(Vec::new()).unwrap();
    assert!(catalog.is_empty());
}

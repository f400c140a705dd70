//! The ordered, immutable plugin catalog.

use std::collections::HashSet;

use crate::{ModelError, PluginEntry, PluginId, PluginKind};

/// An ordered list of catalog entries with unique identifiers.
///
/// Declaration order is display order; the catalog never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<PluginEntry>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate plugin identifiers.
    pub fn new(entries: Vec<PluginEntry>) -> Result<Self, ModelError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(ModelError::DuplicatePlugin(entry.id().to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// The curated list of third-party plugins the report evaluates.
    pub fn builtin() -> Self {
        fn entry(id: &str, label: &str, kind: PluginKind) -> PluginEntry {
            PluginEntry::new(PluginId(id.to_string()), label, kind)
        }

        Self {
            entries: vec![
                entry(
                    "advanced-custom-fields/acf.php",
                    "Advanced Custom Fields",
                    PluginKind::Core,
                ),
                entry(
                    "easy-table-of-contents/easy-table-of-contents.php",
                    "Easy Table of Contents",
                    PluginKind::shortcode("ez-toc"),
                ),
                entry(
                    "easy-table-of-contents-pro/easy-table-of-contents-pro.php",
                    "Easy Table of Contents PRO",
                    PluginKind::Addon,
                ),
                entry(
                    "essential-addons-for-elementor-lite/essential_adons_elementor.php",
                    "Essential Addons for Elementor",
                    PluginKind::elementor("eael-"),
                ),
                entry(
                    "essential-addons-elementor/essential-addons-elementor.php",
                    "Essential Addons for Elementor – Pro",
                    PluginKind::Addon,
                ),
                entry(
                    "extendify/extendify.php",
                    "Extendify WordPress Onboarding and AI Assistant",
                    PluginKind::Helper,
                ),
                entry("imagify/imagify.php", "Imagify", PluginKind::Performance),
                entry(
                    "minimal-coming-soon-maintenance-mode/minimal-coming-soon-maintenance-mode.php",
                    "Minimal Coming Soon & Maintenance Mode",
                    PluginKind::Helper,
                ),
                entry("seo-by-rank-math/rank-math.php", "Rank Math SEO", PluginKind::Seo),
                entry(
                    "seo-by-rank-math-pro/rank-math-pro.php",
                    "Rank Math SEO PRO",
                    PluginKind::SeoAddon,
                ),
                entry(
                    "tracking-code-manager/tracking-code-manager.php",
                    "Tracking Code Manager",
                    PluginKind::Tracking,
                ),
                entry(
                    "wordpress-importer/wordpress-importer.php",
                    "WordPress Importer",
                    PluginKind::OneOff,
                ),
                entry("wp-all-import/plugin.php", "WP All Import", PluginKind::Import),
                entry("wp-rocket/wp-rocket.php", "WP Rocket", PluginKind::Performance),
                entry(
                    "wpforms-lite/wpforms.php",
                    "WPForms Lite",
                    PluginKind::shortcode_with_layouts("wpforms", "wpforms"),
                ),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[PluginEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by identifier.
    pub fn get(&self, id: &PluginId) -> Option<&PluginEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PluginEntry;
    type IntoIter = std::slice::Iter<'a, PluginEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

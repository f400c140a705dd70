use std::fmt;

use crate::{ModelError, PluginId};

/// Heuristic category of a catalog entry.
///
/// The set is closed; tags that do not name a category map to
/// [`Category::Unknown`] through [`Category::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Core,
    Shortcode,
    Addon,
    Elementor,
    Seo,
    SeoAddon,
    Performance,
    Tracking,
    OneOff,
    Import,
    Helper,
    Unknown,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 12] = [
        Self::Core,
        Self::Shortcode,
        Self::Addon,
        Self::Elementor,
        Self::Seo,
        Self::SeoAddon,
        Self::Performance,
        Self::Tracking,
        Self::OneOff,
        Self::Import,
        Self::Helper,
        Self::Unknown,
    ];

    /// Returns the kebab-case tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Shortcode => "shortcode",
            Self::Addon => "addon",
            Self::Elementor => "elementor",
            Self::Seo => "seo",
            Self::SeoAddon => "seo-addon",
            Self::Performance => "performance",
            Self::Tracking => "tracking",
            Self::OneOff => "one-off",
            Self::Import => "import",
            Self::Helper => "helper",
            Self::Unknown => "unknown",
        }
    }

    /// Maps a kebab-case tag to its category. Unrecognized tags are `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == tag)
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the report knows about a plugin, one variant per [`Category`].
///
/// Only the variants whose heuristic needs extra data carry it, so an entry
/// can never hold a shortcode tag or match needle its category ignores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginKind {
    Core,
    /// Counted by `[tag` occurrences in published content. `layout_needle`
    /// additionally counts page-builder layouts (the forms plugin).
    Shortcode {
        tag: String,
        layout_needle: Option<String>,
    },
    Addon,
    /// Counted by `needle` occurrences in stored page-builder layout JSON.
    Elementor {
        needle: String,
    },
    Seo,
    SeoAddon,
    Performance,
    Tracking,
    OneOff,
    Import,
    Helper,
    Unknown,
}

impl PluginKind {
    /// Shorthand for a shortcode plugin with no layout needle.
    pub fn shortcode(tag: impl Into<String>) -> Self {
        Self::Shortcode {
            tag: tag.into(),
            layout_needle: None,
        }
    }

    /// Shorthand for a shortcode plugin that also embeds page-builder widgets.
    pub fn shortcode_with_layouts(tag: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::Shortcode {
            tag: tag.into(),
            layout_needle: Some(needle.into()),
        }
    }

    /// Shorthand for a page-builder widget pack.
    pub fn elementor(needle: impl Into<String>) -> Self {
        Self::Elementor {
            needle: needle.into(),
        }
    }

    /// Returns the category this kind belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Core => Category::Core,
            Self::Shortcode { .. } => Category::Shortcode,
            Self::Addon => Category::Addon,
            Self::Elementor { .. } => Category::Elementor,
            Self::Seo => Category::Seo,
            Self::SeoAddon => Category::SeoAddon,
            Self::Performance => Category::Performance,
            Self::Tracking => Category::Tracking,
            Self::OneOff => Category::OneOff,
            Self::Import => Category::Import,
            Self::Helper => Category::Helper,
            Self::Unknown => Category::Unknown,
        }
    }

    fn fieldless(category: Category) -> Self {
        match category {
            Category::Core => Self::Core,
            Category::Addon => Self::Addon,
            Category::Seo => Self::Seo,
            Category::SeoAddon => Self::SeoAddon,
            Category::Performance => Self::Performance,
            Category::Tracking => Self::Tracking,
            Category::OneOff => Self::OneOff,
            Category::Import => Self::Import,
            Category::Helper => Self::Helper,
            Category::Shortcode | Category::Elementor | Category::Unknown => Self::Unknown,
        }
    }
}

/// A single curated catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEntry {
    id: PluginId,
    label: String,
    kind: PluginKind,
}

impl PluginEntry {
    /// Creates an entry from an already-typed kind.
    pub fn new(id: PluginId, label: impl Into<String>, kind: PluginKind) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
        }
    }

    /// Builds an entry from flat fields, the shape catalog data arrives in
    /// outside of Rust code.
    ///
    /// `shortcode_tag` is required for `shortcode` and rejected elsewhere.
    /// `match_needle` is required for `elementor`, optional for `shortcode`,
    /// and rejected elsewhere. Empty labels, tags and needles are rejected.
    pub fn from_parts(
        id: PluginId,
        label: &str,
        category: Category,
        shortcode_tag: Option<&str>,
        match_needle: Option<&str>,
    ) -> Result<Self, ModelError> {
        let plugin = id.to_string();
        let require_non_empty = |field: &'static str, value: &str| {
            if value.trim().is_empty() {
                Err(ModelError::EmptyField {
                    plugin: plugin.clone(),
                    field,
                })
            } else {
                Ok(value.to_string())
            }
        };
        let missing = |field| ModelError::MissingField {
            plugin: plugin.clone(),
            category,
            field,
        };
        let unexpected = |field| ModelError::UnexpectedField {
            plugin: plugin.clone(),
            category,
            field,
        };

        let label = require_non_empty("label", label)?;

        let kind = match category {
            Category::Shortcode => {
                let tag = shortcode_tag.ok_or_else(|| missing("a shortcode tag"))?;
                let tag = require_non_empty("shortcode tag", tag)?;
                let layout_needle = match match_needle {
                    Some(needle) => Some(require_non_empty("match needle", needle)?),
                    None => None,
                };
                PluginKind::Shortcode { tag, layout_needle }
            }
            Category::Elementor => {
                if shortcode_tag.is_some() {
                    return Err(unexpected("a shortcode tag"));
                }
                let needle = match_needle.ok_or_else(|| missing("a match needle"))?;
                PluginKind::Elementor {
                    needle: require_non_empty("match needle", needle)?,
                }
            }
            other => {
                if shortcode_tag.is_some() {
                    return Err(unexpected("a shortcode tag"));
                }
                if match_needle.is_some() {
                    return Err(unexpected("a match needle"));
                }
                PluginKind::fieldless(other)
            }
        };

        Ok(Self { id, label, kind })
    }

    pub fn id(&self) -> &PluginId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &PluginKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// The shortcode tag, present only for `shortcode` entries.
    pub fn shortcode_tag(&self) -> Option<&str> {
        match &self.kind {
            PluginKind::Shortcode { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// The layout-JSON needle, present for `elementor` entries and for
    /// `shortcode` entries that also ship page-builder widgets.
    pub fn match_needle(&self) -> Option<&str> {
        match &self.kind {
            PluginKind::Shortcode { layout_needle, .. } => layout_needle.as_deref(),
            PluginKind::Elementor { needle } => Some(needle),
            _ => None,
        }
    }
}

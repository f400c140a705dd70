//! Escaped `LIKE` patterns.
//!
//! A search literal is always matched as plain text: `%`, `_` and the escape
//! character itself are prefixed with [`LIKE_ESCAPE`], and SQL backends must
//! pair the pattern with `ESCAPE '\'`.

/// Escape character used in every generated pattern.
pub const LIKE_ESCAPE: char = '\\';

/// Escapes `LIKE` operators in `literal` so it matches only itself.
pub fn escape_like(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    for ch in literal.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// A wildcard-wrapped, escaped substring pattern.
///
/// The only way to obtain one is through the constructors below, so a
/// [`crate::ContentStore`] can never receive an unescaped needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikePattern {
    needle: String,
    sql: String,
}

impl LikePattern {
    /// Matches any text containing `literal`.
    pub fn containing(literal: &str) -> Self {
        Self {
            needle: literal.to_string(),
            sql: format!("%{}%", escape_like(literal)),
        }
    }

    /// Matches any text containing the opening of the `[tag` shortcode.
    pub fn shortcode(tag: &str) -> Self {
        Self::containing(&format!("[{tag}"))
    }

    /// The literal text being searched for.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// The escaped pattern, ready to bind to `LIKE ?1 ESCAPE '\'`.
    pub fn as_sql(&self) -> &str {
        &self.sql
    }

    /// Evaluates the pattern against `haystack` with `LIKE` semantics under a
    /// case-insensitive collation: a literal, ASCII case-insensitive
    /// substring test.
    pub fn matches(&self, haystack: &str) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let needle = self.needle.to_ascii_lowercase();
        haystack.to_ascii_lowercase().contains(&needle)
    }
}

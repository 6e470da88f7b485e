//! Parser configuration.

use serde::Deserialize;

/// Options controlling how strictly a schema document is read.
///
/// Deserializable so embedders can keep them in a config file:
///
/// ```toml
/// reject-duplicate-keywords = true
/// max-depth = 64
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SchemaParseOptions {
    /// Report a keyword repeated within one schema object and ignore the
    /// repeat. When false the last occurrence wins silently.
    pub reject_duplicate_keywords: bool,

    /// Maximum number of nested parse contexts. Deeper sub-schemas are
    /// reported and skipped.
    pub max_depth: usize,
}

impl Default for SchemaParseOptions {
    fn default() -> Self {
        Self {
            reject_duplicate_keywords: false,
            max_depth: 128,
        }
    }
}

impl SchemaParseOptions {
    /// Default options with duplicate keyword rejection turned on.
    pub fn strict() -> Self {
        Self {
            reject_duplicate_keywords: true,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

//! Identifier newtypes with smart constructors.

use std::fmt;

/// Identifier of an article. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    /// Smart constructor: validates non-empty, non-whitespace id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidArticleId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidArticleId::Empty);
        }
        Ok(Self(raw))
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Why an article id was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArticleId {
    /// Empty or whitespace-only.
    #[error("Article ID cannot be empty")]
    Empty,
}

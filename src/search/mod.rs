//! In-document text search.
//!
//! Matching runs over the plain-text projection of the article content:
//! case-sensitive literal substring search, non-overlapping, scanning on from
//! the end of each match. Offsets are byte offsets into the projection.

pub mod decorations;

pub use decorations::{Decoration, DecorationKind, SearchDecorations};

use crate::markup::MarkupProjector;
use std::ops::Range;
use tracing::debug;

// ===== MatchSpan =====

/// Half-open `[start, end)` byte range into the plain-text projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    /// First byte.
    pub start: usize,
    /// One past the last byte.
    pub end: usize,
}

impl MatchSpan {
    /// Span over `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Zero-length span.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// As a slicing range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether `offset` falls inside.
    pub fn contains(&self, offset: usize) -> bool {
        self.range().contains(&offset)
    }
}

/// Find every non-overlapping occurrence of `query` in `projection`.
///
/// Spans come back sorted by start. An empty query matches nothing.
pub fn find_matches(projection: &str, query: &str) -> Vec<MatchSpan> {
    if query.is_empty() {
        return Vec::new();
    }
    projection
        .match_indices(query)
        .map(|(start, found)| MatchSpan::new(start, start + found.len()))
        .collect()
}

/// Clamp a cursor into `[0, count - 1]`, or 0 when there is nothing to point at.
pub fn clamp_position(position: usize, count: usize) -> usize {
    position.min(count.saturating_sub(1))
}

// ===== SearchResults =====

/// Ordered match spans plus the cursor of the focused match.
///
/// The cursor is always within `[0, len - 1]`, and 0 when there are no spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    spans: Vec<MatchSpan>,
    position: usize,
}

impl SearchResults {
    /// Build results, keeping `previous` if it still points at a span.
    pub fn with_retained_position(spans: Vec<MatchSpan>, previous: usize) -> Self {
        let position = clamp_position(previous, spans.len());
        Self { spans, position }
    }

    /// Matches in document order.
    pub fn spans(&self) -> &[MatchSpan] {
        &self.spans
    }

    /// Cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// No matches.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The focused span, if any.
    pub fn current(&self) -> Option<MatchSpan> {
        self.spans.get(self.position).copied()
    }

    /// Move focus to the previous match, stopping at the first one.
    pub fn navigate_up(&mut self) -> usize {
        self.position = self.position.saturating_sub(1);
        self.position
    }

    /// Move focus to the next match, stopping at the last one.
    pub fn navigate_down(&mut self) -> usize {
        self.position = clamp_position(self.position.saturating_add(1), self.spans.len());
        self.position
    }
}

// ===== ProjectionCache =====

/// Plain-text projection of the current content, computed once per content value.
#[derive(Debug, Clone, Default)]
pub struct ProjectionCache {
    source: Option<String>,
    projection: String,
}

impl ProjectionCache {
    /// Re-strip `markup` if it differs from the cached content.
    /// Returns whether the projection was recomputed.
    pub fn update(&mut self, markup: &str, projector: &dyn MarkupProjector) -> bool {
        if self.source.as_deref() == Some(markup) {
            return false;
        }
        self.projection = projector.strip(markup);
        self.source = Some(markup.to_string());
        debug!(
            markup_len = markup.len(),
            projection_len = self.projection.len(),
            "Content projected"
        );
        true
    }

    /// Projection of the last content seen, empty before any content.
    pub fn current(&self) -> &str {
        &self.projection
    }

    /// Whether any content was seen.
    pub fn has_content(&self) -> bool {
        self.source.is_some()
    }
}

// ===== SearchIndexer =====

/// Search over the projection of the current content with a navigable cursor.
#[derive(Debug, Clone, Default)]
pub struct SearchIndexer {
    cache: ProjectionCache,
    query: Option<String>,
    results: SearchResults,
}

impl SearchIndexer {
    /// Indexer with no content and no query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed new content. When it differs from the cached one the projection
    /// is recomputed and the active query re-run, keeping the cursor where
    /// possible. Returns whether the projection changed.
    pub fn set_content(&mut self, markup: &str, projector: &dyn MarkupProjector) -> bool {
        if !self.cache.update(markup, projector) {
            return false;
        }
        if let Some(query) = self.query.clone() {
            self.search(&query);
        }
        true
    }

    /// Run `query` against the current projection.
    pub fn search(&mut self, query: &str) -> &SearchResults {
        let position = self.results.position();
        self.search_at(query, position)
    }

    /// Run `query` with the cursor seeded at `position` (clamped).
    pub fn search_at(&mut self, query: &str, position: usize) -> &SearchResults {
        let spans = find_matches(self.cache.current(), query);
        self.results = SearchResults::with_retained_position(spans, position);
        self.query = Some(query.to_string());
        debug!(
            query_len = query.len(),
            matches = self.results.len(),
            position = self.results.position(),
            "Search executed"
        );
        &self.results
    }

    /// See [`SearchResults::navigate_up`].
    pub fn navigate_up(&mut self) -> usize {
        self.results.navigate_up()
    }

    /// See [`SearchResults::navigate_down`].
    pub fn navigate_down(&mut self) -> usize {
        self.results.navigate_down()
    }

    /// Drop query and spans; the projection stays cached.
    pub fn clear(&mut self) {
        self.query = None;
        self.results = SearchResults::default();
    }

    /// Results of the last query.
    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Active query.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Plain-text projection being searched.
    pub fn projection(&self) -> &str {
        self.cache.current()
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;

//! Highlight decorations for search matches.
//!
//! Decorations are never diffed: every search-state change clears the whole
//! set and reapplies it from the current spans and cursor.

use super::MatchSpan;

/// What a decoration marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationKind {
    /// Every span matching the query.
    Match,
    /// The span under the cursor, layered on top of its match decoration.
    Focus,
}

/// One highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    /// Projection range covered.
    pub span: MatchSpan,
    /// Match or focus.
    pub kind: DecorationKind,
}

/// The applied decoration set for one content view, plus the selection
/// anchor the view should scroll to.
///
/// Match decorations come first, in span order, and the focus decoration,
/// if any, is last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDecorations {
    decorations: Vec<Decoration>,
    selection: Option<usize>,
}

impl SearchDecorations {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every match and focus decoration and the selection.
    pub fn clear(&mut self) {
        self.decorations.clear();
        self.selection = None;
    }

    /// Clear, then decorate every span and focus the one at `position`.
    ///
    /// `spans` must be sorted and non-overlapping, as [`find_matches`]
    /// returns them. A `position` past the end leaves the matches decorated
    /// but nothing focused.
    ///
    /// [`find_matches`]: super::find_matches
    pub fn apply(&mut self, spans: &[MatchSpan], position: usize) {
        self.clear();
        self.decorations.extend(spans.iter().map(|&span| Decoration {
            span,
            kind: DecorationKind::Match,
        }));
        if let Some(&focused) = spans.get(position) {
            self.decorations.push(Decoration {
                span: focused,
                kind: DecorationKind::Focus,
            });
            self.selection = Some(focused.start);
        }
    }

    /// Every decoration, matches first.
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Match decorations only, sorted by span start.
    pub fn matches(&self) -> &[Decoration] {
        let end = self
            .decorations
            .partition_point(|d| d.kind == DecorationKind::Match);
        &self.decorations[..end]
    }

    /// Number of match decorations.
    pub fn match_count(&self) -> usize {
        self.matches().len()
    }

    /// The focused span, if any.
    pub fn focus(&self) -> Option<MatchSpan> {
        self.decorations
            .last()
            .filter(|d| d.kind == DecorationKind::Focus)
            .map(|d| d.span)
    }

    /// Offset the view should select and scroll to.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Whether nothing is decorated.
    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// Strongest decoration covering `offset`. Focus wins over match.
    pub fn kind_at(&self, offset: usize) -> Option<DecorationKind> {
        if self.focus().is_some_and(|focus| focus.contains(offset)) {
            return Some(DecorationKind::Focus);
        }
        let matches = self.matches();
        let index = matches.partition_point(|d| d.span.end <= offset);
        matches
            .get(index)
            .filter(|d| d.span.contains(offset))
            .map(|_| DecorationKind::Match)
    }
}

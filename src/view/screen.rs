//! Concrete widget model of the article screen.
//!
//! Render actions from [`ArticleBinding`](super::ArticleBinding) mutate this
//! struct; drawing reads it. Nothing here knows about snapshots.

use crate::markup::{MarkdownProjector, RenderedContent};
use crate::search::{MatchSpan, SearchDecorations};

/// Placeholder shown for title and subtitle until data arrives.
pub const LOADING_TEXT: &str = "loading";

/// Logo shown when the article has no category icon.
pub const LOGO_PLACEHOLDER: &str = "◆";

/// State of every widget on the article screen.
#[derive(Debug, Clone)]
pub struct ArticleScreen {
    /// Toolbar title.
    pub title: String,
    /// Toolbar subtitle (category).
    pub subtitle: String,
    /// Toolbar logo glyph.
    pub logo: String,

    // Bottom bar toggles
    /// Like button checked.
    pub like_checked: bool,
    /// Bookmark button checked.
    pub bookmark_checked: bool,
    /// Settings button checked.
    pub settings_checked: bool,

    // Submenu
    /// Submenu shown.
    pub submenu_open: bool,
    /// Big text selected.
    pub text_up_checked: bool,
    /// Normal text selected.
    pub text_down_checked: bool,
    /// Dark mode switch on.
    pub dark_mode_checked: bool,

    // Search bar
    /// Bar shows search controls instead of buttons.
    pub search_bar_visible: bool,
    /// Text in the query input.
    pub search_query_text: String,
    /// Query input has keyboard focus.
    pub search_focused: bool,
    /// Result count shown in the search info.
    pub search_count: usize,
    /// Cursor shown in the search info.
    pub search_position: usize,

    content: RenderedContent,
    decorations: SearchDecorations,
    content_scroll: u16,
    pending_reveal: Option<usize>,
}

impl Default for ArticleScreen {
    fn default() -> Self {
        Self {
            title: LOADING_TEXT.to_string(),
            subtitle: LOADING_TEXT.to_string(),
            logo: LOGO_PLACEHOLDER.to_string(),
            like_checked: false,
            bookmark_checked: false,
            settings_checked: false,
            submenu_open: false,
            text_up_checked: false,
            text_down_checked: true,
            dark_mode_checked: false,
            search_bar_visible: false,
            search_query_text: String::new(),
            search_focused: false,
            search_count: 0,
            search_position: 0,
            content: RenderedContent::default(),
            decorations: SearchDecorations::new(),
            content_scroll: 0,
            pending_reveal: None,
        }
    }
}

impl ArticleScreen {
    /// Screen showing placeholders.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Content =====

    /// Replace the article body. Existing highlights are dropped since their
    /// offsets referred to the old text.
    pub fn set_content(&mut self, markdown: &str) {
        self.content = MarkdownProjector.render(markdown);
        self.decorations.clear();
        let max = self.max_scroll();
        self.content_scroll = self.content_scroll.min(max);
    }

    /// Rendered article body.
    pub fn content(&self) -> &RenderedContent {
        &self.content
    }

    /// Highlights currently applied.
    pub fn decorations(&self) -> &SearchDecorations {
        &self.decorations
    }

    /// Index of the first body line in view.
    pub fn content_scroll(&self) -> u16 {
        self.content_scroll
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.content.lines().len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Scroll the content by `rows`, clamped to the document.
    pub fn scroll_content(&mut self, rows: i32) {
        let next = i32::from(self.content_scroll) + rows;
        let clamped = next.clamp(0, i32::from(self.max_scroll()));
        self.content_scroll = u16::try_from(clamped).unwrap_or(0);
    }

    /// Bring the line holding the selection into view on the next draw.
    ///
    /// `viewport_rows` is only known at draw time, so the reveal is deferred.
    pub fn apply_pending_reveal(&mut self, viewport_rows: u16) {
        if let Some(line) = self.pending_reveal.take() {
            let line = u16::try_from(line).unwrap_or(u16::MAX);
            let top = self.content_scroll;
            let bottom = top.saturating_add(viewport_rows.max(1));
            if line < top || line >= bottom {
                self.content_scroll = line.saturating_sub(viewport_rows / 3).min(self.max_scroll());
            }
        }
    }

    // ===== Search rendering =====

    /// Highlight every result and focus the one at `position`.
    pub fn render_search_result(&mut self, results: &[MatchSpan], position: usize) {
        self.decorations.apply(results, position);
        if let Some(selection) = self.decorations.selection() {
            self.pending_reveal = Some(self.content.line_of_offset(selection));
        }
    }

    /// Drop every highlight.
    pub fn clear_search_result(&mut self) {
        self.decorations.clear();
    }

    /// Update the "n of m" readout.
    pub fn bind_search_info(&mut self, count: usize, position: usize) {
        self.search_count = count;
        self.search_position = position;
    }

    /// Text shown in the search bar next to the query.
    pub fn search_info_text(&self) -> String {
        if self.search_count == 0 {
            "Not found".to_string()
        } else {
            format!("{} of {}", self.search_position + 1, self.search_count)
        }
    }

    // ===== Chrome =====

    /// Swap the bar to search controls.
    pub fn show_search_bar(&mut self) {
        self.search_bar_visible = true;
    }

    /// Swap the bar back to buttons, dropping query focus.
    pub fn hide_search_bar(&mut self) {
        self.search_bar_visible = false;
        self.search_focused = false;
    }

    /// Check one of the two text-size toggles.
    pub fn set_big_text(&mut self, big: bool) {
        self.text_up_checked = big;
        self.text_down_checked = !big;
    }

    /// Big text selected.
    pub fn is_big_text(&self) -> bool {
        self.text_up_checked
    }
}

//! The article screen state snapshot and its saved subset.

use super::article::{AppSettings, ArticlePersonalInfo};
use crate::search::MatchSpan;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of everything the article screen can show.
///
/// The state owner replaces it wholesale on every change; the view only
/// ever diffs consecutive snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleState {
    /// Signed in. Nothing in a local reader sets it.
    pub is_auth: bool,
    /// Body not loaded yet.
    pub is_loading_content: bool,
    /// Reviews not loaded yet.
    pub is_loading_reviews: bool,
    /// Liked by the reader.
    pub is_like: bool,
    /// Bookmarked by the reader.
    pub is_bookmark: bool,
    /// Settings submenu open.
    pub is_show_menu: bool,
    /// Large body text.
    pub is_big_text: bool,
    /// Dark palette.
    pub is_dark_mode: bool,
    /// Search mode.
    pub is_search: bool,
    /// Last query run, kept after leaving search mode.
    pub search_query: Option<String>,
    /// Match spans into the plain-text projection of `content`.
    pub search_results: Vec<MatchSpan>,
    /// Cursor into `search_results`; 0 when there are none.
    pub search_position: usize,
    /// Link handed to the share action.
    pub share_link: Option<String>,
    /// Article headline.
    pub title: Option<String>,
    /// Article section.
    pub category: Option<String>,
    /// Section glyph.
    pub category_icon: Option<String>,
    /// Formatted publication date.
    pub date: Option<String>,
    /// Byline.
    pub author: Option<String>,
    /// Poster image reference.
    pub poster: Option<String>,
    /// Article body as markdown.
    pub content: Option<String>,
    /// Review texts.
    pub reviews: Vec<String>,
}

impl Default for ArticleState {
    fn default() -> Self {
        Self {
            is_auth: false,
            is_loading_content: true,
            is_loading_reviews: true,
            is_like: false,
            is_bookmark: false,
            is_show_menu: false,
            is_big_text: false,
            is_dark_mode: false,
            is_search: false,
            search_query: None,
            search_results: Vec::new(),
            search_position: 0,
            share_link: None,
            title: None,
            category: None,
            category_icon: None,
            date: None,
            author: None,
            poster: None,
            content: None,
            reviews: Vec::new(),
        }
    }
}

impl ArticleState {
    /// Settings part of the snapshot.
    pub fn to_app_settings(&self) -> AppSettings {
        AppSettings {
            is_dark_mode: self.is_dark_mode,
            is_big_text: self.is_big_text,
        }
    }

    /// Per-article reader flags.
    pub fn to_personal_info(&self) -> ArticlePersonalInfo {
        ArticlePersonalInfo {
            is_like: self.is_like,
            is_bookmark: self.is_bookmark,
        }
    }

    /// Copy the transient search flags into `saved`.
    pub fn save(&self, saved: &mut SavedUiState) {
        saved.is_search = self.is_search;
        saved.search_query = self.search_query.clone();
        saved.search_position = self.search_position;
    }

    /// State with the transient search flags taken from `saved`.
    ///
    /// Results are left empty; they are recomputed from the query.
    pub fn restore(&self, saved: &SavedUiState) -> Self {
        Self {
            is_search: saved.is_search,
            search_query: saved.search_query.clone(),
            search_position: saved.search_position,
            search_results: Vec::new(),
            ..self.clone()
        }
    }
}

/// Transient UI flags kept across a detach/reattach cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedUiState {
    /// Search mode was on.
    pub is_search: bool,
    /// Query to run again.
    pub search_query: Option<String>,
    /// Cursor, clamped once results exist.
    pub search_position: usize,
    /// Query input had keyboard focus.
    pub is_focused_search: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_loading() {
        let state = ArticleState::default();

        assert!(state.is_loading_content);
        assert!(state.is_loading_reviews);
        assert!(!state.is_search);
    }

    #[test]
    fn save_then_restore_keeps_search_flags_only() {
        let state = ArticleState {
            is_search: true,
            search_query: Some("rust".to_string()),
            search_position: 2,
            search_results: vec![MatchSpan::new(0, 4)],
            is_like: true,
            ..ArticleState::default()
        };
        let mut saved = SavedUiState::default();
        state.save(&mut saved);

        let restored = ArticleState::default().restore(&saved);

        assert!(restored.is_search);
        assert_eq!(restored.search_query.as_deref(), Some("rust"));
        assert_eq!(restored.search_position, 2);
        assert!(restored.search_results.is_empty());
        assert!(!restored.is_like);
    }

    #[test]
    fn saved_state_tolerates_missing_keys() {
        let saved: SavedUiState =
            serde_json::from_str(r#"{"is_search":true}"#).expect("valid json");

        assert!(saved.is_search);
        assert_eq!(saved.search_query, None);
        assert!(!saved.is_focused_search);
    }
}

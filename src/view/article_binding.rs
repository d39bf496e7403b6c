//! Declarations binding [`ArticleState`] snapshots to the [`ArticleScreen`].

use super::screen::{ArticleScreen, LOADING_TEXT, LOGO_PLACEHOLDER};
use crate::binding::{BindReport, Field, FieldHandle, StateBinder};
use crate::model::{ArticleState, SavedUiState};
use crate::search::MatchSpan;
use tracing::debug;

/// Name of the derived binding rendering search highlights.
pub const SEARCH_BINDING: &str = "search_results";

/// Every observable field of the article screen plus the search binding.
///
/// `is_focused_search` and `search_query_text` are plain view state: the
/// first is kept across a detach, the second mirrors the query input.
pub struct ArticleBinding {
    binder: StateBinder<ArticleState, ArticleScreen>,
    is_search: FieldHandle<bool>,
    /// Query input has keyboard focus.
    pub is_focused_search: bool,
    /// Query of the last bound snapshot.
    pub search_query_text: String,
}

impl Default for ArticleBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleBinding {
    /// Declare every field and the search binding.
    pub fn new() -> Self {
        let mut binder: StateBinder<ArticleState, ArticleScreen> = StateBinder::new();

        let is_loading_content =
            binder.declare(Field::new("is_loading_content", true, |s: &ArticleState| {
                s.is_loading_content
            }));

        binder.declare(
            Field::new("is_like", false, |s: &ArticleState| s.is_like)
                .on_change(|screen: &mut ArticleScreen, &on| screen.like_checked = on)
                .render_on_attach(),
        );
        binder.declare(
            Field::new("is_bookmark", false, |s: &ArticleState| s.is_bookmark)
                .on_change(|screen: &mut ArticleScreen, &on| screen.bookmark_checked = on)
                .render_on_attach(),
        );
        binder.declare(
            Field::new("is_show_menu", false, |s: &ArticleState| s.is_show_menu)
                .on_change(|screen: &mut ArticleScreen, &open| {
                    screen.settings_checked = open;
                    screen.submenu_open = open;
                })
                .render_on_attach(),
        );

        binder.declare(
            Field::optional("title", LOADING_TEXT.to_string(), |s: &ArticleState| {
                s.title.clone()
            })
            .on_change(|screen: &mut ArticleScreen, title: &String| {
                screen.title.clone_from(title);
            })
            .render_on_attach(),
        );
        binder.declare(
            Field::optional("category", LOADING_TEXT.to_string(), |s: &ArticleState| {
                s.category.clone()
            })
            .on_change(|screen: &mut ArticleScreen, category: &String| {
                screen.subtitle.clone_from(category);
            })
            .render_on_attach(),
        );
        binder.declare(
            Field::optional(
                "category_icon",
                LOGO_PLACEHOLDER.to_string(),
                |s: &ArticleState| s.category_icon.clone(),
            )
            .on_change(|screen: &mut ArticleScreen, icon: &String| {
                screen.logo.clone_from(icon);
            })
            .render_on_attach(),
        );

        binder.declare(
            Field::new("is_big_text", false, |s: &ArticleState| s.is_big_text)
                .on_change(|screen: &mut ArticleScreen, &big| screen.set_big_text(big))
                .render_on_attach(),
        );
        // Switching palettes on attach would repaint for nothing.
        binder.declare(
            Field::new("is_dark_mode", false, |s: &ArticleState| s.is_dark_mode).on_change(
                |screen: &mut ArticleScreen, &dark| {
                    debug!(dark, "Dark mode rendered");
                    screen.dark_mode_checked = dark;
                },
            ),
        );

        let is_search = binder.declare(
            Field::new("is_search", false, |s: &ArticleState| s.is_search).on_change(
                |screen: &mut ArticleScreen, &on| {
                    if on {
                        screen.show_search_bar();
                    } else {
                        screen.hide_search_bar();
                    }
                },
            ),
        );

        let search_results = binder.declare(Field::new(
            "search_results",
            Vec::<MatchSpan>::new(),
            |s: &ArticleState| s.search_results.clone(),
        ));
        let search_position = binder.declare(Field::new(
            "search_position",
            0usize,
            |s: &ArticleState| s.search_position,
        ));

        let content = binder.declare(
            Field::optional("content", String::new(), |s: &ArticleState| s.content.clone())
                .on_change(|screen: &mut ArticleScreen, markdown: &String| {
                    screen.set_content(markdown);
                }),
        );

        // New content drops the screen's highlights, so it re-runs the search
        // binding even when the recomputed spans are unchanged.
        binder.derive5(
            SEARCH_BINDING,
            &is_loading_content,
            &is_search,
            &search_results,
            &search_position,
            &content,
            |screen, &loading, &searching, results, &position, _| {
                if !loading && searching {
                    screen.render_search_result(results, position);
                }
                if !loading && !searching {
                    screen.clear_search_result();
                }
                screen.bind_search_info(results.len(), position);
            },
        );

        Self {
            binder,
            is_search,
            is_focused_search: false,
            search_query_text: String::new(),
        }
    }

    /// Render initial values into a freshly created screen.
    pub fn attach(&mut self, screen: &mut ArticleScreen) {
        self.binder.attach(screen);
    }

    /// Apply one snapshot and mirror its query into the query input.
    pub fn bind(&mut self, state: &ArticleState, screen: &mut ArticleScreen) -> BindReport {
        let report = self.binder.bind(state, screen);
        self.search_query_text = state.search_query.clone().unwrap_or_default();
        screen.search_query_text.clone_from(&self.search_query_text);
        report
    }

    /// Whether the last bound snapshot was in search mode.
    pub fn is_search(&self) -> bool {
        self.is_search.get()
    }

    /// Add the view-only flags to `saved`.
    pub fn save_ui(&self, saved: &mut SavedUiState) {
        saved.is_focused_search = self.is_focused_search;
    }

    /// Take the view-only flags from `saved`.
    pub fn restore_ui(&mut self, saved: &SavedUiState) {
        self.is_focused_search = saved.is_focused_search;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> (ArticleBinding, ArticleScreen) {
        let mut binding = ArticleBinding::new();
        let mut screen = ArticleScreen::new();
        binding.attach(&mut screen);
        (binding, screen)
    }

    fn loaded(content: &str) -> ArticleState {
        ArticleState {
            is_loading_content: false,
            content: Some(content.to_string()),
            ..ArticleState::default()
        }
    }

    #[test]
    fn attach_renders_placeholders_and_empty_search_info() {
        let (_, screen) = attached();

        assert_eq!(screen.title, LOADING_TEXT);
        assert_eq!(screen.search_info_text(), "Not found");
    }

    #[test]
    fn absent_title_keeps_previous_one() {
        let (mut binding, mut screen) = attached();
        let titled = ArticleState {
            title: Some("Ownership".to_string()),
            ..ArticleState::default()
        };
        binding.bind(&titled, &mut screen);

        let report = binding.bind(&ArticleState::default(), &mut screen);

        assert_eq!(screen.title, "Ownership");
        assert!(report.absent.iter().any(|id| id.as_str() == "title"));
    }

    #[test]
    fn menu_flag_opens_submenu_and_checks_settings() {
        let (mut binding, mut screen) = attached();
        let state = ArticleState {
            is_show_menu: true,
            ..ArticleState::default()
        };

        binding.bind(&state, &mut screen);

        assert!(screen.submenu_open);
        assert!(screen.settings_checked);
    }

    #[test]
    fn results_in_search_mode_are_highlighted_after_content() {
        let (mut binding, mut screen) = attached();
        let state = ArticleState {
            is_search: true,
            search_query: Some("ab".to_string()),
            search_results: vec![MatchSpan::new(0, 2), MatchSpan::new(3, 5)],
            search_position: 1,
            ..loaded("ab ab")
        };

        let report = binding.bind(&state, &mut screen);

        assert_eq!(report.derived, vec![SEARCH_BINDING]);
        assert_eq!(screen.decorations().match_count(), 2);
        assert_eq!(screen.decorations().focus(), Some(MatchSpan::new(3, 5)));
        assert_eq!(screen.search_info_text(), "2 of 2");
        assert_eq!(screen.search_query_text, "ab");
    }

    #[test]
    fn content_change_reapplies_unchanged_results() {
        let (mut binding, mut screen) = attached();
        let before = ArticleState {
            is_search: true,
            search_query: Some("ab".to_string()),
            search_results: vec![MatchSpan::new(0, 2)],
            ..loaded("ab xx")
        };
        binding.bind(&before, &mut screen);

        let after = ArticleState {
            content: Some("ab yy".to_string()),
            ..before.clone()
        };
        let report = binding.bind(&after, &mut screen);

        assert_eq!(report.derived, vec![SEARCH_BINDING]);
        assert_eq!(screen.decorations().match_count(), 1);
        assert_eq!(screen.decorations().focus(), Some(MatchSpan::new(0, 2)));
    }

    #[test]
    fn leaving_search_mode_clears_highlights() {
        let (mut binding, mut screen) = attached();
        let searching = ArticleState {
            is_search: true,
            search_results: vec![MatchSpan::new(0, 2)],
            ..loaded("ab")
        };
        binding.bind(&searching, &mut screen);

        let done = ArticleState {
            is_search: false,
            ..loaded("ab")
        };
        binding.bind(&done, &mut screen);

        assert!(screen.decorations().is_empty());
        assert!(!screen.search_bar_visible);
    }

    #[test]
    fn results_while_loading_only_update_search_info() {
        let (mut binding, mut screen) = attached();
        let state = ArticleState {
            is_search: true,
            search_results: vec![MatchSpan::new(0, 2)],
            ..ArticleState::default()
        };

        binding.bind(&state, &mut screen);

        assert!(screen.decorations().is_empty());
        assert_eq!(screen.search_count, 1);
    }

    #[test]
    fn rebinding_same_snapshot_is_noop() {
        let (mut binding, mut screen) = attached();
        let state = loaded("text");
        binding.bind(&state, &mut screen);

        let report = binding.bind(&state, &mut screen);

        assert!(report.is_noop());
    }

    #[test]
    fn focus_flag_survives_save_and_restore() {
        let (mut binding, _) = attached();
        binding.is_focused_search = true;
        let mut saved = SavedUiState::default();
        binding.save_ui(&mut saved);

        let mut restored = ArticleBinding::new();
        restored.restore_ui(&saved);

        assert!(restored.is_focused_search);
    }
}

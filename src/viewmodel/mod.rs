//! Article state owner.
//!
//! [`ArticleViewModel`] holds the current [`ArticleState`] and replaces it
//! wholesale on every intent. Snapshots and notifications are pushed over
//! `std::sync::mpsc` channels; the view drains them on its own loop.
//!
//! Data sources are read through an injected [`ArticleRepository`]. After
//! every repository write the sources are re-read, so the snapshot always
//! mirrors what the repository holds.

pub mod repository;

pub use repository::{ArticleRepository, MemoryArticleRepository};

use crate::markup::MarkupProjector;
use crate::model::{ArticleId, ArticleState, Notify, NotifyAction, SavedUiState};
use crate::search::{SearchIndexer, clamp_position};
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::debug;

/// Shown after liking.
pub const LIKED_MESSAGE: &str = "Mark is liked";
/// Shown after unliking.
pub const UNLIKED_MESSAGE: &str = "Don`t like it anymore";
/// Undo button after unliking.
pub const UNLIKED_UNDO_LABEL: &str = "No, still like it";
/// Shown after bookmarking.
pub const BOOKMARKED_MESSAGE: &str = "Add to bookmarks";
/// Shown after removing a bookmark.
pub const UNBOOKMARKED_MESSAGE: &str = "Remove from bookmarks";
/// Undo button after removing a bookmark.
pub const UNBOOKMARKED_UNDO_LABEL: &str = "Stop removing";
/// Error shown by the share action.
pub const SHARE_MESSAGE: &str = "Share is not implemented";
/// Button of the share error.
pub const SHARE_LABEL: &str = "OK";

/// Owner of the article screen state.
pub struct ArticleViewModel<R> {
    article_id: ArticleId,
    repository: R,
    projector: Box<dyn MarkupProjector>,
    indexer: SearchIndexer,
    state: ArticleState,
    /// Cursor restored before content arrived, seeded into the first search.
    pending_position: Option<usize>,
    subscribers: Vec<Sender<ArticleState>>,
    notifiers: Vec<Sender<Notify>>,
}

impl<R: ArticleRepository> ArticleViewModel<R> {
    /// Create the owner and pull the initial values from every source.
    pub fn new(
        article_id: ArticleId,
        repository: R,
        projector: Box<dyn MarkupProjector>,
    ) -> Self {
        let mut vm = Self {
            article_id,
            repository,
            projector,
            indexer: SearchIndexer::new(),
            state: ArticleState::default(),
            pending_position: None,
            subscribers: Vec::new(),
            notifiers: Vec::new(),
        };
        vm.refresh();
        vm
    }

    /// Current snapshot.
    pub fn state(&self) -> &ArticleState {
        &self.state
    }

    /// Article this owner shows.
    pub fn article_id(&self) -> &ArticleId {
        &self.article_id
    }

    /// Injected repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Receiver of snapshots. The current snapshot is sent right away.
    pub fn subscribe(&mut self) -> Receiver<ArticleState> {
        let (tx, rx) = mpsc::channel();
        if tx.send(self.state.clone()).is_ok() {
            self.subscribers.push(tx);
        }
        rx
    }

    /// Receiver of notifications raised after this call.
    pub fn notifications(&mut self) -> Receiver<Notify> {
        let (tx, rx) = mpsc::channel();
        self.notifiers.push(tx);
        rx
    }

    /// Re-read every data source into the snapshot.
    ///
    /// A source with nothing to offer leaves its fields untouched.
    pub fn refresh(&mut self) {
        let mut next = self.state.clone();

        if let Some(article) = self.repository.find_article(&self.article_id) {
            next.share_link = article.share_link.clone();
            next.title = Some(article.title.clone());
            next.author = article.author.clone();
            next.category = Some(article.category.clone());
            next.category_icon = article.category_icon.clone();
            next.date = Some(article.formatted_date());
            next.poster = article.poster.clone();
        }

        if let Some(content) = self.repository.load_article_content(&self.article_id) {
            let changed = self.indexer.set_content(&content, self.projector.as_ref());
            next.is_loading_content = false;
            next.content = Some(content);
            let query = next.search_query.clone().filter(|_| next.is_search);
            if let (true, Some(query)) = (changed, query) {
                let seed = self.pending_position.take().unwrap_or(next.search_position);
                let results = self.indexer.search_at(&query, seed);
                next.search_results = results.spans().to_vec();
                next.search_position = results.position();
            }
        }

        if let Some(info) = self.repository.find_personal_info(&self.article_id) {
            next.is_like = info.is_like;
            next.is_bookmark = info.is_bookmark;
        }

        let settings = self.repository.app_settings();
        next.is_dark_mode = settings.is_dark_mode;
        next.is_big_text = settings.is_big_text;

        self.replace_state(next);
    }

    // ===== Session intents =====

    /// Open or close the settings submenu.
    pub fn handle_toggle_menu(&mut self) {
        self.update_state(|state| state.is_show_menu = !state.is_show_menu);
    }

    /// Flip dark mode in the stored settings.
    pub fn handle_night_mode(&mut self) {
        let mut settings = self.state.to_app_settings();
        settings.is_dark_mode = !settings.is_dark_mode;
        self.repository.update_settings(settings);
        self.refresh();
    }

    /// Switch to big text.
    pub fn handle_up_text(&mut self) {
        let mut settings = self.state.to_app_settings();
        settings.is_big_text = true;
        self.repository.update_settings(settings);
        self.refresh();
    }

    /// Switch to normal text.
    pub fn handle_down_text(&mut self) {
        let mut settings = self.state.to_app_settings();
        settings.is_big_text = false;
        self.repository.update_settings(settings);
        self.refresh();
    }

    /// Toggle like and notify. Unliking offers an undo.
    pub fn handle_like(&mut self) {
        self.toggle_like();
        let msg = if self.state.is_like {
            Notify::text(LIKED_MESSAGE)
        } else {
            Notify::action(UNLIKED_MESSAGE, UNLIKED_UNDO_LABEL, NotifyAction::ToggleLike)
        };
        self.notify(msg);
    }

    /// Toggle bookmark and notify. Removing offers an undo.
    pub fn handle_bookmark(&mut self) {
        self.toggle_bookmark();
        let msg = if self.state.is_bookmark {
            Notify::text(BOOKMARKED_MESSAGE)
        } else {
            Notify::action(
                UNBOOKMARKED_MESSAGE,
                UNBOOKMARKED_UNDO_LABEL,
                NotifyAction::ToggleBookmark,
            )
        };
        self.notify(msg);
    }

    /// Report that sharing is unavailable.
    pub fn handle_share(&mut self) {
        self.notify(Notify::error(SHARE_MESSAGE, SHARE_LABEL, None));
    }

    /// Run the follow-up carried by an action notification.
    pub fn handle_notify_action(&mut self, action: NotifyAction) {
        debug!(?action, "Notification action");
        match action {
            NotifyAction::ToggleLike => self.toggle_like(),
            NotifyAction::ToggleBookmark => self.toggle_bookmark(),
        }
    }

    // ===== Search intents =====

    /// Search the article for `query`. `None` is ignored.
    pub fn handle_search(&mut self, query: Option<&str>) {
        let Some(query) = query else {
            return;
        };
        let results = self.indexer.search(query).clone();
        self.update_state(|state| {
            state.search_query = Some(query.to_string());
            state.search_results = results.spans().to_vec();
            state.search_position = results.position();
        });
    }

    /// Enter or leave search mode.
    ///
    /// Either way the menu closes and results reset; the query is kept.
    pub fn handle_search_mode(&mut self, is_search: bool) {
        self.indexer.clear();
        self.pending_position = None;
        self.update_state(|state| {
            state.is_search = is_search;
            state.is_show_menu = false;
            state.search_position = 0;
            state.search_results = Vec::new();
        });
    }

    /// Focus the previous match.
    pub fn handle_up_result(&mut self) {
        let position = self.indexer.navigate_up();
        self.update_state(|state| state.search_position = position);
    }

    /// Focus the next match.
    pub fn handle_down_result(&mut self) {
        let position = self.indexer.navigate_down();
        self.update_state(|state| state.search_position = position);
    }

    // ===== Saved state =====

    /// Search flags to keep across a detach. The view adds its own focus flag.
    pub fn save_state(&self) -> SavedUiState {
        let mut saved = SavedUiState::default();
        self.state.save(&mut saved);
        saved
    }

    /// Put saved search flags back, recomputing results from the query.
    pub fn restore_state(&mut self, saved: &SavedUiState) {
        let mut next = self.state.restore(saved);
        self.indexer.clear();
        self.pending_position = None;
        match next.search_query.clone().filter(|_| next.is_search) {
            Some(query) if next.content.is_some() => {
                let results = self.indexer.search_at(&query, next.search_position);
                next.search_results = results.spans().to_vec();
                next.search_position = results.position();
            }
            Some(_) => {
                // No spans yet: the cursor stays at 0 until content arrives.
                self.pending_position = Some(next.search_position);
                next.search_position = clamp_position(next.search_position, 0);
            }
            None => next.search_position = clamp_position(next.search_position, 0),
        }
        debug!(
            is_search = next.is_search,
            matches = next.search_results.len(),
            "UI state restored"
        );
        self.replace_state(next);
    }

    // ===== Internals =====

    fn toggle_like(&mut self) {
        let mut info = self.state.to_personal_info();
        info.is_like = !info.is_like;
        self.repository.update_personal_info(&self.article_id, info);
        self.refresh();
    }

    fn toggle_bookmark(&mut self) {
        let mut info = self.state.to_personal_info();
        info.is_bookmark = !info.is_bookmark;
        self.repository.update_personal_info(&self.article_id, info);
        self.refresh();
    }

    fn update_state(&mut self, update: impl FnOnce(&mut ArticleState)) {
        let mut next = self.state.clone();
        update(&mut next);
        self.replace_state(next);
    }

    fn replace_state(&mut self, next: ArticleState) {
        if next == self.state {
            return;
        }
        self.state = next;
        let state = &self.state;
        self.subscribers.retain(|tx| tx.send(state.clone()).is_ok());
    }

    fn notify(&mut self, notify: Notify) {
        debug!(message = notify.message(), "Notify");
        self.notifiers.retain(|tx| tx.send(notify.clone()).is_ok());
    }
}

#[cfg(test)]
#[path = "viewmodel_tests.rs"]
mod tests;

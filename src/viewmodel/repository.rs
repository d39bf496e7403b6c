//! Article data access.

use crate::model::{AppSettings, ArticleData, ArticleId, ArticlePersonalInfo};
use std::collections::HashMap;

/// Data sources the article state owner reads from and writes to.
///
/// Reads return `None` when the source has nothing for the article yet;
/// the state owner then leaves its snapshot as it was.
pub trait ArticleRepository {
    /// Metadata of `id`, if known.
    fn find_article(&self, id: &ArticleId) -> Option<ArticleData>;

    /// Markdown body of `id`, once it is available.
    fn load_article_content(&self, id: &ArticleId) -> Option<String>;

    /// Reader flags on `id`, if any were stored.
    fn find_personal_info(&self, id: &ArticleId) -> Option<ArticlePersonalInfo>;

    /// Store reader flags on `id`.
    fn update_personal_info(&mut self, id: &ArticleId, info: ArticlePersonalInfo);

    /// Current reader settings.
    fn app_settings(&self) -> AppSettings;

    /// Store reader settings.
    fn update_settings(&mut self, settings: AppSettings);
}

/// In-memory repository.
///
/// Holds whatever articles were inserted; personal info is created on first
/// update.
#[derive(Debug, Clone, Default)]
pub struct MemoryArticleRepository {
    articles: HashMap<ArticleId, ArticleData>,
    contents: HashMap<ArticleId, String>,
    personal: HashMap<ArticleId, ArticlePersonalInfo>,
    settings: AppSettings,
}

impl MemoryArticleRepository {
    /// Empty repository with `settings`.
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Store an article together with its markdown body.
    pub fn insert_article(&mut self, data: ArticleData, content: impl Into<String>) {
        self.contents.insert(data.id.clone(), content.into());
        self.articles.insert(data.id.clone(), data);
    }

    /// Store an article whose body has not arrived yet.
    pub fn insert_article_data(&mut self, data: ArticleData) {
        self.articles.insert(data.id.clone(), data);
    }
}

impl ArticleRepository for MemoryArticleRepository {
    fn find_article(&self, id: &ArticleId) -> Option<ArticleData> {
        self.articles.get(id).cloned()
    }

    fn load_article_content(&self, id: &ArticleId) -> Option<String> {
        self.contents.get(id).cloned()
    }

    fn find_personal_info(&self, id: &ArticleId) -> Option<ArticlePersonalInfo> {
        self.personal.get(id).copied()
    }

    fn update_personal_info(&mut self, id: &ArticleId, info: ArticlePersonalInfo) {
        self.personal.insert(id.clone(), info);
    }

    fn app_settings(&self) -> AppSettings {
        self.settings
    }

    fn update_settings(&mut self, settings: AppSettings) {
        self.settings = settings;
    }
}

//! Markdown article files.

use crate::model::error::ArticleLoadError;
use crate::model::{ArticleData, ArticleId};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Category shown when the file's parent directory gives none.
pub const DEFAULT_CATEGORY: &str = "Articles";

/// Article metadata and markdown body read from one file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedArticle {
    /// Metadata derived from the path and heading.
    pub data: ArticleData,
    /// Markdown body, unchanged.
    pub content: String,
}

/// Read an article file.
///
/// The title is the first `# ` heading, falling back to the file stem. The
/// category is the parent directory name and the date the modification time.
///
/// # Errors
///
/// Returns `ArticleLoadError::FileNotFound` if the path does not exist,
/// `ArticleLoadError::Io` for any other read failure.
pub fn load_article_file(path: impl AsRef<Path>) -> Result<LoadedArticle, ArticleLoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ArticleLoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let io_error = |source| ArticleLoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let content = std::fs::read_to_string(path).map_err(io_error)?;
    let modified = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now());

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("article")
        .to_string();
    let id = ArticleId::new(stem.clone()).map_err(|_| ArticleLoadError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let title = first_heading(&content).unwrap_or(stem);
    let category = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    debug!(path = %path.display(), bytes = content.len(), "Article loaded");

    Ok(LoadedArticle {
        data: ArticleData {
            id,
            title,
            author: None,
            category,
            category_icon: None,
            date: modified,
            share_link: Some(file_link(path)),
            poster: None,
        },
        content,
    })
}

/// Text of the first level-one heading.
fn first_heading(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
}

fn file_link(path: &Path) -> String {
    let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| PathBuf::from(path));
    format!("file://{}", absolute.display())
}

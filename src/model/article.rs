//! Records produced by the article repository.

use super::identifiers::ArticleId;
use chrono::{DateTime, Utc};

/// Display format of publication dates.
pub const DATE_FORMAT: &str = "%H:%M:%S %d.%m.%y";

/// Article metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleData {
    /// Repository key.
    pub id: ArticleId,
    /// Headline shown in the toolbar.
    pub title: String,
    /// Byline, when known.
    pub author: Option<String>,
    /// Section name shown as the toolbar subtitle.
    pub category: String,
    /// Short glyph standing in for the category logo.
    pub category_icon: Option<String>,
    /// Publication time.
    pub date: DateTime<Utc>,
    /// Link handed to the share action.
    pub share_link: Option<String>,
    /// Poster image reference.
    pub poster: Option<String>,
}

impl ArticleData {
    /// Publication date rendered with [`DATE_FORMAT`].
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Per-user flags on one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticlePersonalInfo {
    /// Liked by the reader.
    pub is_like: bool,
    /// Bookmarked by the reader.
    pub is_bookmark: bool,
}

/// Application-wide reader settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppSettings {
    /// Dark palette.
    pub is_dark_mode: bool,
    /// Large body text.
    pub is_big_text: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formatted_date_uses_time_then_day() {
        let data = ArticleData {
            id: ArticleId::new("a").expect("valid id"),
            title: "T".to_string(),
            author: None,
            category: "C".to_string(),
            category_icon: None,
            date: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
            share_link: None,
            poster: None,
        };

        assert_eq!(data.formatted_date(), "14:05:07 09.03.24");
    }
}

//! Article record.

use crate::model::meta::ArticleMeta;
use serde::{Deserialize, Serialize};

/// One article as held by an editing session.
///
/// The `title` lives outside the metadata mapping while editing; it is
/// merged back in under the `title` field when the article crosses the
/// bridge (see [`ArticleMeta::with_title`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Host-assigned identifier; `None` until the first successful save.
    pub id: Option<String>,
    /// Display title.
    pub title: String,
    /// Markdown source.
    pub body: String,
    /// Open metadata mapping (tags, timestamps, host-defined fields).
    pub meta: ArticleMeta,
}

impl Article {
    /// Creates a fresh unsaved draft.
    ///
    /// Starts with empty title/body, an empty tag set, and `date`/`lastmod`
    /// both set to the given timestamp text.
    pub fn draft(now: &str) -> Self {
        let mut meta = ArticleMeta::new();
        meta.set_tags(Vec::new());
        meta.ensure_timestamps(now);
        Self {
            id: None,
            title: String::new(),
            body: String::new(),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Article;

    #[test]
    fn draft_starts_empty_with_matching_timestamps() {
        let article = Article::draft("2024-03-04 05:06:07");
        assert!(article.id.is_none());
        assert!(article.title.is_empty());
        assert!(article.body.is_empty());
        assert!(article.meta.tags().is_empty());
        assert_eq!(article.meta.date(), article.meta.lastmod());
        assert_eq!(article.meta.date(), Some("2024-03-04 05:06:07"));
    }
}

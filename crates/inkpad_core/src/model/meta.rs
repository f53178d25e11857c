//! Article metadata mapping.
//!
//! # Responsibility
//! - Hold front-matter style metadata as an ordered field-name → value map.
//! - Provide typed access to the well-known `tags`/`date`/`lastmod` fields.
//! - Merge and extract the `title` field at the bridge boundary.
//!
//! # Invariants
//! - Unknown fields pass through untouched; this layer never drops them.
//! - Field iteration order is deterministic (sorted by field name).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Title is stored as a regular metadata field on the wire.
pub const FIELD_TITLE: &str = "title";
/// Tag labels, serialized as an array of strings.
pub const FIELD_TAGS: &str = "tags";
/// Creation timestamp in canonical text form.
pub const FIELD_DATE: &str = "date";
/// Last-modified timestamp in canonical text form.
pub const FIELD_LASTMOD: &str = "lastmod";

/// Open metadata mapping attached to an article.
///
/// Values are kept as raw JSON values so fields this layer does not know
/// about (descriptions, drafts flags, theme hints) survive a load → save
/// round trip byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleMeta {
    fields: BTreeMap<String, Value>,
}

impl ArticleMeta {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of one field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Overwrites one field, inserting it when absent.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Returns a field as text, when it holds a string value.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Returns the tag labels. Non-string entries are skipped.
    pub fn tags(&self) -> Vec<String> {
        self.fields
            .get(FIELD_TAGS)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replaces the full tag set.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        let items = tags.into_iter().map(Value::String).collect();
        self.set(FIELD_TAGS, Value::Array(items));
    }

    /// Creation timestamp text, when present.
    pub fn date(&self) -> Option<&str> {
        self.text(FIELD_DATE)
    }

    /// Last-modified timestamp text, when present.
    pub fn lastmod(&self) -> Option<&str> {
        self.text(FIELD_LASTMOD)
    }

    /// Backfills `date`/`lastmod` with `now` when absent, non-text or blank.
    ///
    /// Existing non-blank text is preserved even when it does not match the
    /// canonical format, so dates written by other tools survive editing.
    pub fn ensure_timestamps(&mut self, now: &str) {
        for field in [FIELD_DATE, FIELD_LASTMOD] {
            let present = self.text(field).is_some_and(|value| !value.trim().is_empty());
            if !present {
                self.set(field, Value::String(now.to_string()));
            }
        }
    }

    /// Returns a copy of this mapping with `title` merged in.
    ///
    /// The save payload carries the title as a metadata field rather than a
    /// separate argument.
    pub fn with_title(&self, title: &str) -> Self {
        let mut merged = self.clone();
        merged.set(FIELD_TITLE, Value::String(title.to_string()));
        merged
    }

    /// Removes and returns the `title` field.
    ///
    /// The inverse of [`ArticleMeta::with_title`], applied when a loaded
    /// payload is split into session state. A non-string title value is
    /// removed and discarded.
    pub fn take_title(&mut self) -> Option<String> {
        match self.fields.remove(FIELD_TITLE) {
            Some(Value::String(title)) => Some(title),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ArticleMeta, FIELD_DATE, FIELD_LASTMOD, FIELD_TITLE};
    use serde_json::{json, Value};

    #[test]
    fn set_overwrites_existing_field() {
        let mut meta = ArticleMeta::new();
        meta.set("draft", json!(true));
        meta.set("draft", json!(false));
        assert_eq!(meta.get("draft"), Some(&json!(false)));
    }

    #[test]
    fn tags_skip_non_string_entries() {
        let mut meta = ArticleMeta::new();
        meta.set("tags", json!(["rust", 7, "blog"]));
        assert_eq!(meta.tags(), vec!["rust".to_string(), "blog".to_string()]);
    }

    #[test]
    fn tags_default_to_empty_without_field() {
        assert!(ArticleMeta::new().tags().is_empty());
    }

    #[test]
    fn ensure_timestamps_fills_absent_and_blank_fields() {
        let mut meta = ArticleMeta::new();
        meta.set(FIELD_LASTMOD, json!("   "));
        meta.ensure_timestamps("2024-01-02 03:04:05");
        assert_eq!(meta.date(), Some("2024-01-02 03:04:05"));
        assert_eq!(meta.lastmod(), Some("2024-01-02 03:04:05"));
    }

    #[test]
    fn ensure_timestamps_preserves_existing_text() {
        let mut meta = ArticleMeta::new();
        meta.set(FIELD_DATE, json!("2019-07-01T10:00:00+08:00"));
        meta.ensure_timestamps("2024-01-02 03:04:05");
        assert_eq!(meta.date(), Some("2019-07-01T10:00:00+08:00"));
    }

    #[test]
    fn title_merge_and_extract_are_inverse() {
        let mut meta = ArticleMeta::new();
        meta.set("description", json!("short summary"));

        let mut merged = meta.with_title("Hello");
        assert_eq!(merged.text(FIELD_TITLE), Some("Hello"));

        assert_eq!(merged.take_title(), Some("Hello".to_string()));
        assert!(merged.get(FIELD_TITLE).is_none());
        assert_eq!(merged, meta);
    }

    #[test]
    fn take_title_discards_non_string_value() {
        let mut meta = ArticleMeta::new();
        meta.set(FIELD_TITLE, json!(42));
        assert_eq!(meta.take_title(), None);
        assert!(meta.get(FIELD_TITLE).is_none());
    }

    #[test]
    fn serde_round_trip_preserves_unknown_fields() {
        let raw = r#"{"title":"T","tags":["a"],"weight":3,"draft":true}"#;
        let meta: ArticleMeta = serde_json::from_str(raw).unwrap();
        assert_eq!(meta.get("weight"), Some(&json!(3)));

        let back: Value = serde_json::to_value(&meta).unwrap();
        assert_eq!(back["draft"], json!(true));
        assert_eq!(back["tags"], json!(["a"]));
    }
}

//! Article storage collaborator contract.
//!
//! # Responsibility
//! - Describe the get/save surface the host backend exposes for articles.
//! - Keep the wire payload shape in one place.
//!
//! # Invariants
//! - The save payload carries the title inside the metadata mapping, never
//!   as a separate argument.
//! - `save` returns the authoritative article id; callers adopt it.

use super::Reply;
use crate::model::meta::ArticleMeta;
use serde::{Deserialize, Serialize};

/// Wire shape returned by [`ArticleStore::get`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePayload {
    /// Front-matter mapping, including the `title` field.
    pub meta: ArticleMeta,
    /// Markdown source.
    pub content: String,
}

/// Host-side article persistence reached over the bridge.
///
/// Implementations complete the underlying transport (RPC, FFI callback,
/// in-process fake) before returning, so the session sees plain
/// request/response semantics.
pub trait ArticleStore {
    /// Fetches one article by id.
    fn get(&self, id: &str) -> Reply<ArticlePayload>;

    /// Persists an article; `id` is `None` for a first save.
    ///
    /// Returns the stored article's id, which may differ from the request id
    /// when the backend assigns one.
    fn save(&self, id: Option<&str>, meta: &ArticleMeta, content: &str) -> Reply<String>;
}

impl<T: ArticleStore + ?Sized> ArticleStore for &T {
    fn get(&self, id: &str) -> Reply<ArticlePayload> {
        (**self).get(id)
    }

    fn save(&self, id: Option<&str>, meta: &ArticleMeta, content: &str) -> Reply<String> {
        (**self).save(id, meta, content)
    }
}

//! Editing session over the host bridge.
//!
//! # Responsibility
//! - Own the in-memory article state and its dirty flag.
//! - Mediate every mutation, whether from a widget event or a bridge reply.
//! - Orchestrate the image-attachment flows against the image store.
//!
//! # Invariants
//! - `dirty` is false immediately after load, init and a successful save;
//!   any mutation of title, body or metadata sets it, with no equality
//!   suppression.
//! - A failed collaborator call leaves session state untouched, so the user
//!   can retry.
//! - Collaborator calls are mediated one at a time through `&mut self`; a
//!   second operation cannot start before the first returns.

use crate::bridge::image_store::encode_image_blob;
use crate::bridge::{ArticleStore, BridgeError, ImageStore};
use crate::editor::cursor::{insert_at_selection, CursorContext};
use crate::model::article::Article;
use crate::model::meta::{ArticleMeta, FIELD_DATE, FIELD_LASTMOD};
use crate::timestamp;
use log::{error, info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Presentational edit/preview switch. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Edit,
    Preview,
}

impl ViewMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Edit => Self::Preview,
            Self::Preview => Self::Edit,
        }
    }
}

/// Failure surfaced by a session operation.
#[derive(Debug)]
pub enum SessionError {
    /// ArticleStore rejected the load.
    Load(BridgeError),
    /// ArticleStore rejected the save; session state is preserved.
    Save(BridgeError),
    /// ImageStore rejected the insertion; no text was inserted.
    Image(BridgeError),
    /// No editing widget is attached, so there is no cursor to insert at.
    CursorUnavailable,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "article load failed: {err}"),
            Self::Save(err) => write!(f, "article save failed: {err}"),
            Self::Image(err) => write!(f, "image insert failed: {err}"),
            Self::CursorUnavailable => {
                write!(f, "no editing widget attached for cursor insertion")
            }
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) | Self::Save(err) | Self::Image(err) => Some(err),
            Self::CursorUnavailable => None,
        }
    }
}

/// Markdown image reference inserted for a stored image path.
pub fn image_markdown(path: &str) -> String {
    format!("![]({path})\n")
}

/// One article-editing session.
///
/// Created when the editor view opens, discarded when it closes. Holds
/// exactly one [`Article`] plus the dirty flag and the presentational view
/// mode; all mutations go through its methods.
pub struct EditingSession<S: ArticleStore, I: ImageStore> {
    articles: S,
    images: I,
    article: Article,
    dirty: bool,
    view_mode: ViewMode,
}

impl<S: ArticleStore, I: ImageStore> EditingSession<S, I> {
    /// Creates a session holding a fresh unsaved draft.
    pub fn new(articles: S, images: I) -> Self {
        Self {
            articles,
            images,
            article: Article::draft(&timestamp::current_timestamp()),
            dirty: false,
            view_mode: ViewMode::Edit,
        }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Resets the session to a fresh unsaved draft.
    ///
    /// The draft gets an empty title/body, an empty tag set and matching
    /// `date`/`lastmod` stamps. A freshly initialized article is not
    /// "changed" until the user types, so `dirty` clears.
    pub fn init_new(&mut self) -> &Article {
        self.article = Article::draft(&timestamp::current_timestamp());
        self.dirty = false;
        &self.article
    }

    /// Loads an article from the store, replacing the session state.
    ///
    /// The wire `title` field moves out of the metadata mapping into
    /// [`Article::title`]; absent `date`/`lastmod` stamps are backfilled
    /// with the current local time. On failure the session keeps its
    /// previous state.
    pub fn load(&mut self, id: &str) -> Result<&Article, SessionError> {
        let payload = match self.articles.get(id).into_result() {
            Ok(payload) => payload,
            Err(err) => {
                error!("event=article_load module=editor status=error id={id} error={err}");
                return Err(SessionError::Load(err));
            }
        };

        let mut meta = payload.meta;
        let title = meta.take_title().unwrap_or_default();
        meta.ensure_timestamps(&timestamp::current_timestamp());

        self.article = Article {
            id: Some(id.to_string()),
            title,
            body: payload.content,
            meta,
        };
        self.dirty = false;
        info!("event=article_load module=editor status=ok id={id}");
        Ok(&self.article)
    }

    /// Overwrites the title and marks the session dirty.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.article.title = title.into();
        self.dirty = true;
    }

    /// Overwrites the markdown body and marks the session dirty.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.article.body = body.into();
        self.dirty = true;
    }

    /// Overwrites one metadata field and marks the session dirty.
    ///
    /// Dirty is set even when the new value equals the old one; widgets
    /// report every edit and the session does not second-guess them.
    pub fn set_metadata_field(&mut self, name: impl Into<String>, value: Value) {
        self.article.meta.set(name, value);
        self.dirty = true;
    }

    /// Replaces the full tag set and marks the session dirty.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.article.meta.set_tags(tags);
        self.dirty = true;
    }

    /// Persists the article through the store.
    ///
    /// The outgoing metadata carries the title under its `title` field and a
    /// freshly stamped `lastmod`. On success the session adopts the returned
    /// id and the new stamp, and clears `dirty`. On failure nothing changes
    /// and `dirty` keeps its pre-call value.
    pub fn save(&mut self) -> Result<String, SessionError> {
        let lastmod = timestamp::current_timestamp();
        let mut outgoing = self.article.meta.with_title(&self.article.title);
        outgoing.set(FIELD_LASTMOD, Value::String(lastmod.clone()));
        warn_on_stale_date(&outgoing);

        let reply = self
            .articles
            .save(self.article.id.as_deref(), &outgoing, &self.article.body);
        match reply.into_result() {
            Ok(id) => {
                self.article.id = Some(id.clone());
                self.article.meta.set(FIELD_LASTMOD, Value::String(lastmod));
                self.dirty = false;
                info!("event=article_save module=editor status=ok id={id}");
                Ok(id)
            }
            Err(err) => {
                error!("event=article_save module=editor status=error error={err}");
                Err(SessionError::Save(err))
            }
        }
    }

    /// Flips between edit and preview. No effect on `dirty` or the article.
    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    /// Inserts literal text at the widget's cursor and adopts the result.
    ///
    /// The widget text is authoritative at insertion time; the spliced text
    /// becomes the session body. Fails with
    /// [`SessionError::CursorUnavailable`] when no widget is attached,
    /// leaving the body untouched rather than guessing a position.
    pub fn insert_at_cursor(
        &mut self,
        ctx: &mut dyn CursorContext,
        text: &str,
    ) -> Result<(), SessionError> {
        let snapshot = match ctx.snapshot() {
            Some(snapshot) => snapshot,
            None => return Err(SessionError::CursorUnavailable),
        };

        let (updated, cursor) = insert_at_selection(
            &snapshot.text,
            snapshot.selection_start,
            snapshot.selection_end,
            text,
        );
        ctx.apply(&updated, cursor);
        self.set_body(updated);
        Ok(())
    }

    /// Requests an image slot from the store and inserts its markdown
    /// reference at the cursor.
    pub fn insert_image(&mut self, ctx: &mut dyn CursorContext) -> Result<(), SessionError> {
        let path = match self
            .images
            .insert_image(self.article.id.as_deref())
            .into_result()
        {
            Ok(path) => path,
            Err(err) => {
                error!("event=image_insert module=editor status=error error={err}");
                return Err(SessionError::Image(err));
            }
        };
        info!("event=image_insert module=editor status=ok path={path}");
        self.insert_at_cursor(ctx, &image_markdown(&path))
    }

    /// Stores pasted/dropped image bytes and inserts the markdown reference.
    ///
    /// Bytes are encoded into the bridge's textual byte-array form before
    /// crossing; the stored path is inserted exactly like an explicit
    /// insertion.
    pub fn insert_image_blob(
        &mut self,
        ctx: &mut dyn CursorContext,
        bytes: &[u8],
    ) -> Result<(), SessionError> {
        let blob = encode_image_blob(bytes);
        let path = match self
            .images
            .insert_image_blob(self.article.id.as_deref(), &blob)
            .into_result()
        {
            Ok(path) => path,
            Err(err) => {
                error!("event=image_insert module=editor status=error kind=blob error={err}");
                return Err(SessionError::Image(err));
            }
        };
        info!("event=image_insert module=editor status=ok kind=blob path={path}");
        self.insert_at_cursor(ctx, &image_markdown(&path))
    }
}

fn warn_on_stale_date(meta: &ArticleMeta) {
    if let Some(date) = meta.text(FIELD_DATE) {
        if !timestamp::is_canonical_timestamp(date) {
            warn!("event=article_save module=editor status=warn field=date reason=non_canonical_timestamp");
        }
    }
}

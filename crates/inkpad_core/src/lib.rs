//! Core editing-session logic for Inkpad.
//! This crate is the single source of truth for editor state invariants.

pub mod bridge;
pub mod editor;
pub mod logging;
pub mod model;
pub mod timestamp;

pub use bridge::{
    encode_image_blob, ArticlePayload, ArticleStore, BridgeError, BridgeResult, ImageStore, Reply,
    CODE_SUCCESS,
};
pub use editor::cursor::{insert_at_selection, splice, BufferCursor, CursorContext, CursorSnapshot};
pub use editor::session::{image_markdown, EditingSession, SessionError, ViewMode};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::Article;
pub use model::meta::{ArticleMeta, FIELD_DATE, FIELD_LASTMOD, FIELD_TAGS, FIELD_TITLE};
pub use timestamp::{current_timestamp, format_timestamp, is_canonical_timestamp};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

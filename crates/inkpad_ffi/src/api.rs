//! FFI use-case API for the GUI shell.
//!
//! # Responsibility
//! - Expose stable, sync functions for the editor view: cursor insertion
//!   arithmetic, timestamp production, blob encoding, logging bootstrap.
//! - Keep byte-level text manipulation on the Rust side of the bridge.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Text offsets are UTF-8 byte indices; the shell converts widget UTF-16
//!   offsets before calling (out-of-range offsets are snapped, not errors).

use inkpad_core::{
    core_version as core_version_inner, current_timestamp as current_timestamp_inner,
    encode_image_blob as encode_image_blob_inner, image_markdown as image_markdown_inner,
    init_logging as init_logging_inner, insert_at_selection,
};

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Returns the current local time as canonical metadata text.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn current_timestamp() -> String {
    current_timestamp_inner()
}

/// Result of a cursor-relative text insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInsertion {
    /// Full updated text.
    pub text: String,
    /// Byte offset where the shell should place the collapsed cursor.
    pub cursor: u64,
}

/// Splices `insert` into `text` at the selection start.
///
/// The reported cursor is the selection end advanced by the inserted
/// length, mirroring the editor widget's behavior.
///
/// # FFI contract
/// - Sync call, pure computation, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn insert_text(
    text: String,
    selection_start: u64,
    selection_end: u64,
    insert: String,
) -> TextInsertion {
    let (updated, cursor) = insert_at_selection(
        &text,
        selection_start as usize,
        selection_end as usize,
        &insert,
    );
    TextInsertion {
        text: updated,
        cursor: cursor as u64,
    }
}

/// Encodes raw image bytes into the bridge's textual byte-array form.
///
/// # FFI contract
/// - Sync call, pure computation, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn encode_image_blob(bytes: Vec<u8>) -> String {
    encode_image_blob_inner(&bytes)
}

/// Builds the markdown reference inserted for a stored image path.
///
/// # FFI contract
/// - Sync call, pure computation, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn image_markdown(path: String) -> String {
    image_markdown_inner(&path)
}

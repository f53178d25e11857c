//! Cursor-relative text insertion.
//!
//! # Responsibility
//! - Define the injected cursor-context capability the session uses to reach
//!   the active text widget.
//! - Splice literal text into a buffer at a selection offset.
//!
//! # Invariants
//! - Insertion always happens at the selection start; the selection end only
//!   moves the reported cursor, it never deletes selected text.
//! - Offsets are UTF-8 byte indices. Offsets past the end of the text or
//!   inside a multi-byte sequence snap back to the nearest character
//!   boundary. The host bridge converts widget UTF-16 offsets before they
//!   reach this module.

/// Text and selection read from the active editing widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub text: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

/// Capability handed to the session for reaching the active text widget.
///
/// Injecting this keeps the session free of any widget registry lookup and
/// makes insertion testable against an in-memory buffer.
pub trait CursorContext {
    /// Returns the current text and selection, or `None` when no editing
    /// widget is attached or focused.
    fn snapshot(&self) -> Option<CursorSnapshot>;

    /// Replaces the widget text and collapses the selection to `cursor`.
    fn apply(&mut self, text: &str, cursor: usize);
}

/// Splices `insert` into `text` at byte offset `offset`.
pub fn splice(text: &str, offset: usize, insert: &str) -> String {
    let offset = snap_to_char_boundary(text, offset);
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..offset]);
    out.push_str(insert);
    out.push_str(&text[offset..]);
    out
}

/// Inserts at the selection start and reports the updated cursor position.
///
/// The reported cursor is the prior selection end advanced by the inserted
/// length, so an active selection stays anchored the way the original
/// editor widget behaved.
pub fn insert_at_selection(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    insert: &str,
) -> (String, usize) {
    let updated = splice(text, selection_start, insert);
    let cursor = selection_end.min(text.len()) + insert.len();
    (updated, cursor)
}

fn snap_to_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// In-memory cursor context over an owned buffer.
///
/// Used by tests and by embeddings without a native widget; the detached
/// variant models a view whose editing surface is not mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferCursor {
    text: String,
    selection_start: usize,
    selection_end: usize,
    attached: bool,
}

impl BufferCursor {
    /// Creates an attached buffer with the given selection.
    pub fn new(text: impl Into<String>, selection_start: usize, selection_end: usize) -> Self {
        Self {
            text: text.into(),
            selection_start,
            selection_end,
            attached: true,
        }
    }

    /// Creates a context with no editing surface; `snapshot` returns `None`.
    pub fn detached() -> Self {
        Self {
            text: String::new(),
            selection_start: 0,
            selection_end: 0,
            attached: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }
}

impl CursorContext for BufferCursor {
    fn snapshot(&self) -> Option<CursorSnapshot> {
        if !self.attached {
            return None;
        }
        Some(CursorSnapshot {
            text: self.text.clone(),
            selection_start: self.selection_start,
            selection_end: self.selection_end,
        })
    }

    fn apply(&mut self, text: &str, cursor: usize) {
        self.text = text.to_string();
        self.selection_start = cursor;
        self.selection_end = cursor;
    }
}

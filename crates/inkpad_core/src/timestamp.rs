//! Wall-clock timestamp text.
//!
//! # Responsibility
//! - Produce the canonical `YYYY-MM-DD HH:MM:SS` text persisted in article
//!   metadata.
//! - Validate whether existing metadata text is in canonical form.
//!
//! # Invariants
//! - Timestamps use local wall-clock time and carry no timezone qualifier.
//! - All components except the year are zero-padded to two digits.

use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// `strftime` pattern for the canonical form.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static CANONICAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("valid timestamp regex")
});

/// Returns the current local time in canonical form.
pub fn current_timestamp() -> String {
    format_timestamp(Local::now().naive_local())
}

/// Formats a date-time in canonical form.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Returns whether `text` matches the canonical form shape.
///
/// A shape check only; component ranges are the producer's concern.
pub fn is_canonical_timestamp(text: &str) -> bool {
    CANONICAL_RE.is_match(text)
}

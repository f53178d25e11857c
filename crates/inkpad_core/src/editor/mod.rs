//! Editing-session components.
//!
//! # Responsibility
//! - Mediate all article mutations through one session type.
//! - Keep cursor arithmetic separate from widget plumbing.

pub mod cursor;
pub mod session;

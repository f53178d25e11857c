//! Host-facing FFI crate for Inkpad.
//!
//! Exposes the stable editing helpers from `inkpad_core` to the GUI shell.

pub mod api;

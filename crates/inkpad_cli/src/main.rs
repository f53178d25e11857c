//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `inkpad_core` linkage.
//! - Keep output useful for quick local sanity checks.

fn main() {
    println!("inkpad_core version={}", inkpad_core::core_version());
    println!("inkpad_core now={}", inkpad_core::current_timestamp());
}

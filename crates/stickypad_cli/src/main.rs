//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `stickypad_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Keeps a tiny probe that validates core crate wiring independently
    // from the UI/FFI runtime setup.
    println!("stickypad_core ping={}", stickypad_core::ping());
    println!("stickypad_core version={}", stickypad_core::core_version());
}

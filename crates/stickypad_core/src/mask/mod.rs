//! Selective content masking.
//!
//! # Responsibility
//! - Accumulate and clear hidden character spans on a note.
//! - Compute the masked display form of a note's content.
//!
//! # Invariants
//! - Masking is a display-only transformation; the underlying text is
//!   never modified.
//! - Rendering is deterministic for any stored span set and never panics.

pub mod render;

pub use render::{add_hidden_range, clear_hidden_ranges, render, MaskSegment};

//! Board state ownership.
//!
//! # Responsibility
//! - Own the ordered note collection and the selection/activation pointers.
//! - Own the floating-window frame state machine.
//!
//! # Invariants
//! - At most one note is selected and at most one is active at any time.
//! - Selection and activation are independent pointers.

pub mod frame;
pub mod note_store;
pub mod seed;

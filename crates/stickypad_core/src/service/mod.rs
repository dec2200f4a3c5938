//! Board use-case services.
//!
//! # Responsibility
//! - Provide the use-case entry points called by the host view layer.
//! - Absorb stale-reference conditions into logged no-ops.

pub mod board_service;

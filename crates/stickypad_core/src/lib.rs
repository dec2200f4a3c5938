//! Core domain logic for Stickypad.
//! This crate is the single source of truth for board state invariants.

pub mod gateway;
pub mod input;
pub mod logging;
pub mod mask;
pub mod model;
pub mod service;
pub mod store;

pub use gateway::{
    AcknowledgeGateway, GatewayError, GatewayResult, LoadResponse, PersistenceGateway, SaveReceipt,
};
pub use input::{FocusTarget, SelectionSpan};
pub use logging::{default_log_level, init_logging, logging_status};
pub use mask::{add_hidden_range, clear_hidden_ranges, render, MaskSegment};
pub use model::note::{HiddenRange, Note, NoteId, NotePatch, NoteSnapshot, DEFAULT_NOTE_TITLE};
pub use model::palette::{Palette, PaletteError, DEFAULT_PALETTE};
pub use service::board_service::BoardService;
pub use store::frame::{FrameState, WindowFrame};
pub use store::note_store::{NoteStore, StoreError, StoreResult};
pub use store::seed::seeded_store;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

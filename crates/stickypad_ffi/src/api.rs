//! FFI use-case API for the host UI.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI runtime via FRB.
//! - Keep error semantics simple: stale references become `ok=false`
//!   envelopes, never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The board is a single process-global instance; the host event loop is
//!   the only caller.

use stickypad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    seeded_store, AcknowledgeGateway, BoardService, FocusTarget, NotePatch, Palette,
    SelectionSpan,
};
use std::sync::{Mutex, OnceLock};

static BOARD: OnceLock<Mutex<BoardService<AcknowledgeGateway>>> = OnceLock::new();

fn with_board<T>(f: impl FnOnce(&mut BoardService<AcknowledgeGateway>) -> T) -> T {
    let mutex = BOARD.get_or_init(|| {
        log::info!("event=board_init module=ffi status=ok seed=demo");
        Mutex::new(BoardService::new(
            seeded_store(Palette::default()),
            AcknowledgeGateway::new(),
        ))
    });
    // A panicking host thread must not wedge the board; recover the guard.
    let mut guard = match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Note read model handed to the host list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub color: String,
    pub is_editing: bool,
    /// Number of stored masked spans, for badge display.
    pub hidden_span_count: u32,
}

/// One run of display text for the host renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentView {
    pub masked: bool,
    pub text: String,
}

/// Generic action response envelope for board commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the command changed board state.
    pub ok: bool,
    /// Note the command acted on, when applicable.
    pub note_id: Option<u64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, note_id: Option<u64>) -> Self {
        Self {
            ok: true,
            note_id,
            message: message.into(),
        }
    }

    fn ignored(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
        }
    }
}

/// Creates a note; it becomes both selected and active.
#[flutter_rust_bridge::frb(sync)]
pub fn create_note() -> BoardActionResponse {
    let id = with_board(|board| board.create_note());
    BoardActionResponse::success("note created", Some(id))
}

/// Patches a note's committed title/content.
///
/// # FFI contract
/// - A stale `id` returns `ok=false`; it never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn update_note(id: u64, title: Option<String>, content: Option<String>) -> BoardActionResponse {
    let patch = NotePatch { title, content };
    if with_board(|board| board.update_note(id, &patch)) {
        BoardActionResponse::success("note updated", Some(id))
    } else {
        BoardActionResponse::ignored("note not found")
    }
}

/// Deletes a note.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_note(id: u64) -> BoardActionResponse {
    if with_board(|board| board.delete_note(id)) {
        BoardActionResponse::success("note deleted", Some(id))
    } else {
        BoardActionResponse::ignored("note not found")
    }
}

/// Targets a note for hide/restore actions.
#[flutter_rust_bridge::frb(sync)]
pub fn select_note(id: u64) -> BoardActionResponse {
    if with_board(|board| board.select_note(id)) {
        BoardActionResponse::success("note selected", Some(id))
    } else {
        BoardActionResponse::ignored("note not found")
    }
}

/// Opens a note in the focused view; a second call on the active note
/// enters edit mode.
#[flutter_rust_bridge::frb(sync)]
pub fn activate_note(id: u64) -> BoardActionResponse {
    if with_board(|board| board.activate_note(id)) {
        BoardActionResponse::success("note activated", Some(id))
    } else {
        BoardActionResponse::ignored("note not found")
    }
}

/// Closes the focused view, committing any staged edit.
#[flutter_rust_bridge::frb(sync)]
pub fn deactivate_note() -> BoardActionResponse {
    with_board(|board| board.deactivate());
    BoardActionResponse::success("editor closed", None)
}

/// Merges typed text into the staged edit of a note.
#[flutter_rust_bridge::frb(sync)]
pub fn stage_edit(id: u64, title: Option<String>, content: Option<String>) -> BoardActionResponse {
    let patch = NotePatch { title, content };
    if with_board(|board| board.stage_edit(id, &patch)) {
        BoardActionResponse::success("edit staged", Some(id))
    } else {
        BoardActionResponse::ignored("note not found or not editing")
    }
}

/// Commits the staged edit of a note.
#[flutter_rust_bridge::frb(sync)]
pub fn commit_edit(id: u64) -> BoardActionResponse {
    if with_board(|board| board.commit_edit(id)) {
        BoardActionResponse::success("edit committed", Some(id))
    } else {
        BoardActionResponse::ignored("note not found or not editing")
    }
}

/// Drops the staged edit of a note.
#[flutter_rust_bridge::frb(sync)]
pub fn cancel_edit(id: u64) -> BoardActionResponse {
    if with_board(|board| board.cancel_edit(id)) {
        BoardActionResponse::success("edit cancelled", Some(id))
    } else {
        BoardActionResponse::ignored("note not found")
    }
}

/// Routes a delete keystroke from the host window.
///
/// `focus_in_text_input` reflects where keyboard focus sat when the key
/// arrived; deletion only targets the board when focus was outside text
/// fields.
#[flutter_rust_bridge::frb(sync)]
pub fn press_delete_key(focus_in_text_input: bool) -> BoardActionResponse {
    let focus = if focus_in_text_input {
        FocusTarget::TextInput
    } else {
        FocusTarget::Surface
    };
    match with_board(|board| board.handle_delete_key(focus)) {
        Some(id) => BoardActionResponse::success("selected note deleted", Some(id)),
        None => BoardActionResponse::ignored("nothing to delete"),
    }
}

/// Masks the host-extracted selection on the selected note.
///
/// Offsets are character offsets into the note content; collapsed or
/// out-of-bounds spans are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn hide_selection(start: u32, end: u32) -> BoardActionResponse {
    let span = SelectionSpan::new(start as usize, end as usize);
    if with_board(|board| board.hide_selection(span)) {
        BoardActionResponse::success("selection hidden", None)
    } else {
        BoardActionResponse::ignored("selection not applicable")
    }
}

/// Clears all masks on the selected note.
#[flutter_rust_bridge::frb(sync)]
pub fn restore_selected() -> BoardActionResponse {
    let cleared = with_board(|board| board.restore_selected());
    if cleared > 0 {
        BoardActionResponse::success(format!("{cleared} hidden spans restored"), None)
    } else {
        BoardActionResponse::ignored("nothing to restore")
    }
}

/// All notes in creation order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_notes() -> Vec<NoteView> {
    with_board(|board| {
        board
            .notes()
            .iter()
            .map(|note| NoteView {
                id: note.id,
                title: note.title.clone(),
                content: note.content.clone(),
                color: note.color.clone(),
                is_editing: note.is_editing,
                hidden_span_count: note.hidden_ranges.len() as u32,
            })
            .collect()
    })
}

/// Display segments for one note; empty for a stale ID.
#[flutter_rust_bridge::frb(sync)]
pub fn render_note(id: u64) -> Vec<SegmentView> {
    with_board(|board| {
        board
            .render_note(id)
            .unwrap_or_default()
            .into_iter()
            .map(|segment| SegmentView {
                masked: segment.is_masked(),
                text: segment.text().to_string(),
            })
            .collect()
    })
}

/// Hands the board to the persistence gateway.
#[flutter_rust_bridge::frb(sync)]
pub fn save_board() -> BoardActionResponse {
    match with_board(|board| board.save_board()) {
        Ok(receipt) => BoardActionResponse::success(receipt.message, None),
        Err(err) => BoardActionResponse::ignored(err.to_string()),
    }
}

/// Asks the persistence gateway for replacement notes.
#[flutter_rust_bridge::frb(sync)]
pub fn load_board() -> BoardActionResponse {
    match with_board(|board| board.load_board()) {
        Ok(message) => BoardActionResponse::success(message, None),
        Err(err) => BoardActionResponse::ignored(err.to_string()),
    }
}

/// Collapses the widget frame to the corner chip.
#[flutter_rust_bridge::frb(sync)]
pub fn minimize_frame() -> String {
    with_board(|board| {
        board.minimize_frame();
        board.frame_state().as_str().to_string()
    })
}

/// Restores the full frame from the minimized chip.
#[flutter_rust_bridge::frb(sync)]
pub fn restore_frame() -> String {
    with_board(|board| {
        board.restore_frame();
        board.frame_state().as_str().to_string()
    })
}

/// Hides the frame behind the reveal button.
#[flutter_rust_bridge::frb(sync)]
pub fn hide_frame() -> String {
    with_board(|board| {
        board.hide_frame();
        board.frame_state().as_str().to_string()
    })
}

/// Brings the frame back from the hidden state.
#[flutter_rust_bridge::frb(sync)]
pub fn reveal_frame() -> String {
    with_board(|board| {
        board.reveal_frame();
        board.frame_state().as_str().to_string()
    })
}

/// Current frame shape as a stable string.
#[flutter_rust_bridge::frb(sync)]
pub fn frame_state() -> String {
    with_board(|board| board.frame_state().as_str().to_string())
}

/// Flips the always-on-top pin and returns the new value.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_always_on_top() -> bool {
    with_board(|board| board.toggle_always_on_top())
}

//! Board use-case facade.
//!
//! # Responsibility
//! - Front the note store, masker, window frame and persistence gateway
//!   with one use-case API for the host view layer.
//! - Tolerate stale note references: the host can hold an ID for a note
//!   deleted by an earlier event, so not-found conditions become logged
//!   no-ops instead of errors.
//!
//! # Invariants
//! - Store invariants are never bypassed; all mutations go through store
//!   operations.
//! - Gateway failures surface as error values, never panics.

use crate::gateway::{GatewayResult, PersistenceGateway, SaveReceipt};
use crate::input::{FocusTarget, SelectionSpan};
use crate::mask::{add_hidden_range, clear_hidden_ranges, render, MaskSegment};
use crate::model::note::{Note, NoteId, NotePatch, NoteSnapshot};
use crate::store::frame::{FrameState, WindowFrame};
use crate::store::note_store::{NoteStore, StoreError};
use log::{debug, info};

/// Use-case facade over the board state and its external collaborators.
pub struct BoardService<G: PersistenceGateway> {
    store: NoteStore,
    frame: WindowFrame,
    gateway: G,
}

impl<G: PersistenceGateway> BoardService<G> {
    /// Creates a service over an existing store and gateway.
    pub fn new(store: NoteStore, gateway: G) -> Self {
        Self {
            store,
            frame: WindowFrame::new(),
            gateway,
        }
    }

    /// Creates a note and returns its ID. The note becomes both selected
    /// and active.
    pub fn create_note(&mut self) -> NoteId {
        self.store.create()
    }

    /// Patches one note's committed fields. Returns whether a note was
    /// updated; a stale ID is a no-op.
    pub fn update_note(&mut self, id: NoteId, patch: &NotePatch) -> bool {
        let result = self.store.update(id, patch);
        self.absorb_stale("note_update", id, result)
    }

    /// Deletes one note. Returns whether a note was removed.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let result = self.store.delete(id);
        self.absorb_stale("note_delete", id, result)
    }

    /// Targets one note for hide/restore actions.
    pub fn select_note(&mut self, id: NoteId) -> bool {
        let result = self.store.select(id);
        self.absorb_stale("note_select", id, result)
    }

    /// Opens one note in the focused view; activating the already-active
    /// note enters edit mode.
    pub fn activate_note(&mut self, id: NoteId) -> bool {
        let result = self.store.activate(id);
        self.absorb_stale("note_activate", id, result)
    }

    /// Closes the focused view, committing any staged edit. Selection is
    /// preserved.
    pub fn deactivate(&mut self) {
        self.store.deactivate();
    }

    /// Merges a patch into the staged edit of one note.
    pub fn stage_edit(&mut self, id: NoteId, patch: &NotePatch) -> bool {
        let result = self.store.stage_edit(id, patch);
        self.absorb_stale("note_stage_edit", id, result)
    }

    /// Commits the staged edit of one note.
    pub fn commit_edit(&mut self, id: NoteId) -> bool {
        let result = self.store.commit_edit(id);
        self.absorb_stale("note_commit_edit", id, result)
    }

    /// Drops the staged edit of one note.
    pub fn cancel_edit(&mut self, id: NoteId) -> bool {
        let result = self.store.cancel_edit(id);
        self.absorb_stale("note_cancel_edit", id, result)
    }

    /// Routes a delete keystroke from the host.
    ///
    /// Only acts when focus is outside text-input fields; otherwise the
    /// keystroke belongs to normal text editing. Returns the deleted ID.
    pub fn handle_delete_key(&mut self, focus: FocusTarget) -> Option<NoteId> {
        match focus {
            FocusTarget::TextInput => None,
            FocusTarget::Surface => self.store.delete_selected(),
        }
    }

    /// Masks the host-extracted selection span on the selected note.
    ///
    /// Returns whether a span was stored; collapsed or out-of-bounds spans
    /// and the no-selection case are silent no-ops.
    pub fn hide_selection(&mut self, span: SelectionSpan) -> bool {
        let Some(note) = self.store.selected_note_mut() else {
            debug!("event=mask_add module=core status=ignored reason=no_selection");
            return false;
        };
        let (start, end) = span.normalized();
        let stored = add_hidden_range(note, start, end);
        if stored {
            info!(
                "event=mask_add module=core status=ok id={} start={start} end={end}",
                note.id
            );
        }
        stored
    }

    /// Clears all hidden spans on the selected note (full restore).
    ///
    /// Returns the number of spans removed.
    pub fn restore_selected(&mut self) -> usize {
        let Some(note) = self.store.selected_note_mut() else {
            return 0;
        };
        let cleared = clear_hidden_ranges(note);
        if cleared > 0 {
            info!(
                "event=mask_clear module=core status=ok id={} cleared={cleared}",
                note.id
            );
        }
        cleared
    }

    /// Display segments for one note; `None` for a stale ID.
    pub fn render_note(&self, id: NoteId) -> Option<Vec<MaskSegment>> {
        self.store.get(id).map(render)
    }

    /// Hands the current board to the gateway.
    pub fn save_board(&self) -> GatewayResult<SaveReceipt> {
        let snapshots = self.store.snapshot();
        let receipt = self.gateway.save(&snapshots)?;
        info!(
            "event=board_save module=core status=ok gateway={} saved={}",
            self.gateway.gateway_id(),
            receipt.saved
        );
        Ok(receipt)
    }

    /// Asks the gateway for replacement notes.
    ///
    /// A response carrying snapshots replaces the collection wholesale
    /// (the acknowledgement-only gateway never does); the gateway's
    /// user-facing message is returned either way.
    pub fn load_board(&mut self) -> GatewayResult<String> {
        let response = self.gateway.load()?;
        let replaced = response.notes.is_some();
        if let Some(snapshots) = response.notes {
            self.store.replace_all(snapshots);
        }
        info!(
            "event=board_load module=core status=ok gateway={} replaced={replaced}",
            self.gateway.gateway_id()
        );
        Ok(response.message)
    }

    /// Notes in creation order.
    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    /// Read access to one note.
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.store.get(id)
    }

    /// Committed-state snapshots of all notes.
    pub fn snapshot(&self) -> Vec<NoteSnapshot> {
        self.store.snapshot()
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.store.selected_id()
    }

    pub fn active_id(&self) -> Option<NoteId> {
        self.store.active_id()
    }

    pub fn frame_state(&self) -> FrameState {
        self.frame.state()
    }

    pub fn always_on_top(&self) -> bool {
        self.frame.always_on_top()
    }

    pub fn minimize_frame(&mut self) {
        self.frame.minimize();
    }

    pub fn restore_frame(&mut self) {
        self.frame.restore();
    }

    pub fn hide_frame(&mut self) {
        self.frame.hide();
    }

    pub fn reveal_frame(&mut self) {
        self.frame.reveal();
    }

    pub fn toggle_always_on_top(&mut self) -> bool {
        self.frame.toggle_always_on_top()
    }

    /// Maps expected stale-reference conditions to a logged `false`.
    fn absorb_stale(&self, event: &str, id: NoteId, result: Result<(), StoreError>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                debug!("event={event} module=core status=ignored id={id} reason={err}");
                false
            }
        }
    }
}

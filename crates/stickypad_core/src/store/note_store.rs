//! Note collection state machine.
//!
//! # Responsibility
//! - Sole owner of the ordered note collection.
//! - Maintain the selection and activation pointers across mutations.
//! - Assign monotonic IDs and palette colors at creation.
//!
//! # Invariants
//! - IDs are unique for the lifetime of the store and never reused.
//! - Deleting a note clears any pointer that referenced it.
//! - Activating the already-active note enters edit mode; deactivation
//!   commits staged edits and preserves selection.

use crate::model::note::{Note, NoteId, NotePatch, NoteSnapshot};
use crate::model::palette::Palette;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Reported conditions for store mutations.
///
/// `NoteNotFound` is expected in normal operation: the host can hold stale
/// IDs for notes deleted by an earlier event. Callers above the store
/// absorb it into a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NoteNotFound(NoteId),
    NotEditing(NoteId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::NotEditing(id) => write!(f, "note is not in edit mode: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Owner of the note collection and the selection/activation pointers.
pub struct NoteStore {
    notes: Vec<Note>,
    selected: Option<NoteId>,
    active: Option<NoteId>,
    next_id: NoteId,
    palette: Palette,
}

impl NoteStore {
    /// Creates an empty store over the given palette.
    pub fn new(palette: Palette) -> Self {
        Self {
            notes: Vec::new(),
            selected: None,
            active: None,
            next_id: 1,
            palette,
        }
    }

    /// Appends a fresh note and makes it both selected and active.
    ///
    /// The color is taken from the palette at the current collection size,
    /// so colors cycle with the palette period as notes are created.
    pub fn create(&mut self) -> NoteId {
        let id = self.next_id;
        self.next_id += 1;

        let color = self.palette.color_for(self.notes.len()).to_string();
        self.notes.push(Note::new(id, color));
        self.selected = Some(id);
        self.active = Some(id);

        debug!("event=note_create module=core status=ok id={id}");
        id
    }

    /// Applies a patch to the committed fields of one note.
    ///
    /// The active view reflects the update by construction: pointers refer
    /// to the single record in the collection, never to a copy.
    pub fn update(&mut self, id: NoteId, patch: &NotePatch) -> StoreResult<()> {
        let note = self.find_mut(id)?;
        note.apply(patch);
        Ok(())
    }

    /// Removes one note, clearing pointers that referenced it.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return Err(StoreError::NoteNotFound(id));
        }

        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.active == Some(id) {
            self.active = None;
        }

        debug!("event=note_delete module=core status=ok id={id}");
        Ok(())
    }

    /// Targets one note for hide/restore actions. Activation untouched.
    pub fn select(&mut self, id: NoteId) -> StoreResult<()> {
        self.find(id)?;
        self.selected = Some(id);
        Ok(())
    }

    /// Opens one note in the focused view, selecting it as well.
    ///
    /// Activating the note that is already active enters edit mode
    /// (double-activation), staging its committed text.
    pub fn activate(&mut self, id: NoteId) -> StoreResult<()> {
        self.find(id)?;
        if self.active == Some(id) {
            if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
                note.begin_edit();
            }
        } else {
            self.selected = Some(id);
            self.active = Some(id);
        }
        Ok(())
    }

    /// Closes the focused view, committing any staged edit.
    ///
    /// Selection is preserved so hide/restore actions still have a target.
    pub fn deactivate(&mut self) {
        if let Some(id) = self.active.take() {
            if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
                if note.is_editing {
                    note.commit_edit();
                }
            }
        }
    }

    /// Deletes the currently selected note, if any. Returns the deleted ID.
    pub fn delete_selected(&mut self) -> Option<NoteId> {
        let id = self.selected?;
        // Selection always points at a live note, so delete cannot fail here.
        self.delete(id).ok().map(|()| id)
    }

    /// Merges a patch into the staged transients of an editing note.
    pub fn stage_edit(&mut self, id: NoteId, patch: &NotePatch) -> StoreResult<()> {
        let note = self.find_mut(id)?;
        if !note.is_editing {
            return Err(StoreError::NotEditing(id));
        }
        note.stage(patch);
        Ok(())
    }

    /// Commits staged text of one note and leaves edit mode.
    pub fn commit_edit(&mut self, id: NoteId) -> StoreResult<()> {
        let note = self.find_mut(id)?;
        if !note.is_editing {
            return Err(StoreError::NotEditing(id));
        }
        note.commit_edit();
        Ok(())
    }

    /// Drops staged text of one note and leaves edit mode.
    pub fn cancel_edit(&mut self, id: NoteId) -> StoreResult<()> {
        let note = self.find_mut(id)?;
        note.cancel_edit();
        Ok(())
    }

    /// Currently selected note ID.
    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected
    }

    /// Currently active note ID.
    pub fn active_id(&self) -> Option<NoteId> {
        self.active
    }

    /// Read access to one note.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Write access to the currently selected note.
    pub fn selected_note_mut(&mut self) -> Option<&mut Note> {
        let id = self.selected?;
        self.notes.iter_mut().find(|note| note.id == id)
    }

    /// Notes in creation order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Committed-state snapshots of all notes, in order.
    pub fn snapshot(&self) -> Vec<NoteSnapshot> {
        self.notes.iter().map(NoteSnapshot::from).collect()
    }

    /// Replaces the whole collection from gateway snapshots.
    ///
    /// Pointers are cleared and the ID counter is advanced past the highest
    /// loaded ID, so later `create` calls never collide with loaded notes.
    pub fn replace_all(&mut self, snapshots: Vec<NoteSnapshot>) {
        let highest = snapshots.iter().map(|s| s.id).max().unwrap_or(0);
        self.notes = snapshots.into_iter().map(Note::from).collect();
        self.selected = None;
        self.active = None;
        self.next_id = self.next_id.max(highest + 1);
    }

    /// Appends a pre-filled note without touching selection or activation.
    /// Seeding only; colors still follow creation order.
    pub(crate) fn seed_note(&mut self, title: &str, content: &str) -> NoteId {
        let id = self.next_id;
        self.next_id += 1;
        let color = self.palette.color_for(self.notes.len()).to_string();
        self.notes.push(Note::with_text(id, title, content, color));
        id
    }

    fn find(&self, id: NoteId) -> StoreResult<&Note> {
        self.get(id).ok_or(StoreError::NoteNotFound(id))
    }

    fn find_mut(&mut self, id: NoteId) -> StoreResult<&mut Note> {
        self.notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NoteNotFound(id))
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

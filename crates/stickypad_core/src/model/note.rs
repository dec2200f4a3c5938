//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record owned by the board store.
//! - Provide patch application with defensive masked-span clamping.
//! - Track in-progress edit state local to one note.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `color` is immutable after creation.
//! - Edit transients are owned by the note itself and never observed by
//!   other notes.

use serde::{Deserialize, Serialize};

/// Stable identifier for every note on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values are assigned from a monotonic counter and never reused, so stale
/// references from the host can be detected and ignored safely.
pub type NoteId = u64;

/// Title given to freshly created notes.
pub const DEFAULT_NOTE_TITLE: &str = "New Title";

/// Half-open character interval `[start, end)` over a note's content that
/// is flagged for masked display.
///
/// Intervals are stored as accumulated by the host; they may overlap and
/// are not kept sorted. Rendering normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenRange {
    /// Inclusive start, in characters.
    pub start: usize,
    /// Exclusive end, in characters.
    pub end: usize,
}

impl HiddenRange {
    /// Builds a range from two endpoints in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Returns whether the range covers no characters.
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Clamps both endpoints to `max_chars`, possibly emptying the range.
    pub fn clamped_to(self, max_chars: usize) -> Self {
        Self {
            start: self.start.min(max_chars),
            end: self.end.min(max_chars),
        }
    }
}

/// Partial update for a note's text fields.
///
/// Absent fields are left untouched by `Note::apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    /// Patch that replaces the title only.
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            content: None,
        }
    }

    /// Patch that replaces the content only.
    pub fn content(value: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(value.into()),
        }
    }

    /// Returns whether the patch carries no fields.
    pub fn is_noop(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Canonical note record.
///
/// The record keeps committed text (`title`, `content`) separate from the
/// edit transients (`staged_title`, `staged_content`, `is_editing`) that
/// hold in-progress edits until commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable board-unique ID.
    pub id: NoteId,
    /// Committed title text.
    pub title: String,
    /// Committed content text.
    pub content: String,
    /// Display color, one of the host palette entries.
    pub color: String,
    /// Accumulated masked spans over `content`, in characters.
    pub hidden_ranges: Vec<HiddenRange>,
    /// Staged title while editing; `None` outside edit mode.
    #[serde(skip)]
    pub staged_title: Option<String>,
    /// Staged content while editing; `None` outside edit mode.
    #[serde(skip)]
    pub staged_content: Option<String>,
    /// Whether this note is currently open in the focused editor.
    #[serde(skip)]
    pub is_editing: bool,
}

impl Note {
    /// Creates a fresh note with default title and empty content.
    pub fn new(id: NoteId, color: impl Into<String>) -> Self {
        Self::with_text(id, DEFAULT_NOTE_TITLE, "", color)
    }

    /// Creates a note with caller-provided text. Used by seeding and the
    /// load path where text already exists.
    pub fn with_text(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            color: color.into(),
            hidden_ranges: Vec::new(),
            staged_title: None,
            staged_content: None,
            is_editing: false,
        }
    }

    /// Number of characters in the committed content.
    pub fn content_char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Applies a patch to the committed fields.
    ///
    /// Content replacement can strand previously accepted masked spans past
    /// the new end of text, so spans are re-clamped and emptied spans are
    /// dropped.
    pub fn apply(&mut self, patch: &NotePatch) {
        if let Some(title) = patch.title.as_ref() {
            self.title = title.clone();
        }
        if let Some(content) = patch.content.as_ref() {
            self.content = content.clone();
            self.clamp_hidden_ranges();
        }
    }

    /// Enters edit mode, staging the committed text for in-place editing.
    ///
    /// Re-entering edit mode keeps already staged text.
    pub fn begin_edit(&mut self) {
        if !self.is_editing {
            self.staged_title = Some(self.title.clone());
            self.staged_content = Some(self.content.clone());
            self.is_editing = true;
        }
    }

    /// Merges a patch into the staged transients without committing.
    pub fn stage(&mut self, patch: &NotePatch) {
        if let Some(title) = patch.title.as_ref() {
            self.staged_title = Some(title.clone());
        }
        if let Some(content) = patch.content.as_ref() {
            self.staged_content = Some(content.clone());
        }
    }

    /// Commits staged text into the record and leaves edit mode.
    pub fn commit_edit(&mut self) {
        let patch = NotePatch {
            title: self.staged_title.take(),
            content: self.staged_content.take(),
        };
        self.apply(&patch);
        self.is_editing = false;
    }

    /// Drops staged text and leaves edit mode. Committed fields untouched.
    pub fn cancel_edit(&mut self) {
        self.staged_title = None;
        self.staged_content = None;
        self.is_editing = false;
    }

    /// Content the display layer should show right now: staged text while
    /// editing, committed text otherwise.
    pub fn visible_content(&self) -> &str {
        if self.is_editing {
            self.staged_content.as_deref().unwrap_or(&self.content)
        } else {
            &self.content
        }
    }

    fn clamp_hidden_ranges(&mut self) {
        let max_chars = self.content_char_len();
        self.hidden_ranges = self
            .hidden_ranges
            .iter()
            .map(|range| range.clamped_to(max_chars))
            .filter(|range| !range.is_empty())
            .collect();
    }
}

/// Read model of a note handed to persistence gateways and host lists.
///
/// Snapshots carry committed state only; edit transients stay inside the
/// board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSnapshot {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub color: String,
    pub hidden_ranges: Vec<HiddenRange>,
}

impl From<&Note> for NoteSnapshot {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
            color: note.color.clone(),
            hidden_ranges: note.hidden_ranges.clone(),
        }
    }
}

impl From<NoteSnapshot> for Note {
    fn from(snapshot: NoteSnapshot) -> Self {
        let mut note = Note::with_text(
            snapshot.id,
            snapshot.title,
            snapshot.content,
            snapshot.color,
        );
        note.hidden_ranges = snapshot.hidden_ranges;
        note.clamp_hidden_ranges();
        note
    }
}

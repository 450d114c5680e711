//! Read-only snapshot handed to whatever renders the board.

use crate::domain::{Draft, Mode, Note, NoteId};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub notes: &'a [Note],
    pub draft: &'a Draft,
    pub mode: Mode,
}

impl BoardView<'_> {
    /// Label for the submit button: "Add Note" or "Update Note".
    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    /// Returns true if `id` is the note currently loaded into the draft.
    pub fn is_editing(&self, id: NoteId) -> bool {
        self.mode.editing_id() == Some(id)
    }
}

/// What a submit-style operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new note was appended.
    Added(NoteId),
    /// The note with this id was replaced in place.
    Updated(NoteId),
    /// The note being edited no longer exists; the draft was discarded.
    Orphaned(NoteId),
    /// The draft was incomplete or there was nothing to update.
    Rejected,
}

impl SubmitOutcome {
    /// Returns true if the notes collection changed.
    pub fn changed(self) -> bool {
        matches!(self, SubmitOutcome::Added(_) | SubmitOutcome::Updated(_))
    }
}

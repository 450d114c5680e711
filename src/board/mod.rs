//! The note board: a persisted list of notes plus a single create/edit form.
//!
//! Every operation runs to completion synchronously and never fails. Invalid
//! input and unknown ids are silent no-ops reported through return values;
//! storage problems are logged by [`Persistent`] and otherwise ignored.

mod clock;
mod view;


use tracing::debug;

use crate::domain::{Draft, Mode, Note, NoteId, default_notes};
use crate::store::{KeyValueStore, Persistent};

pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use view::{BoardView, SubmitOutcome};

/// Storage key used for the notes collection unless overridden.
pub const DEFAULT_NOTES_KEY: &str = "notes";

/// Notes collection, draft form, and create/edit mode.
pub struct NoteBoard<S, C = SystemClock> {
    notes: Persistent<Vec<Note>, S>,
    draft: Draft,
    mode: Mode,
    ready: bool,
    clock: C,
}

impl<S: KeyValueStore> NoteBoard<S, SystemClock> {
    /// Opens the board on `store` under the default key, using the wall clock.
    pub fn open(store: S) -> Self {
        Self::with_clock(store, DEFAULT_NOTES_KEY, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> NoteBoard<S, C> {
    /// Opens the board, loading the collection stored under `key`.
    ///
    /// Falls back to the seed notes when the slot is empty or unreadable.
    /// The board starts unmounted; call [`mount`](Self::mount) before
    /// asking for a [`view`](Self::view).
    pub fn with_clock(store: S, key: impl Into<String>, clock: C) -> Self {
        let notes = Persistent::load(store, key, default_notes());
        debug!(count = notes.get().len(), "board opened");
        Self {
            notes,
            draft: Draft::default(),
            mode: Mode::Creating,
            ready: false,
            clock,
        }
    }

    /// Marks the board as attached to a renderer.
    pub fn mount(&mut self) {
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns a snapshot for rendering, or `None` before the board is mounted.
    pub fn view(&self) -> Option<BoardView<'_>> {
        self.ready.then(|| BoardView {
            notes: self.notes.get(),
            draft: &self.draft,
            mode: self.mode,
        })
    }

    /// Returns the notes in display order.
    pub fn notes(&self) -> &[Note] {
        self.notes.get()
    }

    /// Looks up a note by id.
    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.get().iter().find(|n| n.id() == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Replaces the draft title.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Replaces the draft content.
    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Submits the draft according to the current mode.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.mode {
            Mode::Creating => self.add_note(),
            Mode::Editing(_) => self.update_note(),
        }
    }

    /// Appends the draft as a new note and clears the draft.
    ///
    /// Does nothing unless both draft fields are non-empty after trimming.
    pub fn add_note(&mut self) -> SubmitOutcome {
        let id = clock::allocate_id(&self.clock, self.notes.get());
        let Ok(note) = Note::new(id, self.draft.title.as_str(), self.draft.content.as_str())
        else {
            debug!("add ignored: draft incomplete");
            return SubmitOutcome::Rejected;
        };

        self.notes.modify(|notes| notes.push(note));
        self.draft.clear();
        debug!(%id, "note added");
        SubmitOutcome::Added(id)
    }

    /// Loads the note with `id` into the draft and switches to edit mode.
    ///
    /// Returns false, changing nothing, if no such note exists.
    pub fn start_edit(&mut self, id: NoteId) -> bool {
        let Some(note) = self.find(id) else {
            debug!(%id, "edit ignored: no such note");
            return false;
        };

        self.draft = Draft::new(note.title(), note.content());
        self.mode = Mode::Editing(id);
        true
    }

    /// Writes the draft over the note being edited and returns to create mode.
    ///
    /// Does nothing outside edit mode or when a draft field is blank. If the
    /// edited note was deleted meanwhile, the collection is left alone but the
    /// draft is still discarded.
    pub fn update_note(&mut self) -> SubmitOutcome {
        let Mode::Editing(id) = self.mode else {
            debug!("update ignored: not editing");
            return SubmitOutcome::Rejected;
        };
        if !self.draft.is_submittable() {
            debug!(%id, "update ignored: draft incomplete");
            return SubmitOutcome::Rejected;
        }

        let draft = std::mem::take(&mut self.draft);
        self.mode = Mode::Creating;

        let mut replaced = false;
        self.notes.modify(|notes| {
            if let Some(slot) = notes.iter_mut().find(|n| n.id() == id)
                && let Ok(revised) = slot.revised(draft.title, draft.content)
            {
                *slot = revised;
                replaced = true;
            }
        });

        if replaced {
            debug!(%id, "note updated");
            SubmitOutcome::Updated(id)
        } else {
            debug!(%id, "update matched no note");
            SubmitOutcome::Orphaned(id)
        }
    }

    /// Removes the note with `id`.
    ///
    /// Returns false if there was no such note. The draft and mode are left
    /// untouched even when the removed note is being edited.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        if self.find(id).is_none() {
            debug!(%id, "delete ignored: no such note");
            return false;
        }

        self.notes.modify(|notes| notes.retain(|n| n.id() != id));
        debug!(%id, "note deleted");
        true
    }

    /// Consumes the board, returning the underlying store.
    pub fn into_store(self) -> S {
        self.notes.into_parts().1
    }
}

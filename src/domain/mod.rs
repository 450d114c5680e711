//! Core types: Note, NoteId, Draft, Mode, and the seed collection

mod draft;
mod note;
mod note_id;
mod seed;

pub use draft::{Draft, Mode};
pub use note::{Note, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
pub use seed::default_notes;

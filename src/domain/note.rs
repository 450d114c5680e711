//! Note struct representing a short titled text note.

use crate::domain::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
    EmptyContent,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
            ParseNoteErrorKind::EmptyContent => {
                write!(f, "invalid note: content cannot be empty")
            }
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A committed note.
///
/// # Required Fields
/// - `id`: Creation timestamp, unique within a collection
/// - `title`: Human-readable title (non-empty after trimming)
/// - `content`: Note text (non-empty after trimming)
///
/// Title and content are stored exactly as given; trimming is only used to
/// decide whether they are empty.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, NoteId};
///
/// let note = Note::new(NoteId::from_millis(1), "Groceries", "Milk, eggs").unwrap();
/// assert_eq!(note.title(), "Groceries");
/// assert!(Note::new(NoteId::from_millis(2), "  ", "text").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
}

impl Note {
    /// Creates a new Note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if:
    /// - The title is empty or whitespace-only
    /// - The content is empty or whitespace-only
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ParseNoteError> {
        let title = title.into();
        let content = content.into();

        if title.trim().is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyTitle,
            });
        }
        if content.trim().is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyContent,
            });
        }

        Ok(Self { id, title, content })
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns a copy with a new title and content, keeping the id.
    pub fn revised(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ParseNoteError> {
        Self::new(self.id, title, content)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

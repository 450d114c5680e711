//! The editable form state: a draft note and the mode it will be submitted in.

use crate::domain::NoteId;
use serde::Serialize;

/// Unsaved title and content currently being typed.
///
/// Drafts may be empty or whitespace-only; they are validated only when
/// submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns true if both fields are non-empty after trimming.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Resets both fields to empty strings.
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

/// Whether submitting the draft creates a note or overwrites an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Creating,
    Editing(NoteId),
}

impl Mode {
    /// Label for the submit action in this mode.
    pub fn submit_label(self) -> &'static str {
        match self {
            Mode::Creating => "Add Note",
            Mode::Editing(_) => "Update Note",
        }
    }

    /// Returns the id being edited, if any.
    pub fn editing_id(self) -> Option<NoteId> {
        match self {
            Mode::Creating => None,
            Mode::Editing(id) => Some(id),
        }
    }
}

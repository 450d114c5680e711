//! Command handlers for the CLI.
//!
//! Handlers drive a mounted [`NoteBoard`] and write their output to the given
//! writer so they can be exercised without a terminal.

mod add;
mod completions;
mod edit;
mod list;
mod remove;
mod show;


use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::board::{Clock, NoteBoard, SystemClock};
use crate::domain::{Note, NoteId};
use crate::store::{FileStore, KeyValueStore, is_valid_key};

// Re-export public items
pub use add::handle_add;
pub use completions::handle_completions;
pub use edit::handle_edit;
pub use list::handle_list;
pub use remove::handle_remove;
pub use show::handle_show;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens and mounts the board stored under `key` in `data_dir`.
///
/// The directory is created lazily on the first write.
pub fn open_board(data_dir: &Path, key: &str) -> Result<NoteBoard<FileStore, SystemClock>> {
    if !is_valid_key(key) {
        bail!(
            "invalid storage key '{}': use letters, digits, '-', '_' or '.'",
            key
        );
    }

    let mut board = NoteBoard::with_clock(FileStore::new(data_dir), key, SystemClock);
    board.mount();
    Ok(board)
}

/// Parses a note id argument.
pub(crate) fn parse_note_id(s: &str) -> Result<NoteId> {
    s.parse()
        .with_context(|| format!("'{}' is not a note id (expected a number)", s))
}

/// Looks up a note by its id argument, failing if it doesn't exist.
pub(crate) fn require_note<'a, S: KeyValueStore, C: Clock>(
    board: &'a NoteBoard<S, C>,
    id_arg: &str,
) -> Result<&'a Note> {
    let id = parse_note_id(id_arg)?;
    match board.find(id) {
        Some(note) => Ok(note),
        None => bail!("note not found: '{}'", id_arg),
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
///
/// Line breaks are flattened to spaces so each note stays on one row.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() <= max_width {
        flat
    } else {
        let truncated: String = flat.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

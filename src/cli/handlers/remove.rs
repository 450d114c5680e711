//! Remove command handler.

use anyhow::Result;
use std::io::Write;

use super::require_note;
use crate::board::{Clock, NoteBoard};
use crate::cli::RemoveArgs;
use crate::store::KeyValueStore;

pub fn handle_remove<S: KeyValueStore, C: Clock>(
    args: &RemoveArgs,
    board: &mut NoteBoard<S, C>,
    out: &mut impl Write,
) -> Result<()> {
    let note = require_note(board, &args.id)?;
    let (id, title) = (note.id(), note.title().to_string());

    board.delete_note(id);
    writeln!(out, "Deleted: {} [{}]", title, id)?;

    Ok(())
}

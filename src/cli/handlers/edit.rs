//! Edit command handler.

use anyhow::{Result, bail};
use std::io::Write;

use super::parse_note_id;
use crate::board::{Clock, NoteBoard, SubmitOutcome};
use crate::cli::EditArgs;
use crate::store::KeyValueStore;

/// Loads a note into the draft, overwrites the given fields, and submits.
///
/// Omitted fields keep their current value.
pub fn handle_edit<S: KeyValueStore, C: Clock>(
    args: &EditArgs,
    board: &mut NoteBoard<S, C>,
    out: &mut impl Write,
) -> Result<()> {
    let id = parse_note_id(&args.id)?;

    if !board.start_edit(id) {
        bail!("note not found: '{}'", args.id);
    }

    if let Some(title) = &args.title {
        board.set_draft_title(title.as_str());
    }
    if let Some(content) = &args.content {
        board.set_draft_content(content.as_str());
    }

    match board.update_note() {
        SubmitOutcome::Updated(id) => {
            let title = board.find(id).map(|n| n.title()).unwrap_or_default();
            writeln!(out, "Updated: {} [{}]", title, id)?;
        }
        SubmitOutcome::Rejected => {
            writeln!(
                out,
                "Nothing changed: title and content must not be blank."
            )?;
        }
        other => bail!("note {} was not updated: {:?}", id, other),
    }

    Ok(())
}

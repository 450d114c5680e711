//! Add command handler.

use anyhow::{Result, bail};
use std::io::Write;

use crate::board::{Clock, NoteBoard, SubmitOutcome};
use crate::cli::AddArgs;
use crate::store::KeyValueStore;

/// Fills the draft from the arguments and submits it as a new note.
///
/// A blank title or content is not an error: nothing is added and a notice
/// is printed instead.
pub fn handle_add<S: KeyValueStore, C: Clock>(
    args: &AddArgs,
    board: &mut NoteBoard<S, C>,
    out: &mut impl Write,
) -> Result<()> {
    board.set_draft_title(args.title.as_str());
    board.set_draft_content(args.content.as_str());

    match board.add_note() {
        SubmitOutcome::Added(id) => {
            writeln!(out, "Added: {} [{}]", args.title, id)?;
        }
        SubmitOutcome::Rejected => {
            writeln!(
                out,
                "Nothing added: title and content must not be blank."
            )?;
        }
        other => bail!("unexpected result while adding a note: {:?}", other),
    }

    Ok(())
}

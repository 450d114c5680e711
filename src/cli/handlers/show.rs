//! Show command handler.

use anyhow::Result;
use std::io::Write;

use super::require_note;
use crate::board::{Clock, NoteBoard};
use crate::cli::ShowArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::store::KeyValueStore;

pub fn handle_show<S: KeyValueStore, C: Clock>(
    args: &ShowArgs,
    board: &NoteBoard<S, C>,
    out: &mut impl Write,
) -> Result<()> {
    let note = require_note(board, &args.id)?;

    match args.format {
        OutputFormat::Human => {
            writeln!(out, "# {}", note.title())?;
            writeln!(out)?;
            writeln!(out, "{}", note.content())?;
            writeln!(out)?;

            match note.id().timestamp() {
                Some(created) => writeln!(
                    out,
                    "ID: {}  Created: {}",
                    note.id(),
                    created.format("%Y-%m-%d %H:%M")
                )?,
                None => writeln!(out, "ID: {}", note.id())?,
            }
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from(note));
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}

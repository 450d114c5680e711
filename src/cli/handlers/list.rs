//! List command handler.

use anyhow::{Context, Result};
use std::io::Write;

use super::truncate_str;
use crate::board::{Clock, NoteBoard};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::store::KeyValueStore;

pub fn handle_list<S: KeyValueStore, C: Clock>(
    args: &ListArgs,
    board: &NoteBoard<S, C>,
    out: &mut impl Write,
) -> Result<()> {
    let view = board.view().context("board is not mounted")?;

    match args.format {
        OutputFormat::Human => {
            if view.notes.is_empty() {
                writeln!(out, "No notes found.")?;
            } else {
                writeln!(out, "{:<13}  {:<30}  {}", "ID", "Title", "Content")?;
                writeln!(
                    out,
                    "{:<13}  {:<30}  {}",
                    "-------------",
                    "------------------------------",
                    "----------------------------------------"
                )?;

                for note in view.notes {
                    writeln!(
                        out,
                        "{:<13}  {:<30}  {}",
                        note.id(),
                        truncate_str(note.title(), 30),
                        truncate_str(note.content(), 40)
                    )?;
                }

                writeln!(out)?;
                writeln!(out, "{} note(s)", view.notes.len())?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = view.notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}

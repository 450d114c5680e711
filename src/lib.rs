//! jot - quick titled notes kept in a local key-value store

pub mod board;
pub mod cli;
pub mod domain;
pub mod logging;
pub mod store;

use anyhow::Result;
use clap::Parser;
use std::io;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_edit, handle_list, handle_remove, handle_show,
        open_board,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut out = io::stdout().lock();

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args, &mut out);
    }

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());
    let key = config.notes_key(cli.key.as_deref());
    tracing::debug!(dir = %data_dir.display(), key = %key, "opening note store");

    let mut board = open_board(&data_dir, &key)?;

    match &cli.command {
        Command::List(args) => handle_list(args, &board, &mut out),
        Command::Show(args) => handle_show(args, &board, &mut out),
        Command::Add(args) => handle_add(args, &mut board, &mut out),
        Command::Edit(args) => handle_edit(args, &mut board, &mut out),
        Command::Remove(args) => handle_remove(args, &mut board, &mut out),
        Command::Completions(args) => handle_completions(args, &mut out),
    }
}

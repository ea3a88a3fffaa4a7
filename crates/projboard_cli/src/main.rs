//! Interactive line-based front end for the project board.
//!
//! # Responsibility
//! - Wire a text presentation layer to the process-wide project store.
//! - Route form input through validation and drags through the drop protocol.

mod board;
mod command;

use board::Board;
use command::{Command, HELP};
use log::{debug, info};
use projboard_core::{project_store, DropOutcome, LogSettings, MoveOutcome, ProjectDraft};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    init_logging_from_env();
    info!(
        "event=cli_start module=cli status=ok version={}",
        projboard_core::core_version()
    );

    let mut board = Board::new();
    for listener in board.listeners() {
        project_store().add_listener(move |snapshot| listener(snapshot));
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "projboard {} - type `help` for commands",
        projboard_core::core_version()
    )?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => run(command, &mut board, &mut stdout)?,
            Err(command::CommandError::Empty) => {}
            Err(err) => writeln!(stdout, "{err}")?,
        }
        prompt(&mut stdout)?;
    }

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

fn run(command: Command, board: &mut Board, out: &mut impl Write) -> io::Result<()> {
    debug!("event=command module=cli command={command:?}");
    match command {
        Command::Add {
            title,
            description,
            people,
        } => match ProjectDraft::gather(&title, &description, &people) {
            Ok(draft) => {
                let id = project_store().add_project(draft.title, draft.description, draft.people);
                writeln!(out, "created {id}")?;
                writeln!(out, "{}", board.render())?;
            }
            Err(err) => {
                debug!("event=input_rejected module=cli reason={err}");
                writeln!(out, "Invalid input, please try again!")?;
            }
        },
        Command::Drag { id, target } => {
            let mut store = project_store();
            match board.drag(&id, target, &mut store) {
                DropOutcome::Applied(MoveOutcome::Moved { from, to }) => {
                    writeln!(out, "moved from {from} to {to}")?;
                    writeln!(out, "{}", board.render())?;
                }
                DropOutcome::Applied(MoveOutcome::Unchanged) => {
                    writeln!(out, "already in {target}")?;
                }
                DropOutcome::Applied(MoveOutcome::NotFound) => {
                    writeln!(out, "no project matches `{id}`")?;
                }
                DropOutcome::Rejected => writeln!(out, "drop rejected")?,
            }
        }
        Command::List => writeln!(out, "{}", board.render())?,
        Command::Json => {
            let json = serde_json::to_string_pretty(&board.latest_snapshot())
                .map_err(io::Error::other)?;
            writeln!(out, "{json}")?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

fn init_logging_from_env() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let result = settings.and_then(projboard_core::logging::init_with_settings);
    if let Err(err) = result {
        eprintln!("logging disabled: {err}");
    }
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

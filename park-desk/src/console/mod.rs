//! 控制台 - line-oriented operator surface
//!
//! Reads slash commands from any `BufRead`, applies them to the desk state
//! and writes plain-text replies. A failing command is reported and the
//! loop keeps going; only I/O errors end it early.

pub mod command;
pub mod output;

use std::io::{BufRead, Write};

use crate::core::DeskState;

pub use command::{COMMANDS, ConsoleCommand, parse_command, parse_command_with_clock};

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle one input line, writing the reply to `out`
pub fn handle_line(desk: &mut DeskState, line: &str, out: &mut impl Write) -> anyhow::Result<Flow> {
    let command = match parse_command(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(Flow::Continue),
        Err(e) => {
            tracing::warn!(code = %e.code, line = %line.trim(), "Rejected command");
            writeln!(out, "{}", output::error(&e))?;
            return Ok(Flow::Continue);
        }
    };

    match command {
        ConsoleCommand::Help => write!(out, "{}", output::help())?,
        ConsoleCommand::Show => writeln!(out, "{}", output::tab(desk))?,
        ConsoleCommand::Dump => writeln!(out, "{}", serde_json::to_string_pretty(desk.store().slots())?)?,
        ConsoleCommand::Quit => return Ok(Flow::Quit),
        ConsoleCommand::Desk(cmd) => match desk.apply(cmd) {
            Ok(outcome) => writeln!(out, "{}", output::outcome(&outcome))?,
            Err(e) => {
                tracing::warn!(code = %e.code, error = %e, "Command failed");
                writeln!(out, "{}", output::error(&e))?;
            }
        },
    }
    Ok(Flow::Continue)
}

/// Run until `/quit` or end of input
pub fn run(desk: &mut DeskState, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        if handle_line(desk, &line?, &mut out)? == Flow::Quit {
            tracing::info!("Console closed");
            return Ok(());
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

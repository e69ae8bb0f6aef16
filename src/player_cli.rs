#![cfg(feature = "std")]

//! Interactive terminal play loop.

use std::io::{BufRead, Write};
use std::string::String;
use std::time::Instant;

use crate::{
    game::{GameSession, GameStatus, TypeOutcome},
    ui::{render_panel, render_session_grid},
};

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Letters typed at the cursor, one after another.
    Letters(String),
    /// `:goto A5`
    Goto(usize, usize),
    /// `:tab`
    ToggleDirection,
    /// `:word HELLO`
    Word(String),
    /// `:back`
    Backspace,
    /// `:clear`
    Clear,
    /// `:help`
    Help,
    /// `:quit`
    Quit,
}

const HELP: &str = "\
Commands:
  LETTERS     type letters at the cursor
  :goto A5    move the cursor to column A, row 5
  :tab        toggle between across and down
  :word WORD  submit a whole word
  :back       delete the last typed letter
  :clear      clear typed letters
  :quit       leave the game
";

/// Parse a cell like `A5` (column letter, 1-based row) on a grid of side `size`.
pub fn parse_coord(input: &str, size: usize) -> Result<(usize, usize), String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= size {
        return Err(format!("Column '{}' out of bounds", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok((row - 1, col))
}

/// Parse one line of input.
pub fn parse_command(line: &str, size: usize) -> Result<Command, String> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        if line.is_empty() || !line.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Expected letters or a :command, got '{}'", line));
        }
        return Ok(Command::Letters(line.to_ascii_uppercase()));
    };
    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default().to_ascii_lowercase();
    let arg = parts.next();
    match (name.as_str(), arg) {
        ("goto" | "g", Some(cell)) => parse_coord(cell, size).map(|(r, c)| Command::Goto(r, c)),
        ("tab" | "t", None) => Ok(Command::ToggleDirection),
        ("word" | "w", Some(word)) => Ok(Command::Word(word.to_string())),
        ("back" | "b", None) => Ok(Command::Backspace),
        ("clear" | "c", None) => Ok(Command::Clear),
        ("help" | "h" | "?", None) => Ok(Command::Help),
        ("quit" | "q", None) => Ok(Command::Quit),
        _ => Err(format!("Unknown command ':{}' (try :help)", rest)),
    }
}

fn report<W: Write>(out: &mut W, outcome: &TypeOutcome) -> std::io::Result<()> {
    match outcome {
        TypeOutcome::Pending => Ok(()),
        TypeOutcome::Found(word) => writeln!(out, "Found {}!", word),
        TypeOutcome::AlreadyFound(word) => writeln!(out, "{} was already found.", word),
    }
}

/// Run the play loop until the player quits, input ends or every word is
/// found. Returns the final status.
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    out: &mut W,
) -> anyhow::Result<GameStatus> {
    let started = Instant::now();
    let size = session.grid().size();
    write!(out, "{}", HELP)?;
    let mut lines = input.lines();
    loop {
        write!(out, "{}", render_session_grid(session))?;
        write!(out, "{}", render_panel(session, started.elapsed()))?;
        if session.status() == GameStatus::Complete {
            writeln!(out, "All words found in {:.1}s!", started.elapsed().as_secs_f64())?;
            break;
        }
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = match parse_command(&line, size) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        log::debug!("command {:?}", command);
        match command {
            Command::Letters(letters) => {
                for ch in letters.chars() {
                    let outcome = session.type_letter(ch)?;
                    report(out, &outcome)?;
                }
            }
            Command::Goto(r, c) => session.select(r, c)?,
            Command::ToggleDirection => session.toggle_direction(),
            Command::Word(word) => match session.submit(&word) {
                Ok(TypeOutcome::Pending) => writeln!(out, "{} is not in the grid.", word)?,
                Ok(outcome) => report(out, &outcome)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Backspace => session.backspace(),
            Command::Clear => session.clear_input(),
            Command::Help => write!(out, "{}", HELP)?,
            Command::Quit => break,
        }
    }
    Ok(session.status())
}

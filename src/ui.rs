#![cfg(feature = "std")]

//! Text rendering of the grid and the side panel.

use std::fmt::Write as _;
use std::string::String;
use std::time::Duration;

use crate::{
    game::{Direction, GameSession},
    grid::Grid,
};

fn column_label(c: usize) -> char {
    (b'A' + (c % 26) as u8) as char
}

fn header(out: &mut String, size: usize) {
    let width = size * 2 + 4;
    let bar = "═".repeat(width);
    let _ = writeln!(out, "    ╔{}╗", bar);
    out.push_str("    ║    ");
    for c in 0..size {
        let _ = write!(out, "{} ", column_label(c));
    }
    out.push_str("║\n");
    let _ = writeln!(out, "    ╠{}╣", bar);
}

fn footer(out: &mut String, size: usize) {
    let _ = writeln!(out, "    ╚{}╝", "═".repeat(size * 2 + 4));
}

/// Plain grid with row and column labels.
pub fn render_grid(grid: &Grid) -> String {
    let n = grid.size();
    let mut out = String::new();
    header(&mut out, n);
    for r in 0..n {
        let _ = write!(out, "    ║ {:2} ", r + 1);
        for c in 0..n {
            let ch = grid.letter(r, c).map_or('.', char::from);
            let _ = write!(out, "{} ", ch);
        }
        out.push_str("║\n");
    }
    footer(&mut out, n);
    out
}

/// Grid as the player sees it: found cells in lower case, the cursor in
/// angle brackets.
pub fn render_session_grid(session: &GameSession) -> String {
    let grid = session.grid();
    let n = grid.size();
    let (cur_r, cur_c) = session.cursor();
    let mut out = String::new();
    header(&mut out, n);
    for r in 0..n {
        let _ = write!(out, "    ║ {:2}", r + 1);
        for c in 0..n {
            let mut ch = grid.letter(r, c).map_or('.', char::from);
            if session.is_highlighted(r, c) {
                ch = ch.to_ascii_lowercase();
            }
            if (r, c) == (cur_r, cur_c) {
                let _ = write!(out, "<{}", ch);
            } else if (r, c) == (cur_r, cur_c + 1) {
                let _ = write!(out, ">{}", ch);
            } else {
                let _ = write!(out, " {}", ch);
            }
        }
        if cur_r == r && cur_c + 1 == n {
            out.push_str(">║\n");
        } else {
            out.push_str(" ║\n");
        }
    }
    footer(&mut out, n);
    out
}

/// Clues, found words, timer, score and input buffer.
pub fn render_panel(session: &GameSession, elapsed: Duration) -> String {
    let mut out = String::new();
    out.push_str("    Clues:\n");
    for (i, clue) in session.clues().iter().enumerate() {
        let _ = writeln!(out, "      {}. {}", i + 1, clue);
    }
    out.push_str("    Found:\n");
    if session.found().is_empty() {
        out.push_str("      (none yet)\n");
    }
    for word in session.found() {
        let _ = writeln!(out, "      {}", word);
    }
    let (r, c) = session.cursor();
    let direction = match session.direction() {
        Direction::Across => "across",
        Direction::Down => "down",
    };
    let _ = writeln!(out, "    Time: {:.1}s", elapsed.as_secs_f64());
    let _ = writeln!(out, "    Score: {}", session.score());
    let _ = writeln!(
        out,
        "    Cursor: {}{} ({})  Input: {}",
        column_label(c),
        r + 1,
        direction,
        session.input()
    );
    out
}

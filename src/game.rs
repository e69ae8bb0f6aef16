//! Play state for one puzzle and the across/down word checks it relies on.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    bitboard::BitBoard,
    common::PuzzleError,
    generator::Puzzle,
    grid::Grid,
};

/// Direction the cursor advances and the player reads words in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Complete,
}

/// What a typed letter did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeOutcome {
    /// The letter was buffered and the cursor moved on.
    Pending,
    /// The buffer spelled a target word for the first time.
    Found(String),
    /// The buffer spelled a target word the player already had.
    AlreadyFound(String),
}

/// True when `word` reads from (row, col) in `direction`. Origins off the
/// grid and words that would run off it never match.
pub fn check_word_in_direction(
    grid: &Grid,
    word: &str,
    row: usize,
    col: usize,
    direction: Direction,
) -> bool {
    let n = grid.size();
    if row >= n || col >= n {
        return false;
    }
    let start = match direction {
        Direction::Across => col,
        Direction::Down => row,
    };
    match start.checked_add(word.len()) {
        Some(end) if end <= n => {}
        _ => return false,
    }
    word.bytes().enumerate().all(|(i, b)| {
        let (r, c) = match direction {
            Direction::Across => (row, col + i),
            Direction::Down => (row + i, col),
        };
        grid.letter(r, c) == Some(b)
    })
}

/// Mark every across or down occurrence of `word` in `mask`. Returns the
/// number of occurrences.
pub fn highlight_word(grid: &Grid, word: &str, mask: &mut BitBoard) -> Result<usize, PuzzleError> {
    let Some(first) = word.bytes().next() else {
        return Ok(0);
    };
    let n = grid.size();
    let mut matches = 0;
    for row in 0..n {
        for col in 0..n {
            if grid.letter(row, col) != Some(first) {
                continue;
            }
            for direction in [Direction::Across, Direction::Down] {
                if !check_word_in_direction(grid, word, row, col, direction) {
                    continue;
                }
                matches += 1;
                for i in 0..word.len() {
                    match direction {
                        Direction::Across => mask.set(row, col + i)?,
                        Direction::Down => mask.set(row + i, col)?,
                    }
                }
            }
        }
    }
    Ok(matches)
}

/// State of one play-through of a puzzle.
pub struct GameSession {
    puzzle: Puzzle,
    words: Vec<String>,
    clues: Vec<String>,
    found: Vec<String>,
    score: u32,
    input: String,
    cursor: (usize, usize),
    direction: Direction,
    highlights: BitBoard,
}

impl GameSession {
    /// Start a session. `clues` are shown in order alongside the grid.
    pub fn new(puzzle: Puzzle, clues: Vec<String>) -> Self {
        let size = puzzle.grid().size();
        Self {
            words: puzzle.words(),
            puzzle,
            clues,
            found: Vec::new(),
            score: 0,
            input: String::new(),
            cursor: (0, 0),
            direction: Direction::Across,
            highlights: BitBoard::new(size),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn clues(&self) -> &[String] {
        &self.clues
    }

    /// Words found so far, in the order they were found.
    pub fn found(&self) -> &[String] {
        &self.found
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn highlights(&self) -> &BitBoard {
        &self.highlights
    }

    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.highlights.get(row, col).unwrap_or(false)
    }

    pub fn status(&self) -> GameStatus {
        if self.words.iter().all(|w| self.found.contains(w)) {
            GameStatus::Complete
        } else {
            GameStatus::InProgress
        }
    }

    /// Move the cursor to (row, col).
    pub fn select(&mut self, row: usize, col: usize) -> Result<(), PuzzleError> {
        let n = self.grid().size();
        if row >= n || col >= n {
            return Err(PuzzleError::IndexOutOfBounds { row, col });
        }
        self.cursor = (row, col);
        Ok(())
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Buffer a typed letter. Completing a target word that can be seen
    /// across or down records it; otherwise the cursor steps forward,
    /// wrapping at the grid edge.
    pub fn type_letter(&mut self, ch: char) -> Result<TypeOutcome, PuzzleError> {
        if !ch.is_ascii_alphabetic() {
            return Err(PuzzleError::InvalidCharacter {
                word: self.input.clone(),
                ch,
            });
        }
        self.input.push(ch.to_ascii_uppercase());

        let candidate = self.input.clone();
        if self.words.contains(&candidate) {
            if let Some(outcome) = self.record(&candidate)? {
                self.input.clear();
                return Ok(outcome);
            }
        }

        let n = self.grid().size();
        let (row, col) = self.cursor;
        self.cursor = match self.direction {
            Direction::Across => (row, (col + 1) % n),
            Direction::Down => ((row + 1) % n, col),
        };
        Ok(TypeOutcome::Pending)
    }

    /// Check a whole word at once. Returns `Pending` when it is not a target
    /// word or cannot be seen across or down.
    pub fn submit(&mut self, word: &str) -> Result<TypeOutcome, PuzzleError> {
        let word = crate::common::normalize_word(word)?;
        if !self.words.contains(&word) {
            return Ok(TypeOutcome::Pending);
        }
        Ok(self.record(&word)?.unwrap_or(TypeOutcome::Pending))
    }

    fn record(&mut self, word: &str) -> Result<Option<TypeOutcome>, PuzzleError> {
        if highlight_word(self.puzzle.grid(), word, &mut self.highlights)? == 0 {
            return Ok(None);
        }
        if self.found.iter().any(|w| w == word) {
            return Ok(Some(TypeOutcome::AlreadyFound(word.into())));
        }
        self.found.push(word.into());
        self.score += 1;
        log::info!("found {} (score {})", word, self.score);
        Ok(Some(TypeOutcome::Found(word.into())))
    }
}

//! Common types for the puzzle engine: errors and word normalization.

use alloc::string::String;
use core::fmt;

use crate::bitboard::BitBoardError;

/// Errors returned by grid, generator and session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Underlying bitboard error (e.g., index out of range).
    BitBoardError(BitBoardError),
    /// Grid dimension must be at least one.
    InvalidGridSize,
    /// A word with no letters was supplied.
    EmptyWord,
    /// A word contains something other than `A`-`Z`.
    InvalidCharacter { word: String, ch: char },
    /// A word is longer than the grid is wide, so no origin can hold it.
    WordTooLong {
        word: String,
        len: usize,
        grid_size: usize,
    },
    /// No placement for the word exists on the current grid.
    UnableToPlaceWord { word: String },
    /// Writing the word would overwrite a different letter.
    WordConflict { word: String, row: usize, col: usize },
    /// The placement runs off the grid.
    WordOutOfBounds { word: String },
    /// Row or column outside the grid.
    IndexOutOfBounds { row: usize, col: usize },
    /// A textual grid row has the wrong width or an invalid cell.
    InvalidGridRow { row: usize },
}

impl From<BitBoardError> for PuzzleError {
    fn from(err: BitBoardError) -> Self {
        PuzzleError::BitBoardError(err)
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            PuzzleError::InvalidGridSize => write!(f, "Grid size must be at least 1"),
            PuzzleError::EmptyWord => write!(f, "Word list contains an empty word"),
            PuzzleError::InvalidCharacter { word, ch } => {
                write!(f, "Word '{}' contains invalid character '{}'", word, ch)
            }
            PuzzleError::WordTooLong {
                word,
                len,
                grid_size,
            } => write!(
                f,
                "Word '{}' has {} letters but the grid is only {} wide",
                word, len, grid_size
            ),
            PuzzleError::UnableToPlaceWord { word } => {
                write!(f, "Unable to place word '{}'", word)
            }
            PuzzleError::WordConflict { word, row, col } => write!(
                f,
                "Word '{}' conflicts with an existing letter at ({}, {})",
                word, row, col
            ),
            PuzzleError::WordOutOfBounds { word } => {
                write!(f, "Word '{}' placement is out of bounds", word)
            }
            PuzzleError::IndexOutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the grid", row, col)
            }
            PuzzleError::InvalidGridRow { row } => write!(f, "Grid row {} is malformed", row),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PuzzleError {}

/// Trim and upper-case `raw`, rejecting anything but `A`-`Z`.
pub fn normalize_word(raw: &str) -> Result<String, PuzzleError> {
    let word = raw.trim().to_ascii_uppercase();
    if word.is_empty() {
        return Err(PuzzleError::EmptyWord);
    }
    if let Some(ch) = word.chars().find(|c| !c.is_ascii_uppercase()) {
        return Err(PuzzleError::InvalidCharacter { word, ch });
    }
    Ok(word)
}

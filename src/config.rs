/// Default side length of the puzzle grid.
pub const GRID_SIZE: usize = 12;

/// Random placement attempts per word before falling back to a full sweep.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Letters used to backfill empty cells.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of words drawn from the bank for a fresh puzzle.
pub const WORDS_PER_PUZZLE: usize = 5;

/// Built-in words and the clue shown for each.
pub const WORD_BANK: [(&str, &str); 5] = [
    ("EARTH", "Our planet"),
    ("PYTHON", "Programming language"),
    ("HELLO", "Greeting"),
    ("WORLD", "Everyone, all together"),
    ("CODE", "Script"),
];

/// Runtime knobs for puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub grid_size: usize,
    pub max_attempts: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Look up the clue for a bank word. Returns `None` for words outside the
/// built-in bank.
pub fn clue_for(word: &str) -> Option<&'static str> {
    WORD_BANK
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, clue)| *clue)
}

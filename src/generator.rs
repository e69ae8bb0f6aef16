//! Puzzle generation: place every word on the grid, then backfill.

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::{normalize_word, PuzzleError};
use crate::config::{PuzzleConfig, ALPHABET, WORDS_PER_PUZZLE, WORD_BANK};
use crate::grid::Grid;
use crate::placement::{Orientation, PlacedWord, Placement};

/// A generated puzzle: the filled grid and where each word went.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Puzzle {
    grid: Grid,
    placements: Vec<PlacedWord>,
}

impl Puzzle {
    /// Assemble a puzzle from a grid whose words were placed by hand.
    pub fn new(grid: Grid, placements: Vec<PlacedWord>) -> Self {
        Self { grid, placements }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placed words in input order.
    pub fn placements(&self) -> &[PlacedWord] {
        &self.placements
    }

    /// Target words in input order.
    pub fn words(&self) -> Vec<String> {
        self.placements.iter().map(|p| p.word.clone()).collect()
    }
}

/// Places words according to a [`PuzzleConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    config: PuzzleConfig,
}

impl Generator {
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }

    /// Validate `words`, place each one in order and fill the remaining
    /// cells with random letters.
    pub fn generate<R: Rng, S: AsRef<str>>(
        &self,
        rng: &mut R,
        words: &[S],
    ) -> Result<Puzzle, PuzzleError> {
        let words = validate_words(words, self.config.grid_size)?;
        let mut grid = Grid::new(self.config.grid_size)?;
        let mut placements = Vec::with_capacity(words.len());

        for word in words {
            let placement = match random_placement(rng, &grid, &word, self.config.max_attempts) {
                Ok(p) => p,
                Err(PuzzleError::UnableToPlaceWord { .. }) => {
                    debug!(
                        "no random placement for {} after {} attempts, sweeping",
                        word, self.config.max_attempts
                    );
                    exhaustive_placement(rng, &grid, &word).inspect_err(|e| warn!("{}", e))?
                }
                Err(e) => return Err(e),
            };
            place(&mut grid, &word, placement)?;
            debug!(
                "placed {} at ({}, {}) {}",
                word, placement.row, placement.col, placement.orientation
            );
            placements.push(PlacedWord { word, placement });
        }

        fill_empty(rng, &mut grid);
        Ok(Puzzle { grid, placements })
    }
}

/// Generate a puzzle of side `grid_size` with the default attempt cap.
pub fn generate<R: Rng, S: AsRef<str>>(
    rng: &mut R,
    words: &[S],
    grid_size: usize,
) -> Result<Puzzle, PuzzleError> {
    Generator::new(PuzzleConfig {
        grid_size,
        ..PuzzleConfig::default()
    })
    .generate(rng, words)
}

/// Normalize every word and reject any that cannot fit on the grid.
pub fn validate_words<S: AsRef<str>>(
    words: &[S],
    grid_size: usize,
) -> Result<Vec<String>, PuzzleError> {
    if grid_size == 0 {
        return Err(PuzzleError::InvalidGridSize);
    }
    words
        .iter()
        .map(|w| {
            let word = normalize_word(w.as_ref())?;
            if word.len() > grid_size {
                let len = word.len();
                return Err(PuzzleError::WordTooLong {
                    word,
                    len,
                    grid_size,
                });
            }
            Ok(word)
        })
        .collect()
}

/// True when every cell `word` would cover is empty or already holds the
/// letter it needs.
pub fn can_place(grid: &Grid, word: &str, placement: Placement) -> bool {
    placement.fits(word.len(), grid.size())
        && placement
            .cells(word.len())
            .zip(word.bytes())
            .all(|((r, c), b)| match grid.get(r, c) {
                Ok(None) => true,
                Ok(Some(existing)) => existing == b,
                Err(_) => false,
            })
}

/// Write `word` into `grid` at `placement`.
pub fn place(grid: &mut Grid, word: &str, placement: Placement) -> Result<(), PuzzleError> {
    placement.check_bounds(word, grid.size())?;
    for ((r, c), b) in placement.cells(word.len()).zip(word.bytes()) {
        if let Some(existing) = grid.get(r, c)? {
            if existing != b {
                return Err(PuzzleError::WordConflict {
                    word: word.into(),
                    row: r,
                    col: c,
                });
            }
        }
    }
    for ((r, c), b) in placement.cells(word.len()).zip(word.bytes()) {
        grid.set(r, c, b)?;
    }
    Ok(())
}

/// Try up to `max_attempts` uniformly random placements for `word`.
pub fn random_placement<R: Rng>(
    rng: &mut R,
    grid: &Grid,
    word: &str,
    max_attempts: usize,
) -> Result<Placement, PuzzleError> {
    let size = grid.size();
    if word.is_empty() {
        return Err(PuzzleError::EmptyWord);
    }
    if word.len() > size {
        return Err(PuzzleError::WordTooLong {
            word: word.into(),
            len: word.len(),
            grid_size: size,
        });
    }
    let mut attempts = 0;
    while attempts < max_attempts {
        attempts += 1;
        let orientation = Orientation::ALL[rng.random_range(0..Orientation::ALL.len())];
        let Some((max_r, max_c)) = orientation.max_origin(word.len(), size) else {
            continue;
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let placement = Placement::new(r, c, orientation);
        if can_place(grid, word, placement) {
            return Ok(placement);
        }
    }
    Err(PuzzleError::UnableToPlaceWord { word: word.into() })
}

/// Check every candidate placement for `word` in shuffled order and return
/// the first that fits.
pub fn exhaustive_placement<R: Rng>(
    rng: &mut R,
    grid: &Grid,
    word: &str,
) -> Result<Placement, PuzzleError> {
    let mut candidates: Vec<Placement> = Orientation::ALL
        .iter()
        .filter_map(|&o| o.max_origin(word.len(), grid.size()).map(|m| (o, m)))
        .flat_map(|(o, (max_r, max_c))| {
            (0..=max_r).flat_map(move |r| (0..=max_c).map(move |c| Placement::new(r, c, o)))
        })
        .collect();
    candidates.shuffle(rng);
    candidates
        .into_iter()
        .find(|&p| can_place(grid, word, p))
        .ok_or_else(|| PuzzleError::UnableToPlaceWord { word: word.into() })
}

/// Fill every empty cell with a uniformly random letter.
pub fn fill_empty<R: Rng>(rng: &mut R, grid: &mut Grid) {
    let empty: Vec<(usize, usize)> = grid.empty_cells().collect();
    for (r, c) in empty {
        let letter = ALPHABET[rng.random_range(0..ALPHABET.len())];
        // cells come from the grid itself, so they are in bounds
        let _ = grid.set(r, c, letter);
    }
}

/// Draw `WORDS_PER_PUZZLE` words from the built-in bank in random order,
/// each with its clue.
pub fn generate_words<R: Rng>(rng: &mut R) -> Vec<(&'static str, &'static str)> {
    let mut bank = WORD_BANK.to_vec();
    bank.shuffle(rng);
    bank.truncate(WORDS_PER_PUZZLE);
    bank
}

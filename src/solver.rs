//! Exhaustive word search over a grid.
//!
//! Every cell is tried as a starting point and the search walks
//! orthogonally adjacent cells (up, down, left, right) while the path spells
//! a prefix in the trie. Cells on the current path are tracked in a visited
//! bitmap, so the grid itself is only ever read. A word is reported once:
//! its end-of-word marker is cleared when it is first matched, and trie
//! nodes that no longer lead to an unfound word are unlinked on the way
//! back up, which shrinks later searches.
//!
//! Words that only occur diagonally are not found; adjacency here is
//! orthogonal regardless of how the generator placed them.

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::debug;

use crate::bitboard::BitBoard;
use crate::grid::Grid;
use crate::trie::{NodeId, Trie};

const NEIGHBOURS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Word finder for one word list.
pub struct Solver {
    words: Vec<String>,
    trie: Trie,
    found: BTreeSet<String>,
    visited: BitBoard,
    path: String,
}

impl Solver {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_string()).collect(),
            trie: Trie::from_words(words),
            found: BTreeSet::new(),
            visited: BitBoard::new(0),
            path: String::new(),
        }
    }

    /// The trie as left by the last search.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Words found by the last search.
    pub fn found(&self) -> &BTreeSet<String> {
        &self.found
    }

    /// Search `grid` from every cell and return every word found. Each call
    /// starts from a fresh trie, so results never carry over between grids.
    pub fn solve(&mut self, grid: &Grid) -> BTreeSet<String> {
        self.trie = Trie::from_words(&self.words);
        self.found.clear();
        let n = grid.size();
        if self.visited.size() != n {
            self.visited = BitBoard::new(n);
        }
        let root = self.trie.root();
        for row in 0..n {
            for col in 0..n {
                let starts = grid
                    .letter(row, col)
                    .is_some_and(|b| self.trie.child(root, b).is_some());
                if starts {
                    self.path.clear();
                    self.backtrack(grid, row, col, root);
                }
            }
        }
        debug!("solver found {} word(s) on {}x{} grid", self.found.len(), n, n);
        self.found.clone()
    }

    fn backtrack(&mut self, grid: &Grid, row: usize, col: usize, parent: NodeId) {
        let Some(letter) = grid.letter(row, col) else {
            return;
        };
        let Some(node) = self.trie.child(parent, letter) else {
            return;
        };

        self.path.push(char::from(letter));
        if self.trie.consume(node) {
            self.found.insert(self.path.clone());
        }

        let _ = self.visited.set(row, col);
        for (dr, dc) in NEIGHBOURS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if r >= grid.size() || c >= grid.size() || self.visited.get(r, c).unwrap_or(true) {
                continue;
            }
            if grid
                .letter(r, c)
                .is_some_and(|b| self.trie.child(node, b).is_some())
            {
                self.backtrack(grid, r, c, node);
            }
        }
        let _ = self.visited.clear(row, col);
        self.path.pop();

        if !self.trie.has_children(node) {
            self.trie.prune(parent, letter);
        }
    }
}

/// Return the words from `words` that can be traced through orthogonally
/// adjacent cells of `grid`.
pub fn find_words<S: AsRef<str>>(grid: &Grid, words: &[S]) -> BTreeSet<String> {
    Solver::new(words).solve(grid)
}

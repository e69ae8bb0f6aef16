//! Word placement: origin, orientation and the cells a word covers.

use core::fmt;

use crate::common::PuzzleError;

/// Orientation of a word on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    Diagonal,
}

impl Orientation {
    /// Every orientation the generator may choose.
    pub const ALL: [Orientation; 3] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
    ];

    /// Row and column step for one letter.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
        }
    }

    /// Largest origin row and column for a word of `len` letters on a grid of
    /// side `size`, or `None` when the word cannot fit at all.
    pub fn max_origin(self, len: usize, size: usize) -> Option<(usize, usize)> {
        if len == 0 || len > size {
            return None;
        }
        let (dr, dc) = self.step();
        Some((size - 1 - dr * (len - 1), size - 1 - dc * (len - 1)))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Diagonal => "diagonal",
        };
        f.write_str(name)
    }
}

/// Where a word starts and which way it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Whether a word of `len` letters stays inside a `size×size` grid.
    pub fn fits(&self, len: usize, size: usize) -> bool {
        match self.orientation.max_origin(len, size) {
            Some((max_r, max_c)) => self.row <= max_r && self.col <= max_c,
            None => false,
        }
    }

    /// Cells covered by a word of `len` letters, in letter order.
    pub fn cells(&self, len: usize) -> Cells {
        let (dr, dc) = self.orientation.step();
        Cells {
            row: self.row,
            col: self.col,
            dr,
            dc,
            remaining: len,
        }
    }

    /// Validate that `word` fits from this origin.
    pub fn check_bounds(&self, word: &str, size: usize) -> Result<(), PuzzleError> {
        if self.fits(word.len(), size) {
            Ok(())
        } else {
            Err(PuzzleError::WordOutOfBounds { word: word.into() })
        }
    }
}

/// Iterator over the `(row, col)` cells of a placement.
#[derive(Debug, Clone)]
pub struct Cells {
    row: usize,
    col: usize,
    dr: usize,
    dc: usize,
    remaining: usize,
}

impl Iterator for Cells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let cell = (self.row, self.col);
        self.remaining -= 1;
        self.row += self.dr;
        self.col += self.dc;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Cells {}

/// A word together with the placement it was written at.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlacedWord {
    pub word: alloc::string::String,
    pub placement: Placement,
}

//! The letter grid: an N×N matrix of optional uppercase letters.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::PuzzleError;

/// Square letter grid. Empty cells only exist while a puzzle is being built.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl Grid {
    /// Create an empty grid of side `size`.
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::InvalidGridSize);
        }
        Ok(Grid {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Build a grid from text rows. `.` marks an empty cell; letters are
    /// upper-cased. Every row must be as long as there are rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, PuzzleError> {
        let mut grid = Grid::new(rows.len())?;
        for (r, row) in rows.iter().enumerate() {
            let bytes = row.as_ref().as_bytes();
            if bytes.len() != grid.size {
                return Err(PuzzleError::InvalidGridRow { row: r });
            }
            for (c, &b) in bytes.iter().enumerate() {
                match b {
                    b'.' => {}
                    b if b.is_ascii_alphabetic() => grid.set(r, c, b.to_ascii_uppercase())?,
                    _ => return Err(PuzzleError::InvalidGridRow { row: r }),
                }
            }
        }
        Ok(grid)
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, PuzzleError> {
        if row >= self.size || col >= self.size {
            Err(PuzzleError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.size + col)
        }
    }

    /// Contents of (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Option<u8>, PuzzleError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Letter at (row, col); `None` when empty or off the grid.
    #[inline]
    pub fn letter(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col).ok().and_then(|idx| self.cells[idx])
    }

    /// Write `letter` at (row, col).
    pub fn set(&mut self, row: usize, col: usize, letter: u8) -> Result<(), PuzzleError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = Some(letter);
        Ok(())
    }

    /// True once every cell holds a letter.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Positions of all empty cells, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(i, _)| (i / n, i % n))
    }

    /// Row `r` as text, `.` for empty cells.
    pub fn row_string(&self, r: usize) -> String {
        self.cells[r * self.size..(r + 1) * self.size]
            .iter()
            .map(|c| c.map_or('.', char::from))
            .collect()
    }

    /// All rows as text.
    pub fn rows(&self) -> Vec<String> {
        (0..self.size).map(|r| self.row_string(r)).collect()
    }

    /// Read the letters along `cells`, stopping at the first empty or
    /// out-of-bounds cell.
    pub fn read<I>(&self, cells: I) -> String
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        cells
            .into_iter()
            .map_while(|(r, c)| self.letter(r, c))
            .map(char::from)
            .collect()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {}, rows: [", self.size)?;
        for r in 0..self.size {
            writeln!(f, "  {}", self.row_string(r))?;
        }
        write!(f, "] }}")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                if c > 0 {
                    f.write_str(" ")?;
                }
                let ch = self.cells[r * self.size + c].map_or('.', char::from);
                write!(f, "{}", ch)?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

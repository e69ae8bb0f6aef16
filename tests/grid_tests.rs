use wordsearch::{Grid, PuzzleError};

#[test]
fn test_new_rejects_zero() {
    assert_eq!(Grid::new(0).unwrap_err(), PuzzleError::InvalidGridSize);
}

#[test]
fn test_set_get_and_bounds() {
    let mut grid = Grid::new(3).unwrap();
    assert_eq!(grid.get(1, 1).unwrap(), None);
    grid.set(1, 1, b'Q').unwrap();
    assert_eq!(grid.get(1, 1).unwrap(), Some(b'Q'));
    assert_eq!(grid.letter(1, 1), Some(b'Q'));
    assert_eq!(grid.letter(5, 5), None);
    assert_eq!(
        grid.set(3, 0, b'A').unwrap_err(),
        PuzzleError::IndexOutOfBounds { row: 3, col: 0 }
    );
    assert!(!grid.is_complete());
    assert_eq!(grid.empty_cells().count(), 8);
}

#[test]
fn test_from_rows_roundtrip_text() {
    let grid = Grid::from_rows(&["cat.", "...D", "...O", "...G"]).unwrap();
    assert_eq!(grid.size(), 4);
    assert_eq!(grid.row_string(0), "CAT.");
    assert_eq!(grid.rows(), vec!["CAT.", "...D", "...O", "...G"]);
    assert_eq!(grid.to_string().lines().next(), Some("C A T ."));
}

#[test]
fn test_from_rows_rejects_ragged_or_bad_cells() {
    assert_eq!(
        Grid::from_rows(&["AB", "C"]).unwrap_err(),
        PuzzleError::InvalidGridRow { row: 1 }
    );
    assert_eq!(
        Grid::from_rows(&["A1", "CD"]).unwrap_err(),
        PuzzleError::InvalidGridRow { row: 0 }
    );
}

#[test]
fn test_read_stops_at_empty() {
    let grid = Grid::from_rows(&["AB.", "...", "..."]).unwrap();
    assert_eq!(grid.read([(0, 0), (0, 1), (0, 2)]), "AB");
}

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wordsearch::{
    can_place, exhaustive_placement, generate, generate_words, place, random_placement,
    validate_words, Generator, Grid, Orientation, Placement, PuzzleConfig, PuzzleError,
    WORDS_PER_PUZZLE,
};

fn read_placed(grid: &Grid, word: &str, placement: Placement) -> String {
    grid.read(placement.cells(word.len()))
}

#[test]
fn test_generate_places_every_word() {
    let mut rng = SmallRng::seed_from_u64(42);
    let words = ["EARTH", "PYTHON", "HELLO", "WORLD", "CODE"];
    let puzzle = generate(&mut rng, &words, 12).unwrap();

    assert!(puzzle.grid().is_complete());
    assert_eq!(puzzle.placements().len(), words.len());
    for (placed, word) in puzzle.placements().iter().zip(words) {
        assert_eq!(placed.word, word);
        assert_eq!(read_placed(puzzle.grid(), word, placed.placement), word);
    }
}

#[test]
fn test_generate_normalizes_words() {
    let mut rng = SmallRng::seed_from_u64(7);
    let puzzle = generate(&mut rng, &[" cat "], 5).unwrap();
    assert_eq!(puzzle.words(), vec!["CAT".to_string()]);
}

#[test]
fn test_generate_is_reproducible() {
    let words = ["ALPHA", "BETA", "GAMMA"];
    let a = generate(&mut SmallRng::seed_from_u64(9), &words, 8).unwrap();
    let b = generate(&mut SmallRng::seed_from_u64(9), &words, 8).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_word_longer_than_grid_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = generate(&mut rng, &["ABCDE"], 4).unwrap_err();
    assert_eq!(
        err,
        PuzzleError::WordTooLong {
            word: "ABCDE".into(),
            len: 5,
            grid_size: 4
        }
    );
}

#[test]
fn test_invalid_words_are_rejected() {
    assert_eq!(
        validate_words(&["OK", ""], 5).unwrap_err(),
        PuzzleError::EmptyWord
    );
    assert_eq!(
        validate_words(&["NO-GO"], 5).unwrap_err(),
        PuzzleError::InvalidCharacter {
            word: "NO-GO".into(),
            ch: '-'
        }
    );
    assert_eq!(
        validate_words(&["A"], 0).unwrap_err(),
        PuzzleError::InvalidGridSize
    );
}

#[test]
fn test_full_length_word_fits() {
    let mut rng = SmallRng::seed_from_u64(3);
    let puzzle = generate(&mut rng, &["ABCD"], 4).unwrap();
    let placed = &puzzle.placements()[0];
    assert_eq!(read_placed(puzzle.grid(), "ABCD", placed.placement), "ABCD");
    if placed.placement.orientation == Orientation::Diagonal {
        assert_eq!((placed.placement.row, placed.placement.col), (0, 0));
    }
}

#[test]
fn test_crossing_shares_letters() {
    let mut grid = Grid::new(5).unwrap();
    place(&mut grid, "CAT", Placement::new(0, 0, Orientation::Horizontal)).unwrap();
    // ART down from the A of CAT
    assert!(can_place(&grid, "ART", Placement::new(0, 1, Orientation::Vertical)));
    place(&mut grid, "ART", Placement::new(0, 1, Orientation::Vertical)).unwrap();
    assert_eq!(grid.row_string(0), "CAT..");
    assert_eq!(grid.row_string(2), ".T...");
}

#[test]
fn test_conflicting_overwrite_is_rejected() {
    let mut grid = Grid::new(5).unwrap();
    place(&mut grid, "CAT", Placement::new(0, 0, Orientation::Horizontal)).unwrap();
    let p = Placement::new(0, 2, Orientation::Vertical);
    assert!(!can_place(&grid, "DOG", p));
    assert_eq!(
        place(&mut grid, "DOG", p).unwrap_err(),
        PuzzleError::WordConflict {
            word: "DOG".into(),
            row: 0,
            col: 2
        }
    );
    // nothing was written
    assert_eq!(grid.get(1, 2).unwrap(), None);
}

#[test]
fn test_out_of_bounds_placement() {
    let mut grid = Grid::new(3).unwrap();
    assert_eq!(
        place(&mut grid, "ABC", Placement::new(1, 1, Orientation::Diagonal)).unwrap_err(),
        PuzzleError::WordOutOfBounds { word: "ABC".into() }
    );
}

#[test]
fn test_random_placement_respects_attempt_cap() {
    let mut grid = Grid::from_rows(&["XX", "XX"]).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(
        random_placement(&mut rng, &grid, "AB", 50).unwrap_err(),
        PuzzleError::UnableToPlaceWord { word: "AB".into() }
    );
    assert!(exhaustive_placement(&mut rng, &grid, "AB").is_err());

    grid = Grid::from_rows(&["XX", "X."]).unwrap();
    let p = exhaustive_placement(&mut rng, &grid, "XA").unwrap();
    assert!(can_place(&grid, "XA", p));
}

#[test]
fn test_sweep_finds_the_only_slot() {
    // zero random attempts forces the sweep
    let generator = Generator::new(PuzzleConfig {
        grid_size: 3,
        max_attempts: 0,
    });
    let mut rng = SmallRng::seed_from_u64(11);
    let puzzle = generator.generate(&mut rng, &["ABC", "ABC", "ABC"]).unwrap();
    for placed in puzzle.placements() {
        assert_eq!(read_placed(puzzle.grid(), "ABC", placed.placement), "ABC");
    }
}

#[test]
fn test_unplaceable_word_fails_instead_of_looping() {
    let generator = Generator::new(PuzzleConfig {
        grid_size: 1,
        max_attempts: 10,
    });
    let mut rng = SmallRng::seed_from_u64(2);
    let err = generator.generate(&mut rng, &["A", "B"]).unwrap_err();
    assert_eq!(err, PuzzleError::UnableToPlaceWord { word: "B".into() });
}

#[test]
fn test_generate_words_draws_from_bank() {
    let mut rng = SmallRng::seed_from_u64(0);
    let words = generate_words(&mut rng);
    assert_eq!(words.len(), WORDS_PER_PUZZLE);
    let mut names: Vec<_> = words.iter().map(|(w, _)| *w).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), WORDS_PER_PUZZLE);
    assert!(words.iter().all(|(_, clue)| !clue.is_empty()));
}

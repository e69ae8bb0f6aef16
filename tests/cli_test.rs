#[cfg(feature = "std")]
mod cli_tests {
    use std::io::Cursor;

    use wordsearch::{
        parse_command, parse_coord, play, ui, Command, GameSession, GameStatus, Grid,
        Orientation, PlacedWord, Placement, Puzzle,
    };

    fn session() -> GameSession {
        let grid = Grid::from_rows(&["CATD", "XXXO", "XXXG", "XXXX"]).unwrap();
        let puzzle = Puzzle::new(
            grid,
            vec![
                PlacedWord {
                    word: "CAT".into(),
                    placement: Placement::new(0, 0, Orientation::Horizontal),
                },
                PlacedWord {
                    word: "DOG".into(),
                    placement: Placement::new(0, 3, Orientation::Vertical),
                },
            ],
        );
        GameSession::new(puzzle, vec!["Purrs".into(), "Barks".into()])
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1", 4), Ok((0, 0)));
        assert_eq!(parse_coord("d4", 4), Ok((3, 3)));
        assert!(parse_coord("E1", 4).is_err());
        assert!(parse_coord("A0", 4).is_err());
        assert!(parse_coord("A5", 4).is_err());
        assert!(parse_coord("1A", 4).is_err());
        assert!(parse_coord("", 4).is_err());
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("cat", 4), Ok(Command::Letters("CAT".into())));
        assert_eq!(parse_command(":goto B3", 4), Ok(Command::Goto(2, 1)));
        assert_eq!(parse_command(":tab", 4), Ok(Command::ToggleDirection));
        assert_eq!(parse_command(":word dog", 4), Ok(Command::Word("dog".into())));
        assert_eq!(parse_command(":q", 4), Ok(Command::Quit));
        assert!(parse_command(":bogus", 4).is_err());
        assert!(parse_command("c4t", 4).is_err());
    }

    #[test]
    fn test_play_until_complete() {
        let mut s = session();
        let input = Cursor::new("cat\n:goto D1\n:tab\ndog\n");
        let mut out = Vec::new();
        let status = play(&mut s, input, &mut out).unwrap();
        assert_eq!(status, GameStatus::Complete);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Found CAT!"));
        assert!(text.contains("Found DOG!"));
        assert!(text.contains("All words found"));
    }

    #[test]
    fn test_play_quit_and_bad_input() {
        let mut s = session();
        let input = Cursor::new("c4t\n:word TAC\n:quit\ncat\n");
        let mut out = Vec::new();
        let status = play(&mut s, input, &mut out).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(s.score(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Expected letters"));
        assert!(text.contains("TAC is not in the grid."));
    }

    #[test]
    fn test_render_marks_found_cells_and_cursor() {
        let mut s = session();
        s.submit("CAT").unwrap();
        let grid = ui::render_session_grid(&s);
        assert!(grid.contains("<c>a t D"));
        let panel = ui::render_panel(&s, std::time::Duration::from_millis(1500));
        assert!(panel.contains("Score: 1"));
        assert!(panel.contains("Time: 1.5s"));
        assert!(panel.contains("1. Purrs"));
    }
}

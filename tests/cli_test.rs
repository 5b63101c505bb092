#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use broadside::{
        ui::{cell_symbol, render_grid},
        Board, BoardError, Cell, CliPlayer, Coordinate, GuessResult, Player,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::new(
            "tester".to_string(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    #[test]
    fn test_cli_player_reprompts_until_valid() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = Board::random(&mut rng).unwrap();
        let mut cli = player("z9\nK1\n  C4 \n");
        let target = cli
            .select_target(&mut rng, &board.visible_grid_fog_of_war())
            .unwrap();
        assert_eq!(target, Coordinate::new(3, 4).unwrap());
        assert_eq!(cli.name(), "tester");
    }

    #[test]
    fn test_cli_player_end_of_input() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = Board::random(&mut rng).unwrap();
        let mut cli = player("nonsense\n");
        let err = cli
            .select_target(&mut rng, &board.visible_grid_fog_of_war())
            .unwrap_err();
        assert_eq!(err, BoardError::InputClosed);
    }

    #[test]
    fn test_cli_player_reports_result() {
        let mut cli = player("");
        cli.handle_guess_result(Coordinate::new(1, 1).unwrap(), GuessResult::Hit);
        cli.handle_guess_result(Coordinate::new(10, 10).unwrap(), GuessResult::Sink);
        let text = String::from_utf8(cli.output().clone()).unwrap();
        assert_eq!(text, "hit at A1\nsunk at J10\n");
    }

    #[test]
    fn test_cli_player_prompt_shows_board_and_errors() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = Board::random(&mut rng).unwrap();
        let mut cli = player("A0\nB2\n");
        cli.select_target(&mut rng, &board.visible_grid_fog_of_war())
            .unwrap();
        let text = String::from_utf8(cli.output().clone()).unwrap();
        assert!(text.contains("It is now tester's turn."));
        assert!(text.contains("      A     B     C"));
        assert_eq!(text.matches("coordinates target = ").count(), 2);
        assert!(text.contains(&BoardError::InvalidCoordinateFormat.to_string()));
    }

    #[test]
    fn test_render_grid_layout() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut board = Board::random(&mut rng).unwrap();
        board.attack(Coordinate::new(1, 1).unwrap());
        let grid = board.visible_grid_with_ships();
        let text = render_grid(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 2 * 10);
        assert_eq!(lines[0], "      A     B     C     D     E     F     G     H     I     J ");
        assert_eq!(lines[1], format!("   {}-", "-".repeat(60)));
        assert!(lines[2].starts_with(" 1 |  "));
        assert!(lines[20].starts_with("10 |  "));
        assert!(lines[2].ends_with("  |"));

        let first = cell_symbol(grid[0][0]);
        assert!(lines[2].starts_with(&format!(" 1 |  {}", first)));
        assert_ne!(grid[0][0], Cell::Empty);
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(cell_symbol(Cell::Empty), ' ');
        assert_eq!(cell_symbol(Cell::Miss), 'O');
        assert_eq!(cell_symbol(Cell::Ship), 'S');
        assert_eq!(cell_symbol(Cell::Damaged), 'X');
        assert_eq!(cell_symbol(Cell::Sunk), '$');
    }
}

#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{
        parse_coord, play_move, Board, CliPlayer, Coord, Orientation, ParseCoordError, Player,
        Ship, ShotResult,
    };

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3 4"), Ok(Coord::new(2, 3)));
        assert_eq!(parse_coord("  1\t6 \n"), Ok(Coord::new(0, 5)));
        // syntactically fine, rejected later by the board
        assert_eq!(parse_coord("0 1"), Ok(Coord::new(-1, 0)));
        assert_eq!(parse_coord("7 7"), Ok(Coord::new(6, 6)));
    }

    #[test]
    fn test_parse_coord_errors() {
        assert_eq!(parse_coord(""), Err(ParseCoordError::WrongCount(0)));
        assert_eq!(parse_coord("1"), Err(ParseCoordError::WrongCount(1)));
        assert_eq!(parse_coord("1 2 3"), Err(ParseCoordError::WrongCount(3)));
        assert_eq!(parse_coord("a b"), Err(ParseCoordError::NotANumber));
        assert_eq!(parse_coord("-1 2"), Err(ParseCoordError::NotANumber));
        assert_eq!(parse_coord("1 99999999999"), Err(ParseCoordError::NotANumber));
    }

    #[test]
    fn test_cli_player_reprompts_on_bad_syntax() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let input = Cursor::new("a b\n2\n2 3\n");
        let mut player = CliPlayer::new(input, Vec::new());
        assert_eq!(player.choose_target(&mut rng).unwrap(), Coord::new(1, 2));

        let (_, output) = player.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Your move: ").count(), 3);
        assert!(output.contains("Enter numbers!"));
        assert!(output.contains("Enter two coordinates"));
    }

    #[test]
    fn test_cli_player_sees_board_rejections() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut board = Board::new();
        board
            .place_ship(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
            .unwrap();
        board.apply_shot(Coord::new(2, 2)).unwrap();

        let input = Cursor::new("0 0\n3 3\n1 1\n");
        let mut player = CliPlayer::new(input, Vec::new());
        let (target, result) = play_move(&mut player, &mut board, &mut rng).unwrap();
        assert_eq!((target, result), (Coord::new(0, 0), ShotResult::Sunk));

        let (_, output) = player.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("outside the board"));
        assert!(output.contains("already been shot at"));
    }

    #[test]
    fn test_cli_player_fails_on_closed_input() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = CliPlayer::new(Cursor::new(""), Vec::new());
        assert!(player.choose_target(&mut rng).is_err());
    }
}

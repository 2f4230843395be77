use broadside::{Board, BoardError, CellState, Game, GameConfig, BOARD_SIZE};
use proptest::prelude::*;

fn started_board(seed: u64) -> Board {
    let mut game = Game::seeded(GameConfig::default(), seed).unwrap();
    game.start_game().unwrap();
    game.board().clone()
}

fn guessed_cells(board: &Board) -> usize {
    board.cell_grid().count(|c| *c != CellState::Unguessed)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn guess_matches_occupancy(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut board = started_board(seed);
        let occupied = board.ship_grid().get(row, col).copied().flatten().is_some();
        let hit = board.submit_guess(row, col).unwrap().is_hit();
        prop_assert_eq!(hit, occupied);
        let expected = if occupied { CellState::Hit } else { CellState::Miss };
        let cells = board.cell_grid();
        prop_assert_eq!(cells.get(row, col), Some(&expected));
    }

    #[test]
    fn failed_guesses_change_nothing(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        bad_row in -20i64..30,
        bad_col in -20i64..30,
    ) {
        let mut board = started_board(seed);
        board.submit_guess(row, col).unwrap();
        let before = board.clone();

        let err = board.submit_guess(row, col).unwrap_err();
        prop_assert_eq!(err, BoardError::DuplicateGuess { row, col });
        prop_assert_eq!(&board, &before);

        let in_bounds = (0..BOARD_SIZE as i64).contains(&bad_row)
            && (0..BOARD_SIZE as i64).contains(&bad_col);
        if !in_bounds {
            let err = board.submit_guess(bad_row, bad_col).unwrap_err();
            prop_assert_eq!(err, BoardError::OutOfBounds { row: bad_row as i128, col: bad_col as i128 });
            prop_assert_eq!(&board, &before);
        }
    }

    #[test]
    fn counter_tracks_successful_guesses(seed in any::<u64>(), guesses in prop::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..60)) {
        let mut board = started_board(seed);
        let mut ok = 0;
        for (r, c) in guesses {
            let before = board.guess_count();
            match board.submit_guess(r, c) {
                Ok(_) => ok += 1,
                Err(_) => prop_assert_eq!(board.guess_count(), before),
            }
            prop_assert!(board.guess_count() >= before);
            prop_assert_eq!(board.guess_count(), guessed_cells(&board));
        }
        prop_assert_eq!(board.guess_count(), ok);
    }

    #[test]
    fn sinking_every_ship_cell_wins(seed in any::<u64>()) {
        let mut board = started_board(seed);
        let ships = board.ship_grid();
        // all misses first: the game must stay open
        for ((r, c), cell) in ships.iter() {
            if cell.is_none() {
                board.submit_guess(r, c).unwrap();
            }
        }
        prop_assert!(!board.are_all_ships_sunk());
        prop_assert!(!board.is_game_over());

        let ship_cells: Vec<_> = ships.iter().filter(|(_, c)| c.is_some()).map(|(rc, _)| rc).collect();
        let last = ship_cells.len() - 1;
        for (i, (r, c)) in ship_cells.into_iter().enumerate() {
            prop_assert!(!board.are_all_ships_sunk());
            board.submit_guess(r, c).unwrap();
            prop_assert_eq!(board.is_game_over(), i == last);
        }
        prop_assert!(board.are_all_ships_sunk());
        prop_assert_eq!(board.guess_count(), BOARD_SIZE * BOARD_SIZE);
    }
}

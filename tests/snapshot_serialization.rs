use broadside::{Game, GameConfig, GameStatus, Snapshot};
use proptest::prelude::*;

#[test]
fn test_snapshot_hides_ships_until_over() {
    let mut game = Game::seeded(GameConfig::default(), 31).unwrap();
    game.start_game().unwrap();
    let hidden = Snapshot::capture(&game, false);
    assert!(hidden.ships.is_none());
    assert_eq!(hidden.status, GameStatus::InProgress);
    assert!(hidden.sunk.is_empty());

    let revealed = Snapshot::capture(&game, true);
    assert_eq!(revealed.ships.as_ref(), Some(&game.ship_grid()));

    let ships = game.ship_grid();
    for ((r, c), cell) in ships.iter() {
        if cell.is_some() {
            game.submit_guess(r, c).unwrap();
        }
    }
    let done = Snapshot::capture(&game, false);
    assert_eq!(done.status, GameStatus::Won);
    assert!(done.ships.is_some());
    assert_eq!(done.sunk.len(), 5);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn snapshot_bincode_roundtrip(seed in any::<u64>(), guesses in prop::collection::vec((0usize..10, 0usize..10), 0..30)) {
        let mut game = Game::seeded(GameConfig::default().with_max_guesses(50), seed).unwrap();
        game.start_game().unwrap();
        for (r, c) in guesses {
            let _ = game.submit_guess(r, c);
        }
        let snap = Snapshot::capture(&game, seed % 2 == 0);
        let bytes = snap.to_bytes().unwrap();
        let decoded = Snapshot::from_bytes(&bytes).unwrap();
        prop_assert_eq!(snap, decoded);
    }
}

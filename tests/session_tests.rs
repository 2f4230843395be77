use broadside::{BoardError, GameApi, GameConfig, GameStatus, SharedGame, BOARD_SIZE};

#[tokio::test]
async fn test_session_start_and_guess() {
    let session = SharedGame::seeded(GameConfig::default(), 21).unwrap();
    assert_eq!(session.status().await, GameStatus::NotStarted);
    session.start_game().await.unwrap();
    assert_eq!(session.status().await, GameStatus::InProgress);

    session.submit_guess(0, 0).await.unwrap();
    let err = session.submit_guess(0, 0).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<BoardError>(),
        Some(&BoardError::DuplicateGuess { row: 0, col: 0 })
    );
    let err = session.submit_guess(-1, 3).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BoardError>(),
        Some(BoardError::OutOfBounds { .. })
    ));
    assert_eq!(session.guess_count().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_guesses_are_serialized() {
    let session = SharedGame::seeded(GameConfig::default(), 22).unwrap();
    session.start_game().await.unwrap();

    // every cell is guessed twice from different tasks; exactly one wins
    let mut handles = Vec::new();
    for worker in 0..2 {
        let s = session.clone();
        handles.push(tokio::spawn(async move {
            let mut ok = 0usize;
            for i in 0..BOARD_SIZE * BOARD_SIZE {
                let cell = if worker == 0 { i } else { BOARD_SIZE * BOARD_SIZE - 1 - i };
                let (r, c) = ((cell / BOARD_SIZE) as i64, (cell % BOARD_SIZE) as i64);
                if s.submit_guess(r, c).await.is_ok() {
                    ok += 1;
                }
            }
            ok
        }));
    }
    let mut total = 0;
    for h in handles {
        total += h.await.unwrap();
    }
    let count = session.guess_count().await;
    assert_eq!(total, count);
    let snapshot = session.snapshot(false).await;
    assert_eq!(snapshot.guess_count, count);
    assert_eq!(session.status().await, GameStatus::Won);
}

#[tokio::test]
async fn test_session_as_trait_object() {
    let api: Box<dyn GameApi> = Box::new(SharedGame::seeded(GameConfig::default(), 23).unwrap());
    api.start_game().await.unwrap();
    let snap = api.snapshot(true).await;
    assert!(snap.ships.is_some());
    assert_eq!(snap.cells.size(), BOARD_SIZE);
}

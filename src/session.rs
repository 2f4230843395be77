#![cfg(feature = "std")]

//! Async access to a game shared between tasks.
//!
//! Every call on a [`SharedGame`] locks the session, so two guesses against
//! the same board are applied one after the other.

use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::SmallRng;
use tokio::sync::Mutex;

use crate::core::{Game, GameConfig, GameStatus, GuessOutcome};
use crate::snapshot::Snapshot;

/// Operations a hosting application exposes for one session.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// Place a new fleet and clear all guesses.
    async fn start_game(&self) -> anyhow::Result<()>;
    /// Fire at (`row`, `col`). Board errors are returned as [`crate::BoardError`].
    async fn submit_guess(&self, row: i64, col: i64) -> anyhow::Result<GuessOutcome>;
    async fn snapshot(&self, reveal_ships: bool) -> Snapshot;
    async fn status(&self) -> GameStatus;
}

/// A game behind a per-session mutex.
#[derive(Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Game<SmallRng>>>,
}

impl SharedGame {
    pub fn new(game: Game<SmallRng>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Build an unstarted session with reproducible placements.
    pub fn seeded(config: GameConfig, seed: u64) -> anyhow::Result<Self> {
        Ok(Self::new(Game::seeded(config, seed)?))
    }

    pub async fn guess_count(&self) -> usize {
        self.inner.lock().await.guess_count()
    }
}

#[async_trait]
impl GameApi for SharedGame {
    async fn start_game(&self) -> anyhow::Result<()> {
        self.inner.lock().await.start_game()?;
        Ok(())
    }

    async fn submit_guess(&self, row: i64, col: i64) -> anyhow::Result<GuessOutcome> {
        let outcome = self.inner.lock().await.guess(row, col)?;
        Ok(outcome)
    }

    async fn snapshot(&self, reveal_ships: bool) -> Snapshot {
        let game = self.inner.lock().await;
        Snapshot::capture(&*game, reveal_ships)
    }

    async fn status(&self) -> GameStatus {
        self.inner.lock().await.status()
    }
}

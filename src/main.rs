use broadside::{
    init_logging, place_fleet, GameApi, GameConfig, GameStatus, SharedGame, BOARD_SIZE,
    DEFAULT_PLACEMENT_ATTEMPTS,
};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play automated games that sweep the board in random order.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u64,
        #[arg(long, default_value_t = BOARD_SIZE)]
        grid_size: usize,
        #[arg(long, default_value_t = 0, help = "Guess limit per game, 0 for unlimited")]
        max_guesses: usize,
    },
    /// Print a randomly generated fleet layout as JSON.
    Layout {
        #[arg(long, help = "Fix RNG seed for reproducible layouts")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE)]
        grid_size: usize,
    },
}

fn base_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let mut seed_rng = rand::rng();
        rand::Rng::random(&mut seed_rng)
    })
}

/// Play one session to completion, guessing every cell in shuffled order.
async fn sweep(session: SharedGame, seed: u64) -> anyhow::Result<(GameStatus, usize)> {
    session.start_game().await?;
    let snapshot = session.snapshot(false).await;
    let n = snapshot.cells.size() as i64;
    let mut targets: Vec<(i64, i64)> = (0..n).flat_map(|r| (0..n).map(move |c| (r, c))).collect();
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    targets.shuffle(&mut rng);

    for (r, c) in targets {
        if session.status().await.is_over() {
            break;
        }
        session.submit_guess(r, c).await?;
    }
    Ok((session.status().await, session.guess_count().await))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            seed,
            games,
            grid_size,
            max_guesses,
        } => {
            let base = base_seed(seed);
            log::info!("simulating {} game(s) with base seed {}", games, base);
            let config = GameConfig::default()
                .with_grid_size(grid_size)
                .with_max_guesses(max_guesses);

            let mut handles = Vec::new();
            for game in 0..games {
                let game_seed = base.wrapping_add(game.wrapping_mul(2));
                let session = SharedGame::seeded(config.clone(), game_seed)?;
                handles.push((game, tokio::spawn(sweep(session, game_seed))));
            }

            let mut won = 0u64;
            let mut total_guesses = 0usize;
            for (game, handle) in handles {
                let (status, guesses) = handle.await??;
                if status == GameStatus::Won {
                    won += 1;
                }
                total_guesses += guesses;
                let line = json!({
                    "game": game,
                    "status": format!("{:?}", status),
                    "guesses": guesses,
                });
                println!("{}", serde_json::to_string(&line)?);
            }
            let summary = json!({
                "games": games,
                "won": won,
                "average_guesses": if games == 0 { 0.0 } else { total_guesses as f64 / games as f64 },
            });
            println!("{}", serde_json::to_string(&summary)?);
        }
        Commands::Layout { seed, grid_size } => {
            let mut rng = SmallRng::seed_from_u64(base_seed(seed));
            let config = GameConfig::default().with_grid_size(grid_size);
            let layout = place_fleet(
                config.grid_size,
                &config.fleet,
                DEFAULT_PLACEMENT_ATTEMPTS,
                &mut rng,
            )?;
            println!("{}", serde_json::to_string(layout.placements())?);
        }
    }
    Ok(())
}

//! Headless runner (default binary).
//!
//! Plays games with a random action driver and prints each final grid as
//! text. Useful for smoke-testing the engine and for reproducing a seed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameConfig, GameGrid, GameState};
use blockfall::types::{GameAction, GameEvent, ShapeKind, EMPTY_CELL};

#[derive(Parser, Debug)]
#[command(name = "blockfall")]
#[command(about = "Play headless Tetris games with a random driver")]
struct Cli {
    /// JSON config file (rows, columns, seed); flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    columns: Option<usize>,

    /// Seed for the block queue and the driver; game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(long, default_value = "1")]
    games: u32,

    /// Stop a game after this many commands even if it is still running
    #[arg(long, default_value = "10000")]
    max_actions: u32,
}

#[derive(Debug, Default)]
struct GameSummary {
    actions: u32,
    placements: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let base = load_config(&cli)?;

    for game in 0..cli.games {
        let config = GameConfig {
            seed: base.seed.map(|s| s.wrapping_add(game as u64)),
            ..base.clone()
        };
        let driver_seed = config.seed.unwrap_or_else(rand::random);

        let mut state = GameState::with_config(config).context("invalid game config")?;
        let summary = play(&mut state, ChaCha8Rng::seed_from_u64(driver_seed), cli.max_actions);

        info!(
            game,
            score = state.score(),
            lines = state.lines(),
            placements = summary.placements,
            actions = summary.actions,
            game_over = state.game_over(),
            "game finished"
        );
        println!("{}", render_grid(state.grid()));
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate().context("invalid game config")?;
    Ok(config)
}

fn play(state: &mut GameState, mut rng: ChaCha8Rng, max_actions: u32) -> GameSummary {
    let mut summary = GameSummary::default();

    while !state.game_over() && summary.actions < max_actions {
        let action = GameAction::GAMEPLAY[rng.gen_range(0..GameAction::GAMEPLAY.len())];
        let event = state.apply_action(action);
        summary.actions += 1;

        match event {
            GameEvent::Settled { lines_cleared, .. } | GameEvent::GameOver { lines_cleared, .. } => {
                summary.placements += 1;
                if lines_cleared > 0 {
                    debug!(lines_cleared, score = state.score(), "rows cleared");
                }
            }
            _ => {}
        }
    }

    summary
}

fn render_grid(grid: &GameGrid) -> String {
    grid.iter_rows()
        .map(|row| {
            row.iter()
                .map(|&cell| match ShapeKind::from_id(cell) {
                    Some(kind) => kind.letter(),
                    None if cell == EMPTY_CELL => '.',
                    None => '#',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

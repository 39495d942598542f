//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the Tetris rules: block geometry, the occupancy
//! grid, the block queue, and the game state that drives them. It has no
//! dependencies on rendering, input or I/O beyond reading a config file.
//!
//! - **Deterministic**: a seeded game replays the same block sequence
//! - **Fail-safe**: illegal commands are reverted, never reported as errors
//! - **Event-driven**: every command returns a [`GameEvent`](types::GameEvent)
//!
//! # Module Structure
//!
//! - [`shapes`]: rotation tables and start offsets for the seven shapes
//! - [`block`]: the falling block (shape, rotation, offset)
//! - [`queue`]: random next-block generation without immediate repeats
//! - [`grid`]: occupancy matrix, collision predicates and row clearing
//! - [`scoring`]: points per placement
//! - [`game_state`]: spawning, movement, hold, drops, settling, game over
//! - [`snapshot`]: plain-data view of the game for front ends
//! - [`config`]: grid dimensions and seed
//!
//! # Game Rules
//!
//! - **Spawn**: a new block starts at its shape's offset and sinks up to two
//!   rows into the grid if it fits
//! - **Rotation**: rotate in place, undone on collision (no wall kicks)
//! - **Hold**: once per placement; a block taken out of hold re-spawns
//! - **Scoring**: 11 points per cleared row
//! - **Game over**: a placement leaves anything in the top two rows
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{GameAction, GameEvent};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! let event = game.apply_action(GameAction::HardDrop);
//!
//! assert!(matches!(event, GameEvent::Settled { .. }));
//! assert_eq!(game.grid().occupied_count(), 4);
//! ```

pub mod block;
pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod queue;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game_state::GameState;
pub use grid::GameGrid;
pub use queue::BlockQueue;
pub use scoring::line_clear_score;
pub use snapshot::{BlockSnapshot, GameSnapshot};

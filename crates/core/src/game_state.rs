//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the current block, the hold slot,
//! the block queue and the score. Every command is validated against grid
//! occupancy on a copy of the current block and only committed when the
//! copy fits, so an illegal command leaves the state untouched.
//!
//! A block settles when a downward move collides or on a hard drop. Settling
//! writes the block into the grid, clears full rows, scores them, and either
//! ends the game (something left in the buffer rows) or spawns the next block.

use tracing::{debug, info, trace};

use crate::block::Block;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::grid::GameGrid;
use crate::queue::BlockQueue;
use crate::scoring::line_clear_score;
use crate::snapshot::{BlockSnapshot, GameSnapshot};
use crate::types::{Direction, GameAction, GameEvent, Position, SPAWN_NUDGE_ROWS};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: GameGrid,
    queue: BlockQueue,
    current: Block,
    held: Option<Block>,
    can_hold: bool,
    score: u32,
    lines: u32,
    game_over: bool,
}

impl GameState {
    /// Create a game on the default 22x10 grid with a seeded queue
    pub fn new(seed: u64) -> Self {
        Self::from_valid_config(GameConfig::seeded(seed))
    }

    /// Create a game from a configuration, validating it first
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GameConfig) -> Self {
        let mut queue = match config.seed {
            Some(seed) => BlockQueue::new(seed),
            None => BlockQueue::from_entropy(),
        };
        let first = queue.get_and_update();

        let mut state = Self {
            grid: GameGrid::new(config.rows, config.columns),
            queue,
            current: first,
            held: None,
            can_hold: true,
            score: 0,
            lines: 0,
            game_over: false,
            config,
        };
        state.set_current(first);
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &GameGrid {
        &self.grid
    }

    /// Mutable grid access, for setting up positions in tests and tools
    pub fn grid_mut(&mut self) -> &mut GameGrid {
        &mut self.grid
    }

    pub fn current_block(&self) -> &Block {
        &self.current
    }

    pub fn held_block(&self) -> Option<&Block> {
        self.held.as_ref()
    }

    /// The block that spawns after the current one settles
    pub fn next_block(&self) -> &Block {
        self.queue.next()
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    fn fits(&self, block: &Block) -> bool {
        block
            .tile_positions()
            .all(|p| self.grid.is_empty(p.row, p.column))
    }

    /// Make `block` current: reset it, then sink it up to two rows while it fits
    fn set_current(&mut self, mut block: Block) {
        block.reset();
        for _ in 0..SPAWN_NUDGE_ROWS {
            block.move_by(1, 0);
            if !self.fits(&block) {
                block.move_by(-1, 0);
            }
        }
        self.current = block;
    }

    /// Apply `change` to a copy of the current block and keep it if it fits
    fn try_change(&mut self, change: impl FnOnce(&mut Block)) -> GameEvent {
        if self.game_over {
            trace!("command rejected: game over");
            return GameEvent::Rejected;
        }

        let mut candidate = self.current;
        change(&mut candidate);

        if self.fits(&candidate) {
            self.current = candidate;
            GameEvent::Moved
        } else {
            trace!(kind = ?candidate.kind(), "command rejected: collision");
            GameEvent::Rejected
        }
    }

    fn try_shift(&mut self, direction: Direction) -> GameEvent {
        let (d_row, d_column) = direction.delta();
        self.try_change(|block| block.move_by(d_row, d_column))
    }

    pub fn rotate_block_cw(&mut self) -> GameEvent {
        self.try_change(Block::rotate_cw)
    }

    pub fn rotate_block_ccw(&mut self) -> GameEvent {
        self.try_change(Block::rotate_ccw)
    }

    pub fn move_block_left(&mut self) -> GameEvent {
        self.try_shift(Direction::Left)
    }

    pub fn move_block_right(&mut self) -> GameEvent {
        self.try_shift(Direction::Right)
    }

    /// Move one row down; when the block cannot move it settles instead
    pub fn move_block_down(&mut self) -> GameEvent {
        match self.try_shift(Direction::Down) {
            GameEvent::Rejected if !self.game_over => self.place_block(),
            event => event,
        }
    }

    /// Set the current block aside, or swap it with the held one
    ///
    /// Allowed once per placement. The block coming back out of the hold
    /// slot re-enters through the spawn path, so it starts from its reset
    /// orientation and offset.
    pub fn hold_block(&mut self) -> GameEvent {
        if self.game_over || !self.can_hold {
            trace!(can_hold = self.can_hold, "hold rejected");
            return GameEvent::Rejected;
        }

        match self.held.replace(self.current) {
            Some(held) => self.set_current(held),
            None => {
                let next = self.queue.get_and_update();
                self.set_current(next);
            }
        }
        self.can_hold = false;

        GameEvent::Held
    }

    fn tile_drop_distance(&self, position: Position) -> i32 {
        let mut drop = 0;
        while self.grid.is_empty(position.row + drop + 1, position.column) {
            drop += 1;
        }
        drop
    }

    /// How many rows the current block can fall before it lands
    pub fn block_drop_distance(&self) -> i32 {
        self.current
            .tile_positions()
            .map(|p| self.tile_drop_distance(p))
            .fold(self.grid.rows() as i32, i32::min)
    }

    /// Where the current block would land on a hard drop
    pub fn ghost_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let distance = self.block_drop_distance();
        self.current
            .tile_positions()
            .map(move |p| p.translate(distance, 0))
    }

    /// Drop the current block to its landing row and settle it
    pub fn drop_block(&mut self) -> GameEvent {
        if self.game_over {
            trace!("hard drop rejected: game over");
            return GameEvent::Rejected;
        }

        let distance = self.block_drop_distance();
        self.current.move_by(distance, 0);
        self.place_block()
    }

    /// Settle the current block into the grid
    fn place_block(&mut self) -> GameEvent {
        let id = self.current.id();
        let mut overflow = false;
        for p in self.current.tile_positions() {
            // Only rows above the grid can be out of bounds here. Spawning
            // keeps tiles at row 0 or below, so this needs a pre-filled grid.
            overflow |= !self.grid.set(p.row, p.column, id);
        }

        let cleared = self.grid.clear_full_rows() as u32;
        let points = line_clear_score(cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);

        debug!(
            kind = ?self.current.kind(),
            lines_cleared = cleared,
            points,
            score = self.score,
            "block settled"
        );

        if overflow || !self.grid.buffer_rows_empty() {
            self.game_over = true;
            info!(score = self.score, lines = self.lines, "game over");
            return GameEvent::GameOver {
                lines_cleared: cleared,
                points,
            };
        }

        let next = self.queue.get_and_update();
        self.set_current(next);
        self.can_hold = true;

        GameEvent::Settled {
            lines_cleared: cleared,
            points,
        }
    }

    /// Start over: empty grid, empty hold slot, zero score
    ///
    /// A seeded game replays the same block sequence.
    pub fn restart(&mut self) -> GameEvent {
        info!(score = self.score, lines = self.lines, "restarting game");
        *self = Self::from_valid_config(self.config.clone());
        GameEvent::Restarted
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> GameEvent {
        match action {
            GameAction::MoveLeft => self.move_block_left(),
            GameAction::MoveRight => self.move_block_right(),
            GameAction::MoveDown => self.move_block_down(),
            GameAction::RotateCw => self.rotate_block_cw(),
            GameAction::RotateCcw => self.rotate_block_ccw(),
            GameAction::Hold => self.hold_block(),
            GameAction::HardDrop => self.drop_block(),
            GameAction::Restart => self.restart(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.columns = self.grid.columns();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());

        out.current = BlockSnapshot::from(&self.current);
        let distance = self.block_drop_distance();
        out.ghost = out.current.tiles.map(|p| p.translate(distance, 0));
        out.drop_distance = distance;
        out.held = self.held.as_ref().map(Block::kind);
        out.next = self.queue.next().kind();
        out.can_hold = self.can_hold;
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_valid_config(GameConfig::default())
    }
}

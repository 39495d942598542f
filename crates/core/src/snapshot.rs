//! Snapshot of the query surface, for front ends and tools
//!
//! `GameState::snapshot_into` refills an existing snapshot so a render loop
//! can reuse the cell buffer between frames.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::types::{Cell, Position, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub kind: ShapeKind,
    pub rotation: usize,
    pub tiles: [Position; 4],
}

impl From<&Block> for BlockSnapshot {
    fn from(value: &Block) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            tiles: value.tiles(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub columns: usize,
    /// Row-major cell ids
    pub cells: Vec<Cell>,
    pub current: BlockSnapshot,
    /// Landing cells of the current block
    pub ghost: [Position; 4],
    pub drop_distance: i32,
    pub held: Option<ShapeKind>,
    pub next: ShapeKind,
    pub can_hold: bool,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell id at (row, column), `None` outside the grid
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let block = Block::new(ShapeKind::I);
        Self {
            rows: 0,
            columns: 0,
            cells: Vec::new(),
            current: BlockSnapshot::from(&block),
            ghost: block.tiles(),
            drop_distance: 0,
            held: None,
            next: ShapeKind::I,
            can_hold: true,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}

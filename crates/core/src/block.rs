//! Block module - the falling tetromino
//!
//! A block is a shape kind plus mutable placement state (rotation index and
//! offset). It knows nothing about the grid: moves and rotations are applied
//! blindly and the game state validates and reverts them.

use serde::{Deserialize, Serialize};

use crate::shapes::{get_cells, rotation_states, start_offset};
use crate::types::{Cell, Position, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    kind: ShapeKind,
    rotation: usize,
    offset: Position,
}

impl Block {
    /// Create a block in its spawn orientation at its start offset
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            rotation: 0,
            offset: start_offset(kind),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Grid id written when this block settles
    pub fn id(&self) -> Cell {
        self.kind.id()
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Number of distinct rotation states of this shape
    pub fn rotation_count(&self) -> usize {
        rotation_states(self.kind).len()
    }

    /// Absolute grid cells currently covered, recomputed on every call
    pub fn tile_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let offset = self.offset;
        get_cells(self.kind, self.rotation)
            .iter()
            .map(move |cell| cell.translate(offset.row, offset.column))
    }

    /// Tile positions collected into a fixed array
    pub fn tiles(&self) -> [Position; 4] {
        let offset = self.offset;
        let cells = *get_cells(self.kind, self.rotation);
        cells.map(|cell| cell.translate(offset.row, offset.column))
    }

    pub fn rotate_cw(&mut self) {
        self.rotation = (self.rotation + 1) % self.rotation_count();
    }

    pub fn rotate_ccw(&mut self) {
        let count = self.rotation_count();
        self.rotation = (self.rotation + count - 1) % count;
    }

    /// Translate the offset; no bounds checking
    pub fn move_by(&mut self, d_row: i32, d_column: i32) {
        self.offset = self.offset.translate(d_row, d_column);
    }

    /// Back to rotation 0 at the start offset
    pub fn reset(&mut self) {
        self.rotation = 0;
        self.offset = start_offset(self.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_block_is_reset() {
        let block = Block::new(ShapeKind::I);
        assert_eq!(block.rotation(), 0);
        assert_eq!(block.offset(), Position::new(-1, 3));
        assert_eq!(
            block.tiles(),
            [
                Position::new(0, 3),
                Position::new(0, 4),
                Position::new(0, 5),
                Position::new(0, 6)
            ]
        );
    }

    #[test]
    fn tile_positions_follow_offset() {
        let mut block = Block::new(ShapeKind::O);
        block.move_by(3, -2);
        let tiles: Vec<Position> = block.tile_positions().collect();
        assert_eq!(
            tiles,
            vec![
                Position::new(3, 2),
                Position::new(3, 3),
                Position::new(4, 2),
                Position::new(4, 3)
            ]
        );
    }

    #[test]
    fn rotate_ccw_wraps_from_zero() {
        let mut block = Block::new(ShapeKind::T);
        block.rotate_ccw();
        assert_eq!(block.rotation(), 3);
        block.rotate_cw();
        assert_eq!(block.rotation(), 0);
    }

    #[test]
    fn o_block_rotation_stays_at_zero() {
        let mut block = Block::new(ShapeKind::O);
        block.rotate_cw();
        assert_eq!(block.rotation(), 0);
        block.rotate_ccw();
        assert_eq!(block.rotation(), 0);
    }

    #[test]
    fn reset_restores_spawn_state() {
        let mut block = Block::new(ShapeKind::L);
        block.rotate_cw();
        block.rotate_cw();
        block.move_by(10, 2);
        block.reset();
        assert_eq!(block, Block::new(ShapeKind::L));
    }
}

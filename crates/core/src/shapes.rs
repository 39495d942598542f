//! Shapes module - tetromino rotation tables and start offsets
//!
//! Every shape is a static table of rotation states, each state listing the
//! four occupied cells relative to the block's offset as `(row, column)`.
//! Rotation is a table lookup: there is no kick table, a rotation that
//! collides is simply undone by the caller.

use crate::types::{Position, ShapeKind};

/// Cells of one rotation state, relative to the block offset
pub type ShapeCells = [Position; 4];

const fn p(row: i32, column: i32) -> Position {
    Position::new(row, column)
}

/// I shape: four states, spawns one row above the grid so its bar lands on row 0
const I_STATES: [ShapeCells; 4] = [
    [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
    [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
    [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
    [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
];

const J_STATES: [ShapeCells; 4] = [
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 0)],
];

const L_STATES: [ShapeCells; 4] = [
    [p(0, 2), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 0)],
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
];

/// O shape: a single state, rotation is a no-op
const O_STATES: [ShapeCells; 1] = [[p(0, 0), p(0, 1), p(1, 0), p(1, 1)]];

const S_STATES: [ShapeCells; 4] = [
    [p(0, 1), p(0, 2), p(1, 0), p(1, 1)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
    [p(1, 1), p(1, 2), p(2, 0), p(2, 1)],
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
];

const T_STATES: [ShapeCells; 4] = [
    [p(0, 1), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 1)],
];

const Z_STATES: [ShapeCells; 4] = [
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
    [p(0, 2), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 0)],
];

/// Rotation states of a shape, state 0 being the spawn orientation
pub fn rotation_states(kind: ShapeKind) -> &'static [ShapeCells] {
    match kind {
        ShapeKind::I => &I_STATES,
        ShapeKind::J => &J_STATES,
        ShapeKind::L => &L_STATES,
        ShapeKind::O => &O_STATES,
        ShapeKind::S => &S_STATES,
        ShapeKind::T => &T_STATES,
        ShapeKind::Z => &Z_STATES,
    }
}

/// Cells for a shape in a given rotation state (wrapped into range)
pub fn get_cells(kind: ShapeKind, rotation: usize) -> &'static ShapeCells {
    let states = rotation_states(kind);
    &states[rotation % states.len()]
}

/// Offset a freshly reset block starts from, sized for a 10-column grid
pub const fn start_offset(kind: ShapeKind) -> Position {
    match kind {
        ShapeKind::I => p(-1, 3),
        ShapeKind::O => p(0, 4),
        ShapeKind::J | ShapeKind::L | ShapeKind::S | ShapeKind::T | ShapeKind::Z => p(0, 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_four_distinct_cells() {
        for kind in ShapeKind::ALL {
            for state in rotation_states(kind) {
                for (i, a) in state.iter().enumerate() {
                    for b in &state[i + 1..] {
                        assert_ne!(a, b, "{:?} has a duplicated cell", kind);
                    }
                }
            }
        }
    }

    #[test]
    fn state_counts() {
        assert_eq!(rotation_states(ShapeKind::O).len(), 1);
        for kind in ShapeKind::ALL.into_iter().filter(|k| *k != ShapeKind::O) {
            assert_eq!(rotation_states(kind).len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn cells_fit_in_a_four_by_four_box() {
        for kind in ShapeKind::ALL {
            for state in rotation_states(kind) {
                assert!(state
                    .iter()
                    .all(|c| (0..4).contains(&c.row) && (0..4).contains(&c.column)));
            }
        }
    }

    #[test]
    fn spawn_cells_land_in_buffer_rows() {
        for kind in ShapeKind::ALL {
            let offset = start_offset(kind);
            for cell in get_cells(kind, 0) {
                let row = cell.row + offset.row;
                assert!((0..2).contains(&row), "{:?} spawns at row {}", kind, row);
            }
        }
    }

    #[test]
    fn get_cells_wraps_rotation() {
        assert_eq!(get_cells(ShapeKind::T, 4), get_cells(ShapeKind::T, 0));
        assert_eq!(get_cells(ShapeKind::O, 3), get_cells(ShapeKind::O, 0));
    }
}

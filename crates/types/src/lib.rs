//! Shared types - positions, shape kinds, commands and events
//!
//! This crate holds the vocabulary shared by the engine and by whatever drives
//! it (a front end, a bot, the headless runner). Everything here is plain data:
//! no grid logic, no randomness.
//!
//! # Grid Coordinates
//!
//! Cells are addressed as `(row, column)`:
//!
//! - **Rows** grow downward, row 0 is the top of the grid
//! - **Columns** grow to the right, column 0 is the left wall
//! - Negative rows are the spawn area above the grid
//!
//! # Grid Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 22 | Grid height, buffer rows included |
//! | `DEFAULT_COLUMNS` | 10 | Grid width |
//! | `BUFFER_ROWS` | 2 | Top rows that must stay empty for play to continue |
//! | `SPAWN_NUDGE_ROWS` | 2 | Rows a fresh block tries to sink on spawn |
//! | `MIN_ROWS` | 6 | Smallest accepted grid height |
//! | `MIN_COLUMNS` | 7 | Smallest accepted grid width |
//!
//! # Scoring
//!
//! Clearing `n` rows in one placement scores `n * LINE_CLEAR_POINTS + n * LINE_CLEAR_BONUS`,
//! i.e. 11 points per row.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, GameAction, Position, ShapeKind};
//!
//! let p = Position::new(3, 4).step(Direction::Down);
//! assert_eq!(p, Position::new(4, 4));
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(ShapeKind::T.id(), 6);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! ```

use serde::{Deserialize, Serialize};

/// Default grid height (22 rows, the top 2 are buffer rows)
pub const DEFAULT_ROWS: usize = 22;

/// Default grid width (10 columns)
pub const DEFAULT_COLUMNS: usize = 10;

/// Number of top rows that end the game when anything settles in them
pub const BUFFER_ROWS: usize = 2;

/// How many single-row nudges a freshly spawned block attempts
pub const SPAWN_NUDGE_ROWS: usize = 2;

/// Smallest grid height accepted by the configuration (buffer rows + a vertical I)
pub const MIN_ROWS: usize = BUFFER_ROWS + 4;

/// Smallest grid width accepted by the configuration (the I block spawns over columns 3..=6)
pub const MIN_COLUMNS: usize = 7;

/// Points per cleared row
pub const LINE_CLEAR_POINTS: u32 = 10;

/// Extra point per cleared row
pub const LINE_CLEAR_BONUS: u32 = 1;

/// A grid cell: `EMPTY_CELL` or the id of the shape that settled there
pub type Cell = u8;

/// Marker for an unoccupied cell
pub const EMPTY_CELL: Cell = 0;

/// A (row, column) pair on the grid
///
/// Positions are values: translation returns a new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Translate by a row/column delta
    pub const fn translate(self, d_row: i32, d_column: i32) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }

    /// Translate one cell in the given direction
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_column) = direction.delta();
        self.translate(d_row, d_column)
    }
}

/// Unit directions on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, column) delta for one step
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The seven tetromino shapes
///
/// Each shape carries a fixed id (1..=7) that is written into the grid when
/// a block of that shape settles. Front ends use the id to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All shapes in id order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Grid id of the shape (never `EMPTY_CELL`)
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::I.id(), 1);
    /// assert_eq!(ShapeKind::Z.id(), 7);
    /// ```
    pub const fn id(self) -> Cell {
        match self {
            ShapeKind::I => 1,
            ShapeKind::J => 2,
            ShapeKind::L => 3,
            ShapeKind::O => 4,
            ShapeKind::S => 5,
            ShapeKind::T => 6,
            ShapeKind::Z => 7,
        }
    }

    /// Inverse of [`ShapeKind::id`]
    pub fn from_id(id: Cell) -> Option<Self> {
        ShapeKind::ALL.iter().copied().find(|kind| kind.id() == id)
    }

    /// Zero-based index into per-shape tables
    pub const fn index(self) -> usize {
        self.id() as usize - 1
    }

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }

    /// Uppercase letter, for text dumps of the grid
    pub fn letter(&self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
            ShapeKind::O => 'O',
            ShapeKind::S => 'S',
            ShapeKind::T => 'T',
            ShapeKind::Z => 'Z',
        }
    }
}

/// Commands accepted by the game state
///
/// These are what a front end (or bot) sends after translating its own
/// input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move block one column left
    MoveLeft,
    /// Move block one column right
    MoveRight,
    /// Move block one row down, settling it if it cannot move
    MoveDown,
    /// Rotate block clockwise
    RotateCw,
    /// Rotate block counter-clockwise
    RotateCcw,
    /// Put the current block aside (or swap with the held one)
    Hold,
    /// Drop block to its landing row and settle it
    HardDrop,
    /// Start over with an empty grid
    Restart,
}

impl GameAction {
    /// Every in-game command (everything except `Restart`)
    pub const GAMEPLAY: [GameAction; 7] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::Hold,
        GameAction::HardDrop,
    ];

    /// Parse action from a camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATECCW"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "harddrop" => Some(GameAction::HardDrop),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::HardDrop => "hardDrop",
            GameAction::Restart => "restart",
        }
    }
}

/// Outcome of a single command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum GameEvent {
    /// The block moved or rotated
    Moved,
    /// The command was illegal (collision, hold locked, game over); nothing changed
    Rejected,
    /// The current block went into the hold slot
    Held,
    /// The block settled and the next one spawned
    Settled { lines_cleared: u32, points: u32 },
    /// The block settled and the game ended
    GameOver { lines_cleared: u32, points: u32 },
    /// The game was reset
    Restarted,
}

impl GameEvent {
    /// Whether the command changed the game state
    pub fn is_applied(&self) -> bool {
        !matches!(self, GameEvent::Rejected)
    }

    /// Rows cleared by this command (0 unless a block settled)
    pub fn lines_cleared(&self) -> u32 {
        match self {
            GameEvent::Settled { lines_cleared, .. } | GameEvent::GameOver { lines_cleared, .. } => {
                *lines_cleared
            }
            _ => 0,
        }
    }
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Grid
//!
//! The playfield is a fixed 4x4 square addressed by `(row, col)`, row-major,
//! with `(0, 0)` in the top-left corner. Every successful move spawns one
//! tile of value [`SPAWN_VALUE`].
//!
//! # Animation Timing
//!
//! Timing values are in milliseconds and measured from the last effective move:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TRANSLATE_MS` | 100 | Tiles slide from their previous cell |
//! | `APPEAR_MS` | 60 | Newly spawned tile grows in after the slide |
//! | `MERGE_OUTRO_MS` | 100 | Merged tile pops after the slide |
//!
//! # Gesture Windows
//!
//! - `MOUSE_SWIPE_MAX_MS`: 300ms - a mouse drag must be released within this window
//! - `TOUCH_SWIPE_MAX_MS`: 200ms - a swipe must end within this window of its last movement
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Offset, Tile, GRID_SIZE};
//!
//! // Directions carry their axis vector (dx, dy).
//! assert_eq!(Direction::Right.vector(), (1, 0));
//! assert_eq!(Direction::from_vector(0, -1), Some(Direction::Up));
//! assert_eq!(Direction::from_vector(1, 1), None);
//!
//! // One step in a direction, as a (row, col) offset.
//! assert_eq!(Direction::Down.step(), Offset::new(1, 0));
//!
//! // Actions carry a stable name for logs.
//! assert_eq!(GameAction::Move(Direction::Left).as_str(), "moveLeft");
//!
//! // Tiles double when merged.
//! assert_eq!(Tile::new(2).doubled(), Some(Tile::new(4)));
//! assert_eq!(Tile::new(Tile::MAX_VALUE).doubled(), None);
//! assert!(Tile::EMPTY.is_empty());
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

use std::ops::{Add, Neg};

/// Board side length (4 columns x 4 rows)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Value of every spawned tile
pub const SPAWN_VALUE: u32 = 2;

/// Tiles placed on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Slide phase of the move animation.
pub const TRANSLATE_MS: u32 = 100;

/// Grow-in phase for a newly spawned tile (starts after the slide).
pub const APPEAR_MS: u32 = 60;

/// Pop phase for a merged tile (starts after the slide).
pub const MERGE_OUTRO_MS: u32 = 100;

/// Total time a move keeps the renderer animating.
pub const ANIMATION_MS: u32 = TRANSLATE_MS + max_u32(APPEAR_MS, MERGE_OUTRO_MS);

/// Mouse drags released later than this after the press are ignored.
pub const MOUSE_SWIPE_MAX_MS: u32 = 300;

/// Swipes that end later than this after their last movement are ignored.
pub const TOUCH_SWIPE_MAX_MS: u32 = 200;

const fn max_u32(a: u32, b: u32) -> u32 {
    if a > b {
        a
    } else {
        b
    }
}


/// The four slide directions
///
/// Each direction maps to an axis vector `(dx, dy)` where `dx` is the column
/// delta and `dy` the row delta; exactly one component is nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Axis vector `(dx, dy)`.
    pub fn vector(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Build a direction from an axis vector.
    ///
    /// Returns `None` unless `dx, dy ∈ {-1, 0, 1}` with exactly one nonzero.
    pub fn from_vector(dx: i8, dy: i8) -> Option<Self> {
        match (dx, dy) {
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            _ => None,
        }
    }

    /// One step in this direction as a `(row, col)` offset.
    pub fn step(&self) -> Offset {
        let (dx, dy) = self.vector();
        Offset::new(dy, dx)
    }

    /// True for left/right (lines are rows).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the axis value is positive (right/down).
    ///
    /// Lines are walked back to front for these directions so the engine
    /// can always compact toward index 0.
    pub fn is_reverse(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Keyboard keys and drag gestures both resolve to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward the given edge
    Move(Direction),
    /// Throw the board away and start a new game
    Restart,
}

impl GameAction {
    /// Convert to camelCase string (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position moved by `offset`, or `None` when it leaves the board.
    pub fn offset_by(&self, offset: Offset) -> Option<Position> {
        let row = self.row as i32 + offset.row as i32;
        let col = self.col as i32 + offset.col as i32;
        let n = GRID_SIZE as i32;
        if row < 0 || row >= n || col < 0 || col >= n {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

/// Signed `(row, col)` displacement between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub row: i8,
    pub col: i8,
}

impl Offset {
    pub const ZERO: Offset = Offset { row: 0, col: 0 };

    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_zero(&self) -> bool {
        self.row == 0 && self.col == 0
    }

    pub fn scaled(&self, k: i8) -> Self {
        Self::new(self.row * k, self.col * k)
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.row, -self.col)
    }
}

/// A single board cell value
///
/// `0` is the empty sentinel; occupied tiles hold a power of two ≥ 2.
/// Values stop growing at [`Tile::MAX_VALUE`]: two tiles at the ceiling
/// sit side by side without merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile(u32);

impl Tile {
    pub const EMPTY: Tile = Tile(0);

    /// Largest value a tile can hold.
    pub const MAX_VALUE: u32 = 1 << 31;

    /// Create a tile holding `value` (`0` yields an empty tile).
    pub fn new(value: u32) -> Self {
        debug_assert!(
            value == 0 || (value >= SPAWN_VALUE && value.is_power_of_two()),
            "invalid tile value {}",
            value
        );
        Tile(value)
    }

    pub fn spawn() -> Self {
        Tile(SPAWN_VALUE)
    }

    /// Raw value; `0` for empty.
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Result of merging two tiles of this value, `None` past the ceiling.
    pub fn doubled(&self) -> Option<Self> {
        self.0.checked_mul(2).map(Tile)
    }

    /// True if `other` would merge into this tile.
    pub fn merges_with(&self, other: Tile) -> bool {
        !self.is_empty() && *self == other && self.doubled().is_some()
    }
}

/// Animation record for one cell after a move
///
/// Offsets point from the pre-move position to the current one. The renderer
/// uses them to slide tiles (and the ghost of a merged tile) into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileMotion {
    /// Displacement from the previous position; zero when the tile stayed.
    pub previous_offset: Offset,
    /// Nonzero only for a merge survivor: where the absorbed tile came from,
    /// extended by one step toward the survivor.
    pub merged_from_offset: Offset,
    /// Set only for the tile spawned by the last move.
    pub is_new: bool,
}

impl TileMotion {
    /// No movement, no merge, not new.
    pub const STILL: TileMotion = TileMotion {
        previous_offset: Offset::ZERO,
        merged_from_offset: Offset::ZERO,
        is_new: false,
    };

    /// Motion carried by a freshly placed tile.
    pub const SPAWNED: TileMotion = TileMotion {
        previous_offset: Offset::ZERO,
        merged_from_offset: Offset::ZERO,
        is_new: true,
    };

    pub fn has_moved(&self) -> bool {
        !self.previous_offset.is_zero()
    }

    pub fn was_merged(&self) -> bool {
        !self.merged_from_offset.is_zero()
    }
}

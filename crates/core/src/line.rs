//! Line accessor - maps board rows/columns onto the engine's canonical line
//!
//! A [`Line`] is one row (left/right) or one column (up/down), walked so that
//! index 0 is the edge tiles slide toward. Right and down walk their line
//! back to front, which is the same as reversing it before the engine runs
//! and reversing it back afterwards.

use crate::types::{Direction, Position, GRID_SIZE};

/// One row or column of the board, viewed in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    direction: Direction,
    index: usize,
}

impl Line {
    pub fn new(direction: Direction, index: usize) -> Self {
        debug_assert!(index < GRID_SIZE);
        Self { direction, index }
    }

    /// All lines a move in `direction` has to process.
    pub fn all(direction: Direction) -> impl Iterator<Item = Line> {
        (0..GRID_SIZE).map(move |index| Line::new(direction, index))
    }

    /// Board position of canonical slot `i`.
    #[inline(always)]
    pub fn position(&self, i: usize) -> Position {
        let along = if self.direction.is_reverse() {
            GRID_SIZE - 1 - i
        } else {
            i
        };
        if self.direction.is_horizontal() {
            Position::new(self.index, along)
        } else {
            Position::new(along, self.index)
        }
    }

    /// Board positions in canonical order.
    pub fn positions(&self) -> [Position; GRID_SIZE] {
        std::array::from_fn(|i| self.position(i))
    }
}

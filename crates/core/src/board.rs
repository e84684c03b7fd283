//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell holds a [`Tile`] (empty or a
//! power of two). Uses a flat array for cache locality and zero-allocation.
//! Coordinates: `(row, col)`, row-major, `(0, 0)` is the top-left cell.
//!
//! The board stores values only. Per-move animation data comes back from
//! [`Board::slide`] / [`Board::move_tiles`] as a [`MoveOutcome`].

use arrayvec::ArrayVec;

use crate::engine::{slide_line, TileSlot};
use crate::line::Line;
use crate::rng::RandomSource;
use crate::spawn::pick_uniform;
use crate::types::{Direction, Position, Tile, TileMotion, CELL_COUNT, GRID_SIZE};

/// Where a tile ended up after a move and how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDiff {
    pub position: Position,
    pub tile: Tile,
    pub motion: TileMotion,
}

/// Result of sliding the board in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// True if any tile moved or merged.
    pub changed: bool,
    /// Number of merges performed.
    pub merges: u32,
    /// Cell that received the new tile, if one was spawned.
    pub spawned: Option<Position>,
    /// One record per occupied cell after the move (spawned tile included).
    pub diffs: ArrayVec<TileDiff, CELL_COUNT>,
}

impl MoveOutcome {
    pub fn diff_at(&self, position: Position) -> Option<&TileDiff> {
        self.diffs.iter().find(|d| d.position == position)
    }
}

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of tiles, row-major order (row * GRID_SIZE + col)
    cells: [Tile; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Tile::EMPTY; CELL_COUNT],
        }
    }

    /// Build a board from raw values (`0` = empty).
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                board.cells[Self::index(Position::new(r, c))] = Tile::new(v);
            }
        }
        board
    }

    /// Raw values (`0` = empty), row by row.
    pub fn to_rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        std::array::from_fn(|r| std::array::from_fn(|c| self.get(Position::new(r, c)).value()))
    }

    #[inline(always)]
    fn index(pos: Position) -> usize {
        debug_assert!(pos.row < GRID_SIZE && pos.col < GRID_SIZE);
        pos.row * GRID_SIZE + pos.col
    }

    /// Tile at `pos`.
    pub fn get(&self, pos: Position) -> Tile {
        self.cells[Self::index(pos)]
    }

    pub fn set(&mut self, pos: Position, tile: Tile) {
        self.cells[Self::index(pos)] = tile;
    }

    /// Rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks_exact(GRID_SIZE)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Positions of all empty cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_empty())
            .map(|(i, _)| Position::new(i / GRID_SIZE, i % GRID_SIZE))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|t| t.is_empty()).count()
    }

    /// Number of occupied cells.
    pub fn occupancy(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Sum of all tile values.
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|t| t.value() as u64).sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().map(Tile::value).max().unwrap_or(0)
    }

    /// Slide every line toward `direction` without spawning.
    pub fn slide(&mut self, direction: Direction) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();

        for line in Line::all(direction) {
            let mut scratch = [TileSlot::EMPTY; GRID_SIZE];
            for (i, slot) in scratch.iter_mut().enumerate() {
                *slot = TileSlot::new(self.get(line.position(i)));
            }

            outcome.changed |= slide_line(&mut scratch, direction);

            for (i, slot) in scratch.iter().enumerate() {
                let pos = line.position(i);
                self.set(pos, slot.tile);
                if slot.tile.is_empty() {
                    continue;
                }
                if slot.motion.was_merged() {
                    outcome.merges += 1;
                }
                outcome.diffs.push(TileDiff {
                    position: pos,
                    tile: slot.tile,
                    motion: slot.motion,
                });
            }
        }

        outcome
    }

    /// Slide toward `direction` and spawn one tile if anything changed.
    pub fn move_tiles<R: RandomSource + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> MoveOutcome {
        let mut outcome = self.slide(direction);
        if outcome.changed {
            outcome.spawned = self.spawn_tile(rng);
            if let Some(pos) = outcome.spawned {
                outcome.diffs.push(TileDiff {
                    position: pos,
                    tile: self.get(pos),
                    motion: TileMotion::SPAWNED,
                });
            }
        }
        outcome
    }

    /// Place a new tile on a uniformly chosen empty cell.
    ///
    /// Returns `None` (and changes nothing) when the board is full.
    pub fn spawn_tile<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        let pos = pick_uniform(self.empty_positions(), rng)?;
        self.set(pos, Tile::spawn());
        Some(pos)
    }

    /// True if some direction would change the board.
    pub fn has_moves(&self) -> bool {
        if self.cells.iter().any(Tile::is_empty) {
            return true;
        }
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let t = self.get(Position::new(r, c));
                if c + 1 < GRID_SIZE && t.merges_with(self.get(Position::new(r, c + 1))) {
                    return true;
                }
                if r + 1 < GRID_SIZE && t.merges_with(self.get(Position::new(r + 1, c))) {
                    return true;
                }
            }
        }
        false
    }

    /// Board flipped left to right.
    pub fn mirrored(&self) -> Self {
        let mut out = Self::new();
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                out.set(
                    Position::new(r, GRID_SIZE - 1 - c),
                    self.get(Position::new(r, c)),
                );
            }
        }
        out
    }

    /// Board with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        let mut out = Self::new();
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                out.set(Position::new(c, r), self.get(Position::new(r, c)));
            }
        }
        out
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [Tile::EMPTY; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

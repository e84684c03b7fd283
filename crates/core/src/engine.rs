//! Move engine - compacts and merges a single line
//!
//! The engine only knows one direction: "slide toward index 0, merges favor
//! the lower index". [`crate::line`] maps rows, columns and reversed lines onto
//! that canonical form.
//!
//! The pass is a small state machine over three values:
//!
//! - `src`: the slot being read
//! - `free`: the next slot to write
//! - `skip_merge`: set when `free - 1` already absorbed a tile this pass
//!
//! `skip_merge` is what turns `[2, 2, 2, 2]` into `[4, 4, -, -]` rather than
//! `[8, -, -, -]`.

use crate::types::{Direction, Tile, TileMotion};

/// A line slot: the tile plus the motion recorded for it during the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileSlot {
    pub tile: Tile,
    pub motion: TileMotion,
}

impl TileSlot {
    pub const EMPTY: TileSlot = TileSlot {
        tile: Tile::EMPTY,
        motion: TileMotion::SPAWNED,
    };

    pub fn new(tile: Tile) -> Self {
        Self {
            tile,
            motion: TileMotion::STILL,
        }
    }

    /// Overwrite the tile and clear all motion.
    ///
    /// The slot is marked new; callers that do not want that must clear
    /// `motion.is_new` themselves.
    pub fn reset(&mut self, tile: Tile) {
        self.tile = tile;
        self.motion = TileMotion::SPAWNED;
    }
}

/// Slide `slots` toward index 0, merging equal neighbours once.
///
/// `direction` is the real direction of the move. It does not affect the
/// compaction, only the sign of the recorded offsets.
///
/// Returns true if any tile moved or merged.
pub fn slide_line(slots: &mut [TileSlot], direction: Direction) -> bool {
    let step = direction.step();
    let mut free = 0usize;
    let mut skip_merge = false;
    let mut moved = false;

    for src in 0..slots.len() {
        let tile = slots[src].tile;
        if tile.is_empty() {
            continue;
        }

        let distance = (src - free) as i8;
        slots[free] = TileSlot {
            tile,
            motion: TileMotion {
                previous_offset: step.scaled(distance),
                ..TileMotion::STILL
            },
        };
        if src != free {
            moved = true;
        }

        let merged = if free > 0 && !skip_merge && slots[free - 1].tile.merges_with(tile) {
            tile.doubled()
        } else {
            None
        };

        if let Some(merged) = merged {
            let incoming = slots[free].motion.previous_offset;
            let survivor = &mut slots[free - 1];
            survivor.tile = merged;
            survivor.motion.merged_from_offset = incoming + step;
            survivor.motion.is_new = false;
            slots[free].reset(Tile::EMPTY);
            skip_merge = true;
            moved = true;
        } else {
            free += 1;
            skip_merge = false;
        }
    }

    // Slots past the cursor may still hold values that were moved away.
    for slot in &mut slots[free..] {
        slot.reset(Tile::EMPTY);
    }

    moved
}

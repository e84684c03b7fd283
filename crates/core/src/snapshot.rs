//! Snapshot module - allocation-free copy of everything the renderer reads

use crate::types::{Tile, TileMotion, GRID_SIZE};

/// One cell as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileView {
    pub tile: Tile,
    pub motion: TileMotion,
}

impl TileView {
    pub fn value(&self) -> u32 {
        self.tile.value()
    }

    pub fn is_empty(&self) -> bool {
        self.tile.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub tiles: [[TileView; GRID_SIZE]; GRID_SIZE],
    /// FNV-1a 64 over the tile values, row-major, little-endian.
    pub board_hash: u64,
    pub episode_id: u32,
    pub seed: u64,
    pub moves: u32,
    pub max_tile: u32,
    pub empty: u8,
    pub game_over: bool,
    /// Milliseconds since the last effective move (animation clock).
    pub since_move_ms: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles = [[TileView::default(); GRID_SIZE]; GRID_SIZE];
        self.board_hash = fnv1a64_tiles(&self.tiles);
        self.episode_id = 0;
        self.seed = 0;
        self.moves = 0;
        self.max_tile = 0;
        self.empty = (GRID_SIZE * GRID_SIZE) as u8;
        self.game_over = false;
        self.since_move_ms = 0;
    }

    /// Recompute `board_hash` from `tiles`.
    pub fn rehash(&mut self) {
        self.board_hash = fnv1a64_tiles(&self.tiles);
    }

    pub fn view(&self, row: usize, col: usize) -> &TileView {
        &self.tiles[row][col]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            tiles: [[TileView::default(); GRID_SIZE]; GRID_SIZE],
            board_hash: 0,
            episode_id: 0,
            seed: 0,
            moves: 0,
            max_tile: 0,
            empty: 0,
            game_over: false,
            since_move_ms: 0,
        };
        s.clear();
        s
    }
}

fn fnv1a64_tiles(tiles: &[[TileView; GRID_SIZE]; GRID_SIZE]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for view in tiles.iter().flatten() {
        for b in view.value().to_le_bytes() {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        }
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_board() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.empty, 16);
        assert!(snap.tiles.iter().flatten().all(TileView::is_empty));
        assert_eq!(snap.board_hash, fnv1a64_tiles(&snap.tiles));
    }

    #[test]
    fn test_hash_changes_with_values_only() {
        let mut snap = GameSnapshot::default();
        let empty_hash = snap.board_hash;

        snap.tiles[0][0].motion = TileMotion::SPAWNED;
        snap.rehash();
        assert_eq!(snap.board_hash, empty_hash);

        snap.tiles[0][0].tile = Tile::new(2);
        snap.rehash();
        assert_ne!(snap.board_hash, empty_hash);
    }
}

//! Game state module - one playing session
//!
//! Ties together the board, the random source and the animation clock.
//! The clock is driven by the caller through [`GameState::tick`], so the
//! whole session stays deterministic for a given seed and tick sequence.

use tracing::{debug, info, trace};

use crate::board::{Board, MoveOutcome};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{GameSnapshot, TileView};
use crate::types::{
    Direction, GameAction, Position, TileMotion, ANIMATION_MS, GRID_SIZE, INITIAL_TILES,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    /// Seed the current episode started from.
    seed: u64,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Motion recorded by the last effective move.
    motion: [[TileMotion; GRID_SIZE]; GRID_SIZE],
    moves: u32,
    clock_ms: u64,
    last_move_ms: u64,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The board starts with two spawned tiles, both marked new so the
    /// renderer grows them in.
    pub fn new(seed: u64) -> Self {
        let mut state = Self::from_board(Board::new(), seed);
        state.spawn_initial_tiles();
        state
    }

    /// Start from an existing board (no tiles are spawned).
    pub fn from_board(board: Board, seed: u64) -> Self {
        Self {
            board,
            rng: SimpleRng::new(seed),
            seed,
            episode_id: 0,
            motion: [[TileMotion::STILL; GRID_SIZE]; GRID_SIZE],
            moves: 0,
            clock_ms: 0,
            last_move_ms: 0,
            game_over: !board.has_moves(),
        }
    }

    fn spawn_initial_tiles(&mut self) {
        for _ in 0..INITIAL_TILES {
            if let Some(pos) = self.board.spawn_tile(&mut self.rng) {
                self.motion[pos.row][pos.col] = TileMotion::SPAWNED;
            }
        }
        self.last_move_ms = self.clock_ms;
        self.game_over = !self.board.has_moves();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Effective moves played in this episode.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn motion_at(&self, pos: Position) -> TileMotion {
        self.motion[pos.row][pos.col]
    }

    /// Apply a game action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).changed,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Slide the board and record the motion for the renderer.
    ///
    /// A move that changes nothing leaves the board, the motion and the
    /// animation clock untouched. The move timestamp is deliberately not
    /// refreshed on a no-op, so a rejected key press never replays the
    /// previous animation.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.board.move_tiles(direction, &mut self.rng);
        if !outcome.changed {
            trace!(direction = direction.as_str(), "move had no effect");
            return outcome;
        }

        self.motion = [[TileMotion::STILL; GRID_SIZE]; GRID_SIZE];
        for diff in &outcome.diffs {
            self.motion[diff.position.row][diff.position.col] = diff.motion;
        }
        self.moves += 1;
        self.last_move_ms = self.clock_ms;

        if outcome.spawned.is_none() {
            debug!(direction = direction.as_str(), "no empty cell left to spawn into");
        }

        self.game_over = !self.board.has_moves();
        if self.game_over {
            info!(
                episode = self.episode_id,
                moves = self.moves,
                max_tile = self.board.max_tile(),
                "game over"
            );
        }
        outcome
    }

    /// Start a new episode seeded from the current RNG stream.
    pub fn restart(&mut self) {
        let seed = self.rng.next_u64();
        let episode_id = self.episode_id.wrapping_add(1);
        info!(
            episode = episode_id,
            seed,
            previous_moves = self.moves,
            "restarting game"
        );

        *self = Self::from_board(Board::new(), seed);
        self.episode_id = episode_id;
        self.spawn_initial_tiles();
    }

    /// Advance the session clock.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms as u64);
    }

    /// Milliseconds since the last effective move (or since the game started).
    pub fn since_last_move_ms(&self) -> u64 {
        self.clock_ms - self.last_move_ms
    }

    /// True while the last move is still being animated.
    pub fn is_animating(&self) -> bool {
        self.since_last_move_ms() < ANIMATION_MS as u64
    }

    /// Copy the renderer-facing state into `snap` without allocating.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                snap.tiles[r][c] = TileView {
                    tile: self.board.get(Position::new(r, c)),
                    motion: self.motion[r][c],
                };
            }
        }
        snap.rehash();
        snap.episode_id = self.episode_id;
        snap.seed = self.seed;
        snap.moves = self.moves;
        snap.max_tile = self.board.max_tile();
        snap.empty = self.board.empty_count() as u8;
        snap.game_over = self.game_over;
        snap.since_move_ms = self.since_last_move_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board transformation and merge engine. It has
//! **zero dependencies** on UI, input or I/O, making it:
//!
//! - **Deterministic**: Same seed and tick sequence produce identical games
//! - **Testable**: The engine runs on a plain line of slots, independent of the board
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Moves do not allocate; diffs live in fixed-capacity buffers
//!
//! # Module Structure
//!
//! - [`engine`]: compact-and-merge pass over one canonical line
//! - [`line`]: maps rows/columns and reversed directions onto that canonical line
//! - [`board`]: 4x4 grid, move orchestration and spawning
//! - [`spawn`]: single-pass uniform choice of an empty cell
//! - [`rng`]: injectable random source and the seeded default generator
//! - [`game_state`]: one playing session with its animation clock
//! - [`snapshot`]: renderer-facing copy of the session
//!
//! # Game Rules
//!
//! - Every tile slides as far as it can toward the chosen edge
//! - Two equal neighbours merge into one tile of double value, once per move
//! - `[2, 2, 2, 2]` slid left becomes `[4, 4, -, -]`, never `[8, -, -, -]`
//! - A move that changes the board spawns exactly one `2` on a random empty cell
//! - A move that changes nothing spawns nothing
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let mut board = Board::from_rows([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]);
//! let mut rng = SimpleRng::new(12345);
//!
//! let outcome = board.move_tiles(Direction::Left, &mut rng);
//! assert!(outcome.changed);
//! assert_eq!(outcome.merges, 1);
//! assert_eq!(board.to_rows()[0][..2], [4, 4]);
//! assert_eq!(board.occupancy(), 3); // two survivors plus the spawned tile
//! ```

pub mod board;
pub mod engine;
pub mod game_state;
pub mod line;
pub mod rng;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome, TileDiff};
pub use engine::{slide_line, TileSlot};
pub use game_state::GameState;
pub use line::Line;
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::{GameSnapshot, TileView};
pub use spawn::pick_uniform;

//! Terminal "game renderer" for 2048.
//!
//! A small, game-oriented rendering layer: the snapshot is drawn into a
//! plain framebuffer which is then flushed to the terminal as a diff.
//!
//! - [`animation`]: slide / appear / merge timeline as pure functions of time
//! - [`fb`]: styled character framebuffer with clipped drawing
//! - [`game_view`]: board, tiles, side panel and overlays
//! - [`renderer`]: crossterm output, raw mode and mouse capture
//! - [`render_throttle`]: when a new frame is worth drawing

pub mod animation;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use animation::{ease_out_back, is_animating, tile_sprites, Sprite};
pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{tile_color, AnchorY, BoardLayout, GameView, Viewport};
pub use render_throttle::{snapshot_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

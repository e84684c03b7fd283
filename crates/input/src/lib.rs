//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` event types. It maps key presses into
//! [`crate::types::GameAction`] and turns drags/swipes into directions.

pub mod gesture;
pub mod map;

pub use tui_2048_types as types;

pub use gesture::{swipe_direction, GestureKind, MouseDrag, SwipeTracker};
pub use map::{handle_key_event, should_quit};

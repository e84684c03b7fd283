//! Drag and swipe gestures.
//!
//! A gesture accumulates pointer movement between press and release and
//! resolves to a [`Direction`] on release:
//!
//! - the axis with the larger absolute delta wins, ties go to the horizontal axis
//! - a gesture with no movement resolves to nothing
//! - a gesture that took too long resolves to nothing
//!
//! Mouse drags measure their window from the press. Touch swipes measure it
//! from the last movement, so a slow start followed by a quick flick still
//! counts.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, GameAction, MOUSE_SWIPE_MAX_MS, TOUCH_SWIPE_MAX_MS};

/// Terminal cells are roughly twice as tall as they are wide.
const ROW_ASPECT: f32 = 2.0;

/// Resolve a movement delta to a direction (screen coordinates, y grows down).
pub fn swipe_direction(dx: f32, dy: f32) -> Option<Direction> {
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    if dx.abs() >= dy.abs() {
        if dx > 0.0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if dy > 0.0 {
        Some(Direction::Down)
    } else {
        Some(Direction::Up)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    MouseDrag,
    TouchSwipe,
}

impl GestureKind {
    pub fn default_max_duration_ms(&self) -> u32 {
        match self {
            GestureKind::MouseDrag => MOUSE_SWIPE_MAX_MS,
            GestureKind::TouchSwipe => TOUCH_SWIPE_MAX_MS,
        }
    }

    /// Touch swipes restart their window on every movement.
    fn restarts_on_move(&self) -> bool {
        matches!(self, GestureKind::TouchSwipe)
    }
}

/// Accumulates one press-move-release gesture.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    kind: GestureKind,
    max_duration_ms: u32,
    started_ms: Option<u64>,
    dx: f32,
    dy: f32,
}

impl SwipeTracker {
    pub fn new(kind: GestureKind) -> Self {
        Self {
            kind,
            max_duration_ms: kind.default_max_duration_ms(),
            started_ms: None,
            dx: 0.0,
            dy: 0.0,
        }
    }

    pub fn with_max_duration_ms(mut self, max_duration_ms: u32) -> Self {
        self.max_duration_ms = max_duration_ms;
        self
    }

    /// True between press and release.
    pub fn is_active(&self) -> bool {
        self.started_ms.is_some()
    }

    /// Pointer pressed.
    pub fn begin(&mut self, now_ms: u64) {
        self.started_ms = Some(now_ms);
        self.dx = 0.0;
        self.dy = 0.0;
    }

    /// Pointer moved by `(dx, dy)`. Ignored outside a gesture.
    pub fn moved(&mut self, dx: f32, dy: f32, now_ms: u64) {
        if self.started_ms.is_none() {
            return;
        }
        self.dx += dx;
        self.dy += dy;
        if self.kind.restarts_on_move() {
            self.started_ms = Some(now_ms);
        }
    }

    /// Pointer released (or the gesture was cancelled).
    ///
    /// Resolves the gesture and resets the tracker either way.
    pub fn end(&mut self, now_ms: u64) -> Option<Direction> {
        let started = self.started_ms.take()?;
        let (dx, dy) = (self.dx, self.dy);
        self.dx = 0.0;
        self.dy = 0.0;

        let elapsed = now_ms.saturating_sub(started);
        if elapsed >= self.max_duration_ms as u64 {
            return None;
        }
        swipe_direction(dx, dy)
    }
}

/// Turns terminal mouse events into drag gestures.
///
/// Cell deltas are scaled so a vertical drag across one row weighs about
/// as much as a horizontal drag across two columns.
#[derive(Debug, Clone)]
pub struct MouseDrag {
    tracker: SwipeTracker,
    last: Option<(u16, u16)>,
}

impl MouseDrag {
    pub fn new(max_duration_ms: u32) -> Self {
        Self {
            tracker: SwipeTracker::new(GestureKind::MouseDrag).with_max_duration_ms(max_duration_ms),
            last: None,
        }
    }

    /// Feed one mouse event; returns an action when a drag completes.
    pub fn handle(&mut self, event: &MouseEvent, now_ms: u64) -> Option<GameAction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.tracker.begin(now_ms);
                self.last = Some((event.column, event.row));
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.track_to(event.column, event.row, now_ms);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.track_to(event.column, event.row, now_ms);
                self.last = None;
                self.tracker.end(now_ms).map(GameAction::Move)
            }
            _ => None,
        }
    }

    fn track_to(&mut self, column: u16, row: u16, now_ms: u64) {
        let Some((last_col, last_row)) = self.last else {
            return;
        };
        let dx = column as f32 - last_col as f32;
        let dy = (row as f32 - last_row as f32) * ROW_ASPECT;
        if dx != 0.0 || dy != 0.0 {
            self.tracker.moved(dx, dy, now_ms);
        }
        self.last = Some((column, row));
    }
}

impl Default for MouseDrag {
    fn default() -> Self {
        Self::new(MOUSE_SWIPE_MAX_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_dominant_axis_wins() {
        assert_eq!(swipe_direction(10.0, 3.0), Some(Direction::Right));
        assert_eq!(swipe_direction(-10.0, 3.0), Some(Direction::Left));
        assert_eq!(swipe_direction(2.0, 9.0), Some(Direction::Down));
        assert_eq!(swipe_direction(2.0, -9.0), Some(Direction::Up));
    }

    #[test]
    fn test_tie_goes_horizontal() {
        assert_eq!(swipe_direction(5.0, 5.0), Some(Direction::Right));
        assert_eq!(swipe_direction(-5.0, 5.0), Some(Direction::Left));
    }

    #[test]
    fn test_no_movement_is_no_swipe() {
        assert_eq!(swipe_direction(0.0, 0.0), None);
    }

    #[test]
    fn test_quick_drag_resolves() {
        let mut t = SwipeTracker::new(GestureKind::MouseDrag);
        t.begin(1000);
        t.moved(-20.0, 4.0, 1100);
        assert_eq!(t.end(1200), Some(Direction::Left));
        assert!(!t.is_active());
    }

    #[test]
    fn test_slow_drag_is_ignored() {
        let mut t = SwipeTracker::new(GestureKind::MouseDrag);
        t.begin(1000);
        t.moved(0.0, 30.0, 1290);
        assert_eq!(t.end(1300), None);

        // The failed drag leaves no movement behind for the next one.
        t.begin(2000);
        t.moved(-5.0, 0.0, 2010);
        assert_eq!(t.end(2020), Some(Direction::Left));
    }

    #[test]
    fn test_touch_window_restarts_on_move() {
        let mut t = SwipeTracker::new(GestureKind::TouchSwipe);
        t.begin(0);
        t.moved(0.0, -40.0, 500);
        // 150ms since the last movement, 650ms since the press.
        assert_eq!(t.end(650), Some(Direction::Up));

        let mut t = SwipeTracker::new(GestureKind::TouchSwipe);
        t.begin(0);
        t.moved(0.0, -40.0, 100);
        assert_eq!(t.end(300), None);
    }

    #[test]
    fn test_end_without_begin() {
        let mut t = SwipeTracker::new(GestureKind::MouseDrag);
        t.moved(10.0, 0.0, 5);
        assert_eq!(t.end(10), None);
    }

    #[test]
    fn test_mouse_drag_from_terminal_events() {
        let mut drag = MouseDrag::default();
        assert_eq!(drag.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), 0), None);
        assert_eq!(drag.handle(&mouse(MouseEventKind::Drag(MouseButton::Left), 14, 5), 20), None);
        assert_eq!(
            drag.handle(&mouse(MouseEventKind::Up(MouseButton::Left), 18, 6), 40),
            Some(GameAction::Move(Direction::Right))
        );
    }

    #[test]
    fn test_mouse_rows_are_scaled() {
        // Three columns right, two rows down: 3 vs 4 after scaling.
        let mut drag = MouseDrag::default();
        drag.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), 0);
        assert_eq!(
            drag.handle(&mouse(MouseEventKind::Up(MouseButton::Left), 13, 7), 50),
            Some(GameAction::Move(Direction::Down))
        );
    }

    #[test]
    fn test_click_without_drag_does_nothing() {
        let mut drag = MouseDrag::default();
        drag.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 3), 0);
        assert_eq!(drag.handle(&mouse(MouseEventKind::Up(MouseButton::Left), 3, 3), 30), None);
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut drag = MouseDrag::default();
        assert_eq!(drag.handle(&mouse(MouseEventKind::Down(MouseButton::Right), 3, 3), 0), None);
        assert_eq!(drag.handle(&mouse(MouseEventKind::Up(MouseButton::Left), 20, 3), 10), None);
    }
}
